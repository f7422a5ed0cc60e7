use islands_engine::game::{
    rules::{Action, Rules, State},
    Player,
};

/// Every action the machine understands, for exhaustive rejection checks.
fn all_actions() -> Vec<Action> {
    let mut actions = vec![Action::AddPlayer];
    for &player in &[Player::P1, Player::P2] {
        actions.push(Action::PositionIslands(player));
        actions.push(Action::SetIslands(player));
        for &win in &[false, true] {
            actions.push(Action::GuessCoordinate { player, win });
        }
    }
    actions
}

fn placing_rules() -> Rules {
    let mut rules = Rules::new();
    rules.check(Action::AddPlayer).unwrap();
    rules
}

fn p1_turn_rules() -> Rules {
    let mut rules = placing_rules();
    rules.check(Action::SetIslands(Player::P1)).unwrap();
    rules.check(Action::SetIslands(Player::P2)).unwrap();
    rules
}

fn game_over_rules() -> Rules {
    let mut rules = p1_turn_rules();
    rules
        .check(Action::GuessCoordinate {
            player: Player::P1,
            win: true,
        })
        .unwrap();
    rules
}

#[test]
fn new_rules_start_with_nothing_set() {
    let rules = Rules::new();
    assert_eq!(rules.state(), State::Initialized);
    assert!(!rules.islands_set(Player::P1));
    assert!(!rules.islands_set(Player::P2));
}

#[test]
fn initialized_permits_only_add_player() {
    for action in all_actions() {
        let mut rules = Rules::new();
        let result = rules.check(action);
        if action == Action::AddPlayer {
            result.unwrap();
            assert_eq!(rules.state(), State::PlayersSet);
        } else {
            result.unwrap_err();
            assert_eq!(rules, Rules::new());
        }
    }
}

#[test]
fn players_set_permits_positioning_and_setting() {
    for action in all_actions() {
        let mut rules = placing_rules();
        let result = rules.check(action);
        match action {
            Action::PositionIslands(_) | Action::SetIslands(_) => {
                result.unwrap();
                assert_eq!(rules.state(), State::PlayersSet);
            }
            _ => {
                result.unwrap_err();
                assert_eq!(rules, placing_rules());
            }
        }
    }
}

#[test]
fn positioning_is_rejected_after_islands_are_set() {
    let mut rules = placing_rules();
    rules.check(Action::SetIslands(Player::P1)).unwrap();
    assert!(rules.islands_set(Player::P1));
    rules
        .check(Action::PositionIslands(Player::P1))
        .unwrap_err();
    rules.check(Action::PositionIslands(Player::P2)).unwrap();
}

#[test]
fn setting_both_players_islands_starts_the_game() {
    let mut rules = placing_rules();
    rules.check(Action::SetIslands(Player::P2)).unwrap();
    assert_eq!(rules.state(), State::PlayersSet);
    rules.check(Action::SetIslands(Player::P1)).unwrap();
    assert_eq!(rules.state(), State::Player1Turn);
}

#[test]
fn setting_islands_twice_is_harmless() {
    let mut rules = placing_rules();
    rules.check(Action::SetIslands(Player::P1)).unwrap();
    rules.check(Action::SetIslands(Player::P1)).unwrap();
    assert_eq!(rules.state(), State::PlayersSet);
    rules.check(Action::SetIslands(Player::P2)).unwrap();
    assert_eq!(rules.state(), State::Player1Turn);
}

#[test]
fn turn_states_permit_only_the_current_players_guess() {
    for action in all_actions() {
        let mut rules = p1_turn_rules();
        let result = rules.check(action);
        match action {
            Action::GuessCoordinate {
                player: Player::P1, ..
            } => result.unwrap(),
            _ => {
                result.unwrap_err();
                assert_eq!(rules, p1_turn_rules());
            }
        }
    }
}

#[test]
fn turns_alternate_between_players() {
    let mut rules = p1_turn_rules();
    rules
        .check(Action::GuessCoordinate {
            player: Player::P2,
            win: false,
        })
        .unwrap_err();
    rules
        .check(Action::GuessCoordinate {
            player: Player::P1,
            win: false,
        })
        .unwrap();
    assert_eq!(rules.state(), State::Player2Turn);
    rules
        .check(Action::GuessCoordinate {
            player: Player::P1,
            win: false,
        })
        .unwrap_err();
    rules
        .check(Action::GuessCoordinate {
            player: Player::P2,
            win: false,
        })
        .unwrap();
    assert_eq!(rules.state(), State::Player1Turn);
}

#[test]
fn a_winning_guess_ends_the_game() {
    let mut rules = p1_turn_rules();
    rules
        .check(Action::GuessCoordinate {
            player: Player::P1,
            win: true,
        })
        .unwrap();
    assert_eq!(rules.state(), State::GameOver);
}

#[test]
fn game_over_permits_nothing() {
    for action in all_actions() {
        let mut rules = game_over_rules();
        rules.check(action).unwrap_err();
        assert_eq!(rules.state(), State::GameOver);
    }
}

#[test]
fn players_know_their_opponent() {
    assert_eq!(Player::P1.opponent(), Player::P2);
    assert_eq!(Player::P2.opponent(), Player::P1);
}

#[test]
fn players_parse_from_their_tags() {
    assert_eq!("player1".parse::<Player>().unwrap(), Player::P1);
    assert_eq!("player2".parse::<Player>().unwrap(), Player::P2);
    let err = "player3".parse::<Player>().unwrap_err();
    assert_eq!(err.tag(), "player3");
}
