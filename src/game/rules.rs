// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! The state machine gating which game actions are legal.

use enumflags2::BitFlags;
use thiserror::Error;

use crate::game::Player;

/// Error returned when an action is not permitted in the current state.
///
/// Carries no detail beyond the rejection itself; the caller already knows
/// what it asked for.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("action is not permitted in the current game state")]
pub struct NotPermitted;

/// Overall progress of a game session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum State {
    /// The session exists but the second player has not joined yet.
    Initialized,
    /// Both players are present and placing their islands.
    PlayersSet,
    /// Player 1 may guess a coordinate.
    Player1Turn,
    /// Player 2 may guess a coordinate.
    Player2Turn,
    /// The game has been won. Terminal.
    GameOver,
}

/// An action a player or the session attempts to take, checked against the
/// current [`State`] by [`Rules::check`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    /// The second player joins the session.
    AddPlayer,
    /// The player moves an island around their own board.
    PositionIslands(Player),
    /// The player finalizes their island placement.
    SetIslands(Player),
    /// The player guesses a coordinate on the opponent's board.
    GuessCoordinate {
        /// The player making the guess.
        player: Player,
        /// The win signal reported by
        /// [`Board::guess`](crate::board::Board::guess) for the coordinate:
        /// true iff the guess forested the opponent's last island.
        win: bool,
    },
}

/// The state machine gating which actions are legal at each point in a game
/// session.
///
/// `Rules` knows nothing about board contents. The caller resolves guesses
/// against the opponent's [`Board`](crate::board::Board) and feeds the win
/// signal back in through [`Action::GuessCoordinate`]; everything else the
/// machine decides from its own state. One `Rules` value lives for the
/// duration of one session and is mutated only through [`Rules::check`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rules {
    /// Overall progress of the session.
    state: State,

    /// Players that have finalized their island placement.
    islands_set: BitFlags<Player>,
}

impl Rules {
    /// Construct the rules for a new session.
    pub fn new() -> Self {
        Self {
            state: State::Initialized,
            islands_set: BitFlags::empty(),
        }
    }

    /// Overall progress of the session.
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether the given player has finalized their island placement.
    pub fn islands_set(&self, player: Player) -> bool {
        self.islands_set.contains(player)
    }

    /// Check an action against the current state, advancing the machine if
    /// the action is legal.
    ///
    /// An illegal action fails without changing the machine. The full
    /// transition table:
    ///
    /// | Current | Action | Next |
    /// |---|---|---|
    /// | Initialized | AddPlayer | PlayersSet |
    /// | PlayersSet | PositionIslands(p), p's islands not set | PlayersSet |
    /// | PlayersSet | SetIslands(p) | Player1Turn once both are set, else PlayersSet |
    /// | Player1Turn | GuessCoordinate p1 | GameOver on a win, else Player2Turn |
    /// | Player2Turn | GuessCoordinate p2 | GameOver on a win, else Player1Turn |
    /// | anything else | | rejected |
    pub fn check(&mut self, action: Action) -> Result<(), NotPermitted> {
        let next = match (self.state, action) {
            (State::Initialized, Action::AddPlayer) => State::PlayersSet,
            (State::PlayersSet, Action::PositionIslands(player))
                if !self.islands_set.contains(player) =>
            {
                State::PlayersSet
            }
            (State::PlayersSet, Action::SetIslands(player)) => {
                self.islands_set |= player;
                if self.islands_set.is_all() {
                    State::Player1Turn
                } else {
                    State::PlayersSet
                }
            }
            (
                State::Player1Turn,
                Action::GuessCoordinate {
                    player: Player::P1,
                    win,
                },
            ) => {
                if win {
                    State::GameOver
                } else {
                    State::Player2Turn
                }
            }
            (
                State::Player2Turn,
                Action::GuessCoordinate {
                    player: Player::P2,
                    win,
                },
            ) => {
                if win {
                    State::GameOver
                } else {
                    State::Player1Turn
                }
            }
            _ => {
                log::trace!("rejected {:?} in state {:?}", action, self.state);
                return Err(NotPermitted);
            }
        };
        log::debug!("{:?}: {:?} -> {:?}", action, self.state, next);
        self.state = next;
        Ok(())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
