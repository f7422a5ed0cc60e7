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
//! Types that make up a single player's side of the game.

use std::collections::HashMap;

use crate::island::{Island, IslandType};

pub use self::{
    coordinate::{Coordinate, BOARD_RANGE},
    errors::{InvalidCoordinate, OverlapError},
    guesses::Guesses,
};

mod coordinate;
mod errors;
mod guesses;

/// Result of a guess on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GuessOutcome {
    /// The guess did not land on any island.
    Miss,
    /// The guess hit an island that is not yet forested.
    Hit,
    /// The guess hit and forested the island of the given type, but the
    /// player has other islands left.
    Forested(IslandType),
    /// The guess hit and forested the island of the given type, and every
    /// island on the board is now forested.
    Win(IslandType),
}

impl GuessOutcome {
    /// Whether the guess landed on an island.
    pub fn is_hit(self) -> bool {
        match self {
            GuessOutcome::Miss => false,
            GuessOutcome::Hit | GuessOutcome::Forested(_) | GuessOutcome::Win(_) => true,
        }
    }

    /// The island type this guess forested, if it forested one.
    pub fn forested(self) -> Option<IslandType> {
        match self {
            GuessOutcome::Miss | GuessOutcome::Hit => None,
            GuessOutcome::Forested(island_type) | GuessOutcome::Win(island_type) => {
                Some(island_type)
            }
        }
    }

    /// Whether this guess forested the last remaining island on the board.
    pub fn is_win(self) -> bool {
        match self {
            GuessOutcome::Win(_) => true,
            _ => false,
        }
    }
}

/// A single player's board: the islands they have placed, keyed by type.
///
/// A board holds at most one island per type, and placement rejects any
/// island that overlaps an island of a different type, so every cell belongs
/// to at most one island.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Board {
    /// Placed islands, keyed by their type.
    islands: HashMap<IslandType, Island>,
}

impl Board {
    /// Construct an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an island on the board.
    ///
    /// Fails if the island overlaps an island of a *different* type that is
    /// already on the board, leaving the board unchanged; the rejected
    /// island can be recovered from the error. Placing a type that is
    /// already on the board replaces the earlier placement, so a player may
    /// shuffle an island around freely before finalizing.
    pub fn place_island(
        &mut self,
        island_type: IslandType,
        island: Island,
    ) -> Result<(), OverlapError> {
        let overlapping = self
            .islands
            .iter()
            .any(|(&placed, existing)| placed != island_type && existing.overlaps(&island));
        if overlapping {
            log::trace!("rejected {} island: overlaps an existing island", island_type);
            return Err(OverlapError::new(island_type, island));
        }
        log::debug!("placed {} island", island_type);
        self.islands.insert(island_type, island);
        Ok(())
    }

    /// Whether every island type has been placed on this board.
    pub fn all_islands_placed(&self) -> bool {
        IslandType::ALL
            .iter()
            .all(|island_type| self.islands.contains_key(island_type))
    }

    /// Resolve a guess against this board.
    ///
    /// Placement keeps islands disjoint, so at most one island can claim the
    /// guessed cell. A hit marks the cell on that island; a miss leaves the
    /// board unchanged. Recording the guess in the guessing player's
    /// [`Guesses`] is left to the caller.
    pub fn guess(&mut self, coordinate: Coordinate) -> GuessOutcome {
        let island_type = match self
            .islands
            .iter_mut()
            .find(|(_, island)| island.contains(coordinate))
        {
            Some((&island_type, island)) => {
                island.register_guess(coordinate);
                island_type
            }
            None => {
                log::debug!("guess {}: miss", coordinate);
                return GuessOutcome::Miss;
            }
        };
        let outcome = if !self.islands[&island_type].is_forested() {
            GuessOutcome::Hit
        } else if self.islands.values().all(Island::is_forested) {
            GuessOutcome::Win(island_type)
        } else {
            GuessOutcome::Forested(island_type)
        };
        log::debug!("guess {}: {:?}", coordinate, outcome);
        outcome
    }

    /// Get the island of the given type, if it has been placed.
    pub fn island(&self, island_type: IslandType) -> Option<&Island> {
        self.islands.get(&island_type)
    }

    /// Iterate over the islands on this board and their types.
    pub fn iter_islands(&self) -> impl Iterator<Item = (IslandType, &Island)> {
        self.islands
            .iter()
            .map(|(&island_type, island)| (island_type, island))
    }
}
