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
//! Record of the coordinates a player has guessed.

use std::collections::HashSet;

use crate::board::{Coordinate, GuessOutcome};

/// The guesses one player has made against the opponent's board, split into
/// hits and misses.
///
/// The two sets stay disjoint as long as each coordinate is recorded with a
/// single outcome, which holds whenever the outcomes come from
/// [`Board::guess`][crate::board::Board::guess]: an island's cells never
/// move, so the same coordinate cannot resolve as a hit once and a miss
/// later. Callers that want to refuse duplicate guesses outright can ask
/// [`Guesses::contains`] first.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Guesses {
    /// Coordinates that hit an island.
    hits: HashSet<Coordinate>,

    /// Coordinates that landed in open sea.
    misses: HashSet<Coordinate>,
}

impl Guesses {
    /// Construct an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a guess at the given coordinate. Recording the
    /// same coordinate again with the same outcome changes nothing.
    pub fn record(&mut self, outcome: GuessOutcome, coordinate: Coordinate) {
        if outcome.is_hit() {
            self.hits.insert(coordinate);
        } else {
            self.misses.insert(coordinate);
        }
    }

    /// Whether the given coordinate has been recorded, as either a hit or a
    /// miss.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.hits.contains(&coordinate) || self.misses.contains(&coordinate)
    }

    /// Iterate over the recorded coordinates that hit an island.
    pub fn hits(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.hits.iter().copied()
    }

    /// Iterate over the recorded coordinates that missed.
    pub fn misses(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.misses.iter().copied()
    }
}
