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
//! Island shapes and per-island hit tracking.

use std::collections::HashSet;

use crate::board::Coordinate;

pub use self::{
    errors::{InvalidPosition, UnknownIslandType},
    shape::IslandType,
};

mod errors;
mod shape;

/// One placed island: the fixed set of cells the shape occupies, and the
/// subset of those cells that have been hit.
///
/// The coordinate set is fixed at construction; only the hit set grows, one
/// guessed cell at a time. An island whose every cell has been hit is
/// forested.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Island {
    /// Cells occupied by this island.
    coordinates: HashSet<Coordinate>,

    /// Cells of this island that have been hit by a guess.
    hit_coordinates: HashSet<Coordinate>,
}

impl Island {
    /// Construct an island of the given type with its shape projected from
    /// `anchor`, the upper-left corner of the shape's bounding box.
    ///
    /// Fails if any cell of the shape falls off the board; a partially
    /// built island is never returned.
    pub fn new(island_type: IslandType, anchor: Coordinate) -> Result<Self, InvalidPosition> {
        let offsets = island_type.offsets();
        let mut coordinates = HashSet::with_capacity(offsets.len());
        for &(rows, cols) in offsets {
            let coordinate = anchor
                .offset(rows, cols)
                .map_err(|_| InvalidPosition::new(island_type, anchor))?;
            coordinates.insert(coordinate);
        }
        Ok(Self {
            coordinates,
            hit_coordinates: HashSet::new(),
        })
    }

    /// Whether the given cell is part of this island.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.coordinates.contains(&coordinate)
    }

    /// Whether this island and `other` occupy at least one common cell.
    pub fn overlaps(&self, other: &Island) -> bool {
        !self.coordinates.is_disjoint(&other.coordinates)
    }

    /// Apply a guess to this island.
    ///
    /// If the coordinate is one of the island's cells, marks it hit and
    /// returns true; re-guessing a cell that is already hit also returns
    /// true and changes nothing. A coordinate outside the island returns
    /// false and leaves the island untouched.
    pub fn register_guess(&mut self, coordinate: Coordinate) -> bool {
        if self.coordinates.contains(&coordinate) {
            self.hit_coordinates.insert(coordinate);
            true
        } else {
            false
        }
    }

    /// Whether every cell of this island has been hit.
    pub fn is_forested(&self) -> bool {
        self.hit_coordinates == self.coordinates
    }

    /// Iterate over the cells occupied by this island.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coordinates.iter().copied()
    }

    /// Iterate over the cells of this island that have been hit.
    pub fn hit_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.hit_coordinates.iter().copied()
    }
}
