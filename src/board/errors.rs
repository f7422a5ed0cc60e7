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
//! Errors used by the `Board` and its coordinate type.

use thiserror::Error;

use crate::island::{Island, IslandType};

/// Error returned when constructing a coordinate that is off the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate ({row}, {col}) is out of bounds")]
pub struct InvalidCoordinate {
    /// Row that was requested.
    row: u8,
    /// Column that was requested.
    col: u8,
}

impl InvalidCoordinate {
    /// Create an [`InvalidCoordinate`] for the given out-of-bounds pair.
    pub(super) fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The row that was requested.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// The column that was requested.
    pub fn col(&self) -> u8 {
        self.col
    }
}

/// Error returned when a placement intersects an island of a different type
/// already on the board.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{island_type} island overlaps an island already on the board")]
pub struct OverlapError {
    /// Type the placement was for.
    island_type: IslandType,
    /// The island that was not placed.
    island: Island,
}

impl OverlapError {
    /// Create an [`OverlapError`] for the island that was rejected.
    pub(super) fn new(island_type: IslandType, island: Island) -> Self {
        Self {
            island_type,
            island,
        }
    }

    /// Type of the island that was rejected.
    pub fn island_type(&self) -> IslandType {
        self.island_type
    }

    /// The island that was rejected.
    pub fn island(&self) -> &Island {
        &self.island
    }

    /// Extract the rejected island from this error.
    pub fn into_island(self) -> Island {
        self.island
    }
}
