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
use std::{convert::TryFrom, fmt, ops::RangeInclusive};

use crate::board::errors::InvalidCoordinate;

/// Range of valid row and column values for a board.
pub const BOARD_RANGE: RangeInclusive<u8> = 1..=10;

/// The coordinates of a single cell in the board.
///
/// Rows and columns are 1-based and bounded by [`BOARD_RANGE`]. Construction
/// through [`Coordinate::new`] is the only place bounds are checked: every
/// other component trusts that a `Coordinate` it is handed is on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Row of the cell, counted from the top.
    row: u8,
    /// Column of the cell, counted from the left.
    col: u8,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`. Fails if
    /// either falls outside [`BOARD_RANGE`].
    pub fn new(row: u8, col: u8) -> Result<Self, InvalidCoordinate> {
        if BOARD_RANGE.contains(&row) && BOARD_RANGE.contains(&col) {
            Ok(Self { row, col })
        } else {
            Err(InvalidCoordinate::new(row, col))
        }
    }

    /// Row of this cell.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column of this cell.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Offset this coordinate down by `rows` and right by `cols`, failing if
    /// the result leaves the board.
    pub fn offset(self, rows: u8, cols: u8) -> Result<Self, InvalidCoordinate> {
        Self::new(self.row.saturating_add(rows), self.col.saturating_add(cols))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(u8, u8)> for Coordinate {
    type Error = InvalidCoordinate;

    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn try_from((row, col): (u8, u8)) -> Result<Self, InvalidCoordinate> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (u8, u8) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}
