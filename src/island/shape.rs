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
use std::{fmt, str::FromStr};

use crate::island::errors::UnknownIslandType;

/// Identifies one of the five fixed island shapes.
///
/// Each type projects a fixed table of `(row, col)` offsets from an anchor
/// coordinate, the upper-left corner of the shape's bounding box. The set of
/// shapes is closed; callers working from text tags go through the
/// [`FromStr`] impl.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IslandType {
    /// Five cells: a 3x2 block with an opening on the middle of its left
    /// edge.
    Atoll,
    /// A single cell.
    Dot,
    /// Four cells in an "L".
    LShape,
    /// Four cells in an offset "S".
    SShape,
    /// Four cells in a 2x2 block.
    Square,
}

impl IslandType {
    /// Every island type, in stable lexicographic order.
    pub const ALL: [IslandType; 5] = [
        IslandType::Atoll,
        IslandType::Dot,
        IslandType::LShape,
        IslandType::SShape,
        IslandType::Square,
    ];

    /// The `(row, col)` offsets of this shape's cells relative to its
    /// anchor.
    pub(crate) fn offsets(self) -> &'static [(u8, u8)] {
        match self {
            IslandType::Atoll => &[(0, 0), (0, 1), (1, 1), (2, 0), (2, 1)],
            IslandType::Dot => &[(0, 0)],
            IslandType::LShape => &[(0, 0), (1, 0), (2, 0), (2, 1)],
            IslandType::SShape => &[(0, 1), (0, 2), (1, 0), (1, 1)],
            IslandType::Square => &[(0, 0), (0, 1), (1, 0), (1, 1)],
        }
    }

    /// The text tag naming this type.
    pub fn tag(self) -> &'static str {
        match self {
            IslandType::Atoll => "atoll",
            IslandType::Dot => "dot",
            IslandType::LShape => "l_shape",
            IslandType::SShape => "s_shape",
            IslandType::Square => "square",
        }
    }
}

impl fmt::Display for IslandType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for IslandType {
    type Err = UnknownIslandType;

    /// Parse an island type from its text tag, as produced by
    /// [`IslandType::tag`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IslandType::ALL
            .iter()
            .copied()
            .find(|island_type| island_type.tag() == s)
            .ok_or_else(|| UnknownIslandType::new(s))
    }
}
