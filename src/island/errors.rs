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
//! Errors used by island construction and type parsing.

use thiserror::Error;

use crate::{board::Coordinate, island::IslandType};

/// Error returned when parsing a tag that names no island type.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown island type {tag:?}")]
pub struct UnknownIslandType {
    /// The tag that did not match any island type.
    tag: String,
}

impl UnknownIslandType {
    /// Create an [`UnknownIslandType`] for the unmatched tag.
    pub(super) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
        }
    }

    /// The tag that did not match any island type.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Error returned when an island's shape does not fit on the board at the
/// requested anchor.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{island_type} island does not fit on the board at anchor {anchor}")]
pub struct InvalidPosition {
    /// Type of the island that was being constructed.
    island_type: IslandType,
    /// Anchor coordinate the shape was projected from.
    anchor: Coordinate,
}

impl InvalidPosition {
    /// Create an [`InvalidPosition`] for the failed construction.
    pub(super) fn new(island_type: IslandType, anchor: Coordinate) -> Self {
        Self {
            island_type,
            anchor,
        }
    }

    /// Type of the island that was being constructed.
    pub fn island_type(&self) -> IslandType {
        self.island_type
    }

    /// The anchor the shape was projected from.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }
}
