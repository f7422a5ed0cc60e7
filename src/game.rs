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
//! Session-level pieces of the game.
//!
//! [`rules`] provides the state machine that decides which actions are legal
//! at each point in a session. [`Player`] identifies the two participants
//! and doubles as a flag in [`enumflags2::BitFlags`] sets, which the rules
//! machine uses to track which players have finalized their island
//! placement.

use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use thiserror::Error;

pub mod rules;

/// Identifies one of the two players in a session.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Player {
    P1 = 0b01,
    P2 = 0b10,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// The text tag naming this player.
    pub fn tag(self) -> &'static str {
        match self {
            Player::P1 => "player1",
            Player::P2 => "player2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Player {
    type Err = ParsePlayerError;

    /// Parse a player from its text tag, as produced by [`Player::tag`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player1" => Ok(Player::P1),
            "player2" => Ok(Player::P2),
            _ => Err(ParsePlayerError { tag: s.to_owned() }),
        }
    }
}

/// Error returned when parsing a tag that names no player.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown player {tag:?}")]
pub struct ParsePlayerError {
    /// The tag that did not match any player.
    tag: String,
}

impl ParsePlayerError {
    /// The tag that did not match any player.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}
