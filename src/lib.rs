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
//! Rules and geometry core for Islands, a two-player guessing game played on
//! a 10x10 grid.
//!
//! Each player secretly places one island of each [`IslandType`] on their own
//! board, then the players alternate guessing coordinates on the opponent's
//! board. An island whose every cell has been hit is "forested"; the first
//! player to forest all of the opponent's islands wins.
//!
//! [`board`] holds the per-player values: the validated [`Coordinate`] type,
//! the [`Board`] of placed islands, and the [`Guesses`] record of shots
//! taken against the opponent. [`island`] defines the fixed island shapes
//! and per-island hit tracking. [`game`] provides the [`Rules`] state
//! machine that gates which actions are legal at each point in a session.
//!
//! The crate performs no I/O and holds no session state of its own. An
//! orchestrator owns one [`Rules`] per session and one [`Board`] and
//! [`Guesses`] per player, consults [`Rules::check`] before applying a
//! mutation, and maps the returned errors to whatever it shows its users.
//! All operations are synchronous and either succeed or return an error
//! value; none of them panic on bad input.
//!
//! [`IslandType`]: island::IslandType
//! [`Coordinate`]: board::Coordinate
//! [`Board`]: board::Board
//! [`Guesses`]: board::Guesses
//! [`Rules`]: game::rules::Rules
//! [`Rules::check`]: game::rules::Rules::check

pub mod board;
pub mod game;
pub mod island;
