// This file is part of Seampaint.
// Copyright (C) 2026 Seampaint contributors
//
// Seampaint is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Seampaint is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Seampaint.  If not, see <https://www.gnu.org/licenses/>.

pub mod canvas;
pub mod conv;
pub mod paint;

use std::fmt;

/// Errors reported across the engine's public API.
///
/// Expected user-level conditions (unknown layer IDs, edits to the locked
/// base layer, out-of-bounds strokes) are silent no-ops and never produce
/// an error; this type covers integration-level misuse and bad input data.
#[derive(Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A supplied bitmap was unusable (e.g. zero-dimension).
    InvalidImage(&'static str),
    /// An image operation was requested with no pending image.
    NoPendingImage,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidImage(why) => write!(f, "invalid image: {}", why),
            CoreError::NoPendingImage => write!(f, "no pending image"),
        }
    }
}

impl std::error::Error for CoreError {}
