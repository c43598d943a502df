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

pub mod compositor;
pub mod compression;
pub mod drawing;
pub mod history;
pub mod input;
pub mod state;
pub mod transform;

pub use compositor::{Compositor, TextureSink};
pub use drawing::{BrushParams, DrawingSession, Tool};
pub use history::History;
pub use state::CanvasState;
pub use transform::{PendingImage, QualityRating, QualityReport, TransformSession};
