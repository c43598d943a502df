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

pub mod color;
pub mod editlayer;
pub mod layerstack;
pub mod rasterop;
pub mod rectiter;
pub mod uvmask;

mod brushmask;
mod image;
mod layer;
mod rect;

pub use self::image::{Image, Image8};
pub use brushmask::{compute_alpha, BrushMask, BrushMaskCache};
pub use color::{Color, Pixel};
pub use layer::{ImageSource, Layer, LayerKind, LayerMetadata, Transform};
pub use layerstack::LayerStack;
pub use rect::{Rectangle, Size};
pub use uvmask::UvMask;

/// Side length of every layer raster, in pixels.
///
/// All layers, the UV mask and the composited output share this fixed
/// square resolution.
pub const CANVAS_SIZE: u32 = 1024;

/// Layer IDs are issued by the layer stack and are never reused
/// for the lifetime of the stack.
pub type LayerID = u32;
