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

//! Pointer and touch input geometry.

use crate::paint::CANVAS_SIZE;

/// Minimum distance (in canvas pixels) the pointer must travel before
/// another sample is recorded. Suppresses redundant stamps during slow,
/// precise strokes.
pub const MIN_DRAW_DISTANCE: f32 = 3.0;

/// Where the canvas sits on screen. The display size usually differs
/// from the raster's backing-store size.
#[derive(Copy, Clone, Debug)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// A touch contact point in display (client) coordinates.
#[derive(Copy, Clone, Debug)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

/// Map a pointer position in display coordinates to canvas pixel space.
pub fn map_pointer(client_x: f32, client_y: f32, rect: &DisplayRect) -> (f32, f32) {
    debug_assert!(rect.width > 0.0 && rect.height > 0.0);
    (
        (client_x - rect.left) * (CANVAS_SIZE as f32 / rect.width),
        (client_y - rect.top) * (CANVAS_SIZE as f32 / rect.height),
    )
}

/// The primary contact of a multi-touch event, if any.
pub fn primary_touch(touches: &[TouchPoint]) -> Option<&TouchPoint> {
    touches.first()
}

/// Distance between the first two contacts of a pinch gesture.
pub fn pinch_distance(touches: &[TouchPoint]) -> Option<f32> {
    match touches {
        [a, b, ..] => Some((b.x - a.x).hypot(b.y - a.y)),
        _ => None,
    }
}

pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    (b.0 - a.0).hypot(b.1 - a.1)
}
