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

use spcore::canvas::history::MAX_HISTORY;
use spcore::canvas::{BrushParams, CanvasState, Tool};
use spcore::paint::*;

fn brush(color: Color) -> BrushParams {
    BrushParams {
        color,
        radius: 20.0,
        hardness: 100.0,
    }
}

/// Paint one short horizontal stroke through (x, y).
fn stroke(canvas: &mut CanvasState, x: f32, y: f32, color: Color) {
    canvas.start_stroke(Tool::Draw);
    canvas.stroke_to(x - 10.0, y, &brush(color));
    canvas.stroke_to(x + 10.0, y, &brush(color));
    canvas.end_stroke();
}

fn pixel(canvas: &CanvasState, x: usize, y: usize) -> Pixel {
    canvas.composite().pixel_at(x, y)
}

#[test]
fn test_simple_undo() {
    let mut canvas = CanvasState::new();
    let white = Color::WHITE.as_pixel();
    let red = Color::rgb8(255, 0, 0);
    let green = Color::rgb8(0, 255, 0);

    assert_eq!(pixel(&canvas, 100, 100), white);

    // Nothing has happened yet: undo is a no-op
    assert!(!canvas.can_undo());
    canvas.undo();
    assert_eq!(pixel(&canvas, 100, 100), white);

    // First undoable edit
    stroke(&mut canvas, 100.0, 100.0, red);
    assert_eq!(pixel(&canvas, 100, 100), red.as_pixel());

    // Undoing it returns the canvas to white
    canvas.undo();
    assert_eq!(pixel(&canvas, 100, 100), white);

    // Redoing brings the red back
    canvas.redo();
    assert_eq!(pixel(&canvas, 100, 100), red.as_pixel());

    // Undo again, then paint green: the red edit's redo entry is gone
    canvas.undo();
    assert_eq!(pixel(&canvas, 100, 100), white);
    stroke(&mut canvas, 100.0, 100.0, green);
    assert_eq!(pixel(&canvas, 100, 100), green.as_pixel());
    assert!(!canvas.can_redo());

    canvas.undo();
    assert_eq!(pixel(&canvas, 100, 100), white);
    canvas.redo();
    assert_eq!(pixel(&canvas, 100, 100), green.as_pixel());
}

#[test]
fn test_undo_restores_layer_structure() {
    let mut canvas = CanvasState::new();
    let red = Color::rgb8(255, 0, 0);

    stroke(&mut canvas, 100.0, 100.0, red);
    assert_eq!(canvas.layers().layer_count(), 2);
    let drawing_id = canvas.layers().active_id();

    stroke(&mut canvas, 300.0, 100.0, red);
    canvas.delete_layer(drawing_id);
    assert_eq!(canvas.layers().layer_count(), 1);

    // Undoing the delete brings the layer back with its content
    canvas.undo();
    assert_eq!(canvas.layers().layer_count(), 2);
    let layer = canvas.layers().get(drawing_id).unwrap();
    assert_eq!(layer.raster.pixel_at(100, 100), red.as_pixel());
    assert_eq!(layer.raster.pixel_at(300, 100), red.as_pixel());
}

#[test]
fn test_undo_depth_is_bounded() {
    let mut canvas = CanvasState::new();
    let red = Color::rgb8(255, 0, 0);

    // Far more edits than the history retains. The strokes all land on
    // the same drawing layer, created by the first one.
    for i in 0..(MAX_HISTORY + 10) {
        stroke(&mut canvas, 100.0 + i as f32, 100.0, red);
    }

    let mut undos = 0;
    while canvas.can_undo() {
        canvas.undo();
        undos += 1;
    }
    assert_eq!(undos, MAX_HISTORY - 1);

    // The initial blank state has been evicted: the earliest reachable
    // state already contains the first strokes.
    assert_eq!(canvas.layers().layer_count(), 2);
}

#[test]
fn test_clear_all_is_undoable() {
    let mut canvas = CanvasState::new();
    let red = Color::rgb8(255, 0, 0);

    stroke(&mut canvas, 100.0, 100.0, red);
    canvas.clear_all_layers();
    assert_eq!(canvas.layers().layer_count(), 1);
    assert_eq!(pixel(&canvas, 100, 100), Color::WHITE.as_pixel());

    canvas.undo();
    assert_eq!(canvas.layers().layer_count(), 2);
    assert_eq!(pixel(&canvas, 100, 100), red.as_pixel());
}
