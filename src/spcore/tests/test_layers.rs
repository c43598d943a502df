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

//! Layer stack behavior through the canvas facade.

use spcore::canvas::{BrushParams, CanvasState, Tool};
use spcore::paint::*;

fn paint_dot(canvas: &mut CanvasState, x: f32, y: f32, color: Color) {
    let brush = BrushParams {
        color,
        radius: 10.0,
        hardness: 100.0,
    };
    canvas.start_stroke(Tool::Draw);
    canvas.stroke_to(x, y, &brush);
    canvas.stroke_to(x + 5.0, y, &brush);
    canvas.end_stroke();
}

#[test]
fn test_layer_ordering_affects_composite() {
    let mut canvas = CanvasState::new();
    let red = Color::rgb8(255, 0, 0);
    let blue = Color::rgb8(0, 0, 255);

    // Two overlapping dots on two drawing layers
    paint_dot(&mut canvas, 200.0, 200.0, red);
    let red_layer = canvas.layers().active_id();
    canvas.add_drawing_layer();
    paint_dot(&mut canvas, 200.0, 200.0, blue);

    // Blue is on top
    assert_eq!(canvas.composite().pixel_at(200, 200), blue.as_pixel());

    // Move the red layer above it
    canvas.move_layer_up(red_layer);
    assert_eq!(canvas.composite().pixel_at(200, 200), red.as_pixel());

    canvas.move_layer_down(red_layer);
    assert_eq!(canvas.composite().pixel_at(200, 200), blue.as_pixel());
}

#[test]
fn test_visibility_and_opacity() {
    let mut canvas = CanvasState::new();
    let red = Color::rgb8(255, 0, 0);

    paint_dot(&mut canvas, 200.0, 200.0, red);
    let id = canvas.layers().active_id();

    canvas.toggle_layer_visibility(id);
    assert_eq!(
        canvas.composite().pixel_at(200, 200),
        Color::WHITE.as_pixel()
    );
    canvas.toggle_layer_visibility(id);
    assert_eq!(canvas.composite().pixel_at(200, 200), red.as_pixel());

    // Half opacity blends the dot with the white base
    canvas.set_layer_opacity(id, 0.5);
    let px = canvas.composite().pixel_at(200, 200);
    assert!(px[0] > 100, "red channel too dim: {:?}", px);
    assert!(px[1] > 100 && px[2] > 100, "white should show through: {:?}", px);
}

#[test]
fn test_base_layer_is_protected() {
    let mut canvas = CanvasState::new();
    let base_id = canvas.layers().active_id();
    paint_dot(&mut canvas, 200.0, 200.0, Color::rgb8(255, 0, 0));

    canvas.delete_layer(base_id);
    canvas.move_layer_up(base_id);
    assert_eq!(canvas.layers().layer_count(), 2);
    assert_eq!(canvas.layers().iter().next().unwrap().id(), base_id);
}

#[test]
fn test_clear_active_layer_is_undoable() {
    let mut canvas = CanvasState::new();
    let red = Color::rgb8(255, 0, 0);

    paint_dot(&mut canvas, 200.0, 200.0, red);
    canvas.clear_active_layer();
    assert_eq!(
        canvas.composite().pixel_at(200, 200),
        Color::WHITE.as_pixel()
    );

    canvas.undo();
    assert_eq!(canvas.composite().pixel_at(200, 200), red.as_pixel());
}

#[test]
fn test_deleting_active_layer_moves_selection_to_top() {
    let mut canvas = CanvasState::new();
    paint_dot(&mut canvas, 100.0, 100.0, Color::rgb8(255, 0, 0));
    let first = canvas.layers().active_id();
    canvas.add_drawing_layer();
    paint_dot(&mut canvas, 200.0, 200.0, Color::rgb8(0, 255, 0));
    let second = canvas.layers().active_id();
    assert_ne!(first, second);

    canvas.delete_layer(second);
    assert_eq!(canvas.layers().active_id(), first);
}
