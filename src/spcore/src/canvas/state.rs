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

//! The canvas facade: layer stack, history, stroke and placement
//! sessions behind one API, with texture invalidation wired through.

use super::compositor::{Compositor, TextureSink};
use super::drawing::{BrushParams, DrawingSession, Tool};
use super::history::History;
use super::input::TouchPoint;
use super::transform::{PendingImage, QualityReport, TransformSession};
use crate::paint::{
    editlayer, BrushMaskCache, Image8, LayerID, LayerStack, UvMask, CANVAS_SIZE,
};
use crate::CoreError;

pub struct CanvasState {
    layers: LayerStack,
    history: History,
    stamps: BrushMaskCache,
    uvmask: Option<UvMask>,
    drawing: DrawingSession,
    placement: TransformSession,
    compositor: Compositor,
    sink: Option<Box<dyn TextureSink>>,
    /// Guards against re-entrant history operations while a restore is
    /// being applied.
    restoring: bool,
}

impl CanvasState {
    pub fn new() -> CanvasState {
        let layers = LayerStack::new();
        let history = History::new(&layers);
        CanvasState {
            layers,
            history,
            stamps: BrushMaskCache::new(),
            uvmask: None,
            drawing: DrawingSession::new(),
            placement: TransformSession::new(),
            compositor: Compositor::new(),
            sink: None,
            restoring: false,
        }
    }

    /// Attach the texture invalidation handle (the 3D viewport's side
    /// of the contract). Without one, edits still work but nothing is
    /// notified.
    pub fn set_texture_sink(&mut self, sink: Box<dyn TextureSink>) {
        self.sink = Some(sink);
    }

    fn notify(&mut self, forced: bool) {
        if let Some(sink) = self.sink.as_mut() {
            self.compositor.notify(sink.as_mut(), forced);
        }
    }

    fn commit(&mut self) {
        if !self.restoring {
            self.history.snapshot(&self.layers);
        }
    }

    // --- Stencil ---------------------------------------------------

    /// Install the garment's UV stencil. All subsequent painting is
    /// confined to its opaque region.
    pub fn set_stencil(&mut self, stencil: &Image8) -> Result<(), CoreError> {
        if stencil.is_null() {
            return Err(CoreError::InvalidImage("empty stencil"));
        }
        self.uvmask = Some(UvMask::build(stencil));
        self.notify(true);
        Ok(())
    }

    /// Remove the stencil; painting becomes unconstrained.
    pub fn clear_stencil(&mut self) {
        self.uvmask = None;
        self.notify(true);
    }

    pub fn uv_mask(&self) -> Option<&UvMask> {
        self.uvmask.as_ref()
    }

    // --- Stroke lifecycle ------------------------------------------

    pub fn start_stroke(&mut self, tool: Tool) {
        self.drawing.begin(&self.layers, tool);
    }

    /// Feed a pointer sample, in canvas coordinates.
    pub fn stroke_to(&mut self, x: f32, y: f32, brush: &BrushParams) {
        let changed = self.drawing.paint(
            &mut self.layers,
            &mut self.stamps,
            self.uvmask.as_ref(),
            x,
            y,
            brush,
        );
        if changed {
            self.notify(false);
        }
    }

    /// Finish the stroke. Commits to history only if the stroke
    /// actually painted, so taps on empty space are not undo steps.
    pub fn end_stroke(&mut self) {
        if self.drawing.end() {
            self.commit();
            self.notify(true);
        }
    }

    /// The pointer left the canvas mid-gesture. Treated as a stroke end:
    /// whatever was painted so far stays and commits.
    pub fn cancel_stroke(&mut self) {
        self.end_stroke();
    }

    pub fn is_stroking(&self) -> bool {
        self.drawing.is_active()
    }

    // --- Layer management ------------------------------------------

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn set_active_layer(&mut self, id: LayerID) {
        self.layers.set_active(id);
    }

    /// Add an empty drawing layer. Not itself an undoable step: the
    /// layer only becomes observable once something is painted on it.
    pub fn add_drawing_layer(&mut self) -> LayerID {
        self.layers.add_drawing_layer()
    }

    pub fn toggle_layer_visibility(&mut self, id: LayerID) {
        if self.layers.toggle_visibility(id) {
            self.notify(true);
        }
    }

    pub fn set_layer_opacity(&mut self, id: LayerID, opacity: f32) {
        if self.layers.set_opacity(id, opacity) {
            self.notify(true);
        }
    }

    pub fn move_layer_up(&mut self, id: LayerID) {
        if self.layers.move_up(id) {
            self.notify(true);
        }
    }

    pub fn move_layer_down(&mut self, id: LayerID) {
        if self.layers.move_down(id) {
            self.notify(true);
        }
    }

    pub fn delete_layer(&mut self, id: LayerID) {
        if self.layers.delete(id) {
            self.commit();
            self.notify(true);
        }
    }

    pub fn clear_active_layer(&mut self) {
        if self.layers.clear_active() {
            self.commit();
            self.notify(true);
        }
    }

    /// Reset to a single white base layer. The pre-reset state remains
    /// one undo away.
    pub fn clear_all_layers(&mut self) {
        self.layers.clear_all();
        self.commit();
        self.notify(true);
    }

    // --- History ----------------------------------------------------

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) {
        if self.restoring {
            return;
        }
        self.restoring = true;
        if let Some(stack) = self.history.undo() {
            self.layers = stack;
            self.notify(true);
        }
        self.restoring = false;
    }

    pub fn redo(&mut self) {
        if self.restoring {
            return;
        }
        self.restoring = true;
        if let Some(stack) = self.history.redo() {
            self.layers = stack;
            self.notify(true);
        }
        self.restoring = false;
    }

    // --- Image placement ---------------------------------------------

    /// Begin placing an imported bitmap over the canvas.
    pub fn set_pending_image(&mut self, bitmap: Image8) -> Result<(), CoreError> {
        self.placement.set_image(bitmap)?;
        self.notify(true);
        Ok(())
    }

    pub fn pending_image(&self) -> Option<&PendingImage> {
        self.placement.pending()
    }

    pub fn image_quality(&self) -> Option<QualityReport> {
        self.placement.quality()
    }

    pub fn start_image_drag(&mut self, x: f32, y: f32, touches: &[TouchPoint]) {
        self.placement.start_drag(x, y, touches);
    }

    /// Move or pinch the pending image. Throttled like stroke samples.
    pub fn drag_image(&mut self, x: f32, y: f32, touches: &[TouchPoint]) {
        if self.placement.drag(x, y, touches) {
            self.notify(false);
        }
    }

    pub fn stop_image_drag(&mut self) {
        self.placement.stop_drag();
    }

    /// Slider-driven scale for the pending image.
    pub fn set_image_scale(&mut self, scale: f32) {
        if self.placement.set_scale(scale) {
            self.notify(false);
        }
    }

    /// Slider-driven rotation for the pending image, in degrees.
    pub fn set_image_rotation(&mut self, degrees: f32) {
        if self.placement.set_rotation(degrees) {
            self.notify(false);
        }
    }

    /// Commit the pending placement: render it through the UV mask into
    /// a new image layer, as one atomic undo step. Returns the new
    /// layer's ID.
    pub fn apply_image(&mut self) -> Result<LayerID, CoreError> {
        let pending = self.placement.take().ok_or(CoreError::NoPendingImage)?;

        let size = CANVAS_SIZE as usize;
        let mut rendered = Image8::new(size, size);
        editlayer::draw_image_transformed(&mut rendered, &pending.bitmap, &pending.transform);
        if let Some(mask) = &self.uvmask {
            mask.apply_clip(&mut rendered);
        }

        let id = self.layers.add_image_layer(pending.bitmap, pending.transform);
        if let Some(layer) = self.layers.get_mut(id) {
            layer.raster = rendered;
        }

        self.commit();
        self.notify(true);
        Ok(id)
    }

    /// Abandon the pending image without committing anything.
    pub fn cancel_image(&mut self) {
        if self.placement.cancel() {
            self.notify(true);
        }
    }

    // --- Output -------------------------------------------------------

    /// The flattened canvas, as uploaded to the garment texture.
    pub fn composite(&self) -> Image8 {
        self.compositor.composite(&self.layers)
    }

    /// The flattened canvas with editing overlays (pending image,
    /// stencil guide), as shown on the 2D editing surface.
    pub fn composite_preview(&self) -> Image8 {
        self.compositor
            .composite_preview(&self.layers, self.placement.pending(), self.uvmask.as_ref())
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::color::WHITE_PIXEL;
    use crate::paint::Color;

    fn stroke(state: &mut CanvasState, from: (f32, f32), to: (f32, f32)) {
        let brush = BrushParams::default();
        state.start_stroke(Tool::Draw);
        state.stroke_to(from.0, from.1, &brush);
        state.stroke_to(to.0, to.1, &brush);
        state.end_stroke();
    }

    #[test]
    fn test_stroke_paints_and_commits() {
        let mut state = CanvasState::new();
        stroke(&mut state, (100.0, 100.0), (200.0, 100.0));

        assert_eq!(state.layers().layer_count(), 2);
        assert!(state.can_undo());

        let comp = state.composite();
        assert_eq!(comp.pixel_at(150, 100), Color::BLACK.as_pixel());
    }

    #[test]
    fn test_empty_stroke_is_not_an_undo_step() {
        let mut state = CanvasState::new();
        state.start_stroke(Tool::Draw);
        state.end_stroke();
        assert!(!state.can_undo());
    }

    #[test]
    fn test_undo_restores_previous_composite() {
        let mut state = CanvasState::new();
        stroke(&mut state, (100.0, 100.0), (200.0, 100.0));

        state.undo();
        let comp = state.composite();
        assert_eq!(comp.uniform_value(), Some(WHITE_PIXEL));
        assert!(state.can_redo());

        state.redo();
        let comp = state.composite();
        assert_eq!(comp.pixel_at(150, 100), Color::BLACK.as_pixel());
    }

    #[test]
    fn test_apply_image_creates_layer_and_undo_step() {
        let mut state = CanvasState::new();
        let mut bitmap = Image8::new(64, 64);
        bitmap.fill(Color::rgb8(0, 0, 255).as_pixel());

        state.set_pending_image(bitmap).unwrap();
        let id = state.apply_image().unwrap();
        assert!(state.pending_image().is_none());
        assert!(state.layers().get(id).is_some());
        assert!(state.can_undo());

        let c = CANVAS_SIZE as usize / 2;
        assert_eq!(
            state.composite().pixel_at(c, c),
            Color::rgb8(0, 0, 255).as_pixel()
        );
    }

    #[test]
    fn test_apply_without_pending_image_fails() {
        let mut state = CanvasState::new();
        assert!(matches!(
            state.apply_image(),
            Err(CoreError::NoPendingImage)
        ));
    }
}
