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

use super::layer::{ImageSource, Layer, LayerKind};
use super::{Image8, LayerID, Transform};

use tracing::warn;

/// The ordered stack of layers making up the canvas.
///
/// Index 0 is the bottom of the paint order and always holds the locked
/// base layer. The stack is never empty and the active layer ID always
/// refers to a layer in the stack.
///
/// Mutating operations on unknown layer IDs are silent no-ops: the UI is
/// expected to disable invalid actions, but the stack stays defensive.
pub struct LayerStack {
    layers: Vec<Layer>,
    active: LayerID,
    next_id: LayerID,
    drawing_counter: u32,
    image_counter: u32,
}

impl LayerStack {
    /// Create a stack with a single white base layer, which becomes
    /// the active layer.
    pub fn new() -> LayerStack {
        let base = Layer::new(1, LayerKind::Base, "Background".into());
        LayerStack {
            active: base.id(),
            layers: vec![base],
            next_id: 2,
            drawing_counter: 0,
            image_counter: 0,
        }
    }

    /// Reassemble a stack from restored parts (history undo/redo).
    pub(crate) fn from_parts(
        layers: Vec<Layer>,
        active: LayerID,
        next_id: LayerID,
        drawing_counter: u32,
        image_counter: u32,
    ) -> LayerStack {
        debug_assert!(!layers.is_empty());
        debug_assert!(layers.iter().any(|l| l.id() == active));
        LayerStack {
            layers,
            active,
            next_id,
            drawing_counter,
            image_counter,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn get(&self, id: LayerID) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id() == id)
    }

    pub fn get_mut(&mut self, id: LayerID) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id() == id)
    }

    fn index_of(&self, id: LayerID) -> Option<usize> {
        self.layers.iter().position(|l| l.id() == id)
    }

    pub fn active_id(&self) -> LayerID {
        self.active
    }

    /// Change the active layer. No-op if the ID is unknown.
    pub fn set_active(&mut self, id: LayerID) {
        if self.get(id).is_some() {
            self.active = id;
        } else {
            warn!("set_active: no such layer {}", id);
        }
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.get(self.active)
    }

    pub fn active_layer_mut(&mut self) -> Option<&mut Layer> {
        let id = self.active;
        self.get_mut(id)
    }

    fn take_id(&mut self) -> LayerID {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn next_id(&self) -> LayerID {
        self.next_id
    }

    pub(crate) fn counters(&self) -> (u32, u32) {
        (self.drawing_counter, self.image_counter)
    }

    /// Add an empty drawing layer on top of the stack and make it active.
    ///
    /// Names come from a counter that only increases (except on a full
    /// reset), so deleting "Drawing 2" never causes a second "Drawing 2".
    pub fn add_drawing_layer(&mut self) -> LayerID {
        self.drawing_counter += 1;
        let name = format!("Drawing {}", self.drawing_counter);
        let layer = Layer::new(self.take_id(), LayerKind::Drawing, name);
        let id = layer.id();
        self.layers.push(layer);
        self.active = id;
        id
    }

    /// Add an image layer on top of the stack and make it active.
    /// The source bitmap and placement are retained on the layer;
    /// the caller renders the placed content into the layer's raster.
    pub fn add_image_layer(&mut self, bitmap: Image8, transform: Transform) -> LayerID {
        self.image_counter += 1;
        let name = format!("Image {}", self.image_counter);
        let mut layer = Layer::new(self.take_id(), LayerKind::Image, name);
        layer.source = Some(ImageSource { bitmap, transform });
        let id = layer.id();
        self.layers.push(layer);
        self.active = id;
        id
    }

    /// Flip a layer's visibility. Returns true if anything changed.
    pub fn toggle_visibility(&mut self, id: LayerID) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.metadata.visible = !layer.metadata.visible;
                true
            }
            None => false,
        }
    }

    /// Set a layer's opacity, clamped to [0, 1]. Returns true if changed.
    pub fn set_opacity(&mut self, id: LayerID, opacity: f32) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.metadata.opacity = opacity.clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }

    /// Swap a layer with the one above it. The base layer never moves.
    pub fn move_up(&mut self, id: LayerID) -> bool {
        match self.index_of(id) {
            Some(i) if i > 0 && i < self.layers.len() - 1 => {
                self.layers.swap(i, i + 1);
                true
            }
            _ => false,
        }
    }

    /// Swap a layer with the one below it. No layer may move below
    /// the base layer.
    pub fn move_down(&mut self, id: LayerID) -> bool {
        match self.index_of(id) {
            Some(i) if i > 1 => {
                self.layers.swap(i, i - 1);
                true
            }
            _ => false,
        }
    }

    /// Remove a layer. Locked (base) and unknown layers are left alone.
    /// If the removed layer was active, the topmost remaining layer
    /// becomes active, so the active selection never dangles.
    pub fn delete(&mut self, id: LayerID) -> bool {
        let i = match self.index_of(id) {
            Some(i) => i,
            None => return false,
        };
        if self.layers[i].metadata.locked {
            warn!("delete: layer {} is locked", id);
            return false;
        }

        self.layers.remove(i);
        if self.active == id {
            // The stack is never empty: the base layer can't be deleted.
            self.active = self.layers.last().expect("base layer missing").id();
        }
        true
    }

    /// Erase the active layer's content (the base layer is refilled
    /// white instead).
    pub fn clear_active(&mut self) -> bool {
        match self.active_layer_mut() {
            Some(layer) => {
                layer.clear();
                true
            }
            None => false,
        }
    }

    /// Full reset: discard every layer, recreate the initial base layer
    /// and reset the name counters.
    pub fn clear_all(&mut self) {
        *self = LayerStack::new();
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_stack() {
        let stack = LayerStack::new();
        assert_eq!(stack.layer_count(), 1);
        let base = stack.active_layer().unwrap();
        assert_eq!(base.kind(), LayerKind::Base);
        assert!(base.metadata.locked);
        assert!(base.is_visible());
    }

    #[test]
    fn test_base_layer_cannot_be_deleted_or_moved() {
        let mut stack = LayerStack::new();
        let base = stack.active_id();
        stack.add_drawing_layer();

        assert!(!stack.delete(base));
        assert!(!stack.move_up(base));
        assert!(!stack.move_down(base));
        assert_eq!(stack.layers[0].id(), base);
    }

    #[test]
    fn test_no_layer_moves_below_base() {
        let mut stack = LayerStack::new();
        let d1 = stack.add_drawing_layer();
        assert!(!stack.move_down(d1));
        assert!(!stack.move_up(d1)); // already topmost
    }

    #[test]
    fn test_delete_reassigns_active_to_topmost() {
        let mut stack = LayerStack::new();
        let d1 = stack.add_drawing_layer();
        let d2 = stack.add_drawing_layer();
        assert_eq!(stack.active_id(), d2);

        assert!(stack.delete(d2));
        assert_eq!(stack.active_id(), d1);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut stack = LayerStack::new();
        stack.add_drawing_layer();
        assert!(!stack.delete(9999));
        assert_eq!(stack.layer_count(), 2);
    }

    #[test]
    fn test_name_counters_are_not_reused() {
        let mut stack = LayerStack::new();
        stack.add_drawing_layer();
        let d2 = stack.add_drawing_layer();
        stack.delete(d2);
        let d3 = stack.add_drawing_layer();
        assert_eq!(stack.get(d3).unwrap().metadata.name, "Drawing 3");
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut stack = LayerStack::new();
        stack.add_drawing_layer();
        stack.add_image_layer(Image8::new(4, 4), Transform::default());
        stack.clear_all();

        assert_eq!(stack.layer_count(), 1);
        assert_eq!(stack.active_layer().unwrap().kind(), LayerKind::Base);
        let d1 = stack.add_drawing_layer();
        assert_eq!(stack.get(d1).unwrap().metadata.name, "Drawing 1");
    }

    #[test]
    fn test_clear_active_refills_base_with_white() {
        use crate::paint::color::WHITE_PIXEL;
        let mut stack = LayerStack::new();
        stack.clear_active();
        let base = stack.active_layer().unwrap();
        assert_eq!(base.raster.uniform_value(), Some(WHITE_PIXEL));
    }

    #[test]
    fn test_move_ordering() {
        let mut stack = LayerStack::new();
        let d1 = stack.add_drawing_layer();
        let d2 = stack.add_drawing_layer();

        assert!(stack.move_up(d1));
        let order: Vec<LayerID> = stack.iter().map(|l| l.id()).skip(1).collect();
        assert_eq!(order, vec![d2, d1]);

        assert!(stack.move_down(d1));
        let order: Vec<LayerID> = stack.iter().map(|l| l.id()).skip(1).collect();
        assert_eq!(order, vec![d1, d2]);
    }
}
