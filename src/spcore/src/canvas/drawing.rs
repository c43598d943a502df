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

//! Stroke state tracking between pointer-down and pointer-up.

use super::input::{distance, MIN_DRAW_DISTANCE};
use crate::paint::editlayer::{self, StampMode};
use crate::paint::{BrushMaskCache, Color, LayerID, LayerKind, LayerStack, UvMask};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Tool {
    Draw,
    Erase,
}

#[derive(Copy, Clone, Debug)]
pub struct BrushParams {
    pub color: Color,
    /// Stamp radius in canvas pixels.
    pub radius: f32,
    /// Edge hardness, 0-100.
    pub hardness: f32,
}

impl Default for BrushParams {
    fn default() -> Self {
        BrushParams {
            color: Color::BLACK,
            radius: 10.0,
            hardness: 80.0,
        }
    }
}

enum StrokeState {
    Idle,
    /// A pointer is down. `target` is the layer receiving stamps; None
    /// means no drawing layer exists yet and one will be created lazily
    /// at the first sample that actually lands on paintable surface, so
    /// gestures that never touch the garment leave no empty layer behind.
    Active {
        tool: Tool,
        target: Option<LayerID>,
    },
}

/// Tracks one stroke gesture from begin to end and applies its samples
/// to the layer stack.
pub struct DrawingSession {
    state: StrokeState,
    last_point: Option<(f32, f32)>,
    painted: bool,
}

impl DrawingSession {
    pub fn new() -> DrawingSession {
        DrawingSession {
            state: StrokeState::Idle,
            last_point: None,
            painted: false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, StrokeState::Active { .. })
    }

    /// Pointer down. Resolves the target layer: erasing always targets
    /// the active layer whatever its kind, drawing targets the active
    /// layer only if it is a drawing layer and otherwise defers layer
    /// creation to the first paintable sample.
    pub fn begin(&mut self, stack: &LayerStack, tool: Tool) {
        let target = match tool {
            Tool::Erase => Some(stack.active_id()),
            Tool::Draw => stack
                .active_layer()
                .filter(|l| l.kind() == LayerKind::Drawing)
                .map(|l| l.id()),
        };
        self.state = StrokeState::Active { tool, target };
        self.last_point = None;
        self.painted = false;
    }

    /// Feed one pointer sample in canvas coordinates. Returns true if
    /// any pixels changed.
    pub fn paint(
        &mut self,
        stack: &mut LayerStack,
        stamps: &mut BrushMaskCache,
        mask: Option<&UvMask>,
        x: f32,
        y: f32,
        brush: &BrushParams,
    ) -> bool {
        let (tool, target) = match &mut self.state {
            StrokeState::Active { tool, target } => (*tool, target),
            StrokeState::Idle => return false,
        };

        let to = (x, y);
        let from = self.last_point;
        if let Some(from) = from {
            if distance(from, to) < MIN_DRAW_DISTANCE {
                return false;
            }
        }

        if target.is_none() {
            // Drawing with no drawing layer yet: only a sample on the
            // garment surface is allowed to create one.
            let paintable = mask.map_or(true, |m| m.is_paintable(x, y));
            if !paintable {
                self.last_point = Some(to);
                return false;
            }
            *target = Some(stack.add_drawing_layer());
        }
        let id = match *target {
            Some(id) => id,
            None => return false,
        };
        let layer = match stack.get_mut(id) {
            Some(layer) => layer,
            None => return false,
        };

        let stamp = stamps.stamp(brush.radius, brush.hardness);
        let mode = match tool {
            Tool::Draw => StampMode::Paint(brush.color),
            Tool::Erase => StampMode::Erase,
        };
        match from {
            None => editlayer::draw_stamp(&mut layer.raster, x, y, stamp, mode),
            Some(from) => {
                let spacing = editlayer::stamp_spacing(brush.radius, brush.hardness);
                editlayer::draw_stroke_segment(&mut layer.raster, from, to, stamp, spacing, mode);
            }
        }

        // Paint is confined to the garment by reclipping the whole layer;
        // erasing is exempt so stray pixels can always be removed.
        if tool == Tool::Draw {
            if let Some(mask) = mask {
                mask.apply_clip(&mut layer.raster);
            }
        }

        self.last_point = Some(to);
        self.painted = true;
        true
    }

    /// Pointer up (or the pointer left the canvas). Returns true if the
    /// stroke painted anything, i.e. whether it needs a history commit.
    pub fn end(&mut self) -> bool {
        let painted = self.painted && self.is_active();
        self.state = StrokeState::Idle;
        self.last_point = None;
        self.painted = false;
        painted
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::color::ZERO_PIXEL;

    #[test]
    fn test_draw_creates_layer_lazily() {
        let mut stack = LayerStack::new();
        let mut stamps = BrushMaskCache::new();
        let mut session = DrawingSession::new();
        let brush = BrushParams::default();

        session.begin(&stack, Tool::Draw);
        assert_eq!(stack.layer_count(), 1);

        assert!(session.paint(&mut stack, &mut stamps, None, 100.0, 100.0, &brush));
        assert_eq!(stack.layer_count(), 2);
        assert_eq!(
            stack.active_layer().unwrap().kind(),
            LayerKind::Drawing
        );
        assert!(session.end());
    }

    #[test]
    fn test_gesture_without_samples_creates_nothing() {
        let stack = LayerStack::new();
        let mut session = DrawingSession::new();

        session.begin(&stack, Tool::Draw);
        assert!(!session.end());
        assert_eq!(stack.layer_count(), 1);
    }

    #[test]
    fn test_close_samples_are_dropped() {
        let mut stack = LayerStack::new();
        let mut stamps = BrushMaskCache::new();
        let mut session = DrawingSession::new();
        let brush = BrushParams::default();

        session.begin(&stack, Tool::Draw);
        assert!(session.paint(&mut stack, &mut stamps, None, 100.0, 100.0, &brush));
        // Less than the minimum draw distance away
        assert!(!session.paint(&mut stack, &mut stamps, None, 101.0, 101.0, &brush));
        assert!(session.paint(&mut stack, &mut stamps, None, 110.0, 100.0, &brush));
    }

    #[test]
    fn test_existing_drawing_layer_is_reused() {
        let mut stack = LayerStack::new();
        let mut stamps = BrushMaskCache::new();
        let mut session = DrawingSession::new();
        let brush = BrushParams::default();
        let d1 = stack.add_drawing_layer();

        session.begin(&stack, Tool::Draw);
        session.paint(&mut stack, &mut stamps, None, 100.0, 100.0, &brush);
        assert_eq!(stack.layer_count(), 2);
        assert_eq!(stack.active_id(), d1);
    }

    #[test]
    fn test_erase_targets_base_layer() {
        let mut stack = LayerStack::new();
        let mut stamps = BrushMaskCache::new();
        let mut session = DrawingSession::new();
        let brush = BrushParams::default();

        session.begin(&stack, Tool::Erase);
        assert!(session.paint(&mut stack, &mut stamps, None, 100.0, 100.0, &brush));
        assert_eq!(stack.layer_count(), 1);
        let base = stack.active_layer().unwrap();
        assert_eq!(base.raster.pixel_at(100, 100), ZERO_PIXEL);
    }
}
