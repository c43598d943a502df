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

//! Layer flattening and texture invalidation.

use std::time::{Duration, Instant};

use super::transform::PendingImage;
use crate::paint::{editlayer, rasterop, Image8, LayerStack, UvMask, CANVAS_SIZE};

/// Minimum interval between throttled texture invalidations. Mid-stroke
/// updates arrive per pointer sample, far faster than the 3D viewport
/// needs to re-upload.
pub const TEXTURE_UPDATE_INTERVAL: Duration = Duration::from_millis(50);

/// Where "the canvas changed" notifications go. In the application this
/// flags the garment material's texture for re-upload; tests substitute
/// a counter.
pub trait TextureSink {
    /// The canvas changed mid-gesture. Delivery may have been throttled.
    fn mark_dirty(&mut self);
    /// The canvas changed at a boundary the user observes directly
    /// (stroke end, undo, commit). Never throttled.
    fn mark_dirty_immediate(&mut self);
}

/// Flattens the layer stack and rate-limits dirty notifications.
pub struct Compositor {
    last_notify: Option<Instant>,
}

impl Compositor {
    pub fn new() -> Compositor {
        Compositor { last_notify: None }
    }

    /// Flatten the stack bottom-up into a single raster. Hidden and
    /// zero-opacity layers are skipped. This output is what gets
    /// uploaded as the garment texture and what exports see.
    pub fn composite(&self, stack: &LayerStack) -> Image8 {
        let size = CANVAS_SIZE as usize;
        let mut out = Image8::new(size, size);
        for layer in stack.iter().filter(|l| l.is_visible()) {
            let opacity = (layer.metadata.opacity * 255.0) as u8;
            rasterop::pixel_blend(&mut out.pixels, &layer.raster.pixels, opacity);
        }
        out
    }

    /// Flatten for on-screen display: the clean composite, plus the
    /// pending image placement and the stencil guide overlay. Neither
    /// overlay ever appears in `composite` output.
    pub fn composite_preview(
        &self,
        stack: &LayerStack,
        pending: Option<&PendingImage>,
        mask: Option<&UvMask>,
    ) -> Image8 {
        let mut out = self.composite(stack);
        if let Some(pending) = pending {
            editlayer::draw_image_transformed(&mut out, &pending.bitmap, &pending.transform);
        }
        if let Some(mask) = mask {
            mask.draw_guide(&mut out);
        }
        out
    }

    /// Deliver a dirty notification. Forced notifications always go
    /// through and reset the throttle window; unforced ones are dropped
    /// while the window is open.
    pub fn notify(&mut self, sink: &mut dyn TextureSink, forced: bool) {
        let now = Instant::now();
        if forced {
            sink.mark_dirty_immediate();
            self.last_notify = Some(now);
            return;
        }

        let due = self
            .last_notify
            .map_or(true, |last| now.duration_since(last) >= TEXTURE_UPDATE_INTERVAL);
        if due {
            sink.mark_dirty();
            self.last_notify = Some(now);
        }
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::color::WHITE_PIXEL;
    use crate::paint::Color;

    #[derive(Default)]
    struct CountingSink {
        throttled: u32,
        immediate: u32,
    }

    impl TextureSink for CountingSink {
        fn mark_dirty(&mut self) {
            self.throttled += 1;
        }
        fn mark_dirty_immediate(&mut self) {
            self.immediate += 1;
        }
    }

    #[test]
    fn test_composite_starts_from_base() {
        let stack = LayerStack::new();
        let comp = Compositor::new().composite(&stack);
        assert_eq!(comp.uniform_value(), Some(WHITE_PIXEL));
    }

    #[test]
    fn test_hidden_layers_are_skipped() {
        let mut stack = LayerStack::new();
        let d1 = stack.add_drawing_layer();
        let red = Color::rgb8(255, 0, 0).as_pixel();
        stack.get_mut(d1).unwrap().raster.fill(red);

        let compositor = Compositor::new();
        assert_eq!(compositor.composite(&stack).uniform_value(), Some(red));

        stack.toggle_visibility(d1);
        assert_eq!(
            compositor.composite(&stack).uniform_value(),
            Some(WHITE_PIXEL)
        );

        stack.toggle_visibility(d1);
        stack.set_opacity(d1, 0.0);
        assert_eq!(
            compositor.composite(&stack).uniform_value(),
            Some(WHITE_PIXEL)
        );
    }

    #[test]
    fn test_notifications_are_throttled() {
        let mut compositor = Compositor::new();
        let mut sink = CountingSink::default();

        for _ in 0..100 {
            compositor.notify(&mut sink, false);
        }
        // The first goes through; the rest land inside the window
        // (assuming this loop runs in well under the interval)
        assert_eq!(sink.throttled, 1);
        assert_eq!(sink.immediate, 0);
    }

    #[test]
    fn test_forced_notifications_always_deliver() {
        let mut compositor = Compositor::new();
        let mut sink = CountingSink::default();

        compositor.notify(&mut sink, false);
        for _ in 0..5 {
            compositor.notify(&mut sink, true);
        }
        assert_eq!(sink.immediate, 5);
    }
}
