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

use super::color::ALPHA_CHANNEL;
use super::rasterop::{mask_clip, u8_mult};
use super::{Image8, CANVAS_SIZE};

/// Opacity of the stencil guide overlay drawn on preview composites.
const GUIDE_OPACITY: u32 = 36;

/// A stencil rasterized once into a canvas-resolution alpha lookup,
/// answering "does this canvas point land on the garment's UV islands".
///
/// Read-only after construction. The canvas operates unconstrained when
/// no mask is present (callers hold an `Option<UvMask>`).
pub struct UvMask {
    alpha: Vec<u8>,
    width: usize,
    height: usize,
}

impl UvMask {
    /// Rasterize a stencil image to canvas resolution, keeping only its
    /// alpha channel. The stencil is sampled nearest-neighbor; UV layouts
    /// are hard-edged so filtering would only blur the boundary.
    pub fn build(stencil: &Image8) -> UvMask {
        let size = CANVAS_SIZE as usize;
        debug_assert!(!stencil.is_null());

        let mut alpha = vec![0u8; size * size];
        for y in 0..size {
            let sy = y * stencil.height / size;
            for x in 0..size {
                let sx = x * stencil.width / size;
                alpha[y * size + x] = stencil.pixel_at(sx, sy)[ALPHA_CHANNEL];
            }
        }

        UvMask {
            alpha,
            width: size,
            height: size,
        }
    }

    /// Is the given canvas point on paintable (garment) surface?
    /// Points outside the canvas are never paintable.
    pub fn is_paintable(&self, x: f32, y: f32) -> bool {
        let ix = x.round() as i64;
        let iy = y.round() as i64;
        if ix < 0 || ix >= self.width as i64 || iy < 0 || iy >= self.height as i64 {
            return false;
        }
        self.alpha[iy as usize * self.width + ix as usize] > 0
    }

    /// Clip a layer raster to the mask (keep-where-opaque), guaranteeing
    /// paint never bleeds outside the UV islands. Erasing is deliberately
    /// never clipped: an eraser must be able to remove any pixel that
    /// exists, wherever it came from.
    pub fn apply_clip(&self, raster: &mut Image8) {
        debug_assert_eq!(raster.pixels.len(), self.alpha.len());
        mask_clip(&mut raster.pixels, &self.alpha);
    }

    /// Draw the stencil as a faint overlay, marking the paintable region
    /// for the user. Preview composites only; exported rasters and layer
    /// content never include this.
    pub fn draw_guide(&self, raster: &mut Image8) {
        debug_assert_eq!(raster.pixels.len(), self.alpha.len());

        for (px, &a) in raster.pixels.iter_mut().zip(self.alpha.iter()) {
            let m = u8_mult(a as u32, GUIDE_OPACITY);
            let keep = 255 - m;
            // Source-over of a premultiplied mid-gray guide tint
            px[0] = (u8_mult(128, m) + u8_mult(px[0] as u32, keep)) as u8;
            px[1] = (u8_mult(128, m) + u8_mult(px[1] as u32, keep)) as u8;
            px[2] = (u8_mult(128, m) + u8_mult(px[2] as u32, keep)) as u8;
            px[3] = (m + u8_mult(px[3] as u32, keep)) as u8;
        }
    }
}
