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

//! Layer raster editing operations.

use super::brushmask::BrushMask;
use super::color::{Pixel, ALPHA_CHANNEL};
use super::rasterop::{self, u8_mult};
use super::rectiter::RectIterator;
use super::{Color, Image8, Rectangle, Transform, CANVAS_SIZE};

/// What a brush stamp does to the pixels under it.
#[derive(Copy, Clone)]
pub enum StampMode {
    Paint(Color),
    Erase,
}

/// Stamp spacing along a stroke, in pixels. Soft stamps need denser
/// spacing than hard ones or the overlap pattern becomes visible
/// as banding.
pub fn stamp_spacing(radius: f32, hardness: f32) -> f32 {
    let density = if hardness < 50.0 { 0.15 } else { 0.25 };
    (radius * density).max(1.0)
}

/// Draw a single brush stamp centered on (x, y).
/// Stamps partially or fully outside the raster are cropped away.
pub fn draw_stamp(raster: &mut Image8, x: f32, y: f32, stamp: &BrushMask, mode: StampMode) {
    let d = stamp.diameter as i32;
    let r = d / 2;
    let left = x.round() as i32 - r;
    let top = y.round() as i32 - r;

    let rect = match Rectangle::new(left, top, d, d).cropped(raster.size()) {
        Some(rect) => rect,
        None => return,
    };
    let maskrect = rect.offset(-left, -top);

    let stride = stamp.diameter as usize;
    let maskrows = RectIterator::from_rectangle(&stamp.mask, stride, &maskrect);

    match mode {
        StampMode::Paint(color) => {
            let pixel = color.as_pixel();
            for (destrow, maskrow) in raster.rect_iter_mut(&rect).zip(maskrows) {
                rasterop::mask_blend(destrow, pixel, maskrow);
            }
        }
        StampMode::Erase => {
            for (destrow, maskrow) in raster.rect_iter_mut(&rect).zip(maskrows) {
                rasterop::mask_erase(destrow, maskrow);
            }
        }
    }
}

/// Stamp a line segment from `from` (exclusive) to `to` (inclusive),
/// interpolating enough intermediate stamps that consecutive impressions
/// overlap seamlessly. Returns the number of stamps drawn.
pub fn draw_stroke_segment(
    raster: &mut Image8,
    from: (f32, f32),
    to: (f32, f32),
    stamp: &BrushMask,
    spacing: f32,
    mode: StampMode,
) -> u32 {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let dist = (dx * dx + dy * dy).sqrt();

    let steps = (dist / spacing).ceil().max(1.0) as u32;
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        draw_stamp(raster, from.0 + dx * t, from.1 + dy * t, stamp, mode);
    }
    steps
}

/// Render a placed source bitmap onto a canvas-sized raster.
///
/// The bitmap is scaled by `transform.scale`, rotated about the canvas
/// center and offset by `(transform.x, transform.y)`, sampling bilinearly.
/// The result is source-over composited, so this serves both the
/// live placement preview (over a composite) and the commit path
/// (over a blank scratch raster).
pub fn draw_image_transformed(dest: &mut Image8, src: &Image8, transform: &Transform) {
    if src.is_null() || transform.scale <= 0.0 {
        return;
    }

    let half = CANVAS_SIZE as f32 / 2.0;
    let cx = half + transform.x;
    let cy = half + transform.y;
    let theta = transform.rotation.to_radians();
    let (sin, cos) = theta.sin_cos();
    let inv_scale = 1.0 / transform.scale;

    let half_w = src.width as f32 / 2.0;
    let half_h = src.height as f32 / 2.0;

    // Bound the blit to the transformed bitmap's footprint; the rotated
    // box is conservatively covered by a circle of its half-diagonal.
    let reach = (half_w * half_w + half_h * half_h).sqrt() * transform.scale + 1.0;
    let bounds = Rectangle::new(
        (cx - reach).floor() as i32,
        (cy - reach).floor() as i32,
        (reach * 2.0).ceil() as i32 + 1,
        (reach * 2.0).ceil() as i32 + 1,
    );
    let rect = match bounds.cropped(dest.size()) {
        Some(rect) => rect,
        None => return,
    };

    for dy in rect.y..=rect.bottom() {
        let row = dy as usize * dest.width;
        for dx in rect.x..=rect.right() {
            // Inverse-map the destination pixel center into bitmap space
            let u = dx as f32 + 0.5 - cx;
            let v = dy as f32 + 0.5 - cy;
            let sx = (u * cos + v * sin) * inv_scale + half_w;
            let sy = (-u * sin + v * cos) * inv_scale + half_h;

            let sample = sample_bilinear(src, sx - 0.5, sy - 0.5);
            if sample[ALPHA_CHANNEL] == 0 {
                continue;
            }

            let dp = &mut dest.pixels[row + dx as usize];
            let keep = 255 - sample[ALPHA_CHANNEL] as u32;
            for (d, s) in dp.iter_mut().zip(sample.iter()) {
                *d = (*s as u32 + u8_mult(*d as u32, keep)) as u8;
            }
        }
    }
}

/// Bilinear sample of a premultiplied raster; out-of-bounds taps
/// contribute transparent black.
fn sample_bilinear(img: &Image8, x: f32, y: f32) -> Pixel {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let tap = |ix: i64, iy: i64| -> [f32; 4] {
        if ix < 0 || iy < 0 || ix >= img.width as i64 || iy >= img.height as i64 {
            return [0.0; 4];
        }
        let p = img.pixel_at(ix as usize, iy as usize);
        [p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32]
    };

    let x0 = x0 as i64;
    let y0 = y0 as i64;
    let p00 = tap(x0, y0);
    let p10 = tap(x0 + 1, y0);
    let p01 = tap(x0, y0 + 1);
    let p11 = tap(x0 + 1, y0 + 1);

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = p00[c] + (p10[c] - p00[c]) * fx;
        let btm = p01[c] + (p11[c] - p01[c]) * fx;
        out[c] = (top + (btm - top) * fy + 0.5) as u8;
    }
    out
}
