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

//! Pixel blending primitives. All functions operate on premultiplied
//! RGBA pixel rows.

use super::color::{Pixel, ALPHA_CHANNEL};

trait ScratchArray {
    fn into_work(self) -> [u32; 4];
    fn from_work(p: [u32; 4]) -> Self;
}

impl ScratchArray for Pixel {
    fn into_work(self) -> [u32; 4] {
        [
            self[0] as u32,
            self[1] as u32,
            self[2] as u32,
            self[3] as u32,
        ]
    }

    fn from_work(p: [u32; 4]) -> Self {
        [p[0] as u8, p[1] as u8, p[2] as u8, p[3] as u8]
    }
}

pub fn u8_mult(a: u32, b: u32) -> u32 {
    let c = a * b + 0x80;
    ((c >> 8) + c) >> 8
}

/// Source-over blend `over` onto `base` at the given opacity.
pub fn pixel_blend(base: &mut [Pixel], over: &[Pixel], opacity: u8) {
    let o = opacity as u32;

    for (dp, sp) in base.iter_mut().zip(over.iter()) {
        let bp = dp.into_work();
        let src = sp.into_work();
        let a_s = 255 - u8_mult(src[ALPHA_CHANNEL], o);

        let result = [
            u8_mult(src[0], o) + u8_mult(bp[0], a_s),
            u8_mult(src[1], o) + u8_mult(bp[1], a_s),
            u8_mult(src[2], o) + u8_mult(bp[2], a_s),
            u8_mult(src[3], o) + u8_mult(bp[3], a_s),
        ];

        *dp = Pixel::from_work(result);
    }
}

/// Blend a solid color onto `base` through an alpha mask.
/// This is the brush stamp operation.
pub fn mask_blend(base: &mut [Pixel], color: Pixel, mask: &[u8]) {
    debug_assert!(base.len() == mask.len());
    let c = color.into_work();

    for (dp, &m) in base.iter_mut().zip(mask.iter()) {
        let bp = dp.into_work();
        let m = m as u32;
        let a = 255 - m;

        let result = [
            u8_mult(c[0], m) + u8_mult(bp[0], a),
            u8_mult(c[1], m) + u8_mult(bp[1], a),
            u8_mult(c[2], m) + u8_mult(bp[2], a),
            m + u8_mult(bp[3], a),
        ];

        *dp = Pixel::from_work(result);
    }
}

/// Erase `base` alpha through an alpha mask.
/// This is the eraser stamp operation (canvas `destination-out`).
pub fn mask_erase(base: &mut [Pixel], mask: &[u8]) {
    debug_assert!(base.len() == mask.len());

    for (dp, &m) in base.iter_mut().zip(mask.iter()) {
        let mut dest = dp.into_work();
        let a = 255 - m as u32;

        for d in dest.iter_mut() {
            *d = u8_mult(*d, a);
        }
        *dp = Pixel::from_work(dest);
    }
}

/// Keep `base` only where the mask is opaque (canvas `destination-in`).
/// Used to clip painted content to the garment's UV islands.
pub fn mask_clip(base: &mut [Pixel], mask: &[u8]) {
    debug_assert!(base.len() == mask.len());

    for (dp, &m) in base.iter_mut().zip(mask.iter()) {
        let mut dest = dp.into_work();
        let m = m as u32;

        for d in dest.iter_mut() {
            *d = u8_mult(*d, m);
        }
        *dp = Pixel::from_work(dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::color::{WHITE_PIXEL, ZERO_PIXEL};
    use crate::paint::Color;

    #[test]
    fn test_pixel_blend_opaque() {
        let red = Color::rgb8(255, 0, 0).as_pixel();
        let mut base = [WHITE_PIXEL; 3];
        pixel_blend(&mut base, &[red; 3], 255);
        assert_eq!(base, [red; 3]);
    }

    #[test]
    fn test_pixel_blend_transparent_source_is_noop() {
        let mut base = [WHITE_PIXEL; 2];
        pixel_blend(&mut base, &[ZERO_PIXEL; 2], 255);
        assert_eq!(base, [WHITE_PIXEL; 2]);
    }

    #[test]
    fn test_mask_blend_full_coverage() {
        let red = Color::rgb8(255, 0, 0).as_pixel();
        let mut base = [ZERO_PIXEL; 2];
        mask_blend(&mut base, red, &[255, 0]);
        assert_eq!(base[0], red);
        assert_eq!(base[1], ZERO_PIXEL);
    }

    #[test]
    fn test_mask_erase() {
        let mut base = [WHITE_PIXEL; 3];
        mask_erase(&mut base, &[255, 128, 0]);
        assert_eq!(base[0], ZERO_PIXEL);
        assert!(base[1][ALPHA_CHANNEL] > 0 && base[1][ALPHA_CHANNEL] < 255);
        assert_eq!(base[2], WHITE_PIXEL);
    }

    #[test]
    fn test_mask_clip() {
        let mut base = [WHITE_PIXEL; 2];
        mask_clip(&mut base, &[0, 255]);
        assert_eq!(base[0], ZERO_PIXEL);
        assert_eq!(base[1], WHITE_PIXEL);
    }
}
