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

//! Conversions between the canvas raster format (premultiplied RGBA)
//! and the `image` crate's straight-alpha buffers, used at the import
//! and export boundaries.

use crate::paint::color::*;
use crate::paint::Image8;
use image::RgbaImage;

pub fn to_canvas_image(img: &RgbaImage) -> Image8 {
    let mut canvas = Image8::new(img.width() as usize, img.height() as usize);

    let pixels = bytemuck::cast_slice::<_, Pixel>(img.as_raw());

    // Premultiply pixel values
    canvas
        .pixels
        .iter_mut()
        .zip(pixels.iter())
        .for_each(|(d, s)| {
            let a = s[3] as u32;
            d[RED_CHANNEL] = u8_mult(s[0] as u32, a);
            d[GREEN_CHANNEL] = u8_mult(s[1] as u32, a);
            d[BLUE_CHANNEL] = u8_mult(s[2] as u32, a);
            d[ALPHA_CHANNEL] = s[3];
        });

    canvas
}

pub fn from_canvas_image(img: &Image8) -> RgbaImage {
    let mut rgba = Vec::with_capacity(img.width * img.height * 4);

    // Unpremultiply pixel values
    for px in img.pixels.iter() {
        let a = px[ALPHA_CHANNEL] as u32;
        let a = if a > 0 { (255 * 255 + a / 2) / a } else { 0 };

        rgba.push(u8_mult(px[RED_CHANNEL] as u32, a));
        rgba.push(u8_mult(px[GREEN_CHANNEL] as u32, a));
        rgba.push(u8_mult(px[BLUE_CHANNEL] as u32, a));
        rgba.push(px[ALPHA_CHANNEL]);
    }

    image::RgbaImage::from_raw(img.width as u32, img.height as u32, rgba)
        .expect("buffer sized from image dimensions")
}

fn u8_mult(a: u32, b: u32) -> u8 {
    let c = a * b + 0x80;
    (((c >> 8) + c) >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premultiply_roundtrip() {
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, image::Rgba([200, 100, 50, 128]));
        src.put_pixel(1, 0, image::Rgba([255, 255, 255, 0]));

        let canvas = to_canvas_image(&src);
        // Premultiplied values are scaled by alpha
        assert_eq!(canvas.pixel_at(0, 0)[ALPHA_CHANNEL], 128);
        assert!(canvas.pixel_at(0, 0)[RED_CHANNEL] < 200);
        // Fully transparent premultiplies to zero
        assert_eq!(canvas.pixel_at(1, 0), [0, 0, 0, 0]);

        let back = from_canvas_image(&canvas);
        let px = back.get_pixel(0, 0).0;
        // Unpremultiplication is lossy by at most a rounding step
        assert!((px[0] as i32 - 200).abs() <= 1);
        assert!((px[1] as i32 - 100).abs() <= 1);
        assert!((px[2] as i32 - 50).abs() <= 1);
        assert_eq!(px[3], 128);
    }
}
