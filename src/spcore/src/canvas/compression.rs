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

//! Raster serialization for history snapshots.
//!
//! Two encodings:
//!
//! * A layer whose every pixel is the same value (blank layers, the
//!   untouched white base layer) is stored as just that pixel: 4 bytes.
//! * Anything else is the raw premultiplied RGBA bytes, zlib compressed,
//!   prefixed with the uncompressed length as a 32 bit big endian
//!   integer. The prefix lets the decoder verify the payload against
//!   the raster dimensions it expects.

use crate::paint::{Image8, Pixel};

use deflate::deflate_bytes_zlib;
use inflate::inflate_bytes_zlib;
use tracing::warn;

pub fn compress_raster(raster: &Image8) -> Vec<u8> {
    if let Some(pixel) = raster.uniform_value() {
        return pixel.to_vec();
    }

    let raw: &[u8] = bytemuck::cast_slice(&raster.pixels);
    let mut encoded = Vec::with_capacity(raw.len() / 8 + 4);
    encoded.extend_from_slice(&(raw.len() as u32).to_be_bytes());
    encoded.extend_from_slice(&deflate_bytes_zlib(raw));
    encoded
}

/// Decode a raster of known dimensions. Returns None on any kind of
/// corruption; the caller decides whether the containing snapshot is
/// salvageable (it isn't).
pub fn decompress_raster(data: &[u8], width: usize, height: usize) -> Option<Image8> {
    if data.len() < 4 {
        warn!("decompress_raster: truncated data ({} bytes)", data.len());
        return None;
    }

    if data.len() == 4 {
        let pixel: Pixel = [data[0], data[1], data[2], data[3]];
        let mut raster = Image8::new(width, height);
        raster.fill(pixel);
        return Some(raster);
    }

    let expected = width * height * std::mem::size_of::<Pixel>();
    let prefix = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    if prefix != expected {
        warn!(
            "decompress_raster: wrong length (was {}, expected {})",
            prefix, expected
        );
        return None;
    }

    let raw = match inflate_bytes_zlib(&data[4..]) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("decompress_raster: {}", err);
            return None;
        }
    };
    if raw.len() != expected {
        warn!(
            "decompress_raster: decompressed to {} bytes, expected {}",
            raw.len(),
            expected
        );
        return None;
    }

    let pixels: Vec<Pixel> = bytemuck::cast_slice(&raw).to_vec();
    Some(Image8::from_pixels(pixels, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::color::WHITE_PIXEL;

    #[test]
    fn test_uniform_raster_short_form() {
        let mut raster = Image8::new(64, 64);
        raster.fill(WHITE_PIXEL);

        let encoded = compress_raster(&raster);
        assert_eq!(encoded, vec![255, 255, 255, 255]);

        let decoded = decompress_raster(&encoded, 64, 64).unwrap();
        assert_eq!(decoded.pixels, raster.pixels);
    }

    #[test]
    fn test_roundtrip() {
        let mut raster = Image8::new(64, 64);
        raster.pixels[100] = [255, 0, 0, 255];
        raster.pixels[200] = [0, 128, 0, 128];

        let encoded = compress_raster(&raster);
        let decoded = decompress_raster(&encoded, 64, 64).unwrap();
        assert_eq!(decoded.pixels, raster.pixels);
    }

    #[test]
    fn test_corrupt_data_is_rejected() {
        let mut raster = Image8::new(64, 64);
        raster.pixels[100] = [255, 0, 0, 255];
        let encoded = compress_raster(&raster);

        // Wrong dimensions
        assert!(decompress_raster(&encoded, 32, 32).is_none());
        // Truncated
        assert!(decompress_raster(&encoded[..3], 64, 64).is_none());
        // Garbage payload
        let mut garbage = encoded.clone();
        for b in garbage[4..].iter_mut() {
            *b = !*b;
        }
        assert!(decompress_raster(&garbage, 64, 64).is_none());
    }
}
