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

use std::fmt;
use std::str::FromStr;

/// A premultiplied RGBA pixel.
pub type Pixel = [u8; 4];

pub const RED_CHANNEL: usize = 0;
pub const GREEN_CHANNEL: usize = 1;
pub const BLUE_CHANNEL: usize = 2;
pub const ALPHA_CHANNEL: usize = 3;

pub const ZERO_PIXEL: Pixel = [0; 4];
pub const WHITE_PIXEL: Pixel = [255; 4];

/// An unpremultiplied floating point RGBA color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Convert to a premultiplied pixel
    pub fn as_pixel(&self) -> Pixel {
        let a = self.a.clamp(0.0, 1.0);
        [
            (self.r.clamp(0.0, 1.0) * a * 255.0 + 0.5) as u8,
            (self.g.clamp(0.0, 1.0) * a * 255.0 + 0.5) as u8,
            (self.b.clamp(0.0, 1.0) * a * 255.0 + 0.5) as u8,
            (a * 255.0 + 0.5) as u8,
        ]
    }

    /// Convert a premultiplied pixel back to an unpremultiplied color
    pub fn from_pixel(p: Pixel) -> Color {
        let a = p[ALPHA_CHANNEL] as f32 / 255.0;
        if a <= 0.0 {
            return Color::TRANSPARENT;
        }
        Color {
            r: p[RED_CHANNEL] as f32 / 255.0 / a,
            g: p[GREEN_CHANNEL] as f32 / 255.0 / a,
            b: p[BLUE_CHANNEL] as f32 / 255.0 / a,
            a,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ColorParseError;

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color string not in #RGB, #RRGGBB or #RRGGBBAA format")
    }
}

impl std::error::Error for ColorParseError {}

/// Parse a `#RGB`, `#RRGGBB` or `#RRGGBBAA` string
impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ColorParseError)?.as_bytes();
        let digit = |i: usize| (hex[i] as char).to_digit(16).ok_or(ColorParseError);
        let pair = |i: usize| Ok::<_, ColorParseError>((digit(i)? * 16 + digit(i + 1)?) as u8);

        match hex.len() {
            3 => Ok(Color {
                r: (digit(0)? * 17) as f32 / 255.0,
                g: (digit(1)? * 17) as f32 / 255.0,
                b: (digit(2)? * 17) as f32 / 255.0,
                a: 1.0,
            }),
            6 => Ok(Color::rgb8(pair(0)?, pair(2)?, pair(4)?)),
            8 => Ok(Color {
                a: pair(6)? as f32 / 255.0,
                ..Color::rgb8(pair(0)?, pair(2)?, pair(4)?)
            }),
            _ => Err(ColorParseError),
        }
    }
}
