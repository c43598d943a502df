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

use super::color::Pixel;
use super::rectiter::{MutableRectIterator, RectIterator};
use super::{Rectangle, Size};

/// A flat image buffer
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Image<T>
where
    T: Copy + Default + Eq,
{
    pub pixels: Vec<T>,
    pub width: usize,
    pub height: usize,
}

/// The raster type backing layers, masks and composites.
pub type Image8 = Image<Pixel>;

impl<T> Image<T>
where
    T: Copy + Default + Eq,
{
    pub fn new(width: usize, height: usize) -> Image<T> {
        Image {
            pixels: vec![T::default(); width * height],
            width,
            height,
        }
    }

    pub fn from_pixels(pixels: Vec<T>, width: usize, height: usize) -> Image<T> {
        assert_eq!(pixels.len(), width * height);
        Image {
            pixels,
            width,
            height,
        }
    }

    pub fn is_null(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    pub fn fill(&mut self, value: T) {
        self.pixels.fill(value);
    }

    pub fn clear(&mut self) {
        self.fill(T::default());
    }

    /// Is every pixel the default (transparent) value?
    pub fn is_blank(&self) -> bool {
        let blank = T::default();
        self.pixels.iter().all(|p| *p == blank)
    }

    /// Is every pixel the same value? Used by the snapshot encoder's
    /// solid-color short form.
    pub fn uniform_value(&self) -> Option<T> {
        let first = *self.pixels.first()?;
        self.pixels
            .iter()
            .all(|p| *p == first)
            .then_some(first)
    }

    /// Find the bounding rectangle of the non-default pixels.
    /// Returns None for a fully blank image.
    pub fn opaque_bounds(&self) -> Option<Rectangle> {
        let mut top = self.height;
        let mut btm = 0;
        let mut left = self.width;
        let mut right = 0;

        let blank = T::default();
        for y in 0..self.height {
            let row = y * self.width;
            for (x, px) in self.pixels[row..row + self.width].iter().enumerate() {
                if *px != blank {
                    left = left.min(x);
                    right = right.max(x);
                    top = top.min(y);
                    btm = btm.max(y);
                }
            }
        }

        if top > btm {
            return None;
        }

        Some(Rectangle {
            x: left as i32,
            y: top as i32,
            w: (right - left + 1) as i32,
            h: (btm - top + 1) as i32,
        })
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> T {
        self.pixels[y * self.width + x]
    }

    pub fn rect_iter(&self, rect: &Rectangle) -> RectIterator<'_, T> {
        RectIterator::from_rectangle(&self.pixels, self.width, rect)
    }

    pub fn rect_iter_mut(&mut self, rect: &Rectangle) -> MutableRectIterator<'_, T> {
        MutableRectIterator::from_rectangle(&mut self.pixels, self.width, rect)
    }
}
