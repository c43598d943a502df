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

use core::cmp::{max, min};

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Size {
        Size { width, height }
    }
}

/// An integer rectangle, used for cropping stamp and image blits
/// to the raster boundaries.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Rectangle {
        assert!(w > 0 && h > 0);
        Rectangle { x, y, w, h }
    }

    pub fn intersected(&self, other: &Rectangle) -> Option<Rectangle> {
        let leftx = max(self.x, other.x);
        let rightx = min(self.x + self.w, other.x + other.w);
        let topy = max(self.y, other.y);
        let btmy = min(self.y + self.h, other.y + other.h);

        if leftx < rightx && topy < btmy {
            Some(Rectangle::new(leftx, topy, rightx - leftx, btmy - topy))
        } else {
            None
        }
    }

    /// Crop this rectangle to a raster of the given size.
    /// Returns None if nothing remains.
    pub fn cropped(&self, size: Size) -> Option<Rectangle> {
        assert!(size.width > 0 && size.height > 0);
        self.intersected(&Rectangle::new(0, 0, size.width, size.height))
    }

    pub fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }

    pub fn offset(&self, x: i32, y: i32) -> Rectangle {
        Rectangle {
            x: self.x + x,
            y: self.y + y,
            w: self.w,
            h: self.h,
        }
    }
}
