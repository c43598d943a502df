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

use super::Rectangle;

/// Iterator over the rows of a sub-rectangle of a flat row-major buffer.
pub struct RectIterator<'a, T> {
    buf: &'a [T],
    stride: usize,
    x0: usize,
    x1: usize,
    rows: usize,
}

fn test_bounds(buflen: usize, stride: usize, x: usize, y: usize, w: usize, h: usize) {
    // The iterators are safe even when these don't hold; a violation
    // just means a blit was cropped incorrectly by the caller.
    debug_assert!(w > 0);
    debug_assert!(h > 0);
    debug_assert!(x + w <= stride);
    debug_assert!(((y + h - 1) * stride + x + w) <= buflen);
}

impl<'a, T> RectIterator<'a, T> {
    pub fn new(buf: &'a [T], stride: usize, x: usize, y: usize, w: usize, h: usize) -> Self {
        test_bounds(buf.len(), stride, x, y, w, h);
        RectIterator {
            buf: &buf[(y * stride)..],
            stride,
            x0: x,
            x1: x + w,
            rows: h,
        }
    }

    pub fn from_rectangle(buf: &'a [T], stride: usize, r: &Rectangle) -> Self {
        RectIterator::new(
            buf,
            stride,
            r.x as usize,
            r.y as usize,
            r.w as usize,
            r.h as usize,
        )
    }
}

impl<'a, T> Iterator for RectIterator<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rows > 0 {
            self.rows -= 1;
            let slice = &self.buf[self.x0..self.x1];
            if self.rows > 0 {
                self.buf = &self.buf[self.stride..];
            }
            Some(slice)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rows, Some(self.rows))
    }
}

/// Like RectIterator, but yields mutable row slices.
pub struct MutableRectIterator<'a, T: 'a> {
    buf: &'a mut [T],
    stride: usize,
    x0: usize,
    x1: usize,
    rows: usize,
}

impl<'a, T> MutableRectIterator<'a, T> {
    pub fn new(buf: &'a mut [T], stride: usize, x: usize, y: usize, w: usize, h: usize) -> Self {
        test_bounds(buf.len(), stride, x, y, w, h);
        MutableRectIterator {
            buf: &mut buf[(y * stride)..],
            stride,
            x0: x,
            x1: x + w,
            rows: h,
        }
    }

    pub fn from_rectangle(buf: &'a mut [T], stride: usize, r: &Rectangle) -> Self {
        MutableRectIterator::new(
            buf,
            stride,
            r.x as usize,
            r.y as usize,
            r.w as usize,
            r.h as usize,
        )
    }
}

impl<'a, T> Iterator for MutableRectIterator<'a, T> {
    type Item = &'a mut [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rows > 0 {
            self.rows -= 1;
            let buf = std::mem::take(&mut self.buf);
            if self.rows > 0 && buf.len() > self.stride {
                let (row, rest) = buf.split_at_mut(self.stride);
                self.buf = rest;
                Some(&mut row[self.x0..self.x1])
            } else {
                Some(&mut buf[self.x0..self.x1])
            }
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rows, Some(self.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_iter() {
        #[rustfmt::skip]
        let buf = [
            0, 0, 0, 0,
            0, 1, 2, 0,
            0, 3, 4, 0,
            0, 0, 0, 0,
        ];
        let rows: Vec<&[i32]> =
            RectIterator::from_rectangle(&buf, 4, &Rectangle::new(1, 1, 2, 2)).collect();
        assert_eq!(rows, vec![&[1, 2], &[3, 4]]);
    }

    #[test]
    fn test_mutable_rect_iter() {
        let mut buf = vec![0u8; 16];
        for row in MutableRectIterator::from_rectangle(&mut buf, 4, &Rectangle::new(1, 1, 2, 2)) {
            row.iter_mut().for_each(|v| *v = 9);
        }
        #[rustfmt::skip]
        assert_eq!(buf, vec![
            0, 0, 0, 0,
            0, 9, 9, 0,
            0, 9, 9, 0,
            0, 0, 0, 0,
        ]);
    }

    #[test]
    fn test_last_row_at_buffer_end() {
        // The last row of the rectangle may touch the end of the buffer
        let buf = [1, 2, 3, 4];
        let rows: Vec<&[i32]> =
            RectIterator::from_rectangle(&buf, 2, &Rectangle::new(0, 0, 2, 2)).collect();
        assert_eq!(rows, vec![&[1, 2], &[3, 4]]);
    }
}
