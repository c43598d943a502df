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

//! Interactive placement of an imported image before it is committed
//! to a layer.

use super::input::{pinch_distance, TouchPoint};
use crate::paint::{Image8, Transform, CANVAS_SIZE};
use crate::CoreError;

pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 4.0;

/// An imported bitmap awaiting placement, plus its current transform.
pub struct PendingImage {
    pub bitmap: Image8,
    pub transform: Transform,
}

/// Placement quality: source pixels per displayed canvas pixel at the
/// current scale. Below 1.0 the image is being upscaled and the print
/// will look soft.
#[derive(Copy, Clone, Debug)]
pub struct QualityReport {
    pub ratio: f32,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum QualityRating {
    Good,
    Acceptable,
    Poor,
}

impl QualityReport {
    pub fn rating(&self) -> QualityRating {
        if self.ratio >= 1.0 {
            QualityRating::Good
        } else if self.ratio >= 0.5 {
            QualityRating::Acceptable
        } else {
            QualityRating::Poor
        }
    }
}

/// Drag, pinch and slider adjustments to a pending image's placement.
///
/// At most one image is pending at a time; importing another replaces
/// the first. The session does not touch the layer stack: committing the
/// placement is the canvas state's job, which takes the pending image
/// out of the session.
pub struct TransformSession {
    pending: Option<PendingImage>,
    dragging: bool,
    drag_origin: (f32, f32),
    last_pinch: f32,
}

impl TransformSession {
    pub fn new() -> TransformSession {
        TransformSession {
            pending: None,
            dragging: false,
            drag_origin: (0.0, 0.0),
            last_pinch: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingImage> {
        self.pending.as_ref()
    }

    /// Begin placing a bitmap. The initial transform centers it and
    /// scales it down just enough to fit the canvas; images smaller
    /// than the canvas start at their natural size.
    pub fn set_image(&mut self, bitmap: Image8) -> Result<(), CoreError> {
        if bitmap.width == 0 || bitmap.height == 0 {
            return Err(CoreError::InvalidImage("zero-dimension bitmap"));
        }

        let canvas = CANVAS_SIZE as f32;
        let fit = (canvas / bitmap.width as f32)
            .min(canvas / bitmap.height as f32)
            .min(1.0);
        self.pending = Some(PendingImage {
            bitmap,
            transform: Transform {
                scale: fit,
                ..Transform::default()
            },
        });
        self.dragging = false;
        self.last_pinch = 0.0;
        Ok(())
    }

    /// Pointer or touch down. A single contact anchors a pan; two
    /// contacts anchor a pinch.
    pub fn start_drag(&mut self, x: f32, y: f32, touches: &[TouchPoint]) {
        let pending = match &self.pending {
            Some(pending) => pending,
            None => return,
        };
        if let Some(d) = pinch_distance(touches) {
            self.last_pinch = d;
        } else {
            self.dragging = true;
            self.drag_origin = (x - pending.transform.x, y - pending.transform.y);
        }
    }

    /// Pointer or touch move. Returns true if the placement changed.
    pub fn drag(&mut self, x: f32, y: f32, touches: &[TouchPoint]) -> bool {
        let pending = match &mut self.pending {
            Some(pending) => pending,
            None => return false,
        };

        if let Some(d) = pinch_distance(touches) {
            let mut changed = false;
            if self.last_pinch > 0.0 {
                let scale = pending.transform.scale * (d / self.last_pinch);
                pending.transform.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
                changed = true;
            }
            self.last_pinch = d;
            return changed;
        }

        if self.dragging {
            pending.transform.x = x - self.drag_origin.0;
            pending.transform.y = y - self.drag_origin.1;
            return true;
        }
        false
    }

    /// Pointer or touch up.
    pub fn stop_drag(&mut self) {
        self.dragging = false;
        self.last_pinch = 0.0;
    }

    /// Slider-driven scale. Returns true if a pending image was updated.
    pub fn set_scale(&mut self, scale: f32) -> bool {
        match &mut self.pending {
            Some(pending) => {
                pending.transform.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
                true
            }
            None => false,
        }
    }

    /// Slider-driven rotation, in degrees.
    pub fn set_rotation(&mut self, degrees: f32) -> bool {
        match &mut self.pending {
            Some(pending) => {
                pending.transform.rotation = degrees;
                true
            }
            None => false,
        }
    }

    /// Estimate the committed image's sharpness at the current scale.
    pub fn quality(&self) -> Option<QualityReport> {
        self.pending.as_ref().map(|pending| QualityReport {
            ratio: 1.0 / pending.transform.scale,
        })
    }

    /// Take the pending image out for committing.
    pub fn take(&mut self) -> Option<PendingImage> {
        self.stop_drag();
        self.pending.take()
    }

    /// Abandon the pending image. Returns true if there was one.
    pub fn cancel(&mut self) -> bool {
        self.stop_drag();
        self.pending.take().is_some()
    }
}

impl Default for TransformSession {
    fn default() -> Self {
        Self::new()
    }
}
