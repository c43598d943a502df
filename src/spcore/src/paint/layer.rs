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

use super::color::WHITE_PIXEL;
use super::{Image8, LayerID, CANVAS_SIZE};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LayerKind {
    /// The background layer. Always present, always at the bottom of the
    /// stack, cannot be deleted or reordered.
    Base,
    /// A freehand paint layer.
    Drawing,
    /// A layer produced by committing a placed image.
    Image,
}

/// Placement of an image on the canvas: offset from the canvas center,
/// uniform scale and rotation in degrees.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

/// The original bitmap and placement an Image layer was committed with,
/// retained so the placement can be re-edited later.
#[derive(Clone)]
pub struct ImageSource {
    pub bitmap: Image8,
    pub transform: Transform,
}

/// Common layer properties
#[derive(Clone, PartialEq, Debug)]
pub struct LayerMetadata {
    pub id: LayerID,
    pub kind: LayerKind,
    pub name: String,
    pub visible: bool,
    pub locked: bool,
    pub opacity: f32,
}

impl LayerMetadata {
    /// A layer is rendered when it's not hidden and its opacity is
    /// greater than zero.
    pub fn is_visible(&self) -> bool {
        self.visible && self.opacity > 0.0
    }
}

#[derive(Clone)]
pub struct Layer {
    pub metadata: LayerMetadata,
    pub raster: Image8,
    pub source: Option<ImageSource>,
}

impl Layer {
    pub(super) fn new(id: LayerID, kind: LayerKind, name: String) -> Layer {
        let mut raster = Image8::new(CANVAS_SIZE as usize, CANVAS_SIZE as usize);
        if kind == LayerKind::Base {
            raster.fill(WHITE_PIXEL);
        }

        Layer {
            metadata: LayerMetadata {
                id,
                kind,
                name,
                visible: true,
                locked: kind == LayerKind::Base,
                opacity: 1.0,
            },
            raster,
            source: None,
        }
    }

    pub fn id(&self) -> LayerID {
        self.metadata.id
    }

    pub fn kind(&self) -> LayerKind {
        self.metadata.kind
    }

    pub fn is_visible(&self) -> bool {
        self.metadata.is_visible()
    }

    /// Erase the layer's content.
    ///
    /// The base layer is refilled with its default white rather than left
    /// transparent, so the garment never shows through to the void.
    pub fn clear(&mut self) {
        if self.metadata.kind == LayerKind::Base {
            self.raster.fill(WHITE_PIXEL);
        } else {
            self.raster.clear();
        }
    }
}
