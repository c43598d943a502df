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

//! Linear, snapshot based undo history.
//!
//! Every committed edit captures the whole layer stack as a compressed
//! snapshot. Undo and redo move a cursor through the snapshot list and
//! materialize a fresh stack from the entry under it; committing while
//! the cursor is not at the end discards the redo tail first, so the
//! history is always a single line.

use super::compression::{compress_raster, decompress_raster};
use crate::paint::{Layer, LayerID, LayerMetadata, LayerStack, CANVAS_SIZE};

use tracing::warn;

/// Maximum number of retained snapshots. When the history is full the
/// oldest entry is dropped, so very old states become unreachable.
pub const MAX_HISTORY: usize = 30;

struct LayerSnapshot {
    metadata: LayerMetadata,
    raster: Vec<u8>,
}

/// One frozen canvas state: every layer's metadata and compressed
/// raster, plus the stack bookkeeping needed to resume editing from it.
///
/// Image layer source bitmaps are not captured; a restored image layer
/// keeps its rendered raster but its placement can no longer be
/// re-edited.
pub struct Snapshot {
    layers: Vec<LayerSnapshot>,
    active: LayerID,
    next_id: LayerID,
    drawing_counter: u32,
    image_counter: u32,
}

impl Snapshot {
    fn capture(stack: &LayerStack) -> Snapshot {
        let (drawing_counter, image_counter) = stack.counters();
        Snapshot {
            layers: stack
                .iter()
                .map(|layer| LayerSnapshot {
                    metadata: layer.metadata.clone(),
                    raster: compress_raster(&layer.raster),
                })
                .collect(),
            active: stack.active_id(),
            next_id: stack.next_id(),
            drawing_counter,
            image_counter,
        }
    }

    /// Materialize a layer stack from this snapshot. All layers are
    /// decoded into a detached stack before anything is returned, so a
    /// decode failure leaves no half restored state behind.
    fn restore(&self) -> Option<LayerStack> {
        let size = CANVAS_SIZE as usize;
        let mut layers = Vec::with_capacity(self.layers.len());
        for ls in &self.layers {
            let raster = match decompress_raster(&ls.raster, size, size) {
                Some(raster) => raster,
                None => {
                    warn!("history: could not restore layer {}", ls.metadata.id);
                    return None;
                }
            };
            layers.push(Layer {
                metadata: ls.metadata.clone(),
                raster,
                source: None,
            });
        }

        Some(LayerStack::from_parts(
            layers,
            self.active,
            self.next_id,
            self.drawing_counter,
            self.image_counter,
        ))
    }
}

pub struct History {
    entries: Vec<Snapshot>,
    index: usize,
}

impl History {
    /// Start a history whose first entry is the given initial state,
    /// so the first undo after one edit has somewhere to go.
    pub fn new(stack: &LayerStack) -> History {
        History {
            entries: vec![Snapshot::capture(stack)],
            index: 0,
        }
    }

    /// Record the current state as the newest entry. Any redoable
    /// entries past the cursor are discarded first.
    pub fn snapshot(&mut self, stack: &LayerStack) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Snapshot::capture(stack));
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
        self.index = self.entries.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Step back one entry. Returns the restored stack, or None if
    /// there is nothing to undo to (the cursor does not move on a
    /// failed restore either).
    pub fn undo(&mut self) -> Option<LayerStack> {
        if !self.can_undo() {
            return None;
        }
        let stack = self.entries[self.index - 1].restore()?;
        self.index -= 1;
        Some(stack)
    }

    /// Step forward one entry.
    pub fn redo(&mut self) -> Option<LayerStack> {
        if !self.can_redo() {
            return None;
        }
        let stack = self.entries[self.index + 1].restore()?;
        self.index += 1;
        Some(stack)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
