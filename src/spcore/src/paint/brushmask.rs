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

use std::collections::{HashMap, VecDeque};

/// Stamps kept alive in the cache. Brush size sliders produce a stream of
/// distinct radii, so the cache must be bounded; stamps are cheap to
/// regenerate.
const STAMP_CACHE_CAPACITY: usize = 64;

/// Hardness values are quantized to multiples of this before cache lookup.
const HARDNESS_STEP: f32 = 5.0;

/// The sigma of the Gaussian profile used for minimum-hardness brushes.
const SOFT_SIGMA: f32 = 0.4;

/// Fraction of the radius that stays fully opaque at maximum mid-range
/// hardness.
const SOLID_PORTION: f32 = 0.8;

/// Brush edge opacity profile.
///
/// `distance_ratio` is the distance from the stamp center divided by the
/// brush radius. `hardness` is in the 0-100 range. Three regimes:
/// a step function at full hardness, a Gaussian profile at minimum
/// hardness, and a solid core followed by a smootherstep falloff
/// in between.
pub fn compute_alpha(distance_ratio: f32, hardness: f32) -> f32 {
    if distance_ratio > 1.0 {
        return 0.0;
    }

    if hardness >= 99.0 {
        return 1.0;
    }

    if hardness <= 1.0 {
        let s2 = 2.0 * SOFT_SIGMA * SOFT_SIGMA;
        return (-distance_ratio * distance_ratio / s2).exp().max(0.0);
    }

    let solid = hardness / 100.0 * SOLID_PORTION;
    if distance_ratio <= solid {
        1.0
    } else {
        let t = (distance_ratio - solid) / (1.0 - solid);
        1.0 - smootherstep(t)
    }
}

/// Quintic smoothstep, rising 0 to 1 over t in [0, 1].
fn smootherstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// A rasterized brush stamp: a square alpha mask.
pub struct BrushMask {
    /// Mask side length (2 * radius + 1)
    pub diameter: u32,

    /// Alpha coverage (length is diameter^2)
    pub mask: Vec<u8>,
}

impl BrushMask {
    pub fn new(radius: u32, hardness: u8) -> BrushMask {
        let radius = radius.max(1);
        let diameter = radius * 2 + 1;
        let r = radius as f32;
        let h = hardness as f32;

        let mut mask = vec![0u8; (diameter * diameter) as usize];
        let mut i = 0;

        for y in 0..diameter {
            let dy = y as f32 - r;
            for x in 0..diameter {
                let dx = x as f32 - r;
                let dist = (dx * dx + dy * dy).sqrt();

                // The rim pixel gets partial coverage so even a hard
                // stamp has a clean antialiased edge.
                let cover = (r + 0.5 - dist).clamp(0.0, 1.0);
                if cover > 0.0 {
                    let alpha = compute_alpha((dist / r).min(1.0), h) * cover;
                    mask[i] = (alpha * 255.0 + 0.5) as u8;
                }
                i += 1;
            }
        }

        BrushMask { diameter, mask }
    }

    #[cfg(debug_assertions)]
    pub fn to_ascii_art(&self) -> String {
        let mut art = String::new();
        for y in 0..self.diameter {
            for x in 0..self.diameter {
                art.push(if self.mask[(y * self.diameter + x) as usize] == 0 {
                    '.'
                } else {
                    'X'
                });
            }
            art.push('\n');
        }
        art
    }
}

/// A bounded cache of rasterized stamps keyed by quantized radius and
/// hardness. Owned explicitly by the canvas state so that independent
/// canvases (and tests) don't share hidden global state.
pub struct BrushMaskCache {
    stamps: HashMap<(u32, u8), BrushMask>,
    insertion_order: VecDeque<(u32, u8)>,
}

impl BrushMaskCache {
    pub fn new() -> BrushMaskCache {
        BrushMaskCache {
            stamps: HashMap::new(),
            insertion_order: VecDeque::new(),
        }
    }

    /// Quantize a (radius, hardness) pair to a cache key.
    ///
    /// Radius rounds to the nearest pixel and hardness to the nearest
    /// multiple of 5, trading a little edge fidelity for far fewer
    /// distinct stamps while a size slider is dragged.
    fn quantize(radius: f32, hardness: f32) -> (u32, u8) {
        let r = radius.round().max(1.0) as u32;
        let h = (hardness / HARDNESS_STEP).round() * HARDNESS_STEP;
        (r, h.clamp(0.0, 100.0) as u8)
    }

    /// Get the stamp for the given brush parameters, rasterizing and
    /// caching it if needed.
    pub fn stamp(&mut self, radius: f32, hardness: f32) -> &BrushMask {
        let key = Self::quantize(radius, hardness);
        if !self.stamps.contains_key(&key) {
            if self.insertion_order.len() >= STAMP_CACHE_CAPACITY {
                if let Some(oldest) = self.insertion_order.pop_front() {
                    self.stamps.remove(&oldest);
                }
            }
            self.stamps.insert(key, BrushMask::new(key.0, key.1));
            self.insertion_order.push_back(key);
        }
        &self.stamps[&key]
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    pub fn reset(&mut self) {
        self.stamps.clear();
        self.insertion_order.clear();
    }
}

impl Default for BrushMaskCache {
    fn default() -> Self {
        Self::new()
    }
}
