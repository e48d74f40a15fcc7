// src/props/placement/wall.rs
//! Layered, brick-staggered wall tiling (mountain and cliff faces).

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{uniform, PlacementRng, PlacementStrategy};
use crate::props::core::{Bounds, ExclusionZone, Point};

/// Direction the wall runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallOrientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug)]
pub struct Wall {
    pub orientation: WallOrientation,
    /// Nominal tile size; tiles are laid at 0.75 of it so neighbors overlap.
    pub tile_spacing: f32,
    pub depth_layers: u32,
    /// Max cross-run displacement per tile.
    pub jitter: f32,
}

impl Wall {
    pub fn new(orientation: WallOrientation, tile_spacing: f32, depth_layers: u32) -> Self {
        Self { orientation, tile_spacing, depth_layers, jitter: 3.0 }
    }

    /// Distance between neighboring tiles, along the run and between layers.
    pub fn step(&self) -> f32 {
        (self.tile_spacing * 0.75).max(1.0)
    }
}

/// Emit a regular grid of overlapping tiles covering `bounds`.
///
/// Each of the `depth_layers` rows starts half a step further along than the previous one
/// on odd layers, and every tile is nudged across the run by up to `jitter`. Neighboring
/// tiles always overlap, so the face has no gaps.
pub fn place_wall<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, wall: Wall) -> Vec<Point> {
    if bounds.is_empty() || !(wall.tile_spacing > 0.0) {
        return Vec::new();
    }
    let step = wall.step();
    let stagger = step * 0.5;

    let (run_start, run_len, cross_start) = match wall.orientation {
        WallOrientation::Horizontal => (bounds.left, bounds.width(), bounds.top),
        WallOrientation::Vertical => (bounds.top, bounds.height(), bounds.left),
    };
    let per_layer = (run_len / step).floor() as usize + 1;

    let mut placed = Vec::with_capacity(per_layer * wall.depth_layers as usize);
    for layer in 0..wall.depth_layers {
        let cross = cross_start + layer as f32 * step;
        let offset = if layer % 2 == 1 { stagger } else { 0.0 };
        for i in 0..per_layer {
            let along = run_start + i as f32 * step + offset;
            let nudge = uniform(rng, -wall.jitter, wall.jitter);
            placed.push(match wall.orientation {
                WallOrientation::Horizontal => Point::new(along, cross + nudge),
                WallOrientation::Vertical => Point::new(cross + nudge, along),
            });
        }
    }
    placed
}

impl PlacementStrategy for Wall {
    fn place(
        &self,
        rng: &mut PlacementRng,
        bounds: Bounds,
        _existing: &[Point],
        _exclusion: &ExclusionZone,
    ) -> Vec<Point> {
        place_wall(rng, bounds, *self)
    }
}
