// src/props/placement/edge.rs
//! Evenly spaced rows just inside one edge of a rectangle.

use rand::Rng;

use super::{uniform, PlacementRng, PlacementStrategy};
use crate::props::core::{Bounds, Edge, ExclusionZone, Point};

/// Random displacement applied to each evenly spaced target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeJitter {
    /// Max shift along the edge, either direction.
    pub along: f32,
    /// Perpendicular distance from the edge, sampled in `inset_min..=inset_max`.
    pub inset_min: f32,
    pub inset_max: f32,
}

impl Default for EdgeJitter {
    fn default() -> Self {
        Self { along: 8.0, inset_min: 5.0, inset_max: 20.0 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EdgeRow {
    pub edge: Edge,
    pub count: usize,
    pub jitter: EdgeJitter,
}

/// Place `count` points at `(i + 0.5) / count` along `edge`, jittered.
///
/// There is no spacing rejection; only points that land in the exclusion zone are dropped.
pub fn place_along_edge<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Bounds,
    edge: Edge,
    count: usize,
    exclusion: &ExclusionZone,
    jitter: EdgeJitter,
) -> Vec<Point> {
    let mut placed = Vec::with_capacity(count);
    if bounds.is_empty() {
        return placed;
    }

    for i in 0..count {
        let t = (i as f32 + 0.5) / count as f32;
        let shift = uniform(rng, -jitter.along, jitter.along);
        let inset = uniform(rng, jitter.inset_min, jitter.inset_max);
        let p = match edge {
            Edge::Top => Point::new(bounds.left + bounds.width() * t + shift, bounds.top + inset),
            Edge::Bottom => Point::new(bounds.left + bounds.width() * t + shift, bounds.bottom - inset),
            Edge::Left => Point::new(bounds.left + inset, bounds.top + bounds.height() * t + shift),
            Edge::Right => Point::new(bounds.right - inset, bounds.top + bounds.height() * t + shift),
        };
        if !exclusion.contains(p) {
            placed.push(p);
        }
    }
    placed
}

impl PlacementStrategy for EdgeRow {
    fn place(
        &self,
        rng: &mut PlacementRng,
        bounds: Bounds,
        _existing: &[Point],
        exclusion: &ExclusionZone,
    ) -> Vec<Point> {
        place_along_edge(rng, bounds, self.edge, self.count, exclusion, self.jitter)
    }
}
