// src/props/placement/mod.rs
//! Deterministic placement strategies and helpers.
//!
//! Every strategy may return fewer points than requested when its retry budget runs out;
//! callers treat density as approximate and never as an error.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::props::core::{Bounds, ExclusionZone, Point};

mod cluster;
mod edge;
mod spaced;
mod wall;

pub use cluster::{place_cluster, Cluster, DEFAULT_CLUSTER_ATTEMPTS};
pub use edge::{place_along_edge, EdgeJitter, EdgeRow};
pub use spaced::{place_with_spacing, SpacedFill, DEFAULT_SPACED_ATTEMPTS};
pub use wall::{place_wall, Wall, WallOrientation};

/// The one random source threaded through a generation run.
pub type PlacementRng = ChaCha8Rng;

/// Strategy that turns a target rectangle into candidate points.
pub trait PlacementStrategy {
    /// `existing` are already-placed points of the same prop type (spacing reference).
    fn place(
        &self,
        rng: &mut PlacementRng,
        bounds: Bounds,
        existing: &[Point],
        exclusion: &ExclusionZone,
    ) -> Vec<Point>;
}

/// Uniform sample in `lo..=hi`; collapses to `lo` when the range is empty.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

/// Spacing test against both earlier placements and this call's accepted points.
#[inline]
pub(crate) fn clear_of(p: Point, min_spacing: f32, existing: &[Point], placed: &[Point]) -> bool {
    if min_spacing <= 0.0 {
        return true;
    }
    existing.iter().chain(placed).all(|q| q.distance(p) >= min_spacing)
}
