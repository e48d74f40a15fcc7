// src/props/placement/cluster.rs
//! Gaussian clusters ("groves") around a center point.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::{clear_of, PlacementRng, PlacementStrategy};
use crate::props::core::{Bounds, ExclusionZone, Point};

pub const DEFAULT_CLUSTER_ATTEMPTS: u32 = 60;

#[derive(Clone, Copy, Debug)]
pub struct Cluster {
    pub center: Point,
    pub count: usize,
    /// Standard deviation of the offset on each axis (pixels).
    pub spread: f32,
    pub min_spacing: f32,
    pub max_attempts: u32,
}

impl Cluster {
    pub fn new(center: Point, count: usize, spread: f32, min_spacing: f32) -> Self {
        Self { center, count, spread, min_spacing, max_attempts: DEFAULT_CLUSTER_ATTEMPTS }
    }

    pub fn attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Sample up to `cluster.count` points from independent normal offsets around the center.
/// When `bounds` is given, samples outside it are rejected (not clamped).
pub fn place_cluster<R: Rng + ?Sized>(
    rng: &mut R,
    cluster: Cluster,
    bounds: Option<Bounds>,
    existing: &[Point],
    exclusion: &ExclusionZone,
) -> Vec<Point> {
    let mut placed = Vec::new();
    if bounds.is_some_and(|b| b.is_empty()) {
        return placed;
    }
    // Normal::new accepts a negative std-dev and mirrors it
    if !(cluster.spread >= 0.0) {
        return placed;
    }
    let Ok(normal) = Normal::new(0.0f32, cluster.spread) else {
        return placed;
    };

    for _ in 0..cluster.count {
        for _ in 0..cluster.max_attempts {
            let p = cluster.center + Point::new(normal.sample(rng), normal.sample(rng));
            if bounds.is_some_and(|b| !b.contains(p)) {
                continue;
            }
            if exclusion.contains(p) {
                continue;
            }
            if clear_of(p, cluster.min_spacing, existing, &placed) {
                placed.push(p);
                break;
            }
        }
    }
    placed
}

impl PlacementStrategy for Cluster {
    fn place(
        &self,
        rng: &mut PlacementRng,
        bounds: Bounds,
        existing: &[Point],
        exclusion: &ExclusionZone,
    ) -> Vec<Point> {
        place_cluster(rng, *self, Some(bounds), existing, exclusion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;
    use rand::SeedableRng;

    fn no_exclusion() -> ExclusionZone {
        ExclusionZone(Bounds::new(-1000.0, -1000.0, -900.0, -900.0))
    }

    #[test]
    fn gathers_near_center() {
        let mut rng = PlacementRng::seed_from_u64(5);
        let center = Vec2::new(200.0, 200.0);
        let out = place_cluster(&mut rng, Cluster::new(center, 10, 20.0, 5.0), None, &[], &no_exclusion());
        assert!(!out.is_empty());
        let mean = out.iter().copied().sum::<Vec2>() / out.len() as f32;
        assert!(mean.distance(center) < 30.0, "mean {mean:?}");
        for p in &out {
            // 6 sigma is a generous bound for a normal sample.
            assert!(p.distance(center) < 20.0 * 6.0 * std::f32::consts::SQRT_2);
        }
    }

    #[test]
    fn stays_inside_bounds_and_spacing() {
        let mut rng = PlacementRng::seed_from_u64(6);
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let existing = vec![Vec2::new(90.0, 90.0)];
        let out = place_cluster(
            &mut rng,
            Cluster::new(Vec2::new(95.0, 95.0), 8, 30.0, 12.0),
            Some(bounds),
            &existing,
            &no_exclusion(),
        );
        for (i, p) in out.iter().enumerate() {
            assert!(bounds.contains(*p));
            for q in existing.iter().chain(&out[..i]) {
                assert!(p.distance(*q) >= 12.0);
            }
        }
    }

    #[test]
    fn honors_exclusion() {
        let mut rng = PlacementRng::seed_from_u64(8);
        let ex = ExclusionZone(Bounds::new(40.0, 40.0, 60.0, 60.0));
        let out = place_cluster(&mut rng, Cluster::new(Vec2::new(50.0, 50.0), 20, 15.0, 0.0), None, &[], &ex);
        assert!(out.iter().all(|p| !ex.contains(*p)));
    }

    #[test]
    fn invalid_spread_places_nothing() {
        let mut rng = PlacementRng::seed_from_u64(8);
        for spread in [-1.0, -0.001, f32::NAN, f32::INFINITY] {
            let out = place_cluster(&mut rng, Cluster::new(Vec2::ZERO, 4, spread, 0.0), None, &[], &no_exclusion());
            assert!(out.is_empty(), "spread {spread}");
        }
    }

    #[test]
    fn huge_count_under_fills_without_reserving() {
        let mut rng = PlacementRng::seed_from_u64(8);
        let ex = ExclusionZone(Bounds::new(-100.0, -100.0, 100.0, 100.0));
        let bounds = Bounds::new(-10.0, -10.0, 10.0, 10.0);
        let cluster = Cluster::new(Vec2::ZERO, 100_000, 2.0, 0.0).attempts(1);
        let out = place_cluster(&mut rng, cluster, Some(bounds), &[], &ex);
        assert!(out.is_empty());
        assert_eq!(out.capacity(), 0);
    }
}
