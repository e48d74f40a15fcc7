// src/props/placement/spaced.rs
//! Uniform rejection sampling with a minimum-distance constraint.

use rand::Rng;

use super::{clear_of, PlacementRng, PlacementStrategy};
use crate::props::core::{Bounds, ExclusionZone, Point};

pub const DEFAULT_SPACED_ATTEMPTS: u32 = 80;

#[derive(Clone, Copy, Debug)]
pub struct SpacedFill {
    /// Points requested.
    pub count: usize,
    /// Minimum distance to any existing or freshly accepted point.
    pub min_spacing: f32,
    /// Samples tried per requested point before moving on.
    pub max_attempts: u32,
}

impl SpacedFill {
    pub fn new(count: usize, min_spacing: f32) -> Self {
        Self { count, min_spacing, max_attempts: DEFAULT_SPACED_ATTEMPTS }
    }

    pub fn attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Scatter up to `fill.count` points uniformly inside `bounds`.
///
/// No spatial index: each attempt is checked against every point, which is fine for the
/// few hundred props a world holds.
pub fn place_with_spacing<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Bounds,
    existing: &[Point],
    exclusion: &ExclusionZone,
    fill: SpacedFill,
) -> Vec<Point> {
    let mut placed = Vec::new();
    if bounds.is_empty() {
        return placed;
    }

    for _ in 0..fill.count {
        for _ in 0..fill.max_attempts {
            let p = Point::new(
                rng.random_range(bounds.left..=bounds.right),
                rng.random_range(bounds.top..=bounds.bottom),
            );
            if exclusion.contains(p) {
                continue;
            }
            if clear_of(p, fill.min_spacing, existing, &placed) {
                placed.push(p);
                break;
            }
        }
    }
    placed
}

impl PlacementStrategy for SpacedFill {
    fn place(
        &self,
        rng: &mut PlacementRng,
        bounds: Bounds,
        existing: &[Point],
        exclusion: &ExclusionZone,
    ) -> Vec<Point> {
        place_with_spacing(rng, bounds, existing, exclusion, *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;
    use rand::SeedableRng;

    fn far_exclusion() -> ExclusionZone {
        ExclusionZone(Bounds::new(-1000.0, -1000.0, -900.0, -900.0))
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = PlacementRng::seed_from_u64(1);
        let out = place_with_spacing(
            &mut rng,
            Bounds::new(0.0, 0.0, 100.0, 100.0),
            &[],
            &far_exclusion(),
            SpacedFill::new(0, 10.0),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn huge_count_inside_exclusion_reserves_nothing() {
        let mut rng = PlacementRng::seed_from_u64(1);
        let ex = ExclusionZone(Bounds::new(0.0, 0.0, 100.0, 100.0));
        let fill = SpacedFill::new(100_000, 0.0).attempts(1);
        let out = place_with_spacing(&mut rng, Bounds::new(10.0, 10.0, 90.0, 90.0), &[], &ex, fill);
        assert!(out.is_empty());
        assert_eq!(out.capacity(), 0);
    }

    #[test]
    fn bounds_inside_exclusion_yield_nothing() {
        let mut rng = PlacementRng::seed_from_u64(1);
        let ex = ExclusionZone(Bounds::new(0.0, 0.0, 100.0, 100.0));
        let out = place_with_spacing(
            &mut rng,
            Bounds::new(10.0, 10.0, 90.0, 90.0),
            &[],
            &ex,
            SpacedFill::new(25, 5.0),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn respects_spacing_against_existing_and_new() {
        let mut rng = PlacementRng::seed_from_u64(7);
        let existing = vec![Vec2::new(50.0, 50.0), Vec2::new(150.0, 20.0)];
        let bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);
        let out = place_with_spacing(&mut rng, bounds, &existing, &far_exclusion(), SpacedFill::new(30, 25.0));
        assert!(!out.is_empty());
        for (i, p) in out.iter().enumerate() {
            assert!(bounds.contains(*p));
            for q in existing.iter().chain(&out[..i]) {
                assert!(p.distance(*q) >= 25.0, "{p:?} too close to {q:?}");
            }
        }
    }

    #[test]
    fn crowded_region_under_fills_quietly() {
        let mut rng = PlacementRng::seed_from_u64(9);
        // A 20x20 box cannot hold more than a handful of points 15 apart.
        let out = place_with_spacing(
            &mut rng,
            Bounds::new(0.0, 0.0, 20.0, 20.0),
            &[],
            &far_exclusion(),
            SpacedFill::new(50, 15.0).attempts(10),
        );
        assert!(!out.is_empty());
        assert!(out.len() < 50);
    }

    #[test]
    fn empty_bounds_yield_nothing() {
        let mut rng = PlacementRng::seed_from_u64(2);
        let out = place_with_spacing(
            &mut rng,
            Bounds::new(10.0, 0.0, 0.0, 10.0),
            &[],
            &far_exclusion(),
            SpacedFill::new(5, 0.0),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn same_seed_same_points() {
        let run = |seed| {
            let mut rng = PlacementRng::seed_from_u64(seed);
            place_with_spacing(
                &mut rng,
                Bounds::new(0.0, 0.0, 300.0, 300.0),
                &[],
                &far_exclusion(),
                SpacedFill::new(12, 30.0),
            )
        };
        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12));
    }
}
