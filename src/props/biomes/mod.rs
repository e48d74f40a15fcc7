// src/props/biomes/mod.rs
//! Per-biome generators. Each one encodes what makes a screen read as that biome; the
//! counts and offsets are art parameters, only the output contract matters to callers.

use rand::Rng;

use crate::props::accumulator::PropAccumulator;
use crate::props::core::{Biome, Bounds, CellCoord, Edge, Point, PropType};
use crate::props::layout::{AttemptBudgets, BiomeGrid, OverworldLayout};
use crate::props::placement::{
    place_with_spacing, uniform, Cluster, PlacementRng, PlacementStrategy, SpacedFill,
};

mod beach;
mod forest;
mod highlands;
mod home;
mod lake;
mod meadow;
mod walkways;

/// Everything a generator needs for one screen.
pub struct BiomeCtx<'a> {
    pub cell: CellCoord,
    /// Full screen rectangle; nothing is kept outside it.
    pub screen: Bounds,
    /// Screen inset by the layout margin.
    pub area: Bounds,
    pub grid: BiomeGrid<'a>,
    pub attempts: AttemptBudgets,
    pub props: &'a mut PropAccumulator,
    pub rng: &'a mut PlacementRng,
}

impl<'a> BiomeCtx<'a> {
    pub fn new(
        layout: &'a OverworldLayout,
        cell: CellCoord,
        props: &'a mut PropAccumulator,
        rng: &'a mut PlacementRng,
    ) -> Self {
        let screen = layout.screen_bounds(cell);
        Self {
            cell,
            screen,
            area: screen.inset(layout.margin),
            grid: layout.grid(),
            attempts: layout.attempts,
            props,
            rng,
        }
    }

    pub fn neighbor(&self, edge: Edge) -> Option<Biome> {
        self.grid.neighbor(self.cell, edge)
    }

    /// Store one point if it is on this screen and passes the accumulator's checks.
    pub fn add(&mut self, kind: PropType, p: Point) -> bool {
        self.screen.contains(p) && self.props.add(kind, p)
    }

    pub fn extend(&mut self, kind: PropType, points: impl IntoIterator<Item = Point>) -> usize {
        points.into_iter().filter(|&p| self.add(kind, p)).count()
    }

    /// Run a strategy against the current points of `kind` without storing the result.
    pub fn sample(&mut self, kind: PropType, bounds: Bounds, strategy: &dyn PlacementStrategy) -> Vec<Point> {
        strategy.place(self.rng, bounds, self.props.points(kind), self.props.exclusion())
    }

    /// Run a strategy and store what it produced.
    pub fn apply(&mut self, kind: PropType, bounds: Bounds, strategy: &dyn PlacementStrategy) -> usize {
        let points = self.sample(kind, bounds, strategy);
        self.extend(kind, points)
    }

    /// Uniform scatter at the type's configured spacing.
    pub fn scatter(&mut self, kind: PropType, bounds: Bounds, count: usize) -> usize {
        let fill = SpacedFill::new(count, self.props.spacing(kind)).attempts(self.attempts.spaced);
        self.apply(kind, bounds, &fill)
    }

    /// Gaussian grove at the type's configured spacing, clipped to `bounds`.
    pub fn cluster(&mut self, kind: PropType, bounds: Bounds, center: Point, count: usize, spread: f32) -> usize {
        let cluster = Cluster::new(center, count, spread, self.props.spacing(kind))
            .attempts(self.attempts.cluster);
        self.apply(kind, bounds, &cluster)
    }

    /// Well-separated anchor points that are not props themselves (cluster centers).
    pub fn anchors(&mut self, bounds: Bounds, count: usize, min_spacing: f32) -> Vec<Point> {
        let fill = SpacedFill::new(count, min_spacing).attempts(self.attempts.spaced);
        place_with_spacing(self.rng, bounds, &[], self.props.exclusion(), fill)
    }

    /// Inclusive integer roll.
    pub fn roll(&mut self, lo: usize, hi: usize) -> usize {
        self.rng.random_range(lo..=hi)
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    pub fn jitter(&mut self, amount: f32) -> f32 {
        uniform(self.rng, -amount, amount)
    }

    pub fn between(&mut self, lo: f32, hi: f32) -> f32 {
        uniform(self.rng, lo, hi)
    }
}

/// Dispatch one screen to its generator.
pub fn generate_biome(biome: Biome, ctx: &mut BiomeCtx<'_>) {
    match biome {
        Biome::Beach => beach::generate(ctx),
        Biome::Meadow => meadow::generate(ctx),
        Biome::Forest => forest::generate(ctx),
        Biome::Lake => lake::generate(ctx),
        Biome::Mountain => highlands::mountain(ctx),
        Biome::Cliffs => highlands::cliffs(ctx),
        Biome::Path => walkways::path(ctx),
        Biome::Bridge => walkways::bridge(ctx),
        Biome::Home => home::generate(ctx),
    }
}

/// `start, start + step, ...` while below `end`.
pub(crate) fn stride(start: f32, end: f32, step: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(move |i| start + i as f32 * step)
        .take_while(move |&v| step > 0.0 && v < end)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::props::core::{ExclusionZone, PlacementSet};
    use crate::props::layout::SpacingTable;
    use rand::SeedableRng;

    /// Run a single generator on a 1x1 grid of the given biome.
    pub fn run_single(biome: Biome, width: f32, height: f32, margin: f32, seed: u64) -> (OverworldLayout, PlacementSet) {
        let layout = OverworldLayout {
            screen_width: width,
            screen_height: height,
            margin,
            biomes: vec![vec![biome]],
            exclusion: Bounds::new(-500.0, -500.0, -400.0, -400.0),
            ..Default::default()
        };
        let mut props = PropAccumulator::new(SpacingTable::default(), ExclusionZone(layout.exclusion));
        let mut rng = PlacementRng::seed_from_u64(seed);
        {
            let mut ctx = BiomeCtx::new(&layout, CellCoord::new(0, 0), &mut props, &mut rng);
            generate_biome(biome, &mut ctx);
        }
        (layout, props.finish())
    }

    pub fn all_inside(set: &PlacementSet, bounds: Bounds) -> bool {
        set.iter().all(|(_, pts)| pts.iter().all(|p| bounds.contains(*p)))
    }
}
