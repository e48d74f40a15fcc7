// src/props/generator.rs
//! Whole-world run: every screen's biome generator, then the seam pass.

use bevy::log::{debug, info};
use rand::SeedableRng;

use super::accumulator::PropAccumulator;
use super::biomes::{generate_biome, BiomeCtx};
use super::core::PlacementSet;
use super::layout::OverworldLayout;
use super::placement::PlacementRng;
use super::transitions::add_transitions;

/// Populate every screen of `layout`. Same layout and seed always give the same set.
pub fn generate_overworld(layout: &OverworldLayout, seed: u64) -> PlacementSet {
    let mut rng = PlacementRng::seed_from_u64(seed);
    let mut props = PropAccumulator::new(layout.spacing, layout.exclusion_zone());

    for (cell, biome) in layout.grid().cells() {
        let before = props.total();
        let mut ctx = BiomeCtx::new(layout, cell, &mut props, &mut rng);
        generate_biome(biome, &mut ctx);
        debug!(
            "Screen ({}, {}) / {:?}: placed {} props",
            cell.col,
            cell.row,
            biome,
            props.total() - before
        );
    }

    let before = props.total();
    add_transitions(layout, &mut props, &mut rng);
    debug!("Seams: placed {} props", props.total() - before);

    let set = props.finish();
    info!(
        "Overworld: {} props over {}x{} screens (seed {})",
        set.total(),
        layout.grid().cols(),
        layout.grid().rows(),
        seed
    );
    set
}
