// src/props/transitions.rs
//! Seam pass: soften hard borders between screens of different biomes.
//! Runs after every screen has its primary props so it sees the final neighbors.

use super::accumulator::PropAccumulator;
use super::biomes::BiomeCtx;
use super::core::{Biome, Edge, PropType};
use super::layout::OverworldLayout;
use super::placement::PlacementRng;

/// Keeps seam props off the shared border itself.
const EDGE_INSET: f32 = 5.0;

/// What to scatter on this side of a border with `neighbor`.
struct Seam {
    side_inset: f32,
    props: &'static [(PropType, usize)],
}

fn seam_for(neighbor: Biome) -> Option<Seam> {
    match neighbor {
        Biome::Forest => Some(Seam { side_inset: 20.0, props: &[(PropType::Trees, 3), (PropType::Bushes, 2)] }),
        Biome::Mountain | Biome::Cliffs => Some(Seam { side_inset: 20.0, props: &[(PropType::Rocks, 3)] }),
        Biome::Lake => Some(Seam { side_inset: 15.0, props: &[(PropType::Flowers, 4)] }),
        Biome::Beach | Biome::Meadow | Biome::Path | Biome::Bridge | Biome::Home => None,
    }
}

/// Walk the grid once more and add seam props inside each screen, along every edge whose
/// neighbor has a different biome.
pub fn add_transitions(layout: &OverworldLayout, props: &mut PropAccumulator, rng: &mut PlacementRng) {
    for (cell, biome) in layout.grid().cells() {
        let mut ctx = BiomeCtx::new(layout, cell, props, rng);
        let screen = ctx.screen;
        let depth = layout
            .transition_depth
            .min(screen.width() * 0.5)
            .min(screen.height() * 0.5);

        for edge in Edge::ALL {
            let Some(neighbor) = ctx.neighbor(edge) else { continue };
            if neighbor == biome {
                continue;
            }
            let Some(seam) = seam_for(neighbor) else { continue };
            let band = screen.edge_band(edge, depth, seam.side_inset, EDGE_INSET);
            for &(kind, count) in seam.props {
                ctx.scatter(kind, band, count);
            }
        }
    }
}
