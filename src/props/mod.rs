pub mod core;
pub mod layout;
pub mod accumulator;
pub mod placement;
pub mod biomes;
pub mod transitions;
pub mod generator;
pub mod plugin;
pub mod export;

pub use core::{Biome, Bounds, CellCoord, Edge, ExclusionZone, PlacementSet, Point, PropType};
pub use generator::generate_overworld;
pub use layout::{LayoutError, OverworldLayout, SpacingTable};
pub use plugin::{OverworldPlacements, OverworldPropsGenerated, OverworldPropsPlugin, OverworldSettings};
