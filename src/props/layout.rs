// src/props/layout.rs
//! Data-driven overworld layout (biome grid, screen size, spacing rules) + loader.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::core::{Biome, Bounds, CellCoord, Edge, ExclusionZone, PropType};

// ---------- Spacing / retry budgets (data form) ----------

/// Minimum same-type distance per prop type. `0` means overlap is allowed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingTable {
    #[serde(default = "default_trees")]
    pub trees: f32,
    #[serde(default = "default_rocks")]
    pub rocks: f32,
    #[serde(default = "default_bushes")]
    pub bushes: f32,
    #[serde(default = "default_flowers")]
    pub flowers: f32,
    #[serde(default)]
    pub water: f32,
    #[serde(default)]
    pub mountains: f32,
    #[serde(default)]
    pub cliffs: f32,
    #[serde(default)]
    pub fences: f32,
    #[serde(default)]
    pub paths: f32,
    #[serde(default)]
    pub bridges: f32,
    #[serde(default = "default_signposts")]
    pub signposts: f32,
}

fn default_trees() -> f32 { 40.0 }
fn default_rocks() -> f32 { 28.0 }
fn default_bushes() -> f32 { 30.0 }
fn default_flowers() -> f32 { 10.0 }
fn default_signposts() -> f32 { 60.0 }

impl Default for SpacingTable {
    fn default() -> Self {
        Self {
            trees: default_trees(),
            rocks: default_rocks(),
            bushes: default_bushes(),
            flowers: default_flowers(),
            // Water, walls and walkway tiles overlap on purpose for solid coverage.
            water: 0.0,
            mountains: 0.0,
            cliffs: 0.0,
            fences: 0.0,
            paths: 0.0,
            bridges: 0.0,
            signposts: default_signposts(),
        }
    }
}

impl SpacingTable {
    pub fn get(&self, kind: PropType) -> f32 {
        match kind {
            PropType::Trees => self.trees,
            PropType::Rocks => self.rocks,
            PropType::Bushes => self.bushes,
            PropType::Flowers => self.flowers,
            PropType::Water => self.water,
            PropType::Mountains => self.mountains,
            PropType::Cliffs => self.cliffs,
            PropType::Fences => self.fences,
            PropType::Paths => self.paths,
            PropType::Bridges => self.bridges,
            PropType::Signposts => self.signposts,
        }
    }
}

/// Per-point retry budgets for the rejection-sampling strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptBudgets {
    #[serde(default = "default_spaced_attempts")]
    pub spaced: u32,
    #[serde(default = "default_cluster_attempts")]
    pub cluster: u32,
}

fn default_spaced_attempts() -> u32 { 80 }
fn default_cluster_attempts() -> u32 { 60 }

impl Default for AttemptBudgets {
    fn default() -> Self {
        Self { spaced: default_spaced_attempts(), cluster: default_cluster_attempts() }
    }
}

// ---------- Layout ----------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverworldLayout {
    /// Size of one screen (grid cell) in world pixels.
    pub screen_width: f32,
    pub screen_height: f32,

    /// Inset applied to each screen before primary generation.
    #[serde(default = "default_margin")]
    pub margin: f32,

    /// Row-major biome tags, row 0 = top.
    pub biomes: Vec<Vec<Biome>>,

    /// Player-home footprint; nothing is ever placed inside.
    pub exclusion: Bounds,

    #[serde(default)]
    pub spacing: SpacingTable,

    #[serde(default)]
    pub attempts: AttemptBudgets,

    /// Depth of the seam band along borders between differing biomes.
    #[serde(default = "default_transition_depth")]
    pub transition_depth: f32,
}

fn default_margin() -> f32 { 20.0 }
fn default_transition_depth() -> f32 { 50.0 }

impl Default for OverworldLayout {
    fn default() -> Self {
        use Biome::*;
        Self {
            screen_width: 426.0,
            screen_height: 240.0,
            margin: default_margin(),
            biomes: vec![
                vec![Beach, Meadow, Meadow, Forest, Forest, Mountain],
                vec![Beach, Home, Meadow, Forest, Lake, Mountain],
                vec![Beach, Meadow, Path, Path, Lake, Mountain],
                vec![Cliffs, Cliffs, Bridge, Path, Forest, Mountain],
            ],
            // House at (640, 320), 100x80 body plus margin.
            exclusion: Bounds::new(580.0, 260.0, 700.0, 420.0),
            spacing: SpacingTable::default(),
            attempts: AttemptBudgets::default(),
            transition_depth: default_transition_depth(),
        }
    }
}

impl OverworldLayout {
    /// Parse and validate a RON layout.
    pub fn from_ron_str(text: &str) -> Result<Self, LayoutError> {
        let layout: Self = ron::de::from_str(text).map_err(|e| LayoutError::Ron(e.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read, parse and validate a `.layout.ron` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let Some(first) = self.biomes.first() else {
            return Err(LayoutError::EmptyGrid);
        };
        if first.is_empty() {
            return Err(LayoutError::EmptyGrid);
        }
        for (row, cells) in self.biomes.iter().enumerate() {
            if cells.len() != first.len() {
                return Err(LayoutError::RaggedRow { row, expected: first.len(), found: cells.len() });
            }
        }

        let inner_w = self.screen_width - 2.0 * self.margin;
        let inner_h = self.screen_height - 2.0 * self.margin;
        if !(self.margin >= 0.0 && inner_w > 0.0 && inner_h > 0.0) {
            return Err(LayoutError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                margin: self.margin,
            });
        }

        let ex = self.exclusion;
        if !(ex.left < ex.right && ex.top < ex.bottom) {
            return Err(LayoutError::InvalidExclusion(ex));
        }

        for kind in PropType::ALL {
            let s = self.spacing.get(kind);
            if !(s >= 0.0 && s.is_finite()) {
                return Err(LayoutError::NegativeSpacing { kind: kind.name(), value: s });
            }
        }

        if self.attempts.spaced == 0 || self.attempts.cluster == 0 {
            return Err(LayoutError::ZeroAttempts);
        }
        if !(self.transition_depth >= 0.0) {
            return Err(LayoutError::InvalidTransitionDepth(self.transition_depth));
        }
        Ok(())
    }

    pub fn grid(&self) -> BiomeGrid<'_> {
        BiomeGrid::new(&self.biomes)
    }

    pub fn exclusion_zone(&self) -> ExclusionZone {
        ExclusionZone(self.exclusion)
    }

    /// Full pixel bounds of one screen (no margin).
    pub fn screen_bounds(&self, cell: CellCoord) -> Bounds {
        let left = cell.col as f32 * self.screen_width;
        let top = cell.row as f32 * self.screen_height;
        Bounds::new(left, top, left + self.screen_width, top + self.screen_height)
    }

    /// Pixel bounds covered by the whole grid.
    pub fn world_bounds(&self) -> Bounds {
        let grid = self.grid();
        Bounds::new(
            0.0,
            0.0,
            grid.cols() as f32 * self.screen_width,
            grid.rows() as f32 * self.screen_height,
        )
    }
}

// ---------- Grid view ----------

/// Read-only view over the biome tags of a layout.
#[derive(Clone, Copy, Debug)]
pub struct BiomeGrid<'a> {
    rows: &'a [Vec<Biome>],
}

impl<'a> BiomeGrid<'a> {
    pub fn new(rows: &'a [Vec<Biome>]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> usize { self.rows.len() }
    pub fn cols(&self) -> usize { self.rows.first().map_or(0, Vec::len) }

    pub fn get(&self, cell: CellCoord) -> Option<Biome> {
        self.rows.get(cell.row)?.get(cell.col).copied()
    }

    /// Biome across `edge` from `cell`, or `None` at the world border.
    pub fn neighbor(&self, cell: CellCoord, edge: Edge) -> Option<Biome> {
        let (dc, dr) = edge.offset();
        let col = cell.col.checked_add_signed(dc)?;
        let row = cell.row.checked_add_signed(dr)?;
        self.get(CellCoord::new(col, row))
    }

    /// Every cell with its tag, row-major from the top-left.
    pub fn cells(&self) -> impl Iterator<Item = (CellCoord, Biome)> + 'a {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, &b)| (CellCoord::new(col, row), b))
        })
    }
}

// ---------- Loader errors ----------

#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("I/O while reading layout: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("Biome grid has no cells")]
    EmptyGrid,
    #[error("Biome grid row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Screen {width}x{height} leaves no room inside a {margin}px margin")]
    ScreenTooSmall { width: f32, height: f32, margin: f32 },
    #[error("Exclusion zone {0:?} is not a proper rectangle")]
    InvalidExclusion(Bounds),
    #[error("Spacing for '{kind}' must be a finite value >= 0 (got {value})")]
    NegativeSpacing { kind: &'static str, value: f32 },
    #[error("Retry budgets must be at least 1")]
    ZeroAttempts,
    #[error("Transition depth must be >= 0 (got {0})")]
    InvalidTransitionDepth(f32),
}
