// src/props/core.rs
//! Core types for biome-driven prop placement on a screen grid.
//! Keep this file dependency-light; strategies, biomes and the orchestrator all build on it.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Planar position in world pixels (y grows downward).
pub type Point = Vec2;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    a.distance(b)
}

// ---------- Bounds ----------

/// Axis-aligned rectangle in world-pixel space.
///
/// A rectangle whose edges cross (`left > right` or `top > bottom`) is *empty*:
/// strategies place nothing inside it instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x, max.y)
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn min(&self) -> Vec2 { Vec2::new(self.left, self.top) }
    pub fn max(&self) -> Vec2 { Vec2::new(self.right, self.bottom) }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.left <= self.right && self.top <= self.bottom)
    }

    /// Shrink every side by `margin` (may produce an empty rectangle).
    pub fn inset(&self, margin: f32) -> Self {
        self.inset_xy(margin, margin)
    }

    pub fn inset_xy(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right - dx, self.bottom - dy)
    }

    /// Band of `depth` pixels running along `edge`, on the inside of this rectangle.
    /// `edge_inset` keeps the band off the edge itself, `side_inset` trims both ends.
    pub fn edge_band(&self, edge: Edge, depth: f32, side_inset: f32, edge_inset: f32) -> Self {
        match edge {
            Edge::Left => Self::new(
                self.left + edge_inset,
                self.top + side_inset,
                self.left + depth,
                self.bottom - side_inset,
            ),
            Edge::Right => Self::new(
                self.right - depth,
                self.top + side_inset,
                self.right - edge_inset,
                self.bottom - side_inset,
            ),
            Edge::Top => Self::new(
                self.left + side_inset,
                self.top + edge_inset,
                self.right - side_inset,
                self.top + depth,
            ),
            Edge::Bottom => Self::new(
                self.left + side_inset,
                self.bottom - depth,
                self.right - side_inset,
                self.bottom - edge_inset,
            ),
        }
    }
}

/// The one rectangle no prop of any type may land in (the player-home footprint).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExclusionZone(pub Bounds);

impl ExclusionZone {
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.0.contains(p)
    }
}

// ---------- Grid addressing ----------

/// Side of a rectangle / direction to a neighboring grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Grid step `(dcol, drow)` toward the neighbor across this edge.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Edge::Left => (-1, 0),
            Edge::Right => (1, 0),
            Edge::Top => (0, -1),
            Edge::Bottom => (0, 1),
        }
    }
}

/// Column/row of one screen in the biome grid (row 0 = top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub col: usize,
    pub row: usize,
}

impl CellCoord {
    pub const fn new(col: usize, row: usize) -> Self { Self { col, row } }
}

// ---------- Biomes / prop categories ----------

/// Visual/gameplay theme of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Biome {
    Beach,
    Meadow,
    Forest,
    Lake,
    Mountain,
    Cliffs,
    Path,
    Bridge,
    Home,
}

impl Biome {
    /// Cells the player walks through on a built surface.
    pub fn is_walkway(self) -> bool {
        matches!(self, Biome::Path | Biome::Bridge | Biome::Home)
    }
}

/// Category of placed world object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropType {
    Trees,
    Rocks,
    Bushes,
    Flowers,
    Water,
    Mountains,
    Cliffs,
    Fences,
    Paths,
    Bridges,
    Signposts,
}

impl PropType {
    pub const ALL: [PropType; 11] = [
        PropType::Trees,
        PropType::Rocks,
        PropType::Bushes,
        PropType::Flowers,
        PropType::Water,
        PropType::Mountains,
        PropType::Cliffs,
        PropType::Fences,
        PropType::Paths,
        PropType::Bridges,
        PropType::Signposts,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PropType::Trees => "trees",
            PropType::Rocks => "rocks",
            PropType::Bushes => "bushes",
            PropType::Flowers => "flowers",
            PropType::Water => "water",
            PropType::Mountains => "mountains",
            PropType::Cliffs => "cliffs",
            PropType::Fences => "fences",
            PropType::Paths => "paths",
            PropType::Bridges => "bridges",
            PropType::Signposts => "signposts",
        }
    }
}

// ---------- Output ----------

/// Generated placements, per prop type, in insertion order.
///
/// Every `PropType` has an entry (possibly empty) so the serialized shape never changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementSet {
    by_type: BTreeMap<PropType, Vec<Point>>,
}

impl Default for PlacementSet {
    fn default() -> Self {
        Self { by_type: PropType::ALL.iter().map(|&k| (k, Vec::new())).collect() }
    }
}

impl PlacementSet {
    pub fn points(&self, kind: PropType) -> &[Point] {
        self.by_type.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, kind: PropType) -> usize {
        self.points(kind).len()
    }

    pub fn total(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `(type, count)` for every type, in `PropType` order.
    pub fn counts(&self) -> Vec<(PropType, usize)> {
        self.by_type.iter().map(|(&k, v)| (k, v.len())).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PropType, &[Point])> {
        self.by_type.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    /// Append without any checks; callers go through `PropAccumulator`.
    pub(crate) fn push(&mut self, kind: PropType, p: Point) {
        self.by_type.entry(kind).or_default().push(p);
    }
}
