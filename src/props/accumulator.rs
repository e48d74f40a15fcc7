// src/props/accumulator.rs
//! Owned builder for a `PlacementSet`; the only way points enter the output.

use super::core::{ExclusionZone, PlacementSet, Point, PropType};
use super::layout::SpacingTable;

/// Append-only per-type point store that enforces the exclusion zone and same-type spacing.
#[derive(Clone, Debug)]
pub struct PropAccumulator {
    set: PlacementSet,
    spacing: SpacingTable,
    exclusion: ExclusionZone,
}

impl PropAccumulator {
    pub fn new(spacing: SpacingTable, exclusion: ExclusionZone) -> Self {
        Self { set: PlacementSet::default(), spacing, exclusion }
    }

    pub fn spacing(&self, kind: PropType) -> f32 {
        self.spacing.get(kind)
    }

    pub fn exclusion(&self) -> &ExclusionZone {
        &self.exclusion
    }

    pub fn points(&self, kind: PropType) -> &[Point] {
        self.set.points(kind)
    }

    pub fn total(&self) -> usize {
        self.set.total()
    }

    /// True if `p` may be stored as `kind` right now.
    pub fn accepts(&self, kind: PropType, p: Point) -> bool {
        if !p.is_finite() || self.exclusion.contains(p) {
            return false;
        }
        let min = self.spacing.get(kind);
        if min <= 0.0 {
            return true;
        }
        self.set.points(kind).iter().all(|q| q.distance(p) >= min)
    }

    /// Store `p` if it passes `accepts`; returns whether it was stored.
    pub fn add(&mut self, kind: PropType, p: Point) -> bool {
        if !self.accepts(kind, p) {
            return false;
        }
        self.set.push(kind, p);
        true
    }

    /// Offer each point in order; returns how many were stored.
    pub fn extend(&mut self, kind: PropType, points: impl IntoIterator<Item = Point>) -> usize {
        points.into_iter().filter(|&p| self.add(kind, p)).count()
    }

    pub fn finish(self) -> PlacementSet {
        self.set
    }
}
