//! Valid/invalid node partition and the coverage policy.

use kmz_core::{GeoPoint, Graph, Node};

use crate::columns::ExportSelection;

/// Partition of a graph's nodes by coordinate presence.
#[derive(Debug)]
pub struct Classification<'g> {
    /// Nodes with usable coordinates, paired with those coordinates, in
    /// graph iteration order.
    pub valid:         Vec<(&'g Node, GeoPoint)>,
    /// Number of nodes missing latitude, longitude, or both.
    pub invalid_count: usize,
}

/// Three-way coverage outcome — the export policy hinges on this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Coverage {
    /// At least half the nodes have coordinates: proceed silently.
    Full,
    /// More nodes lack coordinates than have them: proceed, but warn the
    /// caller with the invalid percentage (rounded).
    Sparse { invalid_percent: u32 },
    /// No node has coordinates (this includes the empty graph): abort.
    Empty,
}

/// Partition `graph`'s nodes under the resolved `selection`.
///
/// Order of `valid` matches graph iteration order — downstream style-id
/// assignment depends on it.
pub fn classify<'g>(graph: &'g Graph, selection: &ExportSelection) -> Classification<'g> {
    let mut valid = Vec::new();
    let mut invalid_count = 0;

    for node in graph.nodes() {
        match selection.coords_of(node) {
            Some(coords) => valid.push((node, coords)),
            None         => invalid_count += 1,
        }
    }

    Classification { valid, invalid_count }
}

impl Classification<'_> {
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid_count
    }

    pub fn coverage(&self) -> Coverage {
        if self.invalid_count == self.total() {
            return Coverage::Empty;
        }
        if self.invalid_count > self.valid.len() {
            let ratio = self.invalid_count as f64 / self.total() as f64;
            return Coverage::Sparse { invalid_percent: (ratio * 100.0).round() as u32 };
        }
        Coverage::Full
    }
}
