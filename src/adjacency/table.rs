//! Accumulated directional neighbor counts
//!
//! Counts only grow. Entries are created explicitly by [`AdjacencyTable::add`];
//! reads never create intermediate levels, and a subject/direction pair with no
//! neighbors is absent rather than present-and-empty.

use crate::tile::direction::Direction;
use crate::tile::key::TileKey;
use std::collections::{BTreeMap, BTreeSet};

/// Neighbor key to occurrence count
pub type NeighborCounts = BTreeMap<TileKey, u64>;

/// Direction to neighbor counts for one subject
pub type DirectionalCounts = BTreeMap<Direction, NeighborCounts>;

/// Subject key to direction to neighbor key to occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyTable {
    entries: BTreeMap<TileKey, DirectionalCounts>,
}

impl AdjacencyTable {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add `count` observations of `neighbor` on the `direction` side of `subject`
    ///
    /// Adding zero is a no-op so that empty levels are never created.
    pub fn add(&mut self, subject: TileKey, direction: Direction, neighbor: TileKey, count: u64) {
        if count > 0 {
            self.insert_raw(subject, direction, neighbor, count);
        }
    }

    /// Record one observation
    pub fn increment(&mut self, subject: TileKey, direction: Direction, neighbor: TileKey) {
        self.add(subject, direction, neighbor, 1);
    }

    /// Insert a count directly, keeping zero counts loaded from a document
    pub(crate) fn insert_raw(
        &mut self,
        subject: TileKey,
        direction: Direction,
        neighbor: TileKey,
        count: u64,
    ) {
        let slot = self
            .entries
            .entry(subject)
            .or_default()
            .entry(direction)
            .or_default()
            .entry(neighbor)
            .or_insert(0);
        *slot = slot.saturating_add(count);
    }

    /// Count recorded for a triple, zero when absent
    pub fn count(&self, subject: &TileKey, direction: Direction, neighbor: &TileKey) -> u64 {
        self.neighbors(subject, direction)
            .and_then(|counts| counts.get(neighbor))
            .copied()
            .unwrap_or(0)
    }

    /// Neighbor counts for a subject in one direction
    pub fn neighbors(&self, subject: &TileKey, direction: Direction) -> Option<&NeighborCounts> {
        self.entries
            .get(subject)
            .and_then(|directions| directions.get(&direction))
    }

    /// All directions recorded for a subject
    pub fn directions(&self, subject: &TileKey) -> Option<&DirectionalCounts> {
        self.entries.get(subject)
    }

    /// Iterate subjects in canonical key order
    pub fn iter(&self) -> impl Iterator<Item = (&TileKey, &DirectionalCounts)> {
        self.entries.iter()
    }

    /// Iterate every `(subject, direction, neighbor, count)` triple
    pub fn triples(&self) -> impl Iterator<Item = (TileKey, Direction, TileKey, u64)> + '_ {
        self.entries.iter().flat_map(|(&subject, directions)| {
            directions.iter().flat_map(move |(&direction, neighbors)| {
                neighbors
                    .iter()
                    .map(move |(&neighbor, &count)| (subject, direction, neighbor, count))
            })
        })
    }

    /// Every key appearing as a subject or as a neighbor
    pub fn keys(&self) -> BTreeSet<TileKey> {
        self.triples()
            .flat_map(|(subject, _, neighbor, _)| [subject, neighbor])
            .chain(self.entries.keys().copied())
            .collect()
    }

    /// Number of subjects with at least one recorded neighbor
    pub fn subject_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of every recorded count
    pub fn total_pairs(&self) -> u64 {
        self.triples()
            .fold(0_u64, |total, (_, _, _, count)| total.saturating_add(count))
    }

    /// Check whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Add every count in `incoming` onto `base`
///
/// Merging is associative and commutative and never removes a count, so
/// observations from several sessions can be folded in any order.
pub fn merge(base: &mut AdjacencyTable, incoming: AdjacencyTable) {
    for (subject, directions) in incoming.entries {
        for (direction, neighbors) in directions {
            for (neighbor, count) in neighbors {
                base.insert_raw(subject, direction, neighbor, count);
            }
        }
    }
}
