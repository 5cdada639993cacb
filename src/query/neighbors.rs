//! Direct cardinal neighbor lookups

use crate::ruleset::ranked::{RankedNeighbor, Ruleset};
use crate::tile::direction::Direction;
use crate::tile::key::TileKey;

/// Most frequent neighbor of `subject` in `direction`
///
/// Equal counts resolve to the smaller canonical key, the first entry of the
/// ranked list.
pub fn best_neighbor(ruleset: &Ruleset, subject: &TileKey, direction: Direction) -> Option<TileKey> {
    ruleset
        .neighbors(subject, direction)
        .first()
        .map(|neighbor| neighbor.key)
}

/// First `k` entries of the ranked list; fewer when fewer were recorded
pub fn top_k_neighbors<'a>(
    ruleset: &'a Ruleset,
    subject: &TileKey,
    direction: Direction,
    k: usize,
) -> &'a [RankedNeighbor] {
    let neighbors = ruleset.neighbors(subject, direction);
    neighbors.get(..k.min(neighbors.len())).unwrap_or_default()
}
