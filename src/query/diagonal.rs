//! Two-hop inference of diagonal neighbors
//!
//! Only cardinal pairs are ever recorded. A diagonal neighbor is estimated by
//! stepping once in `dir_a` and then once in `dir_b`, scoring each path by the sum
//! of the two counts.
//!
//! Each query costs `O(|dir_a neighbors| * |dir_b neighbors|)`. Neighbor lists in
//! practice hold a handful of entries, which keeps this cheap; nothing bounds it
//! for arbitrarily large lists.

use crate::ruleset::ranked::Ruleset;
use crate::tile::direction::Direction;
use crate::tile::key::TileKey;

/// Best tile to place diagonally from `subject`, reached via `dir_a` then `dir_b`
///
/// For every neighbor `N` of `subject` in `dir_a` and every neighbor `M` of `N` in
/// `dir_b`, the score is `count(subject, dir_a, N) + count(N, dir_b, M)`. The first
/// pair reaching the highest score wins, iterating both lists in ranked order.
/// Returns `None` when `subject` has no `dir_a` neighbors or none of them has a
/// `dir_b` neighbor, or when every path scores zero.
pub fn infer_diagonal(
    ruleset: &Ruleset,
    subject: &TileKey,
    dir_a: Direction,
    dir_b: Direction,
) -> Option<TileKey> {
    let mut best: Option<(u64, TileKey)> = None;

    for first in ruleset.neighbors(subject, dir_a) {
        for second in ruleset.neighbors(&first.key, dir_b) {
            let score = first.count.saturating_add(second.count);
            // Strict comparison keeps the earliest pair on ties; zero never wins
            if score > best.map_or(0, |(best_score, _)| best_score) {
                best = Some((score, second.key));
            }
        }
    }

    best.map(|(_, key)| key)
}
