//! Grid walking for neighbor-frequency collection
//!
//! Every recordable cell looks at its four cardinal neighbors independently, so a
//! pair of adjacent tiles is recorded once from each side. Empty cells and the
//! background filler are skipped on both ends of a pair.

use crate::adjacency::grid::Grid;
use crate::adjacency::table::AdjacencyTable;
use crate::tile::direction::Direction;
use crate::tile::key::TileKey;
use tracing::debug;

/// Record every recordable neighbor pair of `grid` into `into`
///
/// Returns the number of observations added.
pub fn collect(grid: &Grid, into: &mut AdjacencyTable) -> usize {
    let dims = grid.dim();
    let mut recorded = 0;

    for ((row, col), packed) in grid.indexed_cells() {
        let subject = TileKey::from_packed(packed);
        if !subject.is_recordable() {
            continue;
        }

        for direction in Direction::ALL {
            let Some((next_row, next_col)) = direction.step((row, col), dims) else {
                continue;
            };
            let Some(neighbor) = grid.key(next_row, next_col) else {
                continue;
            };
            if neighbor.is_recordable() {
                into.increment(subject, direction, neighbor);
                recorded += 1;
            }
        }
    }

    debug!(
        rows = dims.0,
        cols = dims.1,
        recorded,
        "collected adjacency pairs from grid"
    );
    recorded
}

/// Fold [`collect`] over every grid into a fresh table
///
/// Counts only sum, so grid order does not affect the result.
pub fn collect_many<'a, I>(grids: I) -> AdjacencyTable
where
    I: IntoIterator<Item = &'a Grid>,
{
    let mut table = AdjacencyTable::new();
    for grid in grids {
        collect(grid, &mut table);
    }
    table
}
