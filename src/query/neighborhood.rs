//! 3x3 recommendation around a subject tile
//!
//! The center is the subject itself. Each edge is the best direct neighbor in
//! that direction, and each corner is inferred by chaining the vertical direction
//! with the horizontal one. A cell is empty exactly when its lookup finds nothing.

use crate::query::diagonal::infer_diagonal;
use crate::query::neighbors::best_neighbor;
use crate::ruleset::ranked::Ruleset;
use crate::tile::direction::Direction;
use crate::tile::key::TileKey;

/// How one cell of the 3x3 neighborhood is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellSource {
    /// The subject tile
    Center,
    /// Direct lookup in one cardinal direction
    Edge(Direction),
    /// Diagonal inference, stepping in the first direction and then the second
    Corner(Direction, Direction),
}

impl CellSource {
    /// Resolution rule for the cell at `(row, col)` of the 3x3 block, `(1, 1)` being the center
    pub const fn at(row: usize, col: usize) -> Option<Self> {
        match (row, col) {
            (0, 0) => Some(Self::Corner(Direction::Top, Direction::Left)),
            (0, 1) => Some(Self::Edge(Direction::Top)),
            (0, 2) => Some(Self::Corner(Direction::Top, Direction::Right)),
            (1, 0) => Some(Self::Edge(Direction::Left)),
            (1, 1) => Some(Self::Center),
            (1, 2) => Some(Self::Edge(Direction::Right)),
            (2, 0) => Some(Self::Corner(Direction::Bottom, Direction::Left)),
            (2, 1) => Some(Self::Edge(Direction::Bottom)),
            (2, 2) => Some(Self::Corner(Direction::Bottom, Direction::Right)),
            _ => None,
        }
    }

    /// Resolve this cell for `subject`
    pub fn resolve(self, ruleset: &Ruleset, subject: &TileKey) -> Option<TileKey> {
        match self {
            Self::Center => Some(*subject),
            Self::Edge(direction) => best_neighbor(ruleset, subject, direction),
            Self::Corner(dir_a, dir_b) => infer_diagonal(ruleset, subject, dir_a, dir_b),
        }
    }
}

/// Recommended tiles around a subject, indexed `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    cells: [[Option<TileKey>; 3]; 3],
}

impl Neighborhood {
    /// Tile recommended for `(row, col)`, `(1, 1)` being the subject
    pub fn get(&self, row: usize, col: usize) -> Option<TileKey> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .flatten()
    }

    /// Tile recommended at a row and column offset from the subject, each in `-1..=1`
    pub fn at_offset(&self, row_offset: isize, col_offset: isize) -> Option<TileKey> {
        let row = 1_usize.checked_add_signed(row_offset)?;
        let col = 1_usize.checked_add_signed(col_offset)?;
        self.get(row, col)
    }

    /// Rows of the neighborhood, top to bottom
    pub const fn rows(&self) -> &[[Option<TileKey>; 3]; 3] {
        &self.cells
    }

    /// Number of cells that resolved to a tile, the center included
    pub fn resolved_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

/// Resolve all nine cells around `subject`
pub fn neighborhood(ruleset: &Ruleset, subject: &TileKey) -> Neighborhood {
    let mut cells = [[None; 3]; 3];
    for (row, row_cells) in cells.iter_mut().enumerate() {
        for (col, cell) in row_cells.iter_mut().enumerate() {
            *cell = CellSource::at(row, col).and_then(|source| source.resolve(ruleset, subject));
        }
    }
    Neighborhood { cells }
}
