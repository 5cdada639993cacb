//! Rectangular grids of packed tile identifiers
//!
//! A grid is the boundary with whatever produces map data: row-major packed
//! 32-bit values with explicit dimensions. Nothing here parses map formats.

use crate::io::error::{Result, invalid_grid};
use crate::tile::key::TileKey;
use crate::tile::orientation::{PackedId, Transform, decode, orientation_to_transform};
use ndarray::Array2;

/// Finite grid of packed identifiers indexed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<PackedId>,
}

impl Grid {
    /// Wrap an existing array
    pub const fn new(cells: Array2<PackedId>) -> Self {
        Self { cells }
    }

    /// Build a grid from row-major cell values
    ///
    /// # Errors
    ///
    /// Returns an error if `cells.len()` differs from `width * height`
    pub fn from_row_major(width: usize, height: usize, cells: Vec<PackedId>) -> Result<Self> {
        let supplied = cells.len();
        Array2::from_shape_vec((height, width), cells)
            .map(Self::new)
            .map_err(|err| {
                invalid_grid(&format!(
                    "{width}x{height} grid needs {} cells, got {supplied} ({err})",
                    width.saturating_mul(height)
                ))
            })
    }

    /// Build a grid from nested rows
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have differing lengths
    pub fn from_rows(rows: &[Vec<PackedId>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(invalid_grid(&format!(
                "row {index} has {} cells, expected {width}",
                row.len()
            )));
        }
        let cells = rows.iter().flatten().copied().collect();
        Self::from_row_major(width, rows.len(), cells)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Dimensions as `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Packed value at `(row, col)`, if inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<PackedId> {
        self.cells.get((row, col)).copied()
    }

    /// Decoded key at `(row, col)`, if inside the grid
    pub fn key(&self, row: usize, col: usize) -> Option<TileKey> {
        self.get(row, col).map(TileKey::from_packed)
    }

    /// Iterate `((row, col), packed)` in row-major order
    pub fn indexed_cells(&self) -> impl Iterator<Item = ((usize, usize), PackedId)> + '_ {
        self.cells.indexed_iter().map(|(pos, &packed)| (pos, packed))
    }

    /// Base identities with the orientation bits stripped
    pub fn base_ids(&self) -> Array2<u32> {
        self.cells.mapv(|packed| decode(packed).0)
    }

    /// Per-cell rotate-then-flip transforms for drawing oriented tiles
    pub fn transforms(&self) -> Array2<Transform> {
        self.cells
            .mapv(|packed| orientation_to_transform(decode(packed).1))
    }

    /// Underlying array
    pub const fn cells(&self) -> &Array2<PackedId> {
        &self.cells
    }
}
