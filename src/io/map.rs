//! Editor map files
//!
//! A map file is `{"width": W, "height": H, "grid": [[packed, ...], ...]}` with
//! one inner array per row. Other keys, such as precomputed transforms, are
//! ignored: orientation is always decoded from the packed values.

use crate::adjacency::grid::Grid;
use crate::io::error::{Result, RulesError, WithPath, invalid_grid};
use crate::tile::orientation::PackedId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Map file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapFile {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Packed identifiers, one inner vector per row
    pub grid: Vec<Vec<PackedId>>,
}

impl MapFile {
    /// Parse a map file
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a map document
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| RulesError::Serialization {
            path: "<inline>".into(),
            source,
        })
    }

    /// Read a map file from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path, "read map")?;
        serde_json::from_str(&text).map_err(|source| RulesError::Serialization {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Convert into a grid, checking the declared dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the row count or any row length disagrees with the
    /// declared dimensions
    pub fn into_grid(self) -> Result<Grid> {
        if self.grid.len() != self.height {
            return Err(invalid_grid(&format!(
                "declared height {} but found {} rows",
                self.height,
                self.grid.len()
            )));
        }
        let grid = Grid::from_rows(&self.grid)?;
        if self.height > 0 && grid.width() != self.width {
            return Err(invalid_grid(&format!(
                "declared width {} but rows have {} cells",
                self.width,
                grid.width()
            )));
        }
        Ok(grid)
    }
}

/// Read a map file and convert it into a grid
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated
pub fn load_grid(path: &Path) -> Result<Grid> {
    MapFile::load(path)?.into_grid().map_err(|err| match err {
        RulesError::InvalidGrid { reason } => {
            invalid_grid(&format!("{}: {reason}", path.display()))
        }
        other => other,
    })
}
