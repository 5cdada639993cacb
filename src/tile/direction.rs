//! Cardinal directions used to index adjacency statistics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a subject tile on which a neighbor was observed
///
/// Variant order is the order directions are written to a ruleset document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Neighbor in the next column
    Right,
    /// Neighbor in the next row
    Bottom,
    /// Neighbor in the previous column
    Left,
    /// Neighbor in the previous row
    Top,
}

impl Direction {
    /// All directions in document order
    pub const ALL: [Self; 4] = [Self::Right, Self::Bottom, Self::Left, Self::Top];

    /// Row and column offset from a subject cell to its neighbor
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Bottom => (1, 0),
            Self::Left => (0, -1),
            Self::Top => (-1, 0),
        }
    }

    /// Direction pointing back from the neighbor to the subject
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
        }
    }

    /// Lowercase name used as the document key
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Top => "top",
        }
    }

    /// Step from `(row, col)` in this direction, if the result stays inside `dims`
    pub fn step(self, (row, col): (usize, usize), (rows, cols): (usize, usize)) -> Option<(usize, usize)> {
        let (dr, dc) = self.offset();
        let next_row = row.checked_add_signed(dr).filter(|&r| r < rows)?;
        let next_col = col.checked_add_signed(dc).filter(|&c| c < cols)?;
        Some((next_row, next_col))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
