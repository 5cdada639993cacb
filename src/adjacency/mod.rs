//! Directional neighbor-frequency statistics gathered from example grids

/// Grid walking and multi-grid aggregation
pub mod collector;
/// Rectangular grids of packed identifiers
pub mod grid;
/// Accumulated neighbor counts with additive merge
pub mod table;

pub use collector::{collect, collect_many};
pub use grid::Grid;
pub use table::{AdjacencyTable, merge};
