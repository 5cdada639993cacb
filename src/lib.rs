//! Tile adjacency rule authoring for Wave Function Collapse tile sets
//!
//! Example maps are walked to count which oriented tiles sit next to each other
//! in each cardinal direction. The counts are filtered and ranked into a
//! persisted ruleset that can be merged into incrementally and queried for the
//! most plausible neighbors of a tile, including inferred diagonal neighbors.

#![forbid(unsafe_code)]

/// Directional neighbor-frequency collection and merging
pub mod adjacency;
/// Input/output operations and error handling
pub mod io;
/// Neighbor recommendation queries
pub mod query;
/// Ruleset building, persistence schema and labels
pub mod ruleset;
/// Packed identifier decoding, orientation flags and tile keys
pub mod tile;

pub use io::error::{Result, RulesError};
