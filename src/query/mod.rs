//! Authoring-assistance queries over a ruleset
//!
//! All queries are total: missing data yields no result rather than an error.

/// Two-hop inference of diagonal neighbors
pub mod diagonal;
/// 3x3 recommendation around a subject tile
pub mod neighborhood;
/// Direct cardinal neighbor lookups
pub mod neighbors;

pub use diagonal::infer_diagonal;
pub use neighborhood::{CellSource, Neighborhood, neighborhood};
pub use neighbors::{best_neighbor, top_k_neighbors};
