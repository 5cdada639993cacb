//! Ruleset construction, persistence schema and tile registry
//!
//! A ruleset is the filtered, ranked form of an adjacency table. It is what gets
//! written to disk and what neighbor queries read.

/// Filtering, registry derivation and document merging
pub mod builder;
/// Persisted document schema
pub mod document;
/// Base identity to human-readable label lookup
pub mod labels;
/// Count-ranked neighbor lists
pub mod ranked;

pub use builder::{build, merge_into_document, merge_into_document_with_labels, tile_registry};
pub use document::{Metadata, RulesetDocument, TileInfo, TileRegistry};
pub use labels::LabelLookup;
pub use ranked::{RankedNeighbor, Ruleset};
