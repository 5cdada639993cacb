//! Packing constants, reserved identifiers and runtime configuration defaults

use crate::tile::orientation::PackedId;

// Tiled stores orientation in the top three bits of every cell value
/// Horizontal flip flag bit
pub const FLIPPED_HORIZONTALLY: PackedId = 0x8000_0000;
/// Vertical flip flag bit
pub const FLIPPED_VERTICALLY: PackedId = 0x4000_0000;
/// Diagonal flip flag bit
pub const FLIPPED_DIAGONALLY: PackedId = 0x2000_0000;
/// Mask selecting the base identity bits
pub const BASE_ID_MASK: PackedId = 0x1FFF_FFFF;

/// Base identity of an empty cell
pub const EMPTY_BASE_ID: u32 = 0;

// Fills the unused canvas in source maps and would otherwise neighbor everything
/// Base identity of the background filler tile
pub const BACKGROUND_BASE_ID: u32 = 1;

// Ruleset document settings
/// Default minimum occurrence count for a neighbor to survive filtering
pub const DEFAULT_MIN_COUNT: u32 = 1;
/// Source-list entry marking observations merged from an editing session
pub const EDITOR_SOURCE: &str = "editor";
/// Description of the tile key grammar stored in document metadata
pub const KEY_FORMAT: &str = "GID or GID:FLAGS where FLAGS is combination of H, V, D";

// Default file locations
/// Default path of the persisted ruleset document
pub const DEFAULT_RULESET_FILE: &str = "tile_adjacency.json";
/// Default path of the tile label index
pub const DEFAULT_LABEL_INDEX: &str = "tile_index.json";
/// Extension of map files picked up from a directory
pub const MAP_FILE_EXTENSION: &str = "json";

// Neighbor listing
/// Default number of ranked neighbors listed per direction
pub const DEFAULT_NEIGHBOR_LIMIT: usize = 5;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Logging
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Log filter used under `--quiet` when `RUST_LOG` is unset
pub const QUIET_LOG_FILTER: &str = "warn";
