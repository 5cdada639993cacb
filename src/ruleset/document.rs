//! Persisted ruleset document schema
//!
//! The document is a single JSON file with three sections: `metadata`,
//! `tile_info` and `adjacency`. Missing sections load as empty; anything present
//! must match the schema exactly, otherwise the whole load fails.

use crate::io::configuration::KEY_FORMAT;
use crate::io::error::{Result, RulesError};
use crate::ruleset::ranked::Ruleset;
use crate::tile::key::TileKey;
use crate::tile::orientation::{BaseId, OrientationFlags};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Summary of how a ruleset was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Names of the maps the statistics came from
    pub source_maps: Vec<String>,
    /// Sum of every surviving count
    pub total_adjacency_pairs: u64,
    /// Number of subjects with at least one surviving neighbor
    pub unique_tiles_observed: u64,
    /// Minimum count a neighbor needed to survive filtering
    pub min_count_filter: u32,
    /// Description of the tile key grammar
    pub key_format: String,
    /// Fields written by other tools, carried through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            source_maps: Vec::new(),
            total_adjacency_pairs: 0,
            unique_tiles_observed: 0,
            min_count_filter: 0,
            key_format: KEY_FORMAT.to_string(),
            extra: serde_json::Map::new(),
        }
    }
}

impl Metadata {
    /// Recompute the summary counts from a ruleset
    pub fn recount(&mut self, ruleset: &Ruleset) {
        self.total_adjacency_pairs = ruleset.total_pairs();
        self.unique_tiles_observed = ruleset.subject_count() as u64;
    }

    /// Append a source name unless it is already listed
    pub fn add_source(&mut self, source: &str) {
        if !self.source_maps.iter().any(|existing| existing == source) {
            self.source_maps.push(source.to_string());
        }
    }
}

/// Descriptive entry for one observed tile key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileInfo {
    /// Base identity
    pub gid: BaseId,
    /// Orientation flags in canonical form
    #[serde(serialize_with = "serialize_flags", deserialize_with = "deserialize_flags")]
    pub flip: OrientationFlags,
    /// Human-readable label from the asset index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_id: Option<String>,
}

impl TileInfo {
    /// Describe a key with an optional label
    pub const fn new(key: &TileKey, tile_id: Option<String>) -> Self {
        Self {
            gid: key.base(),
            flip: key.flags(),
            tile_id,
        }
    }
}

/// Every observed key with its descriptive info
pub type TileRegistry = BTreeMap<TileKey, TileInfo>;

/// Complete persisted ruleset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetDocument {
    /// Production summary
    pub metadata: Metadata,
    /// Registry of every key in the adjacency section
    pub tile_info: TileRegistry,
    /// Filtered, ranked statistics
    pub adjacency: Ruleset,
}

impl RulesetDocument {
    /// Parse and validate a document
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::MalformedDocument`] when any present section does
    /// not match the schema
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| RulesError::MalformedDocument {
            path: None,
            reason: err.to_string(),
        })
    }

    /// Render the document as two-space indented JSON
    ///
    /// Output is fully determined by the document contents.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| RulesError::Serialization {
            path: "<memory>".into(),
            source,
        })
    }
}

fn serialize_flags<S: Serializer>(
    flags: &OrientationFlags,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(flags)
}

struct FlagsVisitor;

impl Visitor<'_> for FlagsVisitor {
    type Value = OrientationFlags;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an in-order subset of H, V, D")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> std::result::Result<OrientationFlags, E> {
        text.parse().map_err(E::custom)
    }
}

fn deserialize_flags<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<OrientationFlags, D::Error> {
    deserializer.deserialize_str(FlagsVisitor)
}
