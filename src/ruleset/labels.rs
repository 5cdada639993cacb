//! Base identity to human-readable label lookup
//!
//! Labels come from the tile asset index (`tile_index.json`). Any identity
//! without a label stands for itself.

use crate::io::error::{Result, RulesError, WithPath};
use crate::ruleset::document::TileRegistry;
use crate::tile::key::TileKey;
use crate::tile::orientation::BaseId;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Deserialize)]
struct IndexEntry {
    gid: BaseId,
    id: String,
}

#[derive(Deserialize)]
struct IndexFile {
    #[serde(default)]
    tiles: Vec<IndexEntry>,
}

/// Optional labels keyed by base identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelLookup {
    labels: BTreeMap<BaseId, String>,
}

impl LabelLookup {
    /// Create an empty lookup
    pub const fn new() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// Parse a tile index document of the form `{"tiles": [{"gid": 17, "id": "tile_0_16"}]}`
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid index document
    pub fn from_index_json(text: &str) -> Result<Self> {
        Self::parse_index(text).map_err(|source| RulesError::Serialization {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Load a tile index file; a missing file yields an empty lookup
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "label index not found, tiles will show numeric ids");
            return Ok(Self::new());
        }
        let text = std::fs::read_to_string(path).with_path(path, "read label index")?;
        Self::parse_index(&text).map_err(|source| RulesError::Serialization {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse_index(text: &str) -> serde_json::Result<Self> {
        let index: IndexFile = serde_json::from_str(text)?;
        Ok(index
            .tiles
            .into_iter()
            .map(|entry| (entry.gid, entry.id))
            .collect())
    }

    /// Harvest the labels recorded in an existing tile registry
    pub fn from_registry(registry: &TileRegistry) -> Self {
        registry
            .iter()
            .filter_map(|(key, info)| {
                info.tile_id
                    .as_ref()
                    .map(|label| (key.base(), label.clone()))
            })
            .collect()
    }

    /// Add a label, replacing any previous one for the same identity
    pub fn insert(&mut self, base: BaseId, label: impl Into<String>) {
        self.labels.insert(base, label.into());
    }

    /// Add every label from `other` that is not already known here
    pub fn fill_from(&mut self, other: &Self) {
        for (&base, label) in &other.labels {
            self.labels.entry(base).or_insert_with(|| label.clone());
        }
    }

    /// Label for a base identity, if known
    pub fn label(&self, base: BaseId) -> Option<&str> {
        self.labels.get(&base).map(String::as_str)
    }

    /// Display form of a key: `<label>` or `<label>:<flags>`, numeric when unlabeled
    pub fn display_label(&self, key: &TileKey) -> String {
        let name = self
            .label(key.base())
            .map_or_else(|| key.base().to_string(), str::to_string);
        if key.flags().is_empty() {
            name
        } else {
            format!("{name}:{}", key.flags())
        }
    }

    /// Number of labelled identities
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether no labels are known
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<(BaseId, String)> for LabelLookup {
    fn from_iter<I: IntoIterator<Item = (BaseId, String)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}
