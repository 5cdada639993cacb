//! Ruleset document construction and incremental merging
//!
//! Batch extraction calls [`build`] once over a whole corpus. Editing sessions
//! later fold their observations in with [`merge_into_document`], which builds on
//! the already filtered adjacency of the existing document. A merged document can
//! therefore differ from a fresh rebuild over the same maps: pairs filtered out
//! earlier are not resurrected.

use crate::adjacency::table::{AdjacencyTable, merge};
use crate::io::configuration::EDITOR_SOURCE;
use crate::ruleset::document::{Metadata, RulesetDocument, TileInfo, TileRegistry};
use crate::ruleset::labels::LabelLookup;
use crate::ruleset::ranked::Ruleset;
use tracing::info;

/// Filter and rank a table into a fresh document
///
/// Neighbors seen fewer than `min_count` times are dropped. Metadata is computed
/// from what survives, never from the unfiltered input. The source list is left
/// empty for the caller to fill.
pub fn build(table: &AdjacencyTable, min_count: u32, labels: &LabelLookup) -> RulesetDocument {
    let adjacency = Ruleset::rank(table, min_count);
    let tile_info = tile_registry(&adjacency, labels);

    let mut metadata = Metadata {
        min_count_filter: min_count,
        ..Metadata::default()
    };
    metadata.recount(&adjacency);

    info!(
        min_count,
        unique_tiles = metadata.unique_tiles_observed,
        total_pairs = metadata.total_adjacency_pairs,
        "built ruleset"
    );

    RulesetDocument {
        metadata,
        tile_info,
        adjacency,
    }
}

/// Describe every key that appears in a ruleset as a subject or a neighbor
pub fn tile_registry(ruleset: &Ruleset, labels: &LabelLookup) -> TileRegistry {
    ruleset
        .keys()
        .into_iter()
        .map(|key| {
            let label = labels.label(key.base()).map(str::to_string);
            (key, TileInfo::new(&key, label))
        })
        .collect()
}

/// Fold new observations into an existing document
///
/// Labels already recorded in the existing registry are reused for the rebuilt
/// registry. The editor source marker is added to the source list once.
pub fn merge_into_document(
    existing: RulesetDocument,
    new_observations: AdjacencyTable,
) -> RulesetDocument {
    merge_into_document_with_labels(existing, new_observations, &LabelLookup::new())
}

/// Fold new observations into an existing document using fresh labels
///
/// `labels` take precedence; labels from the existing registry fill any gaps.
pub fn merge_into_document_with_labels(
    existing: RulesetDocument,
    new_observations: AdjacencyTable,
    labels: &LabelLookup,
) -> RulesetDocument {
    let RulesetDocument {
        mut metadata,
        tile_info,
        adjacency,
    } = existing;

    let added_pairs = new_observations.total_pairs();
    let mut table = adjacency.to_table();
    merge(&mut table, new_observations);

    // Everything in the merged table already passed a filter or is a fresh observation
    let adjacency = Ruleset::rank(&table, 0);

    let mut lookup = labels.clone();
    lookup.fill_from(&LabelLookup::from_registry(&tile_info));
    let tile_info = tile_registry(&adjacency, &lookup);

    metadata.add_source(EDITOR_SOURCE);
    metadata.recount(&adjacency);

    info!(
        added_pairs,
        unique_tiles = metadata.unique_tiles_observed,
        total_pairs = metadata.total_adjacency_pairs,
        "merged observations into ruleset"
    );

    RulesetDocument {
        metadata,
        tile_info,
        adjacency,
    }
}
