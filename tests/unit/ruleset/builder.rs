//! Tests for document building and incremental merging

#[cfg(test)]
mod tests {
    use tilerules::adjacency::collector::collect_many;
    use tilerules::adjacency::grid::Grid;
    use tilerules::adjacency::table::AdjacencyTable;
    use tilerules::io::configuration::EDITOR_SOURCE;
    use tilerules::ruleset::builder::{build, merge_into_document, merge_into_document_with_labels};
    use tilerules::ruleset::labels::LabelLookup;
    use tilerules::tile::direction::Direction;
    use tilerules::tile::key::{TileKey, parse_key};

    fn key(text: &str) -> TileKey {
        parse_key(text).unwrap_or_else(|_| TileKey::plain(0))
    }

    fn table(triples: &[(&str, Direction, &str, u64)]) -> AdjacencyTable {
        let mut table = AdjacencyTable::new();
        for &(subject, direction, neighbor, count) in triples {
            table.add(key(subject), direction, key(neighbor), count);
        }
        table
    }

    // Tests metadata reflects only what survives filtering
    // Verified by counting the unfiltered table
    #[test]
    fn test_build_metadata_after_filter() {
        let input = table(&[
            ("5", Direction::Right, "7", 3),
            ("5", Direction::Right, "8", 1),
            ("9", Direction::Top, "5", 1),
        ]);
        let document = build(&input, 2, &LabelLookup::new());

        assert_eq!(document.metadata.min_count_filter, 2);
        assert_eq!(document.metadata.total_adjacency_pairs, 3);
        assert_eq!(document.metadata.unique_tiles_observed, 1);
        assert!(document.metadata.source_maps.is_empty());
        assert_eq!(document.adjacency.neighbors(&key("5"), Direction::Right).len(), 1);
    }

    // Tests the registry lists subjects and neighbors with their labels
    // Verified by registering subjects only
    #[test]
    fn test_build_registry() {
        let input = table(&[("5", Direction::Right, "7:HV", 1)]);
        let mut labels = LabelLookup::new();
        labels.insert(7, "water");
        let document = build(&input, 1, &labels);

        let keys: Vec<String> = document.tile_info.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["5", "7:HV"]);
        let water = document.tile_info.get(&key("7:HV"));
        assert_eq!(water.map(|info| info.gid), Some(7));
        assert_eq!(water.and_then(|info| info.tile_id.as_deref()), Some("water"));
        assert_eq!(document.tile_info.get(&key("5")).and_then(|info| info.tile_id.clone()), None);
    }

    // Tests building the same input twice renders identical bytes
    // Verified by iterating a hash map during ranking
    #[test]
    fn test_build_is_deterministic() {
        let grid = Grid::from_rows(&[vec![5, 7, 9], vec![9, 0x8000_0005, 7]]);
        assert!(grid.is_ok());
        if let Ok(grid) = grid {
            let first = build(&collect_many([&grid]), 1, &LabelLookup::new());
            let second = build(&collect_many([&grid]), 1, &LabelLookup::new());
            assert_eq!(first.to_json_string().ok(), second.to_json_string().ok());
        }
    }

    // Tests merging adds counts, marks the editor source once and recounts
    // Verified by replacing counts instead of adding
    #[test]
    fn test_merge_into_document() {
        let mut existing = build(&table(&[("5", Direction::Right, "7", 2)]), 1, &LabelLookup::new());
        existing.metadata.add_source("forest.tmx");

        let merged = merge_into_document(existing, table(&[("5", Direction::Right, "7", 1)]));
        assert_eq!(merged.adjacency.neighbors(&key("5"), Direction::Right).first().map(|n| n.count), Some(3));
        assert_eq!(merged.metadata.total_adjacency_pairs, 3);

        let again = merge_into_document(merged, table(&[("7", Direction::Left, "5", 1)]));
        assert_eq!(again.metadata.source_maps, ["forest.tmx", EDITOR_SOURCE]);
        assert_eq!(again.metadata.unique_tiles_observed, 2);
        assert_eq!(again.metadata.min_count_filter, 1);
    }

    // Tests merging nothing still marks the editor source
    // Verified by skipping the source update for empty input
    #[test]
    fn test_merge_empty_observations() {
        let existing = build(&table(&[("5", Direction::Top, "6", 4)]), 1, &LabelLookup::new());
        let merged = merge_into_document(existing.clone(), AdjacencyTable::new());
        assert_eq!(merged.adjacency, existing.adjacency);
        assert_eq!(merged.metadata.source_maps, [EDITOR_SOURCE]);
    }

    // Tests pairs filtered out earlier are not resurrected by a merge
    // Verified by rebuilding from raw observations
    #[test]
    fn test_merge_compounds_on_filtered_data() {
        let existing = build(
            &table(&[("5", Direction::Right, "7", 1), ("5", Direction::Right, "8", 3)]),
            2,
            &LabelLookup::new(),
        );
        let merged = merge_into_document(existing, table(&[("5", Direction::Right, "7", 1)]));
        let counts: Vec<(String, u64)> = merged
            .adjacency
            .neighbors(&key("5"), Direction::Right)
            .iter()
            .map(|neighbor| (neighbor.key.to_string(), neighbor.count))
            .collect();
        assert_eq!(counts, [("8".to_string(), 3), ("7".to_string(), 1)]);
    }

    // Tests labels from the existing registry are kept and fresh labels win
    // Verified by rebuilding the registry without labels
    #[test]
    fn test_merge_reuses_labels() {
        let mut labels = LabelLookup::new();
        labels.insert(5, "grass");
        labels.insert(7, "water");
        let existing = build(&table(&[("5", Direction::Right, "7", 1)]), 1, &labels);

        let kept = merge_into_document(existing.clone(), table(&[("9", Direction::Left, "5", 1)]));
        let label = |document: &tilerules::ruleset::RulesetDocument, text: &str| {
            document.tile_info.get(&key(text)).and_then(|info| info.tile_id.clone())
        };
        assert_eq!(label(&kept, "5").as_deref(), Some("grass"));
        assert_eq!(label(&kept, "9"), None);

        let mut fresh = LabelLookup::new();
        fresh.insert(7, "deep_water");
        let relabelled = merge_into_document_with_labels(existing, AdjacencyTable::new(), &fresh);
        assert_eq!(label(&relabelled, "7").as_deref(), Some("deep_water"));
        assert_eq!(label(&relabelled, "5").as_deref(), Some("grass"));
    }
}
