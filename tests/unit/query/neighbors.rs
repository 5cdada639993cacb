//! Tests for direct neighbor lookups

#[cfg(test)]
mod tests {
    use tilerules::adjacency::table::AdjacencyTable;
    use tilerules::query::neighbors::{best_neighbor, top_k_neighbors};
    use tilerules::ruleset::ranked::Ruleset;
    use tilerules::tile::direction::Direction;
    use tilerules::tile::key::TileKey;

    fn key(base: u32) -> TileKey {
        TileKey::plain(base)
    }

    fn ruleset() -> Ruleset {
        let mut table = AdjacencyTable::new();
        table.add(key(5), Direction::Top, key(9), 4);
        table.add(key(5), Direction::Top, key(3), 4);
        table.add(key(5), Direction::Top, key(11), 1);
        Ruleset::rank(&table, 1)
    }

    // Tests equal counts resolve to the smaller key text
    // Verified by keeping insertion order on ties
    #[test]
    fn test_best_neighbor_tie_break() {
        assert_eq!(best_neighbor(&ruleset(), &key(5), Direction::Top), Some(key(3)));
    }

    // Tests lookups with no data return nothing
    // Verified by falling back to the subject
    #[test]
    fn test_best_neighbor_absent() {
        let ruleset = ruleset();
        assert_eq!(best_neighbor(&ruleset, &key(5), Direction::Bottom), None);
        assert_eq!(best_neighbor(&ruleset, &key(42), Direction::Top), None);
    }

    // Tests top-k truncates to k and never pads
    // Verified by returning the full list regardless of k
    #[test]
    fn test_top_k_lengths() {
        let ruleset = ruleset();
        let two: Vec<u32> = top_k_neighbors(&ruleset, &key(5), Direction::Top, 2)
            .iter()
            .map(|neighbor| neighbor.key.base())
            .collect();
        assert_eq!(two, [3, 9]);
        assert_eq!(top_k_neighbors(&ruleset, &key(5), Direction::Top, 10).len(), 3);
        assert!(top_k_neighbors(&ruleset, &key(5), Direction::Top, 0).is_empty());
        assert!(top_k_neighbors(&ruleset, &key(7), Direction::Left, 3).is_empty());
    }
}
