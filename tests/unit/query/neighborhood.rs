//! Tests for the 3x3 recommendation grid

#[cfg(test)]
mod tests {
    use tilerules::adjacency::table::AdjacencyTable;
    use tilerules::query::neighborhood::{CellSource, neighborhood};
    use tilerules::ruleset::ranked::Ruleset;
    use tilerules::tile::direction::Direction;
    use tilerules::tile::key::TileKey;

    fn key(base: u32) -> TileKey {
        TileKey::plain(base)
    }

    // Tests corners chain the vertical direction before the horizontal one
    // Verified by swapping the corner direction order
    #[test]
    fn test_cell_sources() {
        assert_eq!(CellSource::at(1, 1), Some(CellSource::Center));
        assert_eq!(CellSource::at(0, 1), Some(CellSource::Edge(Direction::Top)));
        assert_eq!(CellSource::at(1, 0), Some(CellSource::Edge(Direction::Left)));
        assert_eq!(
            CellSource::at(0, 2),
            Some(CellSource::Corner(Direction::Top, Direction::Right))
        );
        assert_eq!(
            CellSource::at(2, 0),
            Some(CellSource::Corner(Direction::Bottom, Direction::Left))
        );
        assert_eq!(CellSource::at(3, 0), None);
    }

    // Tests a fully connected subject fills all nine cells
    // Verified by leaving corners unresolved
    #[test]
    fn test_full_neighborhood() {
        let mut table = AdjacencyTable::new();
        table.add(key(5), Direction::Top, key(2), 1);
        table.add(key(5), Direction::Bottom, key(8), 1);
        table.add(key(5), Direction::Left, key(4), 1);
        table.add(key(5), Direction::Right, key(6), 1);
        table.add(key(2), Direction::Left, key(1_001), 1);
        table.add(key(2), Direction::Right, key(3), 1);
        table.add(key(8), Direction::Left, key(7), 1);
        table.add(key(8), Direction::Right, key(9), 1);
        let ruleset = Ruleset::rank(&table, 1);

        let block = neighborhood(&ruleset, &key(5));
        assert_eq!(block.resolved_count(), 9);
        assert_eq!(block.get(1, 1), Some(key(5)));
        assert_eq!(block.get(0, 0), Some(key(1_001)));
        assert_eq!(block.get(0, 2), Some(key(3)));
        assert_eq!(block.get(2, 0), Some(key(7)));
        assert_eq!(block.at_offset(1, 1), Some(key(9)));
        assert_eq!(block.at_offset(0, -1), Some(key(4)));
        assert_eq!(block.at_offset(-2, 0), None);
    }

    // Tests an unknown subject resolves only the center
    // Verified by returning an empty center for unknown tiles
    #[test]
    fn test_unknown_subject() {
        let block = neighborhood(&Ruleset::new(), &key(77));
        assert_eq!(block.resolved_count(), 1);
        assert_eq!(
            block.rows().get(1).and_then(|row| row.get(1)).copied().flatten(),
            Some(key(77))
        );
        assert_eq!(block.get(0, 1), None);
    }
}
