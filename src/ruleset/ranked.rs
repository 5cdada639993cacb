//! Count-ranked neighbor lists
//!
//! Every list is kept in canonical order: count descending, ties broken by the
//! ascending canonical key string. Queries take the first entries of a list, so
//! this order is what makes their answers reproducible.

use crate::adjacency::table::AdjacencyTable;
use crate::tile::direction::Direction;
use crate::tile::key::TileKey;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::marker::PhantomData;

/// One neighbor and how often it was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankedNeighbor {
    /// Neighbor tile
    pub key: TileKey,
    /// Number of observations
    pub count: u64,
}

impl RankedNeighbor {
    /// Create a ranked entry
    pub const fn new(key: TileKey, count: u64) -> Self {
        Self { key, count }
    }

    // Count descending, then key ascending
    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.key.cmp(&other.key))
    }
}

type RankedDirections = BTreeMap<Direction, Vec<RankedNeighbor>>;

/// Filtered adjacency statistics with ranked neighbor lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ruleset {
    entries: BTreeMap<TileKey, RankedDirections>,
}

impl Ruleset {
    /// Create an empty ruleset
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Rank a table, keeping only neighbors seen at least `min_count` times
    ///
    /// Directions left without neighbors are dropped, and so are subjects left
    /// without directions.
    pub fn rank(table: &AdjacencyTable, min_count: u32) -> Self {
        let threshold = u64::from(min_count);
        let mut entries = BTreeMap::new();

        for (&subject, directions) in table.iter() {
            let mut ranked_directions = RankedDirections::new();
            for direction in Direction::ALL {
                let Some(counts) = directions.get(&direction) else {
                    continue;
                };
                let ranked: Vec<RankedNeighbor> = counts
                    .iter()
                    .filter(|&(_, &count)| count >= threshold)
                    .map(|(&key, &count)| RankedNeighbor::new(key, count))
                    .collect();
                if !ranked.is_empty() {
                    ranked_directions.insert(direction, sorted(ranked));
                }
            }
            if !ranked_directions.is_empty() {
                entries.insert(subject, ranked_directions);
            }
        }

        Self { entries }
    }

    /// Convert back into raw counts for merging
    pub fn to_table(&self) -> AdjacencyTable {
        let mut table = AdjacencyTable::new();
        for (&subject, directions) in &self.entries {
            for (&direction, neighbors) in directions {
                for neighbor in neighbors {
                    table.insert_raw(subject, direction, neighbor.key, neighbor.count);
                }
            }
        }
        table
    }

    /// Ranked neighbors of `subject` in `direction`; empty when none were recorded
    pub fn neighbors(&self, subject: &TileKey, direction: Direction) -> &[RankedNeighbor] {
        self.entries
            .get(subject)
            .and_then(|directions| directions.get(&direction))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check whether `subject` has any recorded neighbor
    pub fn contains(&self, subject: &TileKey) -> bool {
        self.entries.contains_key(subject)
    }

    /// Iterate every `(subject, direction, ranked list)` in document order
    pub fn lists(&self) -> impl Iterator<Item = (TileKey, Direction, &[RankedNeighbor])> {
        self.entries.iter().flat_map(|(&subject, directions)| {
            directions
                .iter()
                .map(move |(&direction, neighbors)| (subject, direction, neighbors.as_slice()))
        })
    }

    /// Every key appearing as a subject or as a neighbor
    pub fn keys(&self) -> BTreeSet<TileKey> {
        let mut keys: BTreeSet<TileKey> = self.entries.keys().copied().collect();
        for (_, _, neighbors) in self.lists() {
            keys.extend(neighbors.iter().map(|neighbor| neighbor.key));
        }
        keys
    }

    /// Number of subjects
    pub fn subject_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of every surviving count
    pub fn total_pairs(&self) -> u64 {
        self.lists()
            .flat_map(|(_, _, neighbors)| neighbors.iter())
            .fold(0_u64, |total, neighbor| total.saturating_add(neighbor.count))
    }

    /// Check whether the ruleset holds no subjects
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Loaded lists may come from any writer; restore canonical order and drop empties
    fn from_loaded(loaded: BTreeMap<TileKey, BTreeMap<Direction, NeighborList>>) -> Self {
        let entries = loaded
            .into_iter()
            .filter_map(|(subject, directions)| {
                let ranked: RankedDirections = directions
                    .into_iter()
                    .filter(|(_, list)| !list.0.is_empty())
                    .map(|(direction, list)| (direction, sorted(list.0)))
                    .collect();
                (!ranked.is_empty()).then_some((subject, ranked))
            })
            .collect();
        Self { entries }
    }
}

fn sorted(mut neighbors: Vec<RankedNeighbor>) -> Vec<RankedNeighbor> {
    neighbors.sort_by(RankedNeighbor::rank_order);
    neighbors
}

struct NeighborsRef<'a>(&'a [RankedNeighbor]);

impl Serialize for NeighborsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for neighbor in self.0 {
            map.serialize_entry(&neighbor.key, &neighbor.count)?;
        }
        map.end()
    }
}

struct DirectionsRef<'a>(&'a RankedDirections);

impl Serialize for DirectionsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (direction, neighbors) in self.0 {
            map.serialize_entry(direction, &NeighborsRef(neighbors))?;
        }
        map.end()
    }
}

impl Serialize for Ruleset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (subject, directions) in &self.entries {
            map.serialize_entry(subject, &DirectionsRef(directions))?;
        }
        map.end()
    }
}

/// Neighbor list as read from a document, in file order
struct NeighborList(Vec<RankedNeighbor>);

struct NeighborListVisitor;

impl<'de> Visitor<'de> for NeighborListVisitor {
    type Value = NeighborList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from tile key to non-negative count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<NeighborList, A::Error> {
        let mut seen = BTreeSet::new();
        let mut neighbors = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, count)) = access.next_entry::<TileKey, u64>()? {
            if !seen.insert(key) {
                return Err(de::Error::custom(format!("duplicate neighbor key {key}")));
            }
            neighbors.push(RankedNeighbor::new(key, count));
        }
        Ok(NeighborList(neighbors))
    }
}

impl<'de> Deserialize<'de> for NeighborList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NeighborListVisitor)
    }
}

/// Map as read from a document, rejecting repeated keys
struct UniqueMap<K, V>(BTreeMap<K, V>);

struct UniqueMapVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for UniqueMapVisitor<K, V>
where
    K: Deserialize<'de> + Ord + fmt::Display,
    V: Deserialize<'de>,
{
    type Value = UniqueMap<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map without repeated keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<UniqueMap<K, V>, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some(key) = access.next_key::<K>()? {
            if entries.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate key {key}")));
            }
            let value = access.next_value::<V>()?;
            entries.insert(key, value);
        }
        Ok(UniqueMap(entries))
    }
}

impl<'de, K, V> Deserialize<'de> for UniqueMap<K, V>
where
    K: Deserialize<'de> + Ord + fmt::Display,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(UniqueMapVisitor(PhantomData))
    }
}

impl<'de> Deserialize<'de> for Ruleset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let UniqueMap(subjects) =
            UniqueMap::<TileKey, UniqueMap<Direction, NeighborList>>::deserialize(deserializer)?;
        Ok(Self::from_loaded(
            subjects
                .into_iter()
                .map(|(subject, UniqueMap(directions))| (subject, directions))
                .collect(),
        ))
    }
}
