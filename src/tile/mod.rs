//! Tile identity: packed identifiers, orientation flags, canonical keys and directions
//!
//! Everything in here is pure and stateless. Map data arrives as packed 32-bit
//! identifiers whose top three bits carry orientation flags; the rest of the crate
//! works exclusively with the decoded [`TileKey`].

/// Cardinal directions and their grid offsets
pub mod direction;
/// Canonical tile keys and their string grammar
pub mod key;
/// Packed identifier decoding and orientation transforms
pub mod orientation;

pub use direction::Direction;
pub use key::{TileKey, encode_key, parse_key};
pub use orientation::{BaseId, OrientationFlags, PackedId, Transform, decode};
