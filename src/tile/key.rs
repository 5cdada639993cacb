//! Canonical tile keys
//!
//! A [`TileKey`] is the unit of adjacency statistics: a base identity plus its
//! orientation flags. Its text form is `"<base>"` or `"<base>:<flags>"`, and keys
//! order by that text so documents list them the way a string sort would.

use crate::io::configuration::BASE_ID_MASK;
use crate::io::error::{Result, RulesError, malformed_key};
use crate::tile::orientation::{
    BaseId, OrientationFlags, PackedId, decode, encode, is_recordable,
};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

// "536870911:HVD" is the longest canonical key
const MAX_KEY_LEN: usize = 16;

/// Oriented tile identity used throughout adjacency statistics
///
/// Flipped variants are distinct keys: a mirrored tile's neighbors differ from
/// the unflipped tile's, so their statistics are never pooled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    base: BaseId,
    flags: OrientationFlags,
}

impl TileKey {
    /// Create a key, discarding base bits outside the 29-bit identity range
    pub const fn new(base: BaseId, flags: OrientationFlags) -> Self {
        Self {
            base: base & BASE_ID_MASK,
            flags,
        }
    }

    /// Create an unflipped key
    pub const fn plain(base: BaseId) -> Self {
        Self::new(base, OrientationFlags::NONE)
    }

    /// Decode a packed identifier into its key
    pub const fn from_packed(packed: PackedId) -> Self {
        let (base, flags) = decode(packed);
        Self { base, flags }
    }

    /// Base identity
    pub const fn base(&self) -> BaseId {
        self.base
    }

    /// Orientation flags
    pub const fn flags(&self) -> OrientationFlags {
        self.flags
    }

    /// Packed identifier carrying this key
    pub const fn packed(&self) -> PackedId {
        encode(self.base, self.flags)
    }

    /// Check whether this key takes part in adjacency statistics
    pub const fn is_recordable(&self) -> bool {
        is_recordable(self.base)
    }

    /// Canonical text rendered into a stack buffer
    fn canonical_bytes(&self) -> ([u8; MAX_KEY_LEN], usize) {
        let mut buffer = [0_u8; MAX_KEY_LEN];
        let capacity = buffer.len();
        let mut cursor = buffer.as_mut_slice();
        // Cannot overflow: the longest key fits the buffer
        let _ = write!(cursor, "{self}");
        let len = capacity - cursor.len();
        (buffer, len)
    }
}

impl Ord for TileKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, lhs_len) = self.canonical_bytes();
        let (rhs, rhs_len) = other.canonical_bytes();
        lhs.get(..lhs_len).cmp(&rhs.get(..rhs_len))
    }
}

impl PartialOrd for TileKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.is_empty() {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}:{}", self.base, self.flags)
        }
    }
}

impl FromStr for TileKey {
    type Err = RulesError;

    fn from_str(text: &str) -> Result<Self> {
        parse_key(text)
    }
}

/// Decode a packed identifier into its canonical key
pub const fn encode_key(packed: PackedId) -> TileKey {
    TileKey::from_packed(packed)
}

/// Parse the canonical text form of a key
///
/// Accepts `<digits>` or `<digits>:<flags>` where flags is a non-empty, in-order
/// subset of `H`, `V`, `D`. Leading zeros are rejected so that every accepted text
/// renders back to itself.
///
/// # Errors
///
/// Returns [`RulesError::MalformedKey`] when the text does not follow the grammar
/// or the base identity exceeds 29 bits.
pub fn parse_key(text: &str) -> Result<TileKey> {
    let (digits, flags) = match text.split_once(':') {
        Some((digits, flags)) => {
            if flags.is_empty() {
                return Err(malformed_key(text, "empty flag list after ':'"));
            }
            let flags = flags
                .parse::<OrientationFlags>()
                .map_err(|err| malformed_key(text, err))?;
            (digits, flags)
        }
        None => (text, OrientationFlags::NONE),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed_key(text, "base id must be decimal digits"));
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(malformed_key(text, "base id has leading zeros"));
    }

    let base = digits
        .parse::<u32>()
        .ok()
        .filter(|&base| base <= BASE_ID_MASK)
        .ok_or_else(|| malformed_key(text, "base id exceeds 29 bits"))?;

    Ok(TileKey::new(base, flags))
}

impl Serialize for TileKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let (buffer, len) = self.canonical_bytes();
        let text = buffer
            .get(..len)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default();
        serializer.serialize_str(text)
    }
}

struct TileKeyVisitor;

impl Visitor<'_> for TileKeyVisitor {
    type Value = TileKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a tile key like \"17\" or \"170:HV\"")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> std::result::Result<TileKey, E> {
        parse_key(text).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for TileKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(TileKeyVisitor)
    }
}
