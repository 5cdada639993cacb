//! Packed tile identifier decoding and orientation transforms
//!
//! Map editors store a tile reference as one 32-bit value: the low 29 bits name the
//! unoriented graphic and bits 31, 30 and 29 flip it horizontally, vertically and
//! along its diagonal. The three flags are independent, giving eight orientations.

use crate::io::configuration::{
    BACKGROUND_BASE_ID, BASE_ID_MASK, EMPTY_BASE_ID, FLIPPED_DIAGONALLY, FLIPPED_HORIZONTALLY,
    FLIPPED_VERTICALLY,
};
use std::fmt;
use std::str::FromStr;

/// Packed tile identifier as stored in map data
pub type PackedId = u32;

/// Unoriented tile identity held in the low 29 bits of a [`PackedId`]
pub type BaseId = u32;

/// Set over the horizontal, vertical and diagonal flip flags
///
/// Rendered canonically as the present flags in `H`, `V`, `D` order with no
/// separators, and as the empty string when no flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct OrientationFlags(u8);

impl OrientationFlags {
    /// No flags set
    pub const NONE: Self = Self(0);
    /// Horizontal flip
    pub const H: Self = Self(0b001);
    /// Vertical flip
    pub const V: Self = Self(0b010);
    /// Diagonal flip (transpose)
    pub const D: Self = Self(0b100);

    /// Every flag subset, in ascending bit order
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    const LETTERS: [(Self, char); 3] = [(Self::H, 'H'), (Self::V, 'V'), (Self::D, 'D')];

    /// Extract the flags from the high bits of a packed identifier
    pub const fn from_packed(packed: PackedId) -> Self {
        let mut bits = 0;
        if packed & FLIPPED_HORIZONTALLY != 0 {
            bits |= Self::H.0;
        }
        if packed & FLIPPED_VERTICALLY != 0 {
            bits |= Self::V.0;
        }
        if packed & FLIPPED_DIAGONALLY != 0 {
            bits |= Self::D.0;
        }
        Self(bits)
    }

    /// High bits of a packed identifier carrying these flags
    pub const fn packed_bits(self) -> PackedId {
        let mut packed = 0;
        if self.contains(Self::H) {
            packed |= FLIPPED_HORIZONTALLY;
        }
        if self.contains(Self::V) {
            packed |= FLIPPED_VERTICALLY;
        }
        if self.contains(Self::D) {
            packed |= FLIPPED_DIAGONALLY;
        }
        packed
    }

    /// Check whether every flag in `other` is also set here
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether no flag is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for OrientationFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, letter) in Self::LETTERS {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a flag string is not an in-order subset of `HVD`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFlags;

impl fmt::Display for InvalidFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flags must be an in-order subset of H, V, D")
    }
}

impl std::error::Error for InvalidFlags {}

impl FromStr for OrientationFlags {
    type Err = InvalidFlags;

    /// Parse the canonical rendering; the empty string is the empty set
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::NONE;
        let mut remaining = Self::LETTERS.iter();
        for c in text.chars() {
            // Letters must appear in H, V, D order, each at most once
            let flag = remaining
                .by_ref()
                .find(|(_, letter)| *letter == c)
                .map(|(flag, _)| *flag)
                .ok_or(InvalidFlags)?;
            flags = flags.union(flag);
        }
        Ok(flags)
    }
}

/// Rotate-then-flip transform visually equivalent to a set of orientation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform {
    /// Clockwise rotation in degrees: 0, 90, 180 or 270
    pub rotation_degrees: u16,
    /// Mirror left-to-right after rotating
    pub flip_h: bool,
    /// Mirror top-to-bottom after rotating
    pub flip_v: bool,
}

impl Transform {
    const fn new(rotation_degrees: u16, flip_h: bool, flip_v: bool) -> Self {
        Self {
            rotation_degrees,
            flip_h,
            flip_v,
        }
    }

    /// Check whether the transform leaves the tile unchanged
    pub const fn is_identity(&self) -> bool {
        self.rotation_degrees == 0 && !self.flip_h && !self.flip_v
    }
}

// Indexed by the flag bits (H = 1, V = 2, D = 4)
const TRANSFORM_TABLE: [Transform; 8] = [
    Transform::new(0, false, false),   // none
    Transform::new(0, true, false),    // H
    Transform::new(0, false, true),    // V
    Transform::new(180, false, false), // HV
    Transform::new(90, false, true),   // D
    Transform::new(90, false, false),  // HD
    Transform::new(270, false, false), // VD
    Transform::new(270, true, false),  // HVD
];

/// Look up the rotate-then-flip transform for a set of orientation flags
pub fn orientation_to_transform(flags: OrientationFlags) -> Transform {
    TRANSFORM_TABLE
        .get(flags.index())
        .copied()
        .unwrap_or(Transform::new(0, false, false))
}

/// Split a packed identifier into its base identity and orientation flags
///
/// Every 32-bit value decodes; there is no invalid input.
pub const fn decode(packed: PackedId) -> (BaseId, OrientationFlags) {
    (packed & BASE_ID_MASK, OrientationFlags::from_packed(packed))
}

/// Pack a base identity and orientation flags into one identifier
///
/// Bits of `base` above the 29-bit identity range are discarded.
pub const fn encode(base: BaseId, flags: OrientationFlags) -> PackedId {
    (base & BASE_ID_MASK) | flags.packed_bits()
}

/// Check whether a base identity takes part in adjacency statistics
///
/// Empty cells and the background filler are excluded.
pub const fn is_recordable(base: BaseId) -> bool {
    base != EMPTY_BASE_ID && base != BACKGROUND_BASE_ID
}
