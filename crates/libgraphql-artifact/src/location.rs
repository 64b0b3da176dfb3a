use serde::Deserialize;
use serde::Serialize;

/// Compact byte-offset range of a node within the query source text the
/// artifact was compiled from.
///
/// Represents a half-open interval `[start, end)`. Both offsets are 0-based.
/// This is the `loc` object of the persisted form (`{"start": .., "end": ..}`).
///
/// `u32` offsets support query sources up to 4 GiB.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Location {
    /// Byte offset of the first byte of the node (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte of the node (exclusive).
    pub end: u32,
}

impl Location {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this range in bytes, or 0 for an inverted
    /// range.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// `true` when `end < start`. Deserialized documents never contain an
    /// inverted location.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Returns `true` if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Location) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
