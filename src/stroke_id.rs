//! Stroke identifiers.
//!
//! Ids are opaque to the history: the host assigns one when a stroke is
//! completed, and they must stay unique for the lifetime of the editing
//! session. [`StrokeIdGenerator`] is the monotonic source hosts are
//! expected to take them from.

use std::fmt;

/// Opaque identifier for a completed stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeId(pub u64);

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StrokeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Monotonic source of stroke ids, one per editing session.
///
/// The history requires ids to be unique across the whole session, not just
/// across currently visible strokes; a counter that never rewinds
/// guarantees that even when undo/redo branches are discarded.
#[derive(Debug, Default)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct StrokeIdGenerator {
    next: u64,
}

impl StrokeIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused id.
    pub fn next_id(&mut self) -> StrokeId {
        let id = StrokeId(self.next);
        self.next += 1;
        id
    }
}
