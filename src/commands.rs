//! Command sets recorded in the history stack.
//!
//! Each committed transaction becomes one [`Commands`] entry: the set of
//! stroke ids drawn together, the set erased together, or the empty base
//! entry that anchors the bottom of the stack. Entries hold ids only;
//! member order carries no meaning.

use std::collections::BTreeSet;

use crate::stroke_id::StrokeId;

/// Classification of a command set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandsType {
    /// The empty base entry; also what undo/redo return at the history
    /// edges.
    None,
    /// Stroke ids drawn together as one transaction.
    Draw,
    /// Stroke ids erased together as one transaction.
    Erase,
}

/// Draw ids freed by discarding an abandoned redo branch.
///
/// No undo/redo path can reach these strokes again; the caller owns
/// releasing whatever stroke data the ids refer to.
pub type DiscardedDrawCommands = BTreeSet<StrokeId>;

/// Set of stroke ids drawn together as one transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawCommands(BTreeSet<StrokeId>);

impl DrawCommands {
    pub(crate) fn from_ids(ids: BTreeSet<StrokeId>) -> Self {
        Self(ids)
    }

    pub(crate) fn into_ids(self) -> BTreeSet<StrokeId> {
        self.0
    }

    /// The ids in this set.
    pub fn ids(&self) -> &BTreeSet<StrokeId> {
        &self.0
    }

    pub fn contains(&self, id: StrokeId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<StrokeId> for DrawCommands {
    fn from_iter<I: IntoIterator<Item = StrokeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Set of stroke ids erased together as one transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EraseCommands(BTreeSet<StrokeId>);

impl EraseCommands {
    pub(crate) fn from_ids(ids: BTreeSet<StrokeId>) -> Self {
        Self(ids)
    }

    /// The ids in this set.
    pub fn ids(&self) -> &BTreeSet<StrokeId> {
        &self.0
    }

    pub fn contains(&self, id: StrokeId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<StrokeId> for EraseCommands {
    fn from_iter<I: IntoIterator<Item = StrokeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One recorded history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Commands {
    /// No operation. Only the base history entry has this shape.
    None,
    /// A committed draw transaction.
    Draw(DrawCommands),
    /// A committed erase transaction.
    Erase(EraseCommands),
}

impl Commands {
    /// Classify this command set.
    pub fn kind(&self) -> CommandsType {
        match self {
            Commands::None => CommandsType::None,
            Commands::Draw(_) => CommandsType::Draw,
            Commands::Erase(_) => CommandsType::Erase,
        }
    }

    /// The draw set behind a [`CommandsType::Draw`] classification.
    ///
    /// # Panics
    ///
    /// Panics if this is not a draw set. Check [`Commands::kind`] first;
    /// calling this on the wrong kind is a programmer error, not a
    /// recoverable condition.
    pub fn draw_commands(&self) -> &DrawCommands {
        match self {
            Commands::Draw(draws) => draws,
            other => panic!("expected draw commands, got {:?}", other.kind()),
        }
    }

    /// The erase set behind a [`CommandsType::Erase`] classification.
    ///
    /// # Panics
    ///
    /// Panics if this is not an erase set. Check [`Commands::kind`] first;
    /// calling this on the wrong kind is a programmer error, not a
    /// recoverable condition.
    pub fn erase_commands(&self) -> &EraseCommands {
        match self {
            Commands::Erase(erases) => erases,
            other => panic!("expected erase commands, got {:?}", other.kind()),
        }
    }
}
