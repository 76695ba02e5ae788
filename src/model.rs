//! The stack-and-cursor history model.
//!
//! History is a single ordered sequence of committed command sets plus a
//! cursor pointing at the most recently applied entry. Undo and redo only
//! move the cursor; entries are never edited in place. Branching is
//! destructive: starting a new transaction while the cursor sits behind
//! the top truncates everything after it, and the draw ids from the
//! truncated range are returned so the caller can release the stroke data
//! they refer to.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::commands::{Commands, DiscardedDrawCommands, DrawCommands, EraseCommands};
use crate::error::{HistoryError, Result};
use crate::stroke_id::StrokeId;

/// Accumulator for the transaction currently being recorded.
///
/// Lives outside the stack so a half-recorded transaction is never
/// reachable through undo/redo.
#[derive(Debug)]
enum PendingCommands {
    Draw(BTreeSet<StrokeId>),
    Erase(BTreeSet<StrokeId>),
}

/// Branching undo/redo history over draw and erase transactions.
///
/// One instance belongs to one editing session and is driven from a single
/// thread by the host's stroke manager. Recording follows a strict
/// protocol per operation: one `start_draw`/`start_erase`, any number of
/// `draw`/`erase` calls, one `finish_draw`/`finish_erase`. Every failure
/// is a caller precondition violation and leaves the history untouched.
///
/// The committed stack keeps these invariants at every public-method
/// boundary:
///
/// 1. never empty; index 0 is always the empty base entry, and no other
///    entry is empty-shaped
/// 2. ids across all draw sets are pairwise disjoint
/// 3. ids across all erase sets are pairwise disjoint
/// 4. an id never joins a draw set while it sits in any erase set
/// 5. every id in an erase set exists in some draw set
/// 6. the cursor is always a valid stack index
#[derive(Debug)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct CommandHistory {
    /// Committed entries, oldest first.
    commands_stack: Vec<Commands>,
    /// Index of the most recently applied entry.
    cursor: usize,
    /// Open transaction, if any.
    pending: Option<PendingCommands>,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    pub fn new() -> Self {
        Self {
            commands_stack: vec![Commands::None],
            cursor: 0,
            pending: None,
        }
    }

    /// Open a draw transaction.
    ///
    /// If the cursor is behind the top of the stack, the abandoned redo
    /// branch is discarded first and the draw ids it contained are
    /// returned; no undo/redo path can reach those strokes again, so the
    /// caller must release their stroke data. Fails with
    /// [`HistoryError::TransactionInProgress`] if a transaction is already
    /// open.
    pub fn start_draw(&mut self) -> Result<DiscardedDrawCommands> {
        self.start_transaction(PendingCommands::Draw(BTreeSet::new()))
    }

    /// Record drawing the stroke identified by `id`.
    ///
    /// Valid only inside an open draw transaction, and only for an id that
    /// is not already drawn anywhere in the live history.
    pub fn draw(&mut self, id: StrokeId) -> Result<()> {
        if !self.is_recording_draw() {
            warn!("Recording stroke {} without an open draw transaction", id);
            return Err(HistoryError::NoDrawInProgress);
        }
        if self.id_in_draw_commands(id) || self.pending_contains(id) {
            warn!("Stroke {} is already drawn in the live history", id);
            return Err(HistoryError::StrokeAlreadyDrawn(id));
        }
        // An erased id is always also a drawn id, so the check above has
        // already rejected it; kept so a corrupted caller sequence cannot
        // reach the accumulator.
        if self.id_in_erase_commands(id) {
            warn!("Stroke {} is already erased in the live history", id);
            return Err(HistoryError::StrokeAlreadyErased(id));
        }
        if let Some(PendingCommands::Draw(ids)) = &mut self.pending {
            ids.insert(id);
        }
        Ok(())
    }

    /// Commit the open draw transaction as a new entry at the top of the
    /// stack and move the cursor onto it.
    pub fn finish_draw(&mut self) -> Result<()> {
        match self.pending.take() {
            Some(PendingCommands::Draw(ids)) => {
                debug!("Committing draw transaction with {} strokes", ids.len());
                self.push_entry(Commands::Draw(DrawCommands::from_ids(ids)));
                Ok(())
            }
            other => {
                self.pending = other;
                warn!("Finishing a draw transaction that was never started");
                Err(HistoryError::NoDrawInProgress)
            }
        }
    }

    /// Open an erase transaction.
    ///
    /// Branch discard semantics are identical to [`CommandHistory::start_draw`].
    pub fn start_erase(&mut self) -> Result<DiscardedDrawCommands> {
        self.start_transaction(PendingCommands::Erase(BTreeSet::new()))
    }

    /// Record erasing the stroke identified by `id`.
    ///
    /// Valid only inside an open erase transaction. The id must currently
    /// be drawn somewhere in the live history and not yet erased anywhere
    /// in it.
    pub fn erase(&mut self, id: StrokeId) -> Result<()> {
        if !self.is_recording_erase() {
            warn!("Erasing stroke {} without an open erase transaction", id);
            return Err(HistoryError::NoEraseInProgress);
        }
        if !self.id_in_draw_commands(id) {
            warn!("Erasing stroke {} that is not drawn in the live history", id);
            return Err(HistoryError::StrokeNotDrawn(id));
        }
        if self.id_in_erase_commands(id) || self.pending_contains(id) {
            warn!("Stroke {} is already erased in the live history", id);
            return Err(HistoryError::StrokeAlreadyErased(id));
        }
        if let Some(PendingCommands::Erase(ids)) = &mut self.pending {
            ids.insert(id);
        }
        Ok(())
    }

    /// Commit the open erase transaction as a new entry at the top of the
    /// stack and move the cursor onto it.
    pub fn finish_erase(&mut self) -> Result<()> {
        match self.pending.take() {
            Some(PendingCommands::Erase(ids)) => {
                debug!("Committing erase transaction with {} strokes", ids.len());
                self.push_entry(Commands::Erase(EraseCommands::from_ids(ids)));
                Ok(())
            }
            other => {
                self.pending = other;
                warn!("Finishing an erase transaction that was never started");
                Err(HistoryError::NoEraseInProgress)
            }
        }
    }

    /// Step the cursor back one entry and return the command set the
    /// caller must reverse: hide the ids of a draw set, restore the ids of
    /// an erase set.
    ///
    /// At the base of the stack there is nothing left to unwind; the call
    /// is a no-op returning [`Commands::None`]. Fails if a transaction is
    /// open.
    pub fn undo(&mut self) -> Result<Commands> {
        if self.pending.is_some() {
            warn!("Undo requested while a transaction is in progress");
            return Err(HistoryError::TransactionInProgress);
        }
        if self.cursor == 0 {
            return Ok(Commands::None);
        }
        let commands = self.commands_stack[self.cursor].clone();
        self.cursor -= 1;
        Ok(commands)
    }

    /// Step the cursor forward one entry and return the command set the
    /// caller must reapply: show the ids of a draw set, hide the ids of an
    /// erase set.
    ///
    /// At the top of the stack there is no recorded future to replay; the
    /// call is a no-op returning [`Commands::None`]. Fails if a
    /// transaction is open.
    pub fn redo(&mut self) -> Result<Commands> {
        if self.pending.is_some() {
            warn!("Redo requested while a transaction is in progress");
            return Err(HistoryError::TransactionInProgress);
        }
        if self.cursor + 1 == self.commands_stack.len() {
            return Ok(Commands::None);
        }
        self.cursor += 1;
        Ok(self.commands_stack[self.cursor].clone())
    }

    /// Check if there is an entry to undo.
    pub fn can_undo(&self) -> bool {
        self.pending.is_none() && self.cursor > 0
    }

    /// Check if there is an entry to redo.
    pub fn can_redo(&self) -> bool {
        self.pending.is_none() && self.cursor + 1 < self.commands_stack.len()
    }

    /// Number of entries behind the cursor, i.e. how often undo advances.
    pub fn undo_count(&self) -> usize {
        self.cursor
    }

    /// Number of entries ahead of the cursor, i.e. how often redo advances.
    pub fn redo_count(&self) -> usize {
        self.commands_stack.len() - 1 - self.cursor
    }

    /// Check if a draw or erase transaction is open.
    pub fn is_recording(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop all history and return to the base state. Any open transaction
    /// is abandoned.
    pub fn clear(&mut self) {
        self.commands_stack.clear();
        self.commands_stack.push(Commands::None);
        self.cursor = 0;
        self.pending = None;
    }

    fn start_transaction(&mut self, pending: PendingCommands) -> Result<DiscardedDrawCommands> {
        if self.pending.is_some() {
            warn!("Starting a transaction while another is in progress");
            return Err(HistoryError::TransactionInProgress);
        }
        let discarded = self.discard_redo_branch();
        self.pending = Some(pending);
        Ok(discarded)
    }

    /// Truncate every entry after the cursor and collect the draw ids the
    /// truncated range contained.
    fn discard_redo_branch(&mut self) -> DiscardedDrawCommands {
        let mut discarded = DiscardedDrawCommands::new();
        if self.cursor + 1 < self.commands_stack.len() {
            for entry in self.commands_stack.drain(self.cursor + 1..) {
                if let Commands::Draw(draws) = entry {
                    discarded.extend(draws.into_ids());
                }
            }
            debug!(
                "Discarded redo branch containing {} draw strokes",
                discarded.len()
            );
        }
        discarded
    }

    fn push_entry(&mut self, entry: Commands) {
        self.commands_stack.push(entry);
        self.cursor = self.commands_stack.len() - 1;
    }

    fn is_recording_draw(&self) -> bool {
        matches!(self.pending, Some(PendingCommands::Draw(_)))
    }

    fn is_recording_erase(&self) -> bool {
        matches!(self.pending, Some(PendingCommands::Erase(_)))
    }

    fn pending_contains(&self, id: StrokeId) -> bool {
        match &self.pending {
            Some(PendingCommands::Draw(ids)) | Some(PendingCommands::Erase(ids)) => {
                ids.contains(&id)
            }
            None => false,
        }
    }

    fn id_in_draw_commands(&self, id: StrokeId) -> bool {
        self.commands_stack.iter().any(|entry| match entry {
            Commands::Draw(draws) => draws.contains(id),
            _ => false,
        })
    }

    fn id_in_erase_commands(&self, id: StrokeId) -> bool {
        self.commands_stack.iter().any(|entry| match entry {
            Commands::Erase(erases) => erases.contains(id),
            _ => false,
        })
    }
}

#[cfg(test)]
impl CommandHistory {
    /// Assert every structural invariant of the stack and cursor.
    pub(crate) fn assert_invariants(&self) {
        assert!(!self.commands_stack.is_empty(), "stack must never be empty");
        assert!(
            self.cursor < self.commands_stack.len(),
            "cursor {} out of bounds for stack of {}",
            self.cursor,
            self.commands_stack.len()
        );
        assert!(
            matches!(self.commands_stack[0], Commands::None),
            "base entry must be empty-shaped"
        );

        let mut drawn = BTreeSet::new();
        let mut erased = BTreeSet::new();
        for (index, entry) in self.commands_stack.iter().enumerate() {
            match entry {
                Commands::None => {
                    assert_eq!(index, 0, "empty-shaped entry beyond the base");
                }
                Commands::Draw(draws) => {
                    for &id in draws.ids() {
                        assert!(drawn.insert(id), "stroke {id} drawn more than once");
                    }
                }
                Commands::Erase(erases) => {
                    for &id in erases.ids() {
                        assert!(erased.insert(id), "stroke {id} erased more than once");
                    }
                }
            }
        }
        assert!(
            erased.is_subset(&drawn),
            "an erased stroke was never drawn"
        );
    }
}
