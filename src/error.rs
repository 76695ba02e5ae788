//! Precondition-violation errors.
//!
//! Every failure this crate reports is a caller protocol or id-uniqueness
//! violation, never an environmental fault. Correct production sequencing
//! does not trigger them; they are reported as recoverable results so that
//! invalid sequences can be probed without aborting the process, and a
//! failed operation leaves the history exactly as it was.

use thiserror::Error;

use crate::stroke_id::StrokeId;

pub type Result<T> = std::result::Result<T, HistoryError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// Start, undo, or redo was called while a draw/erase transaction is
    /// open.
    #[error("a draw or erase transaction is already in progress")]
    TransactionInProgress,

    /// `draw` or `finish_draw` was called without an open draw transaction.
    #[error("no draw transaction is in progress")]
    NoDrawInProgress,

    /// `erase` or `finish_erase` was called without an open erase
    /// transaction.
    #[error("no erase transaction is in progress")]
    NoEraseInProgress,

    /// The stroke already sits in a draw set in the live history.
    #[error("stroke {0} is already drawn in the live history")]
    StrokeAlreadyDrawn(StrokeId),

    /// The stroke already sits in an erase set in the live history.
    #[error("stroke {0} is already erased in the live history")]
    StrokeAlreadyErased(StrokeId),

    /// The stroke does not sit in any draw set in the live history.
    #[error("stroke {0} has not been drawn in the live history")]
    StrokeNotDrawn(StrokeId),
}
