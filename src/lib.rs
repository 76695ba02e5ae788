//! Undo/redo command history for stroke-based annotation surfaces.
//!
//! This crate models what an annotation editor needs answered when the user
//! hits undo or redo: which strokes must be shown and which must be hidden.
//! Strokes are identified by opaque ids assigned by the host; the history
//! never sees geometry, coordinates, or brush settings.
//!
//! The host records each completed operation as a transaction
//! (`start_draw`, any number of `draw` calls, `finish_draw`; likewise for
//! erasing) and applies the command sets returned by
//! [`CommandHistory::undo`] and [`CommandHistory::redo`] to its own
//! stroke-visibility state. Undoing and then recording a new operation
//! discards the abandoned redo branch; the draw ids from that branch are
//! handed back so the host can release the stroke data behind them.
//!
//! ## Usage
//!
//! ```
//! use ink_history::{CommandHistory, CommandsType, StrokeId};
//!
//! let mut history = CommandHistory::new();
//!
//! // One completed pen stroke, recorded as a single transaction.
//! history.start_draw().unwrap();
//! history.draw(StrokeId(1)).unwrap();
//! history.finish_draw().unwrap();
//!
//! // Undo hands back the draw set the host must now hide.
//! let commands = history.undo().unwrap();
//! assert_eq!(commands.kind(), CommandsType::Draw);
//! assert!(commands.draw_commands().contains(StrokeId(1)));
//! ```
//!
//! ## Module Structure
//!
//! - [`commands`] - Command sets: the empty/draw/erase tagged union
//! - [`stroke_id`] - Opaque stroke ids and the monotonic id generator
//! - [`error`] - Precondition-violation error type
//! - [`model`] - [`CommandHistory`], the stack-and-cursor history model

pub mod commands;
pub mod error;
pub mod model;
pub mod stroke_id;


// Re-exports
pub use commands::{Commands, CommandsType, DiscardedDrawCommands, DrawCommands, EraseCommands};
pub use error::{HistoryError, Result};
pub use model::CommandHistory;
pub use stroke_id::{StrokeId, StrokeIdGenerator};
