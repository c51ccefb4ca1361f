//! Core state machine types and logic.
//!
//! This module contains the pure building blocks of the engine:
//! - Token traits for closed state and event sets
//! - Transition tables mapping `(state, event)` to the next state
//! - Undo/redo stacks of visited states
//!
//! Nothing in this module logs or performs I/O.

mod history;
mod state;
mod table;

pub use history::UndoHistory;
pub use state::{Event, State};
pub use table::TransitionTable;
