//! The state machine engine.
//!
//! [`Fsm`] owns the current state and its undo/redo stacks, and resolves
//! string tokens against a [`TransitionTable`](crate::core::TransitionTable).

mod error;
mod machine;

pub use error::{ConfigError, FsmError};
pub use machine::Fsm;
