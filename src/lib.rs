//! Daycycle: a small event-driven finite state machine with undo/redo.
//!
//! An engine is built once from a static configuration (an initial state
//! plus the configured state set) and then tracks a single current state.
//! States change either directly or by firing named events looked up in a
//! fixed transition table. Every change can be undone, and undone changes
//! can be redone until the next new change.
//!
//! # Core Concepts
//!
//! - **State / Event**: closed token enums via the `State` and `Event` traits
//! - **Transition table**: pure `(state, event) -> next state` mapping
//! - **History**: undo and redo stacks of visited states
//!
//! # Example
//!
//! ```rust
//! use daycycle::config::FsmConfig;
//! use daycycle::routine::RoutineFsm;
//!
//! let config = FsmConfig::from_json(
//!     r#"{ "initial": "normal", "states": { "normal": {}, "busy": {}, "hungry": {}, "sleeping": {} } }"#,
//! )
//! .unwrap();
//! let mut fsm = RoutineFsm::from_config(config).unwrap();
//!
//! fsm.trigger("study").unwrap();
//! fsm.trigger("get_hungry").unwrap();
//! assert_eq!(fsm.state(), "hungry");
//!
//! assert_eq!(fsm.states(Some("get_hungry")), ["busy", "sleeping"]);
//! assert!(fsm.states(Some("nonexistent_event")).is_empty());
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "busy");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod routine;
pub mod snapshot;

// Re-export commonly used types
pub use builder::FsmBuilder;
pub use config::FsmConfig;
pub use core::{Event, State, TransitionTable, UndoHistory};
pub use engine::{ConfigError, Fsm, FsmError};
pub use routine::{Activity, DailyRoutine, RoutineEvent, RoutineFsm};
pub use snapshot::{Snapshot, SnapshotError};
