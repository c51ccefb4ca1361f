//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder for engine configurations and
//! macros for declaring state and event enums with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::FsmBuilder;
