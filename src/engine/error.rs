//! Engine error types.

use thiserror::Error;

/// Errors raised while obtaining a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("No configuration supplied")]
    Missing,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitial,

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),
}

/// Errors returned by engine operations.
///
/// A failed operation never changes the current state or either history
/// stack.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unrecognized state '{0}'")]
    InvalidState(String),

    #[error("Event '{event}' is not allowed from state '{state}'")]
    IllegalTransition { state: String, event: String },
}
