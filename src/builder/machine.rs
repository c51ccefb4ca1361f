//! Builder for constructing state machines.

use crate::config::FsmConfig;
use crate::core::{State, TransitionTable};
use crate::engine::{ConfigError, Fsm};
use serde_json::{Map, Value};
use std::marker::PhantomData;

/// Builder for constructing state machines with a fluent API.
pub struct FsmBuilder<T: TransitionTable> {
    initial: Option<String>,
    states: Map<String, Value>,
    _table: PhantomData<fn() -> T>,
}

impl<T: TransitionTable> FsmBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Map::new(),
            _table: PhantomData,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a configured state with metadata.
    pub fn state(mut self, name: impl Into<String>, metadata: Value) -> Self {
        self.states.insert(name.into(), metadata);
        self
    }

    /// Add every state of the table, each with `null` metadata.
    pub fn table_states(mut self) -> Self {
        for state in T::State::ALL {
            self.states.insert(state.name().to_string(), Value::Null);
        }
        self
    }

    /// Build the configuration without constructing a machine.
    pub fn config(self) -> Result<FsmConfig, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitial)?;
        Ok(FsmConfig {
            initial,
            states: self.states,
        })
    }

    /// Build the state machine.
    /// Returns an error if the initial state was never set.
    pub fn build(self) -> Result<Fsm<T>, ConfigError> {
        Ok(Fsm::new(self.config()?))
    }
}

impl<T: TransitionTable> Default for FsmBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
