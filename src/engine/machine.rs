//! Event-driven state machine with undo/redo history.

use crate::config::FsmConfig;
use crate::core::{Event, State, TransitionTable, UndoHistory};
use crate::engine::error::{ConfigError, FsmError};
use std::marker::PhantomData;
use tracing::{debug, trace};

/// State machine tracking a single current state.
///
/// States and events cross this boundary as string tokens and are resolved
/// against the closed sets of `T`. Every applied change records the state
/// being left, so it can be undone, and invalidates anything previously
/// undone.
///
/// Mutating operations take `&mut self`; share an instance across threads
/// behind a `Mutex`.
///
/// # Example
///
/// ```rust
/// use daycycle::config::FsmConfig;
/// use daycycle::routine::RoutineFsm;
///
/// let mut fsm = RoutineFsm::new(FsmConfig::new("normal"));
///
/// fsm.trigger("study").unwrap();
/// assert_eq!(fsm.state(), "busy");
///
/// assert!(fsm.trigger("eat").is_err());
/// assert_eq!(fsm.state(), "busy");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "normal");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "busy");
/// ```
#[derive(Debug, Clone)]
pub struct Fsm<T: TransitionTable> {
    pub(crate) config: FsmConfig,
    pub(crate) current: String,
    pub(crate) history: UndoHistory<String>,
    _table: PhantomData<fn() -> T>,
}

impl<T: TransitionTable> Fsm<T> {
    /// Create a machine positioned at `config.initial` with empty history.
    pub fn new(config: FsmConfig) -> Self {
        let current = config.initial.clone();
        Self::from_parts(config, current, UndoHistory::new())
    }

    pub(crate) fn from_parts(
        config: FsmConfig,
        current: String,
        history: UndoHistory<String>,
    ) -> Self {
        Self {
            config,
            current,
            history,
            _table: PhantomData,
        }
    }

    /// Create a machine from a configuration that may be absent.
    pub fn from_config(config: Option<FsmConfig>) -> Result<Self, FsmError> {
        let config = config.ok_or(ConfigError::Missing)?;
        Ok(Self::new(config))
    }

    /// Create a machine from a JSON configuration document.
    ///
    /// A `null` document is reported as a missing configuration.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        Self::from_config(FsmConfig::from_json(json)?)
    }

    /// Current state identifier.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// Current state as a typed variant, if it is one of the known states.
    pub fn current_state(&self) -> Option<T::State> {
        T::State::from_name(&self.current)
    }

    pub fn initial(&self) -> &str {
        &self.config.initial
    }

    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    /// Move directly to `target`.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not a known
    /// state; nothing is changed in that case.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        let next = T::State::from_name(target)
            .ok_or_else(|| FsmError::InvalidState(target.to_string()))?;
        self.apply(next);
        Ok(())
    }

    /// Move directly to a typed state.
    pub fn change_to(&mut self, target: T::State) {
        self.apply(target);
    }

    /// Apply `event` from the current state.
    ///
    /// Fails with [`FsmError::IllegalTransition`] if the event is unknown or
    /// not accepted from the current state.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let next = T::Event::from_name(event)
            .zip(self.current_state())
            .and_then(|(event, from)| T::next(from, event));

        match next {
            Some(next) => {
                self.apply(next);
                Ok(())
            }
            None => Err(FsmError::IllegalTransition {
                state: self.current.clone(),
                event: event.to_string(),
            }),
        }
    }

    /// Apply a typed event. Same semantics as [`trigger`](Self::trigger).
    pub fn fire(&mut self, event: T::Event) -> Result<(), FsmError> {
        self.trigger(event.name())
    }

    /// States relevant to `event`.
    ///
    /// With no event, returns every configured state in configured order.
    /// With a known event, returns the states it is accepted from. An
    /// unknown event yields an empty list rather than an error.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        let Some(event) = event else {
            return self.config.state_names().collect();
        };

        T::Event::from_name(event)
            .map(|event| T::sources(event).iter().map(State::name).collect())
            .unwrap_or_default()
    }

    /// Events [`trigger`](Self::trigger) would accept right now.
    pub fn available_events(&self) -> Vec<T::Event> {
        self.current_state()
            .map(T::events_from)
            .unwrap_or_default()
    }

    /// Step back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.current);
        if undone {
            trace!(state = %self.current, "undo");
        }
        undone
    }

    /// Return to the most recently undone state. Returns `false` if there
    /// is none.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.current);
        if redone {
            trace!(state = %self.current, "redo");
        }
        redone
    }

    /// Change back to the configured initial state.
    ///
    /// Recorded like any other change, so it can be undone. Fails with
    /// [`FsmError::InvalidState`] if the initial state is not a known state.
    pub fn reset(&mut self) -> Result<(), FsmError> {
        let initial = self.config.initial.clone();
        self.change_state(&initial)
    }

    /// Forget every state reachable by undo. Undone states stay redoable.
    pub fn clear_history(&mut self) {
        self.history.clear_past();
        trace!("history cleared");
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// States reachable by undo, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.past()
    }

    /// States reachable by redo, most recently undone last.
    pub fn redo_stack(&self) -> &[String] {
        self.history.undone()
    }

    fn apply(&mut self, next: T::State) {
        let previous = std::mem::replace(&mut self.current, next.name().to_string());
        self.history.record(previous);
        if let Some(from) = self.history.past().last() {
            debug!(%from, to = %self.current, "state changed");
        }
    }
}
