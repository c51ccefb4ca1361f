//! In-memory snapshots of engine instances.
//!
//! A snapshot is a plain value holding the current state and both history
//! stacks. It lives only as long as the process does; there is no encoding
//! to JSON or bytes. Restoring needs the configuration the snapshot was
//! taken from.

use crate::config::FsmConfig;
use crate::core::{State, TransitionTable, UndoHistory};
use crate::engine::Fsm;
use chrono::{DateTime, Utc};
use tracing::debug;

pub mod error;

pub use error::SnapshotError;

/// Point-in-time copy of an instance's state and history.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub(crate) taken_at: DateTime<Utc>,
    pub(crate) initial: String,
    pub(crate) current: String,
    pub(crate) history: UndoHistory<String>,
}

impl Snapshot {
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn state(&self) -> &str {
        &self.current
    }

    pub fn history(&self) -> &UndoHistory<String> {
        &self.history
    }
}

impl<T: TransitionTable> Fsm<T> {
    /// Copy the current state and both history stacks.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            taken_at: Utc::now(),
            initial: self.config.initial.clone(),
            current: self.current.clone(),
            history: self.history.clone(),
        }
    }

    /// Rebuild an instance from `snapshot` using `config`.
    ///
    /// The snapshot must share `config`'s initial state, and its current
    /// state and every history entry must be a known state or that initial
    /// state. Nothing is built otherwise.
    pub fn restore(config: FsmConfig, snapshot: Snapshot) -> Result<Self, SnapshotError> {
        if snapshot.initial != config.initial {
            return Err(SnapshotError::InitialMismatch {
                snapshot: snapshot.initial,
                configured: config.initial,
            });
        }

        let entries = std::iter::once(&snapshot.current)
            .chain(snapshot.history.past())
            .chain(snapshot.history.undone());
        for state in entries {
            if T::State::from_name(state).is_none() && *state != config.initial {
                return Err(SnapshotError::UnknownState {
                    state: state.clone(),
                });
            }
        }

        let fsm = Self::from_parts(config, snapshot.current, snapshot.history);
        debug!(state = %fsm.current, taken_at = %snapshot.taken_at, "restored from snapshot");
        Ok(fsm)
    }
}
