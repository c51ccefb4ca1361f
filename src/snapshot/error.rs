//! Snapshot restore errors.

use thiserror::Error;

/// Reasons a snapshot cannot be restored against a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Snapshot starts at '{snapshot}' but the configuration starts at '{configured}'")]
    InitialMismatch { snapshot: String, configured: String },

    #[error("Snapshot holds unrecognized state '{state}'")]
    UnknownState { state: String },
}
