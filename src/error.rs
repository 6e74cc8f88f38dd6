//! Error types for convergence waits

use std::time::Duration;

use thiserror::Error;

/// Errors that can end a wait
///
/// Every failing exit path of the polling loop is a distinct variant, so a
/// caller can tell "the remote landed in an error state" apart from "the
/// fetch itself broke" and "we ran out of time". Callers are expected to wrap
/// these with resource-level context (resource type, logical name) before
/// surfacing them.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The status fetch failed; fatal, a failed fetch is never retried
    #[error("failed to fetch status of {id}: {source}")]
    Fetch {
        id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The remote reports the object missing, and absence was not registered
    /// as a terminal outcome for this transition
    #[error("{id} no longer exists")]
    NotFound { id: String },

    /// The object reported a status outside both the pending and target sets
    #[error(
        "{id} reached unexpected status {status:?} after {polls} poll(s), \
         while waiting for one of [{targets}]"
    )]
    UnexpectedStatus {
        id: String,
        status: String,
        polls: u32,
        targets: String,
    },

    /// The deadline passed while the object was still pending
    #[error(
        "timed out after {elapsed:?} waiting for {id} to reach one of \
         [{targets}] (last status: {last_status:?})"
    )]
    Timeout {
        id: String,
        elapsed: Duration,
        last_status: Option<String>,
        targets: String,
    },

    /// The wait was invoked with an unusable status set or poll configuration
    #[error("invalid poll configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result type for wait operations
pub type WaitResult<T> = Result<T, WaitError>;
