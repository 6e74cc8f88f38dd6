//! Status vocabularies for a single remote transition

use serde::{Deserialize, Serialize};

/// The status labels that describe one awaited transition
///
/// `pending` statuses are expected and transient: the poller keeps going.
/// `target` statuses are terminal success. Any other observed status aborts
/// the wait, including an explicit `"error"` status reported by the remote.
///
/// Whether a missing object counts as success is never inferred: it must be
/// registered per transition with [`StatusSet::missing_as`]. Deleting a
/// volume legitimately ends with the object gone; creating one does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSet {
    pending: Vec<String>,
    target: Vec<String>,
    missing_as: Option<String>,
}

impl StatusSet {
    /// Create a status set from pending and target labels
    pub fn new<P, T>(pending: P, target: T) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            pending: pending.into_iter().map(Into::into).collect(),
            target: target.into_iter().map(Into::into).collect(),
            missing_as: None,
        }
    }

    /// Register object absence as terminal success, reported as `sentinel`
    ///
    /// With this set, a fetch that finds the object gone resolves the wait
    /// successfully with `sentinel` as the final status (e.g. `"deleted"`).
    /// Without it, absence is a failure.
    pub fn missing_as(mut self, sentinel: impl Into<String>) -> Self {
        self.missing_as = Some(sentinel.into());
        self
    }

    /// Whether `status` is an expected transient status
    pub fn is_pending(&self, status: &str) -> bool {
        self.pending.iter().any(|s| s == status)
    }

    /// Whether `status` is a terminal success status
    pub fn is_target(&self, status: &str) -> bool {
        self.target.iter().any(|s| s == status)
    }

    /// The terminal success labels
    pub fn targets(&self) -> &[String] {
        &self.target
    }

    /// The sentinel status for absence, if registered
    pub fn missing_sentinel(&self) -> Option<&str> {
        self.missing_as.as_deref()
    }

    /// Comma-joined target labels, for log and error messages
    pub(crate) fn describe_targets(&self) -> String {
        self.target.join(", ")
    }
}
