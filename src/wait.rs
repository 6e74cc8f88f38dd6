//! The convergence loop

use tokio::time::Instant;
use tracing::{debug, trace};

use crate::config::PollConfig;
use crate::error::{WaitError, WaitResult};
use crate::source::{FetchOutcome, StatusSource};
use crate::status::StatusSet;

/// A successfully resolved wait
#[derive(Debug, Clone, PartialEq)]
pub struct Converged<T> {
    /// The object from the final fetch; `None` only when absence was the
    /// registered terminal outcome
    pub object: Option<T>,
    /// The final status (the sentinel label, for the absence case)
    pub status: String,
    /// How many fetches the wait performed
    pub polls: u32,
}

/// Poll `source` until the object identified by `id` reaches a target status
///
/// Fetches the object's status repeatedly, sleeping between polls, until one
/// of the `statuses` target labels is observed or the configured timeout
/// expires. Pending statuses continue the loop; anything else aborts it. See
/// [`StatusSet::missing_as`] for the delete case, where the awaited outcome
/// is the object disappearing entirely.
///
/// The caller is suspended until resolution. A single wait never issues
/// concurrent fetches, never fetches past the deadline, and performs at most
/// `timeout / min_interval` polls.
pub async fn wait_for<S: StatusSource>(
    source: &S,
    id: &str,
    statuses: &StatusSet,
    config: &PollConfig,
) -> WaitResult<Converged<S::Object>> {
    if statuses.targets().is_empty() {
        return Err(WaitError::InvalidConfig("target status set is empty"));
    }
    config.validate().map_err(WaitError::InvalidConfig)?;

    let targets = statuses.describe_targets();
    debug!(id, %targets, "waiting for convergence");

    let start = Instant::now();
    let deadline = start + config.timeout;

    tokio::time::sleep(config.initial_delay).await;

    let mut polls: u32 = 0;
    let mut pause = config.min_interval;
    let mut last_status: Option<String> = None;

    loop {
        if Instant::now() > deadline {
            return Err(WaitError::Timeout {
                id: id.to_string(),
                elapsed: start.elapsed(),
                last_status,
                targets,
            });
        }

        polls += 1;
        let outcome = source.fetch(id).await.map_err(|e| WaitError::Fetch {
            id: id.to_string(),
            source: Box::new(e),
        })?;

        match outcome {
            FetchOutcome::Missing => {
                return match statuses.missing_sentinel() {
                    Some(sentinel) => {
                        debug!(id, status = sentinel, polls, "converged on absence");
                        Ok(Converged {
                            object: None,
                            status: sentinel.to_string(),
                            polls,
                        })
                    }
                    None => Err(WaitError::NotFound { id: id.to_string() }),
                };
            }
            FetchOutcome::Found { object, status } => {
                trace!(id, %status, polls, "observed status");

                if statuses.is_target(&status) {
                    debug!(id, %status, polls, "converged");
                    return Ok(Converged {
                        object: Some(object),
                        status,
                        polls,
                    });
                }
                if !statuses.is_pending(&status) {
                    return Err(WaitError::UnexpectedStatus {
                        id: id.to_string(),
                        status,
                        polls,
                        targets,
                    });
                }
                last_status = Some(status);
            }
        }

        // Still pending. Never start a sleep that would cross the deadline:
        // the next fetch could not happen in time anyway.
        if Instant::now() + pause > deadline {
            return Err(WaitError::Timeout {
                id: id.to_string(),
                elapsed: start.elapsed(),
                last_status,
                targets,
            });
        }
        tokio::time::sleep(pause).await;
        pause = (pause * 2).min(config.interval);
    }
}
