//! Converge
//!
//! Convergence polling for remote objects that transition asynchronously.
//!
//! Cloud APIs acknowledge a create, resize or delete request long before the
//! object actually reaches its new state; the caller has to poll the object's
//! status until it lands in a terminal state. This crate provides that loop
//! once, as a typed primitive, instead of inlining it next to every resource
//! operation.
//!
//! # Overview
//!
//! A single wait is described by three values:
//!
//! - **StatusSet**: which status labels are transient (`pending`) and which
//!   are terminal success (`target`), plus an explicit opt-in for treating a
//!   missing object as terminal (the delete case)
//! - **PollConfig**: timeout, initial delay and the inter-poll interval bounds
//! - **StatusSource**: the read seam — how to fetch the object's current
//!   status by identifier
//!
//! # Example
//!
//! ```ignore
//! use converge::{openstack, wait_for, PollConfig};
//!
//! // volumes: the source fetches (object, status) from the block storage API
//! let statuses = openstack::volume::create();
//! let config = openstack::poll_config();
//!
//! let converged = wait_for(&source, volume_id, &statuses, &config).await?;
//! println!("volume {} is {}", volume_id, converged.status);
//! ```

pub mod config;
pub mod error;
pub mod openstack;
pub mod source;
pub mod status;
pub mod wait;

// Re-export main types for convenience
pub use config::PollConfig;
pub use error::{WaitError, WaitResult};
pub use source::{BoxFuture, FetchOutcome, FnSource, StatusSource};
pub use status::StatusSet;
pub use wait::{Converged, wait_for};
