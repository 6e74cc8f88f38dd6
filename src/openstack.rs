//! Poll presets for OpenStack resource transitions
//!
//! OpenStack resources advertise their lifecycle through a `status` field,
//! and every mutating call returns before the transition finishes. These
//! constructors capture the status vocabularies a provider has to wait on,
//! so call sites pick a named transition instead of restating the label
//! lists inline.

use std::time::Duration;

use crate::config::PollConfig;
use crate::status::StatusSet;

/// The poll timing OpenStack provider operations conventionally use:
/// a 10 minute deadline, a 10 second delay before the first poll, and
/// polls spaced 3 to 10 seconds apart.
pub fn poll_config() -> PollConfig {
    PollConfig {
        timeout: Duration::from_secs(600),
        initial_delay: Duration::from_secs(10),
        interval: Duration::from_secs(10),
        min_interval: Duration::from_secs(3),
    }
}

/// Block storage (Cinder) volume transitions
pub mod volume {
    use super::StatusSet;

    /// A freshly created volume becoming usable. Image-backed volumes pass
    /// through `downloading` while the image is copied in.
    pub fn create() -> StatusSet {
        StatusSet::new(["downloading", "creating"], ["available"])
    }

    /// A volume being resized. An attached volume returns to `in-use`,
    /// a detached one to `available`.
    pub fn extend() -> StatusSet {
        StatusSet::new(["extending"], ["available", "in-use"])
    }

    /// A volume being released by its instance attachments
    pub fn detach() -> StatusSet {
        StatusSet::new(["in-use", "attaching", "detaching"], ["available"])
    }

    /// A volume being deleted. The API may report `deleted` briefly, but
    /// usually the object simply disappears, so absence is registered as
    /// the terminal outcome.
    pub fn delete() -> StatusSet {
        StatusSet::new(["deleting", "downloading", "available"], ["deleted"]).missing_as("deleted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_create_vocabulary() {
        let set = volume::create();
        assert!(set.is_pending("creating"));
        assert!(set.is_pending("downloading"));
        assert!(set.is_target("available"));
        assert!(set.missing_sentinel().is_none());
    }

    #[test]
    fn test_volume_extend_accepts_both_terminals() {
        let set = volume::extend();
        assert!(set.is_pending("extending"));
        assert!(set.is_target("available"));
        assert!(set.is_target("in-use"));
    }

    #[test]
    fn test_volume_delete_treats_absence_as_deleted() {
        let set = volume::delete();
        assert!(set.is_pending("deleting"));
        assert!(set.is_target("deleted"));
        assert_eq!(set.missing_sentinel(), Some("deleted"));
    }

    #[test]
    fn test_error_status_is_in_no_set() {
        for set in [
            volume::create(),
            volume::extend(),
            volume::detach(),
            volume::delete(),
        ] {
            assert!(!set.is_pending("error"));
            assert!(!set.is_target("error"));
        }
    }

    #[test]
    fn test_poll_config_is_valid() {
        let config = poll_config();
        assert_eq!(config, PollConfig::default());
    }
}
