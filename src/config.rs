//! Timing configuration for a polling loop

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing knobs for one wait
///
/// The inter-poll wait starts at `min_interval` and doubles after every poll,
/// capped at `interval`. `initial_delay` is slept once before the first
/// fetch, so a wait issued right after a mutating call does not hammer the
/// API while the remote has certainly not transitioned yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Maximum wall-clock time for the whole wait
    pub timeout: Duration,
    /// Slept once before the first fetch
    pub initial_delay: Duration,
    /// Maximum spacing between polls
    pub interval: Duration,
    /// Minimum (and starting) spacing between polls
    pub min_interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(600),
            initial_delay: Duration::from_secs(10),
            interval: Duration::from_secs(10),
            min_interval: Duration::from_secs(3),
        }
    }
}

impl PollConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Check the invariants the polling loop relies on
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.timeout.is_zero() {
            return Err("timeout must be greater than zero");
        }
        if self.min_interval.is_zero() {
            return Err("min_interval must be greater than zero");
        }
        if self.min_interval > self.interval {
            return Err("min_interval must not exceed interval");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PollConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout, Duration::from_secs(600));
        assert_eq!(config.min_interval, Duration::from_secs(3));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = PollConfig::default().with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_min_interval_rejected() {
        let config = PollConfig::default().with_min_interval(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_interval_above_interval_rejected() {
        let config = PollConfig::default()
            .with_interval(Duration::from_secs(1))
            .with_min_interval(Duration::from_secs(5));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chaining() {
        let config = PollConfig::default()
            .with_timeout(Duration::from_secs(60))
            .with_initial_delay(Duration::ZERO)
            .with_interval(Duration::from_secs(2))
            .with_min_interval(Duration::from_secs(1));

        assert!(config.validate().is_ok());
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.initial_delay, Duration::ZERO);
    }
}
