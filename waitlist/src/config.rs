//! Runtime configuration, read from the environment.

use std::time::Duration;

/// Service configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Log filter directive (`WAITLIST_LOG`, default `info`)
    pub log_level: String,
    /// How long shutdown waits for in-flight effects
    /// (`WAITLIST_SHUTDOWN_TIMEOUT_SECS`, default 5)
    pub shutdown_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let log_level =
            std::env::var("WAITLIST_LOG").unwrap_or_else(|_| "info".to_string());

        let shutdown_timeout = std::env::var("WAITLIST_SHUTDOWN_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map_or(Duration::from_secs(5), Duration::from_secs);

        Self {
            log_level,
            shutdown_timeout,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
