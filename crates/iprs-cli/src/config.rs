//! Configuration for the IPRS CLI
//!
//! Defaults and environment overrides for the service base URL and the
//! polling cadence.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default InterProScan 5 REST service URL.
pub const DEFAULT_BASE_URL: &str = "https://www.ebi.ac.uk/Tools/services/rest/iprscan5";

/// Default timeout for API requests in seconds.
/// Can be overridden via the IPRS_API_TIMEOUT_SECS environment variable.
/// Result downloads can be large, so this is generous.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 300;

/// Default seconds between status checks (the service-recommended cadence).
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Default maximum number of status checks before a poll times out.
pub const DEFAULT_MAX_CHECKS: u32 = 120;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service base URL
    pub base_url: String,

    /// Seconds between status checks
    pub poll_interval_secs: u64,

    /// Maximum number of status checks before giving up
    pub max_checks: u32,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            max_checks: DEFAULT_MAX_CHECKS,
        }
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("IPRS_BASE_URL") {
            config.base_url = url;
        }

        if let Ok(interval) = std::env::var("IPRS_POLL_INTERVAL_SECS") {
            config.poll_interval_secs = interval.parse().map_err(|_| {
                CliError::config(format!("IPRS_POLL_INTERVAL_SECS is not a number: {}", interval))
            })?;
        }

        if let Ok(checks) = std::env::var("IPRS_MAX_CHECKS") {
            config.max_checks = checks.parse().map_err(|_| {
                CliError::config(format!("IPRS_MAX_CHECKS is not a number: {}", checks))
            })?;
        }

        Ok(config)
    }

    /// Get the service base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the poll interval as a Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.poll_interval(), Duration::from_secs(10));
        assert_eq!(config.max_checks, DEFAULT_MAX_CHECKS);
    }

    // Single test for env handling; parallel tests must not race on the
    // same process-wide variables.
    #[test]
    fn test_config_from_env() {
        std::env::set_var("IPRS_BASE_URL", "http://localhost:9000");
        std::env::set_var("IPRS_POLL_INTERVAL_SECS", "2");
        std::env::set_var("IPRS_MAX_CHECKS", "5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url(), "http://localhost:9000");
        assert_eq!(config.poll_interval(), Duration::from_secs(2));
        assert_eq!(config.max_checks, 5);

        std::env::set_var("IPRS_MAX_CHECKS", "lots");
        assert!(Config::from_env().is_err());

        std::env::remove_var("IPRS_BASE_URL");
        std::env::remove_var("IPRS_POLL_INTERVAL_SECS");
        std::env::remove_var("IPRS_MAX_CHECKS");
    }
}
