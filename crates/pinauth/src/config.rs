use std::{env, time::Duration};

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REQUEST_TIMEOUT_SECONDS` - Per-request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_reader(|key| env::var(key))
    }

    /// Load configuration from a custom variable reader.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_reader<F>(reader: F) -> Self
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        Self {
            request_timeout_seconds: reader("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}
