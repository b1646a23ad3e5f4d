//! API client configuration fixed at build time.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the bundle is compiled. Parsing is split from the
//! lookup so defaults and fallbacks stay testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://to-do-list-backend-tawny.vercel.app/api";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;

/// Fixed transport settings shared by every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address without a trailing slash.
    pub base_url: String,
    /// Bounded wait before a request is treated as failed.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: Duration::from_millis(DEFAULT_API_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time overrides.
    ///
    /// Optional:
    /// - `TASKDECK_API_BASE_URL`: default [`DEFAULT_API_BASE_URL`]
    /// - `TASKDECK_API_TIMEOUT_MS`: default [`DEFAULT_API_TIMEOUT_MS`]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TASKDECK_API_BASE_URL"), option_env!("TASKDECK_API_TIMEOUT_MS"))
    }

    pub(crate) fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let timeout_ms = timeout_ms
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_API_TIMEOUT_MS);
        Self { base_url, timeout: Duration::from_millis(timeout_ms) }
    }

    /// Join `path` onto the base address with exactly one separating slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
