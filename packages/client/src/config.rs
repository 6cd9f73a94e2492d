//! Client configuration, populated from environment variables.

use std::time::Duration;

/// Base URL of a Cytoscape instance running on this machine with the
/// default CyREST port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1234/v1";

/// Request timeout used when none is configured. Some commands (layouts,
/// large imports) take a while inside Cytoscape.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Runtime configuration for a [`CyRestClient`](crate::CyRestClient).
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `CYREST_BASE_URL` | `http://localhost:1234/v1` | CyREST API base, including the version segment |
/// | `CYREST_TIMEOUT_SECS` | `60` | Per-request timeout in seconds |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base without a trailing slash, e.g. `http://localhost:1234/v1`.
    pub base_url: String,

    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Populate config from environment variables, applying defaults where
    /// absent or unparsable.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CYREST_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout_secs = std::env::var("CYREST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let c = ClientConfig::new("http://127.0.0.1:1234/v1/");
        assert_eq!(c.base_url, "http://127.0.0.1:1234/v1");
    }

    #[test]
    fn default_points_at_local_cytoscape() {
        let c = ClientConfig::default();
        assert_eq!(c.base_url, DEFAULT_BASE_URL);
        assert_eq!(c.timeout, Duration::from_secs(60));
    }
}
