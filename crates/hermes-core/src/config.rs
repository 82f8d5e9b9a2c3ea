//! Configuration for the ingestion service client.
//!
//! The base URL is resolved once at startup; the dashboard injects the
//! resulting config into [`crate::IngestClient`] rather than reading hidden
//! global state. The API base can be overridden at build time with the
//! `HERMES_API_URL` environment variable, mirroring how the bundled frontend
//! is pointed at a non-default ingestor.

use std::time::Duration;

/// Default API base path, expected to be proxied to the ingestion service.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Fixed per-request timeout. Callers cannot change this per call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-wide client configuration, constructed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestorConfig {
    /// Base URL of the ingestion service, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Default for IngestorConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("HERMES_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl IngestorConfig {
    /// Config pointing at an explicit base URL, keeping the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Joins an endpoint path onto the base URL without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = IngestorConfig::with_base_url("http://localhost:8000/api/");
        assert_eq!(
            config.endpoint("/status"),
            "http://localhost:8000/api/status"
        );
    }

    #[test]
    fn endpoint_joins_plain_base() {
        let config = IngestorConfig::with_base_url("http://localhost:8000");
        assert_eq!(
            config.endpoint("/ingest/file"),
            "http://localhost:8000/ingest/file"
        );
    }

    #[test]
    fn default_timeout_is_thirty_seconds() {
        assert_eq!(IngestorConfig::default().timeout, Duration::from_secs(30));
    }
}
