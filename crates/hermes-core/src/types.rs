//! Outcome and snapshot types returned by the ingestion service client.
//!
//! All mutating calls return an [`UploadOutcome`]; the read-only calls return
//! snapshot types with explicit sentinel constructors so callers never need
//! to catch a failure.

use serde::Deserialize;
use serde_json::Value;

/// Normalized result of every mutating client call.
///
/// Invariants: `success` is always meaningful, `error` is present iff
/// `success` is false, and `chunks_created` is non-negative by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadOutcome {
    pub success: bool,
    pub file_name: Option<String>,
    pub url: Option<String>,
    pub file_count: Option<usize>,
    pub files_processed: Option<u64>,
    pub chunks_created: Option<u64>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl UploadOutcome {
    /// Successful outcome skeleton; the client fills in call-specific fields.
    pub fn succeeded() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Failed outcome carrying the normalized error message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Result of a document deletion, carrying the implementation-defined
/// server body through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub success: bool,
    pub error: Option<String>,
    pub body: Value,
}

/// Read-only mirror of the service's `/status` response.
///
/// Replaced wholesale on each successful poll; on a failed poll the previous
/// snapshot stays on screen and `unavailable` is only used as the client's
/// sentinel return value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub document_count: Option<u64>,
    #[serde(default)]
    pub chunk_count: Option<u64>,
    #[serde(default = "ServiceStatus::default_status")]
    pub status: String,
    #[serde(default)]
    pub memory_usage: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServiceStatus {
    fn default_status() -> String {
        "Unknown".to_string()
    }

    /// Placeholder shown before the first poll completes.
    pub fn unknown() -> Self {
        Self {
            document_count: None,
            chunk_count: None,
            status: Self::default_status(),
            memory_usage: None,
            error: None,
        }
    }

    /// Sentinel returned when the status endpoint cannot be reached.
    pub fn unavailable(error: impl Into<String>) -> Self {
        Self {
            status: "Error".to_string(),
            error: Some(error.into()),
            ..Self::unknown()
        }
    }

    fn count_placeholder(&self) -> &'static str {
        if self.error.is_some() {
            "N/A"
        } else {
            "?"
        }
    }

    /// Document counter for display; placeholders stand in for missing counts.
    pub fn document_count_label(&self) -> String {
        self.document_count
            .map(|count| count.to_string())
            .unwrap_or_else(|| self.count_placeholder().to_string())
    }

    /// Chunk counter for display.
    pub fn chunk_count_label(&self) -> String {
        self.chunk_count
            .map(|count| count.to_string())
            .unwrap_or_else(|| self.count_placeholder().to_string())
    }

    /// Memory usage for display. The service reports this as either a string
    /// or a number; both are rendered without JSON quoting.
    pub fn memory_usage_label(&self) -> Option<String> {
        self.memory_usage.as_ref().map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}

/// Read-only mirror of the service's `/health` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthReport {
    #[serde(default = "HealthReport::default_field")]
    pub status: String,
    #[serde(default = "HealthReport::default_field")]
    pub qdrant_status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl HealthReport {
    fn default_field() -> String {
        "unknown".to_string()
    }

    /// Placeholder shown before the first poll completes.
    pub fn unknown() -> Self {
        Self {
            status: Self::default_field(),
            qdrant_status: Self::default_field(),
            version: None,
            error: None,
        }
    }

    /// Sentinel returned when the health endpoint cannot be reached.
    pub fn unreachable(error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            qdrant_status: Self::default_field(),
            version: None,
            error: Some(error.into()),
        }
    }

    /// Whether the service reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Success body shared by the three ingest endpoints. Every field is
/// optional; the client substitutes the documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngestResponse {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub files_processed: Option<u64>,
    #[serde(default)]
    pub chunks_created: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_outcome_always_carries_error() {
        let outcome = UploadOutcome::failed("boom");
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("boom"));
    }

    #[test]
    fn succeeded_outcome_has_no_error() {
        let outcome = UploadOutcome::succeeded();
        assert!(outcome.success);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn unavailable_status_uses_error_sentinel() {
        let status = ServiceStatus::unavailable("down");
        assert_eq!(status.status, "Error");
        assert_eq!(status.document_count_label(), "N/A");
        assert_eq!(status.chunk_count_label(), "N/A");
    }

    #[test]
    fn unknown_status_renders_question_marks() {
        let status = ServiceStatus::unknown();
        assert_eq!(status.document_count_label(), "?");
        assert_eq!(status.status, "Unknown");
        assert!(status.error.is_none());
    }

    #[test]
    fn memory_usage_strings_are_unquoted() {
        let mut status = ServiceStatus::unknown();
        status.memory_usage = Some(Value::String("120 MB".to_string()));
        assert_eq!(status.memory_usage_label().as_deref(), Some("120 MB"));

        status.memory_usage = Some(serde_json::json!(128));
        assert_eq!(status.memory_usage_label().as_deref(), Some("128"));
    }

    #[test]
    fn unreachable_health_is_unhealthy() {
        let health = HealthReport::unreachable("no route");
        assert_eq!(health.status, "unhealthy");
        assert_eq!(health.qdrant_status, "unknown");
        assert!(!health.is_healthy());
    }

    #[test]
    fn status_deserializes_with_missing_fields() {
        let status: ServiceStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status.status, "Unknown");
        assert!(status.document_count.is_none());
    }
}
