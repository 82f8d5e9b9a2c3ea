//! Error normalization for the ingestion service client.
//!
//! Every transport or HTTP failure is collapsed into one [`ApiError`] whose
//! `Display` impl is the human-readable message shown to the user. The
//! mutating client calls never surface this type directly; they fold it into
//! a `success: false` outcome so callers always receive a uniform shape.

use serde::Deserialize;
use thiserror::Error;

/// Optional structured error body returned by the ingestion service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Normalized failure for any call against the ingestion service.
///
/// Variant order follows the normalization priority: status-specific
/// defaults first, then the body's own `detail`/`message`, then the
/// transport-level classes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 404.
    #[error("Resource not found")]
    NotFound,
    /// HTTP 500.
    #[error("Server error. Please try again later")]
    Server,
    /// Any other non-2xx response with a usable `detail` or `message` field,
    /// reported verbatim.
    #[error("{0}")]
    Rejected(String),
    /// Non-2xx response with no usable body.
    #[error("An unknown error occurred")]
    Unknown,
    /// The client-side timeout elapsed before a response arrived.
    #[error("Request timed out. Please try again")]
    Timeout,
    /// The request was sent but no response was received.
    #[error("No response from server. Please check your connection")]
    NoResponse,
    /// The request could not be constructed at all.
    #[error("{0}")]
    Setup(String),
}

impl ApiError {
    /// Normalizes a non-2xx response.
    pub fn from_response(status: reqwest::StatusCode, body: &ErrorBody) -> Self {
        match status.as_u16() {
            404 => ApiError::NotFound,
            500 => ApiError::Server,
            _ => body
                .detail
                .clone()
                .or_else(|| body.message.clone())
                .map(ApiError::Rejected)
                .unwrap_or(ApiError::Unknown),
        }
    }

    /// Normalizes a transport-level failure (the request never produced a
    /// response).
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_builder() {
            ApiError::Setup(err.to_string())
        } else {
            ApiError::NoResponse
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn body(detail: Option<&str>, message: Option<&str>) -> ErrorBody {
        ErrorBody {
            detail: detail.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn status_404_wins_over_body_fields() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, &body(Some("nope"), None));
        assert_eq!(err, ApiError::NotFound);
        assert_eq!(err.to_string(), "Resource not found");
    }

    #[test]
    fn status_500_uses_generic_server_message() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, &body(None, None));
        assert_eq!(err.to_string(), "Server error. Please try again later");
    }

    #[test]
    fn detail_field_is_used_verbatim() {
        let err = ApiError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &body(Some("file is empty"), Some("ignored")),
        );
        assert_eq!(err.to_string(), "file is empty");
    }

    #[test]
    fn message_field_is_fallback_for_detail() {
        let err =
            ApiError::from_response(StatusCode::BAD_REQUEST, &body(None, Some("bad request")));
        assert_eq!(err.to_string(), "bad request");
    }

    #[test]
    fn bodyless_failure_is_unknown() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, &body(None, None));
        assert_eq!(err.to_string(), "An unknown error occurred");
    }
}
