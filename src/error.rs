//! Error types for the Nimbus client
//!
//! Validation and decode failures are surfaced to the caller unchanged; the
//! client never swallows an error or logs-and-continues.

use crate::validation::ValidationError;
use serde::Deserialize;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// One error object from a platform API error response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

/// Shape of the platform's error response body.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ApiError>,
}

/// Everything that can go wrong when talking to the platform.
#[derive(Debug, Error)]
pub enum Error {
    /// The request failed local validation; no network call was made.
    /// Always recoverable: fix the input and retry. Never retried
    /// automatically.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The platform answered with a non-success status.
    #[error("API request failed: {status}")]
    Api {
        status: reqwest::StatusCode,
        errors: Vec<ApiError>,
    },

    /// The request never completed (connection, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape. Unknown
    /// enumerated values land here rather than being silently defaulted.
    #[error("failed to decode API response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The configured endpoint or a link href could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The on-disk configuration could not be written.
    #[error("failed to persist configuration: {0}")]
    Config(#[from] std::io::Error),
}

impl Error {
    /// Build an API error from a status and the raw response body.
    ///
    /// The body is decoded best-effort; a body that is not the documented
    /// error shape still yields an `Api` error carrying the status.
    pub(crate) fn api(status: reqwest::StatusCode, body: &str) -> Self {
        let errors = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.errors)
            .unwrap_or_default();
        Self::Api { status, errors }
    }

    /// Format this error for display to an end user.
    ///
    /// Maps common statuses to actionable guidance without exposing raw API
    /// details.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Api { status, .. } => match status.as_u16() {
                401 => "Authentication failed. Obtain a fresh access token.".to_string(),
                403 => "Permission denied. Check your role in the organization or space.".to_string(),
                404 => "Resource not found.".to_string(),
                409 => "Resource conflict. The resource may already exist or be in use.".to_string(),
                429 => "Rate limit exceeded. Please try again later.".to_string(),
                500 | 502 | 503 => "Platform temporarily unavailable. Please try again.".to_string(),
                _ => format!("Request failed with status {}.", status.as_u16()),
            },
            Self::Transport(_) => {
                "Request failed. Check your network connection and the API endpoint.".to_string()
            }
            Self::Decode { .. } => "Received an unexpected response from the platform.".to_string(),
            Self::Url(_) => "The configured API endpoint is not a valid URL.".to_string(),
            Self::Config(_) => "Could not write the configuration file.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_decodes_detail_list() {
        let body = r#"{"errors":[{"code":10010,"title":"CF-AppNotFound","detail":"App not found"}]}"#;
        let error = Error::api(reqwest::StatusCode::NOT_FOUND, body);
        match error {
            Error::Api { status, errors } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].detail, "App not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_error_tolerates_unstructured_body() {
        let error = Error::api(reqwest::StatusCode::BAD_GATEWAY, "<html>oops</html>");
        match error {
            Error::Api { status, errors } => {
                assert_eq!(status.as_u16(), 502);
                assert!(errors.is_empty());
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn user_message_maps_common_statuses() {
        let unauthorized = Error::api(reqwest::StatusCode::UNAUTHORIZED, "");
        assert!(unauthorized.user_message().contains("Authentication failed"));

        let throttled = Error::api(reqwest::StatusCode::TOO_MANY_REQUESTS, "");
        assert!(throttled.user_message().contains("Rate limit"));
    }
}
