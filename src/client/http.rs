//! HTTP utilities for Nimbus REST API calls

use crate::error::{Error, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for platform API calls
#[derive(Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nimbus-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request and decode the response body
    pub async fn get<T: DeserializeOwned>(&self, url: Url, token: &str) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).bearer_auth(token).send().await?;
        Self::decode(response).await
    }

    /// Make a POST request with an optional JSON body and decode the response
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: Url,
        token: &str,
        body: Option<&B>,
    ) -> Result<T> {
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(url).bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    /// Make a DELETE request; any response body is discarded
    pub async fn delete(&self, url: Url, token: &str) -> Result<()> {
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(url).bearer_auth(token).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(Error::api(status, &body));
        }

        Ok(())
    }

    /// Check the status and decode the body of a response
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(Error::api(status, &body));
        }

        // Some endpoints answer 202/204 with an empty body
        if body.is_empty() {
            return serde_json::from_str("null").map_err(|source| Error::Decode { source });
        }

        serde_json::from_str(&body).map_err(|source| Error::Decode { source })
    }
}

/// Decode a token-endpoint response outside the bearer-auth path
pub(crate) async fn decode_form_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T> {
    let status: StatusCode = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::error!("token endpoint error: {} - {}", status, sanitize_for_log(&body));
        return Err(Error::api(status, &body));
    }

    serde_json::from_str(&body).map_err(|source| Error::Decode { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("truncated"));
        assert!(sanitized.contains("500 bytes total"));
    }

    #[test]
    fn sanitize_strips_control_characters() {
        let sanitized = sanitize_for_log("ok\r\n\tdone");
        assert_eq!(sanitized, "okdone");
    }
}
