//! Nimbus authentication
//!
//! The platform API authenticates every call with an OAuth bearer token.
//! [`TokenProvider`] abstracts where that token comes from: a fixed string
//! handed in by the caller, or the platform login server via the password
//! grant, with caching and expiry handling.

use super::http::decode_form_response;
use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Token expiry buffer - refresh tokens this much before they actually expire
/// This prevents using tokens that are about to expire during a request
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Default token TTL if the login server does not report one
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(10 * 60);

/// Source of bearer tokens for API calls
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Get an access token, reusing a cached one when still valid
    async fn token(&self) -> Result<String>;

    /// Force a fresh token, discarding any cache
    async fn refresh(&self) -> Result<String> {
        self.token().await
    }
}

/// Fixed token supplied by the caller; never refreshed
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// When this token expires (with buffer applied)
    expires_at: Instant,
}

impl CachedToken {
    /// Check if this cached token is still valid
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Password-grant token provider backed by the platform login server
pub struct PasswordGrant {
    client: reqwest::Client,
    token_url: String,
    client_id: String,
    username: String,
    password: String,
    token_cache: RwLock<Option<CachedToken>>,
}

impl PasswordGrant {
    /// Create a provider for the given login endpoint, e.g.
    /// `https://login.nimbus.example.com/oauth/token`
    pub fn new(
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nimbus-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            token_url: token_url.into(),
            client_id: client_id.into(),
            username: username.into(),
            password: password.into(),
            token_cache: RwLock::new(None),
        })
    }

    async fn fetch_token(&self) -> Result<String> {
        let params = [
            ("grant_type", "password"),
            ("client_id", self.client_id.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await?;

        let grant: TokenGrant = decode_form_response(response).await?;

        let ttl = grant
            .expires_in
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_TTL);
        let expires_at = Instant::now() + ttl.saturating_sub(TOKEN_EXPIRY_BUFFER);

        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: grant.access_token.clone(),
                expires_at,
            });
        }

        tracing::debug!(
            "new token cached, expires in ~{} minutes",
            ttl.saturating_sub(TOKEN_EXPIRY_BUFFER).as_secs() / 60
        );

        Ok(grant.access_token)
    }
}

#[async_trait]
impl TokenProvider for PasswordGrant {
    async fn token(&self) -> Result<String> {
        // Check cache first - but only return if token is still valid
        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                // Token expired or about to expire, will fetch new one
                tracing::debug!("cached token expired, fetching new token");
            }
        }

        self.fetch_token().await
    }

    async fn refresh(&self) -> Result<String> {
        {
            let mut cache = self.token_cache.write().await;
            *cache = None;
        }

        self.fetch_token().await
    }
}
