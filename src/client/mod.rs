//! Platform API interaction module
//!
//! This module provides the core functionality for talking to the Nimbus
//! platform API: bearer-token authentication, the HTTP transport, and the
//! typed request verbs the per-resource wrappers delegate to.
//!
//! # Module Structure
//!
//! - [`token`] - Token providers (static tokens, password grant with caching)
//! - `http` - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```ignore
//! use nimbus_client::{Client, StaticToken};
//!
//! async fn example() -> nimbus_client::Result<()> {
//!     let client = Client::new("https://api.nimbus.example.com", StaticToken::new("token"))?;
//!     let app: nimbus_client::applications::Application =
//!         client.get("v3/apps/8d42ba27", &[]).await?;
//!     Ok(())
//! }
//! ```

mod http;
pub mod token;

use crate::error::Result;
use crate::links::Link;
use http::HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use token::TokenProvider;
use url::Url;

/// Main client for the Nimbus platform API
#[derive(Clone)]
pub struct Client {
    base: Url,
    http: HttpClient,
    token: Arc<dyn TokenProvider>,
}

impl Client {
    /// Create a client for the given API endpoint
    pub fn new(api_url: &str, provider: impl TokenProvider + 'static) -> Result<Self> {
        Self::with_provider(api_url, Arc::new(provider))
    }

    /// Create a client sharing an existing token provider
    pub fn with_provider(api_url: &str, provider: Arc<dyn TokenProvider>) -> Result<Self> {
        // A trailing slash keeps Url::join from dropping the last path
        // segment of endpoints hosted under a subpath
        let mut endpoint = api_url.to_string();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        let base = Url::parse(&endpoint)?;

        Ok(Self {
            base,
            http: HttpClient::new()?,
            token: provider,
        })
    }

    /// The configured API endpoint
    pub fn api_url(&self) -> &Url {
        &self.base
    }

    /// Get the current access token
    pub async fn token(&self) -> Result<String> {
        self.token.token().await
    }

    /// Force a token refresh, e.g. after a 401
    pub async fn refresh_token(&self) -> Result<String> {
        self.token.refresh().await
    }

    /// Make a GET request to a path under the API endpoint
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint(path, query)?;
        let token = self.token().await?;
        self.http.get(url, &token).await
    }

    /// Make a GET request to an href taken from a response link
    pub async fn get_href<T: DeserializeOwned>(&self, href: &str) -> Result<T> {
        let url = self.base.join(href)?;
        let token = self.token().await?;
        self.http.get(url, &token).await
    }

    /// Follow a hyperlink from a response entity
    ///
    /// Links are followed with GET regardless of their advertised method;
    /// use [`Client::post`] or [`Client::delete`] for mutating relations.
    pub async fn follow<T: DeserializeOwned>(&self, link: &Link) -> Result<T> {
        self.get_href(&link.href).await
    }

    /// Make a POST request to a path under the API endpoint
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.endpoint(path, &[])?;
        let token = self.token().await?;
        self.http.post(url, &token, body).await
    }

    /// Make a POST request with no body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.post::<T, ()>(path, None).await
    }

    /// Make a DELETE request to a path under the API endpoint
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path, &[])?;
        let token = self.token().await?;
        self.http.delete(url, &token).await
    }

    /// Build a full URL for a path plus query pairs
    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base.join(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::token::StaticToken;
    use super::*;

    #[test]
    fn endpoint_preserves_subpath_bases() {
        let client = Client::new("https://api.example.com/nimbus", StaticToken::new("t"))
            .expect("client should build");
        let url = client.endpoint("v3/apps", &[]).expect("url should build");
        assert_eq!(url.as_str(), "https://api.example.com/nimbus/v3/apps");
    }

    #[test]
    fn endpoint_appends_query_pairs() {
        let client =
            Client::new("https://api.example.com", StaticToken::new("t")).expect("client should build");
        let url = client
            .endpoint("v3/apps", &[("names", "a,b".to_string()), ("page", "2".to_string())])
            .expect("url should build");
        assert_eq!(url.as_str(), "https://api.example.com/v3/apps?names=a%2Cb&page=2");
    }

    #[test]
    fn rejects_invalid_endpoint() {
        assert!(Client::new("not a url", StaticToken::new("t")).is_err());
    }
}
