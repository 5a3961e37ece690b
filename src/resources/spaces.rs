//! Spaces
//!
//! Requests and wrappers for the `/v3/spaces` endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::links::{Link, LinkBased};
use crate::pagination::{fetch_all, Page};
use crate::validation::{ensure_valid, require, Validate};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// A space as returned by the platform
#[derive(Debug, Clone, Deserialize)]
pub struct Space {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub organization_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub links: HashMap<String, Link>,
}

impl LinkBased for Space {
    fn links(&self) -> &HashMap<String, Link> {
        &self.links
    }
}

/// Request to fetch a single space
#[derive(Debug, Clone, Default)]
pub struct GetSpaceRequest {
    pub id: String,
}

impl GetSpaceRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for GetSpaceRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "id", &self.id);
        violations
    }
}

/// Request to list spaces, with optional filters
#[derive(Debug, Clone, Default)]
pub struct ListSpacesRequest {
    pub names: Vec<String>,
    pub organization_ids: Vec<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListSpacesRequest {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn organization_id(mut self, id: impl Into<String>) -> Self {
        self.organization_ids.push(id.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if !self.names.is_empty() {
            query.push(("names", self.names.join(",")));
        }
        if !self.organization_ids.is_empty() {
            query.push(("organization_ids", self.organization_ids.join(",")));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        query
    }
}

impl Validate for ListSpacesRequest {
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Fetch a single space
pub async fn get(client: &Client, request: &GetSpaceRequest) -> Result<Space> {
    ensure_valid(request)?;
    client.get(&format!("v3/spaces/{}", request.id), &[]).await
}

/// Fetch one page of spaces
pub async fn list(client: &Client, request: &ListSpacesRequest) -> Result<Page<Space>> {
    ensure_valid(request)?;
    client.get("v3/spaces", &request.query()).await
}

/// Fetch all spaces matching the request (auto-paginate)
pub async fn list_all(client: &Client, request: &ListSpacesRequest) -> Result<Vec<Space>> {
    ensure_valid(request)?;
    fetch_all(client, "v3/spaces", &request.query()).await
}
