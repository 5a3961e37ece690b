//! Organizations
//!
//! Requests and wrappers for the `/v3/organizations` endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::links::{Link, LinkBased};
use crate::pagination::{fetch_all, Page};
use crate::validation::{ensure_valid, require, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An organization as returned by the platform
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub suspended: Option<bool>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub links: HashMap<String, Link>,
}

impl LinkBased for Organization {
    fn links(&self) -> &HashMap<String, Link> {
        &self.links
    }
}

/// Request to fetch a single organization
#[derive(Debug, Clone, Default)]
pub struct GetOrganizationRequest {
    pub id: String,
}

impl GetOrganizationRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for GetOrganizationRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "id", &self.id);
        violations
    }
}

/// Request to list organizations, with optional filters
#[derive(Debug, Clone, Default)]
pub struct ListOrganizationsRequest {
    pub names: Vec<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListOrganizationsRequest {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
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
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        query
    }
}

impl Validate for ListOrganizationsRequest {
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Request to create an organization
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
}

impl CreateOrganizationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for CreateOrganizationRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "name", &self.name);
        violations
    }
}

/// Fetch a single organization
pub async fn get(client: &Client, request: &GetOrganizationRequest) -> Result<Organization> {
    ensure_valid(request)?;
    client
        .get(&format!("v3/organizations/{}", request.id), &[])
        .await
}

/// Fetch one page of organizations
pub async fn list(client: &Client, request: &ListOrganizationsRequest) -> Result<Page<Organization>> {
    ensure_valid(request)?;
    client.get("v3/organizations", &request.query()).await
}

/// Fetch all organizations matching the request (auto-paginate)
pub async fn list_all(
    client: &Client,
    request: &ListOrganizationsRequest,
) -> Result<Vec<Organization>> {
    ensure_valid(request)?;
    fetch_all(client, "v3/organizations", &request.query()).await
}

/// Create an organization
pub async fn create(client: &Client, request: &CreateOrganizationRequest) -> Result<Organization> {
    ensure_valid(request)?;
    client.post("v3/organizations", Some(request)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_organization_requires_name() {
        assert_eq!(
            CreateOrganizationRequest::default().validate(),
            vec!["name must be specified"]
        );
        assert!(CreateOrganizationRequest::new("my-org").validate().is_empty());
    }
}
