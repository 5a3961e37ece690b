//! Routes
//!
//! Requests and wrappers for the `/v3/routes` endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::links::{Link, LinkBased};
use crate::pagination::{fetch_all, Page};
use crate::validation::{ensure_valid, require, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A route mapping a host and path on a domain to a space
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub id: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    /// Fully rendered address, e.g. `host-18.example.com/api`
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub domain_id: Option<String>,
    #[serde(default)]
    pub space_id: Option<String>,
    #[serde(default)]
    pub links: HashMap<String, Link>,
}

impl LinkBased for Route {
    fn links(&self) -> &HashMap<String, Link> {
        &self.links
    }
}

/// Request to list routes, with optional filters
#[derive(Debug, Clone, Default)]
pub struct ListRoutesRequest {
    pub space_ids: Vec<String>,
    pub domain_ids: Vec<String>,
    pub hosts: Vec<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListRoutesRequest {
    pub fn space_id(mut self, id: impl Into<String>) -> Self {
        self.space_ids.push(id.into());
        self
    }

    pub fn domain_id(mut self, id: impl Into<String>) -> Self {
        self.domain_ids.push(id.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.hosts.push(host.into());
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
        if !self.space_ids.is_empty() {
            query.push(("space_ids", self.space_ids.join(",")));
        }
        if !self.domain_ids.is_empty() {
            query.push(("domain_ids", self.domain_ids.join(",")));
        }
        if !self.hosts.is_empty() {
            query.push(("hosts", self.hosts.join(",")));
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

impl Validate for ListRoutesRequest {
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Request to create a route
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRouteRequest {
    pub space_id: String,
    pub domain_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl CreateRouteRequest {
    pub fn new(space_id: impl Into<String>, domain_id: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            domain_id: domain_id.into(),
            ..Self::default()
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl Validate for CreateRouteRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "space id", &self.space_id);
        require(&mut violations, "domain id", &self.domain_id);
        violations
    }
}

/// Request to delete a route
#[derive(Debug, Clone, Default)]
pub struct DeleteRouteRequest {
    pub id: String,
}

impl DeleteRouteRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for DeleteRouteRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "id", &self.id);
        violations
    }
}

/// Fetch one page of routes
pub async fn list(client: &Client, request: &ListRoutesRequest) -> Result<Page<Route>> {
    ensure_valid(request)?;
    client.get("v3/routes", &request.query()).await
}

/// Fetch all routes matching the request (auto-paginate)
pub async fn list_all(client: &Client, request: &ListRoutesRequest) -> Result<Vec<Route>> {
    ensure_valid(request)?;
    fetch_all(client, "v3/routes", &request.query()).await
}

/// Create a route
pub async fn create(client: &Client, request: &CreateRouteRequest) -> Result<Route> {
    ensure_valid(request)?;
    client.post("v3/routes", Some(request)).await
}

/// Delete a route
pub async fn delete(client: &Client, request: &DeleteRouteRequest) -> Result<()> {
    ensure_valid(request)?;
    client.delete(&format!("v3/routes/{}", request.id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_route_requires_space_and_domain() {
        let violations = CreateRouteRequest::default().validate();
        assert_eq!(
            violations,
            vec!["space id must be specified", "domain id must be specified"]
        );

        let request = CreateRouteRequest::new("space-1", "domain-1").host("host-18");
        assert!(request.validate().is_empty());
    }

    #[test]
    fn route_decodes_without_optional_fields() {
        let route: Route = serde_json::from_str(r#"{"id": "7b0b080a"}"#).expect("route should decode");
        assert_eq!(route.id, "7b0b080a");
        assert!(route.host.is_none());
        assert!(route.links.is_empty());
    }
}
