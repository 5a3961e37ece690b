//! Service instances
//!
//! Requests and wrappers for the `/v3/service_instances` endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::links::{Link, LinkBased};
use crate::pagination::{fetch_all, Page};
use crate::validation::{ensure_valid, require, Validate};
use serde::Deserialize;
use std::collections::HashMap;

/// A provisioned service instance
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceInstance {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub plan_id: Option<String>,
    #[serde(default)]
    pub space_id: Option<String>,
    /// Number of applications bound to this instance
    #[serde(default)]
    pub bound_application_count: Option<u32>,
    #[serde(default)]
    pub links: HashMap<String, Link>,
}

impl LinkBased for ServiceInstance {
    fn links(&self) -> &HashMap<String, Link> {
        &self.links
    }
}

/// Request to fetch a single service instance
#[derive(Debug, Clone, Default)]
pub struct GetServiceInstanceRequest {
    pub id: String,
}

impl GetServiceInstanceRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for GetServiceInstanceRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "id", &self.id);
        violations
    }
}

/// Request to list service instances, with optional filters
#[derive(Debug, Clone, Default)]
pub struct ListServiceInstancesRequest {
    pub names: Vec<String>,
    pub space_ids: Vec<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListServiceInstancesRequest {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn space_id(mut self, id: impl Into<String>) -> Self {
        self.space_ids.push(id.into());
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
        if !self.space_ids.is_empty() {
            query.push(("space_ids", self.space_ids.join(",")));
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

impl Validate for ListServiceInstancesRequest {
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Fetch a single service instance
pub async fn get(client: &Client, request: &GetServiceInstanceRequest) -> Result<ServiceInstance> {
    ensure_valid(request)?;
    client
        .get(&format!("v3/service_instances/{}", request.id), &[])
        .await
}

/// Fetch one page of service instances
pub async fn list(
    client: &Client,
    request: &ListServiceInstancesRequest,
) -> Result<Page<ServiceInstance>> {
    ensure_valid(request)?;
    client.get("v3/service_instances", &request.query()).await
}

/// Fetch all service instances matching the request (auto-paginate)
pub async fn list_all(
    client: &Client,
    request: &ListServiceInstancesRequest,
) -> Result<Vec<ServiceInstance>> {
    ensure_valid(request)?;
    fetch_all(client, "v3/service_instances", &request.query()).await
}
