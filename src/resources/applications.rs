//! Application lifecycle
//!
//! Requests and wrappers for the `/v3/apps` endpoints: fetching, listing,
//! creating, starting, stopping and deleting applications, plus per-index
//! instance status and the aggregate summary view.

use crate::client::Client;
use crate::error::Result;
use crate::links::{Link, LinkBased};
use crate::pagination::{fetch_all, Page};
use crate::validation::{ensure_valid, require, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle state of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationState {
    Started,
    Stopped,
}

/// State of one running instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceState {
    Running,
    Starting,
    Crashed,
    Down,
}

/// How the platform decides whether an application is healthy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthCheckType {
    /// TCP connect against the application's port
    Port,
    /// Process liveness only
    Process,
    /// HTTP GET against a configured endpoint
    Http,
    /// No health check
    None,
}

/// Raised when the platform reports a health check type this client does not
/// know. Unknown values are rejected at decode time, never defaulted.
#[derive(Debug, Clone, Error)]
#[error("unknown health check type: {0}")]
pub struct UnknownHealthCheckType(String);

impl HealthCheckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Port => "port",
            Self::Process => "process",
            Self::Http => "http",
            Self::None => "none",
        }
    }
}

impl FromStr for HealthCheckType {
    type Err = UnknownHealthCheckType;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "port" => Ok(Self::Port),
            "process" => Ok(Self::Process),
            "http" => Ok(Self::Http),
            "none" => Ok(Self::None),
            other => Err(UnknownHealthCheckType(other.to_string())),
        }
    }
}

impl fmt::Display for HealthCheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HealthCheckType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HealthCheckType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// An application as returned by the platform
#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub state: ApplicationState,
    #[serde(default)]
    pub instances: Option<u32>,
    #[serde(default)]
    pub memory_mb: Option<u64>,
    #[serde(default)]
    pub disk_quota_mb: Option<u64>,
    #[serde(default)]
    pub health_check_type: Option<HealthCheckType>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub links: HashMap<String, Link>,
}

impl LinkBased for Application {
    fn links(&self) -> &HashMap<String, Link> {
        &self.links
    }
}

/// Status of one application instance, keyed by instance index
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationInstance {
    pub state: InstanceState,
    /// Seconds since the epoch at which the instance reached its state
    #[serde(default)]
    pub since: Option<f64>,
}

/// Condensed service binding as it appears in the summary view
#[derive(Debug, Clone, Deserialize)]
pub struct BoundService {
    pub id: String,
    pub name: String,
}

/// Aggregate view of an application with its routes and services
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSummary {
    pub id: String,
    pub name: String,
    pub state: ApplicationState,
    #[serde(default)]
    pub instances: Option<u32>,
    #[serde(default)]
    pub running_instances: Option<u32>,
    #[serde(default)]
    pub memory_mb: Option<u64>,
    #[serde(default)]
    pub disk_quota_mb: Option<u64>,
    #[serde(default)]
    pub routes: Vec<super::routes::Route>,
    #[serde(default)]
    pub services: Vec<BoundService>,
}

/// Request to fetch a single application
#[derive(Debug, Clone, Default)]
pub struct GetApplicationRequest {
    pub id: String,
}

impl GetApplicationRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for GetApplicationRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "id", &self.id);
        violations
    }
}

/// Request to list applications, with optional filters
#[derive(Debug, Clone, Default)]
pub struct ListApplicationsRequest {
    pub names: Vec<String>,
    pub space_ids: Vec<String>,
    pub organization_ids: Vec<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListApplicationsRequest {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn space_id(mut self, id: impl Into<String>) -> Self {
        self.space_ids.push(id.into());
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
        if !self.space_ids.is_empty() {
            query.push(("space_ids", self.space_ids.join(",")));
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

impl Validate for ListApplicationsRequest {
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Request to create an application
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateApplicationRequest {
    pub name: String,
    pub space_id: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub environment: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<HealthCheckType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<u64>,
}

impl CreateApplicationRequest {
    pub fn new(name: impl Into<String>, space_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space_id: space_id.into(),
            ..Self::default()
        }
    }

    pub fn environment(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }

    pub fn health_check_type(mut self, health_check_type: HealthCheckType) -> Self {
        self.health_check_type = Some(health_check_type);
        self
    }

    pub fn instances(mut self, instances: u32) -> Self {
        self.instances = Some(instances);
        self
    }

    pub fn memory_mb(mut self, memory_mb: u64) -> Self {
        self.memory_mb = Some(memory_mb);
        self
    }
}

impl Validate for CreateApplicationRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "name", &self.name);
        require(&mut violations, "space id", &self.space_id);
        violations
    }
}

/// Request to start an application
#[derive(Debug, Clone, Default)]
pub struct StartApplicationRequest {
    pub id: String,
}

impl StartApplicationRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for StartApplicationRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "id", &self.id);
        violations
    }
}

/// Request to stop an application
#[derive(Debug, Clone, Default)]
pub struct StopApplicationRequest {
    pub id: String,
}

impl StopApplicationRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for StopApplicationRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "id", &self.id);
        violations
    }
}

/// Request to delete an application
#[derive(Debug, Clone, Default)]
pub struct DeleteApplicationRequest {
    pub id: String,
}

impl DeleteApplicationRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for DeleteApplicationRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "id", &self.id);
        violations
    }
}

/// Request for the per-index instance map of an application
#[derive(Debug, Clone, Default)]
pub struct ApplicationInstancesRequest {
    pub id: String,
}

impl ApplicationInstancesRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for ApplicationInstancesRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "id", &self.id);
        violations
    }
}

/// Request for the aggregate summary of an application
#[derive(Debug, Clone, Default)]
pub struct SummaryApplicationRequest {
    pub id: String,
}

impl SummaryApplicationRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for SummaryApplicationRequest {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&mut violations, "id", &self.id);
        violations
    }
}

/// Fetch a single application
pub async fn get(client: &Client, request: &GetApplicationRequest) -> Result<Application> {
    ensure_valid(request)?;
    client.get(&format!("v3/apps/{}", request.id), &[]).await
}

/// Fetch one page of applications
pub async fn list(client: &Client, request: &ListApplicationsRequest) -> Result<Page<Application>> {
    ensure_valid(request)?;
    client.get("v3/apps", &request.query()).await
}

/// Fetch all applications matching the request (auto-paginate)
pub async fn list_all(client: &Client, request: &ListApplicationsRequest) -> Result<Vec<Application>> {
    ensure_valid(request)?;
    fetch_all(client, "v3/apps", &request.query()).await
}

/// Create an application
pub async fn create(client: &Client, request: &CreateApplicationRequest) -> Result<Application> {
    ensure_valid(request)?;
    client.post("v3/apps", Some(request)).await
}

/// Start an application
pub async fn start(client: &Client, request: &StartApplicationRequest) -> Result<Application> {
    ensure_valid(request)?;
    client
        .post_empty(&format!("v3/apps/{}/actions/start", request.id))
        .await
}

/// Stop an application
pub async fn stop(client: &Client, request: &StopApplicationRequest) -> Result<Application> {
    ensure_valid(request)?;
    client
        .post_empty(&format!("v3/apps/{}/actions/stop", request.id))
        .await
}

/// Delete an application
pub async fn delete(client: &Client, request: &DeleteApplicationRequest) -> Result<()> {
    ensure_valid(request)?;
    client.delete(&format!("v3/apps/{}", request.id)).await
}

/// Fetch the instance map of an application, keyed by instance index
pub async fn instances(
    client: &Client,
    request: &ApplicationInstancesRequest,
) -> Result<HashMap<String, ApplicationInstance>> {
    ensure_valid(request)?;
    client
        .get(&format!("v3/apps/{}/instances", request.id), &[])
        .await
}

/// Fetch the aggregate summary of an application
pub async fn summary(client: &Client, request: &SummaryApplicationRequest) -> Result<ApplicationSummary> {
    ensure_valid(request)?;
    client
        .get(&format!("v3/apps/{}/summary", request.id), &[])
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_parses_known_values() {
        assert_eq!("port".parse::<HealthCheckType>().unwrap(), HealthCheckType::Port);
        assert_eq!("none".parse::<HealthCheckType>().unwrap(), HealthCheckType::None);
    }

    #[test]
    fn health_check_rejects_unknown_values() {
        let error = "banana".parse::<HealthCheckType>().unwrap_err();
        assert_eq!(error.to_string(), "unknown health check type: banana");
    }

    #[test]
    fn health_check_decode_is_strict() {
        let decoded: HealthCheckType = serde_json::from_str(r#""http""#).expect("known value");
        assert_eq!(decoded, HealthCheckType::Http);

        let result = serde_json::from_str::<HealthCheckType>(r#""magic""#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("unknown health check type: magic"));
    }

    #[test]
    fn application_state_decode_is_strict() {
        assert!(serde_json::from_str::<ApplicationState>(r#""STARTED""#).is_ok());
        assert!(serde_json::from_str::<ApplicationState>(r#""EXPLODED""#).is_err());
    }

    #[test]
    fn get_request_round_trip() {
        assert!(GetApplicationRequest::new("test-id").validate().is_empty());

        let violations = GetApplicationRequest::default().validate();
        assert_eq!(violations, vec!["id must be specified"]);
    }

    #[test]
    fn create_request_reports_every_missing_field() {
        let violations = CreateApplicationRequest::default().validate();
        assert_eq!(
            violations,
            vec!["name must be specified", "space id must be specified"]
        );

        let request = CreateApplicationRequest::new("my-app", "space-1")
            .instances(2)
            .environment("RAILS_ENV", "production");
        assert!(request.validate().is_empty());
    }

    #[test]
    fn create_request_skips_unset_optionals_in_body() {
        let request = CreateApplicationRequest::new("my-app", "space-1");
        let body = serde_json::to_value(&request).expect("body should encode");
        assert_eq!(body["name"], "my-app");
        assert!(body.get("environment").is_none());
        assert!(body.get("health_check_type").is_none());
    }

    #[test]
    fn list_request_builds_query_in_declaration_order() {
        let request = ListApplicationsRequest::default()
            .name("a")
            .name("b")
            .space_id("s1")
            .page(2)
            .per_page(50);
        assert_eq!(
            request.query(),
            vec![
                ("names", "a,b".to_string()),
                ("space_ids", "s1".to_string()),
                ("page", "2".to_string()),
                ("per_page", "50".to_string()),
            ]
        );
    }

    #[test]
    fn empty_list_request_has_no_query_and_no_violations() {
        let request = ListApplicationsRequest::default();
        assert!(request.query().is_empty());
        assert!(request.validate().is_empty());
    }
}
