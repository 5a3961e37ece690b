//! Client SDK for the Nimbus cloud platform API.
//!
//! Nimbus manages applications, routes, services, organizations and spaces
//! through a REST API. This crate wraps that API with typed request and
//! response values, validating every request locally before a single byte
//! goes over the wire and exposing response hyperlinks for navigation.
//!
//! # Quick Start
//!
//! ```no_run
//! use nimbus_client::applications::{self, GetApplicationRequest, ListApplicationsRequest};
//! use nimbus_client::{Client, LinkBased, StaticToken};
//!
//! #[tokio::main]
//! async fn main() -> nimbus_client::Result<()> {
//!     let client = Client::new("https://api.nimbus.example.com", StaticToken::new("token"))?;
//!
//!     // Fetch a single application
//!     let app = applications::get(&client, &GetApplicationRequest::new("03f286bb")).await?;
//!     println!("{} is {:?}", app.name, app.state);
//!
//!     // Follow a hyperlink from the response
//!     if let Some(space_link) = app.link("space") {
//!         let space: nimbus_client::spaces::Space = client.follow(space_link).await?;
//!         println!("runs in {}", space.name);
//!     }
//!
//!     // List across all pages
//!     let request = ListApplicationsRequest::default().organization_id("aadb707d");
//!     let apps = applications::list_all(&client, &request).await?;
//!     println!("{} applications", apps.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`validation`] - Mandatory-field checks run before every network call;
//!   all violations are reported at once as a [`ValidationError`]
//! - [`links`] - [`Link`] values and the [`LinkBased`] relation map every
//!   response entity exposes
//! - [`pagination`] - [`Page`](pagination::Page) and helpers that walk a
//!   list by following `next` links
//! - [`client`] - The HTTP transport, token handling and the [`Client`]
//!   the resource wrappers delegate to
//! - Resource wrappers: [`applications`], [`organizations`], [`spaces`],
//!   [`routes`], [`service_instances`]
//!
//! # Configuration
//!
//! [`Config`] persists the targeted endpoint, organization and space under
//! the user config directory; `NIMBUS_API`, `NIMBUS_ORG` and `NIMBUS_SPACE`
//! environment variables take precedence.

pub mod client;
pub mod config;
pub mod error;
pub mod links;
pub mod pagination;
pub mod resources;
pub mod validation;

pub use client::token::{PasswordGrant, StaticToken, TokenProvider};
pub use client::Client;
pub use config::Config;
pub use error::{ApiError, Error, Result};
pub use links::{Link, LinkBased};
pub use pagination::{Page, Pagination};
pub use validation::{Validate, ValidationError};

pub use resources::{applications, organizations, routes, service_instances, spaces};
