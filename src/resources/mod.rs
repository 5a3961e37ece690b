//! Per-resource API wrappers
//!
//! Each submodule covers one resource family of the platform API with typed
//! request values and thin async wrapper functions. Every wrapper follows the
//! same pattern: validate the request, build the URL and query, issue the
//! call through the shared [`Client`](crate::Client), decode the typed
//! response.
//!
//! # Example
//!
//! ```ignore
//! use nimbus_client::applications::{self, ListApplicationsRequest};
//!
//! async fn stopped_apps(client: &nimbus_client::Client) -> nimbus_client::Result<usize> {
//!     let request = ListApplicationsRequest::default().space_id("b10ca4ed");
//!     let apps = applications::list_all(client, &request).await?;
//!     Ok(apps.len())
//! }
//! ```

pub mod applications;
pub mod organizations;
pub mod routes;
pub mod service_instances;
pub mod spaces;
