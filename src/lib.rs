//! # OpsGenie Client
//!
//! A Rust client library for the [OpsGenie](https://www.atlassian.com/software/opsgenie) Web API.
//!
//! ## Features
//!
//! - Configure credentials, proxy and timeouts once on [`OpsGenieClient`]
//! - Derive per-service clients (alert, heartbeat, integration, policy)
//!   that each carry an independent snapshot of that configuration
//! - Proxy settings validated up front, so deriving a client never fails
//!   once an API key is set
//!
//! ## Example
//!
//! ```rust,no_run
//! use opsgenie_client::{CreateAlertRequest, OpsGenieClient, Priority};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpsGenieClient::from_env()?;
//!
//!     let alert = CreateAlertRequest::new("HighMemoryUsage on my-app")
//!         .with_alias("my-app-memory")
//!         .with_priority(Priority::P2)
//!         .with_tag("my-app")
//!         .with_description("The service is using more than 90% of available memory");
//!
//!     client.alert()?.create(&alert).await?;
//!     client.heartbeat()?.ping("my-app").await?;
//!     Ok(())
//! }
//! ```

mod alert;
mod client;
mod errors;
mod heartbeat;
mod integration;
mod policy;
mod proxy;
mod service;
mod transport;
mod types;

pub use alert::AlertClient;
pub use client::{OpsGenieClient, API_KEY_ENV, ENDPOINT_URL};
pub use errors::{OpsGenieError, Result};
pub use heartbeat::HeartbeatClient;
pub use integration::IntegrationClient;
pub use policy::PolicyClient;
pub use proxy::{ClientProxyConfiguration, ProxyProtocol};
pub use service::{ServiceClient, ServiceConfig};
pub use transport::HttpTransportSettings;
pub use types::{AlertIdentifier, ApiResponse, CloseAlertRequest, CreateAlertRequest, Priority};
