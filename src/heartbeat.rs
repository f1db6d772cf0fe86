use tracing::{debug, instrument};

use crate::errors::Result;
use crate::service::sealed::Sealed;
use crate::service::{require_non_empty, ServiceClient, ServiceConfig};
use crate::types::ApiResponse;

/// Client for the OpsGenie Heartbeat API
///
/// A heartbeat expects periodic pings; OpsGenie raises an alert when one
/// stops arriving within the configured interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatClient {
    config: ServiceConfig,
}

impl Sealed for HeartbeatClient {
    fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    fn into_config(self) -> ServiceConfig {
        self.config
    }
}

impl ServiceClient for HeartbeatClient {
    const SERVICE: &'static str = "heartbeat";

    fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl HeartbeatClient {
    /// Ping the heartbeat named `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, the request fails or OpsGenie
    /// returns a non-success status code (e.g. 404 for unknown heartbeats).
    #[instrument(name = "HeartbeatClient::ping", skip(self))]
    pub async fn ping(&self, name: &str) -> Result<ApiResponse> {
        require_non_empty("heartbeat name", name)?;

        let response = self.config.get(&["v2", "heartbeats", name, "ping"]).await?;

        debug!("Heartbeat ping accepted");
        Ok(response)
    }
}
