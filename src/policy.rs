use tracing::{debug, instrument};

use crate::errors::Result;
use crate::service::sealed::Sealed;
use crate::service::{require_non_empty, ServiceClient, ServiceConfig};
use crate::types::ApiResponse;

/// Client for the OpsGenie Policy API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyClient {
    config: ServiceConfig,
}

impl Sealed for PolicyClient {
    fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    fn into_config(self) -> ServiceConfig {
        self.config
    }
}

impl ServiceClient for PolicyClient {
    const SERVICE: &'static str = "policy";

    fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl PolicyClient {
    /// Enable the policy with the given id
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, the request fails or OpsGenie
    /// returns a non-success status code.
    #[instrument(name = "PolicyClient::enable", skip(self))]
    pub async fn enable(&self, id: &str) -> Result<ApiResponse> {
        self.toggle(id, "enable").await
    }

    /// Disable the policy with the given id
    #[instrument(name = "PolicyClient::disable", skip(self))]
    pub async fn disable(&self, id: &str) -> Result<ApiResponse> {
        self.toggle(id, "disable").await
    }

    async fn toggle(&self, id: &str, action: &str) -> Result<ApiResponse> {
        require_non_empty("policy id", id)?;

        let response = self
            .config
            .post(&["v2", "policies", id, action], &[], &serde_json::Map::new())
            .await?;

        debug!(action, "Policy updated");
        Ok(response)
    }
}
