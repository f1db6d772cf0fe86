use tracing::{debug, instrument};

use crate::errors::Result;
use crate::service::sealed::Sealed;
use crate::service::{require_non_empty, ServiceClient, ServiceConfig};
use crate::types::ApiResponse;

/// Client for the OpsGenie Integration API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationClient {
    config: ServiceConfig,
}

impl Sealed for IntegrationClient {
    fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    fn into_config(self) -> ServiceConfig {
        self.config
    }
}

impl ServiceClient for IntegrationClient {
    const SERVICE: &'static str = "integration";

    fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl IntegrationClient {
    /// Enable the integration with the given id
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, the request fails or OpsGenie
    /// returns a non-success status code.
    #[instrument(name = "IntegrationClient::enable", skip(self))]
    pub async fn enable(&self, id: &str) -> Result<ApiResponse> {
        self.toggle(id, "enable").await
    }

    /// Disable the integration with the given id
    ///
    /// # Errors
    ///
    /// Same as [`IntegrationClient::enable`].
    #[instrument(name = "IntegrationClient::disable", skip(self))]
    pub async fn disable(&self, id: &str) -> Result<ApiResponse> {
        self.toggle(id, "disable").await
    }

    async fn toggle(&self, id: &str, action: &str) -> Result<ApiResponse> {
        require_non_empty("integration id", id)?;

        let response = self
            .config
            .post(
                &["v2", "integrations", id, action],
                &[],
                &serde_json::Map::new(),
            )
            .await?;

        debug!(action, "Integration updated");
        Ok(response)
    }
}
