use tracing::{debug, instrument};

use crate::errors::Result;
use crate::service::sealed::Sealed;
use crate::service::{require_non_empty, ServiceClient, ServiceConfig};
use crate::types::{AlertIdentifier, ApiResponse, CloseAlertRequest, CreateAlertRequest};

/// Client for the OpsGenie Alert API
///
/// Obtained from [`OpsGenieClient::alert`](crate::OpsGenieClient::alert).
///
/// # Example
///
/// ```rust,no_run
/// use opsgenie_client::{CreateAlertRequest, OpsGenieClient, Priority};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let alerts = OpsGenieClient::with_api_key("your-api-key")?.alert()?;
///
///     let alert = CreateAlertRequest::new("Payment gateway latency above 2s")
///         .with_alias("payments-latency")
///         .with_priority(Priority::P2);
///
///     alerts.create(&alert).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertClient {
    config: ServiceConfig,
}

impl Sealed for AlertClient {
    fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    fn into_config(self) -> ServiceConfig {
        self.config
    }
}

impl ServiceClient for AlertClient {
    const SERVICE: &'static str = "alert";

    fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl AlertClient {
    /// Create an alert
    ///
    /// OpsGenie processes alert creation asynchronously; the returned
    /// request id identifies the pending request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The alert message is empty
    /// - The HTTP request fails
    /// - OpsGenie returns a non-success status code
    #[instrument(
        name = "AlertClient::create",
        skip_all,
        fields(alias = request.alias.as_deref())
    )]
    pub async fn create(&self, request: &CreateAlertRequest) -> Result<ApiResponse> {
        require_non_empty("alert message", &request.message)?;

        let response = self.config.post(&["v2", "alerts"], &[], request).await?;

        debug!(request_id = ?response.request_id, "Alert create accepted");
        Ok(response)
    }

    /// Close an open alert
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty, the request fails or
    /// OpsGenie rejects it.
    #[instrument(
        name = "AlertClient::close",
        skip_all,
        fields(identifier_type = identifier.kind())
    )]
    pub async fn close(
        &self,
        identifier: &AlertIdentifier,
        request: &CloseAlertRequest,
    ) -> Result<ApiResponse> {
        require_non_empty("alert identifier", identifier.value())?;

        let response = self
            .config
            .post(
                &["v2", "alerts", identifier.value(), "close"],
                &[("identifierType", identifier.kind())],
                request,
            )
            .await?;

        debug!(request_id = ?response.request_id, "Alert close accepted");
        Ok(response)
    }
}
