use reqwest::header::AUTHORIZATION;
use reqwest_middleware::RequestBuilder;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use tracing::debug;
use url::{ParseError, Url};

use crate::errors::{OpsGenieError, Result};
use crate::proxy::redact_proxy;
use crate::transport::{build_http_client, HttpTransportSettings};
use crate::types::ApiResponse;

/// Snapshot of the root client's configuration taken at derivation time
///
/// Owned by exactly one derived client and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    api_key: String,
    proxy: String,
    transport_settings: Option<HttpTransportSettings>,
    endpoint: Url,
}

impl ServiceConfig {
    pub(crate) fn new(
        api_key: String,
        proxy: String,
        transport_settings: Option<HttpTransportSettings>,
        endpoint: Url,
    ) -> Self {
        Self {
            api_key,
            proxy,
            transport_settings,
            endpoint,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Serialized proxy connection string, empty when no proxy is used
    pub fn proxy(&self) -> &str {
        &self.proxy
    }

    pub fn transport_settings(&self) -> Option<&HttpTransportSettings> {
        self.transport_settings.as_ref()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| {
                OpsGenieError::InvalidUrl(ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    pub(crate) async fn get(&self, segments: &[&str]) -> Result<ApiResponse> {
        let url = self.url(segments, &[])?;
        debug!(url = %url, "GET");
        let client = build_http_client(&self.proxy, self.transport_settings.as_ref())?;
        self.send(client.get(url)).await
    }

    pub(crate) async fn post<B>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments, query)?;
        debug!(url = %url, "POST");
        let client = build_http_client(&self.proxy, self.transport_settings.as_ref())?;
        self.send(client.post(url).json(body)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request
            .header(AUTHORIZATION, format!("GenieKey {}", self.api_key))
            .send()
            .await
            .map_err(OpsGenieError::Request)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| OpsGenieError::Request(err.into()))?;

        if !status.is_success() {
            return Err(OpsGenieError::Api {
                status: status.as_u16(),
                message: error_message(body),
            });
        }

        if body.trim().is_empty() {
            return Ok(ApiResponse::default());
        }

        serde_json::from_str(&body).map_err(OpsGenieError::Deserialize)
    }
}

impl Debug for ServiceConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &"<redacted>")
            .field("proxy", &redact_proxy(&self.proxy))
            .field("transport_settings", &self.transport_settings)
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(OpsGenieError::InvalidArgument(format!(
            "{field} can not be empty"
        )));
    }
    Ok(())
}

/// OpsGenie error bodies look like `{"message": "...", "took": 0.0, "requestId": "..."}`
fn error_message(body: String) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) => body,
    }
}

pub(crate) mod sealed {
    use super::ServiceConfig;

    /// Construction hooks reachable only from inside the crate
    pub trait Sealed: Sized {
        fn from_config(config: ServiceConfig) -> Self;

        fn into_config(self) -> ServiceConfig;
    }
}

/// Contract shared by every client derived from [`OpsGenieClient`](crate::OpsGenieClient)
///
/// The trait is sealed: service clients can only be obtained from the root
/// client's factory methods, never assembled from another client's snapshot.
///
/// ```compile_fail
/// use opsgenie_client::{OpsGenieClient, PolicyClient, ServiceClient};
///
/// let alert = OpsGenieClient::with_api_key("key").unwrap().alert().unwrap();
/// let policy = PolicyClient::from_config(alert.into_config());
/// ```
pub trait ServiceClient: sealed::Sealed {
    /// Service area name, used in logs
    const SERVICE: &'static str;

    fn config(&self) -> &ServiceConfig;

    fn api_key(&self) -> &str {
        self.config().api_key()
    }

    fn proxy(&self) -> &str {
        self.config().proxy()
    }

    fn transport_settings(&self) -> Option<&HttpTransportSettings> {
        self.config().transport_settings()
    }

    fn endpoint(&self) -> &Url {
        self.config().endpoint()
    }

    /// Return a copy of this client that talks to another API host
    ///
    /// Useful for regional instances (e.g. `https://api.eu.opsgenie.com`)
    /// or for pointing at a mock server.
    fn with_endpoint(self, endpoint: Url) -> Self {
        let mut config = self.into_config();
        config.endpoint = endpoint;
        Self::from_config(config)
    }
}
