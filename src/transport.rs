use reqwest::{Client, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::time::Duration;

use crate::errors::{OpsGenieError, Result};

/// HTTP transport settings shared by derived clients
///
/// Unset values fall back to reqwest's defaults.
///
/// # Example
///
/// ```rust
/// use opsgenie_client::HttpTransportSettings;
/// use std::time::Duration;
///
/// let settings = HttpTransportSettings::new()
///     .with_connect_timeout(Duration::from_secs(5))
///     .with_request_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpTransportSettings {
    /// Time allowed to establish a connection
    pub connect_timeout: Option<Duration>,
    /// Total time allowed for one request
    pub request_timeout: Option<Duration>,
}

impl HttpTransportSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

/// Build an HTTP client routed through `proxy`, or connecting directly if it is empty
///
/// A new client is built per call; nothing is pooled across requests and
/// no retry middleware is installed.
pub(crate) fn build_http_client(
    proxy: &str,
    settings: Option<&HttpTransportSettings>,
) -> Result<ClientWithMiddleware> {
    let mut builder = Client::builder();

    if let Some(settings) = settings {
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
    }

    // An empty proxy string means a direct connection, not the system proxy
    if proxy.is_empty() {
        builder = builder.no_proxy();
    } else {
        let proxy = Proxy::all(proxy).map_err(OpsGenieError::BuildHttpClient)?;
        builder = builder.proxy(proxy);
    }

    let client = builder.build().map_err(OpsGenieError::BuildHttpClient)?;

    Ok(ClientBuilder::new(client).build())
}
