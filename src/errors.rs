use thiserror::Error;

/// Result type alias for OpsGenie operations
pub type Result<T> = std::result::Result<T, OpsGenieError>;

/// Errors that can occur when configuring clients or calling the OpsGenie API
#[derive(Debug, Error)]
pub enum OpsGenieError {
    /// A caller-supplied value was rejected (e.g. an empty API key)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was attempted before the client was configured
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// Proxy fields cannot form a connection string
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    /// A required environment variable is not set
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    /// Endpoint URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failed to build HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest_middleware::Error),

    /// Failed to decode a response body
    #[error("Failed to decode response: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// OpsGenie API returned an error response
    #[error("OpsGenie API error: HTTP {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from OpsGenie
        message: String,
    },
}

impl OpsGenieError {
    /// Check if the error is retryable
    ///
    /// Returns `true` for:
    /// - Network/connection errors
    /// - Timeout errors
    /// - Server errors (5xx status codes)
    ///
    /// Configuration errors are caller misuse and never retryable.
    /// The crate itself does not retry; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(source) => {
                if let reqwest_middleware::Error::Reqwest(err) = source {
                    return err.is_connect() || err.is_timeout();
                }
                false
            }
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
