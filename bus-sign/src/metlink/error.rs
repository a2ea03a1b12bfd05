//! Metlink client error types.

/// Errors from the Metlink HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum MetlinkError {
    /// The API key cannot be sent as a header value
    #[error("invalid API key format")]
    InvalidApiKey,

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection, DNS or timeout failure
    #[error("network error calling Metlink API: {detail}")]
    Network { detail: String },

    /// API returned a non-success status code
    #[error("HTTP {status} from Metlink API: {body}")]
    UpstreamHttp { status: u16, body: String },

    /// Response body was not JSON
    #[error("JSON parse error: {message}")]
    InvalidJson { message: String },
}

impl MetlinkError {
    pub(crate) fn network(err: &reqwest::Error) -> Self {
        let mut detail = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        MetlinkError::Network { detail }
    }
}
