//! Errors raised by the marketplace HTTP client.

#[derive(Debug, thiserror::Error)]
pub enum MarketplaceApiError {
    #[error("invalid marketplace API url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl MarketplaceApiError {
    /// Status code of the upstream answer, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            MarketplaceApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
