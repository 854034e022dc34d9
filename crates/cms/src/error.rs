/// Errors raised by the CMS client.
///
/// Every variant carries the request URL where one exists so a failed
/// page load can be traced back from the warning it produces.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("CMS base URL is not configured")]
    NotConfigured,

    #[error("invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("CMS returned {status} for {url}: {message}")]
    Api {
        status: u16,
        message: String,
        url: String,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CmsError {
    /// Classify a `reqwest` failure for `url`.
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CmsError::Timeout {
                url: url.to_string(),
            }
        } else {
            CmsError::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            CmsError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for client operations.
pub type Result<T> = std::result::Result<T, CmsError>;

/// A configuration value that is present but unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}
