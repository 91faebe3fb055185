//! Error types for the Redmine API client.
//!
//! A single enum covers the whole taxonomy; callers distinguish cases by
//! value via [`ApiError::status`] rather than by type. Error messages
//! never contain the API key or basic-auth credentials.

use thiserror::Error;

/// Errors that can occur while talking to a Redmine instance.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client configuration could not be turned into usable request
    /// state (e.g. a credential that is not a valid header value).
    #[error("invalid client configuration: {message}")]
    Config {
        /// Description of what was rejected.
        message: String,
    },

    /// The request exceeded the configured deadline.
    #[error("request to Redmine timed out after {timeout_ms}ms")]
    Timeout {
        /// The configured timeout, in milliseconds.
        timeout_ms: u64,
    },

    /// A transport-level failure: DNS, connection refused, TLS.
    #[error("failed to connect to Redmine: {message}")]
    Transport {
        /// Description of the underlying cause.
        message: String,
    },

    /// The remote service answered with a non-2xx status.
    #[error("Redmine API error: {status}{}", detail_suffix(detail))]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// Remote-supplied error detail, when extractable: the joined
        /// `errors` list of a JSON body, or the raw body text.
        detail: Option<String>,
    },

    /// A 2xx response body that is not valid JSON.
    #[error("invalid response from Redmine: {message}")]
    InvalidResponse {
        /// Description of the parse failure.
        message: String,
    },
}

impl ApiError {
    /// The HTTP-like status code for this error.
    ///
    /// Application errors carry the remote status, timeouts report 408,
    /// and everything that never produced a remote status reports 0.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Timeout { .. } => 408,
            Self::Api { status, .. } => *status,
            Self::Config { .. } | Self::Transport { .. } | Self::InvalidResponse { .. } => 0,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map_or_else(String::new, |d| format!(": {d}"))
}

/// Result type for Redmine API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
