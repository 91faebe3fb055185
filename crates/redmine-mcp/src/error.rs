//! Error types for the Redmine MCP server.

use redmine_api::ApiError;
use thiserror::Error;

/// Errors that can occur in a tool invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// A tool argument violated its declared constraints. Raised before
    /// any network call; no side effect has occurred.
    #[error("Invalid {field}: '{value}'. Valid values: {valid_values}")]
    InvalidArgument {
        /// The field name that had an invalid value.
        field: &'static str,
        /// The invalid value that was provided.
        value: String,
        /// Description of valid values.
        valid_values: &'static str,
    },

    /// A failure from the Redmine API client, propagated unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// JSON serialization error while shaping a response.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Redmine MCP operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::InvalidArgument {
            field: "limit",
            value: "101".to_string(),
            valid_values: "1-100",
        };
        assert_eq!(err.to_string(), "Invalid limit: '101'. Valid values: 1-100");
    }

    #[test]
    fn test_api_error_passes_through_unchanged() {
        let err = Error::Api(ApiError::Api {
            status: 404,
            detail: Some("Issue not found".to_string()),
        });
        assert_eq!(err.to_string(), "Redmine API error: 404: Issue not found");
    }
}
