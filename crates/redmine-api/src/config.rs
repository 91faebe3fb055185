//! Connection configuration for a Redmine instance.
//!
//! Configuration is environment-based and validated once at process
//! start; a missing required value is startup-fatal, never a per-call
//! error.

use thiserror::Error;

/// Errors raised while resolving configuration. All of these are fatal
/// at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL is missing.
    #[error(
        "REDMINE_URL environment variable is required. \
         Set it to your Redmine instance URL (e.g. https://redmine.example.com)"
    )]
    MissingUrl,

    /// Neither an API key nor a username was provided.
    #[error(
        "Authentication is required. Set either:\n\
         \x20 - REDMINE_API_KEY for API key authentication, or\n\
         \x20 - REDMINE_USERNAME and REDMINE_PASSWORD for basic authentication"
    )]
    MissingAuth,

    /// A username was provided without a password.
    #[error("REDMINE_PASSWORD is required when using REDMINE_USERNAME for basic authentication")]
    MissingPassword,
}

/// Connection settings for a Redmine instance.
///
/// Exactly one authentication mode is usable at a time; the client gives
/// the API key precedence when both are present.
#[derive(Debug, Clone)]
pub struct RedmineConfig {
    /// Base URL of the instance, normalized without a trailing slash.
    pub url: String,

    /// API key for `X-Redmine-API-Key` authentication.
    pub api_key: Option<String>,

    /// Username for HTTP Basic authentication.
    pub username: Option<String>,

    /// Password for HTTP Basic authentication.
    pub password: Option<String>,
}

impl RedmineConfig {
    /// Load configuration from `REDMINE_URL`, `REDMINE_API_KEY`,
    /// `REDMINE_USERNAME` and `REDMINE_PASSWORD`.
    ///
    /// Empty environment values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the URL is missing, no authentication
    /// is configured, or a username is set without a password.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            env_var("REDMINE_URL"),
            env_var("REDMINE_API_KEY"),
            env_var("REDMINE_USERNAME"),
            env_var("REDMINE_PASSWORD"),
        )
    }

    /// Validate raw values into a usable configuration.
    fn resolve(
        url: Option<String>,
        api_key: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, ConfigError> {
        let url = url.ok_or(ConfigError::MissingUrl)?;
        let url = url.trim_end_matches('/').to_string();

        if api_key.is_none() && username.is_none() {
            return Err(ConfigError::MissingAuth);
        }

        if username.is_some() && password.is_none() {
            return Err(ConfigError::MissingPassword);
        }

        Ok(Self {
            url,
            api_key,
            username,
            password,
        })
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
