//! HTTP client for the Redmine REST API.
//!
//! This crate is the sole path to a remote Redmine instance. It owns
//! connection configuration (base URL, authentication, timeout), issues
//! GET/POST/PUT/DELETE requests, performs JSON (de)serialization, and
//! normalizes transport and application failures into a single
//! [`ApiError`] type.
//!
//! # Authentication
//!
//! Redmine supports two schemes, resolved once at construction time:
//!
//! - `X-Redmine-API-Key: <key>` when an API key is configured
//! - `Authorization: Basic base64(user:pass)` otherwise
//!
//! When both are configured the API key wins.
//!
//! # Example
//!
//! ```no_run
//! use redmine_api::{RedmineClient, RedmineConfig, types::IssueList};
//!
//! # async fn example() -> redmine_api::Result<()> {
//! let config = RedmineConfig::from_env().expect("configuration");
//! let client = RedmineClient::new(&config, None)?;
//! let issues: IssueList = client
//!     .get("/issues.json", &[("limit", Some("25".to_string()))])
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::RedmineClient;
pub use config::{ConfigError, RedmineConfig};
pub use error::{ApiError, Result};
