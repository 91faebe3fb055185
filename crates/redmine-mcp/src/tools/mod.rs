//! Tool implementations, one submodule per group.
//!
//! Every tool is a single stateless request/response exchange: validate
//! the arguments, issue exactly one API client call, reshape the result.
//! Failures from the client propagate unchanged; nothing is retried.

mod issues;
mod projects;
mod search;
mod time_entries;
mod users;
mod wiki;

use std::sync::Arc;

use redmine_api::RedmineClient;

use crate::error::{Error, Result};

/// Default page size for listing tools.
pub const DEFAULT_LIMIT: u32 = 25;

/// Tool implementations for the Redmine MCP server.
///
/// Holds the shared, immutable API client; concurrent invocations never
/// observe one another.
pub struct Tools {
    client: Arc<RedmineClient>,
}

impl Tools {
    /// Create a new `Tools` instance over the given client.
    #[must_use]
    pub fn new(client: Arc<RedmineClient>) -> Self {
        Self { client }
    }

    /// The underlying API client.
    pub(crate) fn client(&self) -> &RedmineClient {
        &self.client
    }
}

/// Resolve the pagination window, applying defaults and rejecting a
/// `limit` outside 1-100 before any network call is made.
pub(crate) fn page(limit: Option<u32>, offset: Option<u32>) -> Result<(u32, u32)> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=100).contains(&limit) {
        return Err(Error::InvalidArgument {
            field: "limit",
            value: limit.to_string(),
            valid_values: "1-100",
        });
    }
    Ok((limit, offset.unwrap_or(0)))
}
