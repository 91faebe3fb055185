//! User tools: current user, list.

use redmine_api::types::{User, UserList, UserWrapper};

use super::{Tools, page};
use crate::error::Result;
use crate::models::ListUsersParams;

impl Tools {
    /// Fetch the currently authenticated user, always including
    /// membership and group associations.
    ///
    /// # Errors
    ///
    /// Returns any API client failure unchanged.
    pub async fn get_current_user(&self) -> Result<User> {
        let data: UserWrapper = self
            .client()
            .get(
                "/users/current.json",
                &[("include", Some("memberships,groups".to_string()))],
            )
            .await?;
        Ok(data.user)
    }

    /// List users with optional filters.
    ///
    /// The remote service requires administrator privileges for this
    /// endpoint; there is no local pre-check, the remote authorization
    /// failure is relayed as-is.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range `limit`, or any
    /// API client failure unchanged.
    pub async fn list_users(&self, params: ListUsersParams) -> Result<UserList> {
        let (limit, offset) = page(params.limit, params.offset)?;

        let query = [
            ("status", params.status.map(|v| v.to_string())),
            ("name", params.name),
            ("group_id", params.group_id.map(|v| v.to_string())),
            ("limit", Some(limit.to_string())),
            ("offset", Some(offset.to_string())),
        ];

        Ok(self.client().get("/users.json", &query).await?)
    }
}
