//! Time entry tools: list, create.

use redmine_api::types::{NewTimeEntry, NewTimeEntryPayload, TimeEntry, TimeEntryList, TimeEntryWrapper};

use super::{Tools, page};
use crate::error::{Error, Result};
use crate::models::{CreateTimeEntryParams, ListTimeEntriesParams};

impl Tools {
    /// List time entries with optional filters.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range `limit`, or any
    /// API client failure unchanged.
    pub async fn list_time_entries(&self, params: ListTimeEntriesParams) -> Result<TimeEntryList> {
        let (limit, offset) = page(params.limit, params.offset)?;

        let query = [
            ("project_id", params.project_id),
            ("user_id", params.user_id.map(|v| v.to_string())),
            ("from", params.from),
            ("to", params.to),
            ("limit", Some(limit.to_string())),
            ("offset", Some(offset.to_string())),
        ];

        Ok(self.client().get("/time_entries.json", &query).await?)
    }

    /// Log time against an issue or a project.
    ///
    /// The issue/project mutual requirement is enforced by the remote
    /// service; both fields are relayed as given.
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-positive hours, or any API
    /// client failure unchanged.
    pub async fn create_time_entry(&self, params: CreateTimeEntryParams) -> Result<TimeEntry> {
        if params.hours <= 0.0 {
            return Err(Error::InvalidArgument {
                field: "hours",
                value: params.hours.to_string(),
                valid_values: "a positive number",
            });
        }

        let payload = NewTimeEntryPayload {
            time_entry: NewTimeEntry {
                issue_id: params.issue_id,
                project_id: params.project_id,
                hours: params.hours,
                activity_id: params.activity_id,
                comments: params.comments,
                spent_on: params.spent_on,
            },
        };

        let data: TimeEntryWrapper = self.client().post("/time_entries.json", &payload).await?;
        Ok(data.time_entry)
    }
}
