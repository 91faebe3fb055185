//! Issue tools: list, get, create, update.

use redmine_api::types::{
    Issue, IssueList, IssueUpdate, IssueUpdatePayload, IssueWrapper, NewIssue, NewIssuePayload,
};
use serde_json::Value;

use super::{Tools, page};
use crate::error::{Error, Result};
use crate::models::{CreateIssueParams, GetIssueParams, ListIssuesParams, UpdateIssueParams};

impl Tools {
    /// List issues with optional filters.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range `limit`, or any
    /// API client failure unchanged.
    pub async fn list_issues(&self, params: ListIssuesParams) -> Result<IssueList> {
        let (limit, offset) = page(params.limit, params.offset)?;

        let query = [
            ("project_id", params.project_id),
            ("status_id", params.status_id),
            ("tracker_id", params.tracker_id.map(|v| v.to_string())),
            ("assigned_to_id", params.assigned_to_id),
            ("query_id", params.query_id.map(|v| v.to_string())),
            ("sort", params.sort),
            ("limit", Some(limit.to_string())),
            ("offset", Some(offset.to_string())),
        ];

        Ok(self.client().get("/issues.json", &query).await?)
    }

    /// Fetch a single issue, optionally with associations.
    ///
    /// # Errors
    ///
    /// Returns any API client failure unchanged.
    pub async fn get_issue(&self, params: GetIssueParams) -> Result<Issue> {
        let path = format!("/issues/{}.json", params.issue_id);
        let data: IssueWrapper = self
            .client()
            .get(&path, &[("include", params.include)])
            .await?;
        Ok(data.issue)
    }

    /// Create a new issue and return it.
    ///
    /// # Errors
    ///
    /// Returns any API client failure unchanged; field requirements
    /// beyond project and subject are enforced by the remote service.
    pub async fn create_issue(&self, params: CreateIssueParams) -> Result<Issue> {
        let payload = NewIssuePayload {
            issue: NewIssue {
                project_id: params.project_id,
                subject: params.subject,
                description: params.description,
                tracker_id: params.tracker_id,
                status_id: params.status_id,
                priority_id: params.priority_id,
                assigned_to_id: params.assigned_to_id,
                category_id: params.category_id,
                fixed_version_id: params.fixed_version_id,
                parent_issue_id: params.parent_issue_id,
                estimated_hours: params.estimated_hours,
                start_date: params.start_date,
                due_date: params.due_date,
                is_private: params.is_private,
            },
        };

        let data: IssueWrapper = self.client().post("/issues.json", &payload).await?;
        Ok(data.issue)
    }

    /// Update an issue in place.
    ///
    /// The write response body is empty, so this yields a confirmation
    /// message naming the issue id rather than the updated resource.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a `done_ratio` outside 0-100, or
    /// any API client failure unchanged.
    pub async fn update_issue(&self, params: UpdateIssueParams) -> Result<String> {
        if let Some(done_ratio) = params.done_ratio {
            if done_ratio > 100 {
                return Err(Error::InvalidArgument {
                    field: "done_ratio",
                    value: done_ratio.to_string(),
                    valid_values: "0-100",
                });
            }
        }

        let issue_id = params.issue_id;
        let payload = IssueUpdatePayload {
            issue: IssueUpdate {
                subject: params.subject,
                description: params.description,
                status_id: params.status_id,
                priority_id: params.priority_id,
                assigned_to_id: params.assigned_to_id,
                tracker_id: params.tracker_id,
                category_id: params.category_id,
                fixed_version_id: params.fixed_version_id,
                done_ratio: params.done_ratio,
                estimated_hours: params.estimated_hours,
                notes: params.notes,
                private_notes: params.private_notes,
            },
        };

        let path = format!("/issues/{issue_id}.json");
        let _: Value = self.client().put(&path, &payload).await?;
        Ok(format!("Issue #{issue_id} updated successfully."))
    }
}
