//! Tool parameter models.
//!
//! One struct per tool; the doc comments on fields become the input
//! schema descriptions served to MCP clients. Range constraints that the
//! schema cannot enforce by itself (`limit`, `done_ratio`, `hours`) are
//! checked by the tool implementations before any network call.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the `list-issues` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListIssuesParams {
    /// Project ID or identifier to filter by.
    pub project_id: Option<String>,
    /// Status filter: 'open', 'closed', '*' for all, or a specific status ID.
    pub status_id: Option<String>,
    /// Tracker ID to filter by.
    pub tracker_id: Option<u64>,
    /// Assignee user ID, or 'me' for current user.
    pub assigned_to_id: Option<String>,
    /// Saved query ID to use.
    pub query_id: Option<u64>,
    /// Sort field and direction, e.g. 'updated_on:desc', 'priority:asc'.
    pub sort: Option<String>,
    /// Max results to return (1-100, default 25).
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Parameters for the `get-issue` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetIssueParams {
    /// Issue ID.
    pub issue_id: u64,
    /// Comma-separated list of associations to include: children,
    /// attachments, relations, changesets, journals, watchers,
    /// allowed_statuses.
    pub include: Option<String>,
}

/// Parameters for the `create-issue` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateIssueParams {
    /// Project ID or identifier (required).
    pub project_id: String,
    /// Issue subject/title.
    pub subject: String,
    /// Issue description (supports Textile/Markdown).
    pub description: Option<String>,
    /// Tracker ID.
    pub tracker_id: Option<u64>,
    /// Status ID.
    pub status_id: Option<u64>,
    /// Priority ID.
    pub priority_id: Option<u64>,
    /// User ID to assign to.
    pub assigned_to_id: Option<u64>,
    /// Issue category ID.
    pub category_id: Option<u64>,
    /// Target version ID.
    pub fixed_version_id: Option<u64>,
    /// Parent issue ID.
    pub parent_issue_id: Option<u64>,
    /// Estimated hours.
    pub estimated_hours: Option<f64>,
    /// Start date (YYYY-MM-DD).
    pub start_date: Option<String>,
    /// Due date (YYYY-MM-DD).
    pub due_date: Option<String>,
    /// Whether the issue is private.
    pub is_private: Option<bool>,
}

/// Parameters for the `update-issue` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateIssueParams {
    /// Issue ID to update.
    pub issue_id: u64,
    /// New subject/title.
    pub subject: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status ID.
    pub status_id: Option<u64>,
    /// New priority ID.
    pub priority_id: Option<u64>,
    /// New assignee user ID.
    pub assigned_to_id: Option<u64>,
    /// New tracker ID.
    pub tracker_id: Option<u64>,
    /// New category ID.
    pub category_id: Option<u64>,
    /// New target version ID.
    pub fixed_version_id: Option<u64>,
    /// Completion percentage (0-100).
    pub done_ratio: Option<u32>,
    /// New estimated hours.
    pub estimated_hours: Option<f64>,
    /// Comment/note to add to the issue.
    pub notes: Option<String>,
    /// Whether the note is private.
    pub private_notes: Option<bool>,
}

/// Parameters for the `list-projects` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    /// Comma-separated associations: trackers, issue_categories,
    /// enabled_modules, time_entry_activities.
    pub include: Option<String>,
    /// Max results (1-100, default 25).
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Parameters for the `get-project` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetProjectParams {
    /// Project numeric ID or string identifier.
    pub project_id: String,
    /// Comma-separated associations: trackers, issue_categories,
    /// enabled_modules, time_entry_activities.
    pub include: Option<String>,
}

/// Parameters for the `list-users` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListUsersParams {
    /// Filter by status: 0=anonymous, 1=active, 2=registered, 3=locked.
    pub status: Option<u32>,
    /// Filter by name or login (partial match).
    pub name: Option<String>,
    /// Filter by group ID.
    pub group_id: Option<u64>,
    /// Max results (1-100, default 25).
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Parameters for the `list-time-entries` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListTimeEntriesParams {
    /// Filter by project ID or identifier.
    pub project_id: Option<String>,
    /// Filter by user ID.
    pub user_id: Option<u64>,
    /// Start date filter (YYYY-MM-DD).
    pub from: Option<String>,
    /// End date filter (YYYY-MM-DD).
    pub to: Option<String>,
    /// Max results (1-100, default 25).
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Parameters for the `create-time-entry` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTimeEntryParams {
    /// Issue ID to log time against (either issue_id or project_id
    /// required).
    pub issue_id: Option<u64>,
    /// Project ID to log time against (either issue_id or project_id
    /// required).
    pub project_id: Option<String>,
    /// Number of hours spent.
    pub hours: f64,
    /// Time entry activity ID.
    pub activity_id: Option<u64>,
    /// Description of the work done.
    pub comments: Option<String>,
    /// Date the time was spent (YYYY-MM-DD, defaults to today).
    pub spent_on: Option<String>,
}

/// Parameters for the `get-wiki-page` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWikiPageParams {
    /// Project ID or identifier.
    pub project_id: String,
    /// Wiki page title (use 'Wiki' for the main page).
    pub title: String,
    /// Specific version number to retrieve.
    pub version: Option<u32>,
}

/// Parameters for the `list-wiki-pages` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListWikiPagesParams {
    /// Project ID or identifier.
    pub project_id: String,
}

/// Parameters for the `search-redmine` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Search query string.
    pub query: String,
    /// Limit search to a specific project ID or identifier.
    pub scope: Option<String>,
    /// Search only in titles (default: false).
    pub titles_only: Option<bool>,
    /// Only return open issues (default: false).
    pub open_issues: Option<bool>,
    /// Max results (1-100, default 25).
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}
