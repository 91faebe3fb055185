//! Wire types for the Redmine REST API.
//!
//! These are transient DTOs mirroring the remote service's JSON: built
//! from a parsed response at call time and discarded once the caller is
//! done. Nothing here is cached or mutated locally. Dates and timestamps
//! are relayed as the strings Redmine sends (`YYYY-MM-DD`, ISO 8601).

use serde::{Deserialize, Serialize};

/// A minimal `(id, name)` pair, used wherever Redmine embeds a related
/// entity by reference rather than by full object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdName {
    /// Numeric id of the referenced entity.
    pub id: u64,
    /// Display name of the referenced entity.
    pub name: String,
}

/// A custom field attached to an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomField {
    /// Custom field definition id.
    pub id: u64,
    /// Custom field name.
    pub name: String,
    /// Scalar or multi-valued field content.
    pub value: CustomFieldValue,
}

/// Custom field content: a scalar string or a list of strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomFieldValue {
    /// A single scalar value.
    Single(String),
    /// A multi-valued field.
    Multiple(Vec<String>),
}

// --- Issues ---

/// A Redmine issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue id.
    pub id: u64,
    /// Owning project.
    pub project: IdName,
    /// Tracker (bug, feature, ...).
    pub tracker: IdName,
    /// Workflow status.
    pub status: IdName,
    /// Priority.
    pub priority: IdName,
    /// Author of the issue.
    pub author: IdName,
    /// Current assignee, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<IdName>,
    /// Issue category, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<IdName>,
    /// Target version, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_version: Option<IdName>,
    /// Subject line.
    pub subject: String,
    /// Long description (Textile/Markdown).
    #[serde(default)]
    pub description: String,
    /// Start date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Due date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Completion ratio, 0-100.
    #[serde(default)]
    pub done_ratio: u32,
    /// Whether the issue is private.
    #[serde(default)]
    pub is_private: bool,
    /// Estimated hours, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    /// Spent hours, if the instance reports them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_hours: Option<f64>,
    /// Creation timestamp.
    pub created_on: String,
    /// Last update timestamp.
    pub updated_on: String,
    /// Close timestamp, if closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_on: Option<String>,
    /// Journal entries, present when requested via `include=journals`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journals: Option<Vec<Journal>>,
    /// Custom fields, when the instance defines any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,
}

/// A journal entry: a note and/or a set of recorded field changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    /// Journal entry id.
    pub id: u64,
    /// User who made the change.
    pub user: IdName,
    /// Note text, empty for pure field changes.
    #[serde(default)]
    pub notes: String,
    /// When the change was made.
    pub created_on: String,
    /// Individual field changes.
    #[serde(default)]
    pub details: Vec<JournalDetail>,
}

/// A single recorded field change within a journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalDetail {
    /// Kind of property that changed (`attr`, `cf`, ...).
    pub property: String,
    /// Name of the changed field.
    pub name: String,
    /// Previous value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    /// New value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

// --- Projects ---

/// A Redmine project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL slug identifier.
    pub identifier: String,
    /// Project description.
    #[serde(default)]
    pub description: String,
    /// Status code (1 = active, 5 = closed, 9 = archived).
    pub status: u32,
    /// Whether the project is public.
    #[serde(default)]
    pub is_public: bool,
    /// Homepage URL, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Creation timestamp.
    pub created_on: String,
    /// Last update timestamp.
    pub updated_on: String,
    /// Parent project, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<IdName>,
    /// Enabled trackers, present when requested via `include=trackers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trackers: Option<Vec<IdName>>,
    /// Issue categories, present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_categories: Option<Vec<IdName>>,
    /// Enabled modules, present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_modules: Option<Vec<IdName>>,
    /// Custom fields, when the instance defines any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,
}

// --- Users ---

/// A Redmine user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User id.
    pub id: u64,
    /// Login name.
    pub login: String,
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Email address; Redmine omits it for accounts the caller may not
    /// inspect.
    #[serde(default)]
    pub mail: String,
    /// Account creation timestamp.
    pub created_on: String,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
    /// Last login timestamp, if the user ever logged in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_on: Option<String>,
    /// The user's API key; only returned for the current user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Status code (0 = anonymous, 1 = active, 2 = registered, 3 = locked).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    /// Custom fields, when the instance defines any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,
}

// --- Time entries ---

/// A logged unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Time entry id.
    pub id: u64,
    /// Project the time was logged against.
    pub project: IdName,
    /// Issue the time was logged against, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<IdName>,
    /// User who logged the time.
    pub user: IdName,
    /// Activity (development, review, ...).
    pub activity: IdName,
    /// Hours spent.
    pub hours: f64,
    /// Free-text description of the work.
    #[serde(default)]
    pub comments: String,
    /// Date the time was spent (`YYYY-MM-DD`).
    pub spent_on: String,
    /// Creation timestamp.
    pub created_on: String,
    /// Last update timestamp.
    pub updated_on: String,
    /// Custom fields, when the instance defines any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,
}

// --- Wiki ---

/// A wiki page with its content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiPage {
    /// Page title.
    pub title: String,
    /// Page body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Version number of this revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Author of this revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<IdName>,
    /// Revision comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
}

/// The lightweight listing variant of a wiki page: no body text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiPageIndex {
    /// Page title.
    pub title: String,
    /// Current version number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
}

// --- Search ---

/// A single cross-entity search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Id of the matched entity.
    pub id: u64,
    /// Title of the matched entity.
    pub title: String,
    /// Result type tag (`issue`, `wiki-page`, ...).
    #[serde(rename = "type")]
    pub result_type: String,
    /// URL of the matched entity.
    pub url: String,
    /// Description snippet.
    #[serde(default)]
    pub description: String,
    /// Timestamp associated with the hit.
    pub datetime: String,
}

// --- List envelopes ---

/// Paginated issue listing as Redmine returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueList {
    /// The page of issues.
    pub issues: Vec<Issue>,
    /// Total matching issues across all pages.
    pub total_count: u64,
    /// Offset of this page.
    pub offset: u64,
    /// Page size.
    pub limit: u64,
}

/// Paginated project listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectList {
    /// The page of projects.
    pub projects: Vec<Project>,
    /// Total matching projects across all pages.
    pub total_count: u64,
    /// Offset of this page.
    pub offset: u64,
    /// Page size.
    pub limit: u64,
}

/// Paginated user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    /// The page of users.
    pub users: Vec<User>,
    /// Total matching users across all pages.
    pub total_count: u64,
    /// Offset of this page.
    pub offset: u64,
    /// Page size.
    pub limit: u64,
}

/// Paginated time entry listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryList {
    /// The page of time entries.
    pub time_entries: Vec<TimeEntry>,
    /// Total matching entries across all pages.
    pub total_count: u64,
    /// Offset of this page.
    pub offset: u64,
    /// Page size.
    pub limit: u64,
}

/// Paginated search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultList {
    /// The page of results.
    pub results: Vec<SearchResult>,
    /// Total matching results across all pages.
    pub total_count: u64,
    /// Offset of this page.
    pub offset: u64,
    /// Page size.
    pub limit: u64,
}

/// The wiki page index of a project. Not paginated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiIndex {
    /// All pages of the project's wiki, lightweight form.
    pub wiki_pages: Vec<WikiPageIndex>,
}

// --- Single-resource wrappers ---

/// Response wrapper for a single issue (`{"issue": {...}}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueWrapper {
    /// The issue.
    pub issue: Issue,
}

/// Response wrapper for a single project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectWrapper {
    /// The project.
    pub project: Project,
}

/// Response wrapper for a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWrapper {
    /// The user.
    pub user: User,
}

/// Response wrapper for a single time entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryWrapper {
    /// The time entry.
    pub time_entry: TimeEntry,
}

/// Response wrapper for a single wiki page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiPageWrapper {
    /// The wiki page.
    pub wiki_page: WikiPage,
}

// --- Outbound payloads ---
//
// Unset optional fields are omitted from the serialized payload, never
// sent as null; Redmine treats an explicit null as a value.

/// Fields for creating an issue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewIssue {
    /// Project id or identifier. Required.
    pub project_id: String,
    /// Subject line. Required.
    pub subject: String,
    /// Long description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tracker id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_id: Option<u64>,
    /// Status id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u64>,
    /// Priority id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<u64>,
    /// Assignee user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<u64>,
    /// Category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    /// Target version id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_version_id: Option<u64>,
    /// Parent issue id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_issue_id: Option<u64>,
    /// Estimated hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    /// Start date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Due date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Whether the issue is private.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

/// Request body for `POST /issues.json`.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssuePayload {
    /// The issue to create.
    pub issue: NewIssue,
}

/// Partial field set for updating an issue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueUpdate {
    /// New subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u64>,
    /// New priority id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<u64>,
    /// New assignee user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<u64>,
    /// New tracker id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_id: Option<u64>,
    /// New category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    /// New target version id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_version_id: Option<u64>,
    /// New completion ratio, 0-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_ratio: Option<u32>,
    /// New estimated hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    /// Note to append to the issue journal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether the appended note is private.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_notes: Option<bool>,
}

/// Request body for `PUT /issues/{id}.json`.
#[derive(Debug, Clone, Serialize)]
pub struct IssueUpdatePayload {
    /// The fields to change.
    pub issue: IssueUpdate,
}

/// Fields for logging time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTimeEntry {
    /// Issue to log against. The remote service requires this or
    /// `project_id`; both are relayed as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<u64>,
    /// Project to log against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Hours spent. Must be positive.
    pub hours: f64,
    /// Activity id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<u64>,
    /// Description of the work done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Date the time was spent; the remote service defaults to today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_on: Option<String>,
}

/// Request body for `POST /time_entries.json`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTimeEntryPayload {
    /// The time entry to create.
    pub time_entry: NewTimeEntry,
}
