//! MCP server implementation.
//!
//! This module contains the main server setup using rmcp: the tool
//! router declaring all thirteen tools, the `ServerHandler`
//! implementation, and the stdio serve loop.

use std::sync::Arc;

use redmine_api::RedmineClient;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{
    ErrorData as McpError, ServiceExt, handler::server::ServerHandler, tool, tool_handler,
    tool_router, transport::stdio,
};
use tracing::info;

use crate::error::Error;
use crate::models::{
    CreateIssueParams, CreateTimeEntryParams, GetIssueParams, GetProjectParams, GetWikiPageParams,
    ListIssuesParams, ListProjectsParams, ListTimeEntriesParams, ListUsersParams,
    ListWikiPagesParams, SearchParams, UpdateIssueParams,
};
use crate::tools::Tools;

/// The Redmine MCP server.
///
/// Provides MCP protocol handling over stdio transport. Each tool
/// invocation is an independent request/response exchange against the
/// shared, immutable API client.
#[derive(Clone)]
pub struct RedmineMcpServer {
    /// Tool implementations.
    tools: Arc<Tools>,
    /// Tool router for MCP dispatch.
    tool_router: ToolRouter<Self>,
}

/// Map a tool failure onto an MCP error: schema violations become
/// invalid-params, everything else an internal error. Either way the
/// failure stays scoped to this invocation.
fn tool_error(err: &Error) -> McpError {
    match err {
        Error::InvalidArgument { .. } => McpError::invalid_params(err.to_string(), None),
        Error::Api(_) | Error::Json(_) => McpError::internal_error(err.to_string(), None),
    }
}

#[tool_router]
impl RedmineMcpServer {
    /// List issues with optional filters.
    #[tool(
        name = "list-issues",
        description = "List issues from Redmine with optional filters"
    )]
    async fn list_issues(
        &self,
        Parameters(params): Parameters<ListIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.list_issues(params).await {
            Ok(list) => Ok(CallToolResult::success(vec![Content::json(list)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// Fetch one issue with full details.
    #[tool(
        name = "get-issue",
        description = "Get a single Redmine issue by ID with full details"
    )]
    async fn get_issue(
        &self,
        Parameters(params): Parameters<GetIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.get_issue(params).await {
            Ok(issue) => Ok(CallToolResult::success(vec![Content::json(issue)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// Create a new issue.
    #[tool(name = "create-issue", description = "Create a new issue in Redmine")]
    async fn create_issue(
        &self,
        Parameters(params): Parameters<CreateIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.create_issue(params).await {
            Ok(issue) => Ok(CallToolResult::success(vec![Content::json(issue)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// Update an existing issue.
    #[tool(name = "update-issue", description = "Update an existing Redmine issue")]
    async fn update_issue(
        &self,
        Parameters(params): Parameters<UpdateIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.update_issue(params).await {
            Ok(message) => Ok(CallToolResult::success(vec![Content::text(message)])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// List accessible projects.
    #[tool(
        name = "list-projects",
        description = "List all accessible projects in Redmine"
    )]
    async fn list_projects(
        &self,
        Parameters(params): Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.list_projects(params).await {
            Ok(list) => Ok(CallToolResult::success(vec![Content::json(list)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// Fetch one project.
    #[tool(
        name = "get-project",
        description = "Get a single Redmine project by ID or identifier"
    )]
    async fn get_project(
        &self,
        Parameters(params): Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.get_project(params).await {
            Ok(project) => Ok(CallToolResult::success(vec![Content::json(project)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// Fetch the authenticated user.
    #[tool(
        name = "get-current-user",
        description = "Get the currently authenticated Redmine user"
    )]
    async fn get_current_user(&self) -> Result<CallToolResult, McpError> {
        match self.tools.get_current_user().await {
            Ok(user) => Ok(CallToolResult::success(vec![Content::json(user)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// List users.
    #[tool(
        name = "list-users",
        description = "List Redmine users (requires admin privileges)"
    )]
    async fn list_users(
        &self,
        Parameters(params): Parameters<ListUsersParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.list_users(params).await {
            Ok(list) => Ok(CallToolResult::success(vec![Content::json(list)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// List time entries.
    #[tool(
        name = "list-time-entries",
        description = "List time entries from Redmine with optional filters"
    )]
    async fn list_time_entries(
        &self,
        Parameters(params): Parameters<ListTimeEntriesParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.list_time_entries(params).await {
            Ok(list) => Ok(CallToolResult::success(vec![Content::json(list)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// Log time.
    #[tool(name = "create-time-entry", description = "Log time in Redmine")]
    async fn create_time_entry(
        &self,
        Parameters(params): Parameters<CreateTimeEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.create_time_entry(params).await {
            Ok(entry) => Ok(CallToolResult::success(vec![Content::json(entry)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// Fetch a wiki page.
    #[tool(
        name = "get-wiki-page",
        description = "Get a wiki page from a Redmine project"
    )]
    async fn get_wiki_page(
        &self,
        Parameters(params): Parameters<GetWikiPageParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.get_wiki_page(params).await {
            Ok(page) => Ok(CallToolResult::success(vec![Content::json(page)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// List a project's wiki pages.
    #[tool(
        name = "list-wiki-pages",
        description = "List all wiki pages in a Redmine project"
    )]
    async fn list_wiki_pages(
        &self,
        Parameters(params): Parameters<ListWikiPagesParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.list_wiki_pages(params).await {
            Ok(index) => Ok(CallToolResult::success(vec![Content::json(index)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }

    /// Cross-entity search.
    #[tool(
        name = "search-redmine",
        description = "Search across Redmine for issues, projects, wiki pages, and more"
    )]
    async fn search_redmine(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.tools.search(params).await {
            Ok(results) => Ok(CallToolResult::success(vec![Content::json(results)?])),
            Err(e) => Err(tool_error(&e)),
        }
    }
}

impl RedmineMcpServer {
    /// Create a new Redmine MCP server over the given API client.
    #[must_use]
    pub fn new(client: Arc<RedmineClient>) -> Self {
        Self {
            tools: Arc::new(Tools::new(client)),
            tool_router: Self::tool_router(),
        }
    }

    /// Serve MCP over stdio until the peer disconnects or a termination
    /// signal arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or signal handlers
    /// cannot be installed.
    pub async fn run(self) -> anyhow::Result<()> {
        let service = self.serve(stdio()).await?;

        tokio::select! {
            result = service.waiting() => {
                result?;
            }
            result = shutdown_signal() => {
                result?;
                info!("redmine-mcp server shutting down");
            }
        }

        Ok(())
    }
}

/// Resolve when SIGINT or SIGTERM is received.
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = sigterm.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

#[tool_handler]
impl ServerHandler for RedmineMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "redmine-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Redmine MCP server. Exposes issues, projects, users, time entries, \
                 wiki pages and search of a Redmine instance as tools."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redmine_api::RedmineConfig;

    fn test_server() -> RedmineMcpServer {
        let config = RedmineConfig {
            url: "http://127.0.0.1:1".to_string(),
            api_key: Some("test-key".to_string()),
            username: None,
            password: None,
        };
        let client = RedmineClient::new(&config, None).expect("client");
        RedmineMcpServer::new(Arc::new(client))
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "redmine-mcp");
        assert!(!info.server_info.version.is_empty());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_tool_router_has_all_tools() {
        let server = test_server();
        let tools = server.tool_router.list_all();

        let tool_names: Vec<&str> = tools.iter().map(|t| &*t.name).collect();

        assert!(tool_names.contains(&"list-issues"));
        assert!(tool_names.contains(&"get-issue"));
        assert!(tool_names.contains(&"create-issue"));
        assert!(tool_names.contains(&"update-issue"));
        assert!(tool_names.contains(&"list-projects"));
        assert!(tool_names.contains(&"get-project"));
        assert!(tool_names.contains(&"get-current-user"));
        assert!(tool_names.contains(&"list-users"));
        assert!(tool_names.contains(&"list-time-entries"));
        assert!(tool_names.contains(&"create-time-entry"));
        assert!(tool_names.contains(&"get-wiki-page"));
        assert!(tool_names.contains(&"list-wiki-pages"));
        assert!(tool_names.contains(&"search-redmine"));
        assert_eq!(tools.len(), 13);
    }

    #[test]
    fn test_validation_failures_map_to_invalid_params() {
        let err = tool_error(&Error::InvalidArgument {
            field: "limit",
            value: "0".to_string(),
            valid_values: "1-100",
        });
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
