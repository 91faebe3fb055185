//! MCP server for Redmine.
//!
//! This crate exposes a remote Redmine instance to AI agents over the
//! Model Context Protocol. It is a transparent relay with typed shaping:
//! every tool validates its arguments, maps them onto exactly one REST
//! call through [`redmine_api::RedmineClient`], and reshapes the
//! response into a textual payload. Workflow rules and permissions are
//! enforced entirely by the remote service.
//!
//! # Tools
//!
//! ## Issues
//! - `list-issues` - list with filters (project, status, tracker, assignee, saved query, sort)
//! - `get-issue` - fetch one issue with optional associations
//! - `create-issue` - create an issue
//! - `update-issue` - partial update, optionally appending a note
//!
//! ## Projects
//! - `list-projects` - list accessible projects
//! - `get-project` - fetch one project by id or identifier
//!
//! ## Users
//! - `get-current-user` - the authenticated user with memberships and groups
//! - `list-users` - list users (admin-only on the remote side)
//!
//! ## Time entries
//! - `list-time-entries` - list with project/user/date filters
//! - `create-time-entry` - log time against an issue or project
//!
//! ## Wiki
//! - `get-wiki-page` - fetch a page, optionally at a specific version
//! - `list-wiki-pages` - the project's page index
//!
//! ## Search
//! - `search-redmine` - cross-entity free-text search

pub mod error;
pub mod models;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use server::RedmineMcpServer;
