//! Project tools: list, get.

use redmine_api::types::{Project, ProjectList, ProjectWrapper};

use super::{Tools, page};
use crate::error::Result;
use crate::models::{GetProjectParams, ListProjectsParams};

impl Tools {
    /// List all accessible projects.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range `limit`, or any
    /// API client failure unchanged.
    pub async fn list_projects(&self, params: ListProjectsParams) -> Result<ProjectList> {
        let (limit, offset) = page(params.limit, params.offset)?;

        let query = [
            ("include", params.include),
            ("limit", Some(limit.to_string())),
            ("offset", Some(offset.to_string())),
        ];

        Ok(self.client().get("/projects.json", &query).await?)
    }

    /// Fetch a single project by numeric id or string identifier.
    ///
    /// # Errors
    ///
    /// Returns any API client failure unchanged.
    pub async fn get_project(&self, params: GetProjectParams) -> Result<Project> {
        let path = format!("/projects/{}.json", params.project_id);
        let data: ProjectWrapper = self
            .client()
            .get(&path, &[("include", params.include)])
            .await?;
        Ok(data.project)
    }
}
