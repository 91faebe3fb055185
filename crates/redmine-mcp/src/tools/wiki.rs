//! Wiki tools: get page, list pages.

use redmine_api::types::{WikiIndex, WikiPage, WikiPageWrapper};

use super::Tools;
use crate::error::Result;
use crate::models::{GetWikiPageParams, ListWikiPagesParams};

impl Tools {
    /// Fetch a wiki page, optionally at a specific version.
    ///
    /// The title `Wiki` denotes the project's main page.
    ///
    /// # Errors
    ///
    /// Returns any API client failure unchanged.
    pub async fn get_wiki_page(&self, params: GetWikiPageParams) -> Result<WikiPage> {
        let path = wiki_page_path(&params.project_id, &params.title, params.version);
        let data: WikiPageWrapper = self.client().get(&path, &[]).await?;
        Ok(data.wiki_page)
    }

    /// List all wiki pages of a project in their lightweight index form.
    ///
    /// Not paginated; the index endpoint returns every page.
    ///
    /// # Errors
    ///
    /// Returns any API client failure unchanged.
    pub async fn list_wiki_pages(&self, params: ListWikiPagesParams) -> Result<WikiIndex> {
        let path = format!("/projects/{}/wiki/index.json", params.project_id);
        Ok(self.client().get(&path, &[]).await?)
    }
}

/// Build the wiki page path, percent-encoding the title. A version
/// number selects a specific revision.
fn wiki_page_path(project_id: &str, title: &str, version: Option<u32>) -> String {
    let title = urlencoding::encode(title);
    match version {
        Some(version) => format!("/projects/{project_id}/wiki/{title}/{version}.json"),
        None => format!("/projects/{project_id}/wiki/{title}.json"),
    }
}
