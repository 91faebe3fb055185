//! Cross-entity search.

use redmine_api::types::SearchResultList;

use super::{Tools, page};
use crate::error::Result;
use crate::models::SearchParams;

impl Tools {
    /// Search across issues, projects, wiki pages and more.
    ///
    /// Boolean flags translate to `1`/absent query parameters, the form
    /// the remote service expects.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range `limit`, or any
    /// API client failure unchanged.
    pub async fn search(&self, params: SearchParams) -> Result<SearchResultList> {
        let (limit, offset) = page(params.limit, params.offset)?;

        let path = match &params.scope {
            Some(scope) => format!("/projects/{scope}/search.json"),
            None => "/search.json".to_string(),
        };

        let query = [
            ("q", Some(params.query)),
            ("titles_only", flag(params.titles_only)),
            ("open_issues", flag(params.open_issues)),
            ("limit", Some(limit.to_string())),
            ("offset", Some(offset.to_string())),
        ];

        Ok(self.client().get(&path, &query).await?)
    }
}

/// Map a boolean flag onto its wire form: `1` when set, absent otherwise.
fn flag(value: Option<bool>) -> Option<String> {
    value.filter(|v| *v).map(|_| "1".to_string())
}
