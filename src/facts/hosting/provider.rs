use super::client::{Client, HostingApiResult};
use super::issue::IssueRecord;
use super::lenient;
use super::query::{self, IssueQuery, TrendingQuery};
use super::repository::{RepositorySummary, SearchResults};
use crate::Result;
use crate::facts::{ProviderResult, RepoSpec};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use core::time::Duration;
use ohno::{EnrichableExt, IntoAppError, app_err};
use serde::Deserialize;
use std::sync::Arc;

const LOG_TARGET: &str = "   hosting";

/// Body of the README endpoint; only the fields we need
#[derive(Debug, Deserialize)]
struct ReadmeContent {
    content: Option<String>,
    encoding: Option<String>,
}

/// Classify a hosting API result, attaching `what` to the reason for anything but success
fn into_provider_result<T>(result: HostingApiResult<T>, what: impl FnOnce() -> String) -> ProviderResult<T> {
    match result {
        HostingApiResult::Success(data) => ProviderResult::Found(data),
        HostingApiResult::NotFound => ProviderResult::NotFound(format!("{} not found", what()).into()),
        HostingApiResult::Failed(e) => ProviderResult::Error(Arc::new(e.enrich_with(what))),
    }
}

/// Fetches repository facts from the hosting API, one request at a time
#[derive(Debug, Clone)]
pub struct Provider {
    client: Client,
}

impl Provider {
    pub fn new(token: Option<&str>, base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::new(token, base_url, timeout)?,
        })
    }

    /// Search for recently created, highly starred repositories
    pub async fn get_trending_repos(&self, query: &TrendingQuery, today: NaiveDate) -> ProviderResult<Vec<RepositorySummary>> {
        log::info!(target: LOG_TARGET, "Searching for trending repositories: {}", query.search_terms(today));

        let result = self.client.get_json::<SearchResults>(query::SEARCH_PATH, &query.params(today)).await;
        match into_provider_result(result, || "trending repositories".to_string()) {
            ProviderResult::Found(results) => {
                log::debug!(target: LOG_TARGET, "Search returned {} repositories", results.items.len());
                ProviderResult::Found(results.items)
            }
            ProviderResult::NotFound(reason) => ProviderResult::NotFound(reason),
            ProviderResult::Error(e) => ProviderResult::Error(e),
        }
    }

    /// Fetch a repository's metadata.
    ///
    /// An empty JSON object counts as missing data rather than a repository with default fields.
    pub async fn get_repo_details(&self, repo: &RepoSpec) -> ProviderResult<RepositorySummary> {
        log::info!(target: LOG_TARGET, "Querying GitHub for repository details on '{repo}'");

        let result = self.client.get_json::<serde_json::Value>(&query::repo_path(repo), &[]).await;
        let value = match into_provider_result(result, || format!("repository '{repo}'")) {
            ProviderResult::Found(value) => value,
            ProviderResult::NotFound(reason) => return ProviderResult::NotFound(reason),
            ProviderResult::Error(e) => return ProviderResult::Error(e),
        };

        if value.as_object().is_none_or(serde_json::Map::is_empty) {
            return ProviderResult::NotFound(format!("no metadata returned for repository '{repo}'").into());
        }

        match serde_json::from_value::<RepositorySummary>(value) {
            Ok(details) => ProviderResult::Found(details),
            Err(e) => ProviderResult::Error(Arc::new(
                app_err!("{e}").enrich_with(|| format!("decoding metadata for repository '{repo}'")),
            )),
        }
    }

    /// List a repository's issues, most-commented first
    pub async fn get_repo_issues(&self, repo: &RepoSpec, query: &IssueQuery) -> ProviderResult<Vec<IssueRecord>> {
        log::info!(target: LOG_TARGET, "Querying GitHub for issues on '{repo}'");

        let result = self.client.get_json::<serde_json::Value>(&query::issues_path(repo), &query.params()).await;
        match into_provider_result(result, || format!("issues for repository '{repo}'")) {
            ProviderResult::Found(value) => ProviderResult::Found(lenient::decode_each(value)),
            ProviderResult::NotFound(reason) => ProviderResult::NotFound(reason),
            ProviderResult::Error(e) => ProviderResult::Error(e),
        }
    }

    /// Fetch and decode a repository's README
    pub async fn get_readme(&self, repo: &RepoSpec) -> ProviderResult<String> {
        log::info!(target: LOG_TARGET, "Querying GitHub for the README of '{repo}'");

        let result = self.client.get_json::<ReadmeContent>(&query::readme_path(repo), &[]).await;
        let readme = match into_provider_result(result, || format!("README for repository '{repo}'")) {
            ProviderResult::Found(readme) => readme,
            ProviderResult::NotFound(reason) => return ProviderResult::NotFound(reason),
            ProviderResult::Error(e) => return ProviderResult::Error(e),
        };

        if let Some(encoding) = readme.encoding.as_deref()
            && encoding != "base64"
        {
            log::debug!(target: LOG_TARGET, "README for '{repo}' uses unexpected encoding '{encoding}'");
        }

        let Some(content) = readme.content else {
            return ProviderResult::Error(Arc::new(app_err!("README response for repository '{repo}' has no content")));
        };

        match decode_readme(&content) {
            Ok(text) => ProviderResult::Found(text),
            Err(e) => ProviderResult::Error(Arc::new(e.enrich_with(|| format!("decoding README for repository '{repo}'")))),
        }
    }
}

/// Decode base64 README content; GitHub wraps the encoded text across lines.
pub fn decode_readme(encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact).into_app_err("README content is not valid base64")?;
    String::from_utf8(bytes).into_app_err("README content is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_readme() {
        assert_eq!(decode_readme("SGVsbG8sIHdvcmxkIQ==").unwrap(), "Hello, world!");
    }

    #[test]
    fn test_decode_readme_with_line_breaks() {
        assert_eq!(decode_readme("SGVsbG8s\nIHdvcmxk\nIQ==\n").unwrap(), "Hello, world!");
    }

    #[test]
    fn test_decode_readme_preserves_non_ascii() {
        // "Grüße" in UTF-8
        assert_eq!(decode_readme("R3LDvMOfZQ==").unwrap(), "Grüße");
    }

    #[test]
    fn test_decode_readme_invalid_base64() {
        let _ = decode_readme("not base64 at all!").unwrap_err();
    }

    #[test]
    fn test_decode_readme_invalid_utf8() {
        // 0xFF 0xFE
        let _ = decode_readme("//4=").unwrap_err();
    }

    #[test]
    fn test_into_provider_result_not_found_mentions_subject() {
        let result: ProviderResult<u32> = into_provider_result(HostingApiResult::NotFound, || "README for repository 'a/b'".to_string());
        match result {
            ProviderResult::NotFound(reason) => assert_eq!(&*reason, "README for repository 'a/b' not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_into_provider_result_failed_keeps_context() {
        let result: ProviderResult<u32> = into_provider_result(HostingApiResult::Failed(app_err!("HTTP 500")), || "issues".to_string());
        match result {
            ProviderResult::Error(e) => {
                let text = format!("{e:#}");
                assert!(text.contains("HTTP 500"));
                assert!(text.contains("issues"));
            }
            other => panic!("expected Error, got {other:?}"),
        }
    }
}
