use super::lenient;
use crate::facts::RepoSpec;
use serde::Deserialize;

/// Language reported when the hosting service does not know a repository's primary language
pub const UNKNOWN_LANGUAGE: &str = "N/A";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Owner {
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub login: Option<String>,
}

/// Repository metadata, as returned both by the search endpoint and the repository endpoint.
///
/// Every field is optional on the wire, and a field of the wrong type reads as missing; the
/// accessors substitute the defaults used throughout the analysis (empty string, zero, or `N/A`
/// for the language). Any non-null `license` value counts as a license.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositorySummary {
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub owner: Option<Owner>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub stargazers_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub forks_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub html_url: Option<String>,
    #[serde(default)]
    pub license: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub open_issues_count: Option<u64>,
}

impl RepositorySummary {
    #[must_use]
    pub fn owner_login(&self) -> &str {
        self.owner.as_ref().and_then(|o| o.login.as_deref()).unwrap_or_default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }

    #[must_use]
    pub fn forks(&self) -> u64 {
        self.forks_count.unwrap_or(0)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE)
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        self.created_at.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn updated_at(&self) -> &str {
        self.updated_at.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.html_url.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn has_license(&self) -> bool {
        self.license.is_some()
    }

    #[must_use]
    pub fn open_issues(&self) -> u64 {
        self.open_issues_count.unwrap_or(0)
    }

    /// The owner/name pair identifying this repository, if both are known
    #[must_use]
    pub fn repo_spec(&self) -> Option<RepoSpec> {
        let owner = self.owner_login();
        let name = self.name();
        (!owner.is_empty() && !name.is_empty()).then(|| RepoSpec::new(owner, name))
    }
}

/// Body of a repository search response; items that are not objects are dropped
#[derive(Debug, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default, deserialize_with = "lenient::skip_invalid")]
    pub items: Vec<RepositorySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_repository() {
        let json = r#"{
            "name": "widget",
            "owner": { "login": "acme" },
            "stargazers_count": 1500,
            "forks_count": 200,
            "description": "A tool",
            "language": "Python",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z",
            "html_url": "https://github.com/acme/widget",
            "license": { "key": "mit", "name": "MIT License", "spdx_id": "MIT" },
            "open_issues_count": 3
        }"#;

        let repo: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.owner_login(), "acme");
        assert_eq!(repo.name(), "widget");
        assert_eq!(repo.stars(), 1500);
        assert_eq!(repo.forks(), 200);
        assert_eq!(repo.description(), "A tool");
        assert_eq!(repo.language(), "Python");
        assert_eq!(repo.url(), "https://github.com/acme/widget");
        assert!(repo.has_license());
        assert_eq!(repo.open_issues(), 3);
        assert_eq!(repo.repo_spec(), Some(RepoSpec::new("acme", "widget")));
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let json = r#"{ "description": null, "language": null, "license": null }"#;

        let repo: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.stars(), 0);
        assert_eq!(repo.forks(), 0);
        assert_eq!(repo.description(), "");
        assert_eq!(repo.language(), UNKNOWN_LANGUAGE);
        assert_eq!(repo.created_at(), "");
        assert_eq!(repo.url(), "");
        assert!(!repo.has_license());
        assert_eq!(repo.open_issues(), 0);
        assert!(repo.repo_spec().is_none());
    }

    #[test]
    fn test_malformed_fields_read_as_missing() {
        let json = r#"{
            "name": "widget",
            "owner": "acme",
            "stargazers_count": "lots",
            "forks_count": -1,
            "description": ["not", "text"],
            "license": "MIT",
            "open_issues_count": 4
        }"#;

        let repo: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name(), "widget");
        assert_eq!(repo.owner_login(), "");
        assert_eq!(repo.stars(), 0);
        assert_eq!(repo.forks(), 0);
        assert_eq!(repo.description(), "");
        assert!(repo.has_license(), "a non-object license still counts");
        assert_eq!(repo.open_issues(), 4);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{ "name": "x", "topics": ["a"], "visibility": "public" }"#;
        let repo: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name(), "x");
    }

    #[test]
    fn test_search_results_without_items() {
        let results: SearchResults = serde_json::from_str(r#"{ "total_count": 0 }"#).unwrap();
        assert!(results.items.is_empty());
    }

    #[test]
    fn test_search_results_with_items() {
        let json = r#"{ "total_count": 2, "items": [
            { "name": "a", "owner": { "login": "o" } },
            { "name": "b", "owner": { "login": "o" } }
        ] }"#;

        let results: SearchResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.items.len(), 2);
        assert_eq!(results.items[1].name(), "b");
    }

    #[test]
    fn test_search_results_keep_items_around_a_malformed_one() {
        let json = r#"{ "items": [
            { "name": "a", "owner": { "login": "o" }, "stargazers_count": "many" },
            42,
            { "name": "c", "owner": { "login": "o" }, "license": 7 }
        ] }"#;

        let results: SearchResults = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = results.items.iter().map(RepositorySummary::name).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(results.items[0].stars(), 0);
        assert!(results.items[1].has_license());
    }
}
