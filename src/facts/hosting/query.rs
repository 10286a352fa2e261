//! Search query and request parameter construction for the hosting API.

use crate::config::TimeWindow;
use crate::facts::RepoSpec;
use chrono::{Days, NaiveDate};

/// Minimum star count for a repository to show up in the trending search
const MIN_STARS: u32 = 100;

/// Parameters of a trending-repository search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingQuery {
    pub window: TimeWindow,
    pub language: String,
    pub limit: u8,
}

impl TrendingQuery {
    #[must_use]
    pub fn new(window: TimeWindow, language: impl Into<String>, limit: u8) -> Self {
        Self {
            window,
            language: language.into(),
            limit,
        }
    }

    /// Lower bound on the creation date, `today` minus the window length
    #[must_use]
    pub fn created_since(&self, today: NaiveDate) -> Option<NaiveDate> {
        let days = u64::try_from(self.window.days()?).ok()?;
        today.checked_sub_days(Days::new(days))
    }

    /// The free-text search expression, e.g. `created:>=2024-01-08 stars:>100 sort:stars language:rust`
    #[must_use]
    pub fn search_terms(&self, today: NaiveDate) -> String {
        let mut terms = Vec::with_capacity(4);

        if let Some(since) = self.created_since(today) {
            terms.push(format!("created:>={}", since.format("%Y-%m-%d")));
        }

        terms.push(format!("stars:>{MIN_STARS}"));
        terms.push("sort:stars".to_string());

        if !self.language.is_empty() {
            terms.push(format!("language:{}", self.language));
        }

        terms.join(" ")
    }

    /// Query-string parameters for the search endpoint
    #[must_use]
    pub fn params(&self, today: NaiveDate) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.search_terms(today)),
            ("sort", "stars".to_string()),
            ("order", "desc".to_string()),
            ("per_page", self.limit.to_string()),
        ]
    }
}

/// Which issues to list; open and closed issues are both candidates for hot discussions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum IssueFilter {
    #[default]
    All,
}

/// Parameters of an issue listing, most-commented first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueQuery {
    pub state: IssueFilter,
    pub per_page: u8,
}

impl IssueQuery {
    #[must_use]
    pub const fn new(state: IssueFilter, per_page: u8) -> Self {
        Self { state, per_page }
    }

    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("state", self.state.to_string()),
            ("per_page", self.per_page.to_string()),
            ("sort", "comments".to_string()),
            ("direction", "desc".to_string()),
        ]
    }
}

pub const SEARCH_PATH: &str = "search/repositories";

#[must_use]
pub fn repo_path(repo: &RepoSpec) -> String {
    format!("repos/{}/{}", repo.owner(), repo.repo())
}

#[must_use]
pub fn issues_path(repo: &RepoSpec) -> String {
    format!("repos/{}/{}/issues", repo.owner(), repo.repo())
}

#[must_use]
pub fn readme_path(repo: &RepoSpec) -> String {
    format!("repos/{}/{}/readme", repo.owner(), repo.repo())
}
