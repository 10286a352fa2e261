use crate::facts::hosting::{IssueRecord, IssueState};
use serde::{Deserialize, Serialize};

/// Compact projection of an issue for the hot discussions section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionSummary {
    pub title: String,
    pub number: u64,
    pub comments: u64,
    pub state: IssueState,
    pub url: String,
    pub created_at: String,
}

impl From<&IssueRecord> for DiscussionSummary {
    fn from(issue: &IssueRecord) -> Self {
        Self {
            title: issue.title.clone().unwrap_or_default(),
            number: issue.number.unwrap_or(0),
            comments: issue.comments.unwrap_or(0),
            state: issue.state,
            url: issue.html_url.clone().unwrap_or_default(),
            created_at: issue.created_at.clone().unwrap_or_default(),
        }
    }
}

/// Summarize up to `limit` issues in the order given, skipping pull requests.
///
/// Pull requests are dropped before the limit is applied.
pub fn summarize_discussions<'a>(issues: impl IntoIterator<Item = &'a IssueRecord>, limit: usize) -> Vec<DiscussionSummary> {
    issues
        .into_iter()
        .filter(|issue| !issue.is_pull_request())
        .take(limit)
        .map(DiscussionSummary::from)
        .collect()
}
