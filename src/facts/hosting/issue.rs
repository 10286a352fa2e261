use super::lenient;
use serde::{Deserialize, Serialize};

/// Issue or pull request as listed by the issues endpoint; malformed fields read as missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueRecord {
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub number: Option<u64>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub comments: Option<u64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub state: IssueState,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::present")]
    pub pull_request: Option<serde_json::Value>,
}

impl IssueRecord {
    /// The issues endpoint also lists pull requests; those carry a `pull_request` key, whatever its value.
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Issue state: open or closed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}
