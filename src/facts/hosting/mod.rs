mod client;
mod issue;
mod lenient;
mod provider;
mod query;
mod repository;

pub use client::{Client, HostingApiResult};
pub use issue::{IssueRecord, IssueState};
pub use provider::{Provider, decode_readme};
pub use query::{IssueFilter, IssueQuery, TrendingQuery};
pub use repository::{Owner, RepositorySummary, SearchResults};
