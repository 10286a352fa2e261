//! Heuristic signals derived from a repository's README and metadata
//!
//! Each extractor is a pure function producing a small fixed-shape scorecard. Keyword checks are
//! case-insensitive substring tests against the whole README, with no regard for word boundaries,
//! so "Reactive" counts as a mention of "react" and the stem "contribut" matches both
//! "Contributing" and "Contributors".
//!
//! - [`ProblemDefinition`]: does the README state the problem it solves?
//! - [`ArchitectureTools`]: which well-known technologies are mentioned?
//! - [`DataFlow`]: does the README talk about APIs, databases, async, pipelines?
//! - [`Documentation`]: installation, usage, contribution, and license coverage
//! - [`DiscussionSummary`]: the most-commented issues, excluding pull requests

mod architecture;
mod data_flow;
mod discussions;
mod documentation;
mod problem_definition;
mod readme;

pub use architecture::{ArchitectureTools, MAX_DETECTED_TECHNOLOGIES, TECH_KEYWORDS};
pub use data_flow::DataFlow;
pub use discussions::{DiscussionSummary, summarize_discussions};
pub use documentation::Documentation;
pub use problem_definition::ProblemDefinition;
pub use readme::Readme;
