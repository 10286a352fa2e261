use crate::signals::{ArchitectureTools, DataFlow, DiscussionSummary, Documentation, ProblemDefinition};
use serde::{Deserialize, Serialize};

/// The complete analysis of a single repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// `owner/name`
    pub repository: String,
    pub stars: u64,
    pub forks: u64,
    pub description: String,
    pub language: String,
    pub created_at: String,
    pub updated_at: String,
    pub url: String,
    pub problem_definition: ProblemDefinition,
    pub architecture_tools: ArchitectureTools,
    pub data_flow: DataFlow,
    pub documentation: Documentation,
    pub hot_discussions: Vec<DiscussionSummary>,
}
