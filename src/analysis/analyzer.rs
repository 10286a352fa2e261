use super::AnalysisRecord;
use crate::commands::Host;
use crate::facts::hosting::{IssueQuery, IssueRecord, Provider, RepositorySummary};
use crate::facts::RepoSpec;
use crate::signals::{ArchitectureTools, DataFlow, Documentation, ProblemDefinition, Readme, summarize_discussions};
use std::io::Write;

const LOG_TARGET: &str = "  analyzer";

/// Runs the full analysis pipeline for one repository at a time
#[derive(Debug)]
pub struct Analyzer<'a> {
    provider: &'a Provider,
    issue_query: IssueQuery,
    discussion_limit: usize,
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub const fn new(provider: &'a Provider, issue_query: IssueQuery, discussion_limit: usize) -> Self {
        Self {
            provider,
            issue_query,
            discussion_limit,
        }
    }

    /// Analyze a single repository.
    ///
    /// Returns `None` when the repository's metadata cannot be fetched. Every fetch failure is
    /// reported as a one-line diagnostic on the host's output stream.
    pub async fn analyze<H: Host>(&self, host: &mut H, repo: &RepoSpec) -> Option<AnalysisRecord> {
        let _ = writeln!(host.output(), "\nAnalyzing {repo}...");

        let details = self
            .provider
            .get_repo_details(repo)
            .await
            .or_report(host.output(), format_args!("details for '{repo}'"))?;

        let readme = self
            .provider
            .get_readme(repo)
            .await
            .or_report(host.output(), format_args!("README for '{repo}'"))
            .unwrap_or_default();

        let issues = self
            .provider
            .get_repo_issues(repo, &self.issue_query)
            .await
            .or_report(host.output(), format_args!("issues for '{repo}'"))
            .unwrap_or_default();

        log::debug!(
            target: LOG_TARGET,
            "Fetched '{repo}': README of {} bytes, {} issues",
            readme.len(),
            issues.len()
        );

        Some(build_record(repo, &details, &readme, &issues, self.discussion_limit))
    }
}

/// Assemble an analysis record from already-fetched inputs.
///
/// Hot discussions are drawn from the first `discussion_limit` issues only, so pull requests
/// among them reduce the number of discussions rather than pulling in later issues.
#[must_use]
pub fn build_record(
    repo: &RepoSpec,
    details: &RepositorySummary,
    readme: &str,
    issues: &[IssueRecord],
    discussion_limit: usize,
) -> AnalysisRecord {
    let readme = Readme::new(readme);
    let candidates = &issues[..issues.len().min(discussion_limit)];

    AnalysisRecord {
        repository: repo.to_string(),
        stars: details.stars(),
        forks: details.forks(),
        description: details.description().to_string(),
        language: details.language().to_string(),
        created_at: details.created_at().to_string(),
        updated_at: details.updated_at().to_string(),
        url: details.url().to_string(),
        problem_definition: ProblemDefinition::extract(&readme, details),
        architecture_tools: ArchitectureTools::extract(&readme, details),
        data_flow: DataFlow::extract(&readme),
        documentation: Documentation::extract(&readme, details),
        hot_discussions: summarize_discussions(candidates, discussion_limit),
    }
}
