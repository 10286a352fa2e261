use crate::Result;
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use ohno::bail;
use std::sync::Arc;
use url::Url;

/// Identifies a repository by owner and name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    owner: Arc<str>,
    repo: Arc<str>,
}

impl RepoSpec {
    #[must_use]
    pub fn new(owner: impl Into<Arc<str>>, repo: impl Into<Arc<str>>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Extract the owner and repository from a repository URL such as `https://github.com/owner/repo/tree/main`
    pub fn parse_url(url: &Url) -> Result<Self> {
        let path_segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();

        if path_segments.len() < 2 {
            bail!("invalid repository URL format: {url}");
        }

        if path_segments[0].is_empty() || path_segments[1].is_empty() {
            bail!("invalid repository URL: empty owner or repo name: {url}");
        }

        Ok(Self::new(path_segments[0], path_segments[1].trim_end_matches(".git")))
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl FromStr for RepoSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        if s.contains("://") {
            let url = Url::parse(s).map_err(|e| format!("invalid repository URL '{s}': {e}"))?;
            return Self::parse_url(&url).map_err(|e| format!("{e}"));
        }

        match s.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self::new(owner, repo.trim_end_matches(".git")))
            }
            _ => Err(format!("invalid repository '{s}', expected 'owner/repo' or a repository URL")),
        }
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
