use super::Readme;
use crate::facts::hosting::RepositorySummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[expect(clippy::struct_excessive_bools, reason = "each flag is an independent signal")]
pub struct Documentation {
    pub has_readme: bool,
    pub readme_length: usize,
    pub has_installation: bool,
    pub has_usage: bool,
    pub has_contributing: bool,
    pub has_license: bool,
    pub open_issues: u64,
}

impl Documentation {
    #[must_use]
    pub fn extract(readme: &Readme, details: &RepositorySummary) -> Self {
        Self {
            has_readme: !readme.is_empty(),
            readme_length: readme.len(),
            has_installation: readme.mentions("install"),
            has_usage: readme.mentions_any(&["usage", "example"]),
            has_contributing: readme.mentions("contribut"),
            has_license: details.has_license(),
            open_issues: details.open_issues(),
        }
    }
}
