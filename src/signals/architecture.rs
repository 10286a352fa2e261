use super::Readme;
use crate::facts::hosting::RepositorySummary;
use serde::{Deserialize, Serialize};

/// Technologies looked for in a README, in reporting order
pub const TECH_KEYWORDS: &[&str] = &[
    "react",
    "vue",
    "angular",
    "python",
    "javascript",
    "typescript",
    "docker",
    "kubernetes",
    "aws",
    "gcp",
    "azure",
    "tensorflow",
    "pytorch",
    "mongodb",
    "postgresql",
    "redis",
    "node.js",
    "go",
    "rust",
    "java",
    "spring",
    "django",
    "flask",
    "fastapi",
];

pub const MAX_DETECTED_TECHNOLOGIES: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureTools {
    pub primary_language: String,
    pub detected_technologies: Vec<String>,
    pub has_architecture_diagram: bool,
}

impl ArchitectureTools {
    /// Technologies are kept in [`TECH_KEYWORDS`] order, not the order they appear in the README.
    #[must_use]
    pub fn extract(readme: &Readme, details: &RepositorySummary) -> Self {
        let detected_technologies = TECH_KEYWORDS
            .iter()
            .filter(|tech| readme.mentions(tech))
            .take(MAX_DETECTED_TECHNOLOGIES)
            .map(|tech| (*tech).to_string())
            .collect();

        Self {
            primary_language: details.language().to_string(),
            detected_technologies,
            has_architecture_diagram: readme.mentions_any(&["architecture", "diagram"]),
        }
    }
}
