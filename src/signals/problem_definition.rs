use super::Readme;
use crate::facts::hosting::RepositorySummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDefinition {
    pub description: String,
    pub has_problem_statement: bool,
    pub readme_length: usize,
}

impl ProblemDefinition {
    #[must_use]
    pub fn extract(readme: &Readme, details: &RepositorySummary) -> Self {
        Self {
            description: details.description().to_string(),
            has_problem_statement: readme.mentions_any(&["problem", "solution"]),
            readme_length: readme.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(description: Option<&str>) -> RepositorySummary {
        RepositorySummary {
            description: description.map(str::to_string),
            ..RepositorySummary::default()
        }
    }

    #[test]
    fn test_problem_statement_detected() {
        let card = ProblemDefinition::extract(&Readme::new("## The Problem\nThings are slow."), &details(Some("Speeds things up")));
        assert!(card.has_problem_statement);
        assert_eq!(card.description, "Speeds things up");
        assert_eq!(card.readme_length, 31);
    }

    #[test]
    fn test_solution_also_counts() {
        let card = ProblemDefinition::extract(&Readme::new("Our SOLUTION is simple"), &details(None));
        assert!(card.has_problem_statement);
    }

    #[test]
    fn test_no_statement_and_missing_description() {
        let card = ProblemDefinition::extract(&Readme::new("Just some text"), &details(None));
        assert!(!card.has_problem_statement);
        assert_eq!(card.description, "");
        assert_eq!(card.readme_length, 14);
    }
}
