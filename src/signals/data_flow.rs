use super::Readme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[expect(clippy::struct_excessive_bools, reason = "each flag is an independent signal")]
pub struct DataFlow {
    pub mentions_api: bool,
    pub mentions_database: bool,
    pub mentions_async: bool,
    pub has_flow_diagram: bool,
}

impl DataFlow {
    #[must_use]
    pub fn extract(readme: &Readme) -> Self {
        Self {
            mentions_api: readme.mentions("api"),
            mentions_database: readme.mentions_any(&["database", "db"]),
            mentions_async: readme.mentions_any(&["async", "asynchronous"]),
            has_flow_diagram: readme.mentions_any(&["flow", "pipeline"]),
        }
    }
}
