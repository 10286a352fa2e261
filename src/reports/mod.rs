//! Report generation for repository analyses
//!
//! Two renderings are produced from the same slice of [`AnalysisRecord`](crate::analysis::AnalysisRecord):
//! - **Text**: a sectioned, human-readable report with emoji headings and check marks
//! - **JSON**: the records themselves, pretty-printed
//!
//! Both generators write into any [`core::fmt::Write`], so callers can render into a `String`
//! and decide separately where it goes. [`write_artifacts`] persists a text and a JSON rendering
//! side by side under a shared timestamp.

mod artifacts;
mod common;
mod json;
mod text;

pub use artifacts::{Artifacts, write_artifacts};
pub use json::generate as generate_json;
pub use text::generate as generate_text;
