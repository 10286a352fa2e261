//! Per-repository analysis
//!
//! The [`Analyzer`] fetches one repository's metadata, README, and issues through the hosting
//! [`Provider`](crate::facts::hosting::Provider), runs every signal extractor, and assembles an
//! [`AnalysisRecord`]. Only a metadata failure prevents a record from being produced; a missing
//! README or issue list degrades to empty input for the extractors.

mod analysis_record;
mod analyzer;

pub use analysis_record::AnalysisRecord;
pub use analyzer::{Analyzer, build_record};
