use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Local};
use ohno::IntoAppError;
use std::fs;

/// Paths of the report files written for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub text_path: Utf8PathBuf,
    pub json_path: Utf8PathBuf,
}

impl Artifacts {
    /// Compute `<report_name>_<YYYYMMDD_HHMMSS>.txt` and `.json` inside `dir`.
    #[must_use]
    pub fn new(dir: &Utf8Path, report_name: &str, generated_at: DateTime<Local>) -> Self {
        let stem = format!("{report_name}_{}", generated_at.format("%Y%m%d_%H%M%S"));
        Self {
            text_path: dir.join(format!("{stem}.txt")),
            json_path: dir.join(format!("{stem}.json")),
        }
    }
}

/// Write the text report and JSON data into `dir`, creating the directory if needed.
pub fn write_artifacts(dir: &Utf8Path, report_name: &str, generated_at: DateTime<Local>, text: &str, json: &str) -> Result<Artifacts> {
    fs::create_dir_all(dir).into_app_err_with(|| format!("creating output directory '{dir}'"))?;

    let artifacts = Artifacts::new(dir, report_name, generated_at);
    fs::write(&artifacts.text_path, text).into_app_err_with(|| format!("writing report to '{}'", artifacts.text_path))?;
    fs::write(&artifacts.json_path, json).into_app_err_with(|| format!("writing JSON data to '{}'", artifacts.json_path))?;

    Ok(artifacts)
}
