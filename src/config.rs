use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "trending.toml";

const MAX_PER_PAGE: u8 = 100;

/// How far back a repository's creation date may lie for it to count as trending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeWindow {
    /// Created within the last day
    #[default]
    Daily,

    /// Created within the last 7 days
    Weekly,

    /// Created within the last 30 days
    Monthly,

    /// No restriction on the creation date
    Any,
}

impl TimeWindow {
    /// Number of days covered by the window, or `None` when the window is unbounded
    #[must_use]
    pub const fn days(self) -> Option<i64> {
        match self {
            Self::Daily => Some(1),
            Self::Weekly => Some(7),
            Self::Monthly => Some(30),
            Self::Any => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the hosting API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Creation window used by the trending search
    #[serde(default)]
    pub time_window: TimeWindow,

    /// Optional primary-language filter for the trending search
    #[serde(default)]
    pub language: String,

    /// Number of repositories requested from the trending search
    #[serde(default = "default_trending_limit")]
    pub trending_limit: u8,

    /// Number of trending repositories to analyze
    #[serde(default = "default_analyze_count")]
    pub analyze_count: usize,

    /// Number of issues fetched per repository
    #[serde(default = "default_issue_limit")]
    pub issue_limit: u8,

    /// Maximum number of hot discussions kept per repository
    #[serde(default = "default_discussion_limit")]
    pub discussion_limit: usize,

    /// Timeout for each API request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Delay inserted before each repository analysis
    #[serde(default = "default_request_delay", with = "humantime_serde")]
    pub request_delay: Duration,

    /// Prefix used for the generated report files
    #[serde(default = "default_report_name")]
    pub report_name: String,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_trending_limit() -> u8 {
    5
}

const fn default_analyze_count() -> usize {
    2
}

const fn default_issue_limit() -> u8 {
    5
}

const fn default_discussion_limit() -> usize {
    3
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

const fn default_request_delay() -> Duration {
    Duration::from_secs(1)
}

fn default_report_name() -> String {
    "github_trending_analysis".to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// When `config_path` is `None`, `trending.toml` is looked up in `base_dir` and the
    /// built-in defaults are used if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        Self::parse(&text).into_app_err_with(|| format!("loading configuration file '{final_path}'"))
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).into_app_err("parsing configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error naming the first field whose value is out of range
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(app_err!("api_url must not be empty"));
        }

        if !(1..=MAX_PER_PAGE).contains(&self.trending_limit) {
            return Err(app_err!(
                "trending_limit must be between 1 and {MAX_PER_PAGE}, got {}",
                self.trending_limit
            ));
        }

        if self.analyze_count == 0 {
            return Err(app_err!("analyze_count must be at least 1"));
        }

        if !(1..=MAX_PER_PAGE).contains(&self.issue_limit) {
            return Err(app_err!("issue_limit must be between 1 and {MAX_PER_PAGE}, got {}", self.issue_limit));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        if self.report_name.is_empty() || self.report_name.contains(['/', '\\']) {
            return Err(app_err!(
                "report_name must be a non-empty file name prefix without path separators, got '{}'",
                self.report_name
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
