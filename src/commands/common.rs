//! Setup and reporting shared between the trending and analyze commands.

use super::Host;
use crate::Result;
use crate::analysis::Analyzer;
use crate::config::Config;
use crate::facts::RepoSpec;
use crate::facts::hosting::{IssueFilter, IssueQuery, Provider};
use crate::reports::{generate_json, generate_text, write_artifacts};
use camino::Utf8PathBuf;
use chrono::Local;
use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;
use std::io::Write;

const LOG_TARGET: &str = "    common";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between the trending and analyze commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path to configuration file (default is `trending.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Base URL of the GitHub API
    #[arg(long, value_name = "URL", hide = true)]
    pub api_url: Option<String>,

    /// Directory where the report files are written
    #[arg(long, value_name = "PATH", default_value = ".", help_heading = "Report Output")]
    pub output_dir: Utf8PathBuf,

    /// File name prefix of the report files
    #[arg(long, value_name = "NAME", help_heading = "Report Output")]
    pub report_name: Option<String>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

impl CommonArgs {
    /// Load the configuration and apply the overrides given on the command line
    ///
    /// The result is not validated; [`Common::new`] does that once every override is applied.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(&Utf8PathBuf::from("."), self.config.as_ref())?;

        if let Some(api_url) = &self.api_url {
            config.api_url.clone_from(api_url);
        }

        if let Some(report_name) = &self.report_name {
            config.report_name.clone_from(report_name);
        }

        Ok(config)
    }
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    provider: Provider,
    host: &'a mut H,
    use_colors: bool,
    output_dir: Utf8PathBuf,
}

impl<'a, H: Host> Common<'a, H> {
    /// Create a new Common processor with logger, provider, and config
    ///
    /// # Errors
    ///
    /// Returns an error if the final configuration is invalid or the HTTP client cannot be built
    pub fn new(host: &'a mut H, args: &CommonArgs, config: Config) -> Result<Self> {
        Self::init_logging(args.log_level);

        config.validate()?;
        log::debug!(target: LOG_TARGET, "Using configuration: {config:?}");

        let provider = Provider::new(args.github_token.as_deref(), config.api_url.clone(), config.request_timeout)?;

        Ok(Self {
            config,
            provider,
            host,
            use_colors: args.color.enabled(),
            output_dir: args.output_dir.clone(),
        })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        let level = match log_level {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        // a logger may already be installed when several commands run in one process
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .try_init();
    }

    pub const fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn host(&mut self) -> &mut H {
        self.host
    }

    pub fn banner(&mut self) {
        self.say("🚀 GitHub Trending Repository Analyzer");
        self.say("=".repeat(80));
    }

    /// Write a progress line to the output stream
    pub fn say(&mut self, message: impl AsRef<str>) {
        let _ = writeln!(self.host.output(), "{}", message.as_ref());
    }

    /// Write a success status line to the output stream
    pub fn success(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        if self.use_colors {
            let _ = writeln!(self.host.output(), "{}", message.green());
        } else {
            let _ = writeln!(self.host.output(), "{message}");
        }
    }

    /// Write a failure status line to the output stream
    pub fn failure(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        if self.use_colors {
            let _ = writeln!(self.host.output(), "{}", message.red());
        } else {
            let _ = writeln!(self.host.output(), "{message}");
        }
    }

    /// Analyze each repository in turn, then print and save the report.
    ///
    /// Repositories whose metadata cannot be fetched are left out. When none can be analyzed,
    /// a failure is reported and no files are written.
    pub async fn analyze_and_report(&mut self, repos: &[RepoSpec]) -> Result<()> {
        let analyzer = Analyzer::new(
            &self.provider,
            IssueQuery::new(IssueFilter::All, self.config.issue_limit),
            self.config.discussion_limit,
        );

        let mut analyses = Vec::with_capacity(repos.len());
        for repo in repos {
            // courtesy pause between repositories
            tokio::time::sleep(self.config.request_delay).await;

            if let Some(record) = analyzer.analyze(&mut *self.host, repo).await {
                analyses.push(record);
            }
        }

        if analyses.is_empty() {
            self.failure("❌ No analyses completed.");
            return Ok(());
        }

        let generated_at = Local::now();

        let mut text = String::new();
        generate_text(&analyses, generated_at, &mut text)?;

        let mut json = String::new();
        generate_json(&analyses, &mut json)?;

        let _ = writeln!(self.host.output(), "\n{text}");

        let artifacts = write_artifacts(&self.output_dir, &self.config.report_name, generated_at, &text, &json)?;
        self.success(format!("💾 Report saved to: {}", artifacts.text_path));
        self.success(format!("💾 JSON data saved to: {}", artifacts.json_path));

        Ok(())
    }
}
