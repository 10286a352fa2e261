//! Command dispatch logic

use super::{AnalyzeArgs, InitArgs, TrendingArgs, ValidateArgs, analyze_repos, init_config, process_trending, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "gh-trending-analyzer", author, version, long_about = None)]
#[command(about = "Find trending GitHub repositories and report on how well they explain themselves")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for trending repositories, analyze the top results, and save a report
    Trending(Box<TrendingArgs>),
    /// Analyze specific repositories and save a report
    Analyze(Box<AnalyzeArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the HTTP client cannot be built, or the
/// report files cannot be written. Failures to fetch data from GitHub are reported on the host's
/// error stream and never surface here.
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::Trending(trending_args) => process_trending(host, trending_args).await,
        Command::Analyze(analyze_args) => analyze_repos(host, analyze_args).await,
        Command::Init(init_args) => init_config(host, init_args),
        Command::Validate(validate_args) => validate_config(host, validate_args),
    }
}
