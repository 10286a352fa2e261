//! Command-line interface and orchestration
//!
//! This module implements the CLI commands and drives the other modules to go from a search
//! query or a list of repositories to a saved report.
//!
//! # Commands
//!
//! - **trending**: search for recently created, highly starred repositories, analyze the leading
//!   few, and write the text and JSON reports
//! - **analyze**: the same analysis and reports for explicitly named repositories
//! - **init**: write the default configuration file
//! - **validate**: check a configuration file
//!
//! The `run` function parses command-line arguments with clap and routes to the matching handler.
//! `trending` and `analyze` share their setup and reporting through `common`, which loads the
//! configuration, applies command-line overrides, initializes logging, and owns the hosting
//! provider for the duration of the command.

mod analyze;
mod common;
mod host;
mod init;
mod run;
mod trending;
mod validate;

pub use analyze::{AnalyzeArgs, analyze_repos};
pub use common::{ColorMode, CommonArgs, LogLevel};
pub use host::Host;
#[cfg(test)]
pub use host::TestHost;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use trending::{TrendingArgs, process_trending};
pub use validate::{ValidateArgs, validate_config};
