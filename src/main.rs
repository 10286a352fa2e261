//! A tool that finds recently popular GitHub repositories and reports on how well they explain themselves.
//!
//! # Overview
//!
//! `gh-trending-analyzer` queries the GitHub search API for repositories that gathered many stars
//! shortly after being created. For the top results it fetches the repository metadata, README,
//! and most-discussed issues, then scores four aspects:
//!
//! 1. Problem definition
//! 2. Architecture & tools
//! 3. Data flow
//! 4. Documentation
//!
//! The results are printed as a text report and saved next to a JSON dump.
//!
//! # Usage
//!
//! ```bash
//! gh-trending-analyzer trending
//! gh-trending-analyzer trending --since weekly --language rust --analyze 3
//! gh-trending-analyzer analyze tokio-rs/tokio https://github.com/serde-rs/serde
//! gh-trending-analyzer init
//! gh-trending-analyzer validate trending.toml
//! ```
//!
//! Set `GITHUB_TOKEN` (or pass `--github-token`) to raise the API rate limit.

use gh_trending_analyzer::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that writes to the real process streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
