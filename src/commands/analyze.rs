use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::facts::RepoSpec;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Repositories to analyze (format: `owner/repo` or a GitHub URL)
    #[arg(value_name = "OWNER/REPO", required = true)]
    pub repos: Vec<RepoSpec>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn analyze_repos<H: Host>(host: &mut H, args: &AnalyzeArgs) -> Result<()> {
    let config = args.common.load_config()?;
    let mut common = Common::new(host, &args.common, config)?;

    common.banner();
    common.analyze_and_report(&args.repos).await
}
