use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::config::TimeWindow;
use crate::facts::RepoSpec;
use crate::facts::hosting::TrendingQuery;
use chrono::Local;
use clap::Parser;

const LOG_TARGET: &str = "  trending";

#[derive(Parser, Debug)]
pub struct TrendingArgs {
    /// Only consider repositories whose primary language is LANG
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// How recently the repositories must have been created
    #[arg(long, value_name = "WINDOW")]
    pub since: Option<TimeWindow>,

    /// Number of trending repositories to fetch
    #[arg(long, value_name = "N")]
    pub limit: Option<u8>,

    /// Number of the fetched repositories to analyze
    #[arg(long, value_name = "N")]
    pub analyze: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn process_trending<H: Host>(host: &mut H, args: &TrendingArgs) -> Result<()> {
    let mut config = args.common.load_config()?;

    if let Some(language) = &args.language {
        config.language.clone_from(language);
    }

    if let Some(since) = args.since {
        config.time_window = since;
    }

    if let Some(limit) = args.limit {
        config.trending_limit = limit;
    }

    if let Some(analyze) = args.analyze {
        config.analyze_count = analyze;
    }

    let mut common = Common::new(host, &args.common, config)?;
    common.banner();
    common.say("\n📊 Fetching trending repositories...");

    let query = TrendingQuery::new(common.config.time_window, common.config.language.clone(), common.config.trending_limit);
    let result = common.provider().get_trending_repos(&query, Local::now().date_naive()).await;
    let trending = result.or_report(common.host().output(), "trending repositories").unwrap_or_default();

    if trending.is_empty() {
        common.failure("❌ No trending repositories found.");
        return Ok(());
    }

    common.success(format!("✅ Found {} trending repositories\n", trending.len()));

    let repos: Vec<RepoSpec> = trending
        .iter()
        .filter_map(|summary| {
            let spec = summary.repo_spec();
            if spec.is_none() {
                log::debug!(target: LOG_TARGET, "Skipping search result without an owner and name: {:?}", summary.url());
            }
            spec
        })
        .take(common.config.analyze_count)
        .collect();

    common.analyze_and_report(&repos).await
}
