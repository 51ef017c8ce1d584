//! `vacancy_scout`: one crawl pass over the configured search page.
mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::LevelFilter;
use scout_engine::{Crawler, ReqwestFetcher};
use scout_logging::{scout_error, scout_info, scout_warn, LogDestination};

fn main() {
    // Loggers accept everything; the global max level is the real filter.
    scout_logging::initialize(LogDestination::default(), LevelFilter::Trace);
    log::set_max_level(LevelFilter::Info);

    let exit_code = match run() {
        Ok(()) => 0,
        Err(err) => {
            scout_error!("{:#}", err);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<()> {
    let config = config::load(Path::new(config::CONFIG_FILENAME));
    log::set_max_level(config.log_level());
    let fetcher =
        ReqwestFetcher::new(config.fetch_settings()).context("failed to build HTTP client")?;
    let crawler = Crawler::new(Arc::new(fetcher), config.crawler_settings());

    // Everything runs in order on this one thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    let report = runtime.block_on(crawler.run(&config.search_url))?;

    scout_info!(
        "{} new vacancies written to {:?}",
        report.added.len(),
        config.output_path
    );
    if !report.lost.is_empty() {
        scout_warn!("{} entries could not be written", report.lost.len());
    }
    Ok(())
}
