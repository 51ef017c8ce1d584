use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use scout_core::{is_new_vacancy_link, is_vacancy_link, DedupMode, LogEntry, SeenSet};
use scout_logging::{scout_error, scout_info, scout_warn};

use crate::{CrawlError, CrawlReport, Fetcher, Page, StoreError, VacancyLog};

/// ctime-style timestamp, e.g. `Mon Jan  2 15:04:05 2006`.
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub type TimestampFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Current local time in [`CTIME_FORMAT`].
pub fn ctime_now() -> String {
    chrono::Local::now().format(CTIME_FORMAT).to_string()
}

#[derive(Debug, Clone)]
pub struct CrawlerSettings {
    pub output_path: PathBuf,
    /// Pause before every listing page request.
    pub listing_delay: Duration,
    pub dedup_mode: DedupMode,
    /// Total tries per log append, first attempt included.
    pub append_attempts: u32,
    /// Pause between two tries of the same append.
    pub append_retry_delay: Duration,
}

impl Default for CrawlerSettings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("vacancies.txt"),
            listing_delay: Duration::from_secs(2),
            dedup_mode: DedupMode::default(),
            append_attempts: 2,
            append_retry_delay: Duration::from_millis(500),
        }
    }
}

/// Two-level crawl: search page -> listing pages -> new vacancy links.
pub struct Crawler {
    fetcher: Arc<dyn Fetcher>,
    log: VacancyLog,
    settings: CrawlerSettings,
    timestamp: TimestampFn,
}

impl Crawler {
    pub fn new(fetcher: Arc<dyn Fetcher>, settings: CrawlerSettings) -> Self {
        Self {
            fetcher,
            log: VacancyLog::new(settings.output_path.clone()),
            settings,
            timestamp: Arc::new(ctime_now),
        }
    }

    pub fn with_timestamp(mut self, timestamp: TimestampFn) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Run one pass against `search_url`.
    ///
    /// Fetch failures and log naming/read failures end the pass. Append IO
    /// failures are retried, then recorded in [`CrawlReport::lost`].
    pub async fn run(&self, search_url: &str) -> Result<CrawlReport, CrawlError> {
        self.log.ensure_exists()?;
        let mut seen = SeenSet::from_lines(self.log.read_all()?, self.settings.dedup_mode);
        scout_info!(
            "Loaded {} known entries from {:?}",
            seen.len(),
            self.log.path()
        );

        let listing_urls = {
            let search_page = self.fetch(search_url).await?;
            search_page
                .main_hrefs()
                .into_iter()
                .filter(|href| is_vacancy_link(href))
                .map(|href| search_page.resolve(&href))
                .collect::<Vec<_>>()
        };

        let mut report = CrawlReport::default();
        self.record(&LogEntry::marker((self.timestamp)()), &mut report)
            .await?;

        for listing_url in listing_urls {
            tokio::time::sleep(self.settings.listing_delay).await;
            let hrefs = self.fetch(&listing_url).await?.all_hrefs();
            report.listings_visited += 1;

            for href in hrefs {
                report.links_checked += 1;
                scout_info!("Checking: {}", href);
                if !is_new_vacancy_link(&href, &seen) {
                    continue;
                }

                let entry = LogEntry::discovery((self.timestamp)(), href.as_str());
                if self.record(&entry, &mut report).await? {
                    scout_info!("Adding {}", href);
                    report.added.push(href.clone());
                }
                // Lost entries are still marked seen so the pass does not retry them.
                seen.insert(href);
            }
        }

        scout_info!(
            "Pass done: {} listings, {} links checked, {} added, {} lost",
            report.listings_visited,
            report.links_checked,
            report.added.len(),
            report.lost.len()
        );
        Ok(report)
    }

    async fn fetch(&self, url: &str) -> Result<Page, CrawlError> {
        self.fetcher
            .fetch(url)
            .await
            .map_err(|source| CrawlError::Fetch {
                url: url.to_string(),
                source,
            })
    }

    /// Append `entry`, retrying IO failures. Returns whether it was written.
    async fn record(
        &self,
        entry: &LogEntry,
        report: &mut CrawlReport,
    ) -> Result<bool, CrawlError> {
        let line = entry.render();
        let attempts = self.settings.append_attempts.max(1);
        for attempt in 1..=attempts {
            match self.log.append(&line) {
                Ok(()) => return Ok(true),
                Err(StoreError::Io(err)) if attempt < attempts => {
                    scout_warn!("append attempt {} failed: {}; retrying", attempt, err);
                    tokio::time::sleep(self.settings.append_retry_delay).await;
                }
                Err(StoreError::Io(err)) => {
                    scout_error!("failed to append to {:?}: {}", self.log.path(), err);
                    scout_error!("lost entry: {}", line);
                    report.lost.push(line);
                    return Ok(false);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(false)
    }
}
