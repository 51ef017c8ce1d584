//! Run configuration, read from `vacancy_scout.ron` when present.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use scout_core::DedupMode;
use scout_engine::{CrawlerSettings, FetchSettings};
use scout_logging::{scout_info, scout_warn};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "vacancy_scout.ron";

const DEFAULT_SEARCH_URL: &str = "https://spb.hh.ru/search/vacancy?from=suggest_post&area=2&hhtmFrom=main&hhtmFromLabel=vacancy_search_line&experience=noExperience&search_field=name&search_field=company_name&search_field=description&text=Python+%D1%80%D0%B0%D0%B7%D1%80%D0%B0%D0%B1%D0%BE%D1%82%D1%87%D0%B8%D0%BA&enable_snippets=false";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub search_url: String,
    pub headers: BTreeMap<String, String>,
    pub output_path: PathBuf,
    pub listing_delay_secs: u64,
    pub request_timeout_secs: u64,
    pub dedup_mode: DedupMode,
    pub append_attempts: u32,
    pub append_retry_delay_millis: u64,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string());
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            headers,
            output_path: PathBuf::from("vacancies.txt"),
            listing_delay_secs: 2,
            request_timeout_secs: 10,
            dedup_mode: DedupMode::default(),
            append_attempts: 2,
            append_retry_delay_millis: 500,
            log_level: "info".to_string(),
        }
    }
}

impl ScoutConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            headers: self.headers.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn crawler_settings(&self) -> CrawlerSettings {
        CrawlerSettings {
            output_path: self.output_path.clone(),
            listing_delay: Duration::from_secs(self.listing_delay_secs),
            dedup_mode: self.dedup_mode,
            append_attempts: self.append_attempts,
            append_retry_delay: Duration::from_millis(self.append_retry_delay_millis),
        }
    }

    /// Parsed `log_level`; anything unrecognised means `info`.
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or_else(|_| {
            scout_warn!("Unknown log level {:?}; using info", self.log_level);
            LevelFilter::Info
        })
    }
}

/// Load the config at `path`. A missing or unusable file yields the defaults.
pub fn load(path: &Path) -> ScoutConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return ScoutConfig::default();
        }
        Err(err) => {
            scout_warn!("Failed to read config from {:?}: {}", path, err);
            return ScoutConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            scout_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            scout_warn!("Failed to parse config from {:?}: {}", path, err);
            ScoutConfig::default()
        }
    }
}
