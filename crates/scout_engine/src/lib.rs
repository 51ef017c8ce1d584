//! Scout engine: page fetching, the vacancy log and the crawl pass.
mod crawl;
mod decode;
mod fetch;
mod page;
mod store;
mod types;

pub use crawl::{ctime_now, Crawler, CrawlerSettings, TimestampFn, CTIME_FORMAT};
pub use decode::{decode_body, DecodedHtml};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use page::Page;
pub use store::{StoreError, VacancyLog, LOG_EXTENSION};
pub use types::{CrawlError, CrawlReport, FailureKind, FetchError};
