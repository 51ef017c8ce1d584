//! Scout core: pure link classification and dedup bookkeeping.
mod classify;
mod entry;
mod seen;

pub use classify::{is_new_vacancy_link, is_vacancy_link, SECURE_SCHEME_PREFIX, VACANCY_MARKER};
pub use entry::{LogEntry, ENTRY_SEPARATOR};
pub use seen::{DedupMode, SeenSet};
