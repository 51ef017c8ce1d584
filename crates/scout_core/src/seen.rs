use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::LogEntry;

/// How previously logged lines seed the seen-set at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DedupMode {
    /// Only whole raw lines are members. Discovery lines never match a plain
    /// URL, so vacancies logged by earlier runs are logged again.
    RawLines,
    /// Raw lines plus the URL embedded in every discovery line.
    #[default]
    LoggedUrls,
}

/// Append-only set of recorded log entries and URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenSet {
    members: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from the raw lines of the vacancy log.
    pub fn from_lines<I, S>(lines: I, mode: DedupMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = Self::new();
        for line in lines {
            let line = line.into();
            if mode == DedupMode::LoggedUrls {
                if let Some(url) = LogEntry::parse(&line).url() {
                    seen.insert(url);
                }
            }
            seen.insert(line);
        }
        seen
    }

    /// Insert a member. Returns false if it was already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        self.members.insert(value.into())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.members.contains(value)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
