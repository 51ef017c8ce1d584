use std::fmt;

/// Separator between the timestamp and the URL of a discovery line.
pub const ENTRY_SEPARATOR: &str = " >>> ";

/// One line of the vacancy log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// Bare timestamp written once per crawl pass.
    Marker(String),
    /// A newly discovered vacancy, rendered as `"<timestamp> >>> <url>"`.
    Discovery { timestamp: String, url: String },
}

impl LogEntry {
    pub fn marker(timestamp: impl Into<String>) -> Self {
        LogEntry::Marker(timestamp.into())
    }

    pub fn discovery(timestamp: impl Into<String>, url: impl Into<String>) -> Self {
        LogEntry::Discovery {
            timestamp: timestamp.into(),
            url: url.into(),
        }
    }

    /// Parse a raw log line. Anything without the separator is a marker.
    ///
    /// The line is split on the first separator, so the URL part is returned
    /// exactly as it was appended.
    pub fn parse(line: &str) -> Self {
        match line.split_once(ENTRY_SEPARATOR) {
            Some((timestamp, url)) => LogEntry::discovery(timestamp, url),
            None => LogEntry::marker(line),
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            LogEntry::Marker(timestamp) => timestamp,
            LogEntry::Discovery { timestamp, .. } => timestamp,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            LogEntry::Marker(_) => None,
            LogEntry::Discovery { url, .. } => Some(url.as_str()),
        }
    }

    /// The exact text written to the log file for this entry.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Marker(timestamp) => write!(f, "{timestamp}"),
            LogEntry::Discovery { timestamp, url } => {
                write!(f, "{timestamp}{ENTRY_SEPARATOR}{url}")
            }
        }
    }
}
