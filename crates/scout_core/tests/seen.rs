use pretty_assertions::assert_eq;
use scout_core::{DedupMode, SeenSet};

const LOGGED: [&str; 3] = [
    "Mon Jan  2 15:04:05 2006",
    "Mon Jan  2 15:04:07 2006 >>> https://x.test/vacancy/1",
    "https://x.test/vacancy/2",
];

#[test]
fn raw_lines_mode_keeps_composite_lines_opaque() {
    let seen = SeenSet::from_lines(LOGGED, DedupMode::RawLines);

    assert_eq!(seen.len(), 3);
    assert!(seen.contains("Mon Jan  2 15:04:07 2006 >>> https://x.test/vacancy/1"));
    assert!(!seen.contains("https://x.test/vacancy/1"));
    assert!(seen.contains("https://x.test/vacancy/2"));
}

#[test]
fn logged_urls_mode_also_learns_embedded_urls() {
    let seen = SeenSet::from_lines(LOGGED, DedupMode::LoggedUrls);

    assert!(seen.contains("https://x.test/vacancy/1"));
    assert!(seen.contains("https://x.test/vacancy/2"));
    assert!(seen.contains("Mon Jan  2 15:04:05 2006"));
}

#[test]
fn insert_is_monotonic() {
    let mut seen = SeenSet::new();
    assert!(seen.is_empty());
    assert!(seen.insert("b"));
    assert!(seen.insert("a"));
    assert!(!seen.insert("b"));

    assert!(seen.contains("a"));
    assert!(seen.contains("b"));
    assert_eq!(seen.len(), 2);
}

#[test]
fn default_mode_dedups_logged_urls() {
    assert_eq!(DedupMode::default(), DedupMode::LoggedUrls);
}
