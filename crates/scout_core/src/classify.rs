use crate::SeenSet;

/// Path fragment that identifies a vacancy page on the target site.
pub const VACANCY_MARKER: &str = "/vacancy/";

/// Scheme prefix a vacancy link must carry before it is recorded.
pub const SECURE_SCHEME_PREFIX: &str = "https";

/// True when `url` points at a vacancy page (search result or listing).
pub fn is_vacancy_link(url: &str) -> bool {
    url.contains(VACANCY_MARKER)
}

/// True when `url` is a vacancy link over https that `seen` does not hold yet.
///
/// Matching is literal: no trailing-slash, query or fragment normalization.
pub fn is_new_vacancy_link(url: &str, seen: &SeenSet) -> bool {
    is_vacancy_link(url) && url.starts_with(SECURE_SCHEME_PREFIX) && !seen.contains(url)
}
