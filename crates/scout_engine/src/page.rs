use scraper::{ElementRef, Html, Selector};
use scout_logging::scout_warn;
use url::Url;

/// A fetched and parsed HTML document.
#[derive(Debug)]
pub struct Page {
    url: String,
    document: Html,
}

impl Page {
    /// Parse `html` as a document served from `url`.
    pub fn parse(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }

    /// URL the document was served from, after redirects.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw `href` of every anchor in the document, in document order.
    pub fn all_hrefs(&self) -> Vec<String> {
        collect_hrefs(self.document.root_element())
    }

    /// Raw `href` of every anchor inside the first `<main>` element.
    pub fn main_hrefs(&self) -> Vec<String> {
        let Some(main_sel) = Selector::parse("main").ok() else {
            return Vec::new();
        };
        match self.document.select(&main_sel).next() {
            Some(region) => collect_hrefs(region),
            None => {
                scout_warn!("{} has no <main> region; no links taken from it", self.url);
                Vec::new()
            }
        }
    }

    /// Resolve `href` against this page's URL.
    ///
    /// Absolute hrefs come back unchanged; an href that cannot be joined is
    /// returned as-is so the fetch reports it.
    pub fn resolve(&self, href: &str) -> String {
        let trimmed = href.trim();
        if Url::parse(trimmed).is_ok() {
            return href.to_string();
        }
        Url::parse(&self.url)
            .and_then(|base| base.join(trimmed))
            .map(String::from)
            .unwrap_or_else(|_| href.to_string())
    }
}

fn collect_hrefs(scope: ElementRef<'_>) -> Vec<String> {
    let Some(anchors) = Selector::parse("a[href]").ok() else {
        return Vec::new();
    };
    let mut hrefs = Vec::new();
    for anchor in scope.select(&anchors) {
        if let Some(href) = anchor.value().attr("href") {
            hrefs.push(href.to_string());
        }
    }
    hrefs
}
