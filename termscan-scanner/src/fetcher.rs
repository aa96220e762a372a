use crate::error::{FetchError, Result};
use crate::result::PageCapture;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Elements whose subtrees never contribute to rendered text.
const INVISIBLE_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Sequential page loader. One instance is held for a whole phase and reused
/// across every navigation in it.
///
/// After a page body arrives the fetcher sleeps for the configured settle
/// delay, giving slow upstreams the same grace period a rendering wait would.
/// Tests pass `Duration::ZERO` to stay deterministic.
pub struct PageFetcher {
    client: Client,
    settle: Duration,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(60)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("termscan/0.2 (https://github.com/trailhead-labs/termscan)")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs / 2))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            settle: Duration::from_secs(5),
        }
    }

    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Navigate to `url` and return the captured page.
    ///
    /// Non-2xx statuses are not errors: a rendered 404 or 500 page is still a
    /// page. Only transport failures (DNS, connect, timeout) fail the fetch.
    pub async fn fetch(&self, url: &str) -> Result<PageCapture> {
        Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;

        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }

        Ok(PageCapture::new(url.to_string(), status_code, body))
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect every anchor target on the page, resolved to an absolute URL, and
/// keep only those prefixed by `prefix`. Document order, duplicates kept.
pub fn harvest_anchors(html: &str, page_url: &str, prefix: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse("a[href]").unwrap();

    let mut anchors = Vec::new();
    for element in document.select(&link_selector) {
        if let Some(href) = element.value().attr("href")
            && let Some(absolute_url) = resolve_href(page_url, href)
        {
            debug!("Found link: {}", absolute_url);
            anchors.push(absolute_url);
        }
    }

    retain_same_site(anchors, prefix)
}

/// The same-site filter: a plain string-prefix test against the seed URL.
///
/// Deliberately coarse. No scheme folding, no `www.` reconciliation, no
/// trailing-slash handling; two spellings of one page are two links.
pub fn retain_same_site(links: Vec<String>, seed: &str) -> Vec<String> {
    links
        .into_iter()
        .filter(|link| link.starts_with(seed))
        .collect()
}

/// Rendered body text: every text node under `<body>` outside invisible
/// subtrees, space-separated. Inline joins (`foo<b>bar</b>`) are not
/// reconstructed; callers normalize whitespace downstream.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body_selector = Selector::parse("body").unwrap();

    let mut text = String::new();
    if let Some(body) = document.select(&body_selector).next() {
        collect_text(body, &mut text);
    }
    text
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    if INVISIBLE_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, out);
        }
    }
}

fn resolve_href(base: &str, href: &str) -> Option<String> {
    // Skip empty, javascript:, mailto:, tel:, and bare fragments.
    if href.is_empty()
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with('#')
    {
        return None;
    }

    let base_url = Url::parse(base).ok()?;
    let resolved = base_url.join(href).ok()?;

    // Remove fragment
    let mut url = resolved.clone();
    url.set_fragment(None);

    Some(url.to_string())
}
