//! Ubuntu security website HTTP client.

use super::{EnrichmentError, SecurityLookup};
use crate::error::{DigestError, EnrichmentErrorKind, Result};
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;

/// Default base URL of the Ubuntu security pages
pub const UBUNTU_SECURITY_URL: &str = "https://ubuntu.com/security";

static PRIORITY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<strong>(Low|Medium|High|Critical)</strong>").expect("static regex")
});

/// Ubuntu security client configuration.
#[derive(Debug, Clone)]
pub struct UbuntuClientConfig {
    /// Base URL; CVE pages live at `<base>/<CVE>`, notices at `<base>/notices/<ID>`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of CVE page lines scanned for the priority marker
    pub max_scan_lines: usize,
}

impl Default for UbuntuClientConfig {
    fn default() -> Self {
        Self {
            base_url: UBUNTU_SECURITY_URL.to_string(),
            timeout: Duration::from_secs(15),
            max_scan_lines: 3000,
        }
    }
}

/// HTTP client for CVE priorities and notice detail pages.
pub struct UbuntuSecurityClient {
    client: Client,
    config: UbuntuClientConfig,
}

/// Map a transport error, keeping timeouts distinguishable
fn request_error(url: &str, err: &reqwest::Error) -> EnrichmentError {
    if err.is_timeout() {
        EnrichmentError::Timeout
    } else {
        EnrichmentError::ApiError(format!("{url}: {err}"))
    }
}

impl UbuntuSecurityClient {
    /// Create a new client.
    pub fn new(config: UbuntuClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| {
                DigestError::enrichment(
                    "Failed to create HTTP client",
                    EnrichmentErrorKind::NetworkError(e.to_string()),
                )
            })?;

        Ok(Self { client, config })
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// URL of a CVE page
    #[must_use]
    pub fn cve_url(&self, cve_id: &str) -> String {
        format!("{}/{}", self.base(), cve_id)
    }

    /// URL of a notice detail page
    #[must_use]
    pub fn notice_url(&self, notice_id: &str) -> String {
        format!("{}/notices/{}", self.base(), notice_id)
    }

    /// GET a page and return its body as text
    fn get_page(&self, url: &str) -> std::result::Result<String, EnrichmentError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| request_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::ApiError(format!(
                "{url} returned status {}",
                status.as_u16()
            )));
        }

        response.text().map_err(|e| request_error(url, &e))
    }
}

impl SecurityLookup for UbuntuSecurityClient {
    fn fetch_cve_priority(&self, cve_id: &str) -> std::result::Result<String, EnrichmentError> {
        let page = self.get_page(&self.cve_url(cve_id))?;
        extract_priority(&page, self.config.max_scan_lines).ok_or_else(|| {
            EnrichmentError::ParseError(format!("no priority found on page for {cve_id}"))
        })
    }

    fn fetch_notice_detail(&self, notice_id: &str) -> std::result::Result<String, EnrichmentError> {
        let page = self.get_page(&self.notice_url(notice_id))?;
        Ok(extract_body_text(&page))
    }

    fn name(&self) -> &'static str {
        "ubuntu.com"
    }
}

/// Find the priority label on a CVE page.
///
/// The first `max_lines` lines are scanned for a `<strong>Level</strong>`
/// marker. If none is found, the scanned fragment is parsed as HTML and the
/// text of the hero score block is used instead.
#[must_use]
pub fn extract_priority(html: &str, max_lines: usize) -> Option<String> {
    let mut fragment = String::new();
    for line in html.lines().take(max_lines) {
        if let Some(caps) = PRIORITY_MARKER.captures(line) {
            return Some(caps[1].to_string());
        }
        fragment.push_str(line);
        fragment.push('\n');
    }

    let selector = Selector::parse("div.cve-hero-scores strong").ok()?;
    let document = Html::parse_document(&fragment);
    let label = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Visible text of the page body with whitespace collapsed.
///
/// Script and style contents are skipped.
#[must_use]
pub fn extract_body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(body_selector) = Selector::parse("body") else {
        return String::new();
    };
    let Some(body) = document.select(&body_selector).next() else {
        return String::new();
    };

    let mut words: Vec<&str> = Vec::new();
    for node in body.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|el| matches!(el.name(), "script" | "style" | "noscript"));
        if !hidden {
            words.extend(text.split_whitespace());
        }
    }

    words.join(" ")
}
