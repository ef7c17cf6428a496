//! Per-line field extractors.
//!
//! Every content line of a notice is run through all extractors. They are
//! independent of the current section and of each other: one line may yield
//! a date, several CVE ids and a release tag at the same time.

use crate::model::Bulletin;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Subject: )?\[([A-Z][A-Z0-9]*-\d[\d-]*)\] (.+)$").expect("static regex")
});

static LONG_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(January|February|March|April|May|June|July|August|September|October|November|December) (\d{1,2}), (\d{4})",
    )
    .expect("static regex")
});

/// `- Ubuntu 24.04 LTS` style entries in the release list
static RELEASE_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-\s*Ubuntu (\d{2}\.\d{2}(?: LTS)?)").expect("static regex")
});

/// `Ubuntu 24.04 LTS  <package> <version>` lines in the update instructions
static RELEASE_UPDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Ubuntu (\d{2}\.\d{2}(?: LTS)?)\s+(\S.*)$").expect("static regex")
});

static CVE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CVE-\d{4}-\d+").expect("static regex"));

static SOFTWARE_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*(.+):\s*(.+)$").expect("static regex"));

/// Split a header line into notice id and title.
///
/// Returns `None` when the line does not have the `[ID] title` shape.
#[must_use]
pub fn parse_header(line: &str) -> Option<(String, String)> {
    let caps = HEADER.captures(line.trim_end())?;
    let title = caps[2].trim();
    if title.is_empty() {
        return None;
    }
    Some((caps[1].to_string(), title.to_string()))
}

/// Whether `line` starts a new notice.
///
/// Mailing-list subject lines always do, even when malformed. A bare
/// `[ID] title` line does only if it is well formed, so that bracketed
/// footnotes in message bodies are not mistaken for headers.
#[must_use]
pub fn is_header(line: &str) -> bool {
    line.starts_with("Subject: [") || (line.starts_with('[') && HEADER.is_match(line.trim_end()))
}

/// Find the first long-form date (`May 1, 2024`) and convert it.
///
/// Returns `None` if there is no date or the date does not exist.
#[must_use]
pub fn extract_date(line: &str) -> Option<NaiveDate> {
    let caps = LONG_DATE.captures(line)?;
    let month = MONTHS.iter().position(|m| *m == &caps[1])? + 1;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, day)
}

/// All release versions mentioned on the line, in order of appearance
#[must_use]
pub fn extract_releases(line: &str) -> Vec<String> {
    let mut releases: Vec<String> = RELEASE_ITEM
        .captures_iter(line)
        .map(|caps| caps[1].to_string())
        .collect();

    if let Some(caps) = RELEASE_UPDATE.captures(line.trim()) {
        releases.push(caps[1].to_string());
    }

    releases
}

/// All CVE ids on the line, in order of appearance
pub fn extract_cve_ids(line: &str) -> impl Iterator<Item = &str> {
    CVE_ID.find_iter(line).map(|m| m.as_str())
}

/// A `- label: description` line, normalized to `label: description`
#[must_use]
pub fn extract_software_description(line: &str) -> Option<String> {
    let caps = SOFTWARE_DESCRIPTION.captures(line.trim_end())?;
    Some(format!("{}: {}", caps[1].trim(), caps[2].trim()))
}

/// Run every extractor over `line` and record the results on `bulletin`.
pub fn apply_extractors(bulletin: &mut Bulletin, line: &str) {
    if !bulletin.published_date.is_set() {
        if let Some(date) = extract_date(line) {
            bulletin.published_date.set(date);
        }
    }

    for release in extract_releases(line) {
        bulletin.add_release(release);
    }

    for cve in extract_cve_ids(line) {
        bulletin.add_cve(cve);
    }

    if !bulletin.software_description.is_set() {
        if let Some(description) = extract_software_description(line) {
            bulletin.software_description.set(description);
        }
    }
}
