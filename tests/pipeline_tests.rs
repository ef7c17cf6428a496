//! End-to-end tests for the parse → filter → enrich → report pipeline.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use usn_digest::config::AppConfig;
use usn_digest::enrichment::{EnrichmentError, NoOpLookup, SecurityLookup};
use usn_digest::pipeline::{output_report, process_notices, read_digest, OutputTarget};
use usn_digest::reports::{create_reporter, ReportFormat, TSV_HEADER};
use usn_digest::{Availability, Bulletin, Severity};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

/// Deterministic stand-in for the security website
struct FakeSite {
    priorities: HashMap<&'static str, &'static str>,
    pages: HashMap<&'static str, &'static str>,
    requests: AtomicUsize,
}

impl FakeSite {
    fn may_2025() -> Self {
        Self {
            priorities: HashMap::from([
                ("CVE-2025-21001", "Medium"),
                ("CVE-2025-21002", "High"),
                ("CVE-2025-21003", "low"),
                ("CVE-2025-30002", "Low"),
            ]),
            pages: HashMap::from([(
                "USN-7513-1",
                "Canonical Livepatch is available for this update. \
                 After a standard system update you need to reboot your computer.",
            )]),
            requests: AtomicUsize::new(0),
        }
    }
}

impl SecurityLookup for FakeSite {
    fn fetch_cve_priority(&self, cve_id: &str) -> Result<String, EnrichmentError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.priorities
            .get(cve_id)
            .map(|label| (*label).to_string())
            .ok_or_else(|| EnrichmentError::ApiError(format!("HTTP 404 for {cve_id}")))
    }

    fn fetch_notice_detail(&self, notice_id: &str) -> Result<String, EnrichmentError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(notice_id)
            .map(|page| (*page).to_string())
            .ok_or(EnrichmentError::Timeout)
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

fn ids(notices: &[Bulletin]) -> Vec<&str> {
    notices.iter().map(Bulletin::display_id).collect()
}

#[test]
fn test_fixture_parses_every_message() {
    let notices = read_digest(&fixture_path("usn-digest-2025-05.txt")).unwrap();
    assert_eq!(
        ids(&notices),
        ["USN-7513-1", "USN-7514-1", "USN-7515-1", "USN-7516-1"]
    );
    assert!(notices.iter().all(|n| !n.is_enriched()));
}

#[test]
fn test_filter_keeps_generic_24_04_notices() {
    let notices = read_digest(&fixture_path("usn-digest-2025-05.txt")).unwrap();
    let outcome = process_notices(notices, &AppConfig::default(), NoOpLookup);

    assert_eq!(outcome.parsed, 4);
    assert_eq!(outcome.dropped(), 2);
    assert_eq!(ids(&outcome.notices), ["USN-7513-1", "USN-7516-1"]);
}

#[test]
fn test_filter_other_release() {
    let notices = read_digest(&fixture_path("usn-digest-2025-05.txt")).unwrap();
    let config = AppConfig::builder()
        .target_releases(vec!["22.04 LTS".to_string()])
        .build();
    let outcome = process_notices(notices, &config, NoOpLookup);

    assert_eq!(ids(&outcome.notices), ["USN-7514-1", "USN-7516-1"]);
}

#[test]
fn test_enrichment_with_fake_site() {
    let site = FakeSite::may_2025();
    let notices = read_digest(&fixture_path("usn-digest-2025-05.txt")).unwrap();
    let outcome = process_notices(notices, &AppConfig::default(), &site);

    let kernel = &outcome.notices[0];
    assert_eq!(kernel.severity.get(), Some(&Severity::High));
    assert_eq!(kernel.livepatch.get(), Some(&Availability::Yes));
    assert_eq!(kernel.reboot_required.get(), Some(&Availability::Yes));

    let openssl = &outcome.notices[1];
    assert_eq!(openssl.severity.get(), Some(&Severity::Low));
    assert_eq!(openssl.livepatch.get(), Some(&Availability::Unknown));
    assert_eq!(openssl.reboot_required.get(), Some(&Availability::Unknown));

    // Three kernel CVEs, two OpenSSL CVEs and one detail page per notice
    assert_eq!(site.requests.load(Ordering::SeqCst), 7);
    assert_eq!(outcome.stats.notices_enriched, 2);
    assert_eq!(outcome.stats.cve_lookups, 5);
    assert_eq!(outcome.stats.cve_lookup_failures, 1);
    assert_eq!(outcome.stats.detail_failures, 1);
}

#[test]
fn test_parallel_enrichment_matches_sequential() {
    let sequential = process_notices(
        read_digest(&fixture_path("usn-digest-2025-05.txt")).unwrap(),
        &AppConfig::default(),
        FakeSite::may_2025(),
    );
    let parallel = process_notices(
        read_digest(&fixture_path("usn-digest-2025-05.txt")).unwrap(),
        &AppConfig::builder().max_concurrent(4).build(),
        FakeSite::may_2025(),
    );

    assert_eq!(sequential.notices, parallel.notices);
    assert_eq!(sequential.stats.cve_lookups, parallel.stats.cve_lookups);
}

#[test]
fn test_tsv_report_from_fixture() {
    let notices = read_digest(&fixture_path("usn-digest-2025-05.txt")).unwrap();
    let outcome = process_notices(notices, &AppConfig::default(), FakeSite::may_2025());
    let report = create_reporter(ReportFormat::Tsv)
        .generate(&outcome.notices)
        .unwrap();

    let expected = format!(
        "{TSV_HEADER}\n\
         USN-7513-1\tLinux kernel vulnerabilities\t2025-05-14\tSeveral security issues were fixed in the Linux kernel.\tHigh\tyes\tyes\n\
         USN-7516-1\tOpenSSL vulnerabilities\t2025-05-15\tSeveral security issues were fixed in OpenSSL.\tLow\tNA\tNA\n"
    );
    assert_eq!(report, expected);
}

#[test]
fn test_offline_report_marks_everything_unknown() {
    let notices = read_digest(&fixture_path("usn-digest-2025-05.txt")).unwrap();
    let outcome = process_notices(notices, &AppConfig::default(), NoOpLookup);
    let report = create_reporter(ReportFormat::Tsv)
        .generate(&outcome.notices)
        .unwrap();

    for row in report.lines().skip(1) {
        assert!(row.ends_with("\tUnknown\tNA\tNA"), "row: {row}");
    }
}

#[test]
fn test_empty_result_still_has_header() {
    let outcome = process_notices(
        usn_digest::parse_digest_str("no notices in here\n"),
        &AppConfig::default(),
        NoOpLookup,
    );
    assert!(outcome.notices.is_empty());

    let tsv = create_reporter(ReportFormat::Tsv)
        .generate(&outcome.notices)
        .unwrap();
    assert_eq!(tsv, format!("{TSV_HEADER}\n"));

    let json = create_reporter(ReportFormat::Json)
        .generate(&outcome.notices)
        .unwrap();
    assert_eq!(json.trim(), "[]");
}

#[test]
fn test_notice_for_other_release_yields_empty_report() {
    let digest = "\
[NOTICE-100-1] Sample Title
Summary:
A sample notice that only affects an older release.
- Ubuntu 20.04 LTS
CVE-2024-12345
";
    let parsed = usn_digest::parse_digest_str(digest);
    assert_eq!(ids(&parsed), ["NOTICE-100-1"]);
    assert_eq!(
        parsed[0].cve_ids.iter().collect::<Vec<_>>(),
        ["CVE-2024-12345"]
    );
    assert_eq!(
        usn_digest::NoticeFilter::new(["24.04", "24.04 LTS"]).check(&parsed[0]),
        Err(usn_digest::filter::Rejection::NotApplicable)
    );

    let outcome = process_notices(parsed, &AppConfig::default(), NoOpLookup);
    assert_eq!(outcome.parsed, 1);
    assert!(outcome.notices.is_empty());

    let tsv = create_reporter(ReportFormat::Tsv)
        .generate(&outcome.notices)
        .unwrap();
    assert_eq!(tsv, format!("{TSV_HEADER}\n"));

    let json = create_reporter(ReportFormat::Json)
        .generate(&outcome.notices)
        .unwrap();
    assert_eq!(json.trim(), "[]");
}

#[test]
fn test_report_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("usn.json");
    let notices = read_digest(&fixture_path("usn-digest-2025-05.txt")).unwrap();
    let outcome = process_notices(notices, &AppConfig::default(), NoOpLookup);

    output_report(
        &outcome.notices,
        ReportFormat::Json,
        &OutputTarget::File(out.clone()),
    )
    .unwrap();

    let written: Vec<Bulletin> =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written, outcome.notices);
}

#[test]
fn test_missing_input_is_an_error() {
    let err = read_digest(&fixture_path("does-not-exist.txt")).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.txt"), "{err}");
}

#[test]
fn test_run_report_end_to_end_offline() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.tsv");
    let config = AppConfig::builder()
        .enrichment_enabled(false)
        .output_file(Some(out.clone()))
        .build();

    let code = usn_digest::cli::run_report(&fixture_path("usn-digest-2025-05.txt"), &config)
        .unwrap();
    assert_eq!(code, usn_digest::pipeline::exit_codes::SUCCESS);

    let report = std::fs::read_to_string(&out).unwrap();
    assert_eq!(report.lines().count(), 3);
    assert!(report.starts_with(TSV_HEADER));
}
