//! Benchmarks for digest parsing and report generation.
//!
//! Run with: cargo bench --bench parse_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fmt::Write;
use std::hint::black_box;
use usn_digest::reports::{JsonReporter, ReportGenerator, TsvReporter};
use usn_digest::{parse_digest_str, Bulletin, NoticeFilter};

/// Generate a digest with the given number of notices.
fn generate_digest(count: usize) -> String {
    let mut digest = String::new();
    for i in 0..count {
        let release = if i % 3 == 0 { "22.04 LTS" } else { "24.04 LTS" };
        let _ = write!(
            digest,
            "Subject: [USN-{id}-1] package{id} vulnerabilities\n\
             Ubuntu Security Notice USN-{id}-1\n\
             May {day}, 2025\n\
             \n\
             - Ubuntu {release}\n\
             \n\
             Summary:\n\
             \n\
             Several security issues were fixed in package{id}.\n\
             \n\
             Software Description:\n\
             - package{id}: benchmark package\n\
             \n\
             Details:\n\
             \n\
             It was discovered that package{id} mishandled input. (CVE-2025-{a},\n\
             CVE-2025-{b})\n\
             \n\
             Update instructions:\n\
             \n\
             Ubuntu {release}\n\
             \x20 package{id} 1.0-{id}ubuntu1\n\
             \n\
             References:\n\
             \x20 https://ubuntu.com/security/notices/USN-{id}-1\n",
            id = 7000 + i,
            day = i % 28 + 1,
            a = 10_000 + 2 * i,
            b = 10_001 + 2 * i,
        );
    }
    digest
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_digest");
    for size in [10, 100, 1000] {
        let digest = generate_digest(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &digest, |b, digest| {
            b.iter(|| parse_digest_str(black_box(digest)));
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let notices = parse_digest_str(&generate_digest(1000));
    let filter = NoticeFilter::new(["24.04", "24.04 LTS"]);

    c.bench_function("filter_1000", |b| {
        b.iter(|| filter.apply(black_box(notices.clone())));
    });
}

fn bench_reports(c: &mut Criterion) {
    let notices: Vec<Bulletin> = parse_digest_str(&generate_digest(1000));
    let mut group = c.benchmark_group("report_1000");

    group.bench_function("tsv", |b| {
        let reporter = TsvReporter::new();
        b.iter(|| reporter.generate(black_box(&notices)));
    });
    group.bench_function("json", |b| {
        let reporter = JsonReporter::new();
        b.iter(|| reporter.generate(black_box(&notices)));
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_filter, bench_reports);
criterion_main!(benches);
