//! Performance benchmarks for the extraction and sorting stages.
//!
//! Reverse lookups are excluded; they are network-bound.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use ipinfo::address::AddressSet;
use ipinfo::extract::extract_candidates;
use ipinfo::netutil::classify;

/// Sample log excerpt for benchmarking
const SAMPLE_LOG: &str = r#"2024-09-17T12:34:56Z sshd[123]: Failed password for root from 203.0.113.7 port 52144
2024-09-17T12:34:57Z sshd[123]: Failed password for root from 203.0.113.7 port 52145
2024-09-17T12:35:01Z nginx: 198.51.100.23 - - "GET / HTTP/1.1" 200 612
2024-09-17T12:35:02Z nginx: 10.0.0.12 - - "GET /health HTTP/1.1" 200 2
2024-09-17T12:35:03Z kernel: listening on 0.0.0.0:443 (v1.24.0)
2024-09-17T12:35:04Z dhcpd: DHCPACK on 192.168.1.44 to aa:bb:cc:dd:ee:ff
"#;

/// Log with `lines` entries spread over many distinct addresses
fn generate_log(lines: usize) -> String {
    let mut log = String::with_capacity(lines * 80);
    for i in 0..lines {
        log.push_str(&format!(
            "{i:06} conn from {}.{}.{}.{} port {} build 1.2.3\n",
            (i % 223) + 1,
            (i / 7) % 256,
            (i / 3) % 256,
            i % 256,
            40000 + (i % 20000)
        ));
    }
    log
}

/// Benchmark regex extraction over different input sizes
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    group.bench_function("sample_log", |b| {
        b.iter(|| extract_candidates(black_box(SAMPLE_LOG.as_bytes())).count())
    });

    for lines in [100usize, 1_000, 10_000] {
        let log = generate_log(lines);
        group.throughput(Throughput::Bytes(log.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &log, |b, log| {
            b.iter(|| extract_candidates(black_box(log.as_bytes())).count())
        });
    }

    group.finish();
}

/// Benchmark dedup + sort + classify
fn bench_sort_and_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_and_classify");

    for lines in [1_000usize, 10_000] {
        let log = generate_log(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &log, |b, log| {
            b.iter(|| {
                let sorted =
                    AddressSet::from_candidates(extract_candidates(black_box(log.as_bytes())))
                        .into_sorted();
                sorted.iter().filter(|a| classify(a.ip()) == ipinfo::AddressScope::Local).count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_sort_and_classify);
criterion_main!(benches);
