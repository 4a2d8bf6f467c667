//! Benchmarks for litlist transformation performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test listing conversion at various source sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use litlist::{CommentMarker, Dialect, LineReader, Listing, ListingOptions};
use std::io::Cursor;

/// Creates a synthetic Go source with alternating doc comments and code.
fn create_test_source(function_count: usize) -> String {
    let mut source = String::from("// Package bench exercises the listing transformer.\npackage bench\n\n");

    for i in 0..function_count {
        source.push_str(&format!(
            "// F{i} returns its argument plus {i}.\n\
             //\n\
             // It exists only to give the benchmark some prose.\n\
             func F{i}(x int) int {{\n\
             \tif x < 0 {{\n\
             \t\treturn -x + {i}\n\
             \t}}\n\
             \treturn x + {i}\n\
             }}\n\n"
        ));
    }

    source
}

/// Benchmark each dialect at various sizes.
fn bench_dialects(c: &mut Criterion) {
    let options = ListingOptions::default().without_date();
    let mut group = c.benchmark_group("transform");

    for function_count in [10, 100, 1000].iter() {
        let source = create_test_source(*function_count);
        group.throughput(Throughput::Bytes(source.len() as u64));

        for dialect in [Dialect::Markdown, Dialect::LatexVerbatim, Dialect::LatexListing] {
            let listing = Listing::new(dialect, &options);
            group.bench_with_input(
                BenchmarkId::new(dialect.to_string(), function_count),
                &source,
                |b, source| {
                    b.iter(|| listing.transform_str("bench.go", black_box(source)).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Benchmark reading one very long line through a small buffer.
fn bench_long_lines(c: &mut Criterion) {
    let line = "x".repeat(1 << 20);

    for capacity in [64, 4096].iter() {
        c.bench_function(&format!("long_line_capacity_{}", capacity), |b| {
            b.iter(|| {
                let mut reader = LineReader::with_capacity(*capacity, Cursor::new(black_box(line.as_bytes())));
                reader.next_line().unwrap()
            });
        });
    }
}

/// Benchmark marker matching.
fn bench_marker(c: &mut Criterion) {
    let marker = CommentMarker::default();

    c.bench_function("strip_prose", |b| {
        b.iter(|| marker.strip(black_box("    //   A documentation line")));
    });

    c.bench_function("strip_code", |b| {
        b.iter(|| marker.strip(black_box("\treturn x + 1 // trailing")));
    });
}

criterion_group!(benches, bench_marker, bench_long_lines, bench_dialects);
criterion_main!(benches);
