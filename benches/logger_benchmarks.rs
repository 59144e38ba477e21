//! Criterion benchmarks for sourced_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sourced_logger::info;
use sourced_logger::prelude::*;
use std::sync::Arc;

fn sink_logger(level: LogLevel, format: OutputFormat) -> Logger {
    let engine = Engine::builder()
        .level(level)
        .format(format)
        .output(std::io::sink())
        .build();
    Logger::from_engine(Arc::new(engine))
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_emitted_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("emitted_records");
    group.throughput(Throughput::Elements(1));

    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Logfmt] {
        let logger = sink_logger(LogLevel::Info, format).with("request_id", "abc-123");
        let args: [FieldValue; 3] = ["request".into(), "served".into(), 200.into()];

        group.bench_with_input(
            BenchmarkId::new("method", format!("{:?}", format)),
            &logger,
            |b, logger| {
                b.iter(|| logger.info(black_box(&args)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("macro", format!("{:?}", format)),
            &logger,
            |b, logger| {
                b.iter(|| info!(logger; "request", "served", black_box(200)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_suppressed_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("suppressed_records");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Warn, OutputFormat::Text);
    let args: [FieldValue; 2] = ["expensive".into(), 42.into()];

    group.bench_function("debug_below_threshold", |b| {
        b.iter(|| logger.debug(black_box(&args)));
    });

    group.bench_function("is_enabled", |b| {
        b.iter(|| logger.engine().is_enabled(black_box(LogLevel::Debug)));
    });

    group.finish();
}

// ============================================================================
// Field Chaining Benchmarks
// ============================================================================

fn bench_with_chaining(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_chaining");

    let logger = sink_logger(LogLevel::Info, OutputFormat::Text);

    for depth in [1usize, 4, 16] {
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let chained = (0..depth).fold(logger.clone(), |acc, i| {
                    acc.with(format!("key_{}", i), i as u64)
                });
                black_box(chained)
            });
        });
    }

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        let logger = sink_logger(LogLevel::Info, OutputFormat::Json);
        group.throughput(Throughput::Elements((threads * 100) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|id| {
                        let logger = logger.with("thread", id as u64);
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                logger.info(&["message".into(), i.into()]);
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_emitted_records,
    bench_suppressed_records,
    bench_with_chaining,
    bench_concurrent_logging,
);
criterion_main!(benches);
