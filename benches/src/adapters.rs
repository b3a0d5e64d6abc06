use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use futures::io::Cursor;
use outcomes::prelude::*;
use tokio::runtime::Runtime;

/// Date strings where every `failure_every`-th entry is invalid
fn generate_inputs(count: usize, failure_every: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if failure_every > 0 && i % failure_every == failure_every - 1 {
                format!("bad-{i}")
            } else {
                format!("{:04}-{:02}-{:02}", 1970 + i % 50, i % 12 + 1, i % 28 + 1)
            }
        })
        .collect()
}

fn generate_csv(count: usize, failure_every: usize) -> Vec<u8> {
    let mut csv = String::from("date\n");
    for line in generate_inputs(count, failure_every) {
        csv.push_str(&line);
        csv.push('\n');
    }
    csv.into_bytes()
}

fn parse_date(input: &String) -> Result<CalendarDate, DomainError> {
    input.parse()
}

/// Compare the adapters against a plain `Result` pipeline on clean input
fn bench_adapter_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapter_overhead");

    for size in [1_000, 10_000, 100_000] {
        let inputs = generate_inputs(size, 0);

        group.bench_with_input(BenchmarkId::new("plain", size), &inputs, |b, inputs| {
            b.iter(|| {
                let parsed: Result<Vec<CalendarDate>, DomainError> =
                    inputs.iter().map(parse_date).collect();
                black_box(parsed)
            });
        });

        group.bench_with_input(BenchmarkId::new("rethrowing", size), &inputs, |b, inputs| {
            b.iter(|| {
                let parsed: Result<Vec<CalendarDate>, Aborted> =
                    inputs.iter().map(rethrowing(parse_date)).collect();
                black_box(parsed)
            });
        });

        group.bench_with_input(BenchmarkId::new("capturing", size), &inputs, |b, inputs| {
            b.iter(|| {
                let parsed: Partitioned<CalendarDate> =
                    inputs.iter().map(capturing(parse_date)).collect();
                black_box(parsed)
            });
        });
    }

    group.finish();
}

/// Cost of capturing as the share of failing inputs grows
fn bench_failure_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("failure_density");

    for (name, failure_every) in [("none", 0), ("one_in_100", 100), ("one_in_10", 10), ("one_in_2", 2)] {
        let inputs = generate_inputs(10_000, failure_every);

        group.bench_with_input(BenchmarkId::from_parameter(name), &inputs, |b, inputs| {
            b.iter(|| {
                let outcomes: Vec<Outcome<CalendarDate>> =
                    inputs.iter().map(capturing(parse_date)).collect();
                black_box(failures_of(&outcomes).count())
            });
        });
    }

    group.finish();
}

/// Complete CSV pipeline in both failure modes
fn bench_csv_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_pipeline");
    let runtime = Runtime::new().unwrap();

    for size in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("fail_safe", size), &size, |b, &size| {
            b.to_async(&runtime).iter_batched(
                || generate_csv(size, 10),
                |csv_data| async move {
                    let rows = CsvRecordStream::new(Cursor::new(csv_data));
                    let mut session = ProcessingSession::new(SilentSkip);
                    let report = session.process_stream(rows.capture(parse_row)).await;

                    let mut output = Vec::new();
                    write_dates(report.outcomes.successes(), &mut output)
                        .await
                        .unwrap();
                    black_box(output);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("fail_fast", size), &size, |b, &size| {
            b.to_async(&runtime).iter_batched(
                || generate_csv(size, 0),
                |csv_data| async move {
                    use futures::TryStreamExt;

                    let rows = CsvRecordStream::new(Cursor::new(csv_data));
                    let dated: Vec<DatedRow> =
                        rows.rethrow(parse_row).try_collect().await.unwrap();

                    let mut output = Vec::new();
                    write_dates(&dated, &mut output).await.unwrap();
                    black_box(output);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_adapter_overhead,
    bench_failure_density,
    bench_csv_pipeline
);
criterion_main!(benches);
