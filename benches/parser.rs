//! Parser benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tas_script::app::Config;
use tas_script::{format_script, parse_command, parse_loose, parse_strict};

fn bench_parse_strict(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    // Well-formed action lines
    let lines: Vec<String> = (0..1000)
        .map(|i| format!("{:>4},R,J,AL,F,{}.5,0.75", i, i % 360))
        .collect();
    group.throughput(Throughput::Elements(lines.len() as u64));

    group.bench_function("strict", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(parse_strict(black_box(line), true).ok());
            }
        })
    });

    group.finish();
}

fn bench_parse_loose(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    // Sloppy action lines that only the lenient parser accepts
    let lines: Vec<String> = (0..1000).map(|i| format!("{}rjalux f{}", i, i % 360)).collect();
    group.throughput(Throughput::Elements(lines.len() as u64));

    group.bench_function("loose", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(parse_loose(black_box(line), true).ok());
            }
        })
    });

    group.finish();
}

fn bench_parse_command(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let lines = ["console load 1", "Set, Player.Speed, 100", "Read file.tas 3 10"];
    group.throughput(Throughput::Elements(lines.len() as u64));

    group.bench_function("command", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(parse_command(black_box(line)).ok());
            }
        })
    });

    group.finish();
}

fn bench_format_script(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    // Mixed content (typical script)
    let script = "#Start\nconsole load 1\n  15,R,J\n3rx\n   1,F,90,0.5\n".repeat(500);
    group.throughput(Throughput::Bytes(script.len() as u64));

    let config = Config::default();
    group.bench_function("format_script", |b| {
        b.iter(|| black_box(format_script(black_box(&script), &config)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_strict,
    bench_parse_loose,
    bench_parse_command,
    bench_format_script
);

criterion_main!(benches);
