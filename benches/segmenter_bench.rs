//! Benchmarks for cast segmentation and row extraction.
//!
//! Run with: `cargo bench --bench segmenter_bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ctd_processor::constants::SECTION_DELIMITER;
use ctd_processor::parser::{extract_rows, parse_text, segment_lines};

/// Build an export with `casts` casts of `levels` measurements each.
fn synthetic_export(casts: usize, levels: usize) -> String {
    let mut out = String::new();
    for cast in 0..casts {
        out.push_str(SECTION_DELIMITER);
        out.push('\n');
        out.push_str(&format!("CAST,,{},WOD Unique Cast Number,WOD code\n", cast));
        out.push_str("Latitude,,44.565,decimal degrees,,\n");
        out.push_str("Longitude,,-63.9917,decimal degrees,,\n");
        out.push_str(&format!("Year,,{},,,\n", 1960 + cast % 50));
        out.push_str("Month,,7,,,\n");
        out.push_str("Day,,2,,,\n");
        out.push_str("VARIABLES ,Depth,F,O,Temperatur,F,O,Salinity,F,O,\n");
        out.push_str("UNITS,m, , ,degrees C, , ,PSS, , ,\n");
        for level in 0..levels {
            // Every tenth level has no salinity
            let salinity = if level % 10 == 9 { "" } else { "31.2" };
            out.push_str(&format!(
                "{},{:.2},0, ,{:.1},0, ,{},0, ,\n",
                level + 1,
                level as f64 * 9.92,
                14.9 - level as f64 * 0.01,
                salinity
            ));
        }
        out.push_str("END OF VARIABLES SECTION\n");
    }
    out
}

fn bench_parse_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_text");

    for casts in [10, 100, 1000] {
        let export = synthetic_export(casts, 100);
        group.throughput(Throughput::Bytes(export.len() as u64));
        group.bench_with_input(BenchmarkId::new("casts", casts), &export, |b, export| {
            b.iter(|| parse_text(black_box(export)));
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let export = synthetic_export(100, 100);
    let (casts, _) = segment_lines(export.lines());

    let mut group = c.benchmark_group("stages");
    group.bench_function("segment", |b| {
        b.iter(|| segment_lines(black_box(export.lines())));
    });
    group.bench_function("extract", |b| {
        b.iter(|| extract_rows(black_box(&casts)));
    });
    group.finish();
}

criterion_group!(benches, bench_parse_text, bench_stages);
criterion_main!(benches);
