use std::path::PathBuf;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use drishti_frames::{NutationSeries, era00, nut00b, pmat06, pnm00b, s06};
use drishti_time::TwoPartTime;

fn truncated_bench(c: &mut Criterion) {
    let tt = TwoPartTime::new(2_453_736.0, 0.5);

    let mut group = c.benchmark_group("frames_embedded");
    group.bench_function("nut00b", |b| b.iter(|| nut00b(black_box(tt))));
    group.bench_function("pnm00b", |b| b.iter(|| pnm00b(black_box(tt))));
    group.bench_function("pmat06", |b| b.iter(|| pmat06(black_box(tt))));
    group.bench_function("s06", |b| {
        b.iter(|| s06(black_box(tt), black_box(5.791e-4), black_box(4.02e-5)))
    });
    group.bench_function("era00", |b| b.iter(|| era00(black_box(tt))));
    group.finish();
}

fn full_series_bench(c: &mut Criterion) {
    let tt = TwoPartTime::new(2_453_736.0, 0.5);
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/series");
    let series = match NutationSeries::load(&dir) {
        Ok(s) => s,
        Err(_) => {
            eprintln!("Skipping 2000A benchmarks: nutation series not found");
            return;
        }
    };

    let mut group = c.benchmark_group("frames_2000a");
    group.bench_function("nut06a", |b| b.iter(|| series.nut06a(black_box(tt))));
    group.bench_function("pnm06a", |b| b.iter(|| series.pnm06a(black_box(tt))));
    group.bench_function("xys06a", |b| b.iter(|| series.xys06a(black_box(tt))));
    group.finish();
}

criterion_group!(benches, truncated_bench, full_series_bench);
criterion_main!(benches);
