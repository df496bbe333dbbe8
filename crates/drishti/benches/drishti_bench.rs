use criterion::{Criterion, black_box, criterion_group, criterion_main};
use drishti::*;

fn facade_bench(c: &mut Criterion) {
    if init(&EnvironmentConfig::embedded()).is_err() {
        eprintln!("Skipping facade benchmarks: environment init failed");
        return;
    }
    let date = UtcDate::new(2013, 4, 2, 23, 15, 43.55);
    let site = Site::new(-0.527_800_806, -1.234_585_6, 2738.0);
    let weather = Weather {
        pressure: 731.0,
        temperature: 12.8,
        humidity: 0.59,
        wavelength: 0.55,
    };
    let star = CatalogStar::fixed(2.76, 0.5);

    let mut group = c.benchmark_group("facade");
    group.bench_function("parse_date", |b| {
        b.iter(|| black_box("2013-04-02T23:15:43.55Z").parse::<UtcDate>())
    });
    group.bench_function("observe", |b| {
        b.iter(|| observe(black_box(&star), date, &site, &weather))
    });
    group.bench_function("local_apparent_sidereal_time", |b| {
        b.iter(|| local_apparent_sidereal_time(black_box(date), &site))
    });
    group.finish();
}

criterion_group!(benches, facade_bench);
criterion_main!(benches);
