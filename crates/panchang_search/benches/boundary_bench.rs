use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_base::GeoLocation;
use panchang_search::{
    BoundarySearchConfig, MeanMotionEphemeris, PanchangConfig, SearchDirection, SearchError,
    find_boundary_time, panchang_for_date, segment_contains, tithi_span,
};
use panchang_time::UtcTime;

fn boundary_bench(c: &mut Criterion) {
    let position = |t: f64| -> Result<f64, SearchError> { Ok((100.0 + 12.19 * t).rem_euclid(360.0)) };
    let check = |pos: f64, n: u8| segment_contains(pos, n, 12.0);
    let cfg = BoundarySearchConfig::tithi();

    let mut group = c.benchmark_group("boundary");
    group.bench_function("linear_forward", |b| {
        b.iter(|| {
            find_boundary_time(
                black_box(0.0),
                9,
                check,
                position,
                SearchDirection::Forward,
                &cfg,
            )
        })
    });
    group.finish();
}

fn panchang_bench(c: &mut Criterion) {
    let epoch = UtcTime::new(2024, 4, 8, 18, 21, 0.0).to_jd();
    let eph = MeanMotionEphemeris::new(epoch, 355.2, 355.2);
    let loc = GeoLocation::new(28.6139, 77.209, 0.0);
    let date = UtcTime::midnight(2024, 4, 9);
    let config = PanchangConfig::default();

    let mut group = c.benchmark_group("panchang");
    group.bench_function("tithi_span", |b| {
        b.iter(|| tithi_span(&eph, black_box(epoch + 0.3), &config.tithi))
    });
    group.bench_function("panchang_for_date", |b| {
        b.iter(|| panchang_for_date(&eph, black_box(&loc), black_box(&date), &config))
    });
    group.finish();
}

criterion_group!(benches, boundary_bench, panchang_bench);
criterion_main!(benches);
