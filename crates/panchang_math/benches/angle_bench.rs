use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_math::{angular_difference, in_range, normalize_360};

fn angle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("angle");
    group.bench_function("normalize_360_far", |b| {
        b.iter(|| normalize_360(black_box(-123_456.789)))
    });
    group.bench_function("angular_difference", |b| {
        b.iter(|| angular_difference(black_box(12.5), black_box(351.25)))
    });
    group.bench_function("in_range_wrapping", |b| {
        b.iter(|| in_range(black_box(2.0), black_box(346.67), black_box(0.0)))
    });
    group.finish();
}

criterion_group!(benches, angle_bench);
criterion_main!(benches);
