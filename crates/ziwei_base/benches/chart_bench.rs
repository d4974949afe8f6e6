use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_base::{
    BirthData, Gender, compute_chart, life_palace_position, normalize_position, place_stars,
};

fn ring_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    group.bench_function("normalize_position", |b| {
        b.iter(|| normalize_position(black_box(-25)))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let birth = BirthData::new(1991, 7, 12, 12, Gender::Male);

    let mut group = c.benchmark_group("chart");
    group.bench_function("life_palace_position", |b| {
        b.iter(|| life_palace_position(black_box(&birth)))
    });
    group.bench_function("place_stars", |b| b.iter(|| place_stars(black_box(12))));
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(&birth)))
    });
    group.finish();
}

criterion_group!(benches, ring_bench, chart_bench);
criterion_main!(benches);
