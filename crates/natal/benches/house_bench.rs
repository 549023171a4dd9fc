use criterion::{black_box, criterion_group, criterion_main, Criterion};
use natal::western::HouseSystem;

fn bench_house_of(c: &mut Criterion) {
    let houses = HouseSystem::from_longitudes([
        110.2, 133.9, 158.4, 186.7, 220.1, 255.8, 290.2, 313.9, 338.4, 6.7, 40.1, 75.8,
    ]);

    c.bench_function("house_of", |b| {
        b.iter(|| houses.house_of(black_box(95.0)))
    });
}

criterion_group!(benches, bench_house_of);
criterion_main!(benches);
