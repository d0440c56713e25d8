use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kuji::draws::{parse_range, SeededRandom};
use kuji::{DrawEngine, Labels};

fn bench_draws(c: &mut Criterion) {
    let mut engine = DrawEngine::new(SeededRandom::new(1), Labels::default());

    c.bench_function("flip_coin", |b| b.iter(|| engine.flip_coin()));
    c.bench_function("roll_d6", |b| b.iter(|| engine.roll_die(black_box(6))));
    c.bench_function("draw_range_wide", |b| {
        b.iter(|| engine.draw_range(black_box(i64::MIN / 2), black_box(i64::MAX / 2)))
    });
    c.bench_function("parse_range", |b| b.iter(|| parse_range(black_box(" -100 "), black_box("250"))));
}

criterion_group!(benches, bench_draws);
criterion_main!(benches);
