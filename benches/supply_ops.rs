use criterion::{black_box, criterion_group, criterion_main, Criterion};
use piece_supply::core::{PieceGenerator, Supply};

fn bench_play(c: &mut Criterion) {
    let mut supply = Supply::new(12345);

    c.bench_function("play", |b| {
        b.iter(|| {
            black_box(supply.play()).ok();
        })
    });
}

fn bench_reserve_cycle(c: &mut Criterion) {
    let mut supply = Supply::new(12345);

    c.bench_function("reserve_then_use", |b| {
        b.iter(|| {
            supply.reserve().ok();
            black_box(supply.use_reserve()).ok();
        })
    });
}

fn bench_swap_three(c: &mut Criterion) {
    let mut supply = Supply::new(12345);
    for _ in 0..3 {
        supply.reserve().ok();
    }

    c.bench_function("swap_three", |b| {
        b.iter(|| {
            black_box(supply.swap_three()).ok();
        })
    });
}

fn bench_generator(c: &mut Criterion) {
    let mut generator = PieceGenerator::new(12345);

    c.bench_function("generate_piece", |b| {
        b.iter(|| {
            black_box(generator.next());
        })
    });
}

criterion_group!(
    benches,
    bench_play,
    bench_reserve_cycle,
    bench_swap_three,
    bench_generator
);
criterion_main!(benches);
