//! Benchmarks for the CPU particle simulation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fountain::{FountainConfig, ParticlePool, Spawner};

/// A pool that has been running long enough to hold `count` particles.
fn warm_pool(count: usize) -> ParticlePool {
    let config = FountainConfig::default().with_max_particles(count);
    let mut pool = ParticlePool::new(config, Spawner::seeded(7));
    while !pool.is_full() {
        pool.step(0.1);
    }
    pool
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut pool = warm_pool(count);
            b.iter(|| pool.step(black_box(1.0 / 60.0)))
        });
    }

    group.finish();
}

fn bench_for_each_alive(c: &mut Criterion) {
    let pool = warm_pool(100_000);

    c.bench_function("for_each_alive_100k", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            pool.for_each_alive(|p| sum += p.position.x);
            black_box(sum)
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut spawner = Spawner::seeded(1);
    c.bench_function("spawn", |b| b.iter(|| black_box(spawner.spawn())));
}

criterion_group!(benches, bench_step, bench_for_each_alive, bench_spawn);
criterion_main!(benches);
