/*
 * Flock Simulation Benchmark
 *
 * This file contains benchmarks for the flock simulation. It measures a
 * single agent step against a full neighbor list and the whole tick loop,
 * where neighbor list construction is quadratic in the population.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use frame_boids::{Agent, Flock, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

// Benchmark one agent steering against n neighbors
fn bench_agent_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("agent_step");

    for num_neighbors in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_neighbors), num_neighbors, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);

            // Neighbors scattered around the agent so most are in sight
            let positions: Vec<Vector2> = (0..n)
                .map(|_| Vector2::new(rng.gen_range(340.0..460.0), rng.gen_range(240.0..360.0)))
                .collect();
            let directions: Vec<Vector2> = (0..n)
                .map(|_| Vector2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0)))
                .collect();

            b.iter(|| {
                let mut agent = Agent::with_heading(0, 400.0, 300.0, 0.0);
                agent.step(black_box(&positions), black_box(&directions));
                black_box(agent);
            });
        });
    }

    group.finish();
}

// Benchmark the overall tick loop
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_tick");

    for num_agents in [20, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_agents), num_agents, |b, &n| {
            let mut flock = Flock::new(n, 800.0, 600.0, StdRng::seed_from_u64(7));

            b.iter(|| {
                black_box(flock.tick());
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_agent_step, bench_tick
}

criterion_main!(benches);
