// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use tessel_core::math::{interval::Interval, interval_vector::IntervalVector};
use tessel_frontier::{
    cell::Cell,
    config::FrontierConfig,
    cost::CostStrategy,
    dual::DualFrontier,
    policy::AlternationPolicy,
    ranked::RankedFrontier,
};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Random two-dimensional cells with the goal variable at index 1.
fn random_cells(n: usize, seed: u64) -> Vec<Cell<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|depth| {
            let x: f64 = rng.random_range(-100.0..100.0);
            let goal: f64 = rng.random_range(0.0..1000.0);
            let width: f64 = rng.random_range(0.01..10.0);
            let region = IntervalVector::from_bounds(&[[x, x + width], [goal, goal + width]]);
            Cell::new(region)
                .with_bound_estimate(Interval::new(goal, goal + 10.0 * width))
                .with_heuristic_weight(rng.random_range(0.0..1.0))
                .with_depth(depth as u32)
        })
        .collect()
}

fn dual_frontier() -> DualFrontier<f64> {
    let config = FrontierConfig::builder()
        .first(CostStrategy::GoalLowerBound { goal_var: 1 })
        .second(CostStrategy::WeightedTightness)
        .alternation(AlternationPolicy::Strict)
        .initial_best_bound(1500.0)
        .build()
        .unwrap();
    DualFrontier::from_config(config).unwrap()
}

fn bench_ranked_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranked_push_pop");
    for &n in &SIZES {
        let cells = random_cells(n, 7);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &cells, |b, cells| {
            b.iter(|| {
                let mut frontier =
                    RankedFrontier::new(CostStrategy::GoalLowerBound { goal_var: 1 });
                for cell in cells.iter().cloned() {
                    frontier.push(cell);
                }
                while let Ok(cell) = frontier.pop() {
                    black_box(cell);
                }
            })
        });
    }
    group.finish();
}

fn bench_dual_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("dual_push_pop");
    for &n in &SIZES {
        let cells = random_cells(n, 11);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &cells, |b, cells| {
            b.iter(|| {
                let mut frontier = dual_frontier();
                for cell in cells.iter().cloned() {
                    frontier.push(cell);
                }
                while let Ok(cell) = frontier.pop() {
                    black_box(cell);
                }
            })
        });
    }
    group.finish();
}

fn bench_dual_update_best_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("dual_update_best_bound");
    for &n in &SIZES {
        let cells = random_cells(n, 13);
        let mut filled = dual_frontier();
        for cell in cells {
            filled.push(cell);
        }
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &filled, |b, filled| {
            b.iter_batched(
                || filled.clone(),
                |mut frontier| {
                    // Halves the goal range, pruning roughly half the cells.
                    black_box(frontier.update_best_bound(500.0));
                    frontier
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ranked_push_pop,
    bench_dual_push_pop,
    bench_dual_update_best_bound
);
criterion_main!(benches);
