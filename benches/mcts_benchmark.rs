#[macro_use]
extern crate criterion;

use connect_four_mcts::{Budget, Mcts, MctsConfig};
use criterion::{black_box, BenchmarkId, Criterion};
use std::time::Duration;

fn bench_mcts_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_search");
    group.measurement_time(Duration::from_secs(10));

    // Searching the empty opening position at increasing iteration budgets.
    for &iterations in &[100u64, 1_000, 5_000] {
        group.bench_with_input(
            BenchmarkId::new("opening_position/iterations", iterations),
            &iterations,
            |b, &iterations| {
                b.iter(|| {
                    let mut mcts = Mcts::new(MctsConfig::default().with_seed(1));
                    black_box(mcts.search(&[], Budget::Iterations(iterations)))
                })
            },
        );
    }

    // Searching a mid-game position with a handful of moves already played.
    let midgame = [3, 2, 4, 4, 3, 1];
    for &iterations in &[100u64, 1_000, 5_000] {
        group.bench_with_input(
            BenchmarkId::new("midgame_position/iterations", iterations),
            &iterations,
            |b, &iterations| {
                b.iter(|| {
                    let mut mcts = Mcts::new(MctsConfig::default().with_seed(1));
                    black_box(mcts.search(&midgame, Budget::Iterations(iterations)))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_mcts_search);
criterion_main!(benches);
