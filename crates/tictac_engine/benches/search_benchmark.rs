use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictac_core::{Board, Mark};
use tictac_engine::{evaluate, search_best_move, SearchConfig, StepClock};

fn opening_position(n: usize, k: usize) -> Board {
    let mut board = Board::new(n, k).unwrap();
    let center = (n / 2) * n + n / 2;
    board.apply_move(center, Mark::X);
    board.apply_move(0, Mark::O);
    board
}

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Evaluate");

    for (n, k) in [(3, 3), (4, 3), (6, 4), (8, 5)] {
        let board = opening_position(n, k);
        group.bench_function(format!("{}x{}_k{}", n, n, k), |b| {
            b.iter(|| evaluate(black_box(&board), Mark::X, Mark::O));
        });
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    group.measurement_time(Duration::from_secs(10));

    // Frozen clock: every iteration runs the full fixed-depth search
    for (n, k, depth) in [(3, 3, 9), (4, 3, 4), (5, 4, 3), (6, 4, 3)] {
        let board = opening_position(n, k);
        let moves = board.available_moves();
        let config = SearchConfig::default().with_max_depth(depth);
        group.bench_function(format!("{}x{}_k{}_d{}", n, n, k, depth), |b| {
            b.iter(|| {
                let clock = StepClock::frozen();
                search_best_move(black_box(&board), &moves, Mark::O, Mark::X, &config, &clock)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_evaluate, benchmark_search);
criterion_main!(benches);
