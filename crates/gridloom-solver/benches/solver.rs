//! Benchmarks for whole-puzzle solving.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridloom_core::Board;
use gridloom_solver::Solver;

const EASY: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
const CLASSIC: &str =
    "003020600900305001001806400008102900700000008006708200002609500800203009005010300";

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("easy", EASY.to_string()),
        ("classic", CLASSIC.to_string()),
        ("empty", "0".repeat(81)),
    ];

    let solver = Solver::with_all_techniques();

    for (param, line) in &puzzles {
        let board = Board::from_line(line).unwrap();
        c.bench_with_input(BenchmarkId::new("solve", param), &board, |b, board| {
            b.iter_batched_ref(
                || hint::black_box(board.clone()),
                |board| {
                    let (solved, stats) = solver.solve(board);
                    hint::black_box((solved, stats))
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
