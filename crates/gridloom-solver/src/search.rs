//! Depth-first backtracking over guessed assignments.
//!
//! The search runs only when neither deterministic technique can progress.
//! It guesses a value for an unresolved cell and re-enters the full solve
//! loop; a failed branch is undone by restoring the whole board from a
//! snapshot, because deterministic inference inside the nested attempt may
//! have altered many cells beyond the guessed one.

use gridloom_core::{Board, Cell};

use crate::{
    propagate::recompute_candidates,
    solver::{SolveStats, Solver},
};

/// Guesses values for a minimum-candidate cell, recursing into the solve
/// loop for each, until one branch completes the grid or all are exhausted.
///
/// Returns `true` with the solution left on the board, or `false` with the
/// board restored to its pre-guess state. Recursion depth is bounded by the
/// 81 cells, so the call stack needs no explicit management.
pub(crate) fn branch(solver: &Solver, board: &mut Board, stats: &mut SolveStats) -> bool {
    recompute_candidates(board);
    let Some(index) = pick_cell(board) else {
        // No unknown cell has a candidate left: dead end.
        return false;
    };

    let candidates = board.candidates(index);
    let snapshot = board.snapshot();
    for digit in candidates {
        board.place(index, digit);
        stats.guesses += 1;
        if solver.solve_all(board, stats) {
            return true;
        }
        board.restore(&snapshot);
    }
    false
}

/// Selects the unknown cell with the fewest candidates (at least one),
/// breaking ties by lowest index.
fn pick_cell(board: &Board) -> Option<u8> {
    board
        .cells()
        .filter(|cell| cell.value().is_none() && !cell.candidates().is_empty())
        .min_by_key(|cell| cell.candidates().len())
        .map(Cell::index)
}
