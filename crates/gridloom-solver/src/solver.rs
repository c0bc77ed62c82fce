//! The solve orchestrator.

use std::collections::HashMap;

use gridloom_core::{Board, ParseGridError};

use crate::{
    propagate::recompute_candidates,
    search,
    technique::{self, BoxedTechnique},
};

/// Statistics collected during a solve.
///
/// Tracks which techniques were applied and how many times, plus the number
/// of candidate values the search engine tried.
///
/// # Examples
///
/// ```
/// use gridloom_core::Board;
/// use gridloom_solver::Solver;
///
/// let mut board = Board::from_line(
///     "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
/// )?;
/// let (solved, stats) = Solver::with_all_techniques().solve(&mut board);
/// assert!(solved);
/// println!("steps: {}, guesses: {}", stats.total_steps, stats.guesses);
/// # Ok::<(), gridloom_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct SolveStats {
    /// Map of technique names to the number of cells each one fixed.
    pub applications: HashMap<&'static str, usize>,
    /// Total number of cells fixed by techniques.
    pub total_steps: usize,
    /// Number of candidate values tried by the search engine.
    pub guesses: usize,
}

impl SolveStats {
    /// Creates a new empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cells a specific technique fixed.
    #[must_use]
    pub fn count(&self, technique_name: &str) -> usize {
        self.applications.get(technique_name).copied().unwrap_or(0)
    }

    /// Returns `true` if any technique fixed at least one cell.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

/// A solver that drives the three solving tiers to a fixpoint.
///
/// The solver repeatedly propagates candidates and applies the first
/// technique that fixes a cell; when no technique progresses it hands the
/// board to the backtracking search, which guesses a value and re-enters
/// this loop. Solving stops when the board is complete or every guess path
/// is exhausted.
///
/// # Examples
///
/// ```
/// use gridloom_core::Board;
/// use gridloom_solver::Solver;
///
/// let solver = Solver::with_all_techniques();
/// let mut board = Board::from_line(&"0".repeat(81))?;
///
/// let (solved, _stats) = solver.solve(&mut board);
/// assert!(solved);
/// # Ok::<(), gridloom_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    techniques: Vec<BoxedTechnique>,
}

impl Solver {
    /// Creates a new solver with the specified techniques.
    ///
    /// Techniques are tried in the order they appear; each step restarts
    /// from the first technique after any progress.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a new solver with all techniques in their standard order:
    /// naked single, then hidden single.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self {
            techniques: technique::all_techniques(),
        }
    }

    /// Recomputes candidates and applies the first technique that fixes a
    /// cell.
    ///
    /// Returns `true` if a cell was fixed, `false` if no technique could
    /// progress (deterministic inference has stalled).
    pub fn step(&self, board: &mut Board, stats: &mut SolveStats) -> bool {
        recompute_candidates(board);
        for technique in &self.techniques {
            if technique.apply(board) {
                *stats.applications.entry(technique.name()).or_default() += 1;
                stats.total_steps += 1;
                return true;
            }
        }
        false
    }

    /// Solves the board in place.
    ///
    /// Returns whether the final board state is solved: complete AND every
    /// row, column, and box holding each digit exactly once. On `false` the
    /// board is left in its last reached state: the original grid if no
    /// progress was possible, or a rejected search branch otherwise. That
    /// final validity check is defensive; a complete-but-invalid board can
    /// only arise from contradictory givens.
    pub fn solve(&self, board: &mut Board) -> (bool, SolveStats) {
        let mut stats = SolveStats::default();
        let solved = self.solve_all(board, &mut stats);
        (solved, stats)
    }

    /// The fixpoint loop shared by the top-level solve and every recursive
    /// search attempt.
    pub(crate) fn solve_all(&self, board: &mut Board, stats: &mut SolveStats) -> bool {
        while !board.is_complete() {
            if self.step(board, stats) {
                continue;
            }
            // Deterministic inference has stalled; guess. Success leaves
            // the solution on the board, failure leaves the rejected
            // branch -- a give-up exit, not an error.
            return search::branch(self, board, stats);
        }
        board.is_solved()
    }
}

/// The outcome of solving one puzzle line.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Whether the board reached a complete, valid solution.
    pub solved: bool,
    /// The final board: the solution, or the last state reached.
    pub board: Board,
    /// Technique and guess counts.
    pub stats: SolveStats,
}

/// Parses an 81-character puzzle line and solves it.
///
/// # Errors
///
/// Returns [`ParseGridError`] if the line is not exactly 81 characters of
/// digits 0-9; this is reported before any solving is attempted. An
/// unsolvable puzzle is not an error: the report carries `solved == false`
/// and the last board state reached.
///
/// # Examples
///
/// ```
/// use gridloom_solver::solve_line;
///
/// let report = solve_line(
///     "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
/// )?;
/// assert!(report.solved);
/// # Ok::<(), gridloom_core::ParseGridError>(())
/// ```
pub fn solve_line(line: &str) -> Result<SolveReport, ParseGridError> {
    let mut board = Board::from_line(line)?;
    let solver = Solver::with_all_techniques();
    let (solved, stats) = solver.solve(&mut board);
    Ok(SolveReport {
        solved,
        board,
        stats,
    })
}
