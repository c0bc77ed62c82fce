//! Test utilities for the solver crate.

use gridloom_core::Board;

/// Parses a whitespace-formatted grid literal into a board.
///
/// Digits 1-9 are givens; `_`, `.`, and `0` mark unknown cells; whitespace
/// is ignored, so grids can be written row by row:
///
/// ```text
/// 53_ _7_ ___
/// 6__ 195 ___
/// ...
/// ```
///
/// # Panics
///
/// Panics if the remaining characters do not form a valid 81-cell grid.
#[track_caller]
pub(crate) fn board_from_str(s: &str) -> Board {
    let line: String = s
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch {
            '_' | '.' => '0',
            ch => ch,
        })
        .collect();
    Board::from_line(&line).unwrap()
}
