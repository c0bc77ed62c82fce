//! Candidate recomputation.

use gridloom_core::{Board, DigitSet};

/// Recomputes every cell's candidate cache from the current board values.
///
/// For every unknown cell, the candidates become `{1..9}` minus the digits
/// already placed in its row, column, or box; for every fixed cell, the
/// candidates become empty. This is a pure function of the current values
/// with no other side effects.
///
/// Candidate caches go stale as soon as any value changes, so this must run
/// before every deterministic technique pass and before the search engine
/// selects a cell to guess.
pub fn recompute_candidates(board: &mut Board) {
    let mut rows = [DigitSet::EMPTY; 9];
    let mut columns = [DigitSet::EMPTY; 9];
    let mut boxes = [DigitSet::EMPTY; 9];
    for cell in board.cells() {
        if let Some(digit) = cell.value() {
            rows[usize::from(cell.row())].insert(digit);
            columns[usize::from(cell.column())].insert(digit);
            boxes[usize::from(cell.box_index())].insert(digit);
        }
    }

    for index in 0..81 {
        let cell = board.cell(index);
        let candidates = if cell.value().is_some() {
            DigitSet::EMPTY
        } else {
            let seen = rows[usize::from(cell.row())]
                | columns[usize::from(cell.column())]
                | boxes[usize::from(cell.box_index())];
            DigitSet::FULL.difference(seen)
        };
        board.set_candidates(index, candidates);
    }
}
