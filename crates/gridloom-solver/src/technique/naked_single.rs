use gridloom_core::Board;

use super::{BoxedTechnique, Technique};

const NAME: &str = "naked single";

/// A technique that fixes a cell with only one remaining candidate.
///
/// After propagation, cells are scanned in index order; the first unknown
/// cell whose candidate set has exactly one member is fixed to that value.
/// First-found in index order is a deliberate tie-break policy, kept so
/// solve traces stay reproducible.
///
/// # Examples
///
/// ```
/// use gridloom_core::Board;
/// use gridloom_solver::{recompute_candidates, technique::{NakedSingle, Technique}};
///
/// let mut board = Board::from_line(
///     "123456780000000000000000000000000000000000000000000000000000000000000000000000000",
/// )?;
/// recompute_candidates(&mut board);
///
/// let fixed = NakedSingle::new().apply(&mut board);
/// assert!(fixed);
/// # Ok::<(), gridloom_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> bool {
        for index in 0..81 {
            let cell = board.cell(index);
            if cell.value().is_some() {
                continue;
            }
            if let Some(digit) = cell.candidates().as_single() {
                board.place(index, digit);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use gridloom_core::Digit;

    use super::*;
    use crate::{recompute_candidates, testing::board_from_str};

    #[test]
    fn test_fixes_single_candidate_cell() {
        // Row 0 leaves only the 9 for its last cell.
        let mut board = board_from_str(&format!("12345678_{}", "_".repeat(72)));
        recompute_candidates(&mut board);

        assert!(NakedSingle::new().apply(&mut board));
        assert_eq!(board.value(8), Some(Digit::D9));
    }

    #[test]
    fn test_fixes_one_cell_per_invocation_in_index_order() {
        // Two naked singles: cell 8 (row 0 completes to 9) and cell 80
        // (row 8 completes to 1).
        let mut board = board_from_str(&format!(
            "12345678_{}23456789_",
            "_".repeat(63)
        ));
        recompute_candidates(&mut board);

        assert!(NakedSingle::new().apply(&mut board));
        assert_eq!(board.value(8), Some(Digit::D9));
        assert_eq!(board.value(80), None);

        recompute_candidates(&mut board);
        assert!(NakedSingle::new().apply(&mut board));
        assert_eq!(board.value(80), Some(Digit::D1));
    }

    #[test]
    fn test_no_progress_without_singles() {
        let mut board = board_from_str(&"_".repeat(81));
        recompute_candidates(&mut board);

        assert!(!NakedSingle::new().apply(&mut board));
    }

    #[test]
    fn test_skips_contradictory_cells() {
        // Cell 8 has no candidates at all: its row already holds 1-8 and
        // its column holds a 9. Naked single must not touch it.
        let mut board = board_from_str(&format!("12345678_________9{}", "_".repeat(63)));
        recompute_candidates(&mut board);

        assert!(!NakedSingle::new().apply(&mut board));
        assert_eq!(board.value(8), None);
    }
}
