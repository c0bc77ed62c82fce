use gridloom_core::{Board, DigitSet, House};

use super::{BoxedTechnique, Technique};

const NAME: &str = "hidden single";

/// A technique that fixes a digit with only one possible cell in a house.
///
/// A "hidden single" occurs when a digit has exactly one legal cell within
/// a row, column, or box, even though that cell may hold other candidates
/// too. Houses are scanned in [`House::ALL`] order (rows, then columns,
/// then boxes) and missing digits in ascending order; the first hit is
/// fixed and the pass returns immediately. Both orders are deliberate
/// tie-break policies, kept so solve traces stay reproducible.
///
/// # Examples
///
/// ```
/// use gridloom_core::{Board, Digit};
/// use gridloom_solver::{recompute_candidates, technique::{HiddenSingle, Technique}};
///
/// let mut board = Board::from_line(&"0".repeat(81))?;
/// recompute_candidates(&mut board);
///
/// // Strike 5 from every cell of row 0 except cell 3.
/// for index in 0..9 {
///     if index != 3 {
///         let mut candidates = board.candidates(index);
///         candidates.remove(Digit::D5);
///         board.set_candidates(index, candidates);
///     }
/// }
///
/// assert!(HiddenSingle::new().apply(&mut board));
/// assert_eq!(board.value(3), Some(Digit::D5));
/// # Ok::<(), gridloom_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> bool {
        for house in House::ALL {
            let placed = board.house_values(house);
            for digit in DigitSet::FULL.difference(placed) {
                let mut sole = None;
                let mut unique = true;
                for index in house.cells() {
                    let cell = board.cell(index);
                    if cell.value().is_none() && cell.candidates().contains(digit) {
                        if sole.is_some() {
                            unique = false;
                            break;
                        }
                        sole = Some(index);
                    }
                }
                if unique && let Some(index) = sole {
                    board.place(index, digit);
                    return true;
                }
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

    /// Strikes `digit` from the candidate caches of all listed cells.
    fn strike(board: &mut Board, indices: impl IntoIterator<Item = u8>, digit: Digit) {
        for index in indices {
            let mut candidates = board.candidates(index);
            candidates.remove(digit);
            board.set_candidates(index, candidates);
        }
    }

    fn empty_board() -> Board {
        let mut board = board_from_str(&"_".repeat(81));
        recompute_candidates(&mut board);
        board
    }

    #[test]
    fn test_hidden_single_in_row() {
        let mut board = empty_board();
        // 5 is possible only at cell 3 of row 0.
        strike(
            &mut board,
            House::Row { y: 0 }.cells().filter(|&i| i != 3),
            Digit::D5,
        );

        assert!(HiddenSingle::new().apply(&mut board));
        assert_eq!(board.value(3), Some(Digit::D5));
    }

    #[test]
    fn test_hidden_single_in_column() {
        let mut board = empty_board();
        // 7 is possible only at cell 41 (row 4) of column 5.
        strike(
            &mut board,
            House::Column { x: 5 }.cells().filter(|&i| i != 41),
            Digit::D7,
        );

        assert!(HiddenSingle::new().apply(&mut board));
        assert_eq!(board.value(41), Some(Digit::D7));
    }

    #[test]
    fn test_hidden_single_in_box() {
        let mut board = empty_board();
        // 9 is possible only at the center cell of the center box.
        strike(
            &mut board,
            House::Box { index: 4 }.cells().filter(|&i| i != 40),
            Digit::D9,
        );

        assert!(HiddenSingle::new().apply(&mut board));
        assert_eq!(board.value(40), Some(Digit::D9));
    }

    #[test]
    fn test_rows_take_priority_over_boxes() {
        let mut board = empty_board();
        // Hidden single for 4 in row 5 (cell 47) and for 2 in box 0
        // (cell 10). The row hit wins even though the box one has the
        // lower digit and lower cell index.
        strike(
            &mut board,
            House::Row { y: 5 }.cells().filter(|&i| i != 47),
            Digit::D4,
        );
        strike(
            &mut board,
            House::Box { index: 0 }.cells().filter(|&i| i != 10),
            Digit::D2,
        );

        assert!(HiddenSingle::new().apply(&mut board));
        assert_eq!(board.value(47), Some(Digit::D4));
        assert_eq!(board.value(10), None);
    }

    #[test]
    fn test_lowest_digit_wins_within_a_house() {
        let mut board = empty_board();
        // Two hidden singles in row 0: 3 at cell 6 and 7 at cell 2.
        strike(
            &mut board,
            House::Row { y: 0 }.cells().filter(|&i| i != 6),
            Digit::D3,
        );
        strike(
            &mut board,
            House::Row { y: 0 }.cells().filter(|&i| i != 2),
            Digit::D7,
        );

        assert!(HiddenSingle::new().apply(&mut board));
        assert_eq!(board.value(6), Some(Digit::D3));
        assert_eq!(board.value(2), None);
    }

    #[test]
    fn test_no_progress_without_hidden_singles() {
        let mut board = empty_board();
        assert!(!HiddenSingle::new().apply(&mut board));
    }

    #[test]
    fn test_ignores_digits_already_placed_in_house() {
        let mut board = board_from_str(&format!("5{}", "_".repeat(80)));
        recompute_candidates(&mut board);
        // Simulate a stale cache that still lists the placed 5 as a
        // candidate of one row-0 cell. Only missing digits are scanned,
        // so the 5 must not be re-derived.
        let mut candidates = board.candidates(3);
        candidates.insert(Digit::D5);
        board.set_candidates(3, candidates);

        assert!(!HiddenSingle::new().apply(&mut board));
        assert_eq!(board.value(3), None);
    }
}
