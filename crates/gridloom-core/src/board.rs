//! The 81-cell grid, line serialization, and state snapshots.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    cell::Cell, digit::Digit, digit_set::DigitSet, error::ParseGridError, house::House,
};

/// A 9×9 Sudoku board.
///
/// A board owns exactly 81 [`Cell`]s in row-major order. It is constructed
/// once per puzzle from an 81-character line, mutated in place while
/// solving, and discarded afterwards; it is never resized.
///
/// The board itself maintains only the per-cell invariant that a placed
/// value clears that cell's candidate cache. Keeping peer candidates
/// current is the solver's propagation pass, not the board's concern.
///
/// # Examples
///
/// ```
/// use gridloom_core::{Board, Digit};
///
/// let line =
///     "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
/// let mut board = Board::from_line(line)?;
///
/// assert!(!board.is_complete());
/// assert_eq!(board.value(2), Some(Digit::D3));
///
/// board.place(0, Digit::D4);
/// assert_eq!(board.value(0), Some(Digit::D4));
/// # Ok::<(), gridloom_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
}

impl Board {
    /// Parses a board from an 81-character line of digits, row-major,
    /// with '0' marking unknown cells.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError::WrongLength`] if the line is not exactly
    /// 81 characters, or [`ParseGridError::InvalidCharacter`] if any
    /// character is not a digit. Nothing is constructed on failure.
    pub fn from_line(line: &str) -> Result<Self, ParseGridError> {
        let len = line.chars().count();
        if len != 81 {
            return Err(ParseGridError::WrongLength { len });
        }

        let mut values = [None; 81];
        for (index, ch) in line.chars().enumerate() {
            match ch.to_digit(10) {
                Some(0) => {}
                #[expect(clippy::cast_possible_truncation)]
                Some(digit) => values[index] = Some(Digit::from_value(digit as u8)),
                None => return Err(ParseGridError::InvalidCharacter { index, ch }),
            }
        }

        #[expect(clippy::cast_possible_truncation)]
        let cells = std::array::from_fn(|index| Cell::new(index as u8, values[index]));
        Ok(Self { cells })
    }

    /// Renders the board as an 81-character line of digits, row-major,
    /// with '0' for unknown cells.
    ///
    /// Parsing the result back reproduces identical cell values and derived
    /// coordinates; candidate caches are reset and must be recomputed.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.value() {
                Some(digit) => char::from(b'0' + digit.value()),
                None => '0',
            })
            .collect()
    }

    /// Captures the current cell values as an owned, immutable snapshot.
    ///
    /// Together with [`restore`](Self::restore) this gives the search engine
    /// whole-state capture with value semantics: no aliasing can leak a
    /// nested attempt's mutations past a failed branch.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let values =
            std::array::from_fn(|index| self.cells[index].value().map_or(0, Digit::value));
        Snapshot { values }
    }

    /// Restores all cell values from a snapshot, in O(81).
    ///
    /// Candidate caches are cleared, not recomputed; the next propagation
    /// pass rebuilds them.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        for (cell, &value) in self.cells.iter_mut().zip(&snapshot.values) {
            let value = (value != 0).then(|| Digit::from_value(value));
            cell.set_value(value);
        }
    }

    /// Returns the cell at the given row-major index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub fn cell(&self, index: u8) -> &Cell {
        &self.cells[usize::from(index)]
    }

    /// Returns the value of the cell at `index`, or `None` while unknown.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub fn value(&self, index: u8) -> Option<Digit> {
        self.cell(index).value()
    }

    /// Returns the cached candidate set of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub fn candidates(&self, index: u8) -> DigitSet {
        self.cell(index).candidates()
    }

    /// Fixes the cell at `index` to `digit`, clearing its candidate cache.
    ///
    /// Peer candidates are not updated; they are stale until the next
    /// propagation pass.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    pub fn place(&mut self, index: u8, digit: Digit) {
        self.cells[usize::from(index)].set_value(Some(digit));
    }

    /// Replaces the candidate cache of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    pub fn set_candidates(&mut self, index: u8, candidates: DigitSet) {
        self.cells[usize::from(index)].set_candidates(candidates);
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns the set of digits already placed in the given house.
    #[must_use]
    pub fn house_values(&self, house: House) -> DigitSet {
        let mut values = DigitSet::new();
        for index in house.cells() {
            if let Some(digit) = self.value(index) {
                values.insert(digit);
            }
        }
        values
    }

    /// Returns `true` if every cell has a value.
    ///
    /// Completeness alone does not make a solution; see
    /// [`is_solved`](Self::is_solved).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.value().is_some())
    }

    /// Returns `true` if the board is complete and every row, column, and
    /// box contains each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        for house in House::ALL {
            let mut seen = DigitSet::new();
            for index in house.cells() {
                let Some(digit) = self.value(index) else {
                    return false;
                };
                if seen.contains(digit) {
                    return false;
                }
                seen.insert(digit);
            }
        }
        true
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

impl FromStr for Board {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

/// An immutable capture of a board's 81 cell values.
///
/// A snapshot is the digit-string rendering of the board in value form;
/// restoring from one is the whole-state undo used by the backtracking
/// search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    values: [u8; 81],
}
