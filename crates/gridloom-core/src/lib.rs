//! Core data structures for the Gridloom Sudoku solver.
//!
//! This crate provides the board model the solving engine operates on:
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9
//! - [`digit_set`]: A 9-bit set of digits, used for candidate tracking
//! - [`house`]: Rows, columns, and 3×3 boxes as first-class values
//! - [`cell`]: A single grid position with its value and candidate cache
//! - [`board`]: The 81-cell grid, line serialization, and state snapshots
//! - [`error`]: Parse errors for malformed puzzle lines
//!
//! # Examples
//!
//! ```
//! use gridloom_core::{Board, Digit};
//!
//! let line =
//!     "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
//! let board = Board::from_line(line)?;
//!
//! assert_eq!(board.value(2), Some(Digit::D3));
//! assert_eq!(board.to_line(), line);
//! # Ok::<(), gridloom_core::ParseGridError>(())
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod error;
pub mod house;

pub use self::{
    board::{Board, Snapshot},
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    error::ParseGridError,
    house::House,
};
