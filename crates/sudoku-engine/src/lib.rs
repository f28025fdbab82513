//! Sudoku solving engine.
//!
//! The engine is built from two components composed linearly:
//!
//! - [`Grid`]: a fixed 9x9 board of digits, with `0` marking a blank cell,
//!   plus parsing from puzzle text and a completeness/validity check.
//! - [`Solver`]: recursive backtracking search that fills every blank cell
//!   of a working copy of the clue, consulting the constraint checker in
//!   [`rules`] before committing each trial digit and undoing on dead ends.
//!
//! The engine performs no I/O: callers hand it an already-parsed clue grid
//! and receive a solved grid or a negative result. An unsolvable puzzle is
//! a normal return value, not an error.
//!
//! # Examples
//!
//! ```
//! use sudoku_engine::{Grid, Solver};
//!
//! let clue: Grid =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//!         .parse()
//!         .unwrap();
//!
//! let solver = Solver::new();
//! let solution = solver.solve(&clue).expect("puzzle has a solution");
//! assert!(solution.is_solved());
//! ```

pub mod grid;
pub mod rules;
pub mod solver;

pub use self::{
    grid::{Grid, ParseGridError, Position, BLANK, DIMENSION, REGION_DIM},
    solver::Solver,
};
