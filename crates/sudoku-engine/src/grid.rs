//! The 9x9 board and puzzle-text parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Overall size of the grid.
pub const DIMENSION: usize = 9;
/// Size of a sub-region.
pub const REGION_DIM: usize = 3;
/// Symbol used to indicate a blank grid position.
pub const BLANK: u8 = 0;

/// A (row, col) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index (0-8) of the 3x3 region containing this position.
    pub fn region_index(&self) -> usize {
        (self.row / REGION_DIM) * REGION_DIM + self.col / REGION_DIM
    }
}

/// Errors produced when parsing puzzle text.
///
/// Out-of-range cells are a form of [`InvalidDigit`]: cells are parsed as
/// single characters/tokens, so anything outside `0`-`9` fails as a bad
/// token rather than as a separate range error.
///
/// [`InvalidDigit`]: ParseGridError::InvalidDigit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cells.
    #[error("expected 81 cells, found {0}")]
    WrongCellCount(usize),
    /// A cell token was not a single digit 0-9.
    #[error("invalid digit {token:?} at cell {index}")]
    InvalidDigit { index: usize, token: String },
}

/// A 9x9 board of digits 1-9, with `0` marking a blank cell.
///
/// A puzzle involves two grids: the immutable *clue* grid holding the given
/// values, and a *solution* grid that starts as a copy of the clue and is
/// filled in by the solver. `Grid` is `Copy`, so the working copy is just an
/// assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; DIMENSION]; DIMENSION],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// An all-blank grid.
    pub fn empty() -> Self {
        Self {
            cells: [[BLANK; DIMENSION]; DIMENSION],
        }
    }

    /// Create a grid directly from a cell matrix.
    pub fn from_cells(cells: [[u8; DIMENSION]; DIMENSION]) -> Self {
        Self { cells }
    }

    /// Get the digit at a position (`0` = blank).
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Set the digit at a position. No constraint checking is performed.
    pub fn set(&mut self, pos: Position, value: u8) {
        self.cells[pos.row][pos.col] = value;
    }

    /// True if no blank cell remains.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&v| v != BLANK))
    }

    /// True if the grid is full and every row, column, and region holds each
    /// digit 1-9 exactly once.
    pub fn is_solved(&self) -> bool {
        // Bits 1-9 set; a blank cell sets bit 0 and fails the comparison.
        const ALL_DIGITS: u16 = 0b11_1111_1110;

        for i in 0..DIMENSION {
            let mut row_mask = 0u16;
            let mut col_mask = 0u16;
            for j in 0..DIMENSION {
                row_mask |= 1 << self.cells[i][j];
                col_mask |= 1 << self.cells[j][i];
            }
            if row_mask != ALL_DIGITS || col_mask != ALL_DIGITS {
                return false;
            }
        }

        for region in 0..DIMENSION {
            let r0 = region / REGION_DIM * REGION_DIM;
            let c0 = region % REGION_DIM * REGION_DIM;
            let mut mask = 0u16;
            for r in r0..r0 + REGION_DIM {
                for c in c0..c0 + REGION_DIM {
                    mask |= 1 << self.cells[r][c];
                }
            }
            if mask != ALL_DIGITS {
                return false;
            }
        }

        true
    }

    /// Number of non-blank cells.
    pub fn given_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&v| v != BLANK)
            .count()
    }

    /// Number of blank cells.
    pub fn empty_count(&self) -> usize {
        DIMENSION * DIMENSION - self.given_count()
    }

    /// Parse the puzzle-file layout: nine lines of nine whitespace-separated
    /// digit tokens, `0` marking a blank. Any whitespace layout with exactly 81
    /// single-digit tokens is accepted.
    pub fn from_lines(text: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::empty();
        let mut count = 0;

        for (index, token) in text.split_whitespace().enumerate() {
            if index >= DIMENSION * DIMENSION {
                return Err(ParseGridError::WrongCellCount(index + 1));
            }
            let value = match *token.as_bytes() {
                [b] if b.is_ascii_digit() => b - b'0',
                _ => {
                    return Err(ParseGridError::InvalidDigit {
                        index,
                        token: token.to_string(),
                    })
                }
            };
            grid.cells[index / DIMENSION][index % DIMENSION] = value;
            count += 1;
        }

        if count != DIMENSION * DIMENSION {
            return Err(ParseGridError::WrongCellCount(count));
        }
        Ok(grid)
    }

    /// Render as a single 81-character puzzle string, `0` for blanks.
    pub fn to_string_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|v| char::from(b'0' + v))
            .collect()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parse the compact 81-character form, e.g. `"530070000..."`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.chars().count() != DIMENSION * DIMENSION {
            return Err(ParseGridError::WrongCellCount(s.chars().count()));
        }
        let mut grid = Self::empty();
        for (index, ch) in s.chars().enumerate() {
            let value = ch
                .to_digit(10)
                .ok_or_else(|| ParseGridError::InvalidDigit {
                    index,
                    token: ch.to_string(),
                })?;
            grid.cells[index / DIMENSION][index % DIMENSION] = value as u8;
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 && r % REGION_DIM == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                    if c % REGION_DIM == 0 {
                        write!(f, "| ")?;
                    }
                }
                if value == BLANK {
                    write!(f, ".")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
