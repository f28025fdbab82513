//! Constraint checking: the safety oracle consulted on every placement.
//!
//! A filled cell is *safe* when its digit does not duplicate another filled
//! digit in the same row, the same column, or the same 3x3 region. Each scope
//! excludes exactly the target cell when scanning for duplicates, so a
//! duplicate sharing the target's row or column inside its region is reported
//! by the region check as well as by the row/column checks.

use crate::grid::{Grid, Position, BLANK, DIMENSION, REGION_DIM};

/// True iff the digit at `pos` does not conflict with any other filled cell
/// in its row, column, or region.
///
/// The cell at `pos` must be non-blank: the checker inspects the value
/// already placed there, not a separate candidate.
pub fn position_is_safe(grid: &Grid, pos: Position) -> bool {
    debug_assert_ne!(grid.get(pos), BLANK, "checking a blank cell");
    row_is_safe(grid, pos) && col_is_safe(grid, pos) && region_is_safe(grid, pos)
}

/// Scan the eight other cells of the row for the value at `pos`.
fn row_is_safe(grid: &Grid, pos: Position) -> bool {
    let value = grid.get(pos);
    for col in 0..DIMENSION {
        if col != pos.col && grid.get(Position::new(pos.row, col)) == value {
            return false;
        }
    }
    true
}

/// Scan the eight other cells of the column for the value at `pos`.
fn col_is_safe(grid: &Grid, pos: Position) -> bool {
    let value = grid.get(pos);
    for row in 0..DIMENSION {
        if row != pos.row && grid.get(Position::new(row, pos.col)) == value {
            return false;
        }
    }
    true
}

/// Scan the eight other cells of the 3x3 region for the value at `pos`.
///
/// Only the target cell itself is excluded from the scan, so duplicates at
/// region cells sharing the target's row or column are rejected here too.
fn region_is_safe(grid: &Grid, pos: Position) -> bool {
    let value = grid.get(pos);
    let r0 = pos.row / REGION_DIM * REGION_DIM;
    let c0 = pos.col / REGION_DIM * REGION_DIM;
    for row in r0..r0 + REGION_DIM {
        for col in c0..c0 + REGION_DIM {
            if (row, col) != (pos.row, pos.col) && grid.get(Position::new(row, col)) == value {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_digit_is_safe() {
        let mut grid = Grid::empty();
        grid.set(Position::new(4, 4), 7);
        assert!(position_is_safe(&grid, Position::new(4, 4)));
    }

    #[test]
    fn row_duplicate_is_unsafe() {
        let mut grid = Grid::empty();
        grid.set(Position::new(2, 1), 6);
        grid.set(Position::new(2, 8), 6);
        assert!(!position_is_safe(&grid, Position::new(2, 1)));
        assert!(!position_is_safe(&grid, Position::new(2, 8)));
    }

    #[test]
    fn col_duplicate_is_unsafe() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 5), 3);
        grid.set(Position::new(7, 5), 3);
        assert!(!position_is_safe(&grid, Position::new(0, 5)));
        assert!(!position_is_safe(&grid, Position::new(7, 5)));
    }

    #[test]
    fn region_duplicate_is_unsafe() {
        // (0, 0) and (1, 1): different row, different column, same region.
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 9);
        grid.set(Position::new(1, 1), 9);
        assert!(!position_is_safe(&grid, Position::new(0, 0)));
        assert!(!position_is_safe(&grid, Position::new(1, 1)));
    }

    #[test]
    fn region_duplicate_sharing_row_is_unsafe() {
        // Same row, same region: rejected by both the row scan and the
        // region scan, which excludes only the exact target cell.
        let mut grid = Grid::empty();
        grid.set(Position::new(3, 3), 2);
        grid.set(Position::new(3, 5), 2);
        assert!(!position_is_safe(&grid, Position::new(3, 3)));
        assert!(!region_is_safe(&grid, Position::new(3, 3)));
    }

    #[test]
    fn region_duplicate_sharing_col_is_unsafe() {
        let mut grid = Grid::empty();
        grid.set(Position::new(6, 7), 4);
        grid.set(Position::new(8, 7), 4);
        assert!(!position_is_safe(&grid, Position::new(6, 7)));
        assert!(!region_is_safe(&grid, Position::new(6, 7)));
    }

    #[test]
    fn different_digits_do_not_conflict() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 1);
        grid.set(Position::new(0, 1), 2);
        grid.set(Position::new(1, 0), 3);
        grid.set(Position::new(1, 1), 4);
        for pos in [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 1),
        ] {
            assert!(position_is_safe(&grid, pos));
        }
    }

    #[test]
    fn duplicate_outside_all_scopes_is_ignored() {
        // Same digit at (0, 0) and (4, 4): different row, column, and region.
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 8);
        grid.set(Position::new(4, 4), 8);
        assert!(position_is_safe(&grid, Position::new(0, 0)));
        assert!(position_is_safe(&grid, Position::new(4, 4)));
    }
}
