//! Recursive backtracking search over grid positions.

use crate::grid::{Grid, Position, BLANK, DIMENSION};
use crate::rules;

/// Unit struct solver — stateless, all state is per-call.
///
/// The solver owns the working grid exclusively for the duration of a call.
/// Positions are visited column-major: rows ascending within a column, then
/// the next column from row 0. Candidate digits are tried in ascending order
/// and the first completion found is returned, so the same clue always yields
/// the identical solution.
#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the solved grid if a completion exists.
    pub fn solve(&self, clue: &Grid) -> Option<Grid> {
        self.solve_traced(clue, &mut |_, _| {})
    }

    /// Solve with a trace hook observing the search.
    ///
    /// `trace` is invoked once per search frame with the blank position about
    /// to be branched on and the working grid as the frame found it. The hook
    /// observes only; it cannot alter traversal or undo order.
    pub fn solve_traced(
        &self,
        clue: &Grid,
        trace: &mut dyn FnMut(Position, &Grid),
    ) -> Option<Grid> {
        let mut solution = *clue;
        if self.solve_with(clue, &mut solution, trace) {
            Some(solution)
        } else {
            None
        }
    }

    /// Solve into a caller-owned working grid, pre-initialized to a copy of
    /// the clue.
    ///
    /// Returns `true` and leaves `solution` fully and validly filled on
    /// success. On failure, returns `false` with every originally-blank cell
    /// blank again and every clue cell untouched: each search frame restores
    /// its cell before reporting failure, so the top-level failure leaves no
    /// residue.
    pub fn solve_in_place(&self, clue: &Grid, solution: &mut Grid) -> bool {
        self.solve_with(clue, solution, &mut |_, _| {})
    }

    /// True iff no clue cell duplicates another clue digit in its row,
    /// column, or region.
    ///
    /// A clue that fails this check has no completion, so the search rejects
    /// it up front instead of exhausting the tree to prove the same thing.
    pub fn clue_is_consistent(&self, clue: &Grid) -> bool {
        for row in 0..DIMENSION {
            for col in 0..DIMENSION {
                let pos = Position::new(row, col);
                if clue.get(pos) != BLANK && !rules::position_is_safe(clue, pos) {
                    return false;
                }
            }
        }
        true
    }

    fn solve_with(
        &self,
        clue: &Grid,
        solution: &mut Grid,
        trace: &mut dyn FnMut(Position, &Grid),
    ) -> bool {
        debug_assert!(
            (0..DIMENSION).all(|r| (0..DIMENSION).all(|c| {
                let pos = Position::new(r, c);
                clue.get(pos) == BLANK || clue.get(pos) == solution.get(pos)
            })),
            "working grid must start as a copy of the clue"
        );
        if !self.clue_is_consistent(clue) {
            return false;
        }
        self.search(clue, solution, Position::new(0, 0), trace)
    }

    /// One search frame: fill every blank at or after `pos` in traversal
    /// order, or report that no completion is reachable from this state.
    fn search(
        &self,
        clue: &Grid,
        solution: &mut Grid,
        pos: Position,
        trace: &mut dyn FnMut(Position, &Grid),
    ) -> bool {
        if solution.is_full() {
            return true;
        }

        // End of a column: continue at the top of the next one.
        if pos.row >= DIMENSION {
            return self.search(clue, solution, Position::new(0, pos.col + 1), trace);
        }
        if pos.col >= DIMENSION {
            return solution.is_full();
        }

        // Given cells are skipped without branching.
        if clue.get(pos) != BLANK {
            return self.search(clue, solution, Position::new(pos.row + 1, pos.col), trace);
        }

        trace(pos, solution);

        for digit in 1..=9 {
            solution.set(pos, digit);
            if rules::position_is_safe(solution, pos)
                && self.search(clue, solution, Position::new(pos.row + 1, pos.col), trace)
            {
                return true;
            }
        }

        // Every candidate failed: restore the cell so sibling branches and
        // the parent frame see the grid exactly as this frame found it.
        solution.set(pos, BLANK);
        false
    }
}
