//! End-to-end checks against the sample puzzle files.

use sudoku_engine::{Grid, Position, Solver, BLANK, DIMENSION};

const PUZZLE1: &str = include_str!("puzzles/puzzle1.txt");
const PUZZLE2: &str = include_str!("puzzles/puzzle2.txt");
const BAD_PUZZLE: &str = include_str!("puzzles/badpuzzle.txt");

fn assert_solves(text: &str) {
    let clue = Grid::from_lines(text).unwrap();
    let solver = Solver::new();
    assert!(solver.clue_is_consistent(&clue));
    let solution = solver.solve(&clue).expect("puzzle should be solvable");
    assert!(solution.is_solved());
    for row in 0..DIMENSION {
        for col in 0..DIMENSION {
            let pos = Position::new(row, col);
            if clue.get(pos) != BLANK {
                assert_eq!(solution.get(pos), clue.get(pos));
            }
        }
    }
}

#[test]
fn puzzle1_solves() {
    assert_solves(PUZZLE1);
}

#[test]
fn puzzle2_solves() {
    assert_solves(PUZZLE2);
}

#[test]
fn badpuzzle_has_no_solution() {
    let clue = Grid::from_lines(BAD_PUZZLE).unwrap();
    assert!(Solver::new().solve(&clue).is_none());
}
