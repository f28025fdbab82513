//! Basic example of using the Sudoku engine

use sudoku_engine::{Grid, Solver};

fn main() {
    let puzzle = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let clue: Grid = puzzle.parse().expect("valid puzzle string");

    println!("Puzzle:");
    println!("{}", clue);
    println!("Given cells: {}", clue.given_count());
    println!("Empty cells: {}", clue.empty_count());

    let solver = Solver::new();
    match solver.solve(&clue) {
        Some(solution) => {
            println!("\nSolution:");
            println!("{}", solution);
        }
        None => println!("\nNo solution is possible."),
    }
}
