//! `sudoku-solve`: read a puzzle file, solve it, and display the clue and
//! the solution side by side.
//!
//! Exit status: non-zero only for input errors (missing, unreadable, or
//! malformed puzzle file). An unsolvable puzzle is a normal result and
//! exits zero after reporting it.

mod render;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_engine::{Grid, Solver};

#[derive(Debug, Parser)]
#[command(name = "sudoku-solve", version, about)]
struct Args {
    /// Puzzle file: nine lines of nine whitespace-separated digits, 0 = blank
    puzzle: PathBuf,

    /// Parse the file as a single 81-character puzzle string instead
    #[arg(long)]
    compact: bool,

    /// Log every position the search branches on (at debug level)
    #[arg(long)]
    trace: bool,

    /// Plain ASCII output without terminal colors
    #[arg(long)]
    plain: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let clue = load_puzzle(args)?;
    info!("loaded puzzle with {} givens", clue.given_count());

    let solver = Solver::new();
    let solution = if args.trace {
        solver.solve_traced(&clue, &mut |pos, _| debug!("branch at ({}, {})", pos.row, pos.col))
    } else {
        solver.solve(&clue)
    };

    match solution {
        Some(solution) => {
            render::print_boards(&clue, &solution, !args.plain)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("No solution is possible.");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_puzzle(args: &Args) -> Result<Grid> {
    let text = fs::read_to_string(&args.puzzle)
        .with_context(|| format!("couldn't open {}", args.puzzle.display()))?;

    let clue = if args.compact {
        text.parse()
    } else {
        Grid::from_lines(&text)
    };
    clue.with_context(|| format!("couldn't parse {}", args.puzzle.display()))
}
