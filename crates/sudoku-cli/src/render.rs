//! Side-by-side board rendering.
//!
//! The renderer is a pure consumer: it takes the clue and the solution as
//! read-only grids and produces terminal output. Blank cells display as
//! empty; given digits and solved digits are styled differently so the two
//! boards read at a glance.

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use sudoku_engine::{Grid, Position, BLANK, DIMENSION, REGION_DIM};

/// Gap between the two boards.
const GAP: &str = "   ";
/// Width of one rendered board row.
const BOARD_WIDTH: usize = 25;

/// Colors for the two-board display.
#[derive(Debug, Clone)]
pub struct BoardStyle {
    /// Borders and region separators.
    pub border: Color,
    /// Digits given in the clue.
    pub given: Color,
    /// Digits filled in by the solver.
    pub solved: Color,
    /// Board labels.
    pub label: Color,
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            border: Color::DarkGrey,
            given: Color::White,
            solved: Color::Cyan,
            label: Color::Yellow,
        }
    }
}

/// Render one grid as plain text lines, blanks empty.
pub fn board_lines(grid: &Grid) -> Vec<String> {
    let border = "+-------+-------+-------+".to_string();
    let mut lines = Vec::with_capacity(13);

    for row in 0..DIMENSION {
        if row % REGION_DIM == 0 {
            lines.push(border.clone());
        }
        let mut line = String::with_capacity(BOARD_WIDTH);
        for col in 0..DIMENSION {
            if col % REGION_DIM == 0 {
                line.push_str("| ");
            }
            let value = grid.get(Position::new(row, col));
            if value == BLANK {
                line.push(' ');
            } else {
                line.push(char::from(b'0' + value));
            }
            line.push(' ');
        }
        line.push('|');
        lines.push(line);
    }
    lines.push(border);
    lines
}

/// The two boards side by side as plain text, with labels.
pub fn side_by_side(clue: &Grid, solution: &Grid) -> String {
    let mut out = format!("{:<width$}{}{}\n", "Clue", GAP, "Solution", width = BOARD_WIDTH);
    for (left, right) in board_lines(clue).iter().zip(board_lines(solution)) {
        out.push_str(left);
        out.push_str(GAP);
        out.push_str(&right);
        out.push('\n');
    }
    out
}

/// Print the two boards, optionally with terminal colors.
pub fn print_boards(clue: &Grid, solution: &Grid, color: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if !color {
        return stdout.write_all(side_by_side(clue, solution).as_bytes());
    }

    let style = BoardStyle::default();
    queue!(
        stdout,
        SetForegroundColor(style.label),
        Print(format!(
            "{:<width$}{}{}\n",
            "Clue",
            GAP,
            "Solution",
            width = BOARD_WIDTH
        )),
    )?;

    let border = "+-------+-------+-------+";
    for row in 0..DIMENSION {
        if row % REGION_DIM == 0 {
            queue_border_line(&mut stdout, border, &style)?;
        }
        queue_board_row(&mut stdout, clue, clue, row, &style)?;
        queue!(stdout, Print(GAP))?;
        queue_board_row(&mut stdout, solution, clue, row, &style)?;
        queue!(stdout, Print("\n"))?;
    }
    queue_border_line(&mut stdout, border, &style)?;

    queue!(stdout, ResetColor)?;
    stdout.flush()
}

fn queue_border_line(out: &mut impl Write, border: &str, style: &BoardStyle) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(style.border),
        Print(border),
        Print(GAP),
        Print(border),
        Print("\n"),
    )
}

/// Queue one row of `grid`, coloring cells by whether they were given in
/// `clue`. For the clue board itself, pass the clue as both arguments.
fn queue_board_row(
    out: &mut impl Write,
    grid: &Grid,
    clue: &Grid,
    row: usize,
    style: &BoardStyle,
) -> io::Result<()> {
    for col in 0..DIMENSION {
        if col % REGION_DIM == 0 {
            queue!(out, SetForegroundColor(style.border), Print("| "))?;
        }
        let pos = Position::new(row, col);
        let value = grid.get(pos);
        if value == BLANK {
            queue!(out, Print("  "))?;
        } else {
            let color = if clue.get(pos) != BLANK {
                style.given
            } else {
                style.solved
            };
            queue!(out, SetForegroundColor(color), Print(format!("{value} ")))?;
        }
    }
    queue!(out, SetForegroundColor(style.border), Print("|"))
}
