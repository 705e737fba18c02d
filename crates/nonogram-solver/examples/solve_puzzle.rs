//! Example demonstrating puzzle solving from clue files.
//!
//! This example shows how to:
//! - Build a `Grid` from row and column clues
//! - Run a `SolveSession` to its fixpoint
//! - Inspect the outcome, the solved grid, and the session statistics
//!
//! # Usage
//!
//! Solve the built-in 10x10 demo puzzle:
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Solve a puzzle from a file:
//!
//! ```sh
//! cargo run --example solve_puzzle -- puzzle.txt
//! ```
//!
//! The file starts with `<columns> <rows>`, followed by one clue per line:
//! first the row clues top to bottom, then the column clues left to right.
//! A clue is a comma-separated run list; `0` means a line with no filled
//! cells:
//!
//! ```text
//! 5 5
//! 1
//! 1
//! 5
//! 1
//! 1
//! 1
//! 1
//! 5
//! 1
//! 1
//! ```
//!
//! Print the grid after every resolve step:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --trace-steps
//! ```

use std::{error::Error, fs, path::PathBuf, process};

use clap::Parser;
use nonogram_core::Grid;
use nonogram_solver::{
    SolveSession, SolveStatus,
    testing::{grid_from_clues, parse_clue},
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file; without one, a built-in 10x10 demo puzzle is solved.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the grid after every resolve step.
    #[arg(long)]
    trace_steps: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut grid = match &args.file {
        Some(path) => load_puzzle(&fs::read_to_string(path)?)?,
        None => demo_puzzle(),
    };

    let mut session = SolveSession::new(&mut grid)?;
    if args.trace_steps {
        while session.step(&mut grid)? {
            println!("{grid}\n");
        }
    } else {
        session.solve(&mut grid)?;
    }

    println!("{grid}");
    let stats = session.stats();
    match session.status() {
        SolveStatus::Solved => println!(
            "solved: {} steps, {} cells decided",
            stats.steps(),
            stats.cells_decided(),
        ),
        SolveStatus::Stuck => println!(
            "stuck after {} steps: {} lines unresolved, hypothesis search needed",
            stats.steps(),
            session.remaining_lines(),
        ),
    }
    Ok(())
}

/// Concentric squares, fully line-deducible.
fn demo_puzzle() -> Grid {
    let clues = [
        "10",
        "1,1",
        "1,6,1",
        "1,1,1,1",
        "1,1,2,1,1",
        "1,1,2,1,1",
        "1,1,1,1",
        "1,6,1",
        "1,1",
        "10",
    ];
    grid_from_clues(&clues, &clues)
}

fn load_puzzle(text: &str) -> Result<Grid, Box<dyn Error>> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header = lines.next().ok_or("puzzle file is empty")?;
    let mut dims = header.split_whitespace();
    let columns: usize = dims.next().ok_or("missing column count")?.parse()?;
    let rows: usize = dims.next().ok_or("missing row count")?.parse()?;

    let clues: Vec<_> = lines.map(parse_clue).collect();
    if clues.len() != rows + columns {
        return Err(format!(
            "expected {} clues ({rows} rows + {columns} columns), got {}",
            rows + columns,
            clues.len(),
        )
        .into());
    }
    let (row_clues, column_clues) = clues.split_at(rows);

    let mut grid = Grid::new(columns, rows)?;
    grid.set_row_clues(row_clues.to_vec())?;
    grid.set_column_clues(column_clues.to_vec())?;
    Ok(grid)
}
