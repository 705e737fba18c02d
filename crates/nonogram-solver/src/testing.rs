//! Test utilities for line and puzzle construction.
//!
//! These helpers turn compact literals into the engine's types so tests can
//! state fixtures inline: `#` for filled, `.` for blank, `?` or `_` for
//! unknown, and comma-separated run lists like `"3,1"` (with `"0"` for an
//! empty clue).

use nonogram_core::{CellState, Clue, Grid};

/// Parses a line literal into cell states.
///
/// Whitespace is ignored, so literals can be split for readability.
///
/// # Panics
///
/// Panics on any character other than `#`, `.`, `?`, `_` or whitespace.
///
/// # Examples
///
/// ```
/// use nonogram_core::CellState;
/// use nonogram_solver::testing::parse_line;
///
/// assert_eq!(
///     parse_line("#?."),
///     vec![CellState::Filled, CellState::Unknown, CellState::Blank],
/// );
/// ```
#[must_use]
pub fn parse_line(s: &str) -> Vec<CellState> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '#' => CellState::Filled,
            '.' => CellState::Blank,
            '?' | '_' => CellState::Unknown,
            _ => panic!("invalid cell character {c:?}"),
        })
        .collect()
}

/// Parses a clue literal: comma-separated run lengths, or `"0"` for a line
/// with no filled cells.
///
/// # Panics
///
/// Panics if the literal is not a valid clue.
///
/// # Examples
///
/// ```
/// use nonogram_solver::testing::parse_clue;
///
/// assert_eq!(parse_clue("3,1").runs(), &[3, 1]);
/// assert!(parse_clue("0").is_empty());
/// ```
#[must_use]
pub fn parse_clue(s: &str) -> Clue {
    let s = s.trim();
    if s == "0" {
        return Clue::empty();
    }
    let runs = s
        .split(',')
        .map(|run| run.trim().parse().expect("invalid run length"))
        .collect();
    Clue::new(runs).expect("invalid clue")
}

/// Builds a grid from clue literals, one per row (top to bottom) and one per
/// column (left to right).
///
/// # Panics
///
/// Panics if a literal is malformed or a clue does not fit its line.
///
/// # Examples
///
/// ```
/// use nonogram_solver::testing::grid_from_clues;
///
/// let grid = grid_from_clues(&["1", "1"], &["1", "1"]);
/// assert_eq!(grid.column_count(), 2);
/// assert_eq!(grid.row_count(), 2);
/// assert!(grid.has_clues());
/// ```
#[must_use]
pub fn grid_from_clues(rows: &[&str], columns: &[&str]) -> Grid {
    let mut grid = Grid::new(columns.len(), rows.len()).expect("empty grid dimensions");
    grid.set_row_clues(rows.iter().map(|s| parse_clue(s)).collect())
        .expect("invalid row clues");
    grid.set_column_clues(columns.iter().map(|s| parse_clue(s)).collect())
        .expect("invalid column clues");
    grid
}
