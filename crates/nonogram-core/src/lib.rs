//! Core data structures for nonogram solving.
//!
//! This crate provides the grid data model shared by the deduction engine and
//! any interactive front end: per-cell state, per-line run-length clues, and
//! synchronous change notification.
//!
//! # Overview
//!
//! - [`cell`]: [`CellState`], the three-valued deduction state of one cell
//! - [`line`]: [`Orientation`] and [`LineId`], identities for rows and columns
//! - [`clue`]: [`Clue`], validated ordered run lengths for one line
//! - [`grid`]: [`Grid`], flat cell storage with row/column views, clue
//!   configuration, and listener-based change notification
//! - [`error`]: [`ConfigError`] and [`CellConflict`]
//!
//! # Examples
//!
//! ```
//! use nonogram_core::{CellState, Clue, Grid, LineId};
//!
//! let mut grid = Grid::new(2, 2)?;
//! grid.set_row_clues(vec![Clue::new(vec![2])?, Clue::empty()])?;
//! grid.set_column_clues(vec![Clue::new(vec![1])?, Clue::new(vec![1])?])?;
//!
//! grid.set_cell(0, 0, CellState::Filled)?;
//! assert_eq!(grid.line_states(LineId::column(0))[0], CellState::Filled);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod clue;
pub mod error;
pub mod grid;
pub mod line;

// Re-export commonly used types
pub use self::{
    cell::CellState,
    clue::Clue,
    error::{CellConflict, ConfigError},
    grid::{ChangeListener, Grid},
    line::{LineId, Orientation},
};
