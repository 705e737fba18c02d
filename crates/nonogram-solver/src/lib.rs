//! Nonogram deduction engine.
//!
//! This crate solves nonogram (picture logic) puzzles by pure single-line
//! deduction: for each row and column it enumerates every placement of the
//! clue's runs consistent with the cells decided so far, commits the cells
//! all placements agree on, and propagates the consequences to the crossing
//! lines until no further deduction is possible. There is no guessing and no
//! cross-line hypothesis search; puzzles that need backtracking end
//! [`SolveStatus::Stuck`] with the partial grid intact.
//!
//! # Overview
//!
//! - [`analysis`]: the line constraint enumerator, [`analyze_line`]
//! - [`rank`]: the scheduling priority estimate, [`placement_rank`]
//! - [`session`]: the propagation scheduler, [`SolveSession`]
//! - [`testing`]: literal parsers for fixtures in tests and examples
//!
//! # Examples
//!
//! ```
//! use nonogram_core::{Clue, Grid};
//! use nonogram_solver::{SolveSession, SolveStatus};
//!
//! // A 5x5 plus sign.
//! let mut grid = Grid::new(5, 5)?;
//! let arm = || Clue::new(vec![1]);
//! let bar = || Clue::new(vec![5]);
//! grid.set_row_clues(vec![arm()?, arm()?, bar()?, arm()?, arm()?])?;
//! grid.set_column_clues(vec![arm()?, arm()?, bar()?, arm()?, arm()?])?;
//!
//! let mut session = SolveSession::new(&mut grid)?;
//! assert_eq!(session.solve(&mut grid)?, SolveStatus::Solved);
//! assert_eq!(grid.to_string(), "..#..\n..#..\n#####\n..#..\n..#..");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analysis;
pub mod rank;
pub mod session;
pub mod testing;

// Re-export commonly used types
pub use self::{
    analysis::{LineAnalysis, analyze_line},
    rank::placement_rank,
    session::{SolveSession, SolveStats, SolveStatus, SolverError},
};
