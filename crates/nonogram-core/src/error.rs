//! Error types for grid construction and mutation.

use crate::{CellState, LineId, Orientation};

/// A clue setup problem, detected before any solving begins.
///
/// Configuration errors are fatal for the session: the caller must fix the
/// clue data and start over.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// A grid dimension was zero.
    #[display("grid dimensions must be positive: {columns}x{rows}")]
    EmptyDimension {
        /// Requested column count.
        columns: usize,
        /// Requested row count.
        rows: usize,
    },
    /// The number of clues does not match the grid dimension.
    #[display("expected {expected} {orientation} clues, got {actual}")]
    ClueCountMismatch {
        /// Orientation of the mismatched clue set.
        orientation: Orientation,
        /// Number of lines in that orientation.
        expected: usize,
        /// Number of clues supplied.
        actual: usize,
    },
    /// A clue cannot fit into its line even at the tightest packing.
    #[display("clue for {line} needs {min_len} cells but the line has {line_len}")]
    ClueTooLong {
        /// The line whose clue is infeasible.
        line: LineId,
        /// Minimum cells the clue requires.
        min_len: usize,
        /// Actual line length.
        line_len: usize,
    },
    /// A clue contained a zero-length run.
    #[display("clue runs must be positive; use an empty clue for a blank line")]
    ZeroRun,
}

/// A write that would change an already decided cell.
///
/// Cells move monotonically from [`CellState::Unknown`] to a decided value;
/// asking a decided cell to take a different value signals a contradiction
/// between the writer and the committed deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell ({x}, {y}) is already {current}, refusing to set it to {requested}")]
pub struct CellConflict {
    /// Column of the contested cell.
    pub x: usize,
    /// Row of the contested cell.
    pub y: usize,
    /// The committed state.
    pub current: CellState,
    /// The state the writer asked for.
    pub requested: CellState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ConfigError::ClueCountMismatch {
            orientation: Orientation::Row,
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "expected 5 row clues, got 4");

        let err = ConfigError::ClueTooLong {
            line: LineId::column(2),
            min_len: 7,
            line_len: 5,
        };
        assert_eq!(
            err.to_string(),
            "clue for column 2 needs 7 cells but the line has 5"
        );

        let err = CellConflict {
            x: 1,
            y: 3,
            current: CellState::Filled,
            requested: CellState::Blank,
        };
        assert_eq!(
            err.to_string(),
            "cell (1, 3) is already #, refusing to set it to ."
        );
    }
}
