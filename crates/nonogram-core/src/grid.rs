//! The puzzle grid: cell storage, clue configuration, change notification.

use std::fmt::{self, Display};

use crate::{
    CellState, Clue, LineId, Orientation,
    error::{CellConflict, ConfigError},
};

/// A callback invoked with `(x, y)` on every committed cell change.
pub type ChangeListener = Box<dyn FnMut(usize, usize)>;

/// A nonogram grid with per-cell deduction state and per-line clues.
///
/// Cells are stored once, in a single flat row-major buffer; row and column
/// views are index computations over that buffer, so the two access paths can
/// never diverge. Clues are set once after construction and validated against
/// the grid dimensions.
///
/// Registered listeners are invoked synchronously, in registration order, on
/// every committed cell change. Listeners live for the whole session; there
/// is no unsubscribe.
///
/// # Examples
///
/// ```
/// use nonogram_core::{CellState, Clue, Grid, LineId};
///
/// let mut grid = Grid::new(5, 5)?;
/// grid.set_row_clues(vec![
///     Clue::new(vec![5])?,
///     Clue::new(vec![1, 1])?,
///     Clue::new(vec![3])?,
///     Clue::new(vec![1])?,
///     Clue::empty(),
/// ])?;
///
/// assert_eq!(grid.cell(0, 0), CellState::Unknown);
/// assert_eq!(grid.clue(LineId::row(2)).runs(), &[3]);
/// # Ok::<(), nonogram_core::ConfigError>(())
/// ```
pub struct Grid {
    column_count: usize,
    row_count: usize,
    /// Row-major: cell `(x, y)` lives at `y * column_count + x`.
    cells: Vec<CellState>,
    row_clues: Option<Vec<Clue>>,
    column_clues: Option<Vec<Clue>>,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("column_count", &self.column_count)
            .field("row_count", &self.row_count)
            .field("cells", &self.cells)
            .field("row_clues", &self.row_clues)
            .field("column_clues", &self.column_clues)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Grid {
    /// Creates a grid with every cell [`CellState::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDimension`] if either dimension is zero.
    pub fn new(column_count: usize, row_count: usize) -> Result<Self, ConfigError> {
        if column_count == 0 || row_count == 0 {
            return Err(ConfigError::EmptyDimension {
                columns: column_count,
                rows: row_count,
            });
        }
        Ok(Self {
            column_count,
            row_count,
            cells: vec![CellState::Unknown; column_count * row_count],
            row_clues: None,
            column_clues: None,
            listeners: Vec::new(),
        })
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of lines in the given orientation.
    #[must_use]
    #[inline]
    pub fn line_count(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Row => self.row_count,
            Orientation::Column => self.column_count,
        }
    }

    /// Returns the length of any line in the given orientation.
    ///
    /// Rows span all columns and columns span all rows.
    #[must_use]
    #[inline]
    pub fn line_len(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Row => self.column_count,
            Orientation::Column => self.row_count,
        }
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.column_count && y < self.row_count,
            "cell ({x}, {y}) out of range for {}x{} grid",
            self.column_count,
            self.row_count,
        );
        y * self.column_count + x
    }

    /// Returns the state of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index_of(x, y)]
    }

    /// Sets the cell at `(x, y)`, notifying listeners on commit.
    ///
    /// Returns `Ok(false)` if the cell already holds `state` (no-op, no
    /// notification) and `Ok(true)` if the write was committed.
    ///
    /// # Errors
    ///
    /// Returns [`CellConflict`] if the cell is already decided and `state`
    /// differs: decided cells are never overwritten or reverted.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> Result<bool, CellConflict> {
        let idx = self.index_of(x, y);
        let current = self.cells[idx];
        if current == state {
            return Ok(false);
        }
        if current.is_decided() {
            return Err(CellConflict {
                x,
                y,
                current,
                requested: state,
            });
        }
        self.cells[idx] = state;
        self.notify(x, y);
        Ok(true)
    }

    /// Resets every cell to [`CellState::Unknown`], notifying listeners once
    /// per cell that held a decided value.
    ///
    /// Clues are configuration and survive a clear; this restarts a solving
    /// session on the same puzzle.
    pub fn clear(&mut self) {
        for idx in 0..self.cells.len() {
            if self.cells[idx].is_decided() {
                self.cells[idx] = CellState::Unknown;
                let (x, y) = (idx % self.column_count, idx / self.column_count);
                self.notify(x, y);
            }
        }
    }

    /// Returns a snapshot of one line's cell states, in coordinate order.
    ///
    /// # Panics
    ///
    /// Panics if the line index is out of range.
    #[must_use]
    pub fn line_states(&self, line: LineId) -> Vec<CellState> {
        assert!(
            line.index < self.line_count(line.orientation),
            "{line} out of range"
        );
        match line.orientation {
            Orientation::Row => (0..self.column_count)
                .map(|x| self.cells[line.index * self.column_count + x])
                .collect(),
            Orientation::Column => (0..self.row_count)
                .map(|y| self.cells[y * self.column_count + line.index])
                .collect(),
        }
    }

    fn validate_clues(&self, orientation: Orientation, clues: &[Clue]) -> Result<(), ConfigError> {
        let expected = self.line_count(orientation);
        if clues.len() != expected {
            return Err(ConfigError::ClueCountMismatch {
                orientation,
                expected,
                actual: clues.len(),
            });
        }
        let line_len = self.line_len(orientation);
        for (index, clue) in clues.iter().enumerate() {
            let min_len = clue.min_len();
            if min_len > line_len {
                return Err(ConfigError::ClueTooLong {
                    line: LineId { orientation, index },
                    min_len,
                    line_len,
                });
            }
        }
        Ok(())
    }

    /// Sets the row clues, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ClueCountMismatch`] if the number of clues is
    /// not the row count, or [`ConfigError::ClueTooLong`] if a clue cannot
    /// fit into a row.
    pub fn set_row_clues(&mut self, clues: Vec<Clue>) -> Result<(), ConfigError> {
        self.validate_clues(Orientation::Row, &clues)?;
        self.row_clues = Some(clues);
        Ok(())
    }

    /// Sets the column clues, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ClueCountMismatch`] if the number of clues is
    /// not the column count, or [`ConfigError::ClueTooLong`] if a clue cannot
    /// fit into a column.
    pub fn set_column_clues(&mut self, clues: Vec<Clue>) -> Result<(), ConfigError> {
        self.validate_clues(Orientation::Column, &clues)?;
        self.column_clues = Some(clues);
        Ok(())
    }

    /// Returns `true` once both row and column clues have been set.
    #[must_use]
    pub fn has_clues(&self) -> bool {
        self.row_clues.is_some() && self.column_clues.is_some()
    }

    /// Returns the clue for one line.
    ///
    /// # Panics
    ///
    /// Panics if the clues for that orientation were never set, or if the
    /// line index is out of range. Querying before configuration is a
    /// programmer error, not a recoverable state.
    #[must_use]
    pub fn clue(&self, line: LineId) -> &Clue {
        let clues = match line.orientation {
            Orientation::Row => &self.row_clues,
            Orientation::Column => &self.column_clues,
        };
        let clues = clues
            .as_ref()
            .unwrap_or_else(|| panic!("{} clues are not set", line.orientation));
        &clues[line.index]
    }

    /// Returns `true` if the line's filled runs currently form exactly its
    /// clue's pattern.
    ///
    /// Undecided cells count as not filled, so a line can read as satisfied
    /// before it is fully decided; a correctness display uses exactly this
    /// judgement.
    ///
    /// # Panics
    ///
    /// Panics if clues are not set or the line index is out of range.
    #[must_use]
    pub fn is_line_satisfied(&self, line: LineId) -> bool {
        self.clue(line).matches(&self.line_states(line))
    }

    /// Returns `true` once every cell is decided.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|state| state.is_decided())
    }

    /// Registers a listener invoked synchronously with `(x, y)` on every
    /// committed cell change.
    ///
    /// Listeners run in registration order and stay registered for the life
    /// of the grid.
    pub fn subscribe(&mut self, listener: impl FnMut(usize, usize) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, x: usize, y: usize) {
        for listener in &mut self.listeners {
            listener(x, y);
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.row_count {
            for x in 0..self.column_count {
                write!(f, "{}", self.cells[y * self.column_count + x])?;
            }
            if y + 1 < self.row_count {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
