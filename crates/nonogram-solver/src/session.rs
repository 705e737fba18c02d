//! The propagation scheduler.
//!
//! A [`SolveSession`] drives deduction on one [`Grid`] to a fixpoint: it
//! keeps per-line dirty/rank metadata, repeatedly picks the most promising
//! dirty line, runs the line enumerator on it, commits the forced cells, and
//! reacts to the resulting change notifications by re-dirtying the crossing
//! lines.

use std::{cell::RefCell, rc::Rc};

use log::{debug, trace};
use nonogram_core::{CellConflict, Grid, LineId, Orientation};

use crate::{analysis::analyze_line, rank::placement_rank};

/// Errors and terminal outcomes of a solving session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The grid's row or column clues were never set.
    #[display("row and column clues must be set before solving")]
    CluesNotSet,
    /// A line admits no placement consistent with the committed cells.
    ///
    /// The partial grid is left as committed so the caller can inspect how
    /// far deduction got before the contradiction surfaced.
    #[display("{line} cannot satisfy its clue with the committed cells")]
    Unsatisfiable {
        /// The line whose enumeration came up empty.
        line: LineId,
    },
    /// A deduction collided with a cell decided from outside the session.
    #[display("deduction conflicts with a committed cell: {_0}")]
    Conflict(CellConflict),
}

/// Whether a session reached a full solution or got stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Every line is resolved; the grid is fully decided.
    Solved,
    /// No further single-line deduction is possible, but undecided cells
    /// remain. Finishing the puzzle needs hypothesis search, which is out of
    /// this engine's scope.
    Stuck,
}

/// Counters accumulated across the session's resolve steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    steps: usize,
    cells_decided: usize,
}

impl SolveStats {
    /// Returns the number of resolve steps performed.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of cells the session decided.
    #[must_use]
    pub fn cells_decided(&self) -> usize {
        self.cells_decided
    }

    /// Returns `true` if the session performed any work.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.steps > 0
    }
}

/// Per-line scheduling metadata.
///
/// The dirty flag lives in the shared [`DirtyBoard`] instead, because the
/// grid's change listener must reach it without touching the session.
#[derive(Debug, Clone, Copy)]
struct LineMeta {
    /// Priority estimate: placement count from the clue initially, the exact
    /// enumerator count after the line has been analyzed once.
    rank: u64,
    /// A resolved line has a unique placement and drops out of scheduling.
    resolved: bool,
}

/// Per-line dirty flags, shared between the session and the grid listener.
///
/// Any committed change to cell `(x, y)` marks row `y` and column `x` dirty,
/// whether the write came from the session or from outside (e.g. a player
/// seeding a guess).
#[derive(Debug, Default)]
struct DirtyBoard {
    rows: Vec<bool>,
    columns: Vec<bool>,
}

impl DirtyBoard {
    fn flag(&self, line: LineId) -> bool {
        match line.orientation {
            Orientation::Row => self.rows[line.index],
            Orientation::Column => self.columns[line.index],
        }
    }

    fn set(&mut self, line: LineId, value: bool) {
        match line.orientation {
            Orientation::Row => self.rows[line.index] = value,
            Orientation::Column => self.columns[line.index] = value,
        }
    }
}

/// A deduction session bound to one grid.
///
/// The session owns its line metadata and subscribes to the grid's change
/// notifications; the grid itself is passed to each call, never stored. One
/// session works on one grid at a time. Resetting the grid means discarding
/// the session and building a new one.
///
/// # Examples
///
/// ```
/// use nonogram_core::{Clue, Grid};
/// use nonogram_solver::{SolveSession, SolveStatus};
///
/// let mut grid = Grid::new(2, 2)?;
/// grid.set_row_clues(vec![Clue::new(vec![2])?, Clue::empty()])?;
/// grid.set_column_clues(vec![Clue::new(vec![1])?, Clue::new(vec![1])?])?;
///
/// let mut session = SolveSession::new(&mut grid)?;
/// assert_eq!(session.solve(&mut grid)?, SolveStatus::Solved);
/// assert_eq!(grid.to_string(), "##\n..");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SolveSession {
    rows: Vec<LineMeta>,
    columns: Vec<LineMeta>,
    dirty: Rc<RefCell<DirtyBoard>>,
    stats: SolveStats,
    /// Set on the first terminal error; replayed by every later call.
    poisoned: Option<SolverError>,
}

impl SolveSession {
    /// Creates a session for `grid`, marking every line dirty and ranking it
    /// from its clue.
    ///
    /// Registers a change listener on the grid so that any committed cell
    /// change re-dirties the cell's row and column for the session.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::CluesNotSet`] if the grid does not have both
    /// clue sets configured.
    pub fn new(grid: &mut Grid) -> Result<Self, SolverError> {
        if !grid.has_clues() {
            return Err(SolverError::CluesNotSet);
        }

        let rank_of =
            |line: LineId| placement_rank(grid.clue(line), grid.line_len(line.orientation));
        let rows = (0..grid.row_count())
            .map(|y| LineMeta {
                rank: rank_of(LineId::row(y)),
                resolved: false,
            })
            .collect();
        let columns = (0..grid.column_count())
            .map(|x| LineMeta {
                rank: rank_of(LineId::column(x)),
                resolved: false,
            })
            .collect();

        let dirty = Rc::new(RefCell::new(DirtyBoard {
            rows: vec![true; grid.row_count()],
            columns: vec![true; grid.column_count()],
        }));
        let board = Rc::clone(&dirty);
        grid.subscribe(move |x, y| {
            let mut board = board.borrow_mut();
            board.rows[y] = true;
            board.columns[x] = true;
        });

        Ok(Self {
            rows,
            columns,
            dirty,
            stats: SolveStats::default(),
            poisoned: None,
        })
    }

    fn meta(&self, line: LineId) -> &LineMeta {
        match line.orientation {
            Orientation::Row => &self.rows[line.index],
            Orientation::Column => &self.columns[line.index],
        }
    }

    fn meta_mut(&mut self, line: LineId) -> &mut LineMeta {
        match line.orientation {
            Orientation::Row => &mut self.rows[line.index],
            Orientation::Column => &mut self.columns[line.index],
        }
    }

    /// Returns `true` once the line has a unique placement and left
    /// scheduling for good.
    #[must_use]
    pub fn is_resolved(&self, line: LineId) -> bool {
        self.meta(line).resolved
    }

    /// Returns the line's current scheduling priority.
    ///
    /// Lower means fewer remaining possibilities. The value starts as the
    /// clue-based estimate and becomes the exact placement count once the
    /// line has been analyzed.
    #[must_use]
    pub fn rank(&self, line: LineId) -> u64 {
        self.meta(line).rank
    }

    /// Returns the number of lines not yet resolved.
    #[must_use]
    pub fn remaining_lines(&self) -> usize {
        self.rows
            .iter()
            .chain(&self.columns)
            .filter(|meta| !meta.resolved)
            .count()
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Returns [`SolveStatus::Solved`] once every line is resolved.
    #[must_use]
    pub fn status(&self) -> SolveStatus {
        if self.remaining_lines() == 0 {
            SolveStatus::Solved
        } else {
            SolveStatus::Stuck
        }
    }

    /// Picks the dirty unresolved line with the lowest rank.
    ///
    /// Ties break deterministically: rows before columns, then ascending
    /// index, because rows are scanned first and only a strictly lower rank
    /// displaces the current candidate.
    fn select(&self) -> Option<LineId> {
        let board = self.dirty.borrow();
        let mut best: Option<(u64, LineId)> = None;
        for orientation in Orientation::ALL {
            let metas = match orientation {
                Orientation::Row => &self.rows,
                Orientation::Column => &self.columns,
            };
            for (index, meta) in metas.iter().enumerate() {
                let line = LineId { orientation, index };
                if meta.resolved || !board.flag(line) {
                    continue;
                }
                if best.is_none_or(|(rank, _)| meta.rank < rank) {
                    best = Some((meta.rank, line));
                }
            }
        }
        best.map(|(_, line)| line)
    }

    /// Performs exactly one resolve step.
    ///
    /// Selects the lowest-rank dirty line, enumerates its placements, and
    /// commits every cell all placements agree on. Returns `Ok(false)` when
    /// no dirty unresolved line remains, which is the fixpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsatisfiable`] when the selected line admits
    /// no placement, and [`SolverError::Conflict`] when a deduction collides
    /// with a cell decided from outside the session. Either error poisons the
    /// session: every later call returns the same error.
    pub fn step(&mut self, grid: &mut Grid) -> Result<bool, SolverError> {
        if let Some(err) = &self.poisoned {
            return Err(err.clone());
        }
        let Some(line) = self.select() else {
            return Ok(false);
        };

        let states = grid.line_states(line);
        let analysis = analyze_line(&states, grid.clue(line));
        debug!(
            "resolving {line}: rank {}, {} consistent placements",
            self.meta(line).rank,
            analysis.count,
        );

        if analysis.count == 0 {
            let err = SolverError::Unsatisfiable { line };
            self.poisoned = Some(err.clone());
            return Err(err);
        }

        for (offset, &state) in analysis.common.iter().enumerate() {
            if !state.is_decided() {
                continue;
            }
            let (x, y) = match line.orientation {
                Orientation::Row => (offset, line.index),
                Orientation::Column => (line.index, offset),
            };
            match grid.set_cell(x, y, state) {
                Ok(true) => {
                    trace!("decided ({x}, {y}) = {state} from {line}");
                    self.stats.cells_decided += 1;
                }
                Ok(false) => {}
                Err(conflict) => {
                    let err = SolverError::Conflict(conflict);
                    self.poisoned = Some(err.clone());
                    return Err(err);
                }
            }
        }

        // The commits above re-dirtied this line through the grid listener;
        // it has just been analyzed, so take it back out.
        self.dirty.borrow_mut().set(line, false);
        let meta = self.meta_mut(line);
        if analysis.count == 1 {
            meta.resolved = true;
        } else {
            meta.rank = analysis.count;
        }
        self.stats.steps += 1;
        Ok(true)
    }

    /// Runs resolve steps until no deduction remains.
    ///
    /// Idempotent: once the fixpoint is reached, calling this again performs
    /// no work and returns the same status.
    ///
    /// # Errors
    ///
    /// Propagates the first terminal error from [`step`](Self::step); the
    /// partial grid is left as committed for inspection.
    pub fn solve(&mut self, grid: &mut Grid) -> Result<SolveStatus, SolverError> {
        while self.step(grid)? {}
        Ok(self.status())
    }
}
