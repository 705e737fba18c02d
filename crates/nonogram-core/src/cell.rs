//! Cell state representation.

use std::fmt::{self, Display};

/// The deduction state of a single grid cell.
///
/// Every cell starts as [`Unknown`](Self::Unknown) and moves monotonically
/// toward a decided value ([`Filled`](Self::Filled) or [`Blank`](Self::Blank))
/// as solving proceeds. The engine never reverts a decided cell.
///
/// # Examples
///
/// ```
/// use nonogram_core::CellState;
///
/// let state = CellState::default();
/// assert_eq!(state, CellState::Unknown);
/// assert!(!state.is_decided());
/// assert!(CellState::Filled.is_decided());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Not yet determined.
    #[default]
    Unknown,
    /// Determined to be empty.
    Blank,
    /// Determined to be part of a run.
    Filled,
}

impl CellState {
    /// Array containing all cell states.
    pub const ALL: [Self; 3] = [Self::Unknown, Self::Blank, Self::Filled];

    /// Returns `true` if the cell has been determined as either
    /// [`Filled`](Self::Filled) or [`Blank`](Self::Blank).
    ///
    /// # Examples
    ///
    /// ```
    /// use nonogram_core::CellState;
    ///
    /// assert!(!CellState::Unknown.is_decided());
    /// assert!(CellState::Blank.is_decided());
    /// assert!(CellState::Filled.is_decided());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the single-character symbol used when rendering grids:
    /// `?` for unknown, `.` for blank, `#` for filled.
    #[must_use]
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Self::Unknown => '?',
            Self::Blank => '.',
            Self::Filled => '#',
        }
    }
}

impl Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.symbol(), f)
    }
}
