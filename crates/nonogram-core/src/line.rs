//! Line identity types.
//!
//! A *line* is one row or one column of the grid, viewed as an ordered
//! sequence of cell states. [`LineId`] names a line without borrowing it,
//! which lets the solver keep per-line metadata and report diagnostics
//! (e.g. which line turned out to be unsatisfiable) by identity alone.

use std::fmt::{self, Display};

/// Whether a line runs horizontally or vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// A horizontal line, indexed by its y coordinate.
    Row,
    /// A vertical line, indexed by its x coordinate.
    Column,
}

impl Orientation {
    /// Array containing both orientations, rows first.
    pub const ALL: [Self; 2] = [Self::Row, Self::Column];

    /// Returns the crossing orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonogram_core::Orientation;
    ///
    /// assert_eq!(Orientation::Row.orthogonal(), Orientation::Column);
    /// assert_eq!(Orientation::Column.orthogonal(), Orientation::Row);
    /// ```
    #[must_use]
    #[inline]
    pub const fn orthogonal(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// Identity of one row or column.
///
/// # Examples
///
/// ```
/// use nonogram_core::{LineId, Orientation};
///
/// let line = LineId::row(3);
/// assert_eq!(line.orientation, Orientation::Row);
/// assert_eq!(line.index, 3);
/// assert_eq!(line.to_string(), "row 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId {
    /// Row or column.
    pub orientation: Orientation,
    /// Index within the orientation: y for rows, x for columns.
    pub index: usize,
}

impl LineId {
    /// Creates the identity of the row with the given y coordinate.
    #[must_use]
    #[inline]
    pub const fn row(index: usize) -> Self {
        Self {
            orientation: Orientation::Row,
            index,
        }
    }

    /// Creates the identity of the column with the given x coordinate.
    #[must_use]
    #[inline]
    pub const fn column(index: usize) -> Self {
        Self {
            orientation: Orientation::Column,
            index,
        }
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.orientation, self.index)
    }
}
