//! Run-length clues.

use std::fmt::{self, Display};

use crate::{CellState, error::ConfigError};

/// The clue for one line: the ordered lengths of its filled runs.
///
/// Runs appear in the line in clue order, each separated from the next by at
/// least one blank cell. An empty clue means the line contains no filled
/// cells at all.
///
/// # Examples
///
/// ```
/// use nonogram_core::Clue;
///
/// let clue = Clue::new(vec![3, 1])?;
/// assert_eq!(clue.runs(), &[3, 1]);
/// // Three filled, a mandatory gap, one filled: at least 5 cells.
/// assert_eq!(clue.min_len(), 5);
/// # Ok::<(), nonogram_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Clue {
    runs: Vec<usize>,
}

impl Clue {
    /// Creates a clue from ordered run lengths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroRun`] if any run length is zero. A line
    /// without filled cells is expressed as an empty clue, never as `[0]`.
    pub fn new(runs: Vec<usize>) -> Result<Self, ConfigError> {
        if runs.contains(&0) {
            return Err(ConfigError::ZeroRun);
        }
        Ok(Self { runs })
    }

    /// Creates the clue of a line with no filled cells.
    #[must_use]
    #[inline]
    pub const fn empty() -> Self {
        Self { runs: Vec::new() }
    }

    /// Returns the ordered run lengths.
    #[must_use]
    #[inline]
    pub fn runs(&self) -> &[usize] {
        &self.runs
    }

    /// Returns `true` if the clue demands no filled cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the minimum line length that can hold this clue: the sum of
    /// all runs plus one separating blank between each adjacent pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonogram_core::Clue;
    ///
    /// assert_eq!(Clue::empty().min_len(), 0);
    /// assert_eq!(Clue::new(vec![5])?.min_len(), 5);
    /// assert_eq!(Clue::new(vec![1, 1, 1])?.min_len(), 5);
    /// # Ok::<(), nonogram_core::ConfigError>(())
    /// ```
    #[must_use]
    pub fn min_len(&self) -> usize {
        if self.runs.is_empty() {
            return 0;
        }
        self.runs.iter().sum::<usize>() + self.runs.len() - 1
    }

    /// Returns `true` if the filled cells of `states` form exactly this
    /// clue's run pattern.
    ///
    /// Undecided cells count as not filled, matching how a player-facing
    /// correctness indicator judges a line in progress.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonogram_core::{CellState, Clue};
    ///
    /// let clue = Clue::new(vec![2, 1])?;
    /// let line = [
    ///     CellState::Filled,
    ///     CellState::Filled,
    ///     CellState::Blank,
    ///     CellState::Filled,
    ///     CellState::Blank,
    /// ];
    /// assert!(clue.matches(&line));
    /// # Ok::<(), nonogram_core::ConfigError>(())
    /// ```
    #[must_use]
    pub fn matches(&self, states: &[CellState]) -> bool {
        let mut runs = self.runs.iter().copied();
        let mut current = 0;
        for &state in states {
            if state == CellState::Filled {
                current += 1;
            } else if current != 0 {
                if runs.next() != Some(current) {
                    return false;
                }
                current = 0;
            }
        }
        if current != 0 && runs.next() != Some(current) {
            return false;
        }
        runs.next().is_none()
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for run in &self.runs {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{run}")?;
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn states(s: &str) -> Vec<CellState> {
        s.chars()
            .map(|c| match c {
                '#' => CellState::Filled,
                '.' => CellState::Blank,
                _ => CellState::Unknown,
            })
            .collect()
    }

    #[test]
    fn test_rejects_zero_run() {
        assert_eq!(Clue::new(vec![2, 0, 1]), Err(ConfigError::ZeroRun));
    }

    #[test]
    fn test_min_len() {
        assert_eq!(Clue::empty().min_len(), 0);
        assert_eq!(Clue::new(vec![4]).unwrap().min_len(), 4);
        assert_eq!(Clue::new(vec![2, 3]).unwrap().min_len(), 6);
        assert_eq!(Clue::new(vec![1, 1, 1, 1]).unwrap().min_len(), 7);
    }

    #[test]
    fn test_matches_exact_pattern() {
        let clue = Clue::new(vec![2, 1]).unwrap();
        assert!(clue.matches(&states("##.#.")));
        assert!(clue.matches(&states(".##.#")));
        assert!(!clue.matches(&states("###.#")));
        assert!(!clue.matches(&states("##...")));
        assert!(!clue.matches(&states("##.##")));
    }

    #[test]
    fn test_matches_treats_unknown_as_not_filled() {
        let clue = Clue::new(vec![2]).unwrap();
        assert!(clue.matches(&states("##???")));
        assert!(!clue.matches(&states("#?#??")));
    }

    #[test]
    fn test_matches_empty_clue() {
        assert!(Clue::empty().matches(&states(".....")));
        assert!(Clue::empty().matches(&states("??...")));
        assert!(!Clue::empty().matches(&states("..#..")));
    }

    #[test]
    fn test_display() {
        assert_eq!(Clue::empty().to_string(), "0");
        assert_eq!(Clue::new(vec![3, 1, 2]).unwrap().to_string(), "3,1,2");
    }

    proptest! {
        #[test]
        fn prop_min_len_matches_definition(runs in prop::collection::vec(1_usize..10, 0..8)) {
            let clue = Clue::new(runs.clone()).unwrap();
            let expected = if runs.is_empty() {
                0
            } else {
                runs.iter().sum::<usize>() + runs.len() - 1
            };
            prop_assert_eq!(clue.min_len(), expected);
        }

        #[test]
        fn prop_minimal_packing_matches(runs in prop::collection::vec(1_usize..6, 1..5)) {
            // A line holding the clue at its tightest packing always matches.
            let clue = Clue::new(runs.clone()).unwrap();
            let mut line = Vec::new();
            for (i, &run) in runs.iter().enumerate() {
                if i > 0 {
                    line.push(CellState::Blank);
                }
                line.extend(std::iter::repeat_n(CellState::Filled, run));
            }
            prop_assert!(clue.matches(&line));
        }
    }
}
