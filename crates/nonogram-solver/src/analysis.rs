//! Single-line constraint enumeration.
//!
//! Given one line's current cell states and its clue, [`analyze_line`]
//! enumerates every placement of the clue's runs that is consistent with the
//! already decided cells, and reports how many such placements exist together
//! with the cell-wise intersection of all of them. The intersection is what
//! the scheduler commits back to the grid: a cell it decides is forced in
//! every consistent placement.

use nonogram_core::{CellState, Clue};
use tinyvec::TinyVec;

/// Line buffer with inline capacity covering typical puzzle line lengths.
type LineBuf = TinyVec<[CellState; 32]>;

/// The result of enumerating one line's consistent placements.
///
/// `count == 0` means the line as currently decided cannot satisfy its clue,
/// a contradiction. `common` then carries no information and is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAnalysis {
    /// Number of placements consistent with the clue and the decided cells.
    ///
    /// Saturates at `u64::MAX`; the scheduler only distinguishes `0`, `1` and
    /// "more than one", so saturation never changes its decisions.
    pub count: u64,
    /// Cell-wise intersection of all consistent placements: a position is
    /// decided here only if every placement agrees on it. Empty when
    /// `count == 0`.
    pub common: Vec<CellState>,
}

/// Enumerates all placements of `clue` consistent with `states`.
///
/// A placement puts the clue's runs onto the line in order, each run a
/// maximal block of filled cells, adjacent runs separated by at least one
/// blank. It is consistent when every already filled cell is covered by some
/// run and no run covers an already blank cell.
///
/// The recursion walks the original slice by offset and merges partial
/// results incrementally, so memory stays proportional to the line length
/// rather than the (combinatorially large) placement count.
///
/// # Examples
///
/// ```
/// use nonogram_core::{CellState, Clue};
/// use nonogram_solver::analysis::analyze_line;
///
/// // A run of 3 on a blank 5-cell line fits at offsets 0, 1 and 2; every
/// // fit covers the center cell.
/// let line = [CellState::Unknown; 5];
/// let analysis = analyze_line(&line, &Clue::new(vec![3])?);
/// assert_eq!(analysis.count, 3);
/// assert_eq!(analysis.common[2], CellState::Filled);
/// assert_eq!(analysis.common[0], CellState::Unknown);
/// # Ok::<(), nonogram_core::ConfigError>(())
/// ```
#[must_use]
pub fn analyze_line(states: &[CellState], clue: &Clue) -> LineAnalysis {
    match analyze_at(states, clue.runs(), 0) {
        Some((count, common)) => LineAnalysis {
            count,
            common: common.to_vec(),
        },
        None => LineAnalysis {
            count: 0,
            common: Vec::new(),
        },
    }
}

/// Minimum cells needed by the remaining runs: their sum plus one separator
/// between each adjacent pair.
fn min_len_of(runs: &[usize]) -> usize {
    if runs.is_empty() {
        return 0;
    }
    runs.iter().sum::<usize>() + runs.len() - 1
}

/// Enumerates placements of `runs` onto `states[start..]`.
///
/// Returns `None` when no consistent placement exists, otherwise the
/// placement count and the merged common states covering `states[start..]`.
fn analyze_at(states: &[CellState], runs: &[usize], start: usize) -> Option<(u64, LineBuf)> {
    let tail_len = states.len() - start;

    let Some((&run, rest)) = runs.split_first() else {
        // No runs left: the rest of the line must hold no filled cell and
        // becomes all blank.
        if states[start..].contains(&CellState::Filled) {
            return None;
        }
        let mut common = LineBuf::default();
        common.resize(tail_len, CellState::Blank);
        return Some((1, common));
    };

    if tail_len < min_len_of(runs) {
        return None;
    }

    let mut count: u64 = 0;
    let mut common: Option<LineBuf> = None;

    for i in start..=states.len() - min_len_of(runs) {
        // Cells before the run become blank. A filled cell there can never
        // be covered by this or any later run, and it stays in the way for
        // every larger offset.
        if i > start && states[i - 1] == CellState::Filled {
            break;
        }
        let end = i + run;
        // The run cannot occupy a forced-blank cell.
        if states[i..end].contains(&CellState::Blank) {
            continue;
        }
        // A filled cell right after the run would force it past its length.
        if end < states.len() && states[end] == CellState::Filled {
            continue;
        }

        // `end == states.len()` is only reachable for the last run: earlier
        // runs reserve at least a separator plus their own cells.
        let sub = if end < states.len() {
            analyze_at(states, rest, end + 1)
        } else {
            Some((1, LineBuf::default()))
        };
        let Some((sub_count, sub_common)) = sub else {
            continue;
        };

        count = count.saturating_add(sub_count);
        merge_branch(&mut common, states.len(), start, i, end, &sub_common);
    }

    common.map(|common| (count, common))
}

/// Merges one placement branch into the accumulated common states.
///
/// The branch's layout over `states[start..]` is: blanks up to the run start,
/// the run itself, one separating blank (when the run does not touch the line
/// end), then the sub-result. Positions where branches disagree collapse to
/// [`CellState::Unknown`].
fn merge_branch(
    acc: &mut Option<LineBuf>,
    line_len: usize,
    start: usize,
    run_start: usize,
    run_end: usize,
    sub_common: &[CellState],
) {
    let branch = |p: usize| {
        let pos = start + p;
        if pos < run_start {
            CellState::Blank
        } else if pos < run_end {
            CellState::Filled
        } else if pos == run_end {
            CellState::Blank
        } else {
            sub_common[pos - run_end - 1]
        }
    };

    let tail_len = line_len - start;
    match acc {
        None => {
            let mut buf = LineBuf::default();
            buf.extend((0..tail_len).map(branch));
            *acc = Some(buf);
        }
        Some(buf) => {
            for p in 0..tail_len {
                if buf[p] != branch(p) {
                    buf[p] = CellState::Unknown;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{rank::binomial, testing::parse_line};

    fn clue(runs: &[usize]) -> Clue {
        Clue::new(runs.to_vec()).unwrap()
    }

    /// Enumerates every full assignment of the line by brute force and
    /// intersects the ones consistent with the clue and the decided cells.
    fn brute_force(states: &[CellState], clue: &Clue) -> LineAnalysis {
        let n = states.len();
        let mut count = 0_u64;
        let mut common: Option<Vec<CellState>> = None;
        for bits in 0..(1_u32 << n) {
            let assignment: Vec<_> = (0..n)
                .map(|i| {
                    if bits & (1 << i) == 0 {
                        CellState::Blank
                    } else {
                        CellState::Filled
                    }
                })
                .collect();
            let consistent = assignment
                .iter()
                .zip(states)
                .all(|(&a, &s)| !s.is_decided() || a == s);
            if !consistent || !clue.matches(&assignment) {
                continue;
            }
            count += 1;
            match &mut common {
                None => common = Some(assignment),
                Some(common) => {
                    for (c, a) in common.iter_mut().zip(&assignment) {
                        if *c != *a {
                            *c = CellState::Unknown;
                        }
                    }
                }
            }
        }
        LineAnalysis {
            count,
            common: common.unwrap_or_default(),
        }
    }

    #[test]
    fn test_full_line_run() {
        // Length 5, clue [5]: a single placement filling everything.
        let analysis = analyze_line(&parse_line("?????"), &clue(&[5]));
        assert_eq!(analysis.count, 1);
        assert_eq!(analysis.common, parse_line("#####"));
    }

    #[test]
    fn test_forced_overlap() {
        // Length 5, clue [3]: three placements, all covering the center.
        let analysis = analyze_line(&parse_line("?????"), &clue(&[3]));
        assert_eq!(analysis.count, 3);
        assert_eq!(analysis.common, parse_line("??#??"));
    }

    #[test]
    fn test_empty_clue() {
        let analysis = analyze_line(&parse_line("???"), &Clue::empty());
        assert_eq!(analysis.count, 1);
        assert_eq!(analysis.common, parse_line("..."));

        // A filled cell makes an empty clue unsatisfiable.
        let analysis = analyze_line(&parse_line("?#?"), &Clue::empty());
        assert_eq!(analysis.count, 0);
        assert!(analysis.common.is_empty());
    }

    #[test]
    fn test_contradiction() {
        // Two separated filled cells cannot be covered by a single run of 1.
        let analysis = analyze_line(&parse_line("#?#"), &clue(&[1]));
        assert_eq!(analysis.count, 0);
        assert!(analysis.common.is_empty());
    }

    #[test]
    fn test_clue_longer_than_line() {
        let analysis = analyze_line(&parse_line("???"), &clue(&[2, 1]));
        assert_eq!(analysis.count, 0);
    }

    #[test]
    fn test_decided_cells_constrain_placements() {
        // The blank at index 2 splits the line; the run of 3 must sit right
        // of it, and the filled cell at index 4 pins it exactly.
        let analysis = analyze_line(&parse_line("??.?#??"), &clue(&[3]));
        assert_eq!(analysis.count, 2);
        assert_eq!(analysis.common, parse_line("...?##?"));
    }

    #[test]
    fn test_anchored_runs() {
        // A filled cell at the left edge anchors the first run there.
        let analysis = analyze_line(&parse_line("#????"), &clue(&[2, 1]));
        assert_eq!(analysis.count, 2);
        assert_eq!(analysis.common, parse_line("##.??"));
    }

    #[test]
    fn test_multi_run_tight_fit() {
        // Runs at minimum length leave a single placement.
        let analysis = analyze_line(&parse_line("?????"), &clue(&[1, 3]));
        assert_eq!(analysis.count, 1);
        assert_eq!(analysis.common, parse_line("#.###"));
    }

    #[test]
    fn test_all_unknown_count_matches_closed_form() {
        // Placing k runs with s slack cells admits C(s + k, k) placements.
        for (runs, len) in [
            (vec![1], 10),
            (vec![2, 3], 10),
            (vec![1, 1, 1], 9),
            (vec![4, 2], 12),
        ] {
            let clue = Clue::new(runs.clone()).unwrap();
            let line = vec![CellState::Unknown; len];
            let slack = (len - clue.min_len()) as u64;
            let k = runs.len() as u64;
            assert_eq!(
                analyze_line(&line, &clue).count,
                binomial(slack + k, k),
                "clue {runs:?} on length {len}"
            );
        }
    }

    #[test]
    fn test_matches_brute_force_on_fixed_lines() {
        for (line, runs) in [
            ("????????", vec![2, 3]),
            ("?#??????", vec![2, 3]),
            ("???.????", vec![2, 1]),
            ("#??????#", vec![1, 1]),
            ("????", vec![4]),
        ] {
            let states = parse_line(line);
            let clue = Clue::new(runs).unwrap();
            let expected = brute_force(&states, &clue);
            assert_eq!(analyze_line(&states, &clue), expected, "line {line:?}");
        }
    }

    fn arb_states(len: usize) -> impl Strategy<Value = Vec<CellState>> {
        prop::collection::vec(
            prop_oneof![
                3 => Just(CellState::Unknown),
                1 => Just(CellState::Blank),
                1 => Just(CellState::Filled),
            ],
            len,
        )
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(
            states in (4_usize..=10).prop_flat_map(arb_states),
            runs in prop::collection::vec(1_usize..4, 0..3),
        ) {
            let clue = Clue::new(runs).unwrap();
            prop_assume!(clue.min_len() <= states.len());
            let expected = brute_force(&states, &clue);
            prop_assert_eq!(analyze_line(&states, &clue), expected);
        }

        #[test]
        fn prop_common_is_symmetric_for_palindromic_clues(
            len in 4_usize..=12,
            run in 1_usize..4,
        ) {
            prop_assume!(run <= len);
            let line = vec![CellState::Unknown; len];
            let analysis = analyze_line(&line, &Clue::new(vec![run]).unwrap());
            let mut reversed = analysis.common.clone();
            reversed.reverse();
            prop_assert_eq!(analysis.common, reversed);
        }
    }
}
