//! Longest-common-subsequence core.
//!
//! Two counting strategies share the same recurrence:
//!
//! - [`backtrack_counts`] fills the full `(m + 1) x (n + 1)` table and walks it
//!   back from `(m, n)`, classifying every unit as unchanged, added or removed.
//! - [`rowwise_counts`] keeps only two rows (sized by the shorter input) and
//!   derives the counts algebraically from the LCS length.
//!
//! Both produce identical totals for the same input pair. The table is
//! scratch memory local to the call and is never returned.

/// Raw per-unit counts produced by one LCS pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitCounts {
    /// Units present only in the new sequence.
    pub added: usize,
    /// Units present only in the old sequence.
    pub removed: usize,
    /// Units on the common subsequence.
    pub unchanged: usize,
}

impl UnitCounts {
    /// Derive counts from an LCS length and the two sequence lengths.
    ///
    /// `lcs_len` must not exceed either length.
    pub(crate) fn from_lcs_len(lcs_len: usize, old_len: usize, new_len: usize) -> Self {
        debug_assert!(lcs_len <= old_len && lcs_len <= new_len);
        Self {
            added: new_len - lcs_len,
            removed: old_len - lcs_len,
            unchanged: lcs_len,
        }
    }
}

/// Signature shared by the counting strategies, so the sampler can be
/// instantiated with either one.
pub type CountFn<T> = fn(&[T], &[T]) -> UnitCounts;

/// Full LCS table, row-major with `n + 1` columns.
struct LcsTable {
    cells: Vec<u32>,
    cols: usize,
}

impl LcsTable {
    fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let cols = new.len() + 1;
        let mut cells = vec![0u32; (old.len() + 1) * cols];

        for i in 1..=old.len() {
            for j in 1..=new.len() {
                cells[i * cols + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { cells, cols }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }
}

/// Count edits by walking the full LCS table from `(m, n)` back to the origin.
///
/// On a mismatch, a move that keeps the LCS length is preferred in the
/// `added` direction: `lcs[i][j-1] >= lcs[i-1][j]` classifies `new[j-1]` as
/// added. This tie-break is part of the output contract.
pub fn backtrack_counts<T: PartialEq>(old: &[T], new: &[T]) -> UnitCounts {
    let mut counts = UnitCounts::default();
    backtrack(old, new, |step| match step {
        Step::Unchanged => counts.unchanged += 1,
        Step::Added => counts.added += 1,
        Step::Removed => counts.removed += 1,
    });
    counts
}

/// One move of the backtrack walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Unchanged,
    Added,
    Removed,
}

/// Walk the table from `(m, n)` to the origin, reporting each move in order.
fn backtrack<T: PartialEq>(old: &[T], new: &[T], mut visit: impl FnMut(Step)) {
    let table = LcsTable::build(old, new);
    let (mut i, mut j) = (old.len(), new.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            visit(Step::Unchanged);
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            visit(Step::Added);
            j -= 1;
        } else {
            visit(Step::Removed);
            i -= 1;
        }
    }
}

/// LCS length using two rows sized by the shorter input.
pub fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // LCS is symmetric, so iterate over the longer side and keep rows
    // proportional to the shorter one.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];

    for x in outer {
        for (j, y) in inner.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}

/// Count edits from the LCS length alone, without a backtrack.
///
/// Totals match [`backtrack_counts`]; which units changed is not tracked.
pub fn rowwise_counts<T: PartialEq>(old: &[T], new: &[T]) -> UnitCounts {
    UnitCounts::from_lcs_len(lcs_len(old, new), old.len(), new.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_inputs() {
        let empty: [&str; 0] = [];
        assert_eq!(backtrack_counts(&empty, &empty), UnitCounts::default());
        assert_eq!(rowwise_counts(&empty, &empty), UnitCounts::default());
    }

    #[test]
    fn one_side_empty() {
        let empty: [&str; 0] = [];
        let some = ["a", "b", "c"];

        let added = backtrack_counts(&empty, &some);
        assert_eq!(added, UnitCounts { added: 3, removed: 0, unchanged: 0 });

        let removed = backtrack_counts(&some, &empty);
        assert_eq!(removed, UnitCounts { added: 0, removed: 3, unchanged: 0 });

        assert_eq!(rowwise_counts(&empty, &some), added);
        assert_eq!(rowwise_counts(&some, &empty), removed);
    }

    #[test]
    fn single_substitution() {
        let counts = backtrack_counts(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(counts, UnitCounts { added: 1, removed: 1, unchanged: 2 });
    }

    #[test]
    fn classic_lcs_length() {
        // LCS("ABCBDAB", "BDCABA") has length 4.
        assert_eq!(lcs_len(&chars("ABCBDAB"), &chars("BDCABA")), 4);
        assert_eq!(lcs_len(&chars("BDCABA"), &chars("ABCBDAB")), 4);
    }

    #[test]
    fn backtrack_and_rowwise_agree() {
        let cases = [
            ("kitten", "sitting"),
            ("", "abc"),
            ("abc", ""),
            ("aaaa", "aa"),
            ("abcdef", "fedcba"),
            ("the quick brown fox", "the slow brown dog"),
        ];
        for (old, new) in cases {
            let (old, new) = (chars(old), chars(new));
            assert_eq!(
                backtrack_counts(&old, &new),
                rowwise_counts(&old, &new),
                "mismatch for {old:?} vs {new:?}"
            );
        }
    }

    #[test]
    fn tie_break_prefers_added() {
        // "ab" vs "ba": both moves keep LCS length 1 at (2, 2). The walk
        // takes the added move first, then matches "b" on the diagonal.
        let mut steps = Vec::new();
        backtrack(&["a", "b"], &["b", "a"], |step| steps.push(step));
        assert_eq!(steps, vec![Step::Added, Step::Unchanged, Step::Removed]);

        // Totals are the same for every optimal walk.
        let counts = backtrack_counts(&["a", "b"], &["b", "a"]);
        assert_eq!(counts, UnitCounts { added: 1, removed: 1, unchanged: 1 });
    }

    #[test]
    fn counts_from_lcs_len() {
        let c = UnitCounts::from_lcs_len(2, 3, 5);
        assert_eq!(c, UnitCounts { added: 3, removed: 1, unchanged: 2 });
    }

    #[test]
    fn counts_cover_both_sequences() {
        let old = chars("abcabba");
        let new = chars("cbabac");
        let c = backtrack_counts(&old, &new);
        assert_eq!(c.unchanged + c.removed, old.len());
        assert_eq!(c.unchanged + c.added, new.len());
    }
}
