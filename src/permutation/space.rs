//! Lexicographic permutation enumeration and unranking.

use std::ops::Range;

use crate::error::{Error, Result};

/// Largest point count whose `n!` fits in a `u64` rank.
pub const MAX_POINTS: usize = 20;

/// Returns `n!`, or `None` if it overflows `u64`.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::permutation::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(4), Some(24));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Rearranges `perm` into the next permutation in lexicographic order.
///
/// Returns `false` (leaving `perm` untouched) if it was already the last one.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    // Longest non-increasing suffix starts at `i`.
    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

/// All `n!` orderings of `0..n` in lexicographic order.
///
/// The space is never materialised: permutations are produced on demand,
/// either by rank with [`nth`](Self::nth) or sequentially with
/// [`iter`](Self::iter) / [`iter_range`](Self::iter_range). Iterators are
/// independent, so the space can be re-walked any number of times.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::permutation::PermutationSpace;
///
/// let space = PermutationSpace::new(3).unwrap();
/// assert_eq!(space.len(), 6);
/// assert_eq!(space.nth(0), Some(vec![0, 1, 2]));
/// assert_eq!(space.nth(3), Some(vec![1, 2, 0]));
/// assert_eq!(space.iter().count(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationSpace {
    n: usize,
    len: u64,
}

impl PermutationSpace {
    /// Creates the space of orderings of `0..n`.
    ///
    /// Fails if `n` is zero or larger than [`MAX_POINTS`].
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_input("cannot enumerate orderings of zero points"));
        }
        let len = factorial(n).filter(|_| n <= MAX_POINTS).ok_or_else(|| {
            Error::invalid_input(format!(
                "{n} points exceed the enumerable maximum of {MAX_POINTS}"
            ))
        })?;
        Ok(Self { n, len })
    }

    /// Number of elements in each permutation.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of permutations (`n!`).
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Always `false`: `0!` is never constructed and `n! >= 1`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the permutation at lexicographic rank `k`.
    ///
    /// Decodes `k` in the factorial number system: the digit for position
    /// `i` selects which of the remaining indices comes next.
    pub fn nth(&self, k: u64) -> Option<Vec<usize>> {
        if k >= self.len {
            return None;
        }
        let mut remaining: Vec<usize> = (0..self.n).collect();
        let mut out = Vec::with_capacity(self.n);
        let mut rank = k;
        for i in (0..self.n).rev() {
            let block = factorial(i)?;
            let digit = (rank / block) as usize;
            rank %= block;
            out.push(remaining.remove(digit));
        }
        Some(out)
    }

    /// Iterates over every permutation from rank 0.
    pub fn iter(&self) -> Permutations {
        self.iter_range(0..self.len)
    }

    /// Iterates over the permutations whose ranks fall in `range`.
    ///
    /// The range is clamped to `0..len`; an empty range yields nothing.
    pub fn iter_range(&self, range: Range<u64>) -> Permutations {
        let end = range.end.min(self.len);
        let start = range.start.min(end);
        Permutations {
            current: if start < end { self.nth(start) } else { None },
            remaining: end - start,
        }
    }
}

impl IntoIterator for &PermutationSpace {
    type Item = Vec<usize>;
    type IntoIter = Permutations;

    fn into_iter(self) -> Permutations {
        self.iter()
    }
}

/// Iterator over a contiguous rank range of a [`PermutationSpace`].
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Option<Vec<usize>>,
    remaining: u64,
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.current.as_mut()?;
        let out = current.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            next_permutation(current);
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(10), Some(3_628_800));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn test_space_bounds() {
        assert!(PermutationSpace::new(0).is_err());
        assert!(PermutationSpace::new(21).is_err());
        let space = PermutationSpace::new(MAX_POINTS).expect("max");
        assert_eq!(space.len(), factorial(MAX_POINTS).expect("fits"));
        assert!(!space.is_empty());
    }

    #[test]
    fn test_single_point_space() {
        let space = PermutationSpace::new(1).expect("valid");
        assert_eq!(space.len(), 1);
        assert_eq!(space.iter().collect::<Vec<_>>(), vec![vec![0]]);
    }

    #[test]
    fn test_lexicographic_order() {
        let space = PermutationSpace::new(3).expect("valid");
        let all: Vec<Vec<usize>> = space.iter().collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_nth_matches_iteration() {
        let space = PermutationSpace::new(5).expect("valid");
        for (k, perm) in space.iter().enumerate() {
            assert_eq!(space.nth(k as u64), Some(perm));
        }
        assert_eq!(space.nth(120), None);
    }

    #[test]
    fn test_nth_deep_in_large_space() {
        let space = PermutationSpace::new(MAX_POINTS).expect("valid");
        let last = space.nth(space.len() - 1).expect("last");
        let expected: Vec<usize> = (0..MAX_POINTS).rev().collect();
        assert_eq!(last, expected);
    }

    #[test]
    fn test_next_permutation_last() {
        let mut perm = vec![2, 1, 0];
        assert!(!next_permutation(&mut perm));
        assert_eq!(perm, vec![2, 1, 0]);
        let mut single = vec![0];
        assert!(!next_permutation(&mut single));
    }

    #[test]
    fn test_iter_range_clamps() {
        let space = PermutationSpace::new(4).expect("valid");
        assert_eq!(space.iter_range(20..100).count(), 4);
        assert_eq!(space.iter_range(30..40).count(), 0);
        assert_eq!(space.iter_range(5..5).count(), 0);
        assert_eq!(space.iter_range(6..8).next(), space.nth(6));
    }

    #[test]
    fn test_restartable() {
        let space = PermutationSpace::new(4).expect("valid");
        let first: Vec<_> = space.iter().collect();
        let second: Vec<_> = (&space).into_iter().collect();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_exactly_n_factorial_distinct_permutations(n in 1usize..=7) {
            let space = PermutationSpace::new(n).expect("valid");
            let all: Vec<Vec<usize>> = space.iter().collect();
            prop_assert_eq!(all.len() as u64, factorial(n).expect("fits"));
            let distinct: HashSet<&Vec<usize>> = all.iter().collect();
            prop_assert_eq!(distinct.len(), all.len());
            for perm in &all {
                let mut sorted = perm.clone();
                sorted.sort_unstable();
                prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
            }
        }

        #[test]
        fn prop_ranges_concatenate(n in 1usize..=6, cut in 0u64..720) {
            let space = PermutationSpace::new(n).expect("valid");
            let cut = cut.min(space.len());
            let mut joined: Vec<_> = space.iter_range(0..cut).collect();
            joined.extend(space.iter_range(cut..space.len()));
            prop_assert_eq!(joined, space.iter().collect::<Vec<_>>());
        }
    }
}
