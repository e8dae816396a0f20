use std::iter::FusedIterator;

use crate::binomial;

/// Lexicographic enumeration of the `k`-subsets of `{0, ..., n - 1}`.
///
/// Every item is a strictly increasing vector of `k` indices. The first item is
/// `[0, 1, ..., k - 1]` and the last is `[n - k, ..., n - 1]`; exactly
/// `C(n, k)` items are produced. When `k > n` the sequence is empty, and when
/// `k == 0` it holds a single empty vector.
///
/// The enumerator is restartable: clone it before consuming, or call
/// [`Combinations::reset`]. The number of items left is known exactly while
/// `C(n, k)` fits in a `usize`; see [`Combinations::remaining`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combinations {
    n: usize,
    k: usize,
    next: Option<Vec<usize>>,
    remaining: Option<usize>,
}

impl Combinations {
    /// Create the enumerator of the `k`-subsets of `n` indices.
    pub fn new(n: usize, k: usize) -> Self {
        let mut c = Self {
            n,
            k,
            next: None,
            remaining: Some(0),
        };
        c.reset();
        c
    }

    /// Rewind to the lexicographically first combination.
    pub fn reset(&mut self) {
        if self.k <= self.n {
            self.next = Some((0..self.k).collect());
            self.remaining = binomial(self.n, self.k);
        } else {
            self.next = None;
            self.remaining = Some(0);
        }
    }

    /// Number of indices to choose from.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Size of each combination.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of combinations not yet produced, or `None` if `C(n, k)` does
    /// not fit in a `usize`.
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }

    /// Compute the successor of `current`: increment the rightmost index that
    /// is not at its maximum, then reset the suffix to consecutive values.
    fn successor(&self, current: &[usize]) -> Option<Vec<usize>> {
        let (n, k) = (self.n, self.k);
        let i = (0..k).rev().find(|&i| current[i] != n - k + i)?;
        let mut next = current.to_vec();
        next[i] += 1;
        for j in i + 1..k {
            next[j] = next[j - 1] + 1;
        }
        Some(next)
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.successor(&current);
        self.remaining = self.remaining.map(|r| r.saturating_sub(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Combinations {}
