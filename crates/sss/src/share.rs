use crate::config::validate_threshold_config;
use crate::{Error, Result};
use num_bigint::BigInt;
use sss_traits::ShareSource;
use std::collections::BTreeSet;
use tracing::warn;

/// A point `(id, value)` on the secret polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    /// The x-coordinate, a positive integer.
    pub id: u64,
    /// The y-coordinate.
    pub value: BigInt,
}

impl Share {
    /// Create a new share.
    pub fn new<V: Into<BigInt>>(id: u64, value: V) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    /// The share as an interpolation point.
    pub fn point(&self) -> (BigInt, BigInt) {
        (BigInt::from(self.id), self.value.clone())
    }
}

/// The pool of shares handed to a reconstruction, with the declared share
/// count `n` and threshold `k`.
///
/// Ids are expected to be unique. This is not enforced: a repeated id makes
/// every combination holding both copies degenerate, and such combinations
/// are skipped during voting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSet {
    shares: Vec<Share>,
    n: usize,
    k: usize,
}

impl ShareSet {
    /// Create a share set.
    ///
    /// Fails if `n` or `k` is zero. A declared `n` that differs from the
    /// number of shares is only reported in the logs; the shares actually
    /// present are the ones used.
    pub fn new(shares: Vec<Share>, n: usize, k: usize) -> Result<Self> {
        validate_threshold_config(n, k)?;
        if shares.len() != n {
            warn!(
                declared = n,
                present = shares.len(),
                "Declared share count differs from the number of shares"
            );
        }
        Ok(Self { shares, n, k })
    }

    /// Collect the shares of a [`ShareSource`].
    pub fn from_source<S>(source: &S) -> Result<Self>
    where
        S: ShareSource,
        Error: From<S::Error>,
    {
        let shares = source
            .points()?
            .into_iter()
            .map(|(id, value)| Share::new(id, value))
            .collect();
        Self::new(shares, source.declared_count(), source.threshold())
    }

    /// The shares, in input order.
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// The number of shares present.
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Returns true if the set holds no share.
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// The declared share count.
    pub fn declared_count(&self) -> usize {
        self.n
    }

    /// The reconstruction threshold.
    pub fn threshold(&self) -> usize {
        self.k
    }

    /// The ids of all the shares.
    pub fn ids(&self) -> BTreeSet<u64> {
        self.shares.iter().map(|s| s.id).collect()
    }

    /// The interpolation points of the shares at `indices`.
    ///
    /// Panics if an index is out of bounds.
    pub fn points(&self, indices: &[usize]) -> Vec<(BigInt, BigInt)> {
        indices.iter().map(|&i| self.shares[i].point()).collect()
    }

    /// The ids of the shares at `indices`, in index order.
    ///
    /// Panics if an index is out of bounds.
    pub fn ids_at(&self, indices: &[usize]) -> Vec<u64> {
        indices.iter().map(|&i| self.shares[i].id).collect()
    }
}
