//! Majority voting over the secrets interpolated from every `k`-subset of a
//! [`ShareSet`].
//!
//! # Voting rule
//!
//! 1. Every combination of `k` shares is interpolated at zero. Degenerate
//!    combinations (a repeated id) and, under [`Division::Exact`], combinations
//!    whose value at zero is not an integer are skipped.
//! 2. The candidate secret with the strictly highest number of votes wins;
//!    among candidates with equal votes the smallest secret wins.
//! 3. The shares used by at least one combination that voted for the winner
//!    are valid; every other share is corrupted.
//!
//! The tally is independent of the order in which combinations are
//! evaluated, so the parallel evaluation returns the same outcome as the
//! sequential one.
//!
//! [`Division::Exact`]: sss_math::Division::Exact

use crate::{Error, Result, ShareSet, VoterConfig};
use num_bigint::BigInt;
use rayon::prelude::*;
use sss_math::lagrange::interpolate_at_zero;
use sss_math::Error as MathError;
use sss_util::Combinations;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, instrument};

/// The votes collected by one candidate secret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vote {
    /// Number of combinations that produced the secret.
    pub frequency: usize,
    /// The share ids of each of these combinations.
    pub id_sets: Vec<BTreeSet<u64>>,
}

impl Vote {
    /// The union of the share ids of all the combinations.
    pub fn ids(&self) -> BTreeSet<u64> {
        self.id_sets.iter().flatten().copied().collect()
    }
}

/// Candidate secrets and their votes, with the number of combinations seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTally {
    votes: BTreeMap<BigInt, Vote>,
    combinations: usize,
    skipped: usize,
}

impl VoteTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote for `secret` from the combination of shares `ids`.
    pub fn record(&mut self, secret: BigInt, ids: BTreeSet<u64>) {
        let vote = self.votes.entry(secret).or_default();
        vote.frequency += 1;
        vote.id_sets.push(ids);
        self.combinations += 1;
    }

    /// Record a combination that produced no candidate.
    pub fn skip(&mut self) {
        self.skipped += 1;
        self.combinations += 1;
    }

    /// Combine two tallies; the operation is associative and commutative up
    /// to the order of the id sets of each vote.
    pub fn merge(mut self, other: Self) -> Self {
        for (secret, vote) in other.votes {
            let entry = self.votes.entry(secret).or_default();
            entry.frequency += vote.frequency;
            entry.id_sets.extend(vote.id_sets);
        }
        self.combinations += other.combinations;
        self.skipped += other.skipped;
        self
    }

    /// The votes collected by `secret`, if any.
    pub fn get(&self, secret: &BigInt) -> Option<&Vote> {
        self.votes.get(secret)
    }

    /// Iterate over the candidates in increasing order of secret.
    pub fn iter(&self) -> impl Iterator<Item = (&BigInt, &Vote)> {
        self.votes.iter()
    }

    /// Number of distinct candidate secrets.
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    /// Returns true if no combination voted.
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Number of combinations recorded, voting or skipped.
    pub fn combinations(&self) -> usize {
        self.combinations
    }

    /// Number of combinations skipped.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// The candidate with the most votes, the smallest secret winning ties.
    pub fn winner(&self) -> Option<(&BigInt, &Vote)> {
        let mut best: Option<(&BigInt, &Vote)> = None;
        for (secret, vote) in &self.votes {
            if best.map_or(true, |(_, b)| vote.frequency > b.frequency) {
                best = Some((secret, vote));
            }
        }
        best
    }
}

/// The outcome of a reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// The winning secret.
    pub secret: BigInt,
    /// Number of combinations that voted for the secret.
    pub frequency: usize,
    /// Ids of the shares used by a combination that voted for the secret.
    pub valid_ids: BTreeSet<u64>,
    /// Ids of all the other shares.
    pub corrupted_ids: BTreeSet<u64>,
    /// Number of combinations enumerated.
    pub combinations: usize,
    /// Number of combinations skipped as degenerate or inconsistent.
    pub skipped: usize,
}

/// Reconstructs the secret of a [`ShareSet`] by majority voting.
#[derive(Debug, Clone)]
pub struct ConsistencyVoter<'a> {
    shares: &'a ShareSet,
    config: VoterConfig,
}

impl<'a> ConsistencyVoter<'a> {
    /// Create a voter over `shares`.
    pub fn new(shares: &'a ShareSet, config: VoterConfig) -> Self {
        Self { shares, config }
    }

    /// Interpolate one combination. Returns `None` if the combination must
    /// be skipped.
    fn evaluate(&self, indices: &[usize]) -> Option<(BigInt, BTreeSet<u64>)> {
        let points = self.shares.points(indices);
        match interpolate_at_zero(&points, self.config.division) {
            Ok(secret) => Some((secret, self.shares.ids_at(indices).into_iter().collect())),
            Err(e @ MathError::NonIntegral { .. }) => {
                debug!(ids = ?self.shares.ids_at(indices), error = %e, "Inconsistent combination");
                None
            }
            Err(e @ (MathError::DuplicateAbscissa(_) | MathError::DivisionByZero)) => {
                debug!(ids = ?self.shares.ids_at(indices), error = %e, "Degenerate combination");
                None
            }
        }
    }

    fn absorb(&self, mut tally: VoteTally, indices: Vec<usize>) -> VoteTally {
        match self.evaluate(&indices) {
            Some((secret, ids)) => tally.record(secret, ids),
            None => tally.skip(),
        }
        tally
    }

    /// Interpolate every combination of `k` shares and tally the candidate
    /// secrets.
    pub fn tally(&self) -> VoteTally {
        let combinations = Combinations::new(self.shares.len(), self.shares.threshold());
        if self.config.parallel {
            combinations
                .par_bridge()
                .fold(VoteTally::new, |tally, indices| self.absorb(tally, indices))
                .reduce(VoteTally::new, VoteTally::merge)
        } else {
            combinations.fold(VoteTally::new(), |tally, indices| self.absorb(tally, indices))
        }
    }

    /// Reconstruct the secret and identify the corrupted shares.
    ///
    /// Fails with [`Error::NoConsistentSecret`] if no combination produced a
    /// candidate.
    #[instrument(skip_all, fields(n = self.shares.len(), k = self.shares.threshold()))]
    pub fn reconstruct(&self) -> Result<Reconstruction> {
        let tally = self.tally();
        let (secret, vote) = tally
            .winner()
            .ok_or_else(|| Error::no_consistent_secret(tally.combinations(), tally.skipped()))?;

        let valid_ids = vote.ids();
        let corrupted_ids = self
            .shares
            .ids()
            .difference(&valid_ids)
            .copied()
            .collect::<BTreeSet<_>>();

        info!(
            %secret,
            frequency = vote.frequency,
            candidates = tally.len(),
            corrupted = ?corrupted_ids,
            "Reconstructed secret"
        );

        Ok(Reconstruction {
            secret: secret.clone(),
            frequency: vote.frequency,
            valid_ids,
            corrupted_ids,
            combinations: tally.combinations(),
            skipped: tally.skipped(),
        })
    }
}
