//! Configuration and validation for a reconstruction.

use crate::{Error, Result};
use sss_math::Division;

/// Environment variable selecting the [`Division`] policy (`exact` or `truncate`).
pub const DIVISION_VAR: &str = "SSS_DIVISION";
/// Environment variable enabling parallel evaluation (`1`/`true` or `0`/`false`).
pub const PARALLEL_VAR: &str = "SSS_PARALLEL";

/// Options of the [`crate::ConsistencyVoter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoterConfig {
    /// How interpolated values are reduced to integers. With
    /// [`Division::Exact`], combinations with a fractional value at zero are
    /// rejected as inconsistent.
    pub division: Division,
    /// Evaluate the combinations on the rayon thread pool.
    pub parallel: bool,
}

impl VoterConfig {
    /// Set the division policy.
    pub fn with_division(mut self, division: Division) -> Self {
        self.division = division;
        self
    }

    /// Enable or disable parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Read the configuration from the process environment, falling back to
    /// the defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(DIVISION_VAR) {
            config.division = match value.trim().to_ascii_lowercase().as_str() {
                "exact" => Division::Exact,
                "truncate" => Division::Truncate,
                _ => return Err(Error::invalid_config(format!("{DIVISION_VAR}={value}"))),
            };
        }
        if let Some(value) = lookup(PARALLEL_VAR) {
            config.parallel = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => return Err(Error::invalid_config(format!("{PARALLEL_VAR}={value}"))),
            };
        }
        Ok(config)
    }
}

/// Validates the declared share count `n` and threshold `k`.
///
/// A threshold above `n` is accepted: it yields no combination, which the
/// voter reports as [`Error::NoConsistentSecret`].
pub fn validate_threshold_config(n: usize, k: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::empty_share_set());
    }
    if k == 0 {
        return Err(Error::zero_threshold());
    }
    Ok(())
}
