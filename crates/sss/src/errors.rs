//! Helper constructors for reconstruction errors.

/// Helper functions to create reconstruction errors using the general Error type.
impl crate::Error {
    /// Create a malformed input error for the given field.
    pub fn malformed<F: Into<String>, R: ToString>(field: F, reason: R) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a tally that holds no candidate secret.
    pub fn no_consistent_secret(combinations: usize, skipped: usize) -> Self {
        Self::NoConsistentSecret {
            combinations,
            skipped,
        }
    }

    /// Create an empty share set error.
    pub fn empty_share_set() -> Self {
        Self::TooFewValues(0, 1)
    }

    /// Create a zero threshold error.
    pub fn zero_threshold() -> Self {
        Self::UnspecifiedInput("Threshold must be at least 1".to_string())
    }

    /// Create an invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::UnspecifiedInput(format!("Invalid configuration: {}", msg.into()))
    }
}
