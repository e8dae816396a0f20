#![crate_name = "sss"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Reconstruction of a Shamir-shared secret from a pool of shares of which
//! some may be corrupted, together with the identification of the corrupted
//! shares.
//!
//! Every size-`k` subset of the shares is interpolated at zero in exact
//! rational arithmetic; the candidate secrets are tallied and the most
//! frequent one wins. Shares that never took part in a winning subset are
//! reported as corrupted. The enumeration is exhaustive, so the cost grows as
//! `C(n, k)`.

/// Configuration and validation of a reconstruction.
pub mod config;
/// Decoding of the JSON input document.
pub mod document;
/// Helper constructors for the error type.
pub mod errors;
/// Writing of the text report.
pub mod report;
/// Shares and share sets.
pub mod share;
/// Majority voting over the interpolated candidate secrets.
pub mod voting;

pub use config::VoterConfig;
pub use document::ShareDocument;
pub use report::TextReport;
pub use share::{Share, ShareSet};
pub use voting::{ConsistencyVoter, Reconstruction, Vote, VoteTally};

use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates that no combination produced a candidate secret.
    #[error("No consistent secret found: {skipped} of {combinations} combinations were rejected")]
    NoConsistentSecret {
        /// Number of combinations enumerated.
        combinations: usize,
        /// Number of combinations skipped as degenerate or inconsistent.
        skipped: usize,
    },

    /// Indicates that the input document is malformed.
    #[error("Malformed input at `{field}`: {reason}")]
    MalformedInput {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Indicates that too few values were provided.
    #[error("Too few values provided: {0} is below limit {1}")]
    TooFewValues(usize, usize),

    /// Indicates an input error.
    #[error("{0}")]
    UnspecifiedInput(String),

    /// Indicates an I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
