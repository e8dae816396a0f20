#![crate_name = "sss_traits"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Traits connecting the reconstruction engine with the components that feed
//! it shares and consume its result.

use num_bigint::BigInt;

/// A producer of shares, typically a decoded input document.
pub trait ShareSource {
    /// The type of error returned while decoding shares.
    type Error;

    /// The number of shares the source claims to hold.
    fn declared_count(&self) -> usize;

    /// The reconstruction threshold.
    fn threshold(&self) -> usize;

    /// Decode the shares as `(id, value)` points, in a deterministic order.
    fn points(&self) -> Result<Vec<(u64, BigInt)>, Self::Error>;
}

/// A consumer of the reconstruction outcome.
pub trait ReportSink {
    /// The type of error returned while writing the report.
    type Error;

    /// Record the reconstructed secret and the ids of the corrupted shares,
    /// given in ascending order.
    fn write_report(&mut self, secret: &BigInt, corrupted_ids: &[u64]) -> Result<(), Self::Error>;
}
