use crate::{Error, Result};
use itertools::Itertools;
use num_bigint::BigInt;
use sss_traits::ReportSink;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render the two-line text report.
pub fn render(secret: &BigInt, corrupted_ids: &[u64]) -> String {
    format!(
        "Reconstructed Secret: {}\nCorrupted Shares: [{}]\n",
        secret,
        corrupted_ids.iter().join(", ")
    )
}

/// A [`ReportSink`] writing the text report to `W`.
#[derive(Debug)]
pub struct TextReport<W: Write> {
    writer: W,
}

impl<W: Write> TextReport<W> {
    /// Create a report over `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the report and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextReport<BufWriter<File>> {
    /// Create (or truncate) the report file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    type Error = Error;

    fn write_report(&mut self, secret: &BigInt, corrupted_ids: &[u64]) -> Result<()> {
        self.writer
            .write_all(render(secret, corrupted_ids).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
