//! The JSON input document.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every key other than `keys` is a share id; its `value` is written in the
//! radix given by `base`, between 2 and 36.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_traits::Num;
use serde::Deserialize;
use serde_json::Value;
use sss_traits::ShareSource;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const KEYS: &str = "keys";

/// The declared share count and threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keys {
    /// Declared share count.
    pub n: usize,
    /// Reconstruction threshold.
    pub k: usize,
}

impl Keys {
    /// Decode the `keys` object, naming `keys.n` or `keys.k` in errors.
    fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::malformed(KEYS, "expected an object"));
        }
        let count = |name: &str| -> Result<usize> {
            let field = format!("{KEYS}.{name}");
            let v = value
                .get(name)
                .ok_or_else(|| Error::malformed(&field, "missing field"))?;
            usize::deserialize(v).map_err(|e| Error::malformed(field, e))
        };
        Ok(Self {
            n: count("n")?,
            k: count("k")?,
        })
    }
}

/// A share value in textual form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncodedShare {
    /// The radix, as a decimal string.
    pub base: String,
    /// The digits of the value in that radix.
    pub value: String,
}

impl EncodedShare {
    /// Decode the value; `field` names the share in error messages.
    pub fn decode(&self, field: &str) -> Result<BigInt> {
        let base = self
            .base
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|b| (2..=36).contains(b))
            .ok_or_else(|| {
                Error::malformed(
                    format!("{field}.base"),
                    format!("expected a radix between 2 and 36, found {:?}", self.base),
                )
            })?;
        // from_str_radix accepts digit separators, which are not part of the format.
        if self.value.contains('_') {
            return Err(Error::malformed(
                format!("{field}.value"),
                format!("{:?} contains a digit separator", self.value),
            ));
        }
        BigInt::from_str_radix(self.value.trim(), base).map_err(|e| {
            Error::malformed(
                format!("{field}.value"),
                format!("{:?} is not a base {base} integer: {e}", self.value),
            )
        })
    }
}

/// A parsed input document. Share entries are decoded lazily by
/// [`ShareSource::points`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShareDocument {
    keys: Keys,
    entries: BTreeMap<String, Value>,
}

impl ShareDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut entries: BTreeMap<String, Value> =
            serde_json::from_str(json).map_err(|e| Error::malformed("document", e))?;
        let keys = entries
            .remove(KEYS)
            .ok_or_else(|| Error::malformed(KEYS, "missing field"))?;
        Ok(Self {
            keys: Keys::from_value(&keys)?,
            entries,
        })
    }

    /// Read and parse a document from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The declared share count and threshold.
    pub fn keys(&self) -> Keys {
        self.keys
    }

    /// Number of share entries in the document.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn decode_entry(key: &str, entry: &Value) -> Result<(u64, BigInt)> {
        let id = key
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| Error::malformed(key, "share id must be a positive integer"))?;
        let encoded = EncodedShare::deserialize(entry).map_err(|e| Error::malformed(key, e))?;
        Ok((id, encoded.decode(key)?))
    }
}

impl ShareSource for ShareDocument {
    type Error = Error;

    fn declared_count(&self) -> usize {
        self.keys.n
    }

    fn threshold(&self) -> usize {
        self.keys.k
    }

    /// The decoded shares, sorted by id.
    fn points(&self) -> Result<Vec<(u64, BigInt)>> {
        let mut points = self
            .entries
            .iter()
            .map(|(key, entry)| Self::decode_entry(key, entry))
            .collect::<Result<Vec<_>>>()?;
        points.sort_by_key(|(id, _)| *id);
        Ok(points)
    }
}
