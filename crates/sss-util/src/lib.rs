#![crate_name = "sss_util"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Utilities for the sss library.

mod combinations;

pub use combinations::Combinations;

/// Returns the binomial coefficient `C(n, k)`, or `None` if it does not fit
/// in a `usize`.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut r = 1usize;
    for i in 0..k {
        // r * (n - i) is always divisible by i + 1 since r = C(n, i).
        r = r.checked_mul(n - i)? / (i + 1);
    }
    Some(r)
}
