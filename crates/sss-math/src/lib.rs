#![crate_name = "sss_math"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Exact arithmetic for secret reconstruction: fractions over arbitrary
//! precision integers, and Lagrange interpolation at zero.

mod errors;

pub mod lagrange;
pub mod rational;

pub use errors::{Error, Result};
pub use lagrange::Division;
pub use rational::Rational;
