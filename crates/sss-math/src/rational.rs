//! Fractions of arbitrary precision integers.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg};

/// An exact fraction `numerator / denominator`.
///
/// The fraction is always in lowest terms with a strictly positive
/// denominator, so two equal values have equal representations and the
/// derived `PartialEq` is value equality. Arithmetic never rounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    /// Create the fraction `num / den` in lowest terms.
    ///
    /// Returns [`Error::DivisionByZero`] if `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(num, den))
    }

    /// Normalize the sign and divide out the gcd. `den` must be nonzero.
    fn reduced(mut num: BigInt, mut den: BigInt) -> Self {
        debug_assert!(!den.is_zero());
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let g = num.gcd(&den);
        if !g.is_one() {
            num /= &g;
            den /= &g;
        }
        Self { num, den }
    }

    /// The fraction `n / 1`.
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            num: n,
            den: BigInt::one(),
        }
    }

    /// The fraction `0 / 1`.
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// The fraction `1 / 1`.
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    /// The reduced numerator.
    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    /// The reduced denominator, always positive.
    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    /// Returns true if the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Returns true if the fraction is zero.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Convert to an integer, failing with [`Error::NonIntegral`] if the
    /// fraction has a nonzero remainder.
    pub fn to_integer_exact(&self) -> Result<BigInt> {
        if self.is_integer() {
            Ok(self.num.clone())
        } else {
            Err(Error::NonIntegral {
                numerator: self.num.clone(),
                denominator: self.den.clone(),
            })
        }
    }

    /// Convert to an integer by truncating division, rounding toward zero.
    pub fn to_integer_truncated(&self) -> BigInt {
        &self.num / &self.den
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        if self.den == rhs.den {
            return Rational::reduced(&self.num + &rhs.num, self.den.clone());
        }
        Rational::reduced(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::reduced(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, r| &acc + &r)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
