//! Lagrange interpolation at zero over the rationals.
//!
//! Given `k` points with pairwise distinct x-coordinates, the unique
//! polynomial of degree `< k` through them evaluates at zero to
//!
//! ```text
//! f(0) = sum_j y_j * prod_{m != j} (-x_m) / (x_j - x_m)
//! ```
//!
//! Every term is accumulated as an exact [`Rational`]; only the final value
//! is reduced to an integer, according to a [`Division`] policy.

use crate::{Error, Rational, Result};
use num_bigint::BigInt;
use num_traits::One;

/// How the interpolated value at zero is reduced to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Division {
    /// Fail with [`Error::NonIntegral`] unless the value is an integer. Points
    /// lying on an integer polynomial always interpolate to an integer, so a
    /// remainder means the points are inconsistent.
    #[default]
    Exact,
    /// Divide numerator by denominator, truncating toward zero.
    Truncate,
}

/// Returns the exact value at zero of the polynomial through `points`.
///
/// Fails with [`Error::DuplicateAbscissa`] if two points share an
/// x-coordinate. An empty slice interpolates to zero.
pub fn lagrange_constant(points: &[(BigInt, BigInt)]) -> Result<Rational> {
    let mut acc = Rational::zero();
    for (j, (xj, yj)) in points.iter().enumerate() {
        let mut num = yj.clone();
        let mut den = BigInt::one();
        for (m, (xm, _)) in points.iter().enumerate() {
            if m == j {
                continue;
            }
            num *= -xm;
            den *= xj - xm;
        }
        let term = Rational::new(num, den).map_err(|e| match e {
            Error::DivisionByZero => Error::DuplicateAbscissa(xj.clone()),
            e => e,
        })?;
        acc = &acc + &term;
    }
    Ok(acc)
}

/// Returns the value at zero of the polynomial through `points`, reduced to an
/// integer with the given `division` policy.
pub fn interpolate_at_zero(points: &[(BigInt, BigInt)], division: Division) -> Result<BigInt> {
    let value = lagrange_constant(points)?;
    match division {
        Division::Exact => value.to_integer_exact(),
        Division::Truncate => Ok(value.to_integer_truncated()),
    }
}

#[cfg(test)]
mod tests {
    use super::{interpolate_at_zero, lagrange_constant, Division};
    use crate::{Error, Rational};
    use itertools::Itertools;
    use num_bigint::BigInt;
    use proptest::collection::{btree_set, vec};
    use proptest::prelude::*;

    fn points(raw: &[(i64, i64)]) -> Vec<(BigInt, BigInt)> {
        raw.iter()
            .map(|&(x, y)| (BigInt::from(x), BigInt::from(y)))
            .collect()
    }

    fn eval(coeffs: &[i64], x: i64) -> BigInt {
        coeffs
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, c| acc * x + *c)
    }

    #[test]
    fn quadratic() -> Result<(), Error> {
        // f(x) = 3 + 2x + x^2
        let pts = points(&[(1, 6), (2, 11), (3, 18), (4, 27)]);
        for subset in pts.iter().cloned().combinations(3) {
            assert_eq!(interpolate_at_zero(&subset, Division::Exact)?, BigInt::from(3));
        }
        Ok(())
    }

    #[test]
    fn single_point_and_empty() -> Result<(), Error> {
        assert_eq!(
            interpolate_at_zero(&points(&[(7, -42)]), Division::Exact)?,
            BigInt::from(-42)
        );
        assert_eq!(lagrange_constant(&[])?, Rational::zero());
        Ok(())
    }

    #[test]
    fn duplicate_abscissa() {
        let pts = points(&[(1, 6), (2, 11), (1, 18)]);
        assert_eq!(
            lagrange_constant(&pts),
            Err(Error::DuplicateAbscissa(BigInt::from(1)))
        );
        assert_eq!(
            interpolate_at_zero(&pts, Division::Truncate),
            Err(Error::DuplicateAbscissa(BigInt::from(1)))
        );
    }

    #[test]
    fn inconsistent_points() {
        // The line through (1, 0) and (3, 1) crosses zero at -1/2.
        let pts = points(&[(1, 0), (3, 1)]);
        assert_eq!(
            lagrange_constant(&pts),
            Ok(Rational::new(BigInt::from(-1), BigInt::from(2)).unwrap())
        );
        assert_eq!(
            interpolate_at_zero(&pts, Division::Exact),
            Err(Error::NonIntegral {
                numerator: BigInt::from(-1),
                denominator: BigInt::from(2)
            })
        );
        assert_eq!(
            interpolate_at_zero(&pts, Division::Truncate),
            Ok(BigInt::from(0))
        );
    }

    #[test]
    fn large_values() -> Result<(), Error> {
        let secret: BigInt = "123456789012345678901234567890123456789".parse().unwrap();
        let slope: BigInt = "987654321098765432109876543210".parse().unwrap();
        let pts: Vec<(BigInt, BigInt)> = [3u64, 10]
            .iter()
            .map(|&x| (BigInt::from(x), &secret + &slope * x))
            .collect();
        assert_eq!(interpolate_at_zero(&pts, Division::Exact)?, secret);
        Ok(())
    }

    proptest! {
        #[test]
        fn recovers_constant_term(
            coeffs in vec(-1_000_000i64..1_000_000, 1..6),
            xs in btree_set(-50i64..50, 6..10),
        ) {
            let k = coeffs.len();
            let xs = xs.into_iter().filter(|x| *x != 0).collect_vec();
            prop_assume!(xs.len() >= k);
            let pts = xs.iter().map(|&x| (BigInt::from(x), eval(&coeffs, x))).collect_vec();
            for subset in pts.into_iter().combinations(k).take(20) {
                prop_assert_eq!(
                    interpolate_at_zero(&subset, Division::Exact).unwrap(),
                    BigInt::from(coeffs[0])
                );
            }
        }
    }
}
