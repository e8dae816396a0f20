use num_bigint::BigInt;
use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates that a fraction was built with a zero denominator.
    #[error("Division by zero")]
    DivisionByZero,

    /// Indicates that two interpolation points share the same x-coordinate.
    #[error("Duplicate x-coordinate {0} in interpolation points")]
    DuplicateAbscissa(BigInt),

    /// Indicates that an exact integer was expected from a fraction.
    #[error("Value {numerator}/{denominator} is not an integer")]
    NonIntegral {
        /// Reduced numerator.
        numerator: BigInt,
        /// Reduced denominator, greater than one.
        denominator: BigInt,
    },
}

#[cfg(test)]
mod tests {
    use super::Error;
    use num_bigint::BigInt;

    #[test]
    fn error_strings() {
        assert_eq!(Error::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            Error::DuplicateAbscissa(BigInt::from(3)).to_string(),
            "Duplicate x-coordinate 3 in interpolation points"
        );
        assert_eq!(
            Error::NonIntegral {
                numerator: BigInt::from(-7),
                denominator: BigInt::from(2)
            }
            .to_string(),
            "Value -7/2 is not an integer"
        );
    }
}
