//! Error types for unit conversion and dynamic arithmetic.

use std::error::Error;
use std::fmt;

use crate::base::BaseDimension;
use crate::exponents::Exponents;

/// A dynamic unit could not be narrowed into a static dimension.
///
/// Carries the first base dimension (in [`BaseDimension`] order) whose
/// exponent disagreed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastError {
    /// The base dimension that differed.
    pub dimension: BaseDimension,
    /// Exponent required by the target type.
    pub expected: i8,
    /// Exponent carried by the value.
    pub actual: i8,
}

impl CastError {
    /// Compare `actual` against `expected`, reporting the first mismatch.
    pub fn check(actual: Exponents, expected: Exponents) -> Result<(), Self> {
        match actual.first_mismatch(expected) {
            None => Ok(()),
            Some((dimension, expected, actual)) => Err(Self {
                dimension,
                expected,
                actual,
            }),
        }
    }
}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "incompatible unit: {} exponent is {}, expected {}",
            self.dimension, self.actual, self.expected
        )
    }
}

impl Error for CastError {}

/// Two dynamic units of different dimensions were combined by an operation
/// that requires equal dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// The attempted operation (`"add"`, `"subtract"`).
    pub operation: &'static str,
    /// Exponents of the left operand.
    pub lhs: Exponents,
    /// Exponents of the right operand.
    pub rhs: Exponents,
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot {} units of dimension [{}] and [{}]",
            self.operation, self.lhs, self.rhs
        )
    }
}

impl Error for DimensionMismatch {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_first_mismatch() {
        let mass_like = Exponents::new(0, 0, 1, 0, 0, 0, 0);
        let err = CastError::check(Exponents::DIMENSIONLESS, mass_like).unwrap_err();
        assert_eq!(err.dimension, BaseDimension::Mass);
        assert_eq!((err.expected, err.actual), (1, 0));
        assert_eq!(
            err.to_string(),
            "incompatible unit: mass exponent is 0, expected 1"
        );
    }

    #[test]
    fn mismatch_message_names_both_sides() {
        let err = DimensionMismatch {
            operation: "add",
            lhs: Exponents::new(1, 0, 0, 0, 0, 0, 0),
            rhs: Exponents::new(0, 1, 0, 0, 0, 0, 0),
        };
        assert_eq!(err.to_string(), "cannot add units of dimension [m] and [s]");
    }
}
