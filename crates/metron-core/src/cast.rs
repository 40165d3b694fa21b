//! Conversions between static and dynamic units.
//!
//! Widening (`Unit<D>` into [`DynUnit`]) always succeeds. Narrowing is the
//! one fallible operation of the unit system: it succeeds when the run-time
//! exponents equal the target's compile-time exponents, or when the value
//! is the universal zero, and otherwise reports the first differing base
//! dimension as a [`CastError`].

use crate::dim::Dimension;
use crate::dynamic::DynUnit;
use crate::error::CastError;
use crate::exponents::Exponents;
use crate::unit::Unit;
use crate::Real;

impl<D: Dimension> From<Unit<D>> for DynUnit {
    fn from(unit: Unit<D>) -> Self {
        DynUnit::new(unit.value(), D::EXPONENTS)
    }
}

impl<D: Dimension> Unit<D> {
    /// Narrow a dynamic value into this static dimension.
    ///
    /// The magnitude is preserved exactly.
    ///
    /// ```
    /// use metron_core::{BaseDimension, DynUnit, Exponents, Length, Mass};
    ///
    /// let parsed = DynUnit::new(10.0, Exponents::new(1, 0, 0, 0, 0, 0, 0));
    /// assert_eq!(Length::try_from_dyn(parsed).unwrap().value(), 10.0);
    ///
    /// let err = Mass::try_from_dyn(parsed).unwrap_err();
    /// assert_eq!(err.dimension, BaseDimension::Length);
    ///
    /// // The universal zero fits any dimension.
    /// assert!(Mass::try_from_dyn(DynUnit::ZERO).is_ok());
    /// ```
    pub fn try_from_dyn(value: DynUnit) -> Result<Self, CastError> {
        if !value.is_universal_zero() {
            CastError::check(value.exponents(), D::EXPONENTS)?;
        }
        Ok(Self::new(value.value()))
    }
}

impl<D: Dimension> TryFrom<DynUnit> for Unit<D> {
    type Error = CastError;

    fn try_from(value: DynUnit) -> Result<Self, CastError> {
        Self::try_from_dyn(value)
    }
}

/// Only dimensionless values convert to a bare number.
impl TryFrom<DynUnit> for Real {
    type Error = CastError;

    fn try_from(value: DynUnit) -> Result<Self, CastError> {
        CastError::check(value.exponents(), Exponents::DIMENSIONLESS)?;
        Ok(value.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BaseDimension;
    use crate::quantity::*;
    use proptest::prelude::*;

    fn arb_exponents() -> impl Strategy<Value = Exponents> {
        prop::array::uniform7(-3i8..=3).prop_map(Exponents::from_array)
    }

    #[test]
    fn widening_copies_exponents() {
        let d = DynUnit::from(Force::new(5.0));
        assert_eq!(d.value(), 5.0);
        assert_eq!(d.exponents(), Exponents::new(1, -2, 1, 0, 0, 0, 0));
    }

    #[test]
    fn narrowing_checks_in_base_order() {
        // Differs in time and mass; time is reported first.
        let v = DynUnit::new(1.0, Exponents::new(1, -1, 0, 0, 0, 0, 0));
        let err = Force::try_from(v).unwrap_err();
        assert_eq!(err.dimension, BaseDimension::Time);
        assert_eq!((err.expected, err.actual), (-2, -1));

        let v = DynUnit::new(1.0, Exponents::new(0, 0, 0, 0, 0, 1, 1));
        let err = AmountOfSubstance::try_from(v).unwrap_err();
        assert_eq!(err.dimension, BaseDimension::Intensity);
    }

    #[test]
    fn nonzero_dimensionless_is_not_a_mass() {
        let err = Mass::try_from(DynUnit::dimensionless(0.1)).unwrap_err();
        assert_eq!(err.dimension, BaseDimension::Mass);
    }

    #[test]
    fn zero_with_dimension_is_not_universal() {
        let zero_seconds = DynUnit::new(0.0, Exponents::new(0, 1, 0, 0, 0, 0, 0));
        assert!(Length::try_from(zero_seconds).is_err());
    }

    #[test]
    fn real_requires_dimensionless() {
        assert_eq!(Real::try_from(DynUnit::dimensionless(0.5)), Ok(0.5));
        assert!(Real::try_from(DynUnit::from(Length::new(1.0))).is_err());
    }

    proptest! {
        #[test]
        fn matching_exponents_preserve_magnitude(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
            let d = DynUnit::new(v, Velocity::EXPONENTS);
            let back = Velocity::try_from(d).unwrap();
            prop_assert_eq!(back.value().to_bits(), v.to_bits());
        }

        #[test]
        fn mismatching_exponents_fail(e in arb_exponents(), v in 1e-6f64..1e6) {
            prop_assume!(e != Velocity::EXPONENTS);
            prop_assert!(Velocity::try_from(DynUnit::new(v, e)).is_err());
        }

        #[test]
        fn universal_zero_converts_anywhere(_e in arb_exponents()) {
            prop_assert_eq!(Length::try_from(DynUnit::ZERO).unwrap().value(), 0.0);
            prop_assert_eq!(Pressure::try_from(DynUnit::ZERO).unwrap().value(), 0.0);
            prop_assert_eq!(MolarConcentration::try_from(DynUnit::ZERO).unwrap().value(), 0.0);
        }
    }
}
