//! Dynamically dimensioned unit values.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::dim::Dimension;
use crate::error::DimensionMismatch;
use crate::exponents::Exponents;
use crate::unit::{approx_cmp, approx_eq, Unit, Zero};
use crate::Real;

/// A magnitude paired with run-time [`Exponents`].
///
/// This is what the parser produces: the dimension of a configuration
/// value is not known to the type system until the caller narrows it with
/// `Unit::<D>::try_from`.
///
/// Multiplication and division always succeed and combine exponents at run
/// time. Addition and subtraction check that both operands have the same
/// exponents; the operators panic on a mismatch and
/// [`try_add`](DynUnit::try_add) / [`try_sub`](DynUnit::try_sub) return the
/// error instead. The universal zero (magnitude `0.0`, no dimension) is
/// compatible with every dimension.
///
/// ```
/// use metron_core::{DynUnit, Exponents};
///
/// let length = DynUnit::new(3.0, Exponents::new(1, 0, 0, 0, 0, 0, 0));
/// let time = DynUnit::new(2.0, Exponents::new(0, 1, 0, 0, 0, 0, 0));
/// let v = length / time;
/// assert_eq!(v.value(), 1.5);
/// assert_eq!(v.exponents().to_string(), "m s-1");
/// assert!(length.try_add(time).is_err());
/// ```
#[derive(Clone, Copy, Default)]
pub struct DynUnit {
    value: Real,
    exponents: Exponents,
}

impl DynUnit {
    /// The universal zero.
    pub const ZERO: Self = Self::dimensionless(0.0);

    /// A value with explicit exponents.
    pub const fn new(value: Real, exponents: Exponents) -> Self {
        Self { value, exponents }
    }

    /// A dimensionless value.
    pub const fn dimensionless(value: Real) -> Self {
        Self::new(value, Exponents::DIMENSIONLESS)
    }

    /// The magnitude in internal base units.
    pub const fn value(self) -> Real {
        self.value
    }

    /// The run-time dimension.
    pub const fn exponents(self) -> Exponents {
        self.exponents
    }

    /// `true` for an exact `0.0` with no dimension, which converts to and
    /// combines with any dimension.
    pub fn is_universal_zero(self) -> bool {
        self.value == 0.0 && self.exponents.is_dimensionless()
    }

    /// Exponents shared by `self` and `rhs`, treating the universal zero as
    /// compatible with anything.
    fn shared_exponents(
        self,
        rhs: Self,
        operation: &'static str,
    ) -> Result<Exponents, DimensionMismatch> {
        if self.exponents == rhs.exponents || self.is_universal_zero() {
            Ok(rhs.exponents)
        } else if rhs.is_universal_zero() {
            Ok(self.exponents)
        } else {
            Err(DimensionMismatch {
                operation,
                lhs: self.exponents,
                rhs: rhs.exponents,
            })
        }
    }

    fn comparable(self, rhs: Self) -> bool {
        self.exponents == rhs.exponents || self.is_universal_zero() || rhs.is_universal_zero()
    }

    /// Checked addition.
    pub fn try_add(self, rhs: Self) -> Result<Self, DimensionMismatch> {
        let exponents = self.shared_exponents(rhs, "add")?;
        Ok(Self::new(self.value + rhs.value, exponents))
    }

    /// Checked subtraction.
    pub fn try_sub(self, rhs: Self) -> Result<Self, DimensionMismatch> {
        let exponents = self.shared_exponents(rhs, "subtract")?;
        Ok(Self::new(self.value - rhs.value, exponents))
    }

    /// Absolute value; the dimension is unchanged.
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.exponents)
    }

    /// Square root with halved exponents, or `None` if any exponent is odd.
    pub fn sqrt(self) -> Option<Self> {
        self.exponents
            .sqrt()
            .map(|exponents| Self::new(self.value.sqrt(), exponents))
    }

    /// Reciprocal with negated exponents.
    pub fn recip(self) -> Self {
        Self::new(1.0 / self.value, self.exponents.inv())
    }
}

impl fmt::Debug for DynUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynUnit({:?} {})", self.value, self.exponents)
    }
}

/// Prints the bare magnitude; `{:#}` appends the exponents.
impl fmt::Display for DynUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if f.alternate() && !self.exponents.is_dimensionless() {
            write!(f, " {}", self.exponents)?;
        }
        Ok(())
    }
}

// ── Comparison ─────────────────────────────────────────────────────

/// Values of different dimensions are never equal, except that the
/// universal zero compares by magnitude against anything.
impl PartialEq for DynUnit {
    fn eq(&self, other: &Self) -> bool {
        self.comparable(*other) && approx_eq(self.value, other.value)
    }
}

impl PartialOrd for DynUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.comparable(*other) {
            return None;
        }
        approx_cmp(self.value, other.value)
    }
}

impl<D: Dimension> PartialEq<Unit<D>> for DynUnit {
    fn eq(&self, other: &Unit<D>) -> bool {
        *self == DynUnit::from(*other)
    }
}

impl<D: Dimension> PartialEq<DynUnit> for Unit<D> {
    fn eq(&self, other: &DynUnit) -> bool {
        DynUnit::from(*self) == *other
    }
}

impl<D: Dimension> PartialOrd<Unit<D>> for DynUnit {
    fn partial_cmp(&self, other: &Unit<D>) -> Option<Ordering> {
        self.partial_cmp(&DynUnit::from(*other))
    }
}

impl<D: Dimension> PartialOrd<DynUnit> for Unit<D> {
    fn partial_cmp(&self, other: &DynUnit) -> Option<Ordering> {
        DynUnit::from(*self).partial_cmp(other)
    }
}

impl PartialEq<Zero> for DynUnit {
    fn eq(&self, _: &Zero) -> bool {
        approx_eq(self.value, 0.0)
    }
}

impl PartialEq<DynUnit> for Zero {
    fn eq(&self, other: &DynUnit) -> bool {
        approx_eq(0.0, other.value)
    }
}

impl PartialOrd<Zero> for DynUnit {
    fn partial_cmp(&self, _: &Zero) -> Option<Ordering> {
        approx_cmp(self.value, 0.0)
    }
}

impl PartialOrd<DynUnit> for Zero {
    fn partial_cmp(&self, other: &DynUnit) -> Option<Ordering> {
        approx_cmp(0.0, other.value)
    }
}

impl From<Zero> for DynUnit {
    fn from(_: Zero) -> Self {
        Self::ZERO
    }
}

// ── Arithmetic ─────────────────────────────────────────────────────

impl Neg for DynUnit {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value, self.exponents)
    }
}

/// # Panics
///
/// Panics if the operands have different dimensions and neither is the
/// universal zero. Use [`DynUnit::try_add`] to handle the mismatch.
impl Add for DynUnit {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.try_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// # Panics
///
/// Panics if the operands have different dimensions and neither is the
/// universal zero. Use [`DynUnit::try_sub`] to handle the mismatch.
impl Sub for DynUnit {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.try_sub(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl AddAssign for DynUnit {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for DynUnit {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for DynUnit {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value, self.exponents.mul(rhs.exponents))
    }
}

impl Div for DynUnit {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value / rhs.value, self.exponents.div(rhs.exponents))
    }
}

impl Mul<Real> for DynUnit {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self {
        Self::new(self.value * rhs, self.exponents)
    }
}

impl Mul<DynUnit> for Real {
    type Output = DynUnit;
    fn mul(self, rhs: DynUnit) -> DynUnit {
        DynUnit::new(self * rhs.value, rhs.exponents)
    }
}

impl Div<Real> for DynUnit {
    type Output = Self;
    fn div(self, rhs: Real) -> Self {
        Self::new(self.value / rhs, self.exponents)
    }
}

impl Div<DynUnit> for Real {
    type Output = DynUnit;
    fn div(self, rhs: DynUnit) -> DynUnit {
        DynUnit::new(self / rhs.value, rhs.exponents.inv())
    }
}

impl MulAssign<Real> for DynUnit {
    fn mul_assign(&mut self, rhs: Real) {
        self.value *= rhs;
    }
}

impl DivAssign<Real> for DynUnit {
    fn div_assign(&mut self, rhs: Real) {
        self.value /= rhs;
    }
}

impl Sum for DynUnit {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

/// `zero()` is the universal zero, so accumulations may start from it
/// regardless of the dimension being summed.
impl num_traits::Zero for DynUnit {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        approx_eq(self.value, 0.0)
    }
}

// ── Mixed static/dynamic arithmetic ────────────────────────────────

macro_rules! mixed_ops {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl<D: Dimension> $trait<Unit<D>> for DynUnit {
                type Output = DynUnit;
                fn $method(self, rhs: Unit<D>) -> DynUnit {
                    $trait::$method(self, DynUnit::from(rhs))
                }
            }

            impl<D: Dimension> $trait<DynUnit> for Unit<D> {
                type Output = DynUnit;
                fn $method(self, rhs: DynUnit) -> DynUnit {
                    $trait::$method(DynUnit::from(self), rhs)
                }
            }
        )*
    };
}

mixed_ops!(Add::add, Sub::sub, Mul::mul, Div::div);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::{Length, Time};

    const M: Exponents = Exponents::new(1, 0, 0, 0, 0, 0, 0);
    const S: Exponents = Exponents::new(0, 1, 0, 0, 0, 0, 0);

    #[test]
    fn mul_div_combine_exponents() {
        let a = DynUnit::new(6.0, M);
        let b = DynUnit::new(2.0, S);
        assert_eq!((a * b).exponents(), Exponents::new(1, 1, 0, 0, 0, 0, 0));
        assert_eq!((a / b).exponents(), Exponents::new(1, -1, 0, 0, 0, 0, 0));
        assert_eq!((a / b).value(), 3.0);
    }

    #[test]
    fn add_checks_dimensions() {
        let a = DynUnit::new(1.0, M);
        let b = DynUnit::new(2.0, M);
        assert_eq!(a + b, DynUnit::new(3.0, M));
        let err = a.try_sub(DynUnit::new(1.0, S)).unwrap_err();
        assert_eq!(err.operation, "subtract");
        assert_eq!((err.lhs, err.rhs), (M, S));
    }

    #[test]
    #[should_panic(expected = "cannot add units of dimension [m] and [s]")]
    fn add_operator_panics_on_mismatch() {
        let _ = DynUnit::new(1.0, M) + DynUnit::new(1.0, S);
    }

    #[test]
    fn universal_zero_adopts_other_dimension() {
        let sum = DynUnit::ZERO + DynUnit::new(4.0, S);
        assert_eq!(sum.exponents(), S);
        let diff = DynUnit::new(4.0, S) - DynUnit::ZERO;
        assert_eq!(diff.exponents(), S);
        let total: DynUnit = [1.0, 2.0].iter().map(|&v| DynUnit::new(v, M)).sum();
        assert_eq!(total, DynUnit::new(3.0, M));
    }

    #[test]
    fn comparison_requires_matching_dimension() {
        let a = DynUnit::new(1.0, M);
        let b = DynUnit::new(1.0, S);
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(a < DynUnit::new(2.0, M));
        assert!(DynUnit::ZERO < a);
        assert!(a > Zero);
        assert_eq!(DynUnit::new(0.0, S), Zero);
    }

    #[test]
    fn mixed_with_static() {
        let l = Length::new(4.0);
        let t = DynUnit::new(2.0, S);
        let v = l / t;
        assert_eq!(v.exponents(), Exponents::new(1, -1, 0, 0, 0, 0, 0));
        assert_eq!(v.value(), 2.0);
        assert_eq!(DynUnit::new(4.0, M), l);
        assert_eq!(l + DynUnit::new(1.0, M), Length::new(5.0));
        assert!(Time::new(1.0) < t);
    }

    #[test]
    fn reciprocal_and_root() {
        let area = DynUnit::new(9.0, Exponents::new(2, 0, 0, 0, 0, 0, 0));
        assert_eq!(area.sqrt(), Some(DynUnit::new(3.0, M)));
        assert_eq!(DynUnit::new(9.0, M).sqrt(), None);
        let hz = (2.0 / DynUnit::new(4.0, S)).exponents();
        assert_eq!(hz, Exponents::new(0, -1, 0, 0, 0, 0, 0));
        assert_eq!(DynUnit::new(4.0, S).recip().value(), 0.25);
    }

    #[test]
    fn alternate_display_shows_exponents() {
        let v = DynUnit::new(2.0, Exponents::new(1, -1, 0, 0, 0, 0, 0));
        assert_eq!(format!("{v}"), "2");
        assert_eq!(format!("{v:#}"), "2 m s-1");
    }
}
