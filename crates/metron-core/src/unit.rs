//! Statically dimensioned unit values.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::dim::{DimDiv, DimInv, DimMul, DimSqrt, Dimension, InverseOf, ProductOf, QuotientOf, RootOf};
use crate::exponents::Exponents;
use crate::quantity::dims;
use crate::{Real, EPSILON};

/// A magnitude whose dimension `D` is part of its type.
///
/// `Unit<D>` is a `Copy` wrapper around a single [`Real`]; the dimension
/// costs nothing at run time. Arithmetic follows dimensional rules:
///
/// - `+` and `-` and every comparison require both operands to have the
///   same `D`; anything else is a type error.
/// - `*` and `/` between units produce a unit whose dimension is computed
///   by [`DimMul`] / [`DimDiv`].
/// - `*` and `/` by a bare [`Real`] keep the dimension; `Real / unit`
///   inverts it.
///
/// The magnitude is always expressed in internal base units; use the
/// constructors in [`definitions`](crate::definitions) to build values from
/// prefixed units.
///
/// ```
/// use metron_core::{Length, Time, Velocity, Zero};
///
/// let v: Velocity = Length::new(10.0) / Time::new(4.0);
/// assert_eq!(v.value(), 2.5);
/// assert!(v > Zero);
/// ```
///
/// Adding or comparing different dimensions does not compile:
///
/// ```compile_fail
/// use metron_core::{Length, Time};
///
/// let _ = Length::new(1.0) + Time::new(1.0);
/// ```
///
/// ```compile_fail
/// use metron_core::{Length, Time};
///
/// let _ = Length::new(1.0) - Time::new(1.0);
/// ```
///
/// ```compile_fail
/// use metron_core::{Length, Time};
///
/// let _ = Length::new(1.0) < Time::new(1.0);
/// ```
///
/// Neither does a product whose exponents leave `-7..=7`:
///
/// ```compile_fail
/// use metron_core::Volume;
///
/// let v = Volume::new(1.0);
/// let _ = v * v * v;
/// ```
pub struct Unit<D> {
    value: Real,
    _dim: PhantomData<D>,
}

impl<D: Dimension> Unit<D> {
    /// The dimension exponents of this unit type.
    pub const EXPONENTS: Exponents = D::EXPONENTS;

    /// The zero value.
    pub const ZERO: Self = Self::new(0.0);

    /// Wrap a magnitude already expressed in internal base units.
    pub const fn new(value: Real) -> Self {
        Self {
            value,
            _dim: PhantomData,
        }
    }

    /// The magnitude in internal base units.
    pub const fn value(self) -> Real {
        self.value
    }

    /// The dimension exponents of this unit type.
    pub const fn exponents(self) -> Exponents {
        D::EXPONENTS
    }

    /// Absolute value; the dimension is unchanged.
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Square root. Only available when every exponent of `D` is even.
    ///
    /// ```
    /// use metron_core::{Area, Length};
    ///
    /// let side: Length = Area::new(9.0).sqrt();
    /// assert_eq!(side.value(), 3.0);
    /// ```
    ///
    /// An odd exponent has no root:
    ///
    /// ```compile_fail
    /// use metron_core::Velocity;
    ///
    /// let _ = Velocity::new(1.0).sqrt();
    /// ```
    pub fn sqrt(self) -> Unit<RootOf<D>>
    where
        D: DimSqrt,
    {
        Unit::new(self.value.sqrt())
    }

    /// Reciprocal, `1 / self`, with every exponent negated.
    pub fn recip(self) -> Unit<InverseOf<D>>
    where
        D: DimInv,
    {
        Unit::new(1.0 / self.value)
    }

    /// The smaller of two values.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    /// The larger of two values.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.value.max(other.value))
    }
}

impl<D> Clone for Unit<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Unit<D> {}

impl<D: Dimension> Default for Unit<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> fmt::Debug for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit({:?} {})", self.value, D::EXPONENTS)
    }
}

/// Prints the bare magnitude. With the alternate flag (`{:#}`) the base-unit
/// exponents follow, e.g. `2.5 m s-1`.
impl<D: Dimension> fmt::Display for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if f.alternate() && !D::EXPONENTS.is_dimensionless() {
            write!(f, " {}", D::EXPONENTS)?;
        }
        Ok(())
    }
}

/// Equality used by every unit comparison: identical, or differing by less
/// than the machine epsilon.
pub(crate) fn approx_eq(a: Real, b: Real) -> bool {
    a == b || (a - b).abs() < EPSILON
}

pub(crate) fn approx_cmp(a: Real, b: Real) -> Option<Ordering> {
    if approx_eq(a, b) {
        Some(Ordering::Equal)
    } else {
        a.partial_cmp(&b)
    }
}

// ── Comparison ─────────────────────────────────────────────────────

impl<D: Dimension> PartialEq for Unit<D> {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.value, other.value)
    }
}

impl<D: Dimension> PartialOrd for Unit<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        approx_cmp(self.value, other.value)
    }
}

// ── Arithmetic ─────────────────────────────────────────────────────

impl<D: Dimension> Neg for Unit<D> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<D: Dimension> Add for Unit<D> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<D: Dimension> Sub for Unit<D> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<D: Dimension> AddAssign for Unit<D> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<D: Dimension> SubAssign for Unit<D> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<D1, D2> Mul<Unit<D2>> for Unit<D1>
where
    D1: DimMul<D2>,
    D2: Dimension,
{
    type Output = Unit<ProductOf<D1, D2>>;
    fn mul(self, rhs: Unit<D2>) -> Self::Output {
        Unit::new(self.value * rhs.value)
    }
}

impl<D1, D2> Div<Unit<D2>> for Unit<D1>
where
    D1: DimDiv<D2>,
    D2: Dimension,
{
    type Output = Unit<QuotientOf<D1, D2>>;
    fn div(self, rhs: Unit<D2>) -> Self::Output {
        Unit::new(self.value / rhs.value)
    }
}

impl<D: Dimension> Mul<Real> for Unit<D> {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<D: Dimension> Mul<Unit<D>> for Real {
    type Output = Unit<D>;
    fn mul(self, rhs: Unit<D>) -> Unit<D> {
        Unit::new(self * rhs.value)
    }
}

impl<D: Dimension> Div<Real> for Unit<D> {
    type Output = Self;
    fn div(self, rhs: Real) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<D: DimInv> Div<Unit<D>> for Real {
    type Output = Unit<InverseOf<D>>;
    fn div(self, rhs: Unit<D>) -> Self::Output {
        Unit::new(self / rhs.value)
    }
}

impl<D: Dimension> MulAssign<Real> for Unit<D> {
    fn mul_assign(&mut self, rhs: Real) {
        self.value *= rhs;
    }
}

impl<D: Dimension> DivAssign<Real> for Unit<D> {
    fn div_assign(&mut self, rhs: Real) {
        self.value /= rhs;
    }
}

impl<D: Dimension> Sum for Unit<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(|u| u.value).sum())
    }
}

impl<'a, D: Dimension> Sum<&'a Unit<D>> for Unit<D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<D: Dimension> num_traits::Zero for Unit<D> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        approx_eq(self.value, 0.0)
    }
}

// ── Dimensionless interop ──────────────────────────────────────────

impl From<Real> for Unit<dims::Dimensionless> {
    fn from(value: Real) -> Self {
        Self::new(value)
    }
}

impl From<Unit<dims::Dimensionless>> for Real {
    fn from(unit: Unit<dims::Dimensionless>) -> Real {
        unit.value
    }
}

// ── Zero ───────────────────────────────────────────────────────────

/// The universal zero.
///
/// Compares against, and converts into, a unit of any dimension, so code can
/// write `length > Zero` or `let l: Length = Zero.into()` without naming a
/// unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Zero;

impl<D: Dimension> From<Zero> for Unit<D> {
    fn from(_: Zero) -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> PartialEq<Zero> for Unit<D> {
    fn eq(&self, _: &Zero) -> bool {
        approx_eq(self.value, 0.0)
    }
}

impl<D: Dimension> PartialEq<Unit<D>> for Zero {
    fn eq(&self, other: &Unit<D>) -> bool {
        approx_eq(0.0, other.value)
    }
}

impl<D: Dimension> PartialOrd<Zero> for Unit<D> {
    fn partial_cmp(&self, _: &Zero) -> Option<Ordering> {
        approx_cmp(self.value, 0.0)
    }
}

impl<D: Dimension> PartialOrd<Unit<D>> for Zero {
    fn partial_cmp(&self, other: &Unit<D>) -> Option<Ordering> {
        approx_cmp(0.0, other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::{Area, Dimensionless, Frequency, Length, Mass, Time, Velocity};
    use proptest::prelude::*;

    #[test]
    fn add_and_sub_keep_dimension() {
        let mut l = Length::new(1.5) + Length::new(2.5);
        assert_eq!(l.value(), 4.0);
        l -= Length::new(1.0);
        assert_eq!(l, Length::new(3.0));
        assert_eq!((-l).value(), -3.0);
    }

    #[test]
    fn scalar_scaling() {
        let t = Time::new(2.0) * 3.0;
        assert_eq!(t.value(), 6.0);
        assert_eq!((0.5 * t).value(), 3.0);
        let mut m = Mass::new(8.0);
        m /= 4.0;
        m *= 3.0;
        assert_eq!(m.value(), 6.0);
    }

    #[test]
    fn reciprocal_inverts_dimension() {
        let f: Frequency = 2.0 / Time::new(4.0);
        assert_eq!(f.value(), 0.5);
        assert_eq!(Time::new(2.0).recip(), f);
    }

    #[test]
    fn equality_is_within_machine_epsilon() {
        let a = Length::new(0.1 + 0.2);
        assert_eq!(a, Length::new(0.3));
        assert_ne!(Length::new(1.0), Length::new(1.0 + 1e-9));
    }

    #[test]
    fn ordering_and_zero() {
        assert!(Length::new(1.0) < Length::new(2.0));
        assert!(Length::new(-1.0) < Zero);
        assert!(Zero < Length::new(1.0));
        assert_eq!(Length::new(0.0), Zero);
        assert_eq!(Zero, Mass::new(0.0));
        let l: Length = Zero.into();
        assert_eq!(l.value(), 0.0);
    }

    #[test]
    fn abs_and_sqrt() {
        let side: Length = Area::new(16.0).sqrt();
        assert_eq!(side.value(), 4.0);
        assert_eq!(Velocity::new(-2.0).abs().value(), 2.0);
    }

    #[test]
    fn sum_of_units() {
        let total: Length = [1.0, 2.0, 3.0].iter().map(|&v| Length::new(v)).sum();
        assert_eq!(total.value(), 6.0);
        let parts = [Length::new(1.0), Length::new(4.0)];
        let total: Length = parts.iter().sum();
        assert_eq!(total.value(), 5.0);
    }

    #[test]
    fn display_formats() {
        let v = Velocity::new(2.5);
        assert_eq!(v.to_string(), "2.5");
        assert_eq!(format!("{v:#}"), "2.5 m s-1");
        assert_eq!(format!("{:.2}", Length::new(1.0)), "1.00");
        assert_eq!(format!("{:#}", Dimensionless::new(3.0)), "3");
    }

    #[test]
    fn dimensionless_converts_to_real() {
        let ratio: Dimensionless = Length::new(3.0) / Length::new(2.0);
        let r: Real = ratio.into();
        assert_eq!(r, 1.5);
    }

    proptest! {
        #[test]
        fn mul_then_div_restores(a in -1e6f64..1e6, b in prop_oneof![-1e6f64..-1e-3, 1e-3f64..1e6]) {
            let l = Length::new(a);
            let t = Time::new(b);
            let back: Length = (l * t) / t;
            prop_assert!((back.value() - a).abs() <= a.abs() * 1e-12 + 1e-12);
        }

        #[test]
        fn product_exponents_are_sums(a in -1e3f64..1e3, b in -1e3f64..1e3) {
            let p = Length::new(a) * Velocity::new(b);
            prop_assert_eq!(p.exponents(), Length::EXPONENTS.mul(Velocity::EXPONENTS));
            let q = Length::new(a) / Velocity::new(b);
            prop_assert_eq!(q.exponents(), Length::EXPONENTS.div(Velocity::EXPONENTS));
        }
    }
}
