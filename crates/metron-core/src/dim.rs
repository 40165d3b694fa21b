//! Static dimensions and their composition metafunctions.
//!
//! A static dimension is the type `Dim<L, T, M, I, K, N, J>` whose seven
//! parameters are [`int`](crate::int) markers. Two static dimensions are the
//! same dimension exactly when they are the same type, so addition and
//! comparison of incompatible quantities are rejected by the type checker.
//! The traits below compute the dimension of products, quotients,
//! reciprocals and square roots entirely at compile time.

use std::fmt;
use std::marker::PhantomData;

use crate::exponents::Exponents;
use crate::int::{DiffOf, HalfOf, Halve, Integer, NegOf, Negate, SumOf, Diff, Sum};

/// A dimension known at compile time.
///
/// Implemented only by [`Dim`]; the seven exponents are available as the
/// packed [`EXPONENTS`](Dimension::EXPONENTS) constant for the narrowing
/// conversion and for formatting.
pub trait Dimension: 'static {
    /// The exponents in [`BaseDimension`](crate::BaseDimension) order.
    const EXPONENTS: Exponents;
}

/// A static dimension with exponents `L` (length), `T` (time), `M` (mass),
/// `I` (current), `K` (temperature), `N` (substance) and `J` (intensity).
///
/// Never instantiated; it only appears as the type parameter of
/// [`Unit`](crate::Unit).
pub struct Dim<L, T, M, I, K, N, J>(PhantomData<(L, T, M, I, K, N, J)>);

impl<L, T, M, I, K, N, J> fmt::Debug for Dim<L, T, M, I, K, N, J>
where
    Self: Dimension,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dim({})", <Self as Dimension>::EXPONENTS)
    }
}

impl<L, T, M, I, K, N, J> Dimension for Dim<L, T, M, I, K, N, J>
where
    L: Integer,
    T: Integer,
    M: Integer,
    I: Integer,
    K: Integer,
    N: Integer,
    J: Integer,
{
    const EXPONENTS: Exponents = Exponents::new(
        L::VALUE,
        T::VALUE,
        M::VALUE,
        I::VALUE,
        K::VALUE,
        N::VALUE,
        J::VALUE,
    );
}

/// Dimension of `Self * Rhs`: exponents summed.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// The product dimension.
    type Output: Dimension;
}

/// Dimension of `Self / Rhs`: exponents subtracted.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// The quotient dimension.
    type Output: Dimension;
}

/// Dimension of `1 / Self`: exponents negated.
pub trait DimInv: Dimension {
    /// The reciprocal dimension.
    type Output: Dimension;
}

/// Dimension of `sqrt(Self)`: exponents halved. Only implemented when every
/// exponent is even.
pub trait DimSqrt: Dimension {
    /// The root dimension.
    type Output: Dimension;
}

impl<L1, T1, M1, I1, K1, N1, J1, L2, T2, M2, I2, K2, N2, J2> DimMul<Dim<L2, T2, M2, I2, K2, N2, J2>>
    for Dim<L1, T1, M1, I1, K1, N1, J1>
where
    L1: Sum<L2>,
    T1: Sum<T2>,
    M1: Sum<M2>,
    I1: Sum<I2>,
    K1: Sum<K2>,
    N1: Sum<N2>,
    J1: Sum<J2>,
    L2: Integer,
    T2: Integer,
    M2: Integer,
    I2: Integer,
    K2: Integer,
    N2: Integer,
    J2: Integer,
{
    type Output = Dim<
        SumOf<L1, L2>,
        SumOf<T1, T2>,
        SumOf<M1, M2>,
        SumOf<I1, I2>,
        SumOf<K1, K2>,
        SumOf<N1, N2>,
        SumOf<J1, J2>,
    >;
}

impl<L1, T1, M1, I1, K1, N1, J1, L2, T2, M2, I2, K2, N2, J2> DimDiv<Dim<L2, T2, M2, I2, K2, N2, J2>>
    for Dim<L1, T1, M1, I1, K1, N1, J1>
where
    L1: Diff<L2>,
    T1: Diff<T2>,
    M1: Diff<M2>,
    I1: Diff<I2>,
    K1: Diff<K2>,
    N1: Diff<N2>,
    J1: Diff<J2>,
    L2: Integer,
    T2: Integer,
    M2: Integer,
    I2: Integer,
    K2: Integer,
    N2: Integer,
    J2: Integer,
{
    type Output = Dim<
        DiffOf<L1, L2>,
        DiffOf<T1, T2>,
        DiffOf<M1, M2>,
        DiffOf<I1, I2>,
        DiffOf<K1, K2>,
        DiffOf<N1, N2>,
        DiffOf<J1, J2>,
    >;
}

impl<L, T, M, I, K, N, J> DimInv for Dim<L, T, M, I, K, N, J>
where
    L: Negate,
    T: Negate,
    M: Negate,
    I: Negate,
    K: Negate,
    N: Negate,
    J: Negate,
{
    type Output = Dim<NegOf<L>, NegOf<T>, NegOf<M>, NegOf<I>, NegOf<K>, NegOf<N>, NegOf<J>>;
}

impl<L, T, M, I, K, N, J> DimSqrt for Dim<L, T, M, I, K, N, J>
where
    L: Halve,
    T: Halve,
    M: Halve,
    I: Halve,
    K: Halve,
    N: Halve,
    J: Halve,
{
    type Output =
        Dim<HalfOf<L>, HalfOf<T>, HalfOf<M>, HalfOf<I>, HalfOf<K>, HalfOf<N>, HalfOf<J>>;
}

/// Shorthand for the dimension of `A * B`.
pub type ProductOf<A, B> = <A as DimMul<B>>::Output;
/// Shorthand for the dimension of `A / B`.
pub type QuotientOf<A, B> = <A as DimDiv<B>>::Output;
/// Shorthand for the dimension of `1 / A`.
pub type InverseOf<A> = <A as DimInv>::Output;
/// Shorthand for the dimension of `sqrt(A)`.
pub type RootOf<A> = <A as DimSqrt>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int::{N1, N2, P1, P2, Z0};

    type LengthD = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
    type TimeD = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
    type AreaD = Dim<P2, Z0, Z0, Z0, Z0, Z0, Z0>;

    #[test]
    fn product_sums_exponents() {
        assert_eq!(
            <ProductOf<LengthD, LengthD>>::EXPONENTS,
            Exponents::new(2, 0, 0, 0, 0, 0, 0)
        );
        assert_eq!(
            <ProductOf<LengthD, TimeD>>::EXPONENTS,
            Exponents::new(1, 1, 0, 0, 0, 0, 0)
        );
    }

    #[test]
    fn quotient_subtracts_exponents() {
        assert_eq!(
            <QuotientOf<LengthD, TimeD>>::EXPONENTS,
            Exponents::new(1, -1, 0, 0, 0, 0, 0)
        );
        type Accel = Dim<P1, N2, Z0, Z0, Z0, Z0, Z0>;
        assert_eq!(
            <QuotientOf<Accel, LengthD>>::EXPONENTS,
            Exponents::new(0, -2, 0, 0, 0, 0, 0)
        );
    }

    #[test]
    fn inverse_and_root() {
        assert_eq!(
            <InverseOf<TimeD>>::EXPONENTS,
            <Dim<Z0, N1, Z0, Z0, Z0, Z0, Z0>>::EXPONENTS
        );
        assert_eq!(<RootOf<AreaD>>::EXPONENTS, LengthD::EXPONENTS);
    }
}
