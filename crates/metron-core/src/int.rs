//! Type-level signed integers for static dimension exponents.
//!
//! Stable Rust cannot do arithmetic on const generic parameters, so each
//! exponent in `-7..=7` is an uninhabited marker type and arithmetic is
//! expressed as trait impls whose associated `Output` is the result type.
//! Addition recurses on the left operand through [`Succ`] / [`Pred`], so
//! only the successor chain has to be spelled out.
//!
//! Results outside `-7..=7` have no `Output`, which turns an exponent
//! overflow into a compile error.
//!
//! ```
//! use metron_core::int::{Integer, SumOf, DiffOf, HalfOf, P2, P3, N1};
//!
//! assert_eq!(<SumOf<P2, N1>>::VALUE, 1);
//! assert_eq!(<DiffOf<N1, P3>>::VALUE, -4);
//! assert_eq!(<HalfOf<P2>>::VALUE, 1);
//! ```
//!
//! ```compile_fail
//! use metron_core::int::{Integer, SumOf, P4, P5};
//!
//! let _ = <SumOf<P5, P4>>::VALUE;
//! ```
//!
//! ```compile_fail
//! use metron_core::int::{HalfOf, Integer, P3};
//!
//! let _ = <HalfOf<P3>>::VALUE;
//! ```

/// A type-level integer.
pub trait Integer: 'static {
    /// The integer's value.
    const VALUE: i8;
}

/// `Self + 1`.
pub trait Succ: Integer {
    /// The successor.
    type Output: Integer;
}

/// `Self - 1`.
pub trait Pred: Integer {
    /// The predecessor.
    type Output: Integer;
}

/// `-Self`.
pub trait Negate: Integer {
    /// The negation.
    type Output: Integer;
}

/// `Self + R`.
pub trait Sum<R: Integer>: Integer {
    /// The sum.
    type Output: Integer;
}

/// `Self - R`.
pub trait Diff<R: Integer>: Integer {
    /// The difference.
    type Output: Integer;
}

/// `Self / 2`, implemented for even integers only.
pub trait Halve: Integer {
    /// The half.
    type Output: Integer;
}

/// Shorthand for `<A as Sum<B>>::Output`.
pub type SumOf<A, B> = <A as Sum<B>>::Output;
/// Shorthand for `<A as Diff<B>>::Output`.
pub type DiffOf<A, B> = <A as Diff<B>>::Output;
/// Shorthand for `<A as Negate>::Output`.
pub type NegOf<A> = <A as Negate>::Output;
/// Shorthand for `<A as Halve>::Output`.
pub type HalfOf<A> = <A as Halve>::Output;

macro_rules! integers {
    ($($(#[$doc:meta])* $name:ident = $value:expr;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug)]
            pub enum $name {}

            impl Integer for $name {
                const VALUE: i8 = $value;
            }
        )*
    };
}

integers! {
    /// -7
    N7 = -7;
    /// -6
    N6 = -6;
    /// -5
    N5 = -5;
    /// -4
    N4 = -4;
    /// -3
    N3 = -3;
    /// -2
    N2 = -2;
    /// -1
    N1 = -1;
    /// 0
    Z0 = 0;
    /// 1
    P1 = 1;
    /// 2
    P2 = 2;
    /// 3
    P3 = 3;
    /// 4
    P4 = 4;
    /// 5
    P5 = 5;
    /// 6
    P6 = 6;
    /// 7
    P7 = 7;
}

// Successor chain, lowest to highest.
macro_rules! chain {
    ($($lo:ident => $hi:ident),* $(,)?) => {
        $(
            impl Succ for $lo {
                type Output = $hi;
            }
            impl Pred for $hi {
                type Output = $lo;
            }
        )*
    };
}

chain! {
    N7 => N6, N6 => N5, N5 => N4, N4 => N3, N3 => N2, N2 => N1, N1 => Z0,
    Z0 => P1, P1 => P2, P2 => P3, P3 => P4, P4 => P5, P5 => P6, P6 => P7,
}

macro_rules! negate {
    ($($a:ident <=> $b:ident),* $(,)?) => {
        $(
            impl Negate for $a {
                type Output = $b;
            }
            impl Negate for $b {
                type Output = $a;
            }
        )*
    };
}

impl Negate for Z0 {
    type Output = Z0;
}

negate! {
    P1 <=> N1, P2 <=> N2, P3 <=> N3, P4 <=> N4, P5 <=> N5, P6 <=> N6, P7 <=> N7,
}

impl<R: Integer> Sum<R> for Z0 {
    type Output = R;
}

// `P(k) + R = Succ(P(k-1) + R)`.
macro_rules! sum_positive {
    ($($prev:ident => $this:ident),* $(,)?) => {
        $(
            impl<R: Integer> Sum<R> for $this
            where
                $prev: Sum<R>,
                SumOf<$prev, R>: Succ,
            {
                type Output = <SumOf<$prev, R> as Succ>::Output;
            }
        )*
    };
}

// `N(k) + R = Pred(N(k-1) + R)`.
macro_rules! sum_negative {
    ($($prev:ident => $this:ident),* $(,)?) => {
        $(
            impl<R: Integer> Sum<R> for $this
            where
                $prev: Sum<R>,
                SumOf<$prev, R>: Pred,
            {
                type Output = <SumOf<$prev, R> as Pred>::Output;
            }
        )*
    };
}

sum_positive! { Z0 => P1, P1 => P2, P2 => P3, P3 => P4, P4 => P5, P5 => P6, P6 => P7 }
sum_negative! { Z0 => N1, N1 => N2, N2 => N3, N3 => N4, N4 => N5, N5 => N6, N6 => N7 }

impl<L, R> Diff<R> for L
where
    L: Sum<NegOf<R>>,
    R: Negate,
{
    type Output = SumOf<L, NegOf<R>>;
}

macro_rules! halve {
    ($($whole:ident => $half:ident),* $(,)?) => {
        $(
            impl Halve for $whole {
                type Output = $half;
            }
        )*
    };
}

halve! { N6 => N3, N4 => N2, N2 => N1, Z0 => Z0, P2 => P1, P4 => P2, P6 => P3 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_chain() {
        assert_eq!(<<N1 as Succ>::Output as Integer>::VALUE, 0);
        assert_eq!(<<P7 as Pred>::Output as Integer>::VALUE, 6);
    }

    #[test]
    fn sums_cross_zero() {
        assert_eq!(<SumOf<P3, N5>>::VALUE, -2);
        assert_eq!(<SumOf<N4, P4>>::VALUE, 0);
        assert_eq!(<SumOf<N3, N4>>::VALUE, -7);
        assert_eq!(<SumOf<P4, P3>>::VALUE, 7);
    }

    #[test]
    fn differences() {
        assert_eq!(<DiffOf<P1, P1>>::VALUE, 0);
        assert_eq!(<DiffOf<Z0, P7>>::VALUE, -7);
        assert_eq!(<DiffOf<N2, N5>>::VALUE, 3);
    }

    #[test]
    fn negation_and_halving() {
        assert_eq!(<NegOf<P6>>::VALUE, -6);
        assert_eq!(<NegOf<Z0>>::VALUE, 0);
        assert_eq!(<HalfOf<N4>>::VALUE, -2);
    }
}
