//! Test utilities for Metron development.
//!
//! Proptest strategies over the core value types, plus fixed literal
//! fixtures in [`fixtures`]. Strategies keep exponents within `-3..=3` so
//! that products and quotients of two generated values stay inside the
//! packed exponent range.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use metron_core::{DynUnit, Exponents, Real, UnitDefinition, UNIT_DEFINITIONS};
use proptest::prelude::*;

/// Finite magnitudes of moderate size, including zero and negatives.
pub fn magnitude() -> impl Strategy<Value = Real> {
    prop_oneof![
        Just(0.0),
        Just(1.0),
        Just(-1.0),
        -1.0e6..1.0e6,
        -1.0..1.0,
    ]
}

/// Magnitudes bounded away from zero, for use as divisors.
pub fn nonzero_magnitude() -> impl Strategy<Value = Real> {
    prop_oneof![1.0e-3..1.0e6, -1.0e6..-1.0e-3]
}

/// Exponent vectors with every field in `-3..=3`.
pub fn exponents() -> impl Strategy<Value = Exponents> {
    prop::array::uniform7(-3i8..=3).prop_map(Exponents::from_array)
}

/// Exponent vectors with every field even, so a square root exists.
pub fn even_exponents() -> impl Strategy<Value = Exponents> {
    prop::array::uniform7(-1i8..=1).prop_map(|e| Exponents::from_array(e.map(|x| 2 * x)))
}

pub fn dyn_unit() -> impl Strategy<Value = DynUnit> {
    (magnitude(), exponents()).prop_map(|(v, e)| DynUnit::new(v, e))
}

/// Any entry of the built-in symbol table.
pub fn unit_definition() -> impl Strategy<Value = UnitDefinition> {
    prop::sample::select(UNIT_DEFINITIONS)
}

/// A literal such as `"-2.5um"` together with the number it was built from
/// and the table entry for its suffix.
pub fn literal() -> impl Strategy<Value = (String, Real, UnitDefinition)> {
    (magnitude(), unit_definition())
        .prop_map(|(v, def)| (format!("{v}{}", def.symbol), v, def))
}

/// Short whitespace runs used to separate literals.
pub fn separator() -> impl Strategy<Value = String> {
    "[ \t\n]{1,3}"
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_exponents_stay_in_range(e in exponents()) {
            for (_, x) in e.iter() {
                prop_assert!((-3..=3).contains(&x));
            }
        }

        #[test]
        fn even_exponents_have_roots(e in even_exponents()) {
            prop_assert!(e.sqrt().is_some());
        }

        #[test]
        fn literals_end_with_their_symbol(lit in literal()) {
            let (text, _, def) = lit;
            prop_assert!(text.ends_with(def.symbol));
        }
    }
}
