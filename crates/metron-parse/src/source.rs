//! Symbol tables the scanner resolves suffixes against.

use std::sync::OnceLock;

use indexmap::IndexMap;
use metron_core::{DynUnit, Real, UnitDefinition, UNIT_DEFINITIONS};

/// Maps a unit suffix and a parsed number to a dimensioned value.
///
/// The scanner only sees this trait, so a parse can run against the fixed
/// table alone ([`FixedSymbols`]) or against a
/// [`SymbolRegistry`](crate::SymbolRegistry) layered over it.
pub trait SymbolSource {
    /// Construct `value` expressed in `symbol`, or `None` if the symbol is
    /// unknown. Never called with an empty symbol.
    fn resolve(&self, symbol: &str, value: Real) -> Option<DynUnit>;
}

impl<S: SymbolSource + ?Sized> SymbolSource for &S {
    fn resolve(&self, symbol: &str, value: Real) -> Option<DynUnit> {
        (**self).resolve(symbol, value)
    }
}

/// The built-in symbols of [`UNIT_DEFINITIONS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedSymbols;

impl FixedSymbols {
    /// The fixed-table entry for `symbol`.
    pub fn lookup(symbol: &str) -> Option<&'static UnitDefinition> {
        static INDEX: OnceLock<IndexMap<&'static str, &'static UnitDefinition>> =
            OnceLock::new();
        INDEX
            .get_or_init(|| UNIT_DEFINITIONS.iter().map(|d| (d.symbol, d)).collect())
            .get(symbol)
            .copied()
    }

    /// `true` if `symbol` is a built-in symbol.
    pub fn contains(symbol: &str) -> bool {
        Self::lookup(symbol).is_some()
    }

    /// Every built-in symbol, in table order.
    pub fn symbols() -> impl Iterator<Item = &'static str> {
        UNIT_DEFINITIONS.iter().map(|d| d.symbol)
    }
}

impl SymbolSource for FixedSymbols {
    fn resolve(&self, symbol: &str, value: Real) -> Option<DynUnit> {
        Self::lookup(symbol).map(|def| def.construct(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_table() {
        for def in UNIT_DEFINITIONS {
            assert_eq!(FixedSymbols::lookup(def.symbol), Some(def));
        }
        assert_eq!(FixedSymbols::symbols().count(), UNIT_DEFINITIONS.len());
    }

    #[test]
    fn resolve_applies_coefficient() {
        let v = FixedSymbols.resolve("kPa", 2.0).unwrap();
        assert_eq!(v.value(), 2e6);
        assert_eq!(v.exponents().to_string(), "m-1 s-2 g");
        assert!(FixedSymbols.resolve("furlong", 1.0).is_none());
    }

    #[test]
    fn resolve_through_reference() {
        let source = &FixedSymbols;
        assert!(SymbolSource::resolve(&source, "m", 1.0).is_some());
    }
}
