//! Text form of vectors: elements separated by single spaces.

use std::fmt;
use std::str::FromStr;

use metron_parse::{FixedSymbols, ParseError, ParseValue, SymbolSource, UnitReader};

use crate::vector::Vector;

/// Elements separated by spaces. Formatting flags apply to each element, so
/// `{:#}` appends exponents to unit elements.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        Ok(())
    }
}

impl<T: ParseValue + Default, const N: usize> Vector<T, N> {
    /// Read the next `N` literals from `reader`.
    ///
    /// Reading stops at the first literal that fails; later literals stay
    /// unread.
    pub fn read_from<S: SymbolSource + ?Sized>(
        reader: &mut UnitReader<'_, S>,
    ) -> Result<Self, ParseError> {
        let mut failure = None;
        let elements = std::array::from_fn(|_| {
            if failure.is_some() {
                return T::default();
            }
            reader.read::<T>().unwrap_or_else(|e| {
                failure = Some(e);
                T::default()
            })
        });
        match failure {
            Some(e) => Err(e),
            None => Ok(Self::from_array(elements)),
        }
    }

    /// Parse exactly `N` literals, resolving suffixes against `source`.
    ///
    /// ```
    /// use metron_core::{DynUnit, Length};
    /// use metron_parse::SymbolRegistry;
    /// use metron_vector::Vector2;
    ///
    /// let registry = SymbolRegistry::new();
    /// registry.define("px", "2um").unwrap();
    /// let v = Vector2::<Length>::parse_with("3px 1mm", &registry).unwrap();
    /// assert_eq!(v.y(), Length::new(1e-3));
    /// ```
    pub fn parse_with<S: SymbolSource + ?Sized>(text: &str, source: &S) -> Result<Self, ParseError> {
        let mut reader = UnitReader::with_source(text, source);
        let vector = Self::read_from(&mut reader)?;
        reader.finish()?;
        Ok(vector)
    }
}

/// Parses exactly `N` literals against the built-in symbols.
impl<T: ParseValue + Default, const N: usize> FromStr for Vector<T, N> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &FixedSymbols)
    }
}
