//! The seven SI base dimensions.

use std::fmt;

/// One of the seven SI base dimensions.
///
/// The declaration order is significant: it is the order in which
/// exponents are packed into [`Exponents`](crate::Exponents) and the order
/// in which a narrowing conversion reports the first mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Length, base unit metre.
    Length,
    /// Time, base unit second.
    Time,
    /// Mass, internal base unit gram.
    Mass,
    /// Electric current, base unit ampere.
    Current,
    /// Thermodynamic temperature, base unit kelvin.
    Temperature,
    /// Amount of substance, base unit mole.
    Substance,
    /// Luminous intensity, base unit candela.
    Intensity,
}

impl BaseDimension {
    /// All base dimensions in packing order.
    pub const ALL: [BaseDimension; 7] = [
        Self::Length,
        Self::Time,
        Self::Mass,
        Self::Current,
        Self::Temperature,
        Self::Substance,
        Self::Intensity,
    ];

    /// Position of this dimension in the packed representation.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case human-readable name, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Time => "time",
            Self::Mass => "mass",
            Self::Current => "current",
            Self::Temperature => "temperature",
            Self::Substance => "substance",
            Self::Intensity => "intensity",
        }
    }

    /// Symbol of the internal base unit for this dimension.
    ///
    /// Mass is stored in grams, not kilograms.
    pub const fn base_symbol(self) -> &'static str {
        match self {
            Self::Length => "m",
            Self::Time => "s",
            Self::Mass => "g",
            Self::Current => "A",
            Self::Temperature => "K",
            Self::Substance => "mol",
            Self::Intensity => "cd",
        }
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_declaration_order() {
        for (i, base) in BaseDimension::ALL.iter().enumerate() {
            assert_eq!(base.index(), i);
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(BaseDimension::Substance.to_string(), "substance");
        assert_eq!(BaseDimension::Mass.base_symbol(), "g");
    }
}
