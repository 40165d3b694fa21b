//! Typed narrowing of parsed values and a reader for value sequences.

use metron_core::{CastError, Dimension, DynUnit, Real, Unit};

use crate::error::ParseError;
use crate::scanner::{resolve, scan, skip_whitespace};
use crate::source::{FixedSymbols, SymbolSource};

/// A type a parsed [`DynUnit`] can be narrowed into.
///
/// Plain floats accept only dimensionless values.
pub trait ParseValue: Sized {
    /// Narrow a parsed value.
    fn from_dyn(value: DynUnit) -> Result<Self, CastError>;
}

impl ParseValue for DynUnit {
    fn from_dyn(value: DynUnit) -> Result<Self, CastError> {
        Ok(value)
    }
}

impl<D: Dimension> ParseValue for Unit<D> {
    fn from_dyn(value: DynUnit) -> Result<Self, CastError> {
        Unit::try_from_dyn(value)
    }
}

impl ParseValue for f64 {
    fn from_dyn(value: DynUnit) -> Result<Self, CastError> {
        Real::try_from(value)
    }
}

impl ParseValue for f32 {
    fn from_dyn(value: DynUnit) -> Result<Self, CastError> {
        Real::try_from(value).map(|v| v as f32)
    }
}

/// Reads whitespace-separated unit literals from one string.
///
/// Iterating yields one `Result` per literal. After the first error the
/// iterator is exhausted.
///
/// ```
/// use metron_parse::UnitReader;
///
/// let mut reader = UnitReader::new("10um 2s 3");
/// let values: Vec<_> = reader.by_ref().collect::<Result<_, _>>().unwrap();
/// assert_eq!(values.len(), 3);
/// assert!(reader.is_exhausted());
/// ```
#[derive(Debug)]
pub struct UnitReader<'a, S: SymbolSource + ?Sized = FixedSymbols> {
    text: &'a str,
    pos: usize,
    source: &'a S,
}

impl<'a> UnitReader<'a, FixedSymbols> {
    /// A reader resolving suffixes against the fixed table only.
    pub fn new(text: &'a str) -> Self {
        Self::with_source(text, &FixedSymbols)
    }
}

impl<'a, S: SymbolSource + ?Sized> UnitReader<'a, S> {
    /// A reader resolving suffixes against `source`.
    pub fn with_source(text: &'a str, source: &'a S) -> Self {
        Self {
            text,
            pos: 0,
            source,
        }
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The unread part of the input.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// `true` once only whitespace is left.
    pub fn is_exhausted(&self) -> bool {
        skip_whitespace(self.text, self.pos) >= self.text.len()
    }

    /// Read the next literal as a [`DynUnit`].
    pub fn read_dyn(&mut self) -> Result<DynUnit, ParseError> {
        let literal = match scan(self.text, self.pos) {
            Ok(literal) => literal,
            Err(e) => {
                self.pos = self.text.len();
                return Err(e);
            }
        };
        self.pos = literal.end;
        resolve(&literal, self.source)
    }

    /// Read the next literal and narrow it into `T`.
    pub fn read<T: ParseValue>(&mut self) -> Result<T, ParseError> {
        Ok(T::from_dyn(self.read_dyn()?)?)
    }

    /// Fail if anything other than whitespace is left.
    pub fn finish(&self) -> Result<(), ParseError> {
        let rest = skip_whitespace(self.text, self.pos);
        if rest < self.text.len() {
            return Err(ParseError::TrailingInput { offset: rest });
        }
        Ok(())
    }
}

impl<S: SymbolSource + ?Sized> Iterator for UnitReader<'_, S> {
    type Item = Result<DynUnit, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let item = self.read_dyn();
        if item.is_err() {
            self.pos = self.text.len();
        }
        Some(item)
    }
}
