//! Parsing unit literals such as `"10um"`, `"5mM"` or `"3Hz"`.
//!
//! A literal is a decimal number followed directly by a unit suffix. The
//! suffix is looked up in the built-in table generated from
//! [`metron_core::UNIT_DEFINITIONS`] and then in an optional
//! [`SymbolRegistry`] of user symbols. The result is a [`DynUnit`] that the
//! caller narrows into a static type with [`parse_as`] or
//! [`ParseValue`].
//!
//! ```
//! use metron_core::Force;
//! use metron_parse::{parse, parse_as};
//!
//! let v = parse("10m").unwrap();
//! assert_eq!(v.value(), 10.0);
//!
//! let f: Force = parse_as("10kgm/s2").unwrap();
//! assert_eq!(f.value(), 10_000.0);
//!
//! assert!(parse_as::<metron_core::Mass>("0.1").is_err());
//! assert!(parse("1GM").is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod reader;
pub mod registry;
pub mod scanner;
pub mod source;

pub use config::{ConfigError, Parameters, SymbolDef, UnitsConfig};
pub use error::ParseError;
pub use reader::{ParseValue, UnitReader};
pub use registry::{SymbolFn, SymbolRegistry, UnitList};
pub use source::{FixedSymbols, SymbolSource};

use metron_core::DynUnit;

/// Parse exactly one literal against the built-in symbols.
///
/// Surrounding whitespace is allowed; anything else after the literal is a
/// [`ParseError::TrailingInput`].
pub fn parse(text: &str) -> Result<DynUnit, ParseError> {
    scanner::parse_with(text, &FixedSymbols)
}

/// Parse one literal at the start of `text` against the built-in symbols,
/// returning the value and the byte offset just past it.
pub fn parse_prefix(text: &str) -> Result<(DynUnit, usize), ParseError> {
    scanner::parse_prefix_with(text, &FixedSymbols)
}

/// Parse exactly one literal and narrow it into `T`.
pub fn parse_as<T: ParseValue>(text: &str) -> Result<T, ParseError> {
    Ok(T::from_dyn(parse(text)?)?)
}
