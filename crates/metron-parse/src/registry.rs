//! User-defined unit symbols.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, warn};
use metron_core::{DynUnit, Real};
use parking_lot::RwLock;
use smallvec::SmallVec;

use crate::error::ParseError;
use crate::reader::{ParseValue, UnitReader};
use crate::scanner::{parse_prefix_with, parse_with};
use crate::source::{FixedSymbols, SymbolSource};

/// Constructor stored for a user symbol.
pub type SymbolFn = Arc<dyn Fn(Real) -> DynUnit + Send + Sync>;

/// Values returned by [`SymbolRegistry::parse_list`]. Short lists stay
/// inline.
pub type UnitList = SmallVec<[DynUnit; 4]>;

/// A table of user symbols layered under the fixed table.
///
/// Lookups try the fixed table first, so a user symbol with a built-in name
/// is never reached; [`register`](Self::register) logs a warning when that
/// happens. The table sits behind a read-write lock and the registry is
/// `Send + Sync`, so one instance can be shared by every thread that parses
/// configuration.
///
/// ```
/// use metron_core::DynUnit;
/// use metron_parse::SymbolRegistry;
///
/// let registry = SymbolRegistry::new();
/// registry.register("ll", DynUnit::dimensionless);
/// assert_eq!(registry.parse("15ll").unwrap().value(), 15.0);
///
/// registry.unregister("ll");
/// assert!(registry.parse("15ll").is_err());
/// ```
#[derive(Default)]
pub struct SymbolRegistry {
    symbols: RwLock<IndexMap<String, SymbolFn>>,
}

impl SymbolRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the constructor for `name`.
    ///
    /// Returns `true` if an existing entry was replaced.
    pub fn register<F>(&self, name: impl Into<String>, ctor: F) -> bool
    where
        F: Fn(Real) -> DynUnit + Send + Sync + 'static,
    {
        let name = name.into();
        if FixedSymbols::contains(&name) {
            warn!("unit symbol \"{name}\" is shadowed by the built-in table and will never resolve");
        }
        debug!("registering unit symbol \"{name}\"");
        self.symbols.write().insert(name, Arc::new(ctor)).is_some()
    }

    /// Remove `name`. Returns `false` if it was not registered.
    pub fn unregister(&self, name: &str) -> bool {
        let removed = self.symbols.write().shift_remove(name).is_some();
        if removed {
            debug!("unregistered unit symbol \"{name}\"");
        }
        removed
    }

    /// Register `name` as a multiple of the literal `definition`.
    ///
    /// The definition is parsed against this registry, so it may use
    /// symbols registered earlier. `define("mmHg", "133.322Pa")` makes
    /// `2mmHg` parse as `266.644Pa`.
    pub fn define(&self, name: impl Into<String>, definition: &str) -> Result<bool, ParseError> {
        let name = name.into();
        let base = self.parse(definition)?;
        debug!("defining unit symbol \"{name}\" as {definition}");
        Ok(self.register(name, move |value| base * value))
    }

    /// `true` if `name` is a registered user symbol.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.read().contains_key(name)
    }

    /// Number of user symbols.
    pub fn len(&self) -> usize {
        self.symbols.read().len()
    }

    /// `true` if no user symbols are registered.
    pub fn is_empty(&self) -> bool {
        self.symbols.read().is_empty()
    }

    /// User symbols in registration order.
    pub fn symbols(&self) -> Vec<String> {
        self.symbols.read().keys().cloned().collect()
    }

    /// Parse exactly one literal.
    pub fn parse(&self, text: &str) -> Result<DynUnit, ParseError> {
        parse_with(text, self)
    }

    /// Parse one literal at the start of `text`; returns the byte offset
    /// just past it.
    pub fn parse_prefix(&self, text: &str) -> Result<(DynUnit, usize), ParseError> {
        parse_prefix_with(text, self)
    }

    /// Parse exactly one literal and narrow it into `T`.
    pub fn parse_as<T: ParseValue>(&self, text: &str) -> Result<T, ParseError> {
        Ok(T::from_dyn(self.parse(text)?)?)
    }

    /// Parse every whitespace-separated literal in `text`.
    pub fn parse_list(&self, text: &str) -> Result<UnitList, ParseError> {
        self.reader(text).collect()
    }

    /// A reader over `text` resolving against this registry.
    pub fn reader<'a>(&'a self, text: &'a str) -> UnitReader<'a, Self> {
        UnitReader::with_source(text, self)
    }
}

impl SymbolSource for SymbolRegistry {
    fn resolve(&self, symbol: &str, value: Real) -> Option<DynUnit> {
        if let Some(value) = FixedSymbols.resolve(symbol, value) {
            return Some(value);
        }
        // Release the lock before running user code.
        let ctor = self.symbols.read().get(symbol).cloned()?;
        Some(ctor(value))
    }
}

impl fmt::Debug for SymbolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolRegistry")
            .field("symbols", &self.symbols())
            .finish()
    }
}
