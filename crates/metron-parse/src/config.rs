//! Configuration-driven symbols and typed parameter tables.
//!
//! [`UnitsConfig`] lists user symbols to define at startup;
//! [`validate()`](UnitsConfig::validate) catches names that could never be
//! reached before any registry is built. [`Parameters`] is the seam through
//! which setup code pulls typed quantities out of configuration text.

use std::error::Error;
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::error::ParseError;
use crate::reader::ParseValue;
use crate::registry::SymbolRegistry;
use crate::scanner::is_valid_symbol;
use crate::source::FixedSymbols;

// ── SymbolDef ──────────────────────────────────────────────────────

/// One user symbol defined as a multiple of a literal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolDef {
    /// The suffix to register, e.g. `"mmHg"`.
    pub name: String,
    /// A unit literal giving the value of one unit, e.g. `"133.322Pa"`.
    pub definition: String,
}

impl SymbolDef {
    /// A definition from name and literal.
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
        }
    }
}

// ── UnitsConfig ────────────────────────────────────────────────────

/// User symbols to register when building a [`SymbolRegistry`].
///
/// Definitions are applied in order, so a later definition may use an
/// earlier symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitsConfig {
    /// Symbol definitions, applied in order.
    pub symbols: Vec<SymbolDef>,
}

impl UnitsConfig {
    /// Check every name without parsing any definition.
    ///
    /// Rejects names outside the symbol alphabet or unreachable by the
    /// scanner, names listed twice, and names the built-in table would
    /// shadow.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = IndexSet::with_capacity(self.symbols.len());
        for def in &self.symbols {
            if !is_valid_symbol(&def.name) {
                return Err(ConfigError::InvalidSymbolName {
                    name: def.name.clone(),
                });
            }
            if FixedSymbols::contains(&def.name) {
                return Err(ConfigError::ShadowedSymbol {
                    name: def.name.clone(),
                });
            }
            if !seen.insert(def.name.as_str()) {
                return Err(ConfigError::DuplicateSymbol {
                    name: def.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate, then define every symbol in a fresh registry.
    pub fn build_registry(&self) -> Result<SymbolRegistry, ConfigError> {
        self.validate()?;
        let registry = SymbolRegistry::new();
        for def in &self.symbols {
            registry
                .define(def.name.as_str(), &def.definition)
                .map_err(|source| ConfigError::InvalidDefinition {
                    name: def.name.clone(),
                    source,
                })?;
        }
        debug!("built unit registry with {} symbols", registry.len());
        Ok(registry)
    }
}

// ── Parameters ─────────────────────────────────────────────────────

/// An ordered table of named unit literals.
///
/// ```
/// use metron_core::Length;
/// use metron_parse::{Parameters, SymbolRegistry};
///
/// let registry = SymbolRegistry::new();
/// let params: Parameters = [("radius", "10um")].into_iter().collect();
/// let radius: Length = params.get("radius", &registry).unwrap();
/// assert!((radius.value() - 1e-5).abs() < 1e-20);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: IndexMap<String, String>,
}

impl Parameters {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `literal`, returning the previous literal.
    pub fn insert(&mut self, key: impl Into<String>, literal: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), literal.into())
    }

    /// The raw literal for `key`.
    pub fn literal(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse the literal for `key` as `T`.
    pub fn get<T: ParseValue>(&self, key: &str, registry: &SymbolRegistry) -> Result<T, ConfigError> {
        let literal = self
            .literal(key)
            .ok_or_else(|| ConfigError::MissingParameter { key: key.to_owned() })?;
        registry
            .parse_as(literal)
            .map_err(|source| ConfigError::InvalidParameter {
                key: key.to_owned(),
                source,
            })
    }

    /// Like [`get`](Self::get), but a missing key yields `default`. A
    /// present but malformed literal is still an error.
    pub fn get_or<T: ParseValue>(
        &self,
        key: &str,
        registry: &SymbolRegistry,
        default: T,
    ) -> Result<T, ConfigError> {
        match self.get(key, registry) {
            Err(ConfigError::MissingParameter { .. }) => Ok(default),
            other => other,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors from [`UnitsConfig`] and [`Parameters`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The name is empty, uses characters outside `[A-Za-z0-9/%]`, or
    /// would be consumed as part of a number.
    InvalidSymbolName {
        /// The rejected name.
        name: String,
    },
    /// The same name is defined more than once.
    DuplicateSymbol {
        /// The repeated name.
        name: String,
    },
    /// The name is a built-in symbol, so the definition could never apply.
    ShadowedSymbol {
        /// The shadowed name.
        name: String,
    },
    /// A definition literal failed to parse.
    InvalidDefinition {
        /// The symbol being defined.
        name: String,
        /// Why the literal was rejected.
        source: ParseError,
    },
    /// A required parameter is absent.
    MissingParameter {
        /// The missing key.
        key: String,
    },
    /// A parameter literal failed to parse or has the wrong dimension.
    InvalidParameter {
        /// The offending key.
        key: String,
        /// Why the literal was rejected.
        source: ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbolName { name } => write!(f, "invalid unit symbol name \"{name}\""),
            Self::DuplicateSymbol { name } => write!(f, "unit symbol \"{name}\" defined twice"),
            Self::ShadowedSymbol { name } => {
                write!(f, "unit symbol \"{name}\" is shadowed by a built-in symbol")
            }
            Self::InvalidDefinition { name, source } => {
                write!(f, "invalid definition for unit symbol \"{name}\": {source}")
            }
            Self::MissingParameter { key } => write!(f, "missing parameter \"{key}\""),
            Self::InvalidParameter { key, source } => {
                write!(f, "invalid parameter \"{key}\": {source}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDefinition { source, .. } | Self::InvalidParameter { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
