//! Metron: physical quantities tagged with their dimension.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Metron sub-crates. For most users, adding `metron` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use metron::prelude::*;
//!
//! // Compile-time checked arithmetic.
//! let distance = micrometres(30.0);
//! let time = seconds(2.0);
//! let speed: Velocity = distance / time;
//! assert!((speed.value() - 15e-6).abs() < 1e-18);
//!
//! // Values from configuration text, narrowed at the seam.
//! let registry = SymbolRegistry::new();
//! registry.define("px", "6.5um").unwrap();
//! let params: Parameters = [("pitch", "4px"), ("dt", "5min")].into_iter().collect();
//! let pitch: Length = params.get("pitch", &registry).unwrap();
//! let dt: Time = params.get("dt", &registry).unwrap();
//! assert!((pitch.value() - 26e-6).abs() < 1e-18);
//! assert_eq!(dt.value(), 300.0);
//!
//! // Vectors of quantities.
//! let a = Vector2::new(metres(3.0), metres(0.0));
//! let b = Vector2::new(metres(0.0), metres(4.0));
//! assert_eq!(a.distance(b), metres(5.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`units`] | `metron-core` | Dimensions, `Unit<D>`, `DynUnit`, narrowing, quantity aliases, unit constructors |
//! | [`parse`] | `metron-parse` | Literal scanner, symbol registry, readers, configuration |
//! | [`vector`] | `metron-vector` | `Vector<T, N>`, `Vector2`, `Vector3` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Dimensions and dimensioned values (`metron-core`).
///
/// [`units::Unit`] carries its dimension in the type; [`units::DynUnit`]
/// carries it at run time. The [`units::definitions`] module has one
/// constructor per built-in unit symbol.
pub use metron_core as units;

/// Unit literal parsing (`metron-parse`).
///
/// [`parse::parse`] reads one literal against the built-in symbols;
/// [`parse::SymbolRegistry`] adds user symbols on top.
pub use metron_parse as parse;

/// Fixed-size vectors of quantities (`metron-vector`).
pub use metron_vector as vector;

/// Common imports for typical Metron usage.
///
/// ```rust
/// use metron::prelude::*;
/// ```
///
/// This imports the value types, every quantity alias, the unit
/// constructors, parsing entry points and the vector types.
pub mod prelude {
    // Values
    pub use metron_core::{DynUnit, Exponents, Real, Sqrt, Unit, Zero};

    // Quantities and constructors
    pub use metron_core::definitions::*;
    pub use metron_core::quantity::*;

    // Errors
    pub use metron_core::{CastError, DimensionMismatch};
    pub use metron_parse::{ConfigError, ParseError};

    // Parsing
    pub use metron_parse::{
        parse, parse_as, parse_prefix, Parameters, ParseValue, SymbolRegistry, UnitReader,
        UnitsConfig,
    };

    // Vectors
    pub use metron_vector::{Vector, Vector2, Vector3};
}
