//! Core types for the Metron unit system.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! two representations of a dimensioned quantity and the single seam
//! between them:
//!
//! - [`Unit<D>`]: the dimension `D` is part of the type. Adding a length to
//!   a time does not compile, and multiplying two units computes the result
//!   dimension at compile time via the [`DimMul`] / [`DimDiv`] metafunctions.
//! - [`DynUnit`]: the dimension is a packed [`Exponents`] value carried at
//!   run time, used where quantities come out of configuration text.
//! - `Unit::<D>::try_from(dyn_unit)` narrows a dynamic value into a static
//!   one, failing with [`CastError`] on mismatch.
//!
//! Magnitudes are always stored in internal base units (metre, second,
//! gram, ampere, kelvin, mole, candela). Prefixes are folded into the
//! magnitude by the constructors in [`definitions`].
//!
//! ```
//! use metron_core::definitions::{micrometres, seconds};
//! use metron_core::{DynUnit, Length, Velocity};
//!
//! let d = micrometres(10.0);
//! let v: Velocity = d / seconds(2.0);
//! assert!((v.value() - 5e-6).abs() < 1e-18);
//!
//! let dynamic = DynUnit::from(d);
//! let back = Length::try_from(dynamic).unwrap();
//! assert_eq!(back, d);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod base;
pub mod cast;
pub mod definitions;
pub mod dim;
pub mod dynamic;
pub mod error;
pub mod exponents;
pub mod int;
pub mod math;
pub mod quantity;
pub mod unit;

pub use base::BaseDimension;
pub use definitions::{UnitDefinition, UNIT_DEFINITIONS};
pub use dim::{Dim, DimDiv, DimInv, DimMul, DimSqrt, Dimension};
pub use dynamic::DynUnit;
pub use error::{CastError, DimensionMismatch};
pub use exponents::Exponents;
pub use math::Sqrt;
pub use quantity::*;
pub use unit::{Unit, Zero};

/// Scalar type used for every unit magnitude.
pub type Real = f64;

/// Tolerance used by unit equality: the machine epsilon of [`Real`].
pub const EPSILON: Real = Real::EPSILON;
