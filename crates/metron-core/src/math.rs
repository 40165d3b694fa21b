//! Square roots across plain numbers and units.

use crate::dim::{DimSqrt, RootOf};
use crate::dynamic::DynUnit;
use crate::unit::Unit;

/// Square root whose result type may differ from the input type.
///
/// For a static unit the result dimension has every exponent halved, so the
/// Euclidean length of a vector of lengths is again a length. Generic code
/// such as vector norms is written against this trait.
pub trait Sqrt {
    /// The root's type.
    type Output;

    /// Compute the square root.
    fn sqrt(self) -> Self::Output;
}

impl Sqrt for f32 {
    type Output = f32;
    fn sqrt(self) -> f32 {
        f32::sqrt(self)
    }
}

impl Sqrt for f64 {
    type Output = f64;
    fn sqrt(self) -> f64 {
        f64::sqrt(self)
    }
}

impl<D: DimSqrt> Sqrt for Unit<D> {
    type Output = Unit<RootOf<D>>;
    fn sqrt(self) -> Self::Output {
        Unit::new(self.value().sqrt())
    }
}

/// `None` when any exponent is odd.
impl Sqrt for DynUnit {
    type Output = Option<DynUnit>;
    fn sqrt(self) -> Option<DynUnit> {
        DynUnit::sqrt(self)
    }
}
