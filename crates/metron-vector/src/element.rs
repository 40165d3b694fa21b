//! Element traits for vector components.

use metron_core::{Dimension, DynUnit, Real, Unit};

/// Multiplication by a dimensionless factor that keeps the element type.
///
/// Rotation mixes components through `sin` and `cos`, which are plain
/// numbers whatever the components are measured in.
pub trait Scale: Copy {
    /// `self` multiplied by `factor`.
    fn scale(self, factor: Real) -> Self;
}

impl Scale for f32 {
    fn scale(self, factor: Real) -> Self {
        (Real::from(self) * factor) as f32
    }
}

impl Scale for f64 {
    fn scale(self, factor: Real) -> Self {
        self * factor
    }
}

impl<D: Dimension> Scale for Unit<D> {
    fn scale(self, factor: Real) -> Self {
        self * factor
    }
}

impl Scale for DynUnit {
    fn scale(self, factor: Real) -> Self {
        self * factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metron_core::Length;

    #[test]
    fn scale_keeps_type() {
        assert_eq!(2.0f32.scale(0.5), 1.0f32);
        assert_eq!(Length::new(4.0).scale(0.25), Length::new(1.0));
        let d = DynUnit::from(Length::new(3.0)).scale(2.0);
        assert_eq!(d.exponents(), Length::EXPONENTS);
        assert_eq!(d.value(), 6.0);
    }
}
