//! Two- and three-element vectors with named components.
//!
//! `x`/`width`, `y`/`height` and `z`/`depth` are two names for the same
//! element.

use std::ops::{Add, Mul, Sub};

use metron_core::Angle;

use crate::element::Scale;
use crate::vector::Vector;

/// A two-element vector.
pub type Vector2<T> = Vector<T, 2>;

/// A three-element vector.
pub type Vector3<T> = Vector<T, 3>;

macro_rules! named_components {
    ($n:literal: $($index:literal => $get:ident / $alias:ident, $set:ident / $set_alias:ident;)*) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[doc = concat!("Element ", stringify!($index), ".")]
                pub fn $get(&self) -> T {
                    self[$index]
                }

                #[doc = concat!("Element ", stringify!($index), ", same as [`", stringify!($get), "`](Self::", stringify!($get), ").")]
                pub fn $alias(&self) -> T {
                    self[$index]
                }

                #[doc = concat!("Set element ", stringify!($index), ".")]
                pub fn $set(&mut self, value: T) {
                    self[$index] = value;
                }

                #[doc = concat!("Set element ", stringify!($index), ", same as [`", stringify!($set), "`](Self::", stringify!($set), ").")]
                pub fn $set_alias(&mut self, value: T) {
                    self[$index] = value;
                }
            )*
        }
    };
}

named_components! { 2:
    0 => x / width, set_x / set_width;
    1 => y / height, set_y / set_height;
}

named_components! { 3:
    0 => x / width, set_x / set_width;
    1 => y / height, set_y / set_height;
    2 => z / depth, set_z / set_depth;
}

impl<T> Vector<T, 2> {
    /// A vector from its components.
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }
}

impl<T> Vector<T, 3> {
    /// A vector from its components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }
}

impl<T> Vector<T, 2>
where
    T: Scale + Add<Output = T> + Sub<Output = T>,
{
    /// Rotate counter-clockwise by `angle`.
    pub fn rotate(self, angle: Angle) -> Self {
        let (sin, cos) = angle.value().sin_cos();
        let (x, y) = (self.x(), self.y());
        Self::new(x.scale(cos) - y.scale(sin), x.scale(sin) + y.scale(cos))
    }
}

impl<T> Vector<T, 3>
where
    T: Copy + Mul,
    <T as Mul>::Output: Sub<Output = <T as Mul>::Output>,
{
    /// The cross product `self × other`.
    pub fn cross(self, other: Self) -> Vector<<T as Mul>::Output, 3> {
        let (a, b) = (self, other);
        Vector3::new(
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metron_core::definitions::degrees;
    use metron_core::{Area, Length};

    #[test]
    fn aliases_share_storage() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!((v.x(), v.y(), v.z()), (v.width(), v.height(), v.depth()));
        v.set_width(7.0);
        v.set_depth(9.0);
        assert_eq!(v.x(), 7.0);
        assert_eq!(v[2], 9.0);

        let mut p = Vector2::new(0.5f32, 1.5);
        p.set_y(4.0);
        assert_eq!(p.height(), 4.0);
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vector2::new(Length::new(1.0), Length::ZERO);
        let r = v.rotate(degrees(90.0));
        assert!(r.x().value().abs() < 1e-15);
        assert!((r.y().value() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn cross_of_axes() {
        let x = Vector3::new(Length::new(1.0), Length::ZERO, Length::ZERO);
        let y = Vector3::new(Length::ZERO, Length::new(1.0), Length::ZERO);
        let z: Vector3<Area> = x.cross(y);
        assert_eq!(z, Vector3::new(Area::ZERO, Area::ZERO, Area::new(1.0)));
    }
}
