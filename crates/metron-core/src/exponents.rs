//! Packed run-time dimension exponents.

use std::fmt;

use crate::base::BaseDimension;

/// The seven base-dimension exponents of a dynamic unit, packed as signed
/// 4-bit fields into a single `u32`.
///
/// Field `i` (see [`BaseDimension::index`]) occupies bits `4*i .. 4*i+4`, so
/// every exponent lies in `-8..=7`. Equality and hashing are plain integer
/// operations on the packed word.
///
/// Arithmetic that leaves the 4-bit range is a logic error: it trips a debug
/// assertion and wraps in release builds, exactly like the bit-field it
/// models.
///
/// ```
/// use metron_core::{BaseDimension, Exponents};
///
/// let velocity = Exponents::new(1, -1, 0, 0, 0, 0, 0);
/// assert_eq!(velocity.get(BaseDimension::Time), -1);
/// assert_eq!(velocity.to_string(), "m s-1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Exponents(u32);

impl Exponents {
    const BITS: u32 = 4;
    const MASK: u32 = 0xF;

    /// Smallest representable exponent.
    pub const MIN: i8 = -8;
    /// Largest representable exponent.
    pub const MAX: i8 = 7;

    /// All exponents zero.
    pub const DIMENSIONLESS: Self = Self(0);

    /// Pack seven exponents, given in [`BaseDimension`] order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        length: i8,
        time: i8,
        mass: i8,
        current: i8,
        temperature: i8,
        substance: i8,
        intensity: i8,
    ) -> Self {
        Self(
            Self::pack(length, 0)
                | Self::pack(time, 1)
                | Self::pack(mass, 2)
                | Self::pack(current, 3)
                | Self::pack(temperature, 4)
                | Self::pack(substance, 5)
                | Self::pack(intensity, 6),
        )
    }

    /// Pack an array of exponents in [`BaseDimension`] order.
    pub const fn from_array(e: [i8; 7]) -> Self {
        Self::new(e[0], e[1], e[2], e[3], e[4], e[5], e[6])
    }

    /// Unpack into an array in [`BaseDimension`] order.
    pub fn to_array(self) -> [i8; 7] {
        let mut out = [0i8; 7];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.unpack(i);
        }
        out
    }

    /// The raw packed word.
    pub const fn bits(self) -> u32 {
        self.0
    }

    const fn pack(value: i8, index: u32) -> u32 {
        ((value as u32) & Self::MASK) << (index * Self::BITS)
    }

    const fn unpack(self, index: usize) -> i8 {
        let raw = ((self.0 >> (index as u32 * Self::BITS)) & Self::MASK) as u8;
        // Sign-extend the 4-bit field.
        ((raw << 4) as i8) >> 4
    }

    /// Exponent of a single base dimension.
    pub const fn get(self, base: BaseDimension) -> i8 {
        self.unpack(base.index())
    }

    /// Return a copy with the exponent of `base` replaced by `value`.
    pub fn with(self, base: BaseDimension, value: i8) -> Self {
        debug_assert!(
            (Self::MIN..=Self::MAX).contains(&value),
            "{base} exponent {value} out of range"
        );
        let shift = base.index() as u32 * Self::BITS;
        let cleared = self.0 & !(Self::MASK << shift);
        Self(cleared | Self::pack(value, base.index() as u32))
    }

    /// Length exponent.
    pub const fn length(self) -> i8 {
        self.unpack(0)
    }

    /// Time exponent.
    pub const fn time(self) -> i8 {
        self.unpack(1)
    }

    /// Mass exponent.
    pub const fn mass(self) -> i8 {
        self.unpack(2)
    }

    /// Electric current exponent.
    pub const fn current(self) -> i8 {
        self.unpack(3)
    }

    /// Temperature exponent.
    pub const fn temperature(self) -> i8 {
        self.unpack(4)
    }

    /// Amount-of-substance exponent.
    pub const fn substance(self) -> i8 {
        self.unpack(5)
    }

    /// Luminous intensity exponent.
    pub const fn intensity(self) -> i8 {
        self.unpack(6)
    }

    /// `true` if every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        self.0 == 0
    }

    fn zip_with(self, other: Self, f: impl Fn(i8, i8) -> i8) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        let mut out = [0i8; 7];
        for i in 0..7 {
            let v = f(a[i], b[i]);
            debug_assert!(
                (Self::MIN..=Self::MAX).contains(&v),
                "{} exponent {v} out of range",
                BaseDimension::ALL[i]
            );
            out[i] = v;
        }
        Self::from_array(out)
    }

    /// Exponents of a product: elementwise sum.
    pub fn mul(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Exponents of a quotient: elementwise difference.
    pub fn div(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Exponents of a reciprocal: every exponent negated.
    pub fn inv(self) -> Self {
        Self::DIMENSIONLESS.div(self)
    }

    /// Exponents of a square root, or `None` if any exponent is odd.
    pub fn sqrt(self) -> Option<Self> {
        let e = self.to_array();
        if e.iter().any(|v| v % 2 != 0) {
            return None;
        }
        Some(Self::from_array(e.map(|v| v / 2)))
    }

    /// Iterate over `(base, exponent)` pairs in [`BaseDimension`] order.
    pub fn iter(self) -> impl Iterator<Item = (BaseDimension, i8)> {
        BaseDimension::ALL.into_iter().map(move |b| (b, self.get(b)))
    }

    /// First base dimension whose exponent differs from `expected`, as
    /// `(base, expected, actual)`.
    pub fn first_mismatch(self, expected: Self) -> Option<(BaseDimension, i8, i8)> {
        BaseDimension::ALL.into_iter().find_map(|b| {
            let (e, a) = (expected.get(b), self.get(b));
            (e != a).then_some((b, e, a))
        })
    }
}

impl fmt::Display for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for (base, exp) in self.iter().filter(|&(_, e)| e != 0) {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(base.base_symbol())?;
            if exp != 1 {
                write!(f, "{exp}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Exponents");
        for (base, exp) in self.iter() {
            s.field(base.name(), &exp);
        }
        s.finish()
    }
}
