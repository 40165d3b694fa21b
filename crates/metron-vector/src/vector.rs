//! The fixed-size vector type and its arithmetic.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use metron_core::{Dimension, DynUnit, Real, Sqrt, Unit};
use num_traits::Zero;

/// `N` values of one element type.
///
/// Elements are usually [`Unit<D>`], [`DynUnit`] or plain floats. The size
/// is part of the type, so operands of different sizes do not compile.
///
/// Arithmetic is elementwise. Products and quotients with another vector or
/// a scalar may change the element type, as when a vector of lengths is
/// divided by a time.
///
/// Equality requires every element to be equal. `a < b` holds only when
/// every element of `a` is strictly less than the matching element of `b`,
/// and `a > b` likewise. Any other mix of relations leaves the vectors
/// unordered, so `a <= b` means "all less or all equal", not "each less or
/// equal". [`all_le`](Vector::all_le) and friends give the elementwise
/// relations.
///
/// ```
/// use metron_core::{Length, Time};
/// use metron_vector::Vector2;
///
/// let p = Vector2::new(Length::new(3.0), Length::new(4.0));
/// assert_eq!(p.length(), Length::new(5.0));
///
/// let v = p / Time::new(2.0);
/// assert_eq!(v.x().value(), 1.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T, const N: usize> Vector<T, N> {
    /// Number of elements.
    pub const DIM: usize = N;

    /// A vector from its elements.
    pub const fn from_array(elements: [T; N]) -> Self {
        Self(elements)
    }

    /// All elements equal to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// The elements.
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Consume the vector, returning its elements.
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Iterate mutably over the elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Apply `f` to every element.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    fn zip_with<U: Copy, V>(self, other: Vector<U, N>, mut f: impl FnMut(T, U) -> V) -> Vector<V, N> {
        Vector(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    fn all_pairs(&self, other: &Self, mut pred: impl FnMut(&T, &T) -> bool) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| pred(a, b))
    }

    /// Every element strictly less than its counterpart.
    pub fn all_lt(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        self.all_pairs(other, |a, b| a < b)
    }

    /// Every element less than or equal to its counterpart.
    pub fn all_le(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        self.all_pairs(other, |a, b| a <= b)
    }

    /// Every element strictly greater than its counterpart.
    pub fn all_gt(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        self.all_pairs(other, |a, b| a > b)
    }

    /// Every element greater than or equal to its counterpart.
    pub fn all_ge(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        self.all_pairs(other, |a, b| a >= b)
    }

    /// Sum of elementwise products.
    pub fn dot<U>(self, other: Vector<U, N>) -> <T as Mul<U>>::Output
    where
        U: Copy,
        T: Mul<U>,
        <T as Mul<U>>::Output: Zero,
    {
        self.0
            .iter()
            .zip(other.0)
            .fold(Zero::zero(), |acc, (&a, b)| acc + a * b)
    }

    /// The dot product of the vector with itself.
    pub fn length_squared(self) -> <T as Mul>::Output
    where
        T: Mul,
        <T as Mul>::Output: Zero,
    {
        self.dot(self)
    }

    /// Euclidean norm. For a vector of lengths this is again a length.
    pub fn length(self) -> <<T as Mul>::Output as Sqrt>::Output
    where
        T: Mul,
        <T as Mul>::Output: Zero + Sqrt,
    {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Self) -> <T as Mul>::Output
    where
        T: Sub<Output = T> + Mul,
        <T as Mul>::Output: Zero,
    {
        (self - other).length_squared()
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> <<T as Mul>::Output as Sqrt>::Output
    where
        T: Sub<Output = T> + Mul,
        <T as Mul>::Output: Zero + Sqrt,
    {
        (self - other).length()
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(elements: [T; N]) -> Self {
        Self(elements)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Comparison ─────────────────────────────────────────────────────

impl<T: PartialOrd, const N: usize> PartialOrd for Vector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut elements = self.0.iter().zip(&other.0);
        let Some((a, b)) = elements.next() else {
            return Some(Ordering::Equal);
        };
        let first = a.partial_cmp(b)?;
        for (a, b) in elements {
            if a.partial_cmp(b)? != first {
                return None;
            }
        }
        Some(first)
    }
}

// ── Elementwise arithmetic ─────────────────────────────────────────

impl<T: Copy + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<T: Copy + Add<Output = T>, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, Add::add)
    }
}

impl<T: Copy + Sub<Output = T>, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, Sub::sub)
    }
}

impl<T: AddAssign, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl<T: SubAssign, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
    }
}

impl<T: Copy + Mul<U>, U: Copy, const N: usize> Mul<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<<T as Mul<U>>::Output, N>;

    fn mul(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip_with(rhs, Mul::mul)
    }
}

impl<T: Copy + Div<U>, U: Copy, const N: usize> Div<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<<T as Div<U>>::Output, N>;

    fn div(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip_with(rhs, Div::div)
    }
}

// ── Scalar arithmetic ──────────────────────────────────────────────

macro_rules! scalar_ops {
    ($([$($generics:tt)*] $scalar:ty),* $(,)?) => {
        $(
            impl<$($generics)* T: Copy + Mul<$scalar>, const N: usize> Mul<$scalar> for Vector<T, N> {
                type Output = Vector<<T as Mul<$scalar>>::Output, N>;

                fn mul(self, rhs: $scalar) -> Self::Output {
                    self.map(|a| a * rhs)
                }
            }

            impl<$($generics)* T: Copy + Div<$scalar>, const N: usize> Div<$scalar> for Vector<T, N> {
                type Output = Vector<<T as Div<$scalar>>::Output, N>;

                fn div(self, rhs: $scalar) -> Self::Output {
                    self.map(|a| a / rhs)
                }
            }
        )*
    };
}

scalar_ops! {
    [] Real,
    [] f32,
    [D: Dimension,] Unit<D>,
    [] DynUnit,
}

macro_rules! scalar_lhs_ops {
    ($($scalar:ty),*) => {
        $(
            impl<T: Copy, const N: usize> Mul<Vector<T, N>> for $scalar
            where
                $scalar: Mul<T>,
            {
                type Output = Vector<<$scalar as Mul<T>>::Output, N>;

                fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                    rhs.map(|a| self * a)
                }
            }
        )*
    };
}

scalar_lhs_ops!(Real, f32);

impl<T: MulAssign<Real>, const N: usize> MulAssign<Real> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: Real) {
        for a in &mut self.0 {
            *a *= rhs;
        }
    }
}

impl<T: DivAssign<Real>, const N: usize> DivAssign<Real> for Vector<T, N> {
    fn div_assign(&mut self, rhs: Real) {
        for a in &mut self.0 {
            *a /= rhs;
        }
    }
}
