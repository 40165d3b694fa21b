//! Fixed-size vectors of dimensioned values.
//!
//! [`Vector<T, N>`] wraps `[T; N]` with elementwise arithmetic, the product
//! partial order, dot products and Euclidean norms that keep track of the
//! element dimension. [`Vector2`] and [`Vector3`] add named components,
//! rotation and the cross product.
//!
//! ```
//! use metron_vector::Vector2;
//!
//! let a = Vector2::new(1.0f32, 2.0);
//! let b = Vector2::new(5.0f32, 4.0);
//! assert_eq!(a.dot(b), 13.0);
//! assert_eq!(a.distance_squared(b), 20.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod io;
pub mod planar;
pub mod vector;

pub use element::Scale;
pub use planar::{Vector2, Vector3};
pub use vector::Vector;
