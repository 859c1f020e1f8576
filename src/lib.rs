//! # numalg
//!
//! **A generic algebraic numeric hierarchy for Rust.**
//!
//! numalg models numbers as *members* of algebraic structures: reals,
//! complex numbers, quaternions and octonions, each available at f16, f32
//! and f64 component precision. Capabilities such as ring arithmetic,
//! norms, exponentials and trigonometry are small traits, so generic code
//! names exactly what it uses and runs unchanged over every member type.
//!
//! ## Features
//!
//! - **Members**: [`Complex`](dtype::Complex), [`Quaternion`](dtype::Quaternion)
//!   and [`Octonion`](dtype::Octonion) over any [`Real`](dtype::Real) component
//! - **Transcendentals**: `exp`, `ln`, `pow`, `sqrt`, `cbrt`, trigonometric,
//!   hyperbolic and their inverses, on every member
//! - **Containers**: [`RModule`](tensor::RModule) vectors,
//!   [`Matrix`](tensor::Matrix) with inverse, determinant, power and matrix
//!   `exp`/`ln`/`sqrt`, and Cartesian [`Tensor`](tensor::Tensor)s
//! - **Text format**: `{c0,c1,...}` members inside nested `[...]` lists
//! - **Generic algorithms**: repeated squaring and Taylor series over any
//!   [`UnitalAlgebra`](algorithm::UnitalAlgebra)
//!
//! ## Quick Start
//!
//! ```
//! use numalg::prelude::*;
//!
//! let z = Complex128::new(2.0, 3.0) * Complex128::new(4.0, -1.0);
//! assert_eq!(z, Complex128::new(11.0, 10.0));
//!
//! let m = Matrix::<Quaternion256>::from_repr("[[{1,1,0,0},{0,0,1,0}],[{0,0,0,1},{2,0,0,0}]]")?;
//! let inv = m.invert()?;
//! assert!(m.multiply(&inv)?.within(&Matrix::identity(2), 1e-12));
//! # Ok::<(), numalg::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16` (default): half-precision components via the `half` crate

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod repr;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::{SeriesConfig, UnitalAlgebra};
    pub use crate::dtype::{
        Complex, Complex64, Complex128, DType, Element, Octonion, Octonion256, Octonion512,
        Precision, Quaternion, Quaternion128, Quaternion256, Real,
    };
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        Algebra, Conjugate, Exponential, Field, Hyperbolic, Infinite, InverseHyperbolic,
        InverseTrigonometric, Nan, Norm, Power, Random, RealUnreal, Ring, Roots, Rounding,
        RoundingMode, Scale, Tolerance, Trigonometric,
    };
    pub use crate::tensor::{ArrayStorage, Layout, Matrix, RModule, Storage, Tensor};

    #[cfg(feature = "f16")]
    pub use crate::dtype::{Complex32, Octonion128, Quaternion64, f16};
}
