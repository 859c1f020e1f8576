//! Operations on members
//!
//! Capabilities are split into small traits in [`traits`], re-exported here.
//! A concrete member implements each capability it supports, and generic
//! code bounds only on what it calls:
//!
//! ```
//! use numalg::ops::{Field, Norm};
//!
//! fn relative_error<T: Field + Norm>(approx: T, exact: T) -> T::Component {
//!     (approx - exact).norm() / exact.norm()
//! }
//!
//! let e = relative_error(numalg::dtype::Complex128::new(1.0, 1e-9),
//!                        numalg::dtype::Complex128::new(1.0, 0.0));
//! assert!(e < 1e-8);
//! ```
//!
//! Real components follow IEEE-754. Hypercomplex `exp`, `ln`, trigonometric
//! and hyperbolic functions use the polar decomposition `q = a + |v|·u`, so
//! complex numbers, quaternions and octonions share one implementation.

mod scalar;
pub mod traits;

pub use traits::{
    Algebra, Conjugate, Exponential, Field, Hyperbolic, Infinite, InverseHyperbolic,
    InverseTrigonometric, Nan, Norm, Power, Random, RealUnreal, Ring, Roots, Rounding,
    RoundingMode, Scale, Tolerance, Trigonometric,
};
