//! Capability traits.
//!
//! Each trait is one small capability a member type opts into. Generic
//! algorithms bound only on the capabilities they call, so the same code runs
//! on every member that provides them. [`Algebra`] is the full set for callers
//! who want everything.

mod components;
mod exponential;
mod hyperbolic;
mod norm;
mod ring;
mod scale;
mod trigonometric;

pub use components::{Infinite, Nan, Random, RealUnreal, Rounding, RoundingMode};
pub use exponential::{Exponential, Power, Roots};
pub use hyperbolic::{Hyperbolic, InverseHyperbolic};
pub use norm::{Conjugate, Norm, Tolerance};
pub use ring::{Field, Ring};
pub use scale::Scale;
pub use trigonometric::{InverseTrigonometric, Trigonometric};

/// Every capability numalg defines
///
/// Implemented automatically for any member that has them all: every real,
/// complex, quaternion and octonion type.
pub trait Algebra:
    Field
    + Conjugate
    + Norm
    + Tolerance
    + Scale
    + Exponential
    + Power
    + Roots
    + Trigonometric
    + InverseTrigonometric
    + Hyperbolic
    + InverseHyperbolic
    + RealUnreal
    + Rounding
    + Random
    + Infinite
    + Nan
{
}

impl<T> Algebra for T where
    T: Field
        + Conjugate
        + Norm
        + Tolerance
        + Scale
        + Exponential
        + Power
        + Roots
        + Trigonometric
        + InverseTrigonometric
        + Hyperbolic
        + InverseHyperbolic
        + RealUnreal
        + Rounding
        + Random
        + Infinite
        + Nan
{
}
