//! Real component types
//!
//! [`Real`] is the numeric backend every member is built from: it supplies the
//! transcendental primitives (`sqrt`, `exp`, `ln`, `sin`, `cos`, `atan2`,
//! `powf`, ...) through [`num_traits::Float`] and the constants through
//! [`FloatConst`]. Members never call a concrete float type directly, so a new
//! component precision only needs a `Real` impl.

use super::Precision;
use bytemuck::Pod;
use num_traits::{Float, FloatConst};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Component number type of a member
pub trait Real:
    Float
    + FloatConst
    + Pod
    + Default
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Send
    + Sync
    + 'static
{
    /// Component width
    const PRECISION: Precision;

    /// Convert from f64, rounding to this precision
    fn from_f64(v: f64) -> Self;

    /// Widen to f64
    fn as_f64(self) -> f64;

    /// The constant 2
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// The constant 1/2
    #[inline]
    fn one_half() -> Self {
        Self::one() / Self::two()
    }

    /// Uniform sample from `[0, 1)`
    fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let v = Self::from_f64(rng.random::<f64>());
        // rounding to a narrow precision can land exactly on 1
        if v >= Self::one() {
            Self::one() - Self::epsilon()
        } else {
            v
        }
    }
}

impl Real for f64 {
    const PRECISION: Precision = Precision::F64;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    const PRECISION: Precision = Precision::F32;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

#[cfg(feature = "f16")]
impl Real for half::f16 {
    const PRECISION: Precision = Precision::F16;

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::f16::from_f64(v)
    }

    #[inline]
    fn as_f64(self) -> f64 {
        half::f16::to_f64(self)
    }
}
