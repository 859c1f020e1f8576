//! Circular functions and their inverses.

use super::Field;
use crate::error::Result;

/// Circular trigonometric functions
pub trait Trigonometric: Field {
    /// Sine
    fn sin(&self) -> Self;

    /// Cosine
    fn cos(&self) -> Self;

    /// Sine and cosine together
    #[inline]
    fn sin_and_cos(&self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Tangent, `sin / cos`
    #[inline]
    fn tan(&self) -> Self {
        let (sin, cos) = self.sin_and_cos();
        sin / cos
    }
}

/// Inverse circular functions (principal branches)
///
/// Each is expressed through `ln` and `sqrt`, so each fails wherever the
/// underlying logarithm meets an indeterminate zero.
pub trait InverseTrigonometric: Field {
    /// Arcsine
    fn asin(&self) -> Result<Self>;

    /// Arccosine
    fn acos(&self) -> Result<Self>;

    /// Arctangent
    fn atan(&self) -> Result<Self>;
}
