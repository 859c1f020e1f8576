//! Hyperbolic functions and their inverses.

use super::Field;
use crate::error::Result;

/// Hyperbolic functions
pub trait Hyperbolic: Field {
    /// Hyperbolic sine
    fn sinh(&self) -> Self;

    /// Hyperbolic cosine
    fn cosh(&self) -> Self;

    /// Hyperbolic sine and cosine together
    #[inline]
    fn sinh_and_cosh(&self) -> (Self, Self) {
        (self.sinh(), self.cosh())
    }

    /// Hyperbolic tangent, `sinh / cosh`
    #[inline]
    fn tanh(&self) -> Self {
        let (sinh, cosh) = self.sinh_and_cosh();
        sinh / cosh
    }
}

/// Inverse hyperbolic functions (principal branches)
pub trait InverseHyperbolic: Field {
    /// Inverse hyperbolic sine
    fn asinh(&self) -> Result<Self>;

    /// Inverse hyperbolic cosine
    fn acosh(&self) -> Result<Self>;

    /// Inverse hyperbolic tangent
    fn atanh(&self) -> Result<Self>;
}
