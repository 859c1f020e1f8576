//! Exponential, power and root capabilities.

use super::{Field, Ring};
use crate::algorithm::{UnitalAlgebra, power_any};
use crate::error::Result;

/// Exponential and logarithm
///
/// Hypercomplex members compute both through the polar decomposition
/// `q = a + |v|·u`; see [`crate::ops`] for the formulas.
pub trait Exponential: Ring {
    /// `e^self`
    fn exp(&self) -> Self;

    /// `e^self - 1`
    #[inline]
    fn exp_m1(&self) -> Self {
        self.exp() - Self::unity()
    }

    /// Principal natural logarithm
    ///
    /// The logarithm of a hypercomplex zero is undefined and fails with
    /// [`Error::Indeterminate`](crate::error::Error::Indeterminate). Reals follow
    /// IEEE (`ln(0) = -∞`, `ln(-1) = NaN`).
    fn ln(&self) -> Result<Self>;

    /// `ln(1 + self)`
    #[inline]
    fn ln_1p(&self) -> Result<Self> {
        (Self::unity() + *self).ln()
    }
}

/// General powers
pub trait Power: Field {
    /// Principal power `exp(exponent · ln(self))`
    ///
    /// `0^0` fails with [`Error::Indeterminate`](crate::error::Error::Indeterminate)
    /// for every member type. `0^b` is zero when the real part of `b` is
    /// positive and fails otherwise.
    fn pow(&self, exponent: &Self) -> Result<Self>;

    /// Integer power by repeated squaring; negative powers invert first
    #[inline]
    fn powi(&self, n: i32) -> Self
    where
        Self: UnitalAlgebra,
    {
        if n < 0 {
            power_any(&self.invert(), n.unsigned_abs() as u64)
        } else {
            power_any(self, n as u64)
        }
    }
}

/// Principal roots
pub trait Roots: Ring {
    /// Principal square root; `sqrt(0) = 0`
    fn sqrt(&self) -> Self;

    /// Principal cube root; `cbrt(0) = 0`
    fn cbrt(&self) -> Self;
}
