//! Ring and field capabilities.

use crate::dtype::Element;
use crate::error::{Error, Result};
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Additive group with a multiplicative identity
///
/// The arithmetic itself is the std operator set (`+`, `-`, `*`, unary `-`);
/// this trait adds the identities. Multiplication is not assumed to commute or
/// associate: quaternion products depend on operand order and octonion
/// products on grouping.
///
/// Every operation takes its operands by value and returns a fresh member, so
/// aliased use such as `a * a` is always safe.
pub trait Ring:
    Element
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity
    #[inline]
    fn zero() -> Self {
        Self::zeroed()
    }

    /// Multiplicative identity
    #[inline]
    fn unity() -> Self {
        let mut one = Self::zeroed();
        one.components_mut()[0] = Self::Component::one();
        one
    }

    /// Whether every component is zero (either sign)
    #[inline]
    fn is_zero(&self) -> bool {
        self.components().iter().all(|c| c.is_zero())
    }

    /// Whether this is exactly the multiplicative identity
    #[inline]
    fn is_unity(&self) -> bool {
        *self == Self::unity()
    }
}

/// Division ring: every nonzero member has an inverse
///
/// `a / b` is right division `a · b⁻¹`. Because every shipped component type
/// is an IEEE float, dividing by zero through the operator yields NaN/∞
/// components; [`Field::checked_divide`] is the variant that fails instead.
pub trait Field: Ring + Div<Output = Self> {
    /// Multiplicative inverse, `unity / a`
    #[inline]
    fn invert(&self) -> Self {
        Self::unity() / *self
    }

    /// Right division that reports a zero divisor as [`Error::DivisionByZero`]
    #[inline]
    fn checked_divide(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero { op: "divide" });
        }
        Ok(*self / *divisor)
    }
}
