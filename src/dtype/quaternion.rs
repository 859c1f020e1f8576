//! Quaternions over any [`Real`] component type
//!
//! A quaternion `r + i·i + j·j + k·k` obeys Hamilton's rules
//! `i² = j² = k² = ijk = -1`, so multiplication does not commute:
//! `ij = k` but `ji = -k`. Division is right division, `a / b = a · b⁻¹`.

use super::{DType, Element, Real};
use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Quaternion with components of type `T`
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quaternion<T> {
    /// Real part
    pub r: T,
    /// i component
    pub i: T,
    /// j component
    pub j: T,
    /// k component
    pub k: T,
}

// SAFETY: #[repr(C)] with four fields of the same Pod type: no padding, every
// bit pattern valid.
unsafe impl<T: Real> Zeroable for Quaternion<T> {}
// SAFETY: see above.
unsafe impl<T: Real> Pod for Quaternion<T> {}

impl<T: Real> Quaternion<T> {
    /// Create a new quaternion
    #[inline]
    pub const fn new(r: T, i: T, j: T, k: T) -> Self {
        Self { r, i, j, k }
    }

    /// Unit i
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    /// Unit j
    #[inline]
    pub fn j() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    /// Unit k
    #[inline]
    pub fn k() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Sum of squared components
    #[inline]
    pub fn norm_sqr(self) -> T {
        self.r * self.r + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Quaternion conjugate: `r - i·i - j·j - k·k`
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }

    /// Convert each component to another precision
    #[inline]
    pub fn cast<U: Real>(self) -> Quaternion<U> {
        Quaternion::new(
            U::from_f64(self.r.as_f64()),
            U::from_f64(self.i.as_f64()),
            U::from_f64(self.j.as_f64()),
            U::from_f64(self.k.as_f64()),
        )
    }

    /// Largest component magnitude
    #[inline]
    pub(crate) fn max_abs(self) -> T {
        self.r.abs().max(self.i.abs()).max(self.j.abs()).max(self.k.abs())
    }

    #[inline]
    pub(crate) fn divide_components(self, divisor: T) -> Self {
        Self::new(
            self.r / divisor,
            self.i / divisor,
            self.j / divisor,
            self.k / divisor,
        )
    }
}

impl<T: Real> Element for Quaternion<T> {
    type Component = T;
    const COMPONENTS: usize = 4;
    const DTYPE: DType = DType::Quaternion(T::PRECISION);
}

impl<T: Real> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.i + rhs.i,
            self.j + rhs.j,
            self.k + rhs.k,
        )
    }
}

impl<T: Real> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.r - rhs.r,
            self.i - rhs.i,
            self.j - rhs.j,
            self.k - rhs.k,
        )
    }
}

impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;

    /// Hamilton product
    #[inline]
    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k,
            a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j,
            a.r * b.j - a.i * b.k + a.j * b.r + a.k * b.i,
            a.r * b.k + a.i * b.j - a.j * b.i + a.k * b.r,
        )
    }
}

impl<T: Real> Div for Quaternion<T> {
    type Output = Self;

    /// Right division: `a · conj(b) / |b|²`
    ///
    /// Evaluated as `a · conj(b') / |b'|² / s` with `b' = b / s` and
    /// `s = max |bᵢ|`, so `|b|²` is never formed.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let s = rhs.max_abs();
        let b = rhs.divide_components(s);
        (self * b.conj())
            .divide_components(b.norm_sqr())
            .divide_components(s)
    }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.r, -self.i, -self.j, -self.k)
    }
}

impl<T: Real> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::repr::write_element(f, self)
    }
}

impl<T: Real> FromStr for Quaternion<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::repr::parse_scalar(s)
    }
}

impl<T: Real> From<T> for Quaternion<T> {
    #[inline]
    fn from(r: T) -> Self {
        Self::new(r, T::zero(), T::zero(), T::zero())
    }
}

impl<T: Real> From<super::Complex<T>> for Quaternion<T> {
    /// Embed `a + bi` as `a + b·i`
    #[inline]
    fn from(z: super::Complex<T>) -> Self {
        Self::new(z.re, z.im, T::zero(), T::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::Quaternion256;

    type Q = Quaternion256;

    #[test]
    fn test_unit_products() {
        assert_eq!(Q::i() * Q::j(), Q::k());
        assert_eq!(Q::j() * Q::k(), Q::i());
        assert_eq!(Q::k() * Q::i(), Q::j());
        assert_eq!(Q::j() * Q::i(), -Q::k());

        let minus_one = Q::new(-1.0, 0.0, 0.0, 0.0);
        assert_eq!(Q::i() * Q::i(), minus_one);
        assert_eq!(Q::i() * Q::j() * Q::k(), minus_one);
    }

    #[test]
    fn test_unity_times_i() {
        let one = Q::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(one * Q::i(), Q::i());
    }

    #[test]
    fn test_non_commutative() {
        let a = Q::new(1.0, 2.0, 3.0, 4.0);
        let b = Q::new(-2.0, 0.5, 1.0, 3.0);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn test_right_division() {
        let a = Q::new(1.0, 2.0, 3.0, 4.0);
        let b = Q::new(0.0, 1.0, -1.0, 2.0);
        let back = (a / b) * b;
        for (x, y) in back.components().iter().zip(a.components()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_division_extreme_magnitudes() {
        let one = Q::new(1.0, 0.0, 0.0, 0.0);
        for a in [Q::new(1e160, 1e160, 0.0, 0.0), Q::new(0.0, 1e-170, 0.0, -1e-170)] {
            let q = a / a;
            assert!((q.r - 1.0).abs() < 1e-15, "{q}");
            assert!(q.i.abs() < 1e-15 && q.j.abs() < 1e-15 && q.k.abs() < 1e-15, "{q}");
        }
        let inv = one / Q::new(1e200, 0.0, 0.0, 0.0);
        assert!((inv.r / 1e-200 - 1.0).abs() < 1e-15, "{inv}");
    }

    #[test]
    fn test_zero_divisor_is_nan() {
        let q = Q::new(1.0, 0.0, 0.0, 0.0) / Q::default();
        assert!(q.r.is_nan());
    }

    #[test]
    fn test_complex_embedding() {
        let q: Q = crate::dtype::Complex128::new(1.0, 2.0).into();
        assert_eq!(q, Q::new(1.0, 2.0, 0.0, 0.0));
        assert_eq!(q.to_string(), "{1,2,0,0}");
    }
}
