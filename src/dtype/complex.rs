//! Complex numbers over any [`Real`] component type
//!
//! # Storage Format
//!
//! Components are stored interleaved `(re, im)` with `#[repr(C)]`, so a slice
//! of complex members is bit-compatible with a slice of `2 × len` components.
//!
//! # Arithmetic Operations
//!
//! - Addition: `(a+bi) + (c+di) = (a+c) + (b+d)i`
//! - Subtraction: `(a+bi) - (c+di) = (a-c) + (b-d)i`
//! - Multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
//! - Division: `(a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²`
//!
//! The transcendental capabilities (`exp`, `ln`, `pow`, trigonometric, ...)
//! are implemented in [`crate::ops`].
//!
//! # Examples
//!
//! ```
//! use numalg::prelude::*;
//!
//! let z = Complex128::new(3.0, 4.0);
//! assert_eq!(z.norm(), 5.0);
//!
//! let w = Complex128::new(2.0, 3.0) * Complex128::new(4.0, -1.0);
//! assert_eq!(w, Complex128::new(11.0, 10.0));
//! ```

use super::{DType, Element, Real};
use crate::algorithm::principal_argument;
use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Complex number with real and imaginary parts of type `T`
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex<T> {
    /// Real part
    pub re: T,
    /// Imaginary part
    pub im: T,
}

// SAFETY: Complex<T> is #[repr(C)] with two fields of the same Pod type, so it
// has no padding and every bit pattern is valid.
unsafe impl<T: Real> Zeroable for Complex<T> {}
// SAFETY: see above.
unsafe impl<T: Real> Pod for Complex<T> {}

impl<T: Real> Complex<T> {
    /// Create a new complex number
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Imaginary unit i
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Create a complex number from polar form: r * e^(iθ)
    #[inline]
    pub fn from_polar(r: T, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(r * cos, r * sin)
    }

    /// Squared magnitude: |z|² = re² + im²
    #[inline]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Principal argument in `(-π, π]`
    ///
    /// The argument of `0 + 0i` is undefined and reported as
    /// [`Error::Indeterminate`].
    pub fn argument(self) -> Result<T> {
        if self.re.is_zero() && self.im.is_zero() {
            return Err(Error::indeterminate("argument", "argument of zero"));
        }
        Ok(principal_argument(self.im.atan2(self.re)))
    }

    /// Convert each component to another precision
    #[inline]
    pub fn cast<U: Real>(self) -> Complex<U> {
        Complex::new(U::from_f64(self.re.as_f64()), U::from_f64(self.im.as_f64()))
    }
}

impl<T: Real> Element for Complex<T> {
    type Component = T;
    const COMPONENTS: usize = 2;
    const DTYPE: DType = DType::Complex(T::PRECISION);
}

impl<T: Real> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Real> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Real> Mul for Complex<T> {
    type Output = Self;

    /// Complex multiplication: (a+bi)(c+di) = (ac-bd) + (ad+bc)i
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Real> Div for Complex<T> {
    type Output = Self;

    /// Complex division: (a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²
    ///
    /// The divisor is first scaled by `s = max(|c|, |d|)` so `|c+di|²` cannot
    /// overflow or underflow; the quotient is divided by `s` at the end. A
    /// zero divisor yields NaN components.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let s = rhs.re.abs().max(rhs.im.abs());
        let (c, d) = (rhs.re / s, rhs.im / s);
        let denom = c * c + d * d;
        Self::new(
            (self.re * c + self.im * d) / denom / s,
            (self.im * c - self.re * d) / denom / s,
        )
    }
}

impl<T: Real> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Real> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::repr::write_element(f, self)
    }
}

impl<T: Real> FromStr for Complex<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::repr::parse_scalar(s)
    }
}

impl<T: Real> From<T> for Complex<T> {
    #[inline]
    fn from(re: T) -> Self {
        Self::new(re, T::zero())
    }
}

impl<T: Real> From<(T, T)> for Complex<T> {
    #[inline]
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

impl From<Complex<f32>> for Complex<f64> {
    #[inline]
    fn from(c: Complex<f32>) -> Self {
        c.cast()
    }
}
