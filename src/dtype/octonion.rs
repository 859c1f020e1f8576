//! Octonions over any [`Real`] component type
//!
//! An octonion is stored as eight components `r, i, j, k, l, il, jl, kl` and
//! multiplied with the Cayley–Dickson construction over quaternion pairs
//! `(a, b)` with `a = (r, i, j, k)` and `b = (l, il, jl, kl)`:
//!
//! ```text
//! (a, b)(c, d) = (ac - conj(d)·b, d·a + b·conj(c))
//! ```
//!
//! Octonion multiplication is neither commutative nor associative, but it is
//! alternative: `(aa)b = a(ab)` and `(ab)b = a(bb)`.

use super::{DType, Element, Quaternion, Real};
use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Octonion with components of type `T`
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Octonion<T> {
    /// Real part
    pub r: T,
    /// i component
    pub i: T,
    /// j component
    pub j: T,
    /// k component
    pub k: T,
    /// l component
    pub l: T,
    /// il component
    pub il: T,
    /// jl component
    pub jl: T,
    /// kl component
    pub kl: T,
}

// SAFETY: #[repr(C)] with eight fields of the same Pod type: no padding, every
// bit pattern valid.
unsafe impl<T: Real> Zeroable for Octonion<T> {}
// SAFETY: see above.
unsafe impl<T: Real> Pod for Octonion<T> {}

macro_rules! unit {
    ($name:ident, $idx:literal, $doc:literal) => {
        #[doc = $doc]
        #[inline]
        pub fn $name() -> Self {
            let mut out = Self::zeroed();
            out.components_mut()[$idx] = T::one();
            out
        }
    };
}

impl<T: Real> Octonion<T> {
    /// Create a new octonion from its eight components
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(r: T, i: T, j: T, k: T, l: T, il: T, jl: T, kl: T) -> Self {
        Self {
            r,
            i,
            j,
            k,
            l,
            il,
            jl,
            kl,
        }
    }

    /// Assemble `a + b·l` from two quaternion halves
    #[inline]
    pub fn from_halves(a: Quaternion<T>, b: Quaternion<T>) -> Self {
        Self::new(a.r, a.i, a.j, a.k, b.r, b.i, b.j, b.k)
    }

    /// Split into the quaternion halves `(a, b)` of `a + b·l`
    #[inline]
    pub fn halves(self) -> (Quaternion<T>, Quaternion<T>) {
        (
            Quaternion::new(self.r, self.i, self.j, self.k),
            Quaternion::new(self.l, self.il, self.jl, self.kl),
        )
    }

    unit!(i, 1, "Unit i");
    unit!(j, 2, "Unit j");
    unit!(k, 3, "Unit k");
    unit!(l, 4, "Unit l");
    unit!(il, 5, "Unit il");
    unit!(jl, 6, "Unit jl");
    unit!(kl, 7, "Unit kl");

    /// Sum of squared components
    #[inline]
    pub fn norm_sqr(self) -> T {
        let (a, b) = self.halves();
        a.norm_sqr() + b.norm_sqr()
    }

    /// Octonion conjugate: `(conj(a), -b)`
    #[inline]
    pub fn conj(self) -> Self {
        let (a, b) = self.halves();
        Self::from_halves(a.conj(), -b)
    }

    /// Convert each component to another precision
    pub fn cast<U: Real>(self) -> Octonion<U> {
        let (a, b) = self.halves();
        Octonion::from_halves(a.cast(), b.cast())
    }

    #[inline]
    pub(crate) fn divide_components(self, divisor: T) -> Self {
        let (a, b) = self.halves();
        Self::from_halves(a.divide_components(divisor), b.divide_components(divisor))
    }
}

impl<T: Real> Element for Octonion<T> {
    type Component = T;
    const COMPONENTS: usize = 8;
    const DTYPE: DType = DType::Octonion(T::PRECISION);
}

impl<T: Real> Add for Octonion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (a, b) = self.halves();
        let (c, d) = rhs.halves();
        Self::from_halves(a + c, b + d)
    }
}

impl<T: Real> Sub for Octonion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (a, b) = self.halves();
        let (c, d) = rhs.halves();
        Self::from_halves(a - c, b - d)
    }
}

impl<T: Real> Mul for Octonion<T> {
    type Output = Self;

    /// Cayley–Dickson product `(ac - conj(d)·b, d·a + b·conj(c))`
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = self.halves();
        let (c, d) = rhs.halves();
        Self::from_halves(a * c - d.conj() * b, d * a + b * c.conj())
    }
}

impl<T: Real> Div for Octonion<T> {
    type Output = Self;

    /// `a · conj(b) / |b|²`, with `b` scaled by its largest component first
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let (lo, hi) = rhs.halves();
        let s = lo.max_abs().max(hi.max_abs());
        let b = rhs.divide_components(s);
        (self * b.conj())
            .divide_components(b.norm_sqr())
            .divide_components(s)
    }
}

impl<T: Real> Neg for Octonion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        let (a, b) = self.halves();
        Self::from_halves(-a, -b)
    }
}

impl<T: Real> fmt::Display for Octonion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::repr::write_element(f, self)
    }
}

impl<T: Real> FromStr for Octonion<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::repr::parse_scalar(s)
    }
}

impl<T: Real> From<T> for Octonion<T> {
    #[inline]
    fn from(r: T) -> Self {
        Self::from_halves(Quaternion::from(r), Quaternion::default())
    }
}

impl<T: Real> From<Quaternion<T>> for Octonion<T> {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        Self::from_halves(q, Quaternion::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::Octonion512;

    type O = Octonion512;

    fn units() -> [O; 7] {
        [O::i(), O::j(), O::k(), O::l(), O::il(), O::jl(), O::kl()]
    }

    fn close(a: O, b: O) -> bool {
        a.components()
            .iter()
            .zip(b.components())
            .all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn test_units_square_to_minus_one() {
        let minus_one = O::from(-1.0);
        for u in units() {
            assert_eq!(u * u, minus_one);
        }
    }

    #[test]
    fn test_units_anticommute() {
        for (n, a) in units().into_iter().enumerate() {
            for b in units().into_iter().skip(n + 1) {
                assert_eq!(a * b, -(b * a));
            }
        }
    }

    #[test]
    fn test_quaternion_subalgebra() {
        assert_eq!(O::i() * O::j(), O::k());
        assert_eq!(O::i() * O::l(), O::il());
    }

    #[test]
    fn test_non_associative_but_alternative() {
        let a = O::new(1.0, 2.0, -1.0, 0.5, 3.0, -2.0, 1.5, 0.25);
        let b = O::new(-0.5, 1.0, 2.0, -3.0, 0.0, 1.0, -1.0, 2.0);
        let c = O::new(2.0, 0.0, 1.0, 1.0, -1.0, 0.5, 0.0, -2.0);

        assert!(!close((a * b) * c, a * (b * c)));
        assert!(close((a * a) * b, a * (a * b)));
        assert!(close((a * b) * b, a * (b * b)));
    }

    #[test]
    fn test_division_extreme_magnitudes() {
        let big = O::new(1e160, 0.0, 0.0, 0.0, 0.0, 1e160, 0.0, 0.0);
        let tiny = O::new(0.0, 0.0, 1e-170, 0.0, 0.0, 0.0, 0.0, 1e-170);
        let one = O::from(1.0);
        assert!(close(big / big, one));
        assert!(close(tiny / tiny, one));
        assert!(close((one / big) * big, one));
    }

    #[test]
    fn test_norm_is_multiplicative() {
        let a = O::new(1.0, 2.0, -1.0, 0.5, 3.0, -2.0, 1.5, 0.25);
        let b = O::new(-0.5, 1.0, 2.0, -3.0, 0.0, 1.0, -1.0, 2.0);
        let lhs = (a * b).norm_sqr();
        let rhs = a.norm_sqr() * b.norm_sqr();
        assert!((lhs - rhs).abs() < 1e-9 * rhs);
    }
}
