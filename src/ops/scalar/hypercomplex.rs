//! Shared kernels for complex, quaternion and octonion members
//!
//! Every hypercomplex value splits as `q = a + r·u`, with real part `a`,
//! `r = |v|` the norm of the imaginary part `v` and `u = v / r` a unit
//! imaginary that squares to `-1` (the first imaginary unit when `v = 0`).
//! `1` and `u` span a commutative subalgebra isomorphic to the complex
//! numbers, so every elementary function reduces to the complex formula for
//! `a + r·i` with `i` replaced by `u`:
//!
//! ```text
//! exp(q)  = eᵃ (cos r + u sin r)
//! ln(q)   = ln|q| + u·atan2(r, a)
//! sin(q)  = sin a cosh r + u cos a sinh r
//! cos(q)  = cos a cosh r - u sin a sinh r
//! sinh(q) = sinh a cos r + u cosh a sin r
//! cosh(q) = cosh a cos r + u sinh a sin r
//! sqrt(q) = √((|q| + a)/2) + u √((|q| - a)/2)
//! ```
//!
//! Complex numbers run the same code with two components: `u` is `±i`, which
//! lands every result on the principal branch.

use crate::algorithm::principal_argument;
use crate::dtype::{Complex, Element, Octonion, Quaternion, Real};
use crate::error::{Error, Result};
use crate::ops::traits::{
    Conjugate, Exponential, Field, Hyperbolic, Infinite, InverseHyperbolic, InverseTrigonometric,
    Nan, Norm, Power, Random, RealUnreal, Ring, Roots, Rounding, Scale, Tolerance, Trigonometric,
};
use num_traits::{Float, One, Zero};

/// Capabilities the polar kernels need
pub(crate) trait Hypercomplex: Field + Scale + Norm + RealUnreal {
    /// First imaginary unit, the direction used when the imaginary part is zero
    #[inline]
    fn imaginary_unit() -> Self {
        let mut out = Self::zeroed();
        out.components_mut()[1] = Self::Component::one();
        out
    }
}

/// `a + r·u`
struct Polar<Q: Hypercomplex> {
    a: Q::Component,
    r: Q::Component,
    u: Q,
}

impl<Q: Hypercomplex> Polar<Q> {
    fn of(q: &Q) -> Self {
        let v = q.unreal();
        let r = v.norm();
        let u = if r.is_zero() {
            Q::imaginary_unit()
        } else {
            v.scale(Q::Component::one() / r)
        };
        Self { a: q.real(), r, u }
    }

    /// `re + im·u`
    #[inline]
    fn with(&self, re: Q::Component, im: Q::Component) -> Q {
        Q::from_real(re) + self.u.scale(im)
    }
}

pub(crate) fn exp<Q: Hypercomplex>(q: &Q) -> Q {
    let p = Polar::of(q);
    let ea = p.a.exp();
    let (sin, cos) = p.r.sin_cos();
    p.with(ea * cos, ea * sin)
}

pub(crate) fn ln<Q: Hypercomplex>(q: &Q) -> Result<Q> {
    if q.is_zero() {
        return Err(Error::indeterminate("ln", "logarithm of zero"));
    }
    let p = Polar::of(q);
    let theta = principal_argument(p.r.atan2(p.a));
    Ok(p.with(q.norm().ln(), theta))
}

pub(crate) fn sin<Q: Hypercomplex>(q: &Q) -> Q {
    let p = Polar::of(q);
    let (sa, ca) = p.a.sin_cos();
    p.with(sa * p.r.cosh(), ca * p.r.sinh())
}

pub(crate) fn cos<Q: Hypercomplex>(q: &Q) -> Q {
    let p = Polar::of(q);
    let (sa, ca) = p.a.sin_cos();
    p.with(ca * p.r.cosh(), -(sa * p.r.sinh()))
}

pub(crate) fn sin_and_cos<Q: Hypercomplex>(q: &Q) -> (Q, Q) {
    let p = Polar::of(q);
    let (sa, ca) = p.a.sin_cos();
    let (shr, chr) = (p.r.sinh(), p.r.cosh());
    (p.with(sa * chr, ca * shr), p.with(ca * chr, -(sa * shr)))
}

pub(crate) fn sinh<Q: Hypercomplex>(q: &Q) -> Q {
    let p = Polar::of(q);
    let (sr, cr) = p.r.sin_cos();
    p.with(p.a.sinh() * cr, p.a.cosh() * sr)
}

pub(crate) fn cosh<Q: Hypercomplex>(q: &Q) -> Q {
    let p = Polar::of(q);
    let (sr, cr) = p.r.sin_cos();
    p.with(p.a.cosh() * cr, p.a.sinh() * sr)
}

pub(crate) fn sinh_and_cosh<Q: Hypercomplex>(q: &Q) -> (Q, Q) {
    let p = Polar::of(q);
    let (sr, cr) = p.r.sin_cos();
    let (sha, cha) = (p.a.sinh(), p.a.cosh());
    (p.with(sha * cr, cha * sr), p.with(cha * cr, sha * sr))
}

pub(crate) fn sqrt<Q: Hypercomplex>(q: &Q) -> Q {
    if q.is_zero() {
        return Q::zero();
    }
    let p = Polar::of(q);
    let m = q.norm();
    let half = Q::Component::one_half();
    let zero = Q::Component::zero();
    let re = ((m + p.a) * half).max(zero).sqrt();
    let im = ((m - p.a) * half).max(zero).sqrt();
    p.with(re, im)
}

pub(crate) fn cbrt<Q: Hypercomplex>(q: &Q) -> Q {
    if q.is_zero() {
        return Q::zero();
    }
    let p = Polar::of(q);
    let third = Q::Component::one() / Q::Component::from_f64(3.0);
    let m = q.norm().cbrt();
    let (sin, cos) = (p.r.atan2(p.a) * third).sin_cos();
    p.with(m * cos, m * sin)
}

/// `exp(b · ln a)` on the principal branch
pub(crate) fn pow<Q: Hypercomplex>(a: &Q, b: &Q) -> Result<Q> {
    if a.is_zero() {
        if b.is_zero() {
            return Err(Error::indeterminate("pow", "0^0"));
        }
        if b.real() > Q::Component::zero() {
            return Ok(Q::zero());
        }
        return Err(Error::indeterminate("pow", "zero to a power with non-positive real part"));
    }
    Ok(exp(&(*b * ln(a)?)))
}

/// `-u·ln(u·q + √(1 - q²))`
pub(crate) fn asin<Q: Hypercomplex>(q: &Q) -> Result<Q> {
    let u = Polar::of(q).u;
    let root = sqrt(&(Q::unity() - *q * *q));
    Ok(-(u * ln(&(u * *q + root))?))
}

/// `-u·ln(q + u·√(1 - q²))`
pub(crate) fn acos<Q: Hypercomplex>(q: &Q) -> Result<Q> {
    let u = Polar::of(q).u;
    let root = sqrt(&(Q::unity() - *q * *q));
    Ok(-(u * ln(&(*q + u * root))?))
}

/// `(u/2)·ln((u + q)/(u - q))`
pub(crate) fn atan<Q: Hypercomplex>(q: &Q) -> Result<Q> {
    let u = Polar::of(q).u;
    let denom = u - *q;
    if denom.is_zero() {
        return Err(Error::DivisionByZero { op: "atan" });
    }
    let l = ln(&((u + *q) / denom))?;
    Ok((u * l).scale(Q::Component::one_half()))
}

/// `ln(q + √(q² + 1))`
pub(crate) fn asinh<Q: Hypercomplex>(q: &Q) -> Result<Q> {
    ln(&(*q + sqrt(&(*q * *q + Q::unity()))))
}

/// `ln(q + √(q + 1)·√(q - 1))`
pub(crate) fn acosh<Q: Hypercomplex>(q: &Q) -> Result<Q> {
    let one = Q::unity();
    ln(&(*q + sqrt(&(*q + one)) * sqrt(&(*q - one))))
}

/// `½·ln((1 + q)/(1 - q))`
pub(crate) fn atanh<Q: Hypercomplex>(q: &Q) -> Result<Q> {
    let one = Q::unity();
    let denom = one - *q;
    if denom.is_zero() {
        return Err(Error::DivisionByZero { op: "atanh" });
    }
    Ok(ln(&((one + *q) / denom))?.scale(Q::Component::one_half()))
}

macro_rules! impl_hypercomplex {
    ($ty:ident) => {
        impl<T: Real> Ring for $ty<T> {}
        impl<T: Real> Field for $ty<T> {}
        impl<T: Real> Norm for $ty<T> {}
        impl<T: Real> Tolerance for $ty<T> {}
        impl<T: Real> RealUnreal for $ty<T> {}
        impl<T: Real> Rounding for $ty<T> {}
        impl<T: Real> Random for $ty<T> {}
        impl<T: Real> Infinite for $ty<T> {}
        impl<T: Real> Nan for $ty<T> {}
        impl<T: Real> Hypercomplex for $ty<T> {}

        impl<T: Real> Conjugate for $ty<T> {
            #[inline]
            fn conjugate(&self) -> Self {
                let mut out = *self;
                for c in &mut out.components_mut()[1..] {
                    *c = -*c;
                }
                out
            }
        }

        impl<T: Real> Scale for $ty<T> {
            #[inline]
            fn scale(&self, factor: T) -> Self {
                let mut out = *self;
                for c in out.components_mut() {
                    *c = *c * factor;
                }
                out
            }
        }

        impl<T: Real> Exponential for $ty<T> {
            #[inline]
            fn exp(&self) -> Self {
                exp(self)
            }

            #[inline]
            fn ln(&self) -> Result<Self> {
                ln(self)
            }
        }

        impl<T: Real> Power for $ty<T> {
            #[inline]
            fn pow(&self, exponent: &Self) -> Result<Self> {
                pow(self, exponent)
            }
        }

        impl<T: Real> Roots for $ty<T> {
            #[inline]
            fn sqrt(&self) -> Self {
                sqrt(self)
            }

            #[inline]
            fn cbrt(&self) -> Self {
                cbrt(self)
            }
        }

        impl<T: Real> Trigonometric for $ty<T> {
            #[inline]
            fn sin(&self) -> Self {
                sin(self)
            }

            #[inline]
            fn cos(&self) -> Self {
                cos(self)
            }

            #[inline]
            fn sin_and_cos(&self) -> (Self, Self) {
                sin_and_cos(self)
            }
        }

        impl<T: Real> Hyperbolic for $ty<T> {
            #[inline]
            fn sinh(&self) -> Self {
                sinh(self)
            }

            #[inline]
            fn cosh(&self) -> Self {
                cosh(self)
            }

            #[inline]
            fn sinh_and_cosh(&self) -> (Self, Self) {
                sinh_and_cosh(self)
            }
        }

        impl<T: Real> InverseTrigonometric for $ty<T> {
            #[inline]
            fn asin(&self) -> Result<Self> {
                asin(self)
            }

            #[inline]
            fn acos(&self) -> Result<Self> {
                acos(self)
            }

            #[inline]
            fn atan(&self) -> Result<Self> {
                atan(self)
            }
        }

        impl<T: Real> InverseHyperbolic for $ty<T> {
            #[inline]
            fn asinh(&self) -> Result<Self> {
                asinh(self)
            }

            #[inline]
            fn acosh(&self) -> Result<Self> {
                acosh(self)
            }

            #[inline]
            fn atanh(&self) -> Result<Self> {
                atanh(self)
            }
        }
    };
}

impl_hypercomplex!(Complex);
impl_hypercomplex!(Quaternion);
impl_hypercomplex!(Octonion);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{Complex128, Octonion512, Quaternion256};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close<Q: Tolerance<Component = f64>>(a: Q, b: Q, tol: f64) -> bool {
        a.within(&b, tol)
    }

    #[test]
    fn test_complex_exp_matches_euler() {
        let z = Complex128::new(0.0, PI);
        assert!(close(z.exp(), Complex128::new(-1.0, 0.0), 1e-15));
        let z = Complex128::new(1.0, -0.5);
        let e = 1.0f64.exp();
        assert!(close(z.exp(), Complex128::new(e * 0.5f64.cos(), -e * 0.5f64.sin()), 1e-15));
    }

    #[test]
    fn test_complex_ln_principal_branch() {
        let l = Complex128::new(-1.0, 0.0).ln().unwrap();
        assert!(close(l, Complex128::new(0.0, PI), 1e-15));
        let l = Complex128::new(-1.0, -1e-300).ln().unwrap();
        assert!((l.im + PI).abs() < 1e-12);
        let l = Complex128::new(0.0, -2.0).ln().unwrap();
        assert!(close(l, Complex128::new(2.0f64.ln(), -FRAC_PI_2), 1e-15));
    }

    #[test]
    fn test_ln_of_zero_fails() {
        assert!(matches!(
            Complex128::default().ln(),
            Err(Error::Indeterminate { op: "ln", .. })
        ));
        assert!(Quaternion256::default().ln().is_err());
    }

    #[test]
    fn test_complex_pow() {
        let zero = Complex128::default();
        assert!(matches!(
            zero.pow(&zero),
            Err(Error::Indeterminate { op: "pow", .. })
        ));
        assert_eq!(zero.pow(&Complex128::new(2.0, 5.0)).unwrap(), zero);
        assert!(zero.pow(&Complex128::new(-1.0, 0.0)).is_err());

        // i^i = e^(-π/2)
        let ii = Complex128::i().pow(&Complex128::i()).unwrap();
        assert!(close(ii, Complex128::new((-FRAC_PI_2).exp(), 0.0), 1e-15));
    }

    #[test]
    fn test_sqrt_branches() {
        let s = Complex128::new(-4.0, 0.0).sqrt();
        assert!(close(s, Complex128::new(0.0, 2.0), 1e-15));
        let s = Complex128::new(0.0, -2.0).sqrt();
        assert!(close(s, Complex128::new(1.0, -1.0), 1e-15));
        let q = Quaternion256::new(-3.0, 1.0, 2.0, -0.5);
        let r = q.sqrt();
        assert!(r.r >= 0.0);
        assert!(close(r * r, q, 1e-14));
    }

    #[test]
    fn test_cbrt() {
        let c = Complex128::new(-8.0, 0.0).cbrt();
        assert!(close(c, Complex128::new(1.0, 3.0f64.sqrt()), 1e-14));
        let q = Quaternion256::new(1.0, -2.0, 0.5, 1.0);
        let r = q.cbrt();
        assert!(close(r * r * r, q, 1e-13));
    }

    #[test]
    fn test_quaternion_exp_ln_round_trip() {
        let q = Quaternion256::new(0.3, -1.2, 0.7, 2.0);
        let back = q.ln().unwrap().exp();
        assert!(close(back, q, 1e-13));
    }

    #[test]
    fn test_octonion_exp_of_pure_imaginary() {
        // exp(π·u) = -1 for any unit imaginary u
        let v = Octonion512::new(0.0, 1.0, -1.0, 1.0, -1.0, 1.0, 1.0, 1.0);
        let u = v.scale(1.0 / v.norm());
        assert!(close(u.scale(PI).exp(), Octonion512::from(-1.0), 1e-14));
    }

    #[test]
    fn test_trig_identities() {
        let z = Complex128::new(0.7, -1.3);
        let (s, c) = z.sin_and_cos();
        assert!(close(s * s + c * c, Complex128::new(1.0, 0.0), 1e-13));
        let (sh, ch) = z.sinh_and_cosh();
        assert!(close(ch * ch - sh * sh, Complex128::new(1.0, 0.0), 1e-13));
        assert!(close(z.tan(), s / c, 1e-15));

        let q = Quaternion256::new(0.2, 0.4, -0.1, 0.3);
        let (s, c) = q.sin_and_cos();
        assert!(close(s * s + c * c, Quaternion256::unity(), 1e-13));
    }

    #[test]
    fn test_inverse_functions_round_trip() {
        let z = Complex128::new(0.4, 0.3);
        assert!(close(z.asin().unwrap().sin(), z, 1e-14));
        assert!(close(z.acos().unwrap().cos(), z, 1e-14));
        assert!(close(z.atan().unwrap().tan(), z, 1e-14));
        assert!(close(z.asinh().unwrap().sinh(), z, 1e-14));
        assert!(close(z.acosh().unwrap().cosh(), z, 1e-14));
        assert!(close(z.atanh().unwrap().tanh(), z, 1e-14));

        let w = Complex128::new(0.4, -0.3);
        assert!(close(w.asin().unwrap().sin(), w, 1e-14));

        let q = Quaternion256::new(0.3, 0.1, -0.2, 0.25);
        assert!(close(q.asin().unwrap().sin(), q, 1e-13));
        assert!(close(q.atanh().unwrap().tanh(), q, 1e-13));
    }

    #[test]
    fn test_real_axis_agrees_with_reals() {
        let z = Complex128::new(0.5, 0.0);
        assert!(close(z.asin().unwrap(), Complex128::new(0.5f64.asin(), 0.0), 1e-14));
        assert!(close(z.atan().unwrap(), Complex128::new(0.5f64.atan(), 0.0), 1e-14));
    }

    #[test]
    fn test_poles_fail() {
        assert!(matches!(
            Complex128::i().atan(),
            Err(Error::DivisionByZero { op: "atan" })
        ));
        assert!(Complex128::new(1.0, 0.0).atanh().is_err());
    }

    #[test]
    fn test_conjugate_and_scale() {
        let q = Quaternion256::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion256::new(1.0, -2.0, -3.0, -4.0));
        assert_eq!(q.conjugate().conjugate(), q);
        assert_eq!(q.scale(2.0), Quaternion256::new(2.0, 4.0, 6.0, 8.0));
        let o = Octonion512::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        assert_eq!(o.conjugate(), o.conj());
    }
}
