//! Capabilities of the real component types
//!
//! Reals delegate every function to [`num_traits::Float`] and follow IEEE-754:
//! `ln(-1)` is NaN, `1/0` is `+∞` and `asin(2)` is NaN. The one exception is
//! `0^0`, which fails for reals exactly as it does for hypercomplex members.

use crate::error::{Error, Result};
use crate::ops::traits::{
    Conjugate, Exponential, Field, Hyperbolic, Infinite, InverseHyperbolic, InverseTrigonometric,
    Nan, Norm, Power, Random, RealUnreal, Ring, Roots, Rounding, Scale, Tolerance, Trigonometric,
};
use num_traits::Float;

macro_rules! impl_real_capabilities {
    ($t:ty) => {
        impl Ring for $t {}
        impl Field for $t {}
        impl Tolerance for $t {}
        impl RealUnreal for $t {}
        impl Rounding for $t {}
        impl Random for $t {}
        impl Infinite for $t {}
        impl Nan for $t {}

        impl Conjugate for $t {
            #[inline]
            fn conjugate(&self) -> Self {
                *self
            }
        }

        impl Norm for $t {
            #[inline]
            fn norm(&self) -> Self {
                <$t as Float>::abs(*self)
            }

            #[inline]
            fn norm_squared(&self) -> Self {
                *self * *self
            }
        }

        impl Scale for $t {
            #[inline]
            fn scale(&self, factor: Self) -> Self {
                *self * factor
            }
        }

        impl Exponential for $t {
            #[inline]
            fn exp(&self) -> Self {
                <$t as Float>::exp(*self)
            }

            #[inline]
            fn exp_m1(&self) -> Self {
                <$t as Float>::exp_m1(*self)
            }

            #[inline]
            fn ln(&self) -> Result<Self> {
                Ok(<$t as Float>::ln(*self))
            }

            #[inline]
            fn ln_1p(&self) -> Result<Self> {
                Ok(<$t as Float>::ln_1p(*self))
            }
        }

        impl Power for $t {
            fn pow(&self, exponent: &Self) -> Result<Self> {
                let zero = <$t as num_traits::Zero>::zero();
                if *self == zero && *exponent == zero {
                    return Err(Error::indeterminate("pow", "0^0"));
                }
                Ok(<$t as Float>::powf(*self, *exponent))
            }
        }

        impl Roots for $t {
            #[inline]
            fn sqrt(&self) -> Self {
                <$t as Float>::sqrt(*self)
            }

            #[inline]
            fn cbrt(&self) -> Self {
                <$t as Float>::cbrt(*self)
            }
        }

        impl Trigonometric for $t {
            #[inline]
            fn sin(&self) -> Self {
                <$t as Float>::sin(*self)
            }

            #[inline]
            fn cos(&self) -> Self {
                <$t as Float>::cos(*self)
            }

            #[inline]
            fn sin_and_cos(&self) -> (Self, Self) {
                <$t as Float>::sin_cos(*self)
            }

            #[inline]
            fn tan(&self) -> Self {
                <$t as Float>::tan(*self)
            }
        }

        impl InverseTrigonometric for $t {
            #[inline]
            fn asin(&self) -> Result<Self> {
                Ok(<$t as Float>::asin(*self))
            }

            #[inline]
            fn acos(&self) -> Result<Self> {
                Ok(<$t as Float>::acos(*self))
            }

            #[inline]
            fn atan(&self) -> Result<Self> {
                Ok(<$t as Float>::atan(*self))
            }
        }

        impl Hyperbolic for $t {
            #[inline]
            fn sinh(&self) -> Self {
                <$t as Float>::sinh(*self)
            }

            #[inline]
            fn cosh(&self) -> Self {
                <$t as Float>::cosh(*self)
            }

            #[inline]
            fn tanh(&self) -> Self {
                <$t as Float>::tanh(*self)
            }
        }

        impl InverseHyperbolic for $t {
            #[inline]
            fn asinh(&self) -> Result<Self> {
                Ok(<$t as Float>::asinh(*self))
            }

            #[inline]
            fn acosh(&self) -> Result<Self> {
                Ok(<$t as Float>::acosh(*self))
            }

            #[inline]
            fn atanh(&self) -> Result<Self> {
                Ok(<$t as Float>::atanh(*self))
            }
        }
    };
}

impl_real_capabilities!(f32);
impl_real_capabilities!(f64);
#[cfg(feature = "f16")]
impl_real_capabilities!(half::f16);
