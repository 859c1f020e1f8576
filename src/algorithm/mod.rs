//! Generic algorithm library
//!
//! Numeric formulas written once against the capability traits in
//! [`crate::ops`] and reused by every member type and by the aggregate
//! containers:
//!
//! - [`power_any`] - integer power by repeated squaring over any [`UnitalAlgebra`]
//! - [`scale_helper`] - repeated scaling by a fixed factor
//! - [`sinc`], [`sinch`] - `sin x / x` and `sinh x / x`, exact at zero
//! - [`principal_argument`] - angle normalization into `(-π, π]`
//! - [`scaled_norm`] - overflow-avoiding Euclidean norm
//! - [`round_component`] - rounding to a multiple of a step
//! - [`series`] - truncated Taylor estimates for `exp`, `ln`, `sin`, `cos`, `sinh`, `cosh`
//! - [`linalg`] - Gauss-Jordan inverse and pivoted determinant on flat row-major data

pub mod linalg;
pub mod series;

pub use series::{
    DEFAULT_MAX_TERMS, SeriesConfig, taylor_cos, taylor_cosh, taylor_exp, taylor_ln, taylor_sin,
    taylor_sin_and_cos, taylor_sinh, taylor_sinh_and_cosh,
};

use crate::dtype::Real;
use crate::ops::{Hyperbolic, Norm, Ring, RoundingMode, Scale, Trigonometric};

// ============================================================================
// Unital algebras
// ============================================================================

/// The operations shared by scalar members and square matrices that the
/// power and series algorithms need
///
/// Every member with [`Ring`], [`Scale`] and [`Norm`] gets this through a
/// blanket impl; [`Matrix`](crate::tensor::Matrix) implements it for square
/// matrices.
pub trait UnitalAlgebra: Clone {
    /// Real type used for scaling and magnitudes
    type Real: Real;

    /// Multiplicative identity of the same shape as `self`
    fn unity_like(&self) -> Self;

    /// `self + rhs`
    fn add_ref(&self, rhs: &Self) -> Self;

    /// `self · rhs`
    fn mul_ref(&self, rhs: &Self) -> Self;

    /// `factor · self`
    fn scale_real(&self, factor: Self::Real) -> Self;

    /// Norm used for convergence tests
    fn magnitude(&self) -> Self::Real;
}

impl<T: Ring + Scale + Norm> UnitalAlgebra for T {
    type Real = T::Component;

    #[inline]
    fn unity_like(&self) -> Self {
        T::unity()
    }

    #[inline]
    fn add_ref(&self, rhs: &Self) -> Self {
        *self + *rhs
    }

    #[inline]
    fn mul_ref(&self, rhs: &Self) -> Self {
        *self * *rhs
    }

    #[inline]
    fn scale_real(&self, factor: T::Component) -> Self {
        self.scale(factor)
    }

    #[inline]
    fn magnitude(&self) -> T::Component {
        self.norm()
    }
}

// ============================================================================
// Powers and scaling
// ============================================================================

/// `base^n` by binary exponentiation: `O(log n)` multiplications
///
/// `power_any(x, 0)` is the unity of `x`'s shape. Only powers of a single
/// value are formed, so power-associative algebras such as the octonions are
/// handled correctly.
pub fn power_any<A: UnitalAlgebra>(base: &A, n: u64) -> A {
    let mut result = base.unity_like();
    let mut square = base.clone();
    let mut exp = n;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.mul_ref(&square);
        }
        exp >>= 1;
        if exp > 0 {
            square = square.mul_ref(&square);
        }
    }

    result
}

/// Multiply `value` by `factor`, `count` times
pub fn scale_helper<T: Scale>(value: &T, factor: T::Component, count: u32) -> T {
    let mut out = *value;
    for _ in 0..count {
        out = out.scale(factor);
    }
    out
}

// ============================================================================
// Sinc family
// ============================================================================

/// Below this norm `sinc`/`sinch` switch to their Taylor polynomial
#[inline]
fn sinc_threshold<R: Real>() -> R {
    R::epsilon().sqrt().sqrt()
}

/// `sin(x) / x`, with `sinc(0) = 1`
pub fn sinc<T: Trigonometric + Scale + Norm>(x: &T) -> T {
    if x.norm() < sinc_threshold::<T::Component>() {
        // 1 - x²/6 + x⁴/120
        let x2 = *x * *x;
        let c6 = T::Component::from_f64(1.0 / 6.0);
        let c120 = T::Component::from_f64(1.0 / 120.0);
        return T::unity() - x2.scale(c6) + (x2 * x2).scale(c120);
    }
    x.sin() / *x
}

/// `sinh(x) / x`, with `sinch(0) = 1`
pub fn sinch<T: Hyperbolic + Scale + Norm>(x: &T) -> T {
    if x.norm() < sinc_threshold::<T::Component>() {
        // 1 + x²/6 + x⁴/120
        let x2 = *x * *x;
        let c6 = T::Component::from_f64(1.0 / 6.0);
        let c120 = T::Component::from_f64(1.0 / 120.0);
        return T::unity() + x2.scale(c6) + (x2 * x2).scale(c120);
    }
    x.sinh() / *x
}

// ============================================================================
// Component helpers
// ============================================================================

/// Normalize an angle into `(-π, π]`
///
/// Adds or subtracts `2π` until the angle is in range; NaN and infinities are
/// returned unchanged.
pub fn principal_argument<R: Real>(theta: R) -> R {
    if !theta.is_finite() {
        return theta;
    }
    let pi = R::PI();
    let two_pi = pi + pi;

    // Fold far-out angles first so the loop below runs at most once or twice
    let mut angle = if theta.abs() > two_pi + two_pi {
        theta % two_pi
    } else {
        theta
    };
    while angle <= -pi {
        angle = angle + two_pi;
    }
    while angle > pi {
        angle = angle - two_pi;
    }
    angle
}

/// Euclidean norm `sqrt(Σ cᵢ²)` that cannot overflow for finite input
///
/// Every component is divided by `max |cᵢ|` before squaring and the result is
/// multiplied back by that maximum. Any NaN component gives NaN; otherwise any
/// infinite component gives `+∞`.
pub fn scaled_norm<R: Real>(components: &[R]) -> R {
    if components.iter().any(|c| c.is_nan()) {
        return R::nan();
    }
    let max = components
        .iter()
        .fold(R::zero(), |acc, &c| acc.max(c.abs()));
    if max.is_zero() || max.is_infinite() {
        return max;
    }
    let sum = components.iter().fold(R::zero(), |acc, &c| {
        let s = c / max;
        acc + s * s
    });
    max * sum.sqrt()
}

/// Round `x` to a multiple of `delta` in the given mode
///
/// A zero or NaN `delta` returns `x` unchanged; the sign of `delta` is ignored.
pub fn round_component<R: Real>(x: R, mode: RoundingMode, delta: R) -> R {
    let step = delta.abs();
    if step.is_zero() || step.is_nan() || !x.is_finite() {
        return x;
    }
    let q = x / step;
    let half = R::one_half();
    let rounded = match mode {
        RoundingMode::Ceiling => q.ceil(),
        RoundingMode::Floor => q.floor(),
        RoundingMode::TowardZero => q.trunc(),
        RoundingMode::AwayFromZero => {
            if q.is_sign_negative() {
                q.floor()
            } else {
                q.ceil()
            }
        }
        RoundingMode::HalfAwayFromZero => q.round(),
        RoundingMode::HalfEven => {
            let floor = q.floor();
            let diff = q - floor;
            if diff < half {
                floor
            } else if diff > half {
                floor + R::one()
            } else if (floor * half).fract().is_zero() {
                floor
            } else {
                floor + R::one()
            }
        }
    };
    rounded * step
}
