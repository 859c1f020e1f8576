//! Truncated Taylor-series estimates
//!
//! These are approximations, not closed forms. Each series is summed until
//! the newest term is negligible next to the largest term seen so far (see
//! [`SeriesConfig`]) or the term cap is reached, whichever comes first.
//!
//! # Convergence
//!
//! - `exp`, `sin`, `cos`, `sinh`, `cosh` converge for every input, but the
//!   term cap bounds the accuracy: inputs with a norm well above the cap lose
//!   precision rather than fail.
//! - `ln(1 + x)` converges only for `norm(x) < 1` and slowly near the
//!   boundary. Inputs outside the radius are summed anyway and logged with
//!   `tracing::warn!`.
//!
//! The functions are generic over [`UnitalAlgebra`], so the same code computes
//! scalar estimates and square-matrix functions.

use super::UnitalAlgebra;
use crate::dtype::Real;
use num_traits::{Float, One, Zero};
use tracing::{trace, warn};

/// Default cap on the number of terms in one series
pub const DEFAULT_MAX_TERMS: usize = 35;

/// Stopping rule for a Taylor sum
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeriesConfig<R> {
    /// Hard cap on the number of terms summed (per series)
    pub max_terms: usize,
    /// Stop once `norm(term) <= tolerance · max(1, largest norm(term) so far)`
    pub tolerance: R,
}

impl<R: Real> Default for SeriesConfig<R> {
    fn default() -> Self {
        Self {
            max_terms: DEFAULT_MAX_TERMS,
            tolerance: R::epsilon(),
        }
    }
}

impl<R: Real> SeriesConfig<R> {
    /// Fixed term count with no early stop
    pub fn fixed(terms: usize) -> Self {
        Self {
            max_terms: terms,
            tolerance: R::zero(),
        }
    }

    #[inline]
    fn negligible(&self, term: R, peak: R) -> bool {
        term <= self.tolerance * peak.max(R::one())
    }
}

/// Walk `xⁿ/n!` for `n = 0..=max_power`, handing each term to `sink`
///
/// Stops early once a term is negligible; returns the number of terms visited.
fn factorial_terms<A, F>(x: &A, config: &SeriesConfig<A::Real>, max_power: usize, mut sink: F) -> usize
where
    A: UnitalAlgebra,
    F: FnMut(usize, &A),
{
    let mut term = x.unity_like();
    let mut peak = term.magnitude();
    sink(0, &term);

    for n in 1..=max_power {
        let inv_n = A::Real::one() / A::Real::from_f64(n as f64);
        term = term.mul_ref(x).scale_real(inv_n);
        sink(n, &term);

        let mag = term.magnitude();
        if mag.is_nan() {
            return n + 1;
        }
        peak = peak.max(mag);
        if n >= 2 && config.negligible(mag, peak) {
            return n + 1;
        }
    }
    max_power + 1
}

/// `Σ xⁿ/n!`
pub fn taylor_exp<A: UnitalAlgebra>(x: &A, config: &SeriesConfig<A::Real>) -> A {
    let mut sum: Option<A> = None;
    let terms = factorial_terms(x, config, config.max_terms.saturating_sub(1), |_, t| {
        sum = Some(match sum.take() {
            Some(s) => s.add_ref(t),
            None => t.clone(),
        });
    });
    trace!(terms, "taylor_exp");
    sum.unwrap_or_else(|| x.unity_like())
}

/// Sums the odd and even powers of `xⁿ/n!` separately
///
/// With `alternating` set, the sign of the k-th term of each half alternates,
/// giving `(sin, cos)`; otherwise `(sinh, cosh)`.
fn split_series<A: UnitalAlgebra>(
    x: &A,
    config: &SeriesConfig<A::Real>,
    alternating: bool,
) -> (A, A) {
    let minus_one = -A::Real::one();
    let mut odd: Option<A> = None;
    let mut even: Option<A> = None;

    let max_power = (2 * config.max_terms).saturating_sub(1);
    let terms = factorial_terms(x, config, max_power, |n, t| {
        let signed = if alternating && (n / 2) % 2 == 1 {
            t.scale_real(minus_one)
        } else {
            t.clone()
        };
        let slot = if n % 2 == 1 { &mut odd } else { &mut even };
        *slot = Some(match slot.take() {
            Some(s) => s.add_ref(&signed),
            None => signed,
        });
    });
    trace!(terms, alternating, "split_series");

    let zero = x.scale_real(A::Real::zero());
    (odd.unwrap_or_else(|| zero.clone()), even.unwrap_or(zero))
}

/// `Σ (-1)ᵏ x²ᵏ⁺¹/(2k+1)!`
pub fn taylor_sin<A: UnitalAlgebra>(x: &A, config: &SeriesConfig<A::Real>) -> A {
    split_series(x, config, true).0
}

/// `Σ (-1)ᵏ x²ᵏ/(2k)!`
pub fn taylor_cos<A: UnitalAlgebra>(x: &A, config: &SeriesConfig<A::Real>) -> A {
    split_series(x, config, true).1
}

/// Sine and cosine from one pass over the powers of `x`
pub fn taylor_sin_and_cos<A: UnitalAlgebra>(x: &A, config: &SeriesConfig<A::Real>) -> (A, A) {
    split_series(x, config, true)
}

/// `Σ x²ᵏ⁺¹/(2k+1)!`
pub fn taylor_sinh<A: UnitalAlgebra>(x: &A, config: &SeriesConfig<A::Real>) -> A {
    split_series(x, config, false).0
}

/// `Σ x²ᵏ/(2k)!`
pub fn taylor_cosh<A: UnitalAlgebra>(x: &A, config: &SeriesConfig<A::Real>) -> A {
    split_series(x, config, false).1
}

/// Hyperbolic sine and cosine from one pass over the powers of `x`
pub fn taylor_sinh_and_cosh<A: UnitalAlgebra>(x: &A, config: &SeriesConfig<A::Real>) -> (A, A) {
    split_series(x, config, false)
}

/// `ln(1 + x) = Σ (-1)ᵏ⁺¹ xᵏ/k`
///
/// Diverges for `norm(x) >= 1`; such inputs are summed anyway and a warning is
/// logged.
pub fn taylor_ln<A: UnitalAlgebra>(x: &A, config: &SeriesConfig<A::Real>) -> A {
    let radius = x.magnitude();
    if radius >= A::Real::one() {
        warn!(
            norm = radius.as_f64(),
            "ln(1 + x) series evaluated outside its radius of convergence"
        );
    }

    let mut power = x.clone();
    let mut sum = x.clone();
    let mut peak = radius;
    let mut terms = 1;

    for k in 2..=config.max_terms {
        power = power.mul_ref(x);
        let mut coeff = A::Real::one() / A::Real::from_f64(k as f64);
        if k % 2 == 0 {
            coeff = -coeff;
        }
        let term = power.scale_real(coeff);
        sum = sum.add_ref(&term);
        terms = k;

        let mag = term.magnitude();
        if mag.is_nan() {
            break;
        }
        peak = peak.max(mag);
        if config.negligible(mag, peak) {
            break;
        }
    }
    trace!(terms, "taylor_ln");

    sum
}
