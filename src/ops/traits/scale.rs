//! Scaling capabilities.

use crate::algorithm::scale_helper;
use crate::dtype::{Element, Real};
use num_rational::Ratio;
use num_traits::One;

/// Multiplication by real factors
///
/// All variants agree with [`Scale::scale`]; the power-of-two forms repeat a
/// doubling or halving `count` times instead of performing a general multiply.
pub trait Scale: Element {
    /// Multiply every component by a real of the member's own precision
    fn scale(&self, factor: Self::Component) -> Self;

    /// Multiply by an f64 factor, rounded to the component precision
    #[inline]
    fn scale_by_f64(&self, factor: f64) -> Self {
        self.scale(Self::Component::from_f64(factor))
    }

    /// Multiply by `numer / denom`
    #[inline]
    fn scale_by_rational(&self, factor: Ratio<i64>) -> Self {
        let numer = Self::Component::from_f64(*factor.numer() as f64);
        let denom = Self::Component::from_f64(*factor.denom() as f64);
        self.scale(numer / denom)
    }

    /// Multiply by `2^count`
    #[inline]
    fn scale_by_two(&self, count: u32) -> Self {
        scale_helper(self, Self::Component::two(), count)
    }

    /// Multiply by `2^-count`
    #[inline]
    fn scale_by_one_half(&self, count: u32) -> Self {
        scale_helper(self, Self::Component::one_half(), count)
    }

    /// Multiply by the reciprocal of `divisor`
    #[inline]
    fn scale_by_inverse(&self, divisor: Self::Component) -> Self {
        self.scale(Self::Component::one() / divisor)
    }
}
