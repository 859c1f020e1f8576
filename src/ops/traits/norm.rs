//! Norm, conjugation and tolerance capabilities.

use crate::algorithm::scaled_norm;
use crate::dtype::Element;
use num_traits::Zero;
use std::ops::Sub;

/// Euclidean norm of a member's components
pub trait Norm: Element {
    /// Modulus `sqrt(Σ cᵢ²)`, computed with the overflow-avoiding scaled sum
    /// (see [`scaled_norm`])
    #[inline]
    fn norm(&self) -> Self::Component {
        scaled_norm(self.components())
    }

    /// `Σ cᵢ²` without the square root
    #[inline]
    fn norm_squared(&self) -> Self::Component {
        self.components()
            .iter()
            .fold(Self::Component::zero(), |acc, &c| acc + c * c)
    }
}

/// Conjugation: negates every imaginary component
pub trait Conjugate: Element {
    /// Conjugate of this member; the identity on reals
    fn conjugate(&self) -> Self;
}

/// Approximate equality
///
/// Exact equality is `PartialEq` and compares components; `within` is what
/// approximate assertions use.
pub trait Tolerance: Norm + Sub<Output = Self> {
    /// True iff `norm(self - other) <= tolerance`
    ///
    /// Always false when either side is NaN.
    #[inline]
    fn within(&self, other: &Self, tolerance: Self::Component) -> bool {
        (*self - *other).norm() <= tolerance
    }
}
