//! Componentwise capabilities: real/unreal split, rounding, random fill and
//! the IEEE state predicates.
//!
//! All of these are defined on the component view of [`Element`], so member
//! types opt in with an empty `impl`.

use crate::algorithm::round_component;
use crate::dtype::{Element, Real};
use num_traits::{Float, Zero};
use rand::Rng;

/// Split into the real component and the imaginary remainder
pub trait RealUnreal: Element {
    /// Real part
    #[inline]
    fn real(&self) -> Self::Component {
        self.components()[0]
    }

    /// Copy with the real part cleared
    #[inline]
    fn unreal(&self) -> Self {
        let mut out = *self;
        out.components_mut()[0] = Self::Component::zero();
        out
    }

    /// Member whose only nonzero component is the real part
    #[inline]
    fn from_real(value: Self::Component) -> Self {
        let mut out = Self::zeroed();
        out.components_mut()[0] = value;
        out
    }
}

/// Rounding direction used by [`Rounding::round`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Toward +∞
    Ceiling,
    /// Toward -∞
    Floor,
    /// Toward zero
    TowardZero,
    /// Away from zero
    AwayFromZero,
    /// To nearest, ties to the even multiple
    #[default]
    HalfEven,
    /// To nearest, ties away from zero
    HalfAwayFromZero,
}

/// Componentwise rounding to a multiple of `delta`
pub trait Rounding: Element {
    /// Round every component to the nearest multiple of `delta` in `mode`
    #[inline]
    fn round(&self, mode: RoundingMode, delta: Self::Component) -> Self {
        let mut out = *self;
        for c in out.components_mut() {
            *c = round_component(*c, mode, delta);
        }
        out
    }
}

/// Uniform random members
pub trait Random: Element {
    /// Every component drawn uniformly from `[0, 1)`
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut out = Self::zeroed();
        for c in out.components_mut() {
            *c = Self::Component::random_unit(rng);
        }
        out
    }
}

/// IEEE infinity state
pub trait Infinite: Element {
    /// True if no component is NaN and at least one is infinite
    #[inline]
    fn is_infinite(&self) -> bool {
        let c = self.components();
        !c.iter().any(|x| x.is_nan()) && c.iter().any(|x| x.is_infinite())
    }

    /// Real part `+∞`, imaginary parts zero
    #[inline]
    fn infinite() -> Self {
        let mut out = Self::zeroed();
        out.components_mut()[0] = Self::Component::infinity();
        out
    }
}

/// IEEE not-a-number state
pub trait Nan: Element {
    /// True if any component is NaN
    #[inline]
    fn is_nan(&self) -> bool {
        self.components().iter().any(|x| x.is_nan())
    }

    /// Every component NaN
    #[inline]
    fn nan() -> Self {
        let mut out = Self::zeroed();
        out.components_mut().fill(Self::Component::nan());
        out
    }
}
