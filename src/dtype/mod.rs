//! Member types and their runtime descriptors
//!
//! Every algebraic value in numalg is a *member*: a fixed number of components
//! of one [`Real`] component type. Reals have one component, [`Complex`] two,
//! [`Quaternion`] four and [`Octonion`] eight. The [`Element`] trait exposes
//! the components generically so aggregate containers and the text format can
//! treat every member the same way.
//!
//! # Naming
//!
//! Precision aliases are named by total width in bits, the way `Complex64`
//! means "two f32 components":
//!
//! | Member | f16 | f32 | f64 |
//! |--------|-----|-----|-----|
//! | complex | `Complex32` | `Complex64` | `Complex128` |
//! | quaternion | `Quaternion64` | `Quaternion128` | `Quaternion256` |
//! | octonion | `Octonion128` | `Octonion256` | `Octonion512` |

pub mod complex;
mod element;
pub mod octonion;
pub mod quaternion;
mod real;

pub use complex::Complex;
pub use element::Element;
pub use octonion::Octonion;
pub use quaternion::Quaternion;
pub use real::Real;

#[cfg(feature = "f16")]
pub use half::f16;

use std::fmt;

/// Complex number with f16 components
#[cfg(feature = "f16")]
pub type Complex32 = Complex<half::f16>;
/// Complex number with f32 components
pub type Complex64 = Complex<f32>;
/// Complex number with f64 components
pub type Complex128 = Complex<f64>;

/// Quaternion with f16 components
#[cfg(feature = "f16")]
pub type Quaternion64 = Quaternion<half::f16>;
/// Quaternion with f32 components
pub type Quaternion128 = Quaternion<f32>;
/// Quaternion with f64 components
pub type Quaternion256 = Quaternion<f64>;

/// Octonion with f16 components
#[cfg(feature = "f16")]
pub type Octonion128 = Octonion<half::f16>;
/// Octonion with f32 components
pub type Octonion256 = Octonion<f32>;
/// Octonion with f64 components
pub type Octonion512 = Octonion<f64>;

// ============================================================================
// Precision
// ============================================================================

/// Width of a member's component type
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Precision {
    /// IEEE binary16
    F16,
    /// IEEE binary32
    F32,
    /// IEEE binary64
    F64,
}

impl Precision {
    /// Size of one component in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F16 => 2,
            Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    /// Size of one component in bits
    #[inline]
    pub const fn bits(self) -> usize {
        self.size_in_bytes() * 8
    }
}

// ============================================================================
// DType
// ============================================================================

/// Runtime description of a member type: its algebra and component width
///
/// Recorded as the `dtype` field of the container algorithms' tracing spans;
/// generic code never branches on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// Real number (1 component)
    Real(Precision),
    /// Complex number (2 components)
    Complex(Precision),
    /// Quaternion (4 components)
    Quaternion(Precision),
    /// Octonion (8 components)
    Octonion(Precision),
}

impl DType {
    /// Number of components in one member
    #[inline]
    pub const fn component_count(self) -> usize {
        match self {
            Self::Real(_) => 1,
            Self::Complex(_) => 2,
            Self::Quaternion(_) => 4,
            Self::Octonion(_) => 8,
        }
    }

    /// Component precision
    #[inline]
    pub const fn precision(self) -> Precision {
        match self {
            Self::Real(p) | Self::Complex(p) | Self::Quaternion(p) | Self::Octonion(p) => p,
        }
    }

    /// Size of one member in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        self.component_count() * self.precision().size_in_bytes()
    }

    /// Whether the member has imaginary components
    #[inline]
    pub const fn is_hypercomplex(self) -> bool {
        !matches!(self, Self::Real(_))
    }

    /// Whether multiplication of two members commutes
    #[inline]
    pub const fn is_commutative(self) -> bool {
        matches!(self, Self::Real(_) | Self::Complex(_))
    }

    /// Short name, e.g. `complex128`
    pub fn name(self) -> String {
        let bits = self.component_count() * self.precision().bits();
        match self {
            Self::Real(_) => format!("f{bits}"),
            Self::Complex(_) => format!("complex{bits}"),
            Self::Quaternion(_) => format!("quaternion{bits}"),
            Self::Octonion(_) => format!("octonion{bits}"),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
