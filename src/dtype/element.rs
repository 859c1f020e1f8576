//! Element trait: the member contract shared by every scalar type

use super::{DType, Real};
use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Trait for types that can be members of an aggregate container
///
/// A member is a fixed-size record of [`Element::COMPONENTS`] values of one
/// [`Real`] component type. The component count never changes and a member is
/// always fully initialized: [`Default`] is the zero value and `FromStr` reads
/// the bracket text format.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - members are small stack values
/// - `Pod + Zeroable` - a member is exactly its components, so containers can be
///   viewed as flat component arrays (bytemuck)
/// - `PartialEq` - exact componentwise equality; approximate equality lives in
///   [`Tolerance`](crate::ops::Tolerance)
pub trait Element:
    Copy + Send + Sync + Pod + Zeroable + Default + PartialEq + fmt::Debug + fmt::Display + 'static
{
    /// Component number type
    type Component: Real;

    /// Number of components in one member
    const COMPONENTS: usize;

    /// Runtime descriptor of this member type
    const DTYPE: DType;

    /// View the components in storage order
    #[inline]
    fn components(&self) -> &[Self::Component] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// Mutable view of the components in storage order
    #[inline]
    fn components_mut(&mut self) -> &mut [Self::Component] {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    /// Read one component
    fn component(&self, index: usize) -> Result<Self::Component> {
        self.components()
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index,
                size: Self::COMPONENTS,
            })
    }

    /// Overwrite one component
    fn set_component(&mut self, index: usize, value: Self::Component) -> Result<()> {
        let slot = self
            .components_mut()
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds {
                index,
                size: Self::COMPONENTS,
            })?;
        *slot = value;
        Ok(())
    }

    /// Build a member from exactly [`Element::COMPONENTS`] values
    fn from_components(values: &[Self::Component]) -> Result<Self> {
        if values.len() != Self::COMPONENTS {
            return Err(Error::ComponentCount {
                expected: Self::COMPONENTS,
                got: values.len(),
            });
        }
        let mut out = Self::zeroed();
        out.components_mut().copy_from_slice(values);
        Ok(out)
    }

    /// Build a member from f64 values, rounding each to the component precision
    fn from_f64_components(values: &[f64]) -> Result<Self> {
        if values.len() != Self::COMPONENTS {
            return Err(Error::ComponentCount {
                expected: Self::COMPONENTS,
                got: values.len(),
            });
        }
        let mut out = Self::zeroed();
        for (slot, &v) in out.components_mut().iter_mut().zip(values) {
            *slot = Self::Component::from_f64(v);
        }
        Ok(out)
    }

    /// Widen every component to f64
    fn to_f64_components(&self) -> Vec<f64> {
        self.components().iter().map(|c| c.as_f64()).collect()
    }
}

macro_rules! impl_real_element {
    ($t:ty) => {
        impl Element for $t {
            type Component = $t;
            const COMPONENTS: usize = 1;
            const DTYPE: DType = DType::Real(<$t as Real>::PRECISION);
        }
    };
}

impl_real_element!(f32);
impl_real_element!(f64);
#[cfg(feature = "f16")]
impl_real_element!(half::f16);
