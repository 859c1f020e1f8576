//! RModule: a finite-dimensional vector over any member type

use super::elementwise::impl_container_ops;
use super::{ArrayStorage, Layout, Matrix, Storage};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::{
    Conjugate, Infinite, Nan, Norm, Random, Ring, Rounding, RoundingMode, Scale, Tolerance,
};
use std::marker::PhantomData;

/// Vector of `len` members (a module over the member ring)
///
/// Products use the member operations only, in the operand order written in
/// each formula, so they stay correct for non-commutative members.
///
/// # Example
///
/// ```
/// use numalg::prelude::*;
///
/// let a = RModule::<f64>::from_slice(&[1.0, 0.0, 0.0]);
/// let b = RModule::<f64>::from_slice(&[0.0, 1.0, 0.0]);
/// assert_eq!(a.cross(&b).unwrap().to_vec(), vec![0.0, 0.0, 1.0]);
/// ```
#[derive(Clone, Debug)]
pub struct RModule<T: Element, S: Storage<T> = ArrayStorage<T>> {
    layout: Layout,
    storage: S,
    _marker: PhantomData<T>,
}

impl_container_ops!(RModule);

impl<T: Element, S: Storage<T>> RModule<T, S> {
    /// Vector of `len` zero members
    pub fn new(len: usize) -> Self {
        Self::from_parts(Layout::contiguous(&[len]), S::allocate(len))
    }

    /// Vector holding a copy of `data`
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_parts(Layout::contiguous(&[data.len()]), S::from_vec(data.to_vec()))
    }

    /// Vector from raw components, `T::COMPONENTS` per member
    pub fn from_components(components: &[T::Component]) -> Result<Self> {
        let data = members_from_components(components)?;
        Ok(Self::from_slice(&data))
    }

    /// Vector from a literal such as `[{1,2},{3,4}]`
    pub fn from_repr(input: &str) -> Result<Self> {
        let (shape, data) = crate::repr::parse_members::<T>(input)?;
        if shape.len() != 1 {
            return Err(Error::parse(input, "expected a one-level list"));
        }
        Ok(Self::from_slice(&data))
    }

    /// Number of members
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.elem_count()
    }

    /// Whether the vector has no members
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read member `i`
    pub fn get(&self, i: usize) -> Result<T> {
        self.storage.get(i)
    }

    /// Overwrite member `i`
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        self.storage.set(i, value)
    }

    /// Resize to `len` members
    ///
    /// A different length reallocates and zeroes every member; the same length
    /// keeps the contents.
    pub fn alloc(&mut self, len: usize) {
        if len != self.len() {
            self.layout = Layout::contiguous(&[len]);
            self.storage = S::allocate(len);
        }
    }

    fn check_len(&self, expected: usize) -> Result<()> {
        if self.len() != expected {
            return Err(Error::shape_mismatch(&[expected], &[self.len()]));
        }
        Ok(())
    }
}

impl<T: Ring + Conjugate, S: Storage<T>> RModule<T, S> {
    /// Hermitian inner product `Σ aᵢ · conj(bᵢ)`
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_same_shape(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a * b.conjugate()))
    }
}

impl<T: Ring, S: Storage<T>> RModule<T, S> {
    /// `a₀b₁ - a₁b₀` for 2-vectors
    pub fn perp_dot(&self, other: &Self) -> Result<T> {
        self.check_len(2)?;
        other.check_len(2)?;
        let (a, b) = (self.to_vec(), other.to_vec());
        Ok(a[0] * b[1] - a[1] * b[0])
    }

    /// Cross product of 3-vectors
    pub fn cross(&self, other: &Self) -> Result<Self> {
        self.check_len(3)?;
        other.check_len(3)?;
        let (a, b) = (self.to_vec(), other.to_vec());
        let data = vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ];
        Ok(Self::from_parts(self.layout.clone(), S::from_vec(data)))
    }

    /// `a · (b × c)` with the bilinear (unconjugated) dot product
    pub fn scalar_triple(&self, b: &Self, c: &Self) -> Result<T> {
        let bc = b.cross(c)?;
        Ok(self
            .iter()
            .zip(bc.iter())
            .fold(T::zero(), |acc, (x, y)| acc + x * y))
    }

    /// `a × (b × c)`
    pub fn vector_triple(&self, b: &Self, c: &Self) -> Result<Self> {
        self.cross(&b.cross(c)?)
    }

    /// Outer product `mᵢⱼ = aᵢ · bⱼ`, an `a.len() × b.len()` matrix
    pub fn direct_product(&self, other: &Self) -> Matrix<T, S> {
        let (a, b) = (self.to_vec(), other.to_vec());
        let data = a
            .iter()
            .flat_map(|&x| b.iter().map(move |&y| x * y))
            .collect::<Vec<_>>();
        Matrix::from_vec_unchecked(a.len(), b.len(), data)
    }
}

/// Group raw components into members
pub(crate) fn members_from_components<T: Element>(components: &[T::Component]) -> Result<Vec<T>> {
    if components.len() % T::COMPONENTS != 0 {
        return Err(Error::invalid_argument(
            "components",
            format!(
                "{} values do not group into members of {}",
                components.len(),
                T::COMPONENTS
            ),
        ));
    }
    components
        .chunks_exact(T::COMPONENTS)
        .map(T::from_components)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{Complex128, Quaternion256};

    type V = RModule<f64>;

    #[test]
    fn test_construction() {
        let v = V::new(3);
        assert_eq!(v.len(), 3);
        assert!(v.is_zero());

        let z = RModule::<Complex128>::from_components(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(z.get(1).unwrap(), Complex128::new(3.0, 4.0));
        assert!(RModule::<Complex128>::from_components(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_alloc_reallocates_on_resize() {
        let mut v = V::from_slice(&[1.0, 2.0]);
        v.alloc(2);
        assert_eq!(v.to_vec(), vec![1.0, 2.0]);
        v.alloc(3);
        assert_eq!(v.to_vec(), vec![0.0; 3]);
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = V::from_slice(&[1.0, 2.0]);
        let b = V::from_slice(&[1.0, 2.0, 3.0]);
        assert!(matches!(a.add(&b), Err(Error::ShapeMismatch { .. })));
        assert_eq!(a.add(&a).unwrap().to_vec(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_hermitian_dot() {
        let a = RModule::<Complex128>::from_slice(&[Complex128::new(1.0, 1.0)]);
        let b = RModule::<Complex128>::from_slice(&[Complex128::new(0.0, 1.0)]);
        // (1+i)·conj(i) = (1+i)(-i) = 1 - i
        assert_eq!(a.dot(&b).unwrap(), Complex128::new(1.0, -1.0));
        // ⟨a, a⟩ = |a|²
        assert_eq!(a.dot(&a).unwrap(), Complex128::new(2.0, 0.0));
    }

    #[test]
    fn test_cross_and_triples() {
        let i = V::from_slice(&[1.0, 0.0, 0.0]);
        let j = V::from_slice(&[0.0, 1.0, 0.0]);
        let k = V::from_slice(&[0.0, 0.0, 1.0]);
        assert_eq!(i.cross(&j).unwrap(), k);
        assert_eq!(i.scalar_triple(&j, &k).unwrap(), 1.0);
        // i × (i × j) = i × k = -j
        assert_eq!(i.vector_triple(&i, &j).unwrap(), j.negate());
        assert!(i.cross(&V::new(2)).is_err());
    }

    #[test]
    fn test_perp_dot() {
        let a = V::from_slice(&[1.0, 2.0]);
        let b = V::from_slice(&[3.0, 4.0]);
        assert_eq!(a.perp_dot(&b).unwrap(), -2.0);
    }

    #[test]
    fn test_direct_product_keeps_order() {
        let a = RModule::<Quaternion256>::from_slice(&[Quaternion256::i()]);
        let b = RModule::<Quaternion256>::from_slice(&[Quaternion256::j()]);
        let m = a.direct_product(&b);
        assert_eq!(m.get(0, 0).unwrap(), Quaternion256::k());
    }

    #[test]
    fn test_norm_and_repr() {
        let v = RModule::<Complex128>::from_repr("[{3,0},{0,4}]").unwrap();
        assert_eq!(v.norm(), 5.0);
        assert_eq!(v.to_string(), "[{3,0},{0,4}]");
        assert!(RModule::<f64>::from_repr("[[1]]").is_err());
    }
}
