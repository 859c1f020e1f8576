//! Core Tensor type: Cartesian tensors of any rank

use super::elementwise::impl_container_ops;
use super::rmodule::members_from_components;
use super::{ArrayStorage, Layout, Matrix, RModule, Storage};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::{
    Conjugate, Infinite, Nan, Norm, Random, Ring, Rounding, RoundingMode, Scale, Tolerance,
};
use std::marker::PhantomData;
use tracing::instrument;

/// Cartesian tensor: `rank` axes that all have extent `dim`
///
/// Upper and lower indices are not distinguished, so contraction is a plain
/// sum along a shared diagonal. A rank-0 tensor holds a single member and
/// reports `dim() == 0`.
///
/// # Example
///
/// ```
/// use numalg::prelude::*;
///
/// let a = Tensor::<f64>::from_repr("[1,2]").unwrap();
/// let b = Tensor::<f64>::from_repr("[3,4]").unwrap();
/// let c = a.outer_product(&b).unwrap();
/// assert_eq!(c.to_string(), "[[3,4],[6,8]]");
/// assert_eq!(c.contract(0, 1).unwrap().get(&[]).unwrap(), 11.0);
/// ```
#[derive(Clone, Debug)]
pub struct Tensor<T: Element, S: Storage<T> = ArrayStorage<T>> {
    layout: Layout,
    storage: S,
    _marker: PhantomData<T>,
}

impl_container_ops!(Tensor);

/// Step a multi-index through `0..dim` on every axis, last axis fastest
///
/// Returns false once every index has wrapped.
fn advance(index: &mut [usize], dim: usize) -> bool {
    for slot in index.iter_mut().rev() {
        *slot += 1;
        if *slot < dim {
            return true;
        }
        *slot = 0;
    }
    false
}

impl<T: Element, S: Storage<T>> Tensor<T, S> {
    /// Zero tensor of the given rank and dimension
    pub fn new(rank: usize, dim: usize) -> Self {
        let layout = Layout::cartesian(rank, dim);
        let storage = S::allocate(layout.elem_count());
        Self::from_parts(layout, storage)
    }

    /// Rank-0 tensor holding `value`
    pub fn scalar(value: T) -> Self {
        Self::from_parts(Layout::scalar(), S::from_vec(vec![value]))
    }

    /// Tensor from row-major members; needs `dim^rank` of them
    pub fn from_slice(rank: usize, dim: usize, data: &[T]) -> Result<Self> {
        let layout = Layout::cartesian(rank, dim);
        if data.len() != layout.elem_count() {
            return Err(Error::shape_mismatch(layout.shape(), &[data.len()]));
        }
        Ok(Self::from_parts(layout, S::from_vec(data.to_vec())))
    }

    /// Tensor from row-major raw components, `T::COMPONENTS` per member
    pub fn from_components(rank: usize, dim: usize, components: &[T::Component]) -> Result<Self> {
        let data = members_from_components(components)?;
        Self::from_slice(rank, dim, &data)
    }

    /// Tensor from a nested literal; every level must have the same length
    pub fn from_repr(input: &str) -> Result<Self> {
        let (shape, data) = crate::repr::parse_members::<T>(input)?;
        let dim = shape.first().copied().unwrap_or(0);
        if shape.iter().any(|&d| d != dim) {
            return Err(Error::parse(input, "axes of a Cartesian tensor must share one extent"));
        }
        Self::from_slice(shape.len(), dim, &data)
    }

    /// Number of axes
    #[inline]
    pub fn rank(&self) -> usize {
        self.layout.ndim()
    }

    /// Extent of every axis; 0 for a rank-0 tensor
    #[inline]
    pub fn dim(&self) -> usize {
        self.layout.dim(0).unwrap_or(0)
    }

    fn flat_index(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.rank() {
            return Err(Error::shape_mismatch(&[self.rank()], &[index.len()]));
        }
        self.layout.index(index).ok_or_else(|| {
            let bad = index.iter().copied().find(|&i| i >= self.dim()).unwrap_or(0);
            Error::IndexOutOfBounds {
                index: bad,
                size: self.dim(),
            }
        })
    }

    /// Read the member at a multi-index
    pub fn get(&self, index: &[usize]) -> Result<T> {
        self.storage.get(self.flat_index(index)?)
    }

    /// Overwrite the member at a multi-index
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let flat = self.flat_index(index)?;
        self.storage.set(flat, value)
    }

    /// Change rank and dimension
    ///
    /// A different element count reallocates and zeroes every member.
    pub fn alloc(&mut self, rank: usize, dim: usize) {
        let layout = Layout::cartesian(rank, dim);
        if layout.elem_count() != self.elem_count() {
            self.storage = S::allocate(layout.elem_count());
        }
        self.layout = layout;
    }
}

impl<T: Ring, S: Storage<T>> Tensor<T, S> {
    /// Sum over the diagonal of axes `i` and `j`, giving rank `rank - 2`
    ///
    /// Fails for a tensor of rank below 2, an axis out of range or `i == j`.
    #[instrument(
        level = "debug",
        skip(self),
        fields(rank = self.rank(), dim = self.dim(), dtype = %T::DTYPE)
    )]
    pub fn contract(&self, i: usize, j: usize) -> Result<Self> {
        let rank = self.rank();
        if rank < 2 {
            return Err(Error::invalid_argument(
                "tensor",
                format!("contraction needs rank >= 2, got rank {rank}"),
            ));
        }
        for axis in [i, j] {
            if axis >= rank {
                return Err(Error::InvalidDimension {
                    dim: axis,
                    ndim: rank,
                });
            }
        }
        if i == j {
            return Err(Error::invalid_argument(
                "j",
                "cannot contract an axis with itself",
            ));
        }

        let dim = self.dim();
        let out_layout = Layout::cartesian(rank - 2, dim);
        let count = out_layout.elem_count();
        let data = self.to_vec();
        let strides = self.layout.strides();
        let (lo, hi) = (i.min(j), i.max(j));

        let mut out = Vec::with_capacity(count);
        let mut out_index = vec![0usize; rank - 2];
        while out.len() < count {
            // Offset of the free axes; the contracted pair adds k·(s_i + s_j)
            let mut base = 0;
            let mut free = out_index.iter();
            for (axis, &stride) in strides.iter().enumerate() {
                if axis != lo && axis != hi {
                    base += free.next().copied().unwrap_or(0) * stride;
                }
            }
            let diagonal = strides[lo] + strides[hi];
            let sum = (0..dim).fold(T::zero(), |acc, k| acc + data[base + k * diagonal]);
            out.push(sum);

            if !advance(&mut out_index, dim) {
                break;
            }
        }

        Ok(Self::from_parts(out_layout, S::from_vec(out)))
    }

    /// Outer product: rank `self.rank() + other.rank()`, element
    /// `[i.., j..]` is `self[i..] · other[j..]`
    ///
    /// Both tensors must share `dim`, unless one of them has rank 0.
    pub fn outer_product(&self, other: &Self) -> Result<Self> {
        let dim = match (self.rank(), other.rank()) {
            (0, _) => other.dim(),
            (_, 0) => self.dim(),
            _ if self.dim() == other.dim() => self.dim(),
            _ => {
                return Err(Error::shape_mismatch(
                    &[self.dim()],
                    &[other.dim()],
                ));
            }
        };

        let a = self.to_vec();
        let b = other.to_vec();
        let data: Vec<T> = a
            .iter()
            .flat_map(|&x| b.iter().map(move |&y| x * y))
            .collect();
        let layout = Layout::cartesian(self.rank() + other.rank(), dim);
        Ok(Self::from_parts(layout, S::from_vec(data)))
    }

    /// Outer product followed by contraction of the last axis of `self` with
    /// the first axis of `other`
    ///
    /// For two vectors this is the unconjugated dot product; for two rank-2
    /// tensors it is the matrix product.
    pub fn inner_product(&self, other: &Self) -> Result<Self> {
        if self.rank() == 0 || other.rank() == 0 {
            return Err(Error::invalid_argument(
                "tensor",
                "inner product needs rank >= 1 on both sides",
            ));
        }
        let rank = self.rank();
        self.outer_product(other)?.contract(rank - 1, rank)
    }

    /// `n`-fold outer product of `self` with itself; `power(0)` is the rank-0
    /// unity
    pub fn power(&self, n: u32) -> Result<Self> {
        let mut result = Self::scalar(T::unity());
        for _ in 0..n {
            result = result.outer_product(self)?;
        }
        Ok(result)
    }
}

impl<T: Element, S: Storage<T>> From<&RModule<T, S>> for Tensor<T, S> {
    /// Rank-1 tensor with `dim = len`
    fn from(v: &RModule<T, S>) -> Self {
        Self::from_parts(Layout::cartesian(1, v.len()), S::from_vec(v.to_vec()))
    }
}

impl<T: Element, S: Storage<T>> TryFrom<&Matrix<T, S>> for Tensor<T, S> {
    type Error = Error;

    /// Rank-2 tensor; the matrix must be square
    fn try_from(m: &Matrix<T, S>) -> Result<Self> {
        if !m.is_square() {
            return Err(Error::shape_mismatch(&[m.rows(), m.rows()], m.shape()));
        }
        Ok(Self::from_parts(
            Layout::cartesian(2, m.rows()),
            S::from_vec(m.to_vec()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::Complex128;

    type T64 = Tensor<f64>;

    fn seq(rank: usize, dim: usize) -> T64 {
        let n = dim.pow(rank as u32);
        let data: Vec<f64> = (0..n).map(|x| x as f64).collect();
        T64::from_slice(rank, dim, &data).unwrap()
    }

    #[test]
    fn test_outer_product_vectors() {
        let a = T64::from_slice(1, 2, &[1.0, 2.0]).unwrap();
        let b = T64::from_slice(1, 2, &[3.0, 4.0]).unwrap();
        let c = a.outer_product(&b).unwrap();
        assert_eq!(c.rank(), 2);
        assert_eq!(c.to_vec(), vec![3.0, 4.0, 6.0, 8.0]);
        assert_eq!(c.get(&[1, 0]).unwrap(), 6.0);
    }

    #[test]
    fn test_outer_product_dim_mismatch() {
        let a = T64::new(1, 2);
        let b = T64::new(1, 3);
        assert!(matches!(a.outer_product(&b), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_contract_rank_law() {
        for rank in 2..=4 {
            let t = seq(rank, 3);
            let c = t.contract(0, rank - 1).unwrap();
            assert_eq!(c.rank(), rank - 2);
            assert_eq!(c.elem_count(), 3usize.pow((rank - 2) as u32));
        }
    }

    #[test]
    fn test_contract_trace_and_middle_axes() {
        let t = seq(2, 3);
        // 0 + 4 + 8
        assert_eq!(t.contract(1, 0).unwrap().get(&[]).unwrap(), 12.0);

        // rank 3, dim 2: c[k] = Σ_i t[i, k, i]
        let t = seq(3, 2);
        let c = t.contract(0, 2).unwrap();
        // t[i,k,i] = 4i + 2k + i
        assert_eq!(c.to_vec(), vec![0.0 + 5.0, 2.0 + 7.0]);
    }

    #[test]
    fn test_contract_errors() {
        assert!(seq(1, 3).contract(0, 1).is_err());
        assert!(T64::scalar(1.0).contract(0, 0).is_err());
        assert!(matches!(
            seq(2, 2).contract(1, 1),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            seq(2, 2).contract(0, 2),
            Err(Error::InvalidDimension { dim: 2, ndim: 2 })
        ));
    }

    #[test]
    fn test_inner_product_is_matmul() {
        let a = T64::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = T64::from_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(a.inner_product(&b).unwrap().to_vec(), vec![2.0, 1.0, 4.0, 3.0]);
    }

    #[test]
    fn test_power() {
        let v = T64::from_slice(1, 2, &[1.0, 2.0]).unwrap();
        assert_eq!(v.power(0).unwrap(), T64::scalar(1.0));
        let p = v.power(3).unwrap();
        assert_eq!(p.rank(), 3);
        assert_eq!(p.get(&[1, 1, 1]).unwrap(), 8.0);
    }

    #[test]
    fn test_conversions() {
        let m = Matrix::<Complex128>::identity(3);
        let t = Tensor::try_from(&m).unwrap();
        assert_eq!(t.rank(), 2);
        assert_eq!(t.contract(0, 1).unwrap().get(&[]).unwrap(), Complex128::new(3.0, 0.0));
        assert!(Tensor::try_from(&Matrix::<f64>::new(2, 3)).is_err());

        let v = RModule::<f64>::from_slice(&[1.0, 2.0, 3.0]);
        let t = Tensor::from(&v);
        assert_eq!((t.rank(), t.dim()), (1, 3));
    }

    #[test]
    fn test_get_set_validation() {
        let mut t = T64::new(2, 2);
        t.set(&[1, 0], 5.0).unwrap();
        assert_eq!(t.get(&[1, 0]).unwrap(), 5.0);
        assert!(matches!(t.get(&[2, 0]), Err(Error::IndexOutOfBounds { .. })));
        assert!(matches!(t.get(&[0]), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_repr() {
        let t = T64::from_repr("[[[1,2],[3,4]],[[5,6],[7,8]]]").unwrap();
        assert_eq!((t.rank(), t.dim()), (3, 2));
        assert_eq!(t.to_string(), "[[[1,2],[3,4]],[[5,6],[7,8]]]");
        assert!(T64::from_repr("[[1,2,3],[4,5,6]]").is_err());
    }
}
