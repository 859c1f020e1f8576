//! Layout: shape and row-major stride multipliers for container storage

use smallvec::SmallVec;
use std::fmt;

/// Stack allocation threshold for dimensions
/// Vectors and matrices need one or two; Cartesian tensors rarely exceed four
const STACK_DIMS: usize = 4;

/// Shape type: extent of each axis
pub type Shape = SmallVec<[usize; STACK_DIMS]>;

/// Strides type: flat-index multiplier of each axis
pub type Strides = SmallVec<[usize; STACK_DIMS]>;

/// Layout describes how a multi-index maps into a container's flat storage
///
/// Flat index of element `[i0, i1, ..., in]`:
///   i0 * strides[0] + i1 * strides[1] + ... + in * strides[n]
///
/// Strides are always the row-major strides of the current shape: every way
/// of changing the shape goes through [`Layout::contiguous`], so they can
/// never go stale.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Shape,
    strides: Strides,
}

impl Layout {
    /// Create a row-major layout from a shape
    ///
    /// # Example
    /// ```
    /// use numalg::tensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3, 4]);
    /// assert_eq!(layout.shape(), &[2, 3, 4]);
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        let shape: Shape = shape.iter().copied().collect();
        let strides = Self::compute_strides(&shape);
        Self { shape, strides }
    }

    /// Create a scalar (rank-0) layout holding one element
    pub fn scalar() -> Self {
        Self {
            shape: SmallVec::new(),
            strides: SmallVec::new(),
        }
    }

    /// Layout of a Cartesian tensor: `rank` axes of extent `dim`
    pub fn cartesian(rank: usize, dim: usize) -> Self {
        let shape: Shape = std::iter::repeat_n(dim, rank).collect();
        Self::contiguous(&shape)
    }

    fn compute_strides(shape: &[usize]) -> Strides {
        let mut strides: Strides = SmallVec::with_capacity(shape.len());
        let mut stride = 1usize;

        // Last axis varies fastest
        for &dim in shape.iter().rev() {
            strides.push(stride);
            stride *= dim;
        }

        strides.reverse();
        strides
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of axes (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements; 1 for a scalar layout
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// Extent of one axis
    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.shape.get(axis).copied()
    }

    /// Flat index of a multi-index, or `None` if the rank or a bound is wrong
    pub fn index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.ndim() {
            return None;
        }

        let mut linear = 0;
        for ((&idx, &dim), &stride) in indices.iter().zip(&self.shape).zip(&self.strides) {
            if idx >= dim {
                return None;
            }
            linear += idx * stride;
        }

        Some(linear)
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, strides: {:?} }}",
            self.shape.as_slice(),
            self.strides.as_slice()
        )
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.shape.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_layout() {
        let layout = Layout::contiguous(&[2, 3, 4]);
        assert_eq!(layout.shape(), &[2, 3, 4]);
        assert_eq!(layout.strides(), &[12, 4, 1]);
        assert_eq!(layout.elem_count(), 24);
    }

    #[test]
    fn test_scalar_layout() {
        let layout = Layout::scalar();
        assert_eq!(layout.ndim(), 0);
        assert_eq!(layout.elem_count(), 1);
        assert_eq!(layout.index(&[]), Some(0));
    }

    #[test]
    fn test_cartesian() {
        let layout = Layout::cartesian(3, 2);
        assert_eq!(layout.shape(), &[2, 2, 2]);
        assert_eq!(layout.strides(), &[4, 2, 1]);
        assert_eq!(Layout::cartesian(0, 5), Layout::scalar());
    }

    #[test]
    fn test_index() {
        let layout = Layout::contiguous(&[2, 3]);
        assert_eq!(layout.index(&[0, 0]), Some(0));
        assert_eq!(layout.index(&[0, 2]), Some(2));
        assert_eq!(layout.index(&[1, 0]), Some(3));
        assert_eq!(layout.index(&[1, 2]), Some(5));
        assert_eq!(layout.index(&[2, 0]), None); // Out of bounds
        assert_eq!(layout.index(&[1]), None); // Wrong rank
    }
}
