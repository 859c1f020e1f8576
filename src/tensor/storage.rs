//! Storage: the flat element store behind every container

use crate::dtype::Element;
use crate::error::{Error, Result};
use std::fmt;

/// Linearly indexed store of members
///
/// Containers are written against this narrow contract only, so a backend may
/// keep its members anywhere: a heap array, a memory-mapped file, a pool.
/// Cloning (or [`Storage::duplicate`]) is always a deep copy; two containers
/// never share a store.
///
/// # Contract
///
/// A store returned by `allocate(len)` must accept `get` and `set` for every
/// index below `len`; only out-of-range indices may fail. The default
/// [`Storage::from_vec`] and [`Storage::to_vec`] rely on this and do not
/// report errors. A backend whose reads or writes can fail for other reasons
/// must override both.
pub trait Storage<T: Element>: Clone + fmt::Debug + Send + Sync {
    /// Allocate `len` zero members
    fn allocate(len: usize) -> Self;

    /// Number of members
    fn len(&self) -> usize;

    /// Whether the store holds no members
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read one member
    fn get(&self, index: usize) -> Result<T>;

    /// Overwrite one member
    fn set(&mut self, index: usize, value: T) -> Result<()>;

    /// Deep copy of this store
    #[inline]
    fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Build a store holding exactly `data`
    fn from_vec(data: Vec<T>) -> Self {
        let mut out = Self::allocate(data.len());
        for (i, v) in data.into_iter().enumerate() {
            let stored = out.set(i, v);
            debug_assert!(stored.is_ok(), "in-range set at index {i} failed");
        }
        out
    }

    /// Copy every member out in index order
    ///
    /// An in-range read never fails under the storage contract; a failing
    /// backend reads as zero here.
    fn to_vec(&self) -> Vec<T> {
        (0..self.len())
            .map(|i| self.get(i).unwrap_or_default())
            .collect()
    }
}

/// Heap-array storage, the default for every container
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayStorage<T: Element> {
    data: Vec<T>,
}

impl<T: Element> ArrayStorage<T> {
    /// Borrow the members as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow the raw components of every member, in order
    #[inline]
    pub fn components(&self) -> &[T::Component] {
        bytemuck::cast_slice(&self.data)
    }
}

impl<T: Element> Storage<T> for ArrayStorage<T> {
    fn allocate(len: usize) -> Self {
        Self {
            data: vec![T::zeroed(); len],
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            })
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<()> {
        let size = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, size })?;
        *slot = value;
        Ok(())
    }

    #[inline]
    fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    #[inline]
    fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}
