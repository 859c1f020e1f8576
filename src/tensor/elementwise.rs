//! Operations shared by every container
//!
//! [`RModule`](super::RModule), [`Matrix`](super::Matrix) and
//! [`Tensor`](super::Tensor) all hold a [`Layout`](super::Layout) plus a
//! [`Storage`](super::Storage), and their elementwise operations only differ
//! in the container type. `impl_container_ops!` generates them once per
//! container, each impl block bounded on the member capability it calls.

/// Generates the shape accessors and elementwise operations of a container
///
/// The container must be a struct with fields `layout: Layout`, `storage: S`
/// and `_marker: PhantomData<T>`.
macro_rules! impl_container_ops {
    ($name:ident) => {
        impl<T: Element, S: Storage<T>> $name<T, S> {
            #[inline]
            fn from_parts(layout: Layout, storage: S) -> Self {
                debug_assert_eq!(layout.elem_count(), storage.len());
                Self {
                    layout,
                    storage,
                    _marker: PhantomData,
                }
            }

            /// Shape and strides
            #[inline]
            pub fn layout(&self) -> &Layout {
                &self.layout
            }

            /// Extent of each axis
            #[inline]
            pub fn shape(&self) -> &[usize] {
                self.layout.shape()
            }

            /// Number of members
            #[inline]
            pub fn elem_count(&self) -> usize {
                self.layout.elem_count()
            }

            /// Backing store
            #[inline]
            pub fn storage(&self) -> &S {
                &self.storage
            }

            /// Copy of every member in row-major order
            #[inline]
            pub fn to_vec(&self) -> Vec<T> {
                self.storage.to_vec()
            }

            /// Iterate over copies of the members in row-major order
            pub fn iter(&self) -> std::vec::IntoIter<T> {
                self.to_vec().into_iter()
            }

            fn check_same_shape(&self, other: &Self) -> Result<()> {
                if self.layout.shape() != other.layout.shape() {
                    return Err(Error::shape_mismatch(
                        self.layout.shape(),
                        other.layout.shape(),
                    ));
                }
                Ok(())
            }

            fn map(&self, f: impl Fn(T) -> T) -> Self {
                let data = self.to_vec().into_iter().map(f).collect();
                Self::from_parts(self.layout.clone(), S::from_vec(data))
            }

            fn zip_map(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
                self.check_same_shape(other)?;
                let data = self
                    .to_vec()
                    .into_iter()
                    .zip(other.to_vec())
                    .map(|(a, b)| f(a, b))
                    .collect();
                Ok(Self::from_parts(self.layout.clone(), S::from_vec(data)))
            }
        }

        impl<T: Ring, S: Storage<T>> $name<T, S> {
            /// Elementwise sum; shapes must match
            pub fn add(&self, other: &Self) -> Result<Self> {
                self.zip_map(other, |a, b| a + b)
            }

            /// Elementwise difference; shapes must match
            pub fn subtract(&self, other: &Self) -> Result<Self> {
                self.zip_map(other, |a, b| a - b)
            }

            /// Elementwise negation
            pub fn negate(&self) -> Self {
                self.map(|a| -a)
            }

            /// Whether every member is zero
            pub fn is_zero(&self) -> bool {
                self.iter().all(|a| a.is_zero())
            }
        }

        impl<T: Scale, S: Storage<T>> $name<T, S> {
            /// Multiply every member by a real factor
            pub fn scale(&self, factor: T::Component) -> Self {
                self.map(|a| a.scale(factor))
            }

            /// Multiply every member by an f64 factor
            pub fn scale_by_f64(&self, factor: f64) -> Self {
                self.map(|a| a.scale_by_f64(factor))
            }

            /// Multiply every member by a rational factor
            pub fn scale_by_rational(&self, factor: num_rational::Ratio<i64>) -> Self {
                self.map(|a| a.scale_by_rational(factor))
            }

            /// Multiply every member by `2^count`
            pub fn scale_by_two(&self, count: u32) -> Self {
                self.map(|a| a.scale_by_two(count))
            }

            /// Multiply every member by `2^-count`
            pub fn scale_by_one_half(&self, count: u32) -> Self {
                self.map(|a| a.scale_by_one_half(count))
            }
        }

        impl<T: Conjugate, S: Storage<T>> $name<T, S> {
            /// Elementwise conjugate
            pub fn conjugate(&self) -> Self {
                self.map(|a| a.conjugate())
            }
        }

        impl<T: Norm, S: Storage<T>> $name<T, S> {
            /// Euclidean norm over every component of every member
            ///
            /// For a matrix this is the Frobenius norm.
            pub fn norm(&self) -> T::Component {
                let data = self.to_vec();
                $crate::algorithm::scaled_norm(bytemuck::cast_slice::<T, T::Component>(&data))
            }
        }

        impl<T: Tolerance, S: Storage<T>> $name<T, S> {
            /// Same shape and every member pair within `tolerance`
            pub fn within(&self, other: &Self, tolerance: T::Component) -> bool {
                self.layout.shape() == other.layout.shape()
                    && self
                        .iter()
                        .zip(other.iter())
                        .all(|(a, b)| a.within(&b, tolerance))
            }
        }

        impl<T: Nan, S: Storage<T>> $name<T, S> {
            /// Whether any member has a NaN component
            pub fn is_nan(&self) -> bool {
                self.iter().any(|a| a.is_nan())
            }
        }

        impl<T: Infinite, S: Storage<T>> $name<T, S> {
            /// Whether any member is infinite
            pub fn is_infinite(&self) -> bool {
                self.iter().any(|a| a.is_infinite())
            }
        }

        impl<T: Rounding, S: Storage<T>> $name<T, S> {
            /// Round every component to a multiple of `delta`
            pub fn round(&self, mode: RoundingMode, delta: T::Component) -> Self {
                self.map(|a| a.round(mode, delta))
            }
        }

        impl<T: Random, S: Storage<T>> $name<T, S> {
            /// Overwrite every member with uniform `[0, 1)` components
            pub fn fill_random<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
                let data = (0..self.elem_count()).map(|_| T::random(rng)).collect();
                self.storage = S::from_vec(data);
            }
        }

        impl<T: Element, S: Storage<T>> PartialEq for $name<T, S> {
            /// Same shape and equal members
            fn eq(&self, other: &Self) -> bool {
                self.layout == other.layout && self.to_vec() == other.to_vec()
            }
        }

        impl<T: Element, S: Storage<T>> std::fmt::Display for $name<T, S> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::repr::write_nested(f, self.layout.shape(), &self.to_vec())
            }
        }
    };
}

pub(crate) use impl_container_ops;
