//! Matrix: a rows × cols grid of members

use super::elementwise::impl_container_ops;
use super::rmodule::members_from_components;
use super::{ArrayStorage, Layout, RModule, Storage};
use crate::algorithm::series::{self, SeriesConfig};
use crate::algorithm::{UnitalAlgebra, linalg, power_any};
use crate::dtype::{Element, Real};
use crate::error::{Error, Result};
use crate::ops::{
    Conjugate, Field, Infinite, Nan, Norm, Random, Ring, Rounding, RoundingMode, Scale, Tolerance,
};
use num_traits::{Float, One};
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Maximum iterations for the Denman-Beavers square root
pub const SQRT_DENMAN_BEAVERS_MAX_ITER: usize = 20;

/// Row-major matrix of members
///
/// Every algorithm here calls only member operations, so a matrix of
/// quaternions runs the same multiply, invert and power code as a matrix of
/// reals.
///
/// # Example
///
/// ```
/// use numalg::prelude::*;
///
/// let a = Matrix::<f64>::from_repr("[[2,1],[1,1]]").unwrap();
/// let inv = a.invert().unwrap();
/// assert!(a.multiply(&inv).unwrap().within(&Matrix::identity(2), 1e-12));
/// ```
#[derive(Clone, Debug)]
pub struct Matrix<T: Element, S: Storage<T> = ArrayStorage<T>> {
    layout: Layout,
    storage: S,
    _marker: PhantomData<T>,
}

impl_container_ops!(Matrix);

impl<T: Element, S: Storage<T>> Matrix<T, S> {
    /// `rows × cols` matrix of zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_parts(Layout::contiguous(&[rows, cols]), S::allocate(rows * cols))
    }

    pub(crate) fn from_vec_unchecked(rows: usize, cols: usize, data: Vec<T>) -> Self {
        Self::from_parts(Layout::contiguous(&[rows, cols]), S::from_vec(data))
    }

    /// Matrix from row-major members
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::shape_mismatch(&[rows * cols], &[data.len()]));
        }
        Ok(Self::from_vec_unchecked(rows, cols, data.to_vec()))
    }

    /// Matrix from row-major raw components, `T::COMPONENTS` per member
    pub fn from_components(rows: usize, cols: usize, components: &[T::Component]) -> Result<Self> {
        let data = members_from_components(components)?;
        Self::from_slice(rows, cols, &data)
    }

    /// Matrix from a literal such as `[[1,2],[3,4]]`
    pub fn from_repr(input: &str) -> Result<Self> {
        let (shape, data) = crate::repr::parse_members::<T>(input)?;
        match shape.as_slice() {
            &[rows, cols] => Self::from_slice(rows, cols, &data),
            _ => Err(Error::parse(input, "expected a two-level list")),
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.shape()[0]
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.layout.shape()[1]
    }

    /// Whether `rows == cols`
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    fn flat_index(&self, r: usize, c: usize) -> Result<usize> {
        if r >= self.rows() {
            return Err(Error::IndexOutOfBounds {
                index: r,
                size: self.rows(),
            });
        }
        if c >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                index: c,
                size: self.cols(),
            });
        }
        Ok(r * self.cols() + c)
    }

    /// Read member `(r, c)`
    pub fn get(&self, r: usize, c: usize) -> Result<T> {
        self.storage.get(self.flat_index(r, c)?)
    }

    /// Overwrite member `(r, c)`
    pub fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        let idx = self.flat_index(r, c)?;
        self.storage.set(idx, value)
    }

    /// Reshape to `rows × cols`
    ///
    /// A different element count reallocates and zeroes every member; the
    /// same count keeps the flat contents and only recomputes the strides.
    pub fn alloc(&mut self, rows: usize, cols: usize) {
        if rows * cols != self.elem_count() {
            self.storage = S::allocate(rows * cols);
        }
        self.layout = Layout::contiguous(&[rows, cols]);
    }

    /// Copy of row `r`
    pub fn row(&self, r: usize) -> Result<RModule<T, S>> {
        self.flat_index(r, 0)?;
        let cols = self.cols();
        let data = self.to_vec();
        Ok(RModule::from_slice(&data[r * cols..(r + 1) * cols]))
    }

    /// Copy of column `c`
    pub fn col(&self, c: usize) -> Result<RModule<T, S>> {
        self.flat_index(0, c)?;
        let cols = self.cols();
        let data = self.to_vec();
        let column: Vec<T> = (0..self.rows()).map(|r| data[r * cols + c]).collect();
        Ok(RModule::from_slice(&column))
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let data = self.to_vec();
        let mut out = Vec::with_capacity(data.len());
        for c in 0..cols {
            for r in 0..rows {
                out.push(data[r * cols + c]);
            }
        }
        Self::from_vec_unchecked(cols, rows, out)
    }

    fn check_square(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(Error::shape_mismatch(
                &[self.rows(), self.rows()],
                self.layout.shape(),
            ));
        }
        Ok(self.rows())
    }
}

impl<T: Conjugate, S: Storage<T>> Matrix<T, S> {
    /// Conjugate transpose
    pub fn conjugate_transpose(&self) -> Self {
        self.transpose().conjugate()
    }
}

impl<T: Ring, S: Storage<T>> Matrix<T, S> {
    /// `n × n` identity
    pub fn identity(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::unity();
        }
        Self::from_vec_unchecked(n, n, data)
    }

    fn multiply_unchecked(&self, other: &Self) -> Self {
        let (m, k, n) = (self.rows(), self.cols(), other.cols());
        let a = self.to_vec();
        let b = other.to_vec();
        let mut c = vec![T::zero(); m * n];
        for i in 0..m {
            for j in 0..n {
                let mut sum = T::zero();
                for p in 0..k {
                    sum = sum + a[i * k + p] * b[p * n + j];
                }
                c[i * n + j] = sum;
            }
        }
        Self::from_vec_unchecked(m, n, c)
    }

    /// Matrix product; requires `self.cols() == other.rows()`
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(Error::shape_mismatch(
                &[self.cols(), other.cols()],
                other.layout.shape(),
            ));
        }
        Ok(self.multiply_unchecked(other))
    }

    /// Matrix-vector product `A · v`
    pub fn multiply_vector(&self, v: &RModule<T, S>) -> Result<RModule<T, S>> {
        if self.cols() != v.len() {
            return Err(Error::shape_mismatch(&[self.cols()], &[v.len()]));
        }
        let cols = self.cols();
        let a = self.to_vec();
        let x = v.to_vec();
        let out: Vec<T> = (0..self.rows())
            .map(|r| {
                (0..cols).fold(T::zero(), |acc, c| acc + a[r * cols + c] * x[c])
            })
            .collect();
        Ok(RModule::from_slice(&out))
    }

    /// Sum of the diagonal; square only
    pub fn trace(&self) -> Result<T> {
        let n = self.check_square()?;
        let data = self.to_vec();
        Ok((0..n).fold(T::zero(), |acc, i| acc + data[i * n + i]))
    }

    /// Kronecker product: block `(i, j)` is `aᵢⱼ · B`
    pub fn direct_product(&self, other: &Self) -> Self {
        let (ar, ac) = (self.rows(), self.cols());
        let (br, bc) = (other.rows(), other.cols());
        let a = self.to_vec();
        let b = other.to_vec();
        let (rows, cols) = (ar * br, ac * bc);
        let mut out = vec![T::zero(); rows * cols];
        for i in 0..ar {
            for j in 0..ac {
                let aij = a[i * ac + j];
                for k in 0..br {
                    for l in 0..bc {
                        out[(i * br + k) * cols + j * bc + l] = aij * b[k * bc + l];
                    }
                }
            }
        }
        Self::from_vec_unchecked(rows, cols, out)
    }
}

impl<T: Field + Norm, S: Storage<T>> Matrix<T, S> {
    /// Inverse by Gauss-Jordan elimination with partial pivoting
    ///
    /// Fails with [`Error::Singular`] when no usable pivot remains.
    #[instrument(level = "debug", skip_all, fields(n = self.rows(), dtype = %T::DTYPE))]
    pub fn invert(&self) -> Result<Self> {
        let n = self.check_square()?;
        let inv = linalg::invert(&self.to_vec(), n)?;
        Ok(Self::from_vec_unchecked(n, n, inv))
    }

    /// Right division `self · other⁻¹`
    pub fn divide(&self, other: &Self) -> Result<Self> {
        self.multiply(&other.invert()?)
    }

    /// Determinant; see [`linalg::determinant`] for non-commutative members
    #[instrument(level = "debug", skip_all, fields(n = self.rows(), dtype = %T::DTYPE))]
    pub fn det(&self) -> Result<T> {
        let n = self.check_square()?;
        linalg::determinant(&self.to_vec(), n)
    }
}

impl<T: Field + Scale + Norm, S: Storage<T>> Matrix<T, S> {
    /// Integer power by repeated squaring
    ///
    /// `power(0)` is the identity and a negative exponent raises the inverse.
    #[instrument(
        level = "debug",
        skip_all,
        fields(n = self.rows(), dtype = %T::DTYPE, exponent = exponent)
    )]
    pub fn power(&self, exponent: i64) -> Result<Self> {
        self.check_square()?;
        if exponent < 0 {
            return Ok(power_any(&self.invert()?, exponent.unsigned_abs()));
        }
        Ok(power_any(self, exponent as u64))
    }

    /// Principal square root by the Denman-Beavers iteration
    ///
    /// `Y₀ = A, Z₀ = I`, then `Yₖ₊₁ = (Yₖ + Zₖ⁻¹)/2` and
    /// `Zₖ₊₁ = (Zₖ + Yₖ⁻¹)/2`; `Y` converges to `√A` and `Z` to `√A⁻¹`.
    #[instrument(level = "debug", skip_all, fields(n = self.rows(), dtype = %T::DTYPE))]
    pub fn sqrt(&self) -> Result<Self> {
        let n = self.check_square()?;
        let half = T::Component::one_half();
        let eps = T::Component::epsilon() * T::Component::from_f64((n * n) as f64);

        let mut y = self.clone();
        let mut z = Self::identity(n);
        for iteration in 0..SQRT_DENMAN_BEAVERS_MAX_ITER {
            let singular = |_| Error::Singular { op: "sqrt" };
            let y_inv = y.invert().map_err(singular)?;
            let z_inv = z.invert().map_err(singular)?;

            let y_next = y.add_ref(&z_inv).scale(half);
            let z_next = z.add_ref(&y_inv).scale(half);
            let diff = y_next.subtract(&y)?.norm();

            y = y_next;
            z = z_next;
            if diff <= eps * y.norm().max(T::Component::one()) {
                debug!(iterations = iteration + 1, "denman-beavers converged");
                return Ok(y);
            }
        }
        debug!("denman-beavers hit the iteration cap");
        Ok(y)
    }
}

impl<T: Ring + Scale + Norm, S: Storage<T>> Matrix<T, S> {
    /// Matrix exponential, truncated Taylor series
    #[instrument(level = "debug", skip_all, fields(n = self.rows(), dtype = %T::DTYPE))]
    pub fn exp(&self, config: &SeriesConfig<T::Component>) -> Result<Self> {
        self.check_square()?;
        Ok(series::taylor_exp(self, config))
    }

    /// Matrix logarithm from the `ln(I + X)` series with `X = A - I`
    ///
    /// Accurate only near the identity: the series diverges once
    /// `norm(A - I) >= 1`, which is logged but not rejected.
    #[instrument(level = "debug", skip_all, fields(n = self.rows(), dtype = %T::DTYPE))]
    pub fn ln(&self, config: &SeriesConfig<T::Component>) -> Result<Self> {
        let n = self.check_square()?;
        let x = self.subtract(&Self::identity(n))?;
        Ok(series::taylor_ln(&x, config))
    }

    /// Matrix sine
    pub fn sin(&self, config: &SeriesConfig<T::Component>) -> Result<Self> {
        self.check_square()?;
        Ok(series::taylor_sin(self, config))
    }

    /// Matrix cosine
    pub fn cos(&self, config: &SeriesConfig<T::Component>) -> Result<Self> {
        self.check_square()?;
        Ok(series::taylor_cos(self, config))
    }

    /// Matrix sine and cosine from one pass
    pub fn sin_and_cos(&self, config: &SeriesConfig<T::Component>) -> Result<(Self, Self)> {
        self.check_square()?;
        Ok(series::taylor_sin_and_cos(self, config))
    }

    /// Matrix hyperbolic sine
    pub fn sinh(&self, config: &SeriesConfig<T::Component>) -> Result<Self> {
        self.check_square()?;
        Ok(series::taylor_sinh(self, config))
    }

    /// Matrix hyperbolic cosine
    pub fn cosh(&self, config: &SeriesConfig<T::Component>) -> Result<Self> {
        self.check_square()?;
        Ok(series::taylor_cosh(self, config))
    }

    /// Matrix hyperbolic sine and cosine from one pass
    pub fn sinh_and_cosh(&self, config: &SeriesConfig<T::Component>) -> Result<(Self, Self)> {
        self.check_square()?;
        Ok(series::taylor_sinh_and_cosh(self, config))
    }
}

/// Square matrices form a unital algebra; callers guarantee equal square
/// shapes, which every public entry point checks first
impl<T: Ring + Scale + Norm, S: Storage<T>> UnitalAlgebra for Matrix<T, S> {
    type Real = T::Component;

    fn unity_like(&self) -> Self {
        Self::identity(self.rows())
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        let data = self
            .to_vec()
            .into_iter()
            .zip(rhs.to_vec())
            .map(|(a, b)| a + b)
            .collect();
        Self::from_parts(self.layout.clone(), S::from_vec(data))
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        self.multiply_unchecked(rhs)
    }

    fn scale_real(&self, factor: T::Component) -> Self {
        self.scale(factor)
    }

    fn magnitude(&self) -> T::Component {
        self.norm()
    }
}
