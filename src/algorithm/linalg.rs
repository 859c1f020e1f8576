//! Dense linear-algebra kernels on flat row-major data
//!
//! The kernels work on `&[T]` of length `n * n` and call only the member
//! operations (`+`, `-`, `*`, [`Field::invert`], [`Norm::norm`]), so one
//! implementation serves every member type. Row operations are applied from
//! the left, which keeps them correct for non-commutative members such as
//! quaternions.

use crate::dtype::Real;
use crate::error::{Error, Result};
use crate::ops::{Field, Norm};
use num_traits::{Float, Zero};
use tracing::debug;

/// Largest element norm, used to scale the singularity threshold
fn max_norm<T: Norm>(a: &[T]) -> T::Component {
    a.iter().fold(T::Component::zero(), |acc, x| acc.max(x.norm()))
}

/// Row index in `k..n` whose column-`k` entry has the largest norm
fn pivot_row<T: Norm>(a: &[T], n: usize, k: usize) -> (usize, T::Component) {
    let mut best = k;
    let mut best_norm = a[k * n + k].norm();
    for i in (k + 1)..n {
        let v = a[i * n + k].norm();
        if v > best_norm {
            best = i;
            best_norm = v;
        }
    }
    (best, best_norm)
}

fn swap_rows<T>(a: &mut [T], n: usize, r1: usize, r2: usize) {
    if r1 == r2 {
        return;
    }
    for j in 0..n {
        a.swap(r1 * n + j, r2 * n + j);
    }
}

/// Inverse of an `n × n` matrix by Gauss-Jordan elimination with partial
/// pivoting
///
/// A pivot whose norm is at or below `ε · max |aᵢⱼ|` marks the matrix as
/// singular and fails with [`Error::Singular`]. The threshold is relative to
/// the largest entry of the whole matrix, so a badly scaled but exactly
/// invertible matrix such as `diag(1e-20, 1)` is rejected as well.
pub fn invert<T: Field + Norm>(a: &[T], n: usize) -> Result<Vec<T>> {
    if a.len() != n * n {
        return Err(Error::shape_mismatch(&[n, n], &[a.len()]));
    }

    let mut work = a.to_vec();
    let mut inv = vec![T::zero(); n * n];
    for i in 0..n {
        inv[i * n + i] = T::unity();
    }

    let threshold = T::Component::epsilon() * max_norm(a);

    for k in 0..n {
        let (row, pivot_norm) = pivot_row(&work, n, k);
        if pivot_norm <= threshold || pivot_norm.is_nan() {
            debug!(column = k, pivot = pivot_norm.as_f64(), "singular pivot");
            return Err(Error::Singular { op: "invert" });
        }
        swap_rows(&mut work, n, k, row);
        swap_rows(&mut inv, n, k, row);

        // Scale the pivot row so the pivot becomes unity
        let p_inv = work[k * n + k].invert();
        for j in 0..n {
            work[k * n + j] = p_inv * work[k * n + j];
            inv[k * n + j] = p_inv * inv[k * n + j];
        }

        // Clear column k from every other row
        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = work[i * n + k];
            if factor.is_zero() {
                continue;
            }
            for j in 0..n {
                work[i * n + j] = work[i * n + j] - factor * work[k * n + j];
                inv[i * n + j] = inv[i * n + j] - factor * inv[k * n + j];
            }
        }
    }

    Ok(inv)
}

/// Determinant by LU elimination with partial pivoting
///
/// Returns the product of the pivots in elimination order, negated once per
/// row swap. For commutative members that is the determinant; for
/// quaternions and octonions it is the elimination determinant, which is not
/// multiplicative in general. A zero pivot column gives zero.
pub fn determinant<T: Field + Norm>(a: &[T], n: usize) -> Result<T> {
    if a.len() != n * n {
        return Err(Error::shape_mismatch(&[n, n], &[a.len()]));
    }

    let mut lu = a.to_vec();
    let mut det = T::unity();

    for k in 0..n {
        let (row, pivot_norm) = pivot_row(&lu, n, k);
        if pivot_norm.is_zero() {
            return Ok(T::zero());
        }
        if row != k {
            swap_rows(&mut lu, n, k, row);
            det = -det;
        }

        let pivot = lu[k * n + k];
        let p_inv = pivot.invert();
        for i in (k + 1)..n {
            let factor = lu[i * n + k] * p_inv;
            if factor.is_zero() {
                continue;
            }
            for j in k..n {
                lu[i * n + j] = lu[i * n + j] - factor * lu[k * n + j];
            }
        }
        det = det * pivot;
    }

    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{Complex128, Quaternion256};
    use crate::ops::Ring;

    fn matmul<T: Field>(a: &[T], b: &[T], n: usize) -> Vec<T> {
        let mut c = vec![T::zero(); n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum + a[i * n + k] * b[k * n + j];
                }
                c[i * n + j] = sum;
            }
        }
        c
    }

    #[test]
    fn test_invert_real() {
        let a = [4.0f64, 7.0, 2.0, 6.0];
        let inv = invert(&a, 2).unwrap();
        let expected = [0.6, -0.7, -0.2, 0.4];
        for (x, y) in inv.iter().zip(expected) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invert_needs_pivoting() {
        let a = [0.0f64, 1.0, 1.0, 0.0];
        assert_eq!(invert(&a, 2).unwrap(), vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_invert_singular() {
        let a = [1.0f64, 2.0, 2.0, 4.0];
        assert_eq!(invert(&a, 2), Err(Error::Singular { op: "invert" }));
        assert_eq!(determinant(&a, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_invert_badly_scaled_is_singular() {
        let a = [1e-20f64, 0.0, 0.0, 1.0];
        assert_eq!(invert(&a, 2), Err(Error::Singular { op: "invert" }));
    }

    #[test]
    fn test_invert_huge_pivot() {
        let a = [Complex128::new(1e160, 0.0)];
        let inv = invert(&a, 1).unwrap();
        assert!((inv[0] * a[0] - Complex128::unity()).norm() < 1e-15);
        assert!((inv[0].re / 1e-160 - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_invert_quaternion() {
        let q = Quaternion256::new;
        let a = [
            q(1.0, 2.0, 0.0, -1.0),
            q(0.0, 1.0, 1.0, 0.0),
            q(2.0, 0.0, -1.0, 3.0),
            q(1.0, 1.0, 1.0, 1.0),
        ];
        let inv = invert(&a, 2).unwrap();
        for product in [matmul(&a, &inv, 2), matmul(&inv, &a, 2)] {
            for i in 0..2 {
                for j in 0..2 {
                    let expected = if i == j {
                        Quaternion256::unity()
                    } else {
                        Quaternion256::zero()
                    };
                    assert!((product[i * 2 + j] - expected).norm() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_determinant() {
        // 2·(3·2 - 2·1) - 0 + 1·(1·1 - 3·1) = 6
        let a = [2.0f64, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0];
        assert!((determinant(&a, 3).unwrap() - 6.0).abs() < 1e-12);

        let singular = [2.0f64, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0];
        assert!(determinant(&singular, 3).unwrap().abs() < 1e-12);

        let c = Complex128::new;
        let m = [c(1.0, 1.0), c(2.0, 0.0), c(0.0, 1.0), c(1.0, -1.0)];
        // (1+i)(1-i) - 2i = 2 - 2i
        let det = determinant(&m, 2).unwrap();
        assert!((det - c(2.0, -2.0)).norm() < 1e-12);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(invert(&[1.0f64, 2.0, 3.0], 2).is_err());
    }
}
