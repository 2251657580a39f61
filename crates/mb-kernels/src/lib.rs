//! `mb-kernels` - Matrix multiplication engines for matmul-bench.
//!
//! Three interchangeable algorithms over the same `(A, B) -> C` contract:
//! - `matmul_naive`: single-threaded i-j-k triple loop, the correctness
//!   baseline
//! - `matmul_blocked`: cache-blocked tiles sized to L1, optionally
//!   parallelized over disjoint row bands of `C`
//! - `matmul_recursive`: sequential 8-way divide-and-conquer
//!
//! All three fail with `DimensionMismatch` when the inner dimensions
//! disagree and return a freshly constructed result matrix otherwise.

pub mod blocked;
pub mod naive;
pub mod recursive;

pub use blocked::{matmul_blocked, PARALLEL_THRESHOLD};
pub use naive::matmul_naive;
pub use recursive::{matmul_recursive, RECURSION_BASE};

use mb_matrix::{Matrix, MatrixError, Result};

/// Shared inner-dimension check: `A.cols` must equal `B.rows`.
pub(crate) fn check_mul_dims(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            m: a.rows(),
            k: a.cols(),
            k2: b.rows(),
            n: b.cols(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_mul_dims() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(3, 4).unwrap();
        assert!(check_mul_dims(&a, &b).is_ok());

        let bad = Matrix::new(4, 2).unwrap();
        assert!(matches!(
            check_mul_dims(&a, &bad),
            Err(MatrixError::DimensionMismatch {
                m: 2,
                k: 3,
                k2: 4,
                n: 2
            })
        ));
    }
}
