use crate::check_mul_dims;
use mb_matrix::{Matrix, Result};

/// Naive i-j-k matrix multiplication, the correctness baseline.
///
/// Each output cell is accumulated in a local scalar and stored once,
/// instead of read-modify-writing `C` through the inner loop.
///
/// # Errors
/// Returns `DimensionMismatch` if `a.cols() != b.rows()`.
pub fn matmul_naive(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_mul_dims(a, b)?;
    let mut c = Matrix::new(a.rows(), b.cols())?;
    for i in 0..a.rows() {
        let a_row = a.row(i);
        let c_row = c.row_mut(i);
        for (j, out) in c_row.iter_mut().enumerate() {
            let mut sum = 0i32;
            for (k, &a_ik) in a_row.iter().enumerate() {
                sum += a_ik * b.row(k)[j];
            }
            *out = sum;
        }
    }
    Ok(c)
}
