use crate::check_mul_dims;
use mb_matrix::{Matrix, MatrixError, Result};

/// Sub-problems at or below this edge are solved with a direct triple loop.
pub const RECURSION_BASE: usize = 64;

/// Recursive 8-way divide-and-conquer matrix multiplication.
///
/// Splits `C = A * B` into the 2x2x2 block decomposition and recurses on
/// half-sized offsets, passing `C` by exclusive mutable reference down
/// the call tree. Sibling calls targeting the same `C` quadrant
/// accumulate additively, so leaves `+=` their contribution instead of
/// storing. Sequential; recursion depth is `log2(n / base)`.
///
/// # Errors
/// Returns `DimensionMismatch` if `a.cols() != b.rows()`, and
/// `UnsupportedShape` if the operands are not square with a common edge
/// that halves evenly down to [`RECURSION_BASE`]. Shapes like 100
/// (100 -> 50) are accepted; 65 or 1000 are not. Rejecting up front
/// replaces silently dropping the trailing row and column the way a
/// truncating halver would.
pub fn matmul_recursive(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_mul_dims(a, b)?;
    check_halvable(a, b)?;
    let n = a.rows();
    let mut c = Matrix::new(n, n)?;
    multiply_block(a, b, &mut c, 0, 0, 0, 0, 0, 0, n);
    Ok(c)
}

/// Square operands whose edge stays even at every halving step above the
/// base case.
fn check_halvable(a: &Matrix, b: &Matrix) -> Result<()> {
    let unsupported = || MatrixError::UnsupportedShape {
        rows: a.rows(),
        cols: a.cols(),
        base: RECURSION_BASE,
    };
    if a.rows() != a.cols() || b.rows() != b.cols() || a.rows() != b.rows() {
        return Err(unsupported());
    }
    let mut size = a.rows();
    while size > RECURSION_BASE {
        if size % 2 != 0 {
            return Err(unsupported());
        }
        size /= 2;
    }
    Ok(())
}

/// Multiply the `size`-edge block of `A` at `(ra, ca)` with the block of
/// `B` at `(rb, cb)`, accumulating into the block of `C` at `(rc, cc)`.
#[allow(clippy::too_many_arguments)]
fn multiply_block(
    a: &Matrix,
    b: &Matrix,
    c: &mut Matrix,
    ra: usize,
    ca: usize,
    rb: usize,
    cb: usize,
    rc: usize,
    cc: usize,
    size: usize,
) {
    if size <= RECURSION_BASE {
        for i in 0..size {
            let a_row = a.row(ra + i);
            for j in 0..size {
                let mut sum = 0i32;
                for k in 0..size {
                    sum += a_row[ca + k] * b.row(rb + k)[cb + j];
                }
                c.row_mut(rc + i)[cc + j] += sum;
            }
        }
        return;
    }
    let half = size / 2;
    // C00 += A00*B00 + A01*B10
    multiply_block(a, b, c, ra, ca, rb, cb, rc, cc, half);
    multiply_block(a, b, c, ra, ca + half, rb + half, cb, rc, cc, half);
    // C01 += A00*B01 + A01*B11
    multiply_block(a, b, c, ra, ca, rb, cb + half, rc, cc + half, half);
    multiply_block(a, b, c, ra, ca + half, rb + half, cb + half, rc, cc + half, half);
    // C10 += A10*B00 + A11*B10
    multiply_block(a, b, c, ra + half, ca, rb, cb, rc + half, cc, half);
    multiply_block(a, b, c, ra + half, ca + half, rb + half, cb, rc + half, cc, half);
    // C11 += A10*B01 + A11*B11
    multiply_block(a, b, c, ra + half, ca, rb, cb + half, rc + half, cc + half, half);
    multiply_block(
        a,
        b,
        c,
        ra + half,
        ca + half,
        rb + half,
        cb + half,
        rc + half,
        cc + half,
        half,
    );
}
