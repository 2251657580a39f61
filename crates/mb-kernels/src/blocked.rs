use crate::check_mul_dims;
use mb_matrix::{Matrix, MatrixError, Result, ALIGN_ELEMS};
use rayon::prelude::*;

/// Below this edge length the blocked algorithm always runs on one
/// thread; worker startup and scheduling cost more than they recover.
pub const PARALLEL_THRESHOLD: usize = 512;

/// Cache-blocked matrix multiplication with optional multithreading.
///
/// The `rows x cols x inner` index space is partitioned into cubic tiles
/// of edge `block_size` (clamped to the matrix edge and rounded down to
/// the cache-line alignment unit). Each tile runs an `(ii, kk, jj)`
/// micro-kernel: `A[ii][kk]` is hoisted into a local while the innermost
/// loop scans a row of `B` and a row of `C` contiguously, so a tile's
/// working set stays inside L1.
///
/// With more than one effective worker, `C`'s backing store is split into
/// row bands of `block_size` rows. Bands are disjoint slices, so workers
/// write `C` without locks; `A` and `B` are shared read-only. Band
/// scheduling is work-stealing, and the call returns only after every
/// band completes. Requested thread counts are clamped to
/// `[1, available_parallelism]` and forced to 1 below
/// [`PARALLEL_THRESHOLD`].
///
/// Designed and validated for square operands of common edge `n`;
/// non-square inputs are outside the validated envelope.
///
/// # Errors
/// Returns `DimensionMismatch` if `a.cols() != b.rows()`.
pub fn matmul_blocked(
    a: &Matrix,
    b: &Matrix,
    block_size: usize,
    num_threads: usize,
) -> Result<Matrix> {
    check_mul_dims(a, b)?;
    let n_rows = a.rows();
    let n_cols = b.cols();
    let n_inner = a.cols();

    let mut c = Matrix::new(n_rows, n_cols)?;
    let bs = effective_block(block_size, n_rows);
    let threads = effective_threads(num_threads, n_rows);
    let stride = c.row_stride();

    // Row bands of `bs` rows each; the last band may be shorter. Every
    // band is a disjoint chunk of the backing store, which is the whole
    // data-race argument: no two workers ever hold the same (i, j) cell.
    let band_len = bs * stride;
    if threads == 1 {
        for (band, chunk) in c.as_mut_slice().chunks_mut(band_len).enumerate() {
            multiply_band(chunk, band * bs, a, b, bs, stride, n_cols, n_inner);
        }
        return Ok(c);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| MatrixError::Other(format!("worker pool: {}", e)))?;
    pool.install(|| {
        c.as_mut_slice()
            .par_chunks_mut(band_len)
            .enumerate()
            .for_each(|(band, chunk)| {
                multiply_band(chunk, band * bs, a, b, bs, stride, n_cols, n_inner);
            });
    });
    Ok(c)
}

/// Multiply one row band: rows `[i0, i0 + band_rows)` of `C`, held in
/// `band` as a strided slice starting at row `i0`. The band is zero on
/// entry (fresh output matrix), and inner tiles accumulate in ascending
/// `k` order.
#[allow(clippy::too_many_arguments)]
fn multiply_band(
    band: &mut [i32],
    i0: usize,
    a: &Matrix,
    b: &Matrix,
    bs: usize,
    stride: usize,
    n_cols: usize,
    n_inner: usize,
) {
    let band_rows = band.len().div_ceil(stride).min(a.rows() - i0);
    for j in (0..n_cols).step_by(bs) {
        let j_max = (j + bs).min(n_cols);
        for k in (0..n_inner).step_by(bs) {
            let k_max = (k + bs).min(n_inner);
            for ii in 0..band_rows {
                let a_row = a.row(i0 + ii);
                let c_row = &mut band[ii * stride..ii * stride + n_cols];
                for kk in k..k_max {
                    let a_ik = a_row[kk];
                    let b_row = b.row(kk);
                    for jj in j..j_max {
                        c_row[jj] += a_ik * b_row[jj];
                    }
                }
            }
        }
    }
}

/// Clamp a requested block size to the matrix edge, rounded down to the
/// alignment unit with a minimum of one unit.
fn effective_block(block_size: usize, n: usize) -> usize {
    let clamped = block_size.max(1).min(n);
    let aligned = (clamped / ALIGN_ELEMS) * ALIGN_ELEMS;
    aligned.max(ALIGN_ELEMS)
}

/// Clamp a requested worker count to the host, forcing a single thread
/// for small matrices.
fn effective_threads(requested: usize, n: usize) -> usize {
    if n < PARALLEL_THRESHOLD {
        return 1;
    }
    let hw = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    requested.clamp(1, hw)
}
