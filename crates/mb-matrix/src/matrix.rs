use crate::error::{MatrixError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cache line size assumed for row padding, in bytes.
pub const CACHE_LINE_BYTES: usize = 64;

/// Number of `i32` elements per cache line (the alignment unit).
pub const ALIGN_ELEMS: usize = CACHE_LINE_BYTES / std::mem::size_of::<i32>();

/// A dense row-major matrix of `i32`.
///
/// Rows are stored back to back with a stride that may exceed the logical
/// column count: aligned construction pads each row up to the next multiple
/// of [`ALIGN_ELEMS`] so that every row starts on a cache-line boundary.
/// Element `(i, j)` lives at offset `i * row_stride + j`; the padding slots
/// `[cols, row_stride)` of each row are allocated but never addressed
/// through the logical interface.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    row_stride: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Create a zero-filled matrix with cache-line-aligned row stride.
    ///
    /// # Errors
    /// Returns `InvalidDimension` if either extent is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::with_stride(rows, cols, true)
    }

    /// Create a zero-filled matrix with no row padding (`row_stride == cols`).
    ///
    /// # Errors
    /// Returns `InvalidDimension` if either extent is zero.
    pub fn new_unaligned(rows: usize, cols: usize) -> Result<Self> {
        Self::with_stride(rows, cols, false)
    }

    fn with_stride(rows: usize, cols: usize, align: bool) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        let row_stride = if align {
            cols.div_ceil(ALIGN_ELEMS) * ALIGN_ELEMS
        } else {
            cols
        };
        Ok(Matrix {
            rows,
            cols,
            row_stride,
            data: vec![0; rows * row_stride],
        })
    }

    /// Build an aligned matrix from explicit row data.
    ///
    /// # Errors
    /// Returns `InvalidDimension` if `values` is empty, any row is empty,
    /// or the rows are not all the same length.
    pub fn from_rows(values: &[Vec<i32>]) -> Result<Self> {
        let rows = values.len();
        let cols = values.first().map_or(0, Vec::len);
        if values.iter().any(|r| r.len() != cols) {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        let mut m = Self::new(rows, cols)?;
        for (i, row) in values.iter().enumerate() {
            m.row_mut(i).copy_from_slice(row);
        }
        Ok(m)
    }

    /// Fill every logical cell with a uniform random value in `[0, 99]`.
    ///
    /// Draws from the process-local entropy source, so repeated calls
    /// produce different contents. Padding slots are left untouched.
    pub fn fill(&mut self) {
        let mut rng = rand::thread_rng();
        self.fill_from(&mut rng);
    }

    /// Deterministic variant of [`fill`](Self::fill): the same seed always
    /// produces the same matrix contents.
    pub fn fill_seeded(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.fill_from(&mut rng);
    }

    fn fill_from<R: Rng>(&mut self, rng: &mut R) {
        for i in 0..self.rows {
            for cell in self.row_mut(i) {
                *cell = rng.gen_range(0..100);
            }
        }
    }

    /// Number of logical rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of logical columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Storage slots per row, `>= cols`.
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Bounds-checked element read.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `i >= rows` or `j >= cols`.
    pub fn at(&self, i: usize, j: usize) -> Result<i32> {
        self.check_index(i, j)?;
        Ok(self.data[i * self.row_stride + j])
    }

    /// Bounds-checked mutable element access.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `i >= rows` or `j >= cols`.
    pub fn at_mut(&mut self, i: usize, j: usize) -> Result<&mut i32> {
        self.check_index(i, j)?;
        Ok(&mut self.data[i * self.row_stride + j])
    }

    fn check_index(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.rows || j >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                i,
                j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Logical row `i` as a slice of length `cols`, padding excluded.
    ///
    /// # Panics
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[i32] {
        let start = i * self.row_stride;
        &self.data[start..start + self.cols]
    }

    /// Mutable logical row `i`, padding excluded.
    ///
    /// # Panics
    /// Panics if `i >= rows`.
    pub fn row_mut(&mut self, i: usize) -> &mut [i32] {
        let start = i * self.row_stride;
        &mut self.data[start..start + self.cols]
    }

    /// The full strided backing store, padding included.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Mutable access to the full strided backing store.
    ///
    /// Rows occupy disjoint `row_stride`-sized chunks, which is what lets
    /// the parallel blocked kernel hand non-overlapping row bands to
    /// different workers.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// The `rows * cols` logical values in row-major order, with any
    /// stride padding stripped. This is the portable view used for
    /// comparison and printing.
    pub fn to_vec(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.rows * self.cols);
        for i in 0..self.rows {
            out.extend_from_slice(self.row(i));
        }
        out
    }
}

/// Equality over logical content only; stride and padding are ignored.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && (0..self.rows).all(|i| self.row(i) == other.row(i))
    }
}

impl Eq for Matrix {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_stride() {
        // Smallest multiple of ALIGN_ELEMS >= cols.
        let cases = [(1, 16), (15, 16), (16, 16), (17, 32), (100, 112)];
        for (cols, expected) in cases {
            let m = Matrix::new(3, cols).unwrap();
            assert_eq!(m.row_stride(), expected, "cols = {}", cols);
            assert_eq!(m.as_slice().len(), 3 * expected);
        }
    }

    #[test]
    fn test_unaligned_stride() {
        let m = Matrix::new_unaligned(4, 17).unwrap();
        assert_eq!(m.row_stride(), 17);
        assert_eq!(m.as_slice().len(), 4 * 17);
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(matches!(
            Matrix::new(0, 5),
            Err(MatrixError::InvalidDimension { rows: 0, cols: 5 })
        ));
        assert!(matches!(
            Matrix::new(5, 0),
            Err(MatrixError::InvalidDimension { rows: 5, cols: 0 })
        ));
        assert!(Matrix::new_unaligned(0, 0).is_err());
    }

    #[test]
    fn test_zero_initialized() {
        let m = Matrix::new(3, 20).unwrap();
        assert!(m.as_slice().iter().all(|&v| v == 0));
        assert_eq!(m.to_vec(), vec![0; 60]);
    }

    #[test]
    fn test_at_bounds() {
        let mut m = Matrix::new(2, 3).unwrap();
        *m.at_mut(1, 2).unwrap() = 7;
        assert_eq!(m.at(1, 2).unwrap(), 7);
        assert!(matches!(
            m.at(2, 0),
            Err(MatrixError::IndexOutOfRange { i: 2, j: 0, .. })
        ));
        assert!(matches!(
            m.at(0, 3),
            Err(MatrixError::IndexOutOfRange { i: 0, j: 3, .. })
        ));
        assert!(m.at_mut(2, 3).is_err());
    }

    #[test]
    fn test_fill_range_and_padding() {
        let mut m = Matrix::new(5, 17).unwrap();
        m.fill();
        let logical = m.to_vec();
        assert_eq!(logical.len(), 5 * 17);
        assert!(logical.iter().all(|&v| (0..100).contains(&v)));
        // Padding slots [cols, row_stride) stay zero.
        for i in 0..m.rows() {
            let start = i * m.row_stride();
            let pad = &m.as_slice()[start + m.cols()..start + m.row_stride()];
            assert!(pad.iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_fill_seeded_reproducible() {
        let mut a = Matrix::new(8, 8).unwrap();
        let mut b = Matrix::new(8, 8).unwrap();
        a.fill_seeded(42);
        b.fill_seeded(42);
        assert_eq!(a, b);

        let mut c = Matrix::new(8, 8).unwrap();
        c.fill_seeded(43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.at(0, 1).unwrap(), 2);
        assert_eq!(m.at(1, 0).unwrap(), 3);
        assert_eq!(m.row_stride(), ALIGN_ELEMS);

        assert!(Matrix::from_rows(&[]).is_err());
        assert!(Matrix::from_rows(&[vec![1], vec![2, 3]]).is_err());
    }

    #[test]
    fn test_eq_ignores_stride() {
        let a = Matrix::from_rows(&[vec![1, 2, 3]]).unwrap();
        let mut b = Matrix::new_unaligned(1, 3).unwrap();
        b.row_mut(0).copy_from_slice(&[1, 2, 3]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_to_vec_row_major() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(m.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }
}
