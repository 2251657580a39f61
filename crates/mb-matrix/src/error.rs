use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid dimension: {rows}x{cols} (both extents must be positive)")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("index ({i}, {j}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        i: usize,
        j: usize,
        rows: usize,
        cols: usize,
    },
    #[error("dimension mismatch: [{m}x{k}] * [{k2}x{n}]")]
    DimensionMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("unsupported shape: {rows}x{cols} cannot be halved evenly down to a {base}-edge base case")]
    UnsupportedShape {
        rows: usize,
        cols: usize,
        base: usize,
    },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
