use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum LinalgError {
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// Operand shapes are incompatible, given as `(rows, cols)` for each side.
    #[error("dimension mismatch: {}x{} and {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("{rows}x{cols} matrix has more elements than fit in usize")]
    SizeOverflow { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, LinalgError>;

#[test]
fn test_error_messages() {
    let err = LinalgError::DimensionMismatch {
        left: (2, 3),
        right: (3, 2),
    };
    assert_eq!(err.to_string(), "dimension mismatch: 2x3 and 3x2");

    let err = LinalgError::OutOfBounds {
        row: 4,
        col: 0,
        rows: 2,
        cols: 2,
    };
    assert_eq!(err.to_string(), "index (4, 0) out of bounds for 2x2 matrix");
}
