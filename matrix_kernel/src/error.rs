/// Matrix Kernel: Error Taxonomy
///
/// Every failure is synchronous and leaves the matrix untouched.

use thiserror::Error;

/// Failures surfaced by matrix construction, access and adoption.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Negative dimension, or a `width * height` that does not fit in memory indexing.
    #[error("Invalid dimension: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    /// Coordinate outside `[0, width) x [0, height)`.
    #[error("Coordinate ({x}, {y}) out of bounds for {width}x{height} matrix")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },

    /// Cell count above the configured cap.
    #[error("Matrix of {cells} cells exceeds the limit of {max_cells}")]
    CapacityExceeded { cells: usize, max_cells: usize },

    /// Supplied content does not cover the grid exactly.
    #[error("Content length mismatch: expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Matrix is not square: {width}x{height}")]
    NotSquare { width: i64, height: i64 },

    /// `get(x, y) != get(y, x)` for the reported pair.
    #[error("Asymmetric cell pair: ({x}, {y}) differs from ({y}, {x})")]
    AsymmetricCell { x: i64, y: i64 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_coordinates() {
        let err = MatrixError::OutOfBounds {
            x: 5,
            y: 5,
            width: 2,
            height: 2,
        };
        assert_eq!(
            err.to_string(),
            "Coordinate (5, 5) out of bounds for 2x2 matrix"
        );

        let err = MatrixError::AsymmetricCell { x: 3, y: 1 };
        assert_eq!(
            err.to_string(),
            "Asymmetric cell pair: (3, 1) differs from (1, 3)"
        );
    }
}
