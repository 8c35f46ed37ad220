/// Matrix Kernel: Limits and Dimension Arithmetic
///
/// Dimensions arrive as i64 and are stored as usize.
/// All cell-count arithmetic is checked; nothing wraps.

use crate::error::{MatrixError, Result};

/// Default cap on the number of cells a single matrix may hold.
pub const DEFAULT_MAX_CELLS: usize = 1 << 28;

/// Construction limits, injected via `Matrix::from_fn_with_limits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixLimits {
    pub max_cells: usize,
}

impl Default for MatrixLimits {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl MatrixLimits {
    /// Validate a `width x height` request and return `(width, height, cells)`
    /// in storage units.
    pub fn check_dimensions(&self, width: i64, height: i64) -> Result<(usize, usize, usize)> {
        let invalid = || MatrixError::InvalidDimension { width, height };
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;
        let cells = w.checked_mul(h).ok_or_else(invalid)?;
        if cells > self.max_cells {
            return Err(MatrixError::CapacityExceeded {
                cells,
                max_cells: self.max_cells,
            });
        }
        Ok((w, h, cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimensions_ok() {
        let limits = MatrixLimits::default();
        assert_eq!(limits.check_dimensions(3, 4), Ok((3, 4, 12)));
        assert_eq!(limits.check_dimensions(0, 7), Ok((0, 7, 0)));
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let limits = MatrixLimits::default();
        assert_eq!(
            limits.check_dimensions(-1, 3),
            Err(MatrixError::InvalidDimension {
                width: -1,
                height: 3
            })
        );
        assert!(limits.check_dimensions(3, -1).is_err());
    }

    #[test]
    fn test_overflow_is_invalid_dimension() {
        let limits = MatrixLimits {
            max_cells: usize::MAX,
        };
        assert_eq!(
            limits.check_dimensions(i64::MAX, i64::MAX),
            Err(MatrixError::InvalidDimension {
                width: i64::MAX,
                height: i64::MAX
            })
        );
    }

    #[test]
    fn test_capacity_exceeded() {
        let limits = MatrixLimits { max_cells: 10 };
        assert_eq!(
            limits.check_dimensions(4, 3),
            Err(MatrixError::CapacityExceeded {
                cells: 12,
                max_cells: 10
            })
        );
    }
}
