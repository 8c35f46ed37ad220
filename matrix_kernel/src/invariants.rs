/// Matrix Kernel: Invariant Checks
///
/// Shape and symmetry validation used when a plain matrix is adopted
/// as a symmetric one. Returns the first failure found.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Width must equal height.
pub fn check_square<T>(matrix: &Matrix<T>) -> Result<()> {
    if matrix.width() != matrix.height() {
        return Err(MatrixError::NotSquare {
            width: matrix.width(),
            height: matrix.height(),
        });
    }
    Ok(())
}

/// Square, and get(x, y) == get(y, x) everywhere.
///
/// Scans the x > y half row by row; the first mismatching (x, y)
/// is reported.
pub fn check_symmetric<T: PartialEq>(matrix: &Matrix<T>) -> Result<()> {
    check_square(matrix)?;
    let n = matrix.width() as usize;
    let content = matrix.as_slice();
    for y in 0..n {
        for x in (y + 1)..n {
            if content[y * n + x] != content[x * n + y] {
                return Err(MatrixError::AsymmetricCell {
                    x: x as i64,
                    y: y as i64,
                });
            }
        }
    }
    Ok(())
}

pub fn is_symmetric<T: PartialEq>(matrix: &Matrix<T>) -> bool {
    check_symmetric(matrix).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_check() {
        let m: Matrix<u8> = Matrix::new(2, 3).unwrap();
        assert_eq!(
            check_square(&m),
            Err(MatrixError::NotSquare {
                width: 2,
                height: 3
            })
        );
        let m: Matrix<u8> = Matrix::new(0, 0).unwrap();
        assert!(check_square(&m).is_ok());
    }

    #[test]
    fn test_reports_first_asymmetric_pair() {
        // Row 0 is fine; row 1 has (2, 1) != (1, 2).
        let m = Matrix::from_vec(3, 3, vec![1, 2, 3, 2, 5, 6, 3, 7, 9]).unwrap();
        assert_eq!(
            check_symmetric(&m),
            Err(MatrixError::AsymmetricCell { x: 2, y: 1 })
        );
        assert!(!is_symmetric(&m));
    }

    #[test]
    fn test_generated_symmetric_passes() {
        let m = Matrix::from_fn(4, 4, |x, y| x.max(y) * 10 + x.min(y)).unwrap();
        assert!(is_symmetric(&m));
        let m = Matrix::from_fn(4, 4, |x, y| x - y).unwrap();
        assert!(!is_symmetric(&m));
    }
}
