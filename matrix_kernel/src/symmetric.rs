/// Matrix Kernel: Symmetric Matrix
///
/// Square matrix that keeps get(x, y) == get(y, x) for its whole lifetime.
/// Composition over `Matrix`: reads delegate, writes are mirrored.
///
/// Only two paths change cell values, and both preserve symmetry:
///   1. construction (`new`, `from_fn`, `TryFrom<Matrix>`)
///   2. `set`
/// No mutable view of the inner matrix is ever handed out.

use log::{debug, trace};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::cells::{Cell, Cells};
use crate::error::{MatrixError, Result};
use crate::invariants::check_symmetric;
use crate::limits::MatrixLimits;
use crate::matrix::Matrix;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymmetricMatrix<T> {
    inner: Matrix<T>,
}

impl<T: Default> SymmetricMatrix<T> {
    /// `size x size` matrix with every cell set to `T::default()`.
    pub fn new(size: i64) -> Result<Self> {
        let inner = Matrix::new(size, size)?;
        Ok(Self { inner })
    }
}

impl<T: Clone> SymmetricMatrix<T> {
    /// Build a `size x size` matrix from a generator that never needs to
    /// know about symmetry.
    ///
    /// `element(x, y)` is only called for cells with `x >= y`, in row-major
    /// order, once per unordered pair. A cell with `x < y` is a copy of the
    /// already-built cell `(y, x)`.
    pub fn from_fn<F>(size: i64, mut element: F) -> Result<Self>
    where
        F: FnMut(i64, i64) -> T,
    {
        let (n, _, cells) = MatrixLimits::default()
            .check_dimensions(size, size)
            .map_err(|e| {
                debug!("Rejected symmetric matrix construction: {}", e);
                e
            })?;

        let mut content: Vec<T> = Vec::with_capacity(cells);
        for y in 0..n {
            for x in 0..n {
                let value = if x < y {
                    // Mirror (y, x) sits in row x < y: already pushed.
                    content[x * n + y].clone()
                } else {
                    element(x as i64, y as i64)
                };
                content.push(value);
            }
        }

        let inner = Matrix::from_vec(size, size, content)?;
        debug!("Built {}x{} symmetric matrix", n, n);
        Ok(Self { inner })
    }

    /// Write (x, y) and, off the diagonal, mirror the write to (y, x).
    /// Nothing is written on error.
    pub fn set(&mut self, x: i64, y: i64, value: T) -> Result<()> {
        // Square: (x, y) in bounds implies (y, x) in bounds.
        self.inner.get(x, y)?;
        if x != y {
            trace!("Mirroring write ({}, {}) -> ({}, {})", x, y, y, x);
            self.inner.set(y, x, value.clone())?;
        }
        self.inner.set(x, y, value)
    }
}

impl<T> SymmetricMatrix<T> {
    /// Side length.
    pub fn size(&self) -> i64 {
        self.inner.width()
    }

    pub fn get(&self, x: i64, y: i64) -> Result<&T> {
        self.inner.get(x, y)
    }

    pub fn iter(&self) -> Cells<'_, T> {
        self.inner.iter()
    }

    /// Read-only view as a plain matrix.
    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.inner
    }

    /// Give up the symmetry guarantee and return the plain matrix.
    pub fn into_matrix(self) -> Matrix<T> {
        self.inner
    }
}

impl<T> AsRef<Matrix<T>> for SymmetricMatrix<T> {
    fn as_ref(&self) -> &Matrix<T> {
        &self.inner
    }
}

impl<'a, T> IntoIterator for &'a SymmetricMatrix<T> {
    type Item = Cell<'a, T>;
    type IntoIter = Cells<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: PartialEq> TryFrom<Matrix<T>> for SymmetricMatrix<T> {
    type Error = MatrixError;

    /// Adopt a matrix that is already square and symmetric.
    fn try_from(matrix: Matrix<T>) -> Result<Self> {
        check_symmetric(&matrix).map_err(|e| {
            debug!("Rejected symmetric adoption: {}", e);
            e
        })?;
        Ok(Self { inner: matrix })
    }
}

impl<T: Serialize> Serialize for SymmetricMatrix<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for SymmetricMatrix<T>
where
    T: Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = Matrix::<T>::deserialize(deserializer)?;
        Self::try_from(inner).map_err(de::Error::custom)
    }
}
