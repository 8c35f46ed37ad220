/// Matrix Kernel: Row-Major Grid Container
///
/// Flat storage: cell (x, y) lives at content[y * width + x].
/// Every cell is populated at construction; afterwards a cell changes
/// only through `set` or `get_mut`, which address exactly one slot.

use log::debug;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::cells::Cells;
use crate::error::{MatrixError, Result};
use crate::limits::MatrixLimits;

/// Fixed-size 2D grid over an arbitrary element type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Matrix<T> {
    width: usize,
    height: usize,
    content: Vec<T>,
}

/// Wire shape accepted by `Deserialize`; validated through `Matrix::from_vec`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MatrixRepr<T> {
    width: i64,
    height: i64,
    content: Vec<T>,
}

impl<T: Default> Matrix<T> {
    /// Build a `width x height` matrix with every cell set to `T::default()`.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        Self::from_fn(width, height, |_, _| T::default())
    }
}

impl<T> Matrix<T> {
    /// Build a matrix by calling `element(x, y)` once per cell, row-major
    /// (`y` outer, `x` inner).
    pub fn from_fn<F>(width: i64, height: i64, element: F) -> Result<Self>
    where
        F: FnMut(i64, i64) -> T,
    {
        Self::from_fn_with_limits(width, height, &MatrixLimits::default(), element)
    }

    /// `from_fn` with explicit construction limits.
    pub fn from_fn_with_limits<F>(
        width: i64,
        height: i64,
        limits: &MatrixLimits,
        mut element: F,
    ) -> Result<Self>
    where
        F: FnMut(i64, i64) -> T,
    {
        let (w, h, cells) = limits.check_dimensions(width, height).map_err(|e| {
            debug!("Rejected matrix construction: {}", e);
            e
        })?;

        let mut content = Vec::with_capacity(cells);
        for y in 0..height {
            for x in 0..width {
                content.push(element(x, y));
            }
        }

        debug!("Built {}x{} matrix ({} cells)", w, h, cells);
        Ok(Self {
            width: w,
            height: h,
            content,
        })
    }

    /// Adopt an existing row-major vector as a `width x height` matrix.
    pub fn from_vec(width: i64, height: i64, content: Vec<T>) -> Result<Self> {
        let (w, h, cells) = MatrixLimits::default().check_dimensions(width, height)?;
        if content.len() != cells {
            debug!(
                "Rejected {}x{} content of length {}",
                w,
                h,
                content.len()
            );
            return Err(MatrixError::LengthMismatch {
                expected: cells,
                actual: content.len(),
            });
        }
        Ok(Self {
            width: w,
            height: h,
            content,
        })
    }

    pub fn width(&self) -> i64 {
        self.width as i64
    }

    pub fn height(&self) -> i64 {
        self.height as i64
    }

    /// Number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[T] {
        &self.content
    }

    pub fn into_vec(self) -> Vec<T> {
        self.content
    }

    /// Value stored at (x, y).
    pub fn get(&self, x: i64, y: i64) -> Result<&T> {
        let offset = self.offset(x, y)?;
        Ok(&self.content[offset])
    }

    pub fn get_mut(&mut self, x: i64, y: i64) -> Result<&mut T> {
        let offset = self.offset(x, y)?;
        Ok(&mut self.content[offset])
    }

    /// Overwrite the single cell at (x, y). Nothing is written on error.
    pub fn set(&mut self, x: i64, y: i64, value: T) -> Result<()> {
        let offset = self.offset(x, y)?;
        self.content[offset] = value;
        Ok(())
    }

    /// Fresh row-major cursor starting at (0, 0).
    pub fn iter(&self) -> Cells<'_, T> {
        Cells::new(self)
    }

    /// Storage offset of (x, y), or `OutOfBounds`.
    fn offset(&self, x: i64, y: i64) -> Result<usize> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            debug!(
                "Coordinate ({}, {}) outside {}x{} matrix",
                x, y, self.width, self.height
            );
            return Err(MatrixError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(y as usize * self.width + x as usize)
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = crate::cells::Cell<'a, T>;
    type IntoIter = Cells<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = MatrixRepr::<T>::deserialize(deserializer)?;
        Matrix::from_vec(repr.width, repr.height, repr.content).map_err(de::Error::custom)
    }
}
