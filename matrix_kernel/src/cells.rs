/// Matrix Kernel: Row-Major Cell Cursor
///
/// State {x, y} starts at (0, 0). Each step emits the current cell and
/// advances x; when x reaches width it resets to 0 and y increments.
/// Terminal state: y == height. A zero-width matrix starts terminal.

use std::fmt;
use std::iter::FusedIterator;

use crate::matrix::Matrix;

/// One `{x, y, value}` triple produced by iteration.
#[derive(PartialEq, Eq, Hash)]
pub struct Cell<'a, T> {
    pub x: i64,
    pub y: i64,
    pub value: &'a T,
}

// Manual impls: a borrowed cell is copyable whatever `T` is.
impl<T> Clone for Cell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cell<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {:?})", self.x, self.y, self.value)
    }
}

/// Single-pass cursor over a matrix. Obtain a new one from
/// `Matrix::iter` for every traversal.
pub struct Cells<'a, T> {
    matrix: &'a Matrix<T>,
    x: i64,
    y: i64,
}

impl<'a, T> Cells<'a, T> {
    pub(crate) fn new(matrix: &'a Matrix<T>) -> Self {
        let y = if matrix.width() == 0 { matrix.height() } else { 0 };
        Self { matrix, x: 0, y }
    }

    /// True while the cursor has not reached its terminal state.
    pub fn has_next(&self) -> bool {
        self.y < self.matrix.height()
    }

    fn remaining(&self) -> usize {
        if !self.has_next() {
            return 0;
        }
        let width = self.matrix.width() as usize;
        let rows_left = (self.matrix.height() - self.y) as usize;
        rows_left * width - self.x as usize
    }
}

impl<'a, T> Iterator for Cells<'a, T> {
    type Item = Cell<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let width = self.matrix.width();
        let offset = (self.y * width + self.x) as usize;
        let cell = Cell {
            x: self.x,
            y: self.y,
            value: &self.matrix.as_slice()[offset],
        };

        self.x += 1;
        if self.x == width {
            self.x = 0;
            self.y += 1;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Cells<'_, T> {}

impl<T> FusedIterator for Cells<'_, T> {}
