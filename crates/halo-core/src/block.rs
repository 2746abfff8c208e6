//! Axis-aligned strips cut from a grid.

use crate::axis::Axis;
use crate::element::Element;
use crate::error::GridError;
use std::ops::Range;

/// A row-major strip of elements that, unlike a [`Grid`](crate::Grid),
/// may be empty along one axis.
///
/// Blocks are what edge transforms read from the inside of a boundary,
/// tile, crop, and write back into the boundary region. A zero-length
/// block is the natural result of asking for zero rows of padding.
#[derive(Clone, Debug, PartialEq)]
pub struct Block<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> Block<T> {
    /// Wrap a row-major buffer of `rows * cols` elements.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GridError> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// A `rows x cols` block with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self::from_parts(rows, cols, vec![value; rows * cols])
    }

    /// A strip `along` long on `axis` and `across` wide on the other axis,
    /// filled with [`Element::ZERO`].
    pub fn zeros(axis: Axis, along: usize, across: usize) -> Self {
        match axis {
            Axis::Row => Self::filled(along, across, T::ZERO),
            Axis::Col => Self::filled(across, along, T::ZERO),
        }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length along `axis`.
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.rows,
            Axis::Col => self.cols,
        }
    }

    /// `true` if the block holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Repeat the block `times` times end to end along `axis`.
    pub fn tile(&self, axis: Axis, times: usize) -> Block<T> {
        match axis {
            Axis::Row => Self::from_parts(self.rows * times, self.cols, self.data.repeat(times)),
            Axis::Col => {
                let cols = self.cols * times;
                let mut data = Vec::with_capacity(self.rows * cols);
                for row in self.data.chunks_exact(self.cols.max(1)).take(self.rows) {
                    for _ in 0..times {
                        data.extend_from_slice(row);
                    }
                }
                Self::from_parts(self.rows, cols, data)
            }
        }
    }

    /// Keep only `range` along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `range` extends past the block's extent along `axis`.
    pub fn slice(&self, axis: Axis, range: Range<usize>) -> Block<T> {
        assert!(
            range.start <= range.end && range.end <= self.extent(axis),
            "{axis} range {range:?} outside block extent {}",
            self.extent(axis)
        );
        let len = range.end - range.start;
        match axis {
            Axis::Row => Self::from_parts(
                len,
                self.cols,
                self.data[range.start * self.cols..range.end * self.cols].to_vec(),
            ),
            Axis::Col => {
                let mut data = Vec::with_capacity(self.rows * len);
                for r in 0..self.rows {
                    let base = r * self.cols;
                    data.extend_from_slice(&self.data[base + range.start..base + range.end]);
                }
                Self::from_parts(self.rows, len, data)
            }
        }
    }

    pub(crate) fn into_parts(self) -> (usize, usize, Vec<T>) {
        (self.rows, self.cols, self.data)
    }
}
