//! The [`Grid`] buffer.

use crate::axis::Axis;
use crate::block::Block;
use crate::element::Element;
use crate::error::GridError;
use std::ops::{Index, IndexMut, Range};

/// A non-empty `rows x cols` buffer of numeric elements, stored row-major.
///
/// Grids are plain values: edge transforms take `&Grid<T>` and return a
/// freshly allocated grid, never touching their input.
///
/// # Examples
///
/// ```
/// use halo_core::Grid;
///
/// let g = Grid::from_fn(2, 3, |r, c| (r * 3 + c) as u16).unwrap();
/// assert_eq!(g.dims(), (2, 3));
/// assert_eq!(g[(1, 2)], 5);
/// assert_eq!(g.row(1), &[3, 4, 5]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Validate `rows x cols` and return its cell count.
fn check_dims(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(GridError::DimensionOverflow { rows, cols })
}

impl<T: Element> Grid<T> {
    /// Wrap a row-major buffer of exactly `rows * cols` elements.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GridError> {
        let expected = check_dims(rows, cols)?;
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    ///
    /// `f` is not called if the dimensions are rejected.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, GridError> {
        let len = check_dims(rows, cols)?;
        let mut data = Vec::with_capacity(len);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// A grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, GridError> {
        let len = check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; len],
        })
    }

    /// A grid of [`Element::ZERO`].
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::filled(rows, cols, T::ZERO)
    }

    /// Build a grid from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(check_dims(n_rows, n_cols)?);
        for row in rows {
            if row.len() != n_cols {
                return Err(GridError::LengthMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Length along `axis`.
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.rows,
            Axis::Col => self.cols,
        }
    }

    /// Element at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// One column, copied top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col >= self.cols()`.
    pub fn column(&self, col: usize) -> Vec<T> {
        assert!(col < self.cols, "column {col} out of bounds for {} columns", self.cols);
        self.data.iter().skip(col).step_by(self.cols).copied().collect()
    }

    /// Row-major view of every element.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the grid, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Copy the rectangle `rows x cols` out as a new grid.
    ///
    /// Fails with [`GridError::InvalidDimension`] if either range is empty.
    ///
    /// # Panics
    ///
    /// Panics if either range extends past the grid.
    pub fn sub_grid(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Grid<T>, GridError> {
        assert!(
            rows.end <= self.rows && cols.end <= self.cols,
            "sub-grid {rows:?} x {cols:?} outside {}x{} grid",
            self.rows,
            self.cols
        );
        let (r0, r1, c0, c1) = (rows.start, rows.end, cols.start, cols.end);
        let len = check_dims(r1.saturating_sub(r0), c1.saturating_sub(c0))?;
        let mut data = Vec::with_capacity(len);
        for r in r0..r1 {
            let base = r * self.cols;
            data.extend_from_slice(&self.data[base + c0..base + c1]);
        }
        Ok(Self {
            rows: r1 - r0,
            cols: c1 - c0,
            data,
        })
    }

    /// Copy the full-width (for [`Axis::Row`]) or full-height (for
    /// [`Axis::Col`]) strip covering `range` along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `range` extends past the grid's extent along `axis`.
    pub fn block(&self, axis: Axis, range: Range<usize>) -> Block<T> {
        assert!(
            range.start <= range.end && range.end <= self.extent(axis),
            "{axis} range {range:?} outside grid extent {}",
            self.extent(axis)
        );
        let len = range.end - range.start;
        match axis {
            Axis::Row => Block::from_parts(
                len,
                self.cols,
                self.data[range.start * self.cols..range.end * self.cols].to_vec(),
            ),
            Axis::Col => {
                let mut data = Vec::with_capacity(self.rows * len);
                for row in self.data.chunks_exact(self.cols) {
                    data.extend_from_slice(&row[range.start..range.end]);
                }
                Block::from_parts(self.rows, len, data)
            }
        }
    }

    /// Overwrite the strip starting at `start` along `axis` with `block`.
    ///
    /// The block must span the grid's full extent on the other axis.
    ///
    /// # Panics
    ///
    /// Panics if the block does not fit.
    pub fn write_block(&mut self, axis: Axis, start: usize, block: &Block<T>) {
        let across = axis.other();
        assert_eq!(
            block.extent(across),
            self.extent(across),
            "block spans {} along the {across} axis, grid spans {}",
            block.extent(across),
            self.extent(across)
        );
        let len = block.extent(axis);
        assert!(
            start + len <= self.extent(axis),
            "{axis} strip {start}..{} outside grid extent {}",
            start + len,
            self.extent(axis)
        );
        let src = block.as_slice();
        match axis {
            Axis::Row => {
                self.data[start * self.cols..(start + len) * self.cols].copy_from_slice(src);
            }
            Axis::Col => {
                if len == 0 {
                    return;
                }
                for (r, chunk) in src.chunks_exact(len).enumerate() {
                    let base = r * self.cols + start;
                    self.data[base..base + len].copy_from_slice(chunk);
                }
            }
        }
    }

    /// Copy `other` into this grid with its top-left cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `other` does not fit.
    pub fn paste(&mut self, row: usize, col: usize, other: &Grid<T>) {
        assert!(
            row + other.rows <= self.rows && col + other.cols <= self.cols,
            "{}x{} grid at ({row}, {col}) does not fit in {}x{}",
            other.rows,
            other.cols,
            self.rows,
            self.cols
        );
        for (r, src) in other.data.chunks_exact(other.cols).enumerate() {
            let base = (row + r) * self.cols + col;
            self.data[base..base + other.cols].copy_from_slice(src);
        }
    }
}

impl<T: Element> TryFrom<Block<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(block: Block<T>) -> Result<Self, Self::Error> {
        let (rows, cols, data) = block.into_parts();
        Grid::new(rows, cols, data)
    }
}

impl<T: Element> From<Grid<T>> for Block<T> {
    fn from(grid: Grid<T>) -> Self {
        Block::from_parts(grid.rows, grid.cols, grid.data)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seq(rows: usize, cols: usize) -> Grid<u16> {
        Grid::from_fn(rows, cols, |r, c| (r * cols + c + 1) as u16).unwrap()
    }

    #[test]
    fn from_fn_rejects_empty_dims_without_calling_f() {
        let mut calls = 0;
        let err = Grid::<u8>::from_fn(0, 3, |_, _| {
            calls += 1;
            1
        })
        .unwrap_err();
        assert_eq!(err, GridError::InvalidDimension { rows: 0, cols: 3 });
        assert_eq!(calls, 0);
    }

    #[test]
    fn oversized_dims_are_reported() {
        assert_eq!(
            Grid::<u8>::zeros(usize::MAX, 2).unwrap_err(),
            GridError::DimensionOverflow {
                rows: usize::MAX,
                cols: 2
            }
        );
        assert!(matches!(
            Grid::<u8>::from_fn(usize::MAX / 2, 3, |_, _| 0),
            Err(GridError::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn new_rejects_empty_dims() {
        assert_eq!(
            Grid::<u8>::new(0, 4, Vec::new()).unwrap_err(),
            GridError::InvalidDimension { rows: 0, cols: 4 }
        );
        assert_eq!(
            Grid::<u8>::zeros(3, 0).unwrap_err(),
            GridError::InvalidDimension { rows: 3, cols: 0 }
        );
    }

    #[test]
    fn new_rejects_wrong_length() {
        assert_eq!(
            Grid::<i32>::new(2, 2, vec![1, 2, 3]).unwrap_err(),
            GridError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![1u8, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert!(Grid::<u8>::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn accessors() {
        let g = seq(3, 4);
        assert_eq!(g.dims(), (3, 4));
        assert_eq!(g.extent(Axis::Row), 3);
        assert_eq!(g.extent(Axis::Col), 4);
        assert_eq!(g.row(2), &[9, 10, 11, 12]);
        assert_eq!(g.column(1), vec![2, 6, 10]);
        assert_eq!(g.get(2, 3), Some(12));
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g[(1, 1)], 6);
    }

    #[test]
    fn index_mut_writes_cell() {
        let mut g = Grid::<f32>::zeros(2, 2).unwrap();
        g[(1, 0)] = 2.5;
        assert_eq!(g.as_slice(), &[0.0, 0.0, 2.5, 0.0]);
    }

    #[test]
    fn block_and_write_block_rows() {
        let g = seq(4, 2);
        let b = g.block(Axis::Row, 1..3);
        assert_eq!(b.as_slice(), &[3, 4, 5, 6]);

        let mut out = Grid::<u16>::zeros(4, 2).unwrap();
        out.write_block(Axis::Row, 2, &b);
        assert_eq!(out.as_slice(), &[0, 0, 0, 0, 3, 4, 5, 6]);
    }

    #[test]
    fn block_and_write_block_cols() {
        let g = seq(2, 4);
        let b = g.block(Axis::Col, 2..4);
        assert_eq!(b.as_slice(), &[3, 4, 7, 8]);

        let mut out = Grid::<u16>::zeros(2, 4).unwrap();
        out.write_block(Axis::Col, 0, &b);
        assert_eq!(out.as_slice(), &[3, 4, 0, 0, 7, 8, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "outside grid extent")]
    fn write_block_past_end_panics() {
        let g = seq(3, 3);
        let b = g.block(Axis::Row, 0..2);
        let mut out = g.clone();
        out.write_block(Axis::Row, 2, &b);
    }

    #[test]
    fn paste_and_sub_grid() {
        let inner = seq(2, 2);
        let mut outer = Grid::<u16>::zeros(4, 4).unwrap();
        outer.paste(1, 1, &inner);
        assert_eq!(outer.sub_grid(1..3, 1..3).unwrap(), inner);
        assert_eq!(outer.row(0), &[0, 0, 0, 0]);
        assert!(outer.sub_grid(2..2, 0..2).is_err());
    }

    #[test]
    #[should_panic(expected = "outside 4x4 grid")]
    fn sub_grid_past_end_panics() {
        let g = Grid::<u8>::zeros(4, 4).unwrap();
        let _ = g.sub_grid(1..5, 0..2);
    }

    #[test]
    fn block_round_trips_through_grid() {
        let g = seq(3, 2);
        let b: Block<u16> = g.clone().into();
        assert_eq!(Grid::try_from(b).unwrap(), g);
        let empty = Block::<u16>::new(0, 2, Vec::new()).unwrap();
        assert!(Grid::try_from(empty).is_err());
    }

    proptest! {
        #[test]
        fn column_matches_index(rows in 1usize..8, cols in 1usize..8) {
            let g = seq(rows, cols);
            for c in 0..cols {
                let col = g.column(c);
                prop_assert_eq!(col.len(), rows);
                for (r, v) in col.into_iter().enumerate() {
                    prop_assert_eq!(v, g[(r, c)]);
                }
            }
        }
    }
}
