//! Whole-row/whole-column translation with edge fill.

use crate::fill::EdgeFill;
use crate::replicate::{replicate_to_length, Crop};
use halo_core::{Axis, Block, Element, Grid, GridError};

/// A signed translation in rows and columns.
///
/// Positive `row` moves content down and opens rows at the top; positive
/// `col` moves content right and opens columns at the left. The compass
/// constructors name the edge that opens up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShiftVector {
    /// Row shift; positive moves content down.
    pub row: isize,
    /// Column shift; positive moves content right.
    pub col: isize,
}

impl ShiftVector {
    /// Shift by `row` rows and `col` columns.
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Open `k` rows on the north edge.
    pub const fn north(k: isize) -> Self {
        Self::new(k, 0)
    }

    /// Open `k` rows on the south edge.
    pub const fn south(k: isize) -> Self {
        Self::new(-k, 0)
    }

    /// Open `k` columns on the west edge.
    pub const fn west(k: isize) -> Self {
        Self::new(0, k)
    }

    /// Open `k` columns on the east edge.
    pub const fn east(k: isize) -> Self {
        Self::new(0, -k)
    }

    /// Shift component along `axis`.
    pub fn along(self, axis: Axis) -> isize {
        match axis {
            Axis::Row => self.row,
            Axis::Col => self.col,
        }
    }
}

impl From<(isize, isize)> for ShiftVector {
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl From<(i32, i32)> for ShiftVector {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row as isize, col as isize)
    }
}

/// Translate `grid` by `shift`, inventing the vacated rows and columns
/// per `fill`.
///
/// The result has the same dimensions as `grid`; content pushed past an
/// edge is dropped, not wrapped. The row axis is shifted first and the
/// column axis is then shifted on that intermediate, so cells vacated on
/// both axes (the corner of a diagonal shift) are column-replicated from
/// the already row-padded rows.
///
/// With [`EdgeFill::Replicate`] a shift of `+k` on an axis fills the gap
/// with the leading `stride` rows/columns, tiled and cropped so the block
/// ends in the source's last row/column right before the retained data.
/// A shift of `-k` fills it with the trailing `stride` rows/columns,
/// tiled and cropped so the block starts with the source's first.
///
/// # Errors
///
/// - [`GridError::ShiftOutOfRange`] if `|shift|` reaches the grid extent
///   on either axis.
/// - [`GridError::InvalidStride`] if a replicating stride exceeds the
///   grid extent on an axis that actually moves.
///
/// # Examples
///
/// ```
/// use halo_core::Grid;
/// use halo_edge::{shift_grid, EdgeFill, ShiftVector};
///
/// let g = Grid::from_rows(vec![vec![1u8, 2], vec![3, 4], vec![5, 6]]).unwrap();
///
/// let down = shift_grid(&g, ShiftVector::north(1), EdgeFill::CLAMP).unwrap();
/// assert_eq!(down.as_slice(), &[1, 2, 1, 2, 3, 4]);
///
/// let up = shift_grid(&g, (-1, 0), EdgeFill::Zero).unwrap();
/// assert_eq!(up.as_slice(), &[3, 4, 5, 6, 0, 0]);
/// ```
pub fn shift_grid<T: Element>(
    grid: &Grid<T>,
    shift: impl Into<ShiftVector>,
    fill: EdgeFill,
) -> Result<Grid<T>, GridError> {
    let shift = shift.into();
    log::trace!(
        "shift {}x{} grid by ({}, {}) fill {fill}",
        grid.rows(),
        grid.cols(),
        shift.row,
        shift.col
    );
    for axis in Axis::ALL {
        let s = shift.along(axis);
        let extent = grid.extent(axis);
        if s.unsigned_abs() >= extent {
            log::debug!("rejecting {axis} shift {s} for extent {extent}");
            return Err(GridError::ShiftOutOfRange {
                axis,
                shift: s,
                extent,
            });
        }
        if s != 0 {
            fill.check(axis, extent)?;
        }
    }

    let rows_shifted = shift_axis(grid, Axis::Row, shift.row, fill)?;
    shift_axis(&rows_shifted, Axis::Col, shift.col, fill)
}

/// Shift along one axis. Arguments are already validated.
fn shift_axis<T: Element>(
    grid: &Grid<T>,
    axis: Axis,
    shift: isize,
    fill: EdgeFill,
) -> Result<Grid<T>, GridError> {
    let m = shift.unsigned_abs();
    if m == 0 {
        return Ok(grid.clone());
    }
    let extent = grid.extent(axis);
    let stride = fill.stride();

    // (retained source, retained destination, gap start, replication source, crop)
    let (kept, kept_at, gap_at, source, crop) = if shift > 0 {
        (0..extent - m, m, 0, 0..stride, Crop::Trailing)
    } else {
        (m..extent, 0, extent - m, extent - stride..extent, Crop::Leading)
    };

    let gap = match fill {
        EdgeFill::Zero => Block::zeros(axis, m, grid.extent(axis.other())),
        EdgeFill::Replicate { .. } => {
            replicate_to_length(&grid.block(axis, source), axis, m, crop)?
        }
    };

    let mut out = grid.clone();
    out.write_block(axis, kept_at, &grid.block(axis, kept));
    out.write_block(axis, gap_at, &gap);
    Ok(out)
}
