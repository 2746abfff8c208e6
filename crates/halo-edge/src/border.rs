//! Border expansion with edge fill.

use crate::fill::EdgeFill;
use crate::replicate::{replicate_to_length, Crop};
use halo_core::{Axis, Element, Grid, GridError};

/// One side of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Fill order. Column passes run last and own the corners.
    const FILL_ORDER: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Row,
            Self::Left | Self::Right => Axis::Col,
        }
    }
}

/// Grow `grid` by `border_width` rows/columns on every side, inventing
/// the border per `fill`.
///
/// The result is `(rows + 2b) x (cols + 2b)` with `grid` copied unchanged
/// into the centre. With [`EdgeFill::Zero`] the border is zero.
///
/// With [`EdgeFill::Replicate`] each side is filled from the `stride`
/// rows/columns lying just inside it, tiled and cropped so the pattern
/// runs on unbroken across the boundary: the top/left border ends with
/// the source's last row/column, the bottom/right border begins with
/// the source's first.
///
/// Sides are filled in the order top, bottom, left, right. Top and bottom
/// passes span the full output width; left and right passes span the full
/// output height and read the already filled top/bottom rows, so each
/// `b x b` corner is owned by the left or right pass.
///
/// # Errors
///
/// - [`GridError::InvalidStride`] if `border_width > 0` and a replicating
///   stride exceeds the input's row or column count.
/// - [`GridError::DimensionOverflow`] if the expanded grid's dimensions
///   or cell count do not fit in `usize`.
///
/// # Examples
///
/// ```
/// use halo_core::Grid;
/// use halo_edge::{expand_border, EdgeFill};
///
/// let g = Grid::from_rows(vec![vec![1u8, 2], vec![3, 4]]).unwrap();
/// let out = expand_border(&g, 1, EdgeFill::CLAMP).unwrap();
/// assert_eq!(out.row(0), &[1, 1, 2, 2]);
/// assert_eq!(out.row(3), &[3, 3, 4, 4]);
/// ```
pub fn expand_border<T: Element>(
    grid: &Grid<T>,
    border_width: usize,
    fill: EdgeFill,
) -> Result<Grid<T>, GridError> {
    let b = border_width;
    log::trace!(
        "expand {}x{} grid by {b} fill {fill}",
        grid.rows(),
        grid.cols()
    );
    if b > 0 {
        for axis in Axis::ALL {
            fill.check(axis, grid.extent(axis))?;
        }
    }

    let grown = |extent: usize| b.checked_mul(2).and_then(|w| w.checked_add(extent));
    let (rows, cols) = match (grown(grid.rows()), grown(grid.cols())) {
        (Some(rows), Some(cols)) => (rows, cols),
        (rows, cols) => {
            log::debug!("border {b} overflows {}x{} grid", grid.rows(), grid.cols());
            return Err(GridError::DimensionOverflow {
                rows: rows.unwrap_or(usize::MAX),
                cols: cols.unwrap_or(usize::MAX),
            });
        }
    };
    let mut out = Grid::zeros(rows, cols)?;
    out.paste(b, b, grid);

    let EdgeFill::Replicate { stride } = fill else {
        return Ok(out);
    };
    if b == 0 {
        return Ok(out);
    }
    let s = stride.get();

    for side in Side::FILL_ORDER {
        let axis = side.axis();
        let extent = out.extent(axis);
        let (source, crop, at) = match side {
            Side::Top | Side::Left => (b..b + s, Crop::Trailing, 0),
            Side::Bottom | Side::Right => (extent - b - s..extent - b, Crop::Leading, extent - b),
        };
        let pad = replicate_to_length(&out.block(axis, source), axis, b, crop)?;
        out.write_block(axis, at, &pad);
    }
    Ok(out)
}
