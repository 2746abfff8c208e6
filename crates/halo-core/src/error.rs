//! Error types for grid construction and edge transforms.

use crate::axis::Axis;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or from an edge transform
/// rejecting its arguments.
///
/// Every variant is detected before any output is allocated, so a caller
/// never observes a partially written grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid was requested with zero rows or zero columns.
    InvalidDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Requested dimensions, or their cell count, do not fit in `usize`.
    DimensionOverflow {
        /// Requested row count, saturated at `usize::MAX`.
        rows: usize,
        /// Requested column count, saturated at `usize::MAX`.
        cols: usize,
    },
    /// A backing buffer does not hold exactly `rows * cols` elements,
    /// or the rows handed to [`Grid::from_rows`](crate::Grid::from_rows)
    /// are ragged.
    LengthMismatch {
        /// Number of elements required.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },
    /// A shift magnitude reaches or exceeds the grid extent on its axis.
    ShiftOutOfRange {
        /// Axis the shift applies to.
        axis: Axis,
        /// The offending signed shift.
        shift: isize,
        /// Grid extent along `axis`.
        extent: usize,
    },
    /// A stride cannot be used on this axis: it is negative, it is zero
    /// where a replication block is required, or it exceeds the extent
    /// the block would be read from.
    InvalidStride {
        /// The offending stride, as supplied.
        stride: i64,
        /// Axis the block would be read along and the extent available
        /// on it. `None` when the stride is rejected before any axis is
        /// involved (a negative raw stride).
        bound: Option<(Axis, usize)>,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols } => {
                write!(f, "grid must be non-empty, got {rows}x{cols}")
            }
            Self::DimensionOverflow { rows, cols } => {
                write!(f, "grid of {rows}x{cols} cells overflows usize")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} elements, got {actual}")
            }
            Self::ShiftOutOfRange {
                axis,
                shift,
                extent,
            } => write!(
                f,
                "{axis} shift {shift} out of range: magnitude must be below {extent}"
            ),
            Self::InvalidStride {
                stride,
                bound: Some((axis, extent)),
            } => write!(
                f,
                "invalid stride {stride} on {axis} axis: must lie in [1, {extent}]"
            ),
            Self::InvalidStride {
                stride,
                bound: None,
            } => write!(f, "invalid stride {stride}: must be non-negative"),
        }
    }
}

impl Error for GridError {}
