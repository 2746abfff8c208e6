//! Grid axes.

use std::fmt;

/// One of the two axes of a [`Grid`](crate::Grid).
///
/// Edge transforms treat the axes symmetrically: every row-axis operation
/// has a column-axis twin obtained by swapping the roles of rows and
/// columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical axis; a length along it counts rows.
    Row,
    /// Horizontal axis; a length along it counts columns.
    Col,
}

impl Axis {
    /// Both axes, in the order edge transforms process them.
    pub const ALL: [Axis; 2] = [Axis::Row, Axis::Col];

    /// The perpendicular axis.
    pub fn other(self) -> Axis {
        match self {
            Self::Row => Self::Col,
            Self::Col => Self::Row,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Col => write!(f, "column"),
        }
    }
}
