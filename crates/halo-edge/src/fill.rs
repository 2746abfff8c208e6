//! The edge-fill policy shared by every transform.

use halo_core::{Axis, GridError};
use std::fmt;
use std::num::NonZeroUsize;

/// How a transform fills rows and columns it has to invent.
///
/// The raw integer form used throughout the literature is the *stride*:
/// `0` zero-fills, `k > 0` replicates the `k` rows/columns lying against
/// the edge, tiled as often as needed. [`EdgeFill::from_stride`] and the
/// `TryFrom<i64>` impl convert from that form.
///
/// # Examples
///
/// ```
/// use halo_edge::EdgeFill;
///
/// assert_eq!(EdgeFill::default(), EdgeFill::Zero);
/// assert_eq!(EdgeFill::from_stride(2).stride(), 2);
/// assert!(EdgeFill::try_from(-1i64).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeFill {
    /// Invented cells are [`Element::ZERO`](halo_core::Element::ZERO).
    #[default]
    Zero,
    /// Invented cells repeat the `stride` rows/columns nearest the edge.
    Replicate {
        /// Period of the replicated block.
        stride: NonZeroUsize,
    },
}

impl EdgeFill {
    /// Single row/column edge replication.
    pub const CLAMP: EdgeFill = EdgeFill::Replicate {
        stride: NonZeroUsize::MIN,
    };

    /// Policy for a raw stride; `0` means zero-fill.
    pub fn from_stride(stride: usize) -> Self {
        match NonZeroUsize::new(stride) {
            Some(stride) => Self::Replicate { stride },
            None => Self::Zero,
        }
    }

    /// The raw stride; `0` for [`EdgeFill::Zero`].
    pub fn stride(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::Replicate { stride } => stride.get(),
        }
    }

    /// Check that a replicating stride fits in `extent` along `axis`.
    ///
    /// Zero-fill always passes.
    pub fn check(self, axis: Axis, extent: usize) -> Result<(), GridError> {
        match self {
            Self::Replicate { stride } if stride.get() > extent => {
                log::debug!("rejecting stride {stride} for {axis} extent {extent}");
                Err(GridError::InvalidStride {
                    stride: stride.get() as i64,
                    bound: Some((axis, extent)),
                })
            }
            _ => Ok(()),
        }
    }
}

impl From<usize> for EdgeFill {
    fn from(stride: usize) -> Self {
        Self::from_stride(stride)
    }
}

impl TryFrom<i64> for EdgeFill {
    type Error = GridError;

    fn try_from(stride: i64) -> Result<Self, Self::Error> {
        usize::try_from(stride)
            .map(Self::from_stride)
            .map_err(|_| GridError::InvalidStride {
                stride,
                bound: None,
            })
    }
}

impl fmt::Display for EdgeFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "zero"),
            Self::Replicate { stride } => write!(f, "replicate/{stride}"),
        }
    }
}
