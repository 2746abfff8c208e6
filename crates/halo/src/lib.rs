//! Halo: pattern-preserving shifts and borders for 2D sensor grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Halo sub-crates. For most users, adding `halo` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use halo::prelude::*;
//!
//! // A 4x4 RGGB Bayer tile.
//! let raw = Grid::from_fn(4, 4, |r, c| match (r % 2, c % 2) {
//!     (0, 0) => b'R',
//!     (1, 1) => b'B',
//!     _ => b'G',
//! })
//! .unwrap();
//!
//! // Replicating two rows/columns keeps the mosaic intact across the halo.
//! let padded = expand_border(&raw, 3, EdgeFill::from_stride(2)).unwrap();
//! assert_eq!(padded.dims(), (10, 10));
//! assert_eq!(padded.row(2)[..4], *b"BGBG");
//! assert_eq!(padded.row(3)[..4], *b"GRGR");
//!
//! // Shift one row down; the opened row continues the pattern.
//! let moved = shift_grid(&raw, ShiftVector::north(1), EdgeFill::from_stride(2)).unwrap();
//! assert_eq!(moved.row(0), raw.row(1));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `halo-core` | `Grid`, `Block`, `Element`, `Axis`, `GridError` |
//! | [`edge`] | `halo-edge` | Edge fill policy, replication, shift, border, batch |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid storage, element types, and errors (`halo-core`).
pub use halo_core as types;

/// Edge transforms (`halo-edge`).
///
/// [`edge::shift_grid`] and [`edge::expand_border`] are the two
/// transforms; [`edge::replicate_to_length`] is the primitive under both.
pub use halo_edge as edge;

/// Common imports for typical usage.
///
/// ```rust
/// use halo::prelude::*;
/// ```
pub mod prelude {
    pub use halo_core::{Axis, Block, Element, Grid, GridError};
    pub use halo_edge::{
        expand_batch, expand_border, replicate_to_length, shift_batch, shift_grid, BatchConfig,
        BatchError, Crop, EdgeFill, ShiftVector,
    };
}
