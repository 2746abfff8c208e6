//! Pattern-preserving edge transforms for 2D grids.
//!
//! Two transforms share one primitive:
//!
//! - [`shift_grid`]: translate a grid by whole rows and columns, filling
//!   the vacated edge per an [`EdgeFill`] policy.
//! - [`expand_border`]: grow a grid by the same width on every side,
//!   filling the new border per the same policy.
//! - [`replicate_to_length`]: the shared primitive. It tiles a
//!   `stride`-sized block taken from against an edge and crops the result
//!   to the exact length a boundary needs.
//!
//! With [`EdgeFill::Replicate`] a stride of 2 carries a 2x2 colour-filter
//! mosaic across the synthetic boundary unbroken, where single-edge
//! replication or zero padding would not.
//!
//! [`batch`] fans either transform out over many independent grids.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod border;
pub mod fill;
pub mod replicate;
pub mod shift;

pub use batch::{expand_batch, shift_batch, BatchConfig, BatchError};
pub use border::expand_border;
pub use fill::EdgeFill;
pub use replicate::{replicate_to_length, Crop};
pub use shift::{shift_grid, ShiftVector};
