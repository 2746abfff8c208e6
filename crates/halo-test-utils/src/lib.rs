//! Test fixtures and assertions for Halo development.
//!
//! Grid builders covering the shapes edge-transform tests keep reaching
//! for: a sequential grid (cell values 1, 2, 3, ... in row-major order),
//! a 2x2 colour-filter mosaic, and seeded random grids.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_period, mosaic_grid, periodic_rows, random_grid, sequential_grid, FromIndex,
    MOSAIC_B, MOSAIC_G, MOSAIC_R,
};
