//! Benchmark profiles for Halo edge transforms.
//!
//! - [`reference_frame`]: 512x512 RGGB-style 12-bit frame
//! - [`stress_frame`]: 2048x2048 frame of the same layout

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use halo_core::{Grid, GridError};

/// Build a `rows x cols` 12-bit raw frame with a 2x2 colour-filter phase
/// baked into each photosite value.
pub fn raw_frame(rows: usize, cols: usize) -> Result<Grid<u16>, GridError> {
    Grid::from_fn(rows, cols, |r, c| {
        let phase = ((r % 2) * 2 + c % 2) as u16;
        let ramp = ((r * 7 + c * 13) % 1024) as u16;
        (phase << 10) | ramp
    })
}

/// 512x512 reference frame.
pub fn reference_frame() -> Result<Grid<u16>, GridError> {
    raw_frame(512, 512)
}

/// 2048x2048 stress frame.
pub fn stress_frame() -> Result<Grid<u16>, GridError> {
    raw_frame(2048, 2048)
}
