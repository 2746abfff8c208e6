//! Reusable grid fixtures.
//!
//! - [`sequential_grid`]: cells numbered from 1 in row-major order.
//! - [`mosaic_grid`]: an RGGB Bayer layout.
//! - [`periodic_rows`]: rows that repeat with a chosen period.
//! - [`random_grid`]: seeded ChaCha8 noise, reproducible across runs.
//!
//! Grid fixtures panic on zero dimensions.

use halo_core::{Element, Grid};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Lossy conversion from a cell counter into an element type.
///
/// Integer types wrap on overflow; only small fixtures rely on exact
/// values.
pub trait FromIndex: Element {
    fn from_index(i: usize) -> Self;
}

macro_rules! impl_from_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromIndex for $t {
                fn from_index(i: usize) -> Self {
                    i as $t
                }
            }
        )*
    };
}

impl_from_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Red photosite in [`mosaic_grid`].
pub const MOSAIC_R: u8 = b'R';
/// Green photosite in [`mosaic_grid`].
pub const MOSAIC_G: u8 = b'G';
/// Blue photosite in [`mosaic_grid`].
pub const MOSAIC_B: u8 = b'B';

/// `rows x cols` grid holding `1, 2, ..., rows * cols` in row-major order.
pub fn sequential_grid<T: FromIndex>(rows: usize, cols: usize) -> Grid<T> {
    Grid::from_fn(rows, cols, |r, c| T::from_index(r * cols + c + 1)).unwrap()
}

/// RGGB Bayer mosaic: even rows `R G R G ...`, odd rows `G B G B ...`.
pub fn mosaic_grid(rows: usize, cols: usize) -> Grid<u8> {
    Grid::from_fn(rows, cols, |r, c| match (r % 2, c % 2) {
        (0, 0) => MOSAIC_R,
        (1, 1) => MOSAIC_B,
        _ => MOSAIC_G,
    })
    .unwrap()
}

/// Grid whose row `r` is filled with `(r % period) * cols + c + 1`, so
/// rows repeat with exactly `period` and columns never repeat.
pub fn periodic_rows<T: FromIndex>(rows: usize, cols: usize, period: usize) -> Grid<T> {
    Grid::from_fn(rows, cols, |r, c| T::from_index((r % period) * cols + c + 1)).unwrap()
}

/// `rows x cols` grid of values in `0..=max`, reproducible from `seed`.
pub fn random_grid(rows: usize, cols: usize, max: u16, seed: u64) -> Grid<u16> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(rows, cols, |_, _| rng.gen_range(0..=max)).unwrap()
}

/// Assert that every row of `grid` equals the row `period` rows below it.
///
/// # Panics
///
/// Panics naming the first row pair that differs.
pub fn assert_period<T: Element>(grid: &Grid<T>, period: usize) {
    for r in period..grid.rows() {
        assert_eq!(
            grid.row(r),
            grid.row(r - period),
            "row {r} breaks period {period}"
        );
    }
}
