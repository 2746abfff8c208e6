//! Strided replication: the primitive under every replicating edge fill.

use halo_core::{Axis, Block, Element, GridError};

/// Which end of a tiled block survives cropping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crop {
    /// Keep the first `n` rows/columns. Used when the padding continues
    /// forward from its source, as below or right of a grid.
    Leading,
    /// Keep the last `n` rows/columns. Used when the padding precedes its
    /// source, as above or left of a grid.
    Trailing,
}

/// Tile `block` along `axis` until it covers `n`, then crop to exactly `n`.
///
/// The block's extent along `axis` is the stride. It is repeated
/// `ceil(n / stride)` times, giving at least `n` rows/columns, and `crop`
/// picks which `n` to keep. The extent across `axis` is unchanged, and
/// `n == 0` yields an empty block.
///
/// Fails with [`GridError::InvalidStride`] if the block is empty along
/// `axis`; zero-fill has to be handled before reaching this function.
///
/// # Examples
///
/// ```
/// use halo_core::{Axis, Block};
/// use halo_edge::{replicate_to_length, Crop};
///
/// // Two rows of a Bayer mosaic, extended to three rows.
/// let src = Block::new(2, 2, vec![b'R', b'G', b'G', b'B']).unwrap();
///
/// let below = replicate_to_length(&src, Axis::Row, 3, Crop::Leading).unwrap();
/// assert_eq!(below.as_slice(), b"RGGBRG");
///
/// let above = replicate_to_length(&src, Axis::Row, 3, Crop::Trailing).unwrap();
/// assert_eq!(above.as_slice(), b"GBRGGB");
/// ```
pub fn replicate_to_length<T: Element>(
    block: &Block<T>,
    axis: Axis,
    n: usize,
    crop: Crop,
) -> Result<Block<T>, GridError> {
    let stride = block.extent(axis);
    if stride == 0 {
        return Err(GridError::InvalidStride {
            stride: 0,
            bound: Some((axis, 0)),
        });
    }
    let quot = n.div_ceil(stride);
    let tiled = block.tile(axis, quot);
    let len = tiled.extent(axis);
    let keep = match crop {
        Crop::Leading => 0..n,
        Crop::Trailing => len - n..len,
    };
    log::trace!("replicate {axis} stride {stride} x{quot} -> {n} ({crop:?})");
    Ok(tiled.slice(axis, keep))
}
