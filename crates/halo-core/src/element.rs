//! The [`Element`] trait for grid cell values.

use std::fmt::Debug;

/// A numeric value that can live in a [`Grid`](crate::Grid).
///
/// Implemented for every fixed-width integer and float primitive. Edge
/// transforms only ever copy elements or write [`Element::ZERO`], so the
/// element type of an input grid is preserved exactly in the output.
pub trait Element: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// The additive identity, used for zero-filled edges.
    const ZERO: Self;
}

macro_rules! impl_element {
    ($zero:expr => $($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_element!(0 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_element!(0.0 => f32, f64);
