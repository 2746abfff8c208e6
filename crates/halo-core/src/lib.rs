//! Core types for the Halo edge-transform workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! rectangular [`Grid`] buffer, the [`Block`] strips that edge transforms
//! cut from and paste into grids, the [`Element`] trait covering every
//! fixed-width numeric primitive, and the shared [`GridError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod block;
pub mod element;
pub mod error;
pub mod grid;

pub use axis::Axis;
pub use block::Block;
pub use element::Element;
pub use error::GridError;
pub use grid::Grid;
