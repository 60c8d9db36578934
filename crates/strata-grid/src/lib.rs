//! Toroidal 3D labeled grid.
//!
//! This crate defines [`Grid`] — a dense 3D lattice of [`Label`]s with
//! periodic (wrap-around) boundaries — together with its [`Dims`]
//! descriptor and error type.
//!
//! # Linear order
//!
//! Every consumer of a grid addresses the flat cell buffer through one
//! canonical convention, x-fastest:
//!
//! ```text
//! index = (z * sy + y) * sx + x
//! ```
//!
//! The pattern matcher, the simulation engine, and the voxel encoder
//! all share this order; the encoder emits the voxel buffer in exactly
//! this sequence.
//!
//! [`Label`]: strata_core::Label

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod error;
pub mod grid;

pub use dims::Dims;
pub use error::GridError;
pub use grid::Grid;
