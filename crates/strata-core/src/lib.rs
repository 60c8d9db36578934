//! Core types for the Strata voxel automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`Label`] type naming a voxel's material, the two-valued
//! [`BinaryState`] classification, and the [`Sentinels`] pair that maps
//! labels onto that classification.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod label;

pub use label::{BinaryState, Label, Sentinels};
