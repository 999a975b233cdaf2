//! The 3x3x3 cubie lattice for Cubelet.
//!
//! This crate owns the logical state of the puzzle: which of the 27
//! [`Cubie`]s sits at which [`Coord`](cubelet_core::Coord). It knows nothing
//! about rendering.
//!
//! # Turning
//!
//! [`Lattice::turn`] snapshots the 9 cells of a face into a [`FaceSlice`]
//! and writes them back through a fixed 90-degree permutation. One
//! permutation serves all six faces; the face's axis only picks which two
//! coordinate components act as the slice's row and column.
//!
//! # Invariant
//!
//! A lattice is always a bijection between the 27 coordinates and the 27
//! cubie ids. Turning permutes cells inside one slice and can never create,
//! duplicate, or drop a cubie.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cubie;
pub mod lattice;
pub mod slice;

#[cfg(test)]
pub(crate) mod compliance;

pub use cubie::{build_cubies, Cubie};
pub use lattice::Lattice;
pub use slice::FaceSlice;
