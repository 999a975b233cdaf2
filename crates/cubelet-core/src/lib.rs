//! Core types and traits for the Cubelet puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Cubelet workspace:
//! lattice coordinates and cubie identifiers, the face/turn table, move
//! tokens, sticker colors, and the [`Renderer`] collaborator trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod face;
pub mod id;
pub mod moves;
pub mod traits;

pub use color::Color;
pub use error::LatticeError;
pub use face::{Axis, Face};
pub use id::{Coord, CubieId, CELL_COUNT, EDGE_LEN};
pub use moves::{Move, Moves, DEMO_SCRAMBLE};
pub use traits::Renderer;
