//! Cubelet: an interactive 3x3x3 Rubik's-cube model.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Cubelet sub-crates. For most users, adding `cubelet` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cubelet::prelude::*;
//!
//! // A renderer that draws nothing and never waits.
//! struct Headless;
//! impl Renderer for Headless {
//!     fn rotate_around(&mut self, _: CubieId, _: [f32; 3], _: Axis, _: f32) {}
//!     fn present(&mut self, _: std::time::Duration) {}
//! }
//!
//! let config = CubeConfig {
//!     start_scrambled: true,
//!     ..CubeConfig::default()
//! };
//! let mut cube = Cube::new(config, Headless).unwrap();
//! assert!(!cube.lattice().is_solved());
//!
//! cube.apply_move_string("R U R' U'");
//! assert_eq!(cube.move_log().len(), 28);
//!
//! assert_eq!(cube.resolve(), 28);
//! assert!(cube.lattice().is_solved());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cubelet-core` | Coordinates, faces, moves, colors, the `Renderer` trait |
//! | [`lattice`] | `cubelet-lattice` | Cubies, the lattice, face slices |
//! | [`engine`] | `cubelet-engine` | Move interpreter, `Cube`, `CubeService` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`cubelet-core`).
///
/// Contains coordinates and cubie ids, the face table, move tokens, the
/// sticker palette, and the [`types::Renderer`] collaborator trait.
pub use cubelet_core as types;

/// The cubie lattice (`cubelet-lattice`).
///
/// [`lattice::Lattice`] holds the coordinate-to-cubie bijection and
/// performs quarter turns; [`lattice::Cubie`] carries sticker colors.
pub use cubelet_lattice as lattice;

/// Move interpreter and turn engine (`cubelet-engine`).
///
/// [`engine::Cube`] for direct single-threaded use,
/// [`engine::CubeService`] for a serialized worker thread.
pub use cubelet_engine as engine;

/// Common imports for typical Cubelet usage.
///
/// ```rust
/// use cubelet::prelude::*;
/// ```
///
/// This imports the most frequently used types: the cube and its config,
/// the renderer trait and its argument types, moves, and the lattice.
pub mod prelude {
    // Core types and traits
    pub use cubelet_core::{Axis, Coord, CubieId, Face, Move, Moves, Renderer, DEMO_SCRAMBLE};

    // Errors
    pub use cubelet_core::LatticeError;
    pub use cubelet_engine::{ConfigError, ServiceError, SubmitError};

    // Lattice
    pub use cubelet_lattice::{Cubie, FaceSlice, Lattice};

    // Engine
    pub use cubelet_engine::{
        parse_moves, Completion, Cube, CubeConfig, CubeService, InterpreterState, MoveLog,
        RunMetrics,
    };
}
