//! Move interpreter and turn engine for Cubelet.
//!
//! Provides [`Cube`], which couples a [`Lattice`](cubelet_lattice::Lattice)
//! to a [`Renderer`](cubelet_core::Renderer), interprets move-notation
//! strings, animates each quarter turn, and keeps the [`MoveLog`] used to
//! resolve back to the last checkpoint. [`CubeService`] runs a cube on a
//! worker thread behind a single serialized request queue.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod controls;
pub mod cube;
pub mod interpreter;
pub mod metrics;
pub mod move_log;
pub mod service;

pub use animation::TurnAnimation;
pub use config::{ConfigError, CubeConfig};
pub use cube::{Cube, InterpreterState};
pub use interpreter::parse_moves;
pub use metrics::RunMetrics;
pub use move_log::MoveLog;
pub use service::{Completion, CubeService, Pending, ServiceError, SubmitError};
