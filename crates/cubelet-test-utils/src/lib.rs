//! Test utilities and mock types for Cubelet development.
//!
//! Provides mock implementations of the [`Renderer`] trait that skip all
//! pacing, plus lattice and move-string fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use cubelet_core::{Axis, CubieId, Renderer};

pub mod fixtures;

pub use fixtures::{arb_move_string, scrambled_lattice, PanickingRenderer, ALL_TOKENS};

/// Renderer that ignores every call and never sleeps.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn rotate_around(&mut self, _: CubieId, _: [f32; 3], _: Axis, _: f32) {}

    fn present(&mut self, _: Duration) {}
}

/// One recorded `rotate_around` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub cubie: CubieId,
    pub pivot: [f32; 3],
    pub axis: Axis,
    pub angle: f32,
}

/// Mock implementation of [`Renderer`] that records every call.
///
/// `present` returns immediately; the requested pauses are summed so
/// tests can check pacing without waiting for it.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    rotations: Vec<Rotation>,
    presents: usize,
    paused: Duration,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every rotation issued so far, in call order.
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Number of `present` calls.
    pub fn presents(&self) -> usize {
        self.presents
    }

    /// Sum of the pauses passed to `present`.
    pub fn total_pause(&self) -> Duration {
        self.paused
    }

    /// Net rotation angle applied to `cubie`, in radians.
    pub fn net_angle(&self, cubie: CubieId) -> f32 {
        self.rotations
            .iter()
            .filter(|r| r.cubie == cubie)
            .map(|r| r.angle)
            .sum()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.rotations.clear();
        self.presents = 0;
        self.paused = Duration::ZERO;
    }
}

impl Renderer for RecordingRenderer {
    fn rotate_around(&mut self, cubie: CubieId, pivot: [f32; 3], axis: Axis, angle: f32) {
        self.rotations.push(Rotation {
            cubie,
            pivot,
            axis,
            angle,
        });
    }

    fn present(&mut self, pause: Duration) {
        self.presents += 1;
        self.paused += pause;
    }
}
