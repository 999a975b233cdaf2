//! Frame-by-frame rotation issuance for one quarter turn.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use cubelet_core::{Axis, Move, Renderer};
use cubelet_lattice::FaceSlice;

use crate::config::CubeConfig;

/// The visual plan for one quarter turn.
///
/// A turn spans `frames` frames. Each frame rotates every cubie in the
/// slice by `angle_per_frame` about the face axis through `pivot`, then
/// presents with `pause`. The angles sum to a signed quarter turn:
/// positive for a forward move, negative for an inverse one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnAnimation {
    /// Rotation axis, taken from the turning face.
    pub axis: Axis,
    /// Point the rotation line passes through.
    pub pivot: [f32; 3],
    /// Number of frames.
    pub frames: u32,
    /// Radians per frame, signed.
    pub angle_per_frame: f32,
    /// Pause handed to [`Renderer::present`] after each frame.
    pub pause: Duration,
}

impl TurnAnimation {
    /// Plan the animation of `mv` under `config`.
    pub fn plan(config: &CubeConfig, mv: Move) -> Self {
        let frames = config.frame_rate.max(1);
        let sign = if mv.inverse { -1.0 } else { 1.0 };
        Self {
            axis: mv.face.axis(),
            pivot: config.origin,
            frames,
            angle_per_frame: sign * FRAC_PI_2 / frames as f32,
            pause: config.frame_pause(),
        }
    }

    /// Total signed angle over the whole turn.
    pub fn total_angle(&self) -> f32 {
        self.angle_per_frame * self.frames as f32
    }

    /// Drive `renderer` through every frame for the cubies in `slice`.
    ///
    /// Returns `(rotations_issued, frames_presented)`.
    pub fn issue<R: Renderer + ?Sized>(&self, renderer: &mut R, slice: &FaceSlice) -> (u64, u64) {
        let mut rotations = 0u64;
        for frame in 0..self.frames {
            for (_, cubie) in slice.iter() {
                renderer.rotate_around(cubie, self.pivot, self.axis, self.angle_per_frame);
                rotations += 1;
            }
            log::trace!("frame {}/{} on {}", frame + 1, self.frames, slice.face());
            renderer.present(self.pause);
        }
        (rotations, self.frames as u64)
    }
}
