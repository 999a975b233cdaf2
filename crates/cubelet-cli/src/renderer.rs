//! A renderer for terminals, where there is nothing to draw.

use cubelet_core::{Axis, CubieId, Renderer};

/// Logs every rotation at `trace` and keeps the default frame pacing, so a
/// turn takes as long as it would on screen.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    rotations: u64,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotations issued since startup.
    pub fn rotations(&self) -> u64 {
        self.rotations
    }
}

impl Renderer for TerminalRenderer {
    fn rotate_around(&mut self, cubie: CubieId, pivot: [f32; 3], axis: Axis, angle: f32) {
        self.rotations += 1;
        log::trace!("rotate cubie {cubie} by {angle:.4} rad about {axis} through {pivot:?}");
    }
}
