//! Collaborator traits implemented outside the core.

use std::time::Duration;

use crate::face::Axis;
use crate::id::CubieId;

/// Visual side of a turn.
///
/// The turn engine issues rotation requests through this trait and never
/// reads visual state back, so the logical lattice may run ahead of what
/// is settled on screen. Calls for one turn arrive in program order:
/// each animation frame issues one `rotate_around` per cubie in the
/// turning slice, followed by one `present`.
///
/// Renderers need not be `Send`. A cube driven directly on one thread
/// may hold thread-bound state; only a command service, which moves the
/// cube onto its worker thread, asks for `R: Renderer + Send`.
pub trait Renderer {
    /// Schedule a rotation of `cubie` by `angle` radians about the line
    /// through `pivot` along `axis`. Must not block on the animation.
    fn rotate_around(&mut self, cubie: CubieId, pivot: [f32; 3], axis: Axis, angle: f32);

    /// End of one animation frame.
    ///
    /// The default sleeps for `pause` so the frame stays on screen;
    /// headless renderers override it to return immediately.
    fn present(&mut self, pause: Duration) {
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn rotate_around(&mut self, cubie: CubieId, pivot: [f32; 3], axis: Axis, angle: f32) {
        (**self).rotate_around(cubie, pivot, axis, angle);
    }

    fn present(&mut self, pause: Duration) {
        (**self).present(pause);
    }
}
