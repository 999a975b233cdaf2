//! Per-run counters for turns, move strings and resolves.

/// Work done by one [`turn`](crate::Cube::turn),
/// [`apply_move_string`](crate::Cube::apply_move_string) or
/// [`resolve`](crate::Cube::resolve) call.
///
/// Durations are in microseconds and include renderer pacing, so with
/// the default config each turn contributes roughly `anim_length`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Quarter turns applied to the lattice.
    pub turns_applied: usize,
    /// `rotate_around` calls issued to the renderer.
    pub rotations_issued: u64,
    /// Animation frames presented.
    pub frames_presented: u64,
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.turns_applied, 0);
        assert_eq!(m.rotations_issued, 0);
        assert_eq!(m.frames_presented, 0);
        assert_eq!(m.total_us, 0);
    }
}
