//! Reusable lattice and move-string fixtures.
//!
//! - [`ALL_TOKENS`]: the twelve quarter-turn tokens.
//! - [`scrambled_lattice`]: a lattice with a move string applied directly.
//! - [`arb_move_string`]: proptest strategy for notation strings.
//! - [`PanickingRenderer`]: fails deterministically after N rotations.

use std::time::Duration;

use cubelet_core::{Axis, CubieId, Face, Renderer};
use cubelet_lattice::Lattice;
use proptest::prelude::*;

/// Every quarter-turn token, forward then inverse per face.
pub const ALL_TOKENS: [&str; 12] = [
    "U", "U'", "R", "R'", "F", "F'", "D", "D'", "L", "L'", "B", "B'",
];

/// Solved lattice with the turns in `moves` applied, bypassing any
/// renderer or log.
///
/// Only strict notation is understood: a face letter with an optional
/// trailing `'`. Other characters are skipped.
pub fn scrambled_lattice(moves: &str) -> Lattice {
    let mut lattice = Lattice::solved();
    let mut chars = moves.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(face) = Face::from_letter(c) {
            let inverse = chars.next_if_eq(&'\'').is_some();
            lattice.turn(face, inverse);
        }
    }
    lattice
}

/// Move strings of up to `max_len` tokens, with random separators
/// between some tokens.
pub fn arb_move_string(max_len: usize) -> impl Strategy<Value = String> {
    let token = prop::sample::select(ALL_TOKENS.to_vec());
    let sep = prop::sample::select(vec!["", "", " ", ",", " x "]);
    prop::collection::vec((token, sep), 0..=max_len).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(t, s)| format!("{t}{s}"))
            .collect::<String>()
    })
}

/// Panics on the rotation after `succeed_count` successful ones.
///
/// Useful for testing how a command service reports a dead worker.
#[derive(Debug)]
pub struct PanickingRenderer {
    pub succeed_count: usize,
    calls: usize,
}

impl PanickingRenderer {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: 0,
        }
    }
}

impl Renderer for PanickingRenderer {
    fn rotate_around(&mut self, cubie: CubieId, _: [f32; 3], _: Axis, _: f32) {
        self.calls += 1;
        if self.calls > self.succeed_count {
            panic!(
                "deliberate failure rotating {cubie} after {} calls",
                self.succeed_count
            );
        }
    }

    fn present(&mut self, _: Duration) {}
}
