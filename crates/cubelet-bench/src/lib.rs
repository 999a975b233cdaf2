//! Benchmark profiles and utilities for the Cubelet puzzle engine.
//!
//! - [`bench_config`]: an unpaced [`CubeConfig`] so timings measure the
//!   engine, not the animation sleep
//! - [`deterministic_moves`] / [`deterministic_move_string`]: reproducible
//!   move sequences via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cubelet_core::{Face, Move, Moves};
use cubelet_engine::interpreter::format_moves;
use cubelet_engine::CubeConfig;

/// One frame per turn, no pause, undo recording on.
pub fn bench_config() -> CubeConfig {
    CubeConfig::instant()
}

/// Generate `len` deterministic quarter turns.
///
/// Uses a simple LCG over the seed. A move never directly follows its own
/// inverse, so every turn does real work.
pub fn deterministic_moves(len: usize, seed: u64) -> Moves {
    let mut state = seed;
    let mut moves = Moves::with_capacity(len);
    while moves.len() < len {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let face = Face::ALL[((state >> 33) % 6) as usize];
        let mv = Move::new(face, (state >> 40) & 1 == 1);
        if moves.last() == Some(&mv.inverse()) {
            continue;
        }
        moves.push(mv);
    }
    moves
}

/// [`deterministic_moves`] rendered as compact notation.
pub fn deterministic_move_string(len: usize, seed: u64) -> String {
    format_moves(&deterministic_moves(len, seed))
}
