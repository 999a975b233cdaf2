//! Cubelet Quickstart: scramble, inspect, and resolve a cube.
//!
//! Demonstrates:
//!   1. Implementing a renderer (here: one that counts frames)
//!   2. Building a CubeConfig and a Cube
//!   3. Applying move strings and reading the move log
//!   4. Resolving back to the checkpoint
//!   5. Driving the same cube through a CubeService
//!
//! Run with:
//!   cargo run --example quickstart

use std::time::Duration;

use cubelet_core::{Axis, CubieId, Renderer};
use cubelet_engine::{Cube, CubeConfig, CubeService};

// ─── Renderer: frame counter ────────────────────────────────────

#[derive(Default)]
struct FrameCounter {
    rotations: u64,
    frames: u64,
}

impl Renderer for FrameCounter {
    fn rotate_around(&mut self, _: CubieId, _: [f32; 3], _: Axis, _: f32) {
        self.rotations += 1;
    }

    fn present(&mut self, _: Duration) {
        self.frames += 1;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ─── Build ──────────────────────────────────────────────────

    let config = CubeConfig {
        frame_rate: 5,
        start_scrambled: true,
        ..CubeConfig::default()
    };
    let mut cube = Cube::new(config, FrameCounter::default())?;
    println!("scrambled cube, {} moves to undo", cube.move_log().len());
    println!("{}", cube.lattice());

    // ─── Apply a move string ────────────────────────────────────

    let n = cube.apply_move_string("R U R' U'");
    println!("applied {n} turns, move log: {}", cube.move_log());

    // ─── Resolve ────────────────────────────────────────────────

    let undone = cube.resolve();
    println!(
        "resolved {undone} turns, solved = {}, frames presented = {}",
        cube.lattice().is_solved(),
        cube.renderer().frames,
    );

    // ─── Service ────────────────────────────────────────────────

    let service = CubeService::start(cube)?;
    let moved = service.submit_moves("F B' L")?;
    let resolved = service.submit_resolve()?;
    println!("service log after moves: {}", moved.wait()?.move_log);
    println!("service resolve undid {} turns", resolved.wait()?.turns_applied);

    let cube = service.shutdown()?;
    let renderer = cube.into_renderer();
    println!(
        "total: {} rotations over {} frames",
        renderer.rotations, renderer.frames
    );
    Ok(())
}
