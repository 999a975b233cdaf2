//! The interactive cube: lattice, renderer, move log, and turn pipeline.

use std::fmt;
use std::time::Instant;

use cubelet_core::{Face, Move, Renderer, DEMO_SCRAMBLE};
use cubelet_lattice::{build_cubies, Cubie, Lattice};

use crate::animation::TurnAnimation;
use crate::config::{ConfigError, CubeConfig};
use crate::interpreter::parse_moves;
use crate::metrics::RunMetrics;
use crate::move_log::MoveLog;

// ── InterpreterState ───────────────────────────────────────────────

/// What the cube is doing right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InterpreterState {
    /// No move string is running.
    #[default]
    Idle,
    /// Applying a user move string.
    Processing,
    /// Replaying the move log back to the checkpoint.
    Resolving,
}

impl fmt::Display for InterpreterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Processing => write!(f, "processing"),
            Self::Resolving => write!(f, "resolving"),
        }
    }
}

// ── Cube ───────────────────────────────────────────────────────────

/// A 3x3x3 cube wired to a renderer.
///
/// Every mutation goes through `&mut self`, so one cube never runs two
/// move streams at once. To drive a cube from several threads, hand it
/// to a [`CubeService`](crate::CubeService).
///
/// # Examples
///
/// ```
/// use cubelet_core::{Axis, CubieId, Renderer};
/// use cubelet_engine::{Cube, CubeConfig};
///
/// struct Headless;
/// impl Renderer for Headless {
///     fn rotate_around(&mut self, _: CubieId, _: [f32; 3], _: Axis, _: f32) {}
/// }
///
/// let mut cube = Cube::new(CubeConfig::instant(), Headless).unwrap();
/// assert_eq!(cube.apply_move_string("R U R' U'"), 4);
/// assert_eq!(cube.move_log().to_string(), "URU'R'");
/// assert_eq!(cube.resolve(), 4);
/// assert!(cube.lattice().is_solved());
/// ```
pub struct Cube<R: Renderer> {
    config: CubeConfig,
    lattice: Lattice,
    cubies: Vec<Cubie>,
    renderer: R,
    log: MoveLog,
    recording: bool,
    state: InterpreterState,
    last_metrics: RunMetrics,
}

impl<R: Renderer> Cube<R> {
    /// Validate `config`, build the 27 cubies in their solved
    /// arrangement, and apply the demo scramble if configured.
    ///
    /// The scramble is recorded like any other move string, so a
    /// scrambled cube resolves back to solved.
    pub fn new(config: CubeConfig, renderer: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let recording = config.record_undo;
        let mut cube = Self {
            config,
            lattice: Lattice::solved(),
            cubies: build_cubies(),
            renderer,
            log: MoveLog::new(),
            recording,
            state: InterpreterState::Idle,
            last_metrics: RunMetrics::default(),
        };
        if cube.config.start_scrambled {
            let n = cube.apply_move_string(DEMO_SCRAMBLE);
            log::info!("applied demo scramble ({n} turns)");
        }
        Ok(cube)
    }

    /// Quarter-turn `face`.
    ///
    /// Snapshots the face slice, animates its nine cubies through the
    /// renderer, then re-indexes the lattice. The turn is recorded in the
    /// move log while recording is active, and replaces
    /// [`last_metrics`](Self::last_metrics) like a one-move string.
    pub fn turn(&mut self, face: Face, inverse: bool) {
        self.run(InterpreterState::Processing, &[Move::new(face, inverse)]);
    }

    /// Parse `text` and apply its moves in order.
    ///
    /// Unrecognized characters are skipped. Returns the number of turns
    /// applied, which is zero for input with no face letters.
    pub fn apply_move_string(&mut self, text: &str) -> usize {
        let moves = parse_moves(text);
        self.run(InterpreterState::Processing, &moves)
    }

    /// Undo everything recorded since the last checkpoint.
    ///
    /// Replays the move log with recording suspended, clears it, and
    /// resumes recording. The current arrangement becomes the new
    /// checkpoint. Returns the number of turns replayed.
    pub fn resolve(&mut self) -> usize {
        let undo: Vec<Move> = self.log.iter().copied().collect();
        log::info!("resolving {} turns", undo.len());
        self.recording = false;
        let n = self.run(InterpreterState::Resolving, &undo);
        self.log.clear();
        self.recording = self.config.record_undo;
        n
    }

    fn run(&mut self, state: InterpreterState, moves: &[Move]) -> usize {
        log::trace!("{} -> {state}", self.state);
        self.state = state;
        let start = Instant::now();
        let mut metrics = RunMetrics::default();
        for &mv in moves {
            self.step(mv, &mut metrics);
        }
        metrics.total_us = start.elapsed().as_micros() as u64;
        self.last_metrics = metrics;
        log::trace!("{state} -> {}", InterpreterState::Idle);
        self.state = InterpreterState::Idle;
        moves.len()
    }

    fn step(&mut self, mv: Move, metrics: &mut RunMetrics) {
        log::debug!("turn {mv}");
        let slice = self.lattice.slice(mv.face);
        let plan = TurnAnimation::plan(&self.config, mv);
        let (rotations, frames) = plan.issue(&mut self.renderer, &slice);
        self.lattice.turn(mv.face, mv.inverse);
        if self.recording {
            self.log.record(mv);
        }
        metrics.turns_applied += 1;
        metrics.rotations_issued += rotations;
        metrics.frames_presented += frames;
    }

    /// The logical arrangement. May run ahead of what the renderer shows.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// All 27 cubies, indexed by [`CubieId`](cubelet_core::CubieId).
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Inverse moves recorded since the last checkpoint.
    pub fn move_log(&self) -> &MoveLog {
        &self.log
    }

    /// Current interpreter state. Always [`InterpreterState::Idle`]
    /// between calls.
    pub fn state(&self) -> InterpreterState {
        self.state
    }

    /// Whether applied moves are currently being recorded.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// The configuration this cube was built with.
    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    /// Counters from the most recent turn, move string or resolve.
    pub fn last_metrics(&self) -> &RunMetrics {
        &self.last_metrics
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consume the cube and return its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer> fmt::Debug for Cube<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cube")
            .field("lattice", &self.lattice)
            .field("log", &self.log.to_string())
            .field("recording", &self.recording)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
