//! Serialized command queue running a [`Cube`] on a worker thread.
//!
//! The worker owns the cube exclusively (moved in via `thread::spawn`).
//! No locks: requests arrive on one bounded crossbeam channel and
//! replies go back via per-request oneshot channels. Because every
//! request passes through the same queue, a resolve can never
//! interleave with a move string that was submitted before it.
//!
//! ```text
//! Caller thread(s)                  Worker ("cubelet-cube")
//!     |                                  |
//!     |--submit_moves()/submit_resolve()>| job_rx.recv()
//!     |   [job_tx: bounded(max_queued)]  | cube.apply_move_string()
//!     |                                  |   or cube.resolve()
//!     |<--Completion via reply_tx--------|
//!     |                                  |
//!     |--shutdown(): drop job_tx-------->| drain remaining jobs, exit
//!     |<--join() returns the Cube--------|
//! ```

use std::fmt;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, TrySendError};

use cubelet_core::Renderer;
use cubelet_lattice::Lattice;

use crate::cube::Cube;

// ── Error types ──────────────────────────────────────────────────

/// Error submitting a request to the worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The worker has shut down or died.
    Shutdown,
    /// The request queue is full (back-pressure).
    ChannelFull,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutdown => write!(f, "cube worker has shut down"),
            Self::ChannelFull => write!(f, "request queue full"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Error starting or stopping the worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceError {
    /// The worker thread panicked; the cube is lost.
    WorkerPanicked,
    /// The OS refused to spawn the worker thread.
    ThreadSpawnFailed {
        /// The underlying I/O error, rendered.
        reason: String,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerPanicked => write!(f, "cube worker panicked"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "failed to spawn cube worker: {reason}")
            }
        }
    }
}

impl std::error::Error for ServiceError {}

// ── Requests and replies ─────────────────────────────────────────

enum Request {
    Moves(String),
    Resolve,
    Snapshot,
}

/// A request paired with the channel its completion goes back on.
struct Job {
    request: Request,
    reply: Sender<Completion>,
}

/// Outcome of one processed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Quarter turns applied while processing the request.
    pub turns_applied: usize,
    /// The move log after the request, in compact notation.
    pub move_log: String,
    /// The lattice after the request.
    pub lattice: Lattice,
}

/// Handle to a queued request.
///
/// Dropping it does not cancel the request; the worker still runs it
/// and discards the reply.
#[derive(Debug)]
pub struct Pending {
    reply_rx: Receiver<Completion>,
}

impl Pending {
    /// Block until the worker has processed the request.
    ///
    /// Fails with [`SubmitError::Shutdown`] if the worker died before
    /// replying.
    pub fn wait(self) -> Result<Completion, SubmitError> {
        self.reply_rx.recv().map_err(|_| SubmitError::Shutdown)
    }
}

// ── Worker ───────────────────────────────────────────────────────

fn run_worker<R: Renderer>(mut cube: Cube<R>, job_rx: Receiver<Job>) -> Cube<R> {
    // Ends once every sender is gone and the queue is drained.
    for job in job_rx.iter() {
        let turns_applied = match &job.request {
            Request::Moves(text) => cube.apply_move_string(text),
            Request::Resolve => cube.resolve(),
            Request::Snapshot => 0,
        };
        let completion = Completion {
            turns_applied,
            move_log: cube.move_log().to_string(),
            lattice: cube.lattice().clone(),
        };
        if job.reply.send(completion).is_err() {
            log::warn!("request completed but its caller is gone");
        }
    }
    cube
}

// ── CubeService ──────────────────────────────────────────────────

/// A cube running on its own worker thread.
///
/// Requests from any number of threads run strictly in submission
/// order, one at a time. Dropping the service shuts the worker down
/// after it drains the queue.
///
/// # Examples
///
/// ```
/// use cubelet_core::{Axis, CubieId, Renderer};
/// use cubelet_engine::{Cube, CubeConfig, CubeService};
///
/// struct Headless;
/// impl Renderer for Headless {
///     fn rotate_around(&mut self, _: CubieId, _: [f32; 3], _: Axis, _: f32) {}
/// }
///
/// let cube = Cube::new(CubeConfig::instant(), Headless).unwrap();
/// let service = CubeService::start(cube).unwrap();
/// let moved = service.submit_moves("R U").unwrap();
/// let resolved = service.submit_resolve().unwrap();
/// assert_eq!(moved.wait().unwrap().move_log, "U'R'");
/// assert_eq!(resolved.wait().unwrap().turns_applied, 2);
/// let cube = service.shutdown().unwrap();
/// assert!(cube.lattice().is_solved());
/// ```
pub struct CubeService<R: Renderer + Send + 'static> {
    job_tx: Option<Sender<Job>>,
    worker: Option<JoinHandle<Cube<R>>>,
}

impl<R: Renderer + Send + 'static> CubeService<R> {
    /// Move `cube` onto a new worker thread.
    ///
    /// The queue holds up to `cube.config().max_queued_requests` requests.
    pub fn start(cube: Cube<R>) -> Result<Self, ServiceError> {
        let capacity = cube.config().max_queued_requests;
        let (job_tx, job_rx) = crossbeam_channel::bounded(capacity);
        let worker = thread::Builder::new()
            .name("cubelet-cube".into())
            .spawn(move || run_worker(cube, job_rx))
            .map_err(|e| ServiceError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;
        log::info!("cube worker started (queue capacity {capacity})");
        Ok(Self {
            job_tx: Some(job_tx),
            worker: Some(worker),
        })
    }

    /// Queue a move string.
    pub fn submit_moves(&self, text: impl Into<String>) -> Result<Pending, SubmitError> {
        self.submit(Request::Moves(text.into()))
    }

    /// Queue a resolve. It runs after every request already queued.
    pub fn submit_resolve(&self) -> Result<Pending, SubmitError> {
        self.submit(Request::Resolve)
    }

    /// Queue a read-only request reporting the current state.
    pub fn submit_snapshot(&self) -> Result<Pending, SubmitError> {
        self.submit(Request::Snapshot)
    }

    fn submit(&self, request: Request) -> Result<Pending, SubmitError> {
        let job_tx = self.job_tx.as_ref().ok_or(SubmitError::Shutdown)?;

        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        let job = Job {
            request,
            reply: reply_tx,
        };

        job_tx.try_send(job).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::ChannelFull,
            TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })?;
        Ok(Pending { reply_rx })
    }

    /// Number of requests waiting in the queue.
    pub fn queued(&self) -> usize {
        self.job_tx.as_ref().map_or(0, |tx| tx.len())
    }

    /// Close the queue, let the worker finish what is queued, and
    /// return the cube.
    pub fn shutdown(mut self) -> Result<Cube<R>, ServiceError> {
        match self.stop() {
            Some(Ok(cube)) => Ok(cube),
            _ => Err(ServiceError::WorkerPanicked),
        }
    }

    fn stop(&mut self) -> Option<thread::Result<Cube<R>>> {
        self.job_tx.take();
        let handle = self.worker.take()?;
        let joined = handle.join();
        match &joined {
            Ok(_) => log::info!("cube worker stopped"),
            Err(_) => log::warn!("cube worker panicked"),
        }
        Some(joined)
    }
}

impl<R: Renderer + Send + 'static> Drop for CubeService<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<R: Renderer + Send + 'static> fmt::Debug for CubeService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CubeService")
            .field("running", &self.worker.is_some())
            .field("queued", &self.queued())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CubeConfig;
    use cubelet_core::{Axis, CubieId};
    use cubelet_test_utils::{NoopRenderer, PanickingRenderer};
    use std::time::Duration;

    fn service() -> CubeService<NoopRenderer> {
        CubeService::start(Cube::new(CubeConfig::instant(), NoopRenderer).unwrap()).unwrap()
    }

    /// Blocks in `present` until its gate sender is dropped.
    struct GatedRenderer {
        gate: Receiver<()>,
    }

    impl Renderer for GatedRenderer {
        fn rotate_around(&mut self, _: CubieId, _: [f32; 3], _: Axis, _: f32) {}

        fn present(&mut self, _: Duration) {
            let _ = self.gate.recv();
        }
    }

    #[test]
    fn lifecycle_start_and_shutdown() {
        let svc = service();
        let cube = svc.shutdown().unwrap();
        assert!(cube.lattice().is_solved());
    }

    #[test]
    fn requests_complete_in_submission_order() {
        let svc = service();
        let pending: Vec<Pending> = ["U", "R'", "F"]
            .iter()
            .map(|t| svc.submit_moves(*t).unwrap())
            .collect();
        let logs: Vec<String> = pending
            .into_iter()
            .map(|p| p.wait().unwrap().move_log)
            .collect();
        assert_eq!(logs, ["U'", "RU'", "F'RU'"]);
    }

    #[test]
    fn queued_resolve_runs_after_queued_moves() {
        let svc = service();
        let a = svc.submit_moves("F'D'F'L'").unwrap();
        let b = svc.submit_moves("D'LB'").unwrap();
        let r = svc.submit_resolve().unwrap();
        drop((a, b));
        let done = r.wait().unwrap();
        assert_eq!(done.turns_applied, 7);
        assert!(done.move_log.is_empty());
        assert!(done.lattice.is_solved());
        assert!(svc.shutdown().unwrap().lattice().is_solved());
    }

    #[test]
    fn snapshot_applies_nothing() {
        let svc = service();
        svc.submit_moves("L").unwrap().wait().unwrap();
        let snap = svc.submit_snapshot().unwrap().wait().unwrap();
        assert_eq!(snap.turns_applied, 0);
        assert_eq!(snap.move_log, "L'");
        assert!(!snap.lattice.is_solved());
    }

    #[test]
    fn full_queue_reports_back_pressure() {
        let (gate_tx, gate_rx) = crossbeam_channel::bounded::<()>(0);
        let cfg = CubeConfig {
            max_queued_requests: 1,
            ..CubeConfig::instant()
        };
        let cube = Cube::new(cfg, GatedRenderer { gate: gate_rx }).unwrap();
        let svc = CubeService::start(cube).unwrap();

        // The worker blocks on the first request, so at most two fit.
        let mut results = Vec::new();
        for _ in 0..4 {
            results.push(svc.submit_moves("U"));
        }
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(SubmitError::ChannelFull))));

        drop(gate_tx);
        let cube = svc.shutdown().unwrap();
        let applied = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(cube.move_log().len(), applied);
    }

    #[test]
    fn worker_panic_surfaces_as_errors() {
        let cube = Cube::new(CubeConfig::instant(), PanickingRenderer::new(3)).unwrap();
        let svc = CubeService::start(cube).unwrap();
        let pending = svc.submit_moves("U").unwrap();
        assert_eq!(pending.wait(), Err(SubmitError::Shutdown));
        assert!(matches!(
            svc.submit_moves("U").map(|_| ()),
            Err(SubmitError::Shutdown) | Ok(())
        ));
        assert!(matches!(svc.shutdown(), Err(ServiceError::WorkerPanicked)));
    }

    #[test]
    fn drop_triggers_shutdown() {
        let svc = service();
        let _pending = svc.submit_moves("R U R' U'").unwrap();
        drop(svc);
        // If this doesn't hang, shutdown worked.
    }

    #[test]
    fn error_messages() {
        assert_eq!(SubmitError::ChannelFull.to_string(), "request queue full");
        let e = ServiceError::ThreadSpawnFailed {
            reason: "no threads".into(),
        };
        assert_eq!(e.to_string(), "failed to spawn cube worker: no threads");
    }
}
