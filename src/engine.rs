//! Background dispatch for classification runs.
//!
//! [`RunEngine`] owns one worker thread. The UI loop schedules a request,
//! keeps pumping its own events, and picks the single result up later with
//! a non-blocking poll. At most one request is in flight: scheduling while
//! a run is active is rejected with [`ScheduleError::Busy`], so results
//! always come back in the order requests were accepted.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::runners::RunOutcome;

/// The task selected in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    /// Sentiment analysis of typed text.
    Text,
    /// Classification of a chosen image.
    Image,
}

impl TaskKind {
    /// Returns the kind as a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Text => "text",
            TaskKind::Image => "image",
        }
    }
}

/// One user-initiated run, captured from the UI state at trigger time.
#[derive(Clone, Debug)]
pub enum RunRequest {
    /// Analyze the sentiment of the typed text.
    Text {
        /// The text as typed, untrimmed.
        input: String,
    },
    /// Classify the chosen image. `path` is `None` when no file was chosen.
    Image {
        /// Path of the chosen image file, if any.
        path: Option<PathBuf>,
        /// Maximum number of labels to return.
        top_k: usize,
    },
}

impl RunRequest {
    /// The task kind this request belongs to.
    pub fn kind(&self) -> TaskKind {
        match self {
            RunRequest::Text { .. } => TaskKind::Text,
            RunRequest::Image { .. } => TaskKind::Image,
        }
    }
}

/// Capability the engine dispatches to: turn one request into one outcome.
///
/// Implementations must never panic or leak errors; anything that goes
/// wrong is reported as [`RunOutcome::Failure`].
pub trait TaskRunner {
    /// Executes the request and reports the outcome.
    fn run(&self, request: &RunRequest) -> RunOutcome;
}

/// Current state of the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Ready to accept a request.
    Idle,
    /// A request is being processed on the worker thread.
    Running,
}

impl EngineState {
    /// Returns the state as a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineState::Idle => "idle",
            EngineState::Running => "running",
        }
    }
}

/// The completed run the worker hands back to the UI loop.
#[derive(Debug)]
pub struct RunResponse {
    /// Identifier assigned when the request was scheduled.
    pub id: u64,
    /// The originating request, echoed back for rendering.
    pub request: RunRequest,
    /// Wall time the run took on the worker thread.
    pub duration: Duration,
    /// What the runner produced.
    pub outcome: RunOutcome,
}

/// Result of a non-blocking poll.
pub enum EnginePoll {
    /// A run completed; here is its response.
    Ready(RunResponse),
    /// Nothing finished yet; includes the current engine state.
    Empty(EngineState),
    /// The worker is gone and no further responses will arrive.
    Error(String),
}

/// Why a request was not accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// A request is already in flight; try again once it completes.
    #[error("a run is already in flight")]
    Busy,
    /// The engine has been stopped and accepts no further requests.
    #[error("the engine has been stopped")]
    Stopped,
}

struct EngineRequest {
    id: u64,
    request: RunRequest,
}

/// Dispatches classification runs to a dedicated worker thread.
///
/// The runner is moved onto the worker at construction; the engine itself
/// stays on the UI thread and is polled there.
pub struct RunEngine {
    state: Arc<Mutex<EngineState>>,
    req_tx: Option<mpsc::Sender<EngineRequest>>,
    rep_rx: mpsc::Receiver<RunResponse>,
    worker: Option<JoinHandle<()>>,
    next_id: AtomicU64,
}

impl RunEngine {
    /// Creates an engine and spawns its worker thread around `runner`.
    pub fn new(runner: impl TaskRunner + Send + 'static) -> Self {
        let (req_tx, req_rx) = mpsc::channel::<EngineRequest>();
        let (rep_tx, rep_rx) = mpsc::channel::<RunResponse>();
        let state = Arc::new(Mutex::new(EngineState::Idle));

        let worker = std::thread::spawn({
            let state = state.clone();
            move || {
                while let Ok(EngineRequest { id, request }) = req_rx.recv() {
                    log::debug!("Dispatching run #{id} ({})", request.kind().as_str());

                    let start_time = Instant::now();
                    let outcome = runner.run(&request);
                    let duration = start_time.elapsed();

                    log::debug!("Run #{id} finished in {duration:?}");

                    let _ = rep_tx.send(RunResponse {
                        id,
                        request,
                        duration,
                        outcome,
                    });

                    *state.lock().unwrap() = EngineState::Idle;
                }
            }
        });

        Self {
            state,
            req_tx: Some(req_tx),
            rep_rx,
            worker: Some(worker),
            next_id: AtomicU64::new(0),
        }
    }

    /// Returns the current state of the engine.
    pub fn state(&self) -> EngineState {
        self.state.lock().unwrap().clone()
    }

    /// Hands `request` to the worker thread and returns its id.
    ///
    /// Rejects with [`ScheduleError::Busy`] while a previous request is
    /// still in flight; the state flip to `Running` and the acceptance
    /// check happen under one lock, so two callers cannot both win.
    pub fn schedule(&self, request: RunRequest) -> Result<u64, ScheduleError> {
        let tx = self.req_tx.as_ref().ok_or(ScheduleError::Stopped)?;

        let mut state = self.state.lock().unwrap();
        if *state == EngineState::Running {
            return Err(ScheduleError::Busy);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tx.send(EngineRequest { id, request })
            .map_err(|_| ScheduleError::Stopped)?;
        *state = EngineState::Running;

        Ok(id)
    }

    /// Attempts to retrieve a completed run without blocking.
    pub fn try_poll(&self) -> EnginePoll {
        match self.rep_rx.try_recv() {
            Ok(response) => EnginePoll::Ready(response),
            Err(mpsc::TryRecvError::Empty) => EnginePoll::Empty(self.state()),
            Err(mpsc::TryRecvError::Disconnected) => {
                log::error!("Response channel disconnected");
                EnginePoll::Error("Response channel disconnected".to_string())
            }
        }
    }

    /// Stops the engine: closes the request channel and waits for the
    /// worker to finish its current run.
    pub fn stop(&mut self) {
        self.req_tx.take();
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RunEngine {
    fn drop(&mut self) {
        self.stop();
    }
}
