//! Runners: validating front-ends over the inference pipelines.
//!
//! A runner checks its input, lazily builds the cached pipeline on first
//! use, and converts every pipeline error into a display-ready
//! [`RunOutcome`], so nothing downstream ever sees a raw error.

use std::time::Instant;

pub(crate) mod image;
pub(crate) mod text;

pub use image::ImageRunner;
pub use text::TextRunner;

use crate::engine::{RunRequest, TaskRunner};
use crate::pipelines::image_classification::ImageSource;

/// A single labeled classification with confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Label text.
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f32,
}

/// What a runner hands back: ranked results or a display-ready message.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Classification results, ordered by descending score.
    Success(Vec<ClassificationResult>),
    /// A human-readable reason the run produced no results.
    Failure(String),
}

/// Runs `operation`, reporting its wall time through the logging facade.
pub fn with_timing<T>(operation: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    log::debug!(
        "{operation} took {:.1} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
    out
}

/// The production runner set: one [`TextRunner`] and one [`ImageRunner`],
/// routed by the request's task kind.
#[derive(Default)]
pub struct Runners {
    /// Sentiment runner.
    pub text: TextRunner,
    /// Image classification runner.
    pub image: ImageRunner,
}

impl Runners {
    /// Creates a runner set from explicitly configured runners.
    pub fn new(text: TextRunner, image: ImageRunner) -> Self {
        Self { text, image }
    }
}

impl TaskRunner for Runners {
    fn run(&self, request: &RunRequest) -> RunOutcome {
        match request {
            RunRequest::Text { input } => self.text.analyze(input),
            RunRequest::Image { path: None, .. } => {
                RunOutcome::Failure("Please choose an image first.".into())
            }
            RunRequest::Image {
                path: Some(path),
                top_k,
            } => self
                .image
                .classify(&ImageSource::from(path.as_path()), *top_k),
        }
    }
}
