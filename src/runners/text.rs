use super::{with_timing, ClassificationResult, RunOutcome};
use crate::models::ModernBertSize;
use crate::pipelines::sentiment::SentimentPipelineBuilder;
use crate::pipelines::utils::DeviceRequest;

/// Classifies the sentiment of typed text.
///
/// The pipeline is built lazily on the first non-empty input and shared
/// through the process-wide model cache afterwards. Labels are uppercased,
/// so callers see `POSITIVE` / `NEGATIVE`.
pub struct TextRunner {
    size: ModernBertSize,
    device: DeviceRequest,
}

impl TextRunner {
    /// Creates a runner for the given model size, on CPU.
    pub fn new(size: ModernBertSize) -> Self {
        Self {
            size,
            device: DeviceRequest::Cpu,
        }
    }

    /// Use a specific CUDA GPU for inference.
    pub fn cuda(mut self, index: usize) -> Self {
        self.device = DeviceRequest::Cuda(index);
        self
    }

    /// Analyze the sentiment of `text`.
    ///
    /// Whitespace-only input fails fast without building the pipeline.
    /// On success the outcome holds exactly one result.
    pub fn analyze(&self, text: &str) -> RunOutcome {
        let text = text.trim();
        if text.is_empty() {
            return RunOutcome::Failure("Please enter some text.".into());
        }

        with_timing("analyze_sentiment", || {
            let builder = match &self.device {
                DeviceRequest::Cpu => SentimentPipelineBuilder::modernbert(self.size),
                DeviceRequest::Cuda(i) => {
                    SentimentPipelineBuilder::modernbert(self.size).cuda(*i)
                }
            };

            match builder.build().and_then(|pipeline| pipeline.run(text)) {
                Ok(output) => RunOutcome::Success(vec![ClassificationResult {
                    label: output.prediction.label.to_uppercase(),
                    score: output.prediction.score,
                }]),
                Err(e) => RunOutcome::Failure(e.to_string()),
            }
        })
    }
}

impl Default for TextRunner {
    fn default() -> Self {
        Self::new(ModernBertSize::Base)
    }
}
