use std::sync::Arc;

use super::model::SentimentModel;
use crate::error::Result;
use crate::pipelines::stats::PipelineStats;
use tokenizers::Tokenizer;

// ============ Output types ============

/// Raw model output: the winning label and its probability.
#[derive(Debug, Clone)]
pub struct SentimentResult {
    pub label: String,
    pub score: f32,
}

/// A sentiment prediction with label and confidence score.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// The predicted sentiment label.
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f32,
}

/// Output from [`SentimentPipeline::run`].
#[derive(Debug)]
pub struct Output {
    /// Sentiment prediction.
    pub prediction: Prediction,
    /// Execution statistics.
    pub stats: PipelineStats,
}

// ============ Pipeline ============

/// Classifies the sentiment of a single text.
///
/// Construct with [`SentimentPipelineBuilder`](super::SentimentPipelineBuilder).
/// The underlying model handle is shared through the process-wide cache, so
/// building a second pipeline with the same options reuses the same weights.
pub struct SentimentPipeline<M: SentimentModel> {
    pub(crate) model: Arc<M>,
    pub(crate) tokenizer: Tokenizer,
}

impl<M: SentimentModel> SentimentPipeline<M> {
    /// Analyze the sentiment of `text`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use inferdesk::sentiment::{ModernBertSize, SentimentPipelineBuilder};
    /// # fn main() -> inferdesk::error::Result<()> {
    /// # let pipeline = SentimentPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
    /// let output = pipeline.run("I love this!")?;
    /// println!("{} ({:.2})", output.prediction.label, output.prediction.score);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run(&self, text: &str) -> Result<Output> {
        let stats_builder = PipelineStats::start();

        let result = self.model.predict_with_score(&self.tokenizer, text)?;

        Ok(Output {
            prediction: Prediction {
                label: result.label,
                score: result.score,
            },
            stats: stats_builder.finish(),
        })
    }

    /// Returns the device (CPU/GPU) the model is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}
