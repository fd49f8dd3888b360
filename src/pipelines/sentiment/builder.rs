use super::model::SentimentModel;
use super::pipeline::SentimentPipeline;
use crate::error::Result;
use crate::pipelines::cache::{global_cache, ModelOptions};
use crate::pipelines::utils::{build_cache_key, DeviceRequest};

/// Builder for creating [`SentimentPipeline`] instances.
///
/// Use [`Self::modernbert`] as the entry point.
///
/// # Examples
///
/// ```rust,no_run
/// # use inferdesk::sentiment::{ModernBertSize, SentimentPipelineBuilder};
/// # fn main() -> inferdesk::error::Result<()> {
/// let pipeline = SentimentPipelineBuilder::modernbert(ModernBertSize::Base)
///     .cuda(0)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SentimentPipelineBuilder<M: SentimentModel> {
    options: M::Options,
    device_request: DeviceRequest,
}

impl<M: SentimentModel> SentimentPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self {
            options,
            device_request: DeviceRequest::Cpu,
        }
    }

    /// Use CPU for inference (default).
    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    /// Use a specific CUDA GPU for inference.
    pub fn cuda(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    /// Builds the pipeline with configured settings.
    ///
    /// The model is constructed at most once per (options, device) pair;
    /// later builds reuse the cached handle.
    ///
    /// # Errors
    ///
    /// Returns an error if model loading or device initialization fails.
    pub fn build(self) -> Result<SentimentPipeline<M>>
    where
        M: Send + Sync + 'static,
        M::Options: ModelOptions + Clone,
    {
        let device = self.device_request.resolve()?;
        let key = build_cache_key(&self.options, &device);

        let options = self.options.clone();
        let model = global_cache().get_or_create(&key, move || M::new(options, device))?;

        let tokenizer = M::get_tokenizer(self.options)?;

        Ok(SentimentPipeline { model, tokenizer })
    }
}

impl SentimentPipelineBuilder<super::SentimentModernBert> {
    /// Creates a builder for a ModernBERT sentiment model.
    pub fn modernbert(size: crate::models::ModernBertSize) -> Self {
        Self::new(size)
    }
}
