use super::model::ImageClassificationModel;
use super::pipeline::ImageClassificationPipeline;
use crate::error::Result;
use crate::pipelines::cache::{global_cache, ModelOptions};
use crate::pipelines::utils::{build_cache_key, DeviceRequest};

/// Builder for creating [`ImageClassificationPipeline`] instances.
///
/// Use [`Self::vit`] as the entry point.
///
/// # Examples
///
/// ```rust,no_run
/// # use inferdesk::image_classification::{ImageClassificationPipelineBuilder, VitSize};
/// # fn main() -> inferdesk::error::Result<()> {
/// let pipeline = ImageClassificationPipelineBuilder::vit(VitSize::Base)
///     .cuda(0)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ImageClassificationPipelineBuilder<M: ImageClassificationModel> {
    options: M::Options,
    device_request: DeviceRequest,
}

impl<M: ImageClassificationModel> ImageClassificationPipelineBuilder<M> {
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
    pub fn build(self) -> Result<ImageClassificationPipeline<M>>
    where
        M: Send + Sync + 'static,
        M::Options: ModelOptions + Clone,
    {
        let device = self.device_request.resolve()?;
        let key = build_cache_key(&self.options, &device);

        let options = self.options;
        let model = global_cache().get_or_create(&key, move || M::new(options, device))?;

        Ok(ImageClassificationPipeline { model })
    }
}

impl ImageClassificationPipelineBuilder<super::ImageNetVit> {
    /// Creates a builder for a ViT ImageNet classifier.
    pub fn vit(size: crate::models::VitSize) -> Self {
        Self::new(size)
    }
}
