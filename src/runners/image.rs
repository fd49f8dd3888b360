use super::{with_timing, ClassificationResult, RunOutcome};
use crate::models::VitSize;
use crate::pipelines::image_classification::{ImageClassificationPipelineBuilder, ImageSource};
use crate::pipelines::utils::DeviceRequest;

/// Classifies an image into ranked ImageNet labels.
///
/// The pipeline is built lazily on the first valid input and shared
/// through the process-wide model cache afterwards.
pub struct ImageRunner {
    size: VitSize,
    device: DeviceRequest,
}

impl ImageRunner {
    /// Creates a runner for the given model size, on CPU.
    pub fn new(size: VitSize) -> Self {
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

    /// Classify `source`, returning at most `top_k` labels ordered by
    /// descending score.
    ///
    /// A path that does not exist fails fast without building the
    /// pipeline.
    pub fn classify(&self, source: &ImageSource, top_k: usize) -> RunOutcome {
        if let ImageSource::Path(path) = source {
            if !path.exists() {
                return RunOutcome::Failure(format!("Image not found: {}", path.display()));
            }
        }

        with_timing("classify_image", || {
            let builder = match &self.device {
                DeviceRequest::Cpu => ImageClassificationPipelineBuilder::vit(self.size),
                DeviceRequest::Cuda(i) => {
                    ImageClassificationPipelineBuilder::vit(self.size).cuda(*i)
                }
            };

            match builder
                .build()
                .and_then(|pipeline| pipeline.run(source, top_k))
            {
                Ok(output) => RunOutcome::Success(
                    output
                        .predictions
                        .into_iter()
                        .map(|p| ClassificationResult {
                            label: p.label,
                            score: p.score,
                        })
                        .collect(),
                ),
                Err(e) => RunOutcome::Failure(e.to_string()),
            }
        })
    }
}

impl Default for ImageRunner {
    fn default() -> Self {
        Self::new(VitSize::Base)
    }
}
