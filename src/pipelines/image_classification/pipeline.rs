use std::path::{Path, PathBuf};
use std::sync::Arc;

use candle_core::{DType, Tensor};
use image::{imageops::FilterType, DynamicImage};

use super::model::ImageClassificationModel;
use crate::error::Result;
use crate::pipelines::stats::PipelineStats;

// Per-channel statistics the ImageNet-pretrained checkpoints were trained with.
const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

// ============ Input / output types ============

/// An image to classify: a file on disk or an already-decoded image.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Path to an image file readable by the `image` crate.
    Path(PathBuf),
    /// A decoded in-memory image.
    Memory(DynamicImage),
}

impl From<PathBuf> for ImageSource {
    fn from(value: PathBuf) -> Self {
        ImageSource::Path(value)
    }
}

impl From<&Path> for ImageSource {
    fn from(value: &Path) -> Self {
        ImageSource::Path(value.to_path_buf())
    }
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        ImageSource::Path(PathBuf::from(value))
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(value: DynamicImage) -> Self {
        ImageSource::Memory(value)
    }
}

/// Raw model output: a label and its probability.
#[derive(Debug, Clone)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// A classification with label and confidence score.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// ImageNet label name.
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f32,
}

/// Output from [`ImageClassificationPipeline::run`].
#[derive(Debug)]
pub struct Output {
    /// Top predictions, ordered by descending score.
    pub predictions: Vec<Prediction>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

// ============ Pipeline ============

/// Classifies a single image into ImageNet labels.
///
/// Construct with
/// [`ImageClassificationPipelineBuilder`](super::ImageClassificationPipelineBuilder).
/// The underlying model handle is shared through the process-wide cache, so
/// building a second pipeline with the same options reuses the same weights.
pub struct ImageClassificationPipeline<M: ImageClassificationModel> {
    pub(crate) model: Arc<M>,
}

impl<M: ImageClassificationModel> ImageClassificationPipeline<M> {
    /// Classify `source`, returning at most `top_k` labels ordered by
    /// descending score.
    ///
    /// The image is decoded, converted to RGB, resized to the model's
    /// input resolution, and normalized before scoring. Any source format
    /// the `image` crate can decode is accepted.
    pub fn run(&self, source: &ImageSource, top_k: usize) -> Result<Output> {
        let stats_builder = PipelineStats::start();

        let pixels = self.to_input_tensor(source)?;
        let results = self.model.classify(&pixels, top_k)?;

        let predictions = results
            .into_iter()
            .map(|r| Prediction {
                label: r.label,
                score: r.score,
            })
            .collect();

        Ok(Output {
            predictions,
            stats: stats_builder.finish(),
        })
    }

    /// Returns the device (CPU/GPU) the model is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }

    fn to_input_tensor(&self, source: &ImageSource) -> Result<Tensor> {
        let img = match source {
            ImageSource::Path(path) => image::open(path)?,
            ImageSource::Memory(img) => img.clone(),
        };

        let size = self.model.image_size();
        let img = img
            .resize_exact(size as u32, size as u32, FilterType::Triangle)
            .to_rgb8();
        let data = img.into_raw();

        let device = self.model.device();
        let pixels = Tensor::from_vec(data, (size, size, 3), device)?
            .permute((2, 0, 1))?
            .to_dtype(DType::F32)?;

        let mean = Tensor::new(&IMAGENET_MEAN, device)?.reshape((3, 1, 1))?;
        let std = Tensor::new(&IMAGENET_STD, device)?.reshape((3, 1, 1))?;

        let pixels = (pixels / 255.)?.broadcast_sub(&mean)?.broadcast_div(&std)?;
        Ok(pixels)
    }
}
