use crate::error::Result;
use candle_core::Tensor;

pub trait ImageClassificationModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Side length of the square input the model expects.
    fn image_size(&self) -> usize;

    /// Scores a preprocessed `(3, H, W)` pixel tensor and returns the
    /// `top_k` labels, ordered by descending score.
    fn classify(
        &self,
        pixels: &Tensor,
        top_k: usize,
    ) -> Result<Vec<super::pipeline::LabelScore>>;

    fn device(&self) -> &candle_core::Device;
}
