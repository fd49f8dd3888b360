use crate::error::Result;
use tokenizers::Tokenizer;

pub trait SentimentModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    fn predict_with_score(
        &self,
        tokenizer: &Tokenizer,
        text: &str,
    ) -> Result<super::pipeline::SentimentResult>;

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &candle_core::Device;
}
