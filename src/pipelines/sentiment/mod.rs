//! Sentiment analysis pipeline.
//!
//! Classify a single text and get back the predicted label with a
//! confidence score.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inferdesk::sentiment::{ModernBertSize, SentimentPipelineBuilder};
//!
//! # fn main() -> inferdesk::error::Result<()> {
//! let pipeline = SentimentPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
//!
//! let output = pipeline.run("I absolutely love this product!")?;
//! println!("sentiment: {} (confidence: {:.2})", output.prediction.label, output.prediction.score);
//! # Ok(())
//! # }
//! ```
//!
//! # Supported Models
//!
//! For now only ModernBERT is supported.
//!
//! | Model | Sizes | Builder Method |
//! |-------|-------|----------------|
//! | ModernBERT | `Base`, `Large` | [`SentimentPipelineBuilder::modernbert`] |

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::models::ModernBertSize;
pub use crate::pipelines::stats::PipelineStats;
pub use builder::SentimentPipelineBuilder;
pub use pipeline::{Output, Prediction, SentimentPipeline};

/// Only for generic annotations. Use [`SentimentPipelineBuilder::modernbert`].
pub type SentimentModernBert = crate::models::modernbert::SentimentModernBertModel;
