//! Image classification pipeline.
//!
//! Classify a single image into ImageNet-1k labels, returning the
//! `top_k` highest-scoring labels ranked by confidence.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inferdesk::image_classification::{ImageClassificationPipelineBuilder, VitSize};
//!
//! # fn main() -> inferdesk::error::Result<()> {
//! let pipeline = ImageClassificationPipelineBuilder::vit(VitSize::Base).build()?;
//!
//! let output = pipeline.run(&"cat.jpg".into(), 5)?;
//! for p in output.predictions {
//!     println!("{}: {:.2}", p.label, p.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Supported Models
//!
//! For now only the ViT base checkpoint is supported.
//!
//! | Model | Sizes | Builder Method |
//! |-------|-------|----------------|
//! | ViT | `Base` | [`ImageClassificationPipelineBuilder::vit`] |

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::models::VitSize;
pub use crate::pipelines::stats::PipelineStats;
pub use builder::ImageClassificationPipelineBuilder;
pub use pipeline::{ImageClassificationPipeline, ImageSource, Output, Prediction};

/// Only for generic annotations. Use [`ImageClassificationPipelineBuilder::vit`].
pub type ImageNetVit = crate::models::vit::ImageNetVitModel;
