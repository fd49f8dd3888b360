//! Desktop demo that classifies typed text or a chosen image with
//! locally-run models.
//!
//! Powered by [Candle](https://github.com/huggingface/candle), with pipeline
//! APIs inspired by Python's [Transformers](https://huggingface.co/docs/transformers).
//! A sentiment pipeline labels text, an image-classification pipeline ranks
//! ImageNet labels, a process-wide cache constructs each model at most once,
//! and a single-flight background engine keeps the UI loop responsive.

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod loaders;
pub(crate) mod models;
pub(crate) mod pipelines;

// ============ Public API ============

pub mod display;
pub mod engine;
pub mod error;
pub mod runners;

pub use pipelines::{image_classification, sentiment};
