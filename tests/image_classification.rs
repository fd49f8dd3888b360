//! Real-model image classification tests. Run with: cargo test --features integration

#![cfg(feature = "integration")]

use image::{DynamicImage, RgbImage};

use inferdesk::error::Result;
use inferdesk::image_classification::{
    ImageClassificationPipelineBuilder, ImageSource, VitSize,
};
use inferdesk::runners::{ImageRunner, RunOutcome};

fn flat_gray_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(224, 224, image::Rgb([128, 128, 128])))
}

#[test]
fn returns_at_most_top_k_sorted_descending() -> Result<()> {
    let pipeline = ImageClassificationPipelineBuilder::vit(VitSize::Base).build()?;

    let output = pipeline.run(&ImageSource::from(flat_gray_image()), 5)?;
    assert_eq!(output.predictions.len(), 5);
    for pair in output.predictions.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for p in &output.predictions {
        assert!(p.score >= 0.0 && p.score <= 1.0);
        assert!(!p.label.is_empty());
    }
    Ok(())
}

#[test]
fn top_k_one_returns_a_single_result() -> Result<()> {
    let pipeline = ImageClassificationPipelineBuilder::vit(VitSize::Base).build()?;

    let output = pipeline.run(&ImageSource::from(flat_gray_image()), 1)?;
    assert_eq!(output.predictions.len(), 1);
    Ok(())
}

#[test]
fn runner_classifies_a_file_on_disk() {
    let path = std::env::temp_dir().join("inferdesk_it_sample.png");
    flat_gray_image().save(&path).unwrap();

    let runner = ImageRunner::default();
    match runner.classify(&ImageSource::Path(path.clone()), 5) {
        RunOutcome::Success(results) => {
            assert_eq!(results.len(), 5);
            for pair in results.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
        RunOutcome::Failure(message) => panic!("expected predictions, got: {message}"),
    }

    let _ = std::fs::remove_file(path);
}
