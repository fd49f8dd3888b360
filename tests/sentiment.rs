//! Real-model sentiment tests. Run with: cargo test --features integration

#![cfg(feature = "integration")]

use inferdesk::error::Result;
use inferdesk::runners::{RunOutcome, TextRunner};
use inferdesk::sentiment::{ModernBertSize, SentimentPipelineBuilder};

#[test]
fn sentiment_basic() -> Result<()> {
    let pipeline = SentimentPipelineBuilder::modernbert(ModernBertSize::Base).build()?;

    let output = pipeline.run("I love Rust!")?;
    assert!(!output.prediction.label.trim().is_empty());
    assert!(output.prediction.score >= 0.0 && output.prediction.score <= 1.0);
    Ok(())
}

#[test]
fn runner_returns_one_uppercase_label() {
    let runner = TextRunner::default();

    match runner.analyze("I love this") {
        RunOutcome::Success(results) => {
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].label, results[0].label.to_uppercase());
            assert!(["POSITIVE", "NEGATIVE"].contains(&results[0].label.as_str()));
            assert!(results[0].score >= 0.0 && results[0].score <= 1.0);
        }
        RunOutcome::Failure(message) => panic!("expected a prediction, got: {message}"),
    }
}

#[test]
fn repeated_runs_reuse_the_cached_model() -> Result<()> {
    let first = SentimentPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
    let second = SentimentPipelineBuilder::modernbert(ModernBertSize::Base).build()?;

    let a = first.run("Great service, highly recommend!")?;
    let b = second.run("Great service, highly recommend!")?;
    assert_eq!(a.prediction.label, b.prediction.label);
    Ok(())
}
