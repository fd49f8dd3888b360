use inferdesk::image_classification::ImageSource;
use inferdesk::runners::{ImageRunner, RunOutcome, TextRunner};

#[test]
fn empty_text_fails_without_building_a_pipeline() {
    let runner = TextRunner::default();
    assert_eq!(
        runner.analyze(""),
        RunOutcome::Failure("Please enter some text.".into())
    );
}

#[test]
fn whitespace_only_text_fails_the_same_way() {
    let runner = TextRunner::default();
    assert_eq!(
        runner.analyze("   "),
        RunOutcome::Failure("Please enter some text.".into())
    );
}

#[test]
fn missing_image_path_fails_without_building_a_pipeline() {
    let runner = ImageRunner::default();
    let outcome = runner.classify(&ImageSource::from("/no/such/image.png"), 5);

    // The exact not-found message proves the guard fired before any
    // model construction was attempted.
    assert_eq!(
        outcome,
        RunOutcome::Failure("Image not found: /no/such/image.png".into())
    );
}
