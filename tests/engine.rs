use std::sync::mpsc;
use std::time::Duration;

use inferdesk::engine::{
    EnginePoll, EngineState, RunEngine, RunRequest, RunResponse, ScheduleError, TaskRunner,
};
use inferdesk::runners::{ClassificationResult, RunOutcome, Runners};

/// Echoes the text input back, uppercased, as a single full-confidence result.
struct EchoRunner;

impl TaskRunner for EchoRunner {
    fn run(&self, request: &RunRequest) -> RunOutcome {
        match request {
            RunRequest::Text { input } => RunOutcome::Success(vec![ClassificationResult {
                label: input.to_uppercase(),
                score: 1.0,
            }]),
            RunRequest::Image { .. } => RunOutcome::Failure("image not supported here".into()),
        }
    }
}

/// Blocks inside `run` until the paired sender releases it, so tests can
/// observe the engine mid-flight.
struct GatedRunner {
    gate: mpsc::Receiver<()>,
}

impl TaskRunner for GatedRunner {
    fn run(&self, _request: &RunRequest) -> RunOutcome {
        let _ = self.gate.recv();
        RunOutcome::Success(vec![])
    }
}

fn text_request(input: &str) -> RunRequest {
    RunRequest::Text {
        input: input.into(),
    }
}

fn poll_until_ready(engine: &RunEngine) -> RunResponse {
    for _ in 0..400 {
        match engine.try_poll() {
            EnginePoll::Ready(response) => return response,
            _ => std::thread::sleep(Duration::from_millis(5)),
        }
    }
    panic!("engine produced no response within 2s");
}

fn wait_until_idle(engine: &RunEngine) {
    for _ in 0..400 {
        if engine.state() == EngineState::Idle {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("engine did not return to idle within 2s");
}

#[test]
fn completes_a_request_and_returns_to_idle() {
    let engine = RunEngine::new(EchoRunner);
    assert_eq!(engine.state(), EngineState::Idle);

    let id = engine.schedule(text_request("hello")).unwrap();
    let response = poll_until_ready(&engine);

    assert_eq!(response.id, id);
    assert_eq!(
        response.outcome,
        RunOutcome::Success(vec![ClassificationResult {
            label: "HELLO".into(),
            score: 1.0,
        }])
    );
    wait_until_idle(&engine);
}

#[test]
fn response_echoes_the_originating_request() {
    let engine = RunEngine::new(EchoRunner);
    engine.schedule(text_request("echo me")).unwrap();

    let response = poll_until_ready(&engine);
    match response.request {
        RunRequest::Text { input } => assert_eq!(input, "echo me"),
        RunRequest::Image { .. } => panic!("request kind changed in flight"),
    }
}

#[test]
fn rejects_overlapping_requests_while_running() {
    let (release, gate) = mpsc::channel();
    let engine = RunEngine::new(GatedRunner { gate });

    engine.schedule(text_request("first")).unwrap();
    assert_eq!(engine.state(), EngineState::Running);
    assert_eq!(
        engine.schedule(text_request("second")),
        Err(ScheduleError::Busy)
    );

    release.send(()).unwrap();
    poll_until_ready(&engine);
    wait_until_idle(&engine);

    // Once idle again, the next request is accepted.
    release.send(()).unwrap();
    assert!(engine.schedule(text_request("third")).is_ok());
    poll_until_ready(&engine);
}

#[test]
fn assigns_increasing_request_ids() {
    let engine = RunEngine::new(EchoRunner);

    let first = engine.schedule(text_request("one")).unwrap();
    poll_until_ready(&engine);
    wait_until_idle(&engine);

    let second = engine.schedule(text_request("two")).unwrap();
    poll_until_ready(&engine);

    assert!(second > first);
}

#[test]
fn stopped_engine_accepts_nothing() {
    let mut engine = RunEngine::new(EchoRunner);
    engine.stop();

    assert_eq!(
        engine.schedule(text_request("late")),
        Err(ScheduleError::Stopped)
    );
}

#[test]
fn measures_run_duration() {
    let engine = RunEngine::new(EchoRunner);
    engine.schedule(text_request("timed")).unwrap();

    let response = poll_until_ready(&engine);
    assert!(response.duration <= Duration::from_secs(2));
}

// ============ Dispatch through the production runner set ============
//
// These only exercise guard paths, so no model is ever constructed.

#[test]
fn empty_text_flows_through_as_guidance() {
    let engine = RunEngine::new(Runners::default());
    engine.schedule(text_request("   ")).unwrap();

    let response = poll_until_ready(&engine);
    assert_eq!(
        response.outcome,
        RunOutcome::Failure("Please enter some text.".into())
    );
}

#[test]
fn image_without_chosen_file_flows_through_as_guidance() {
    let engine = RunEngine::new(Runners::default());
    engine
        .schedule(RunRequest::Image {
            path: None,
            top_k: 5,
        })
        .unwrap();

    let response = poll_until_ready(&engine);
    match response.outcome {
        RunOutcome::Failure(message) => assert!(message.contains("choose an image")),
        RunOutcome::Success(_) => panic!("no image was chosen, yet the run succeeded"),
    }
}

#[test]
fn missing_image_file_flows_through_with_the_path() {
    let engine = RunEngine::new(Runners::default());
    engine
        .schedule(RunRequest::Image {
            path: Some("/tmp/definitely-not-here.jpg".into()),
            top_k: 5,
        })
        .unwrap();

    let response = poll_until_ready(&engine);
    assert_eq!(
        response.outcome,
        RunOutcome::Failure("Image not found: /tmp/definitely-not-here.jpg".into())
    );
}
