//! Rendering of completed runs for the output pane.

use crate::engine::{RunRequest, RunResponse};
use crate::runners::RunOutcome;

/// Renders a completed run as the text shown in the output pane.
///
/// Text runs render the echoed input plus a `LABEL (SS.SS%)` prediction
/// line; image runs render one ranked `N. label – SS.SS%` line per
/// prediction. Failures render their message verbatim.
pub fn render_response(response: &RunResponse) -> String {
    match (&response.request, &response.outcome) {
        (_, RunOutcome::Failure(message)) => message.clone(),
        (RunRequest::Text { input }, RunOutcome::Success(results)) => {
            let mut out = format!("text: \"{}\"\n", input.trim());
            if let Some(r) = results.first() {
                out.push_str(&format!(
                    "prediction: {} ({:.2}%)\n",
                    r.label,
                    r.score * 100.0
                ));
            }
            out
        }
        (RunRequest::Image { top_k, .. }, RunOutcome::Success(results)) => {
            let mut lines = vec![format!("top-{top_k} predictions:")];
            for (i, r) in results.iter().enumerate() {
                lines.push(format!("{}. {} – {:.2}%", i + 1, r.label, r.score * 100.0));
            }
            lines.join("\n") + "\n"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RunRequest;
    use crate::runners::{ClassificationResult, RunOutcome};
    use std::time::Duration;

    fn response(request: RunRequest, outcome: RunOutcome) -> RunResponse {
        RunResponse {
            id: 0,
            request,
            duration: Duration::from_millis(1),
            outcome,
        }
    }

    #[test]
    fn text_success_formats_percentage_with_two_decimals() {
        let rendered = render_response(&response(
            RunRequest::Text {
                input: "I love this".into(),
            },
            RunOutcome::Success(vec![ClassificationResult {
                label: "POSITIVE".into(),
                score: 0.9842,
            }]),
        ));

        assert_eq!(rendered, "text: \"I love this\"\nprediction: POSITIVE (98.42%)\n");
    }

    #[test]
    fn image_success_lists_ranked_lines() {
        let results = vec![
            ClassificationResult {
                label: "tabby".into(),
                score: 0.541,
            },
            ClassificationResult {
                label: "tiger cat".into(),
                score: 0.223,
            },
            ClassificationResult {
                label: "Egyptian cat".into(),
                score: 0.101,
            },
        ];
        let rendered = render_response(&response(
            RunRequest::Image {
                path: Some("cat.jpg".into()),
                top_k: 5,
            },
            RunOutcome::Success(results),
        ));

        let lines: Vec<&str> = rendered.trim_end().lines().collect();
        assert_eq!(lines[0], "top-5 predictions:");
        assert_eq!(lines[1], "1. tabby – 54.10%");
        assert_eq!(lines[2], "2. tiger cat – 22.30%");
        assert_eq!(lines[3], "3. Egyptian cat – 10.10%");
    }

    #[test]
    fn failure_renders_message_verbatim() {
        let rendered = render_response(&response(
            RunRequest::Text { input: "".into() },
            RunOutcome::Failure("Please enter some text.".into()),
        ));

        assert_eq!(rendered, "Please enter some text.");
    }
}
