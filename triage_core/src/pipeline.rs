//! Request pipeline: one form submission from intake to a rendered result.
//!
//! ```text
//! Received ─▶ Extracted | ExtractionFailed ─▶ Analyzed ─▶ Parsed | ParseFailed ─▶ Rendered
//! ```
//!
//! Every path ends with something to render; no error escapes. The session
//! history is passed in by value and handed back, so the caller owns loading
//! and saving it.

use crate::client::{analyze, TextGenerator};
use crate::extractor::{extension_of, extract_text};
use crate::history::SessionHistory;
use crate::result_parser::parse;
use crate::types::{AnalysisResult, Submission};

/// What to render for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub result: Option<AnalysisResult>,
    pub history: SessionHistory,
}

/// Decide which text gets analysed.
///
/// An upload with a non-empty filename is extracted; its text wins over the
/// typed field whenever it is non-empty, even if both were filled in.
pub fn resolve_text(submission: Submission) -> String {
    let Submission { email_text, upload } = submission;

    match upload {
        Some(upload) if !upload.filename.is_empty() => {
            let extension = extension_of(&upload.filename);
            let from_file = extract_text(&upload.bytes, &extension);
            tracing::debug!(
                filename = %upload.filename,
                chars = from_file.chars().count(),
                "extracted upload"
            );
            if from_file.is_empty() {
                email_text
            } else {
                from_file
            }
        }
        _ => email_text,
    }
}

/// Run one submission through extraction, analysis, parsing and history.
pub async fn run(
    generator: &dyn TextGenerator,
    submission: Submission,
    mut history: SessionHistory,
) -> PipelineOutput {
    let text = resolve_text(submission);
    if text.is_empty() {
        tracing::debug!("nothing to analyse");
        return PipelineOutput { result: None, history };
    }

    let raw = analyze(generator, &text).await;
    let result = match parse(&raw, &text) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "dropping unparsable model output");
            return PipelineOutput { result: None, history };
        }
    };

    tracing::info!(
        classification = result.classification.label(),
        urgency = result.urgency.label(),
        "email analysed"
    );
    history.record(result.clone());

    PipelineOutput {
        result: Some(result),
        history,
    }
}
