use regex::Regex;
use std::sync::OnceLock;

use crate::types::AnalysisResult;

/// Model output that could not be decoded into an [`AnalysisResult`].
#[derive(Debug, thiserror::Error)]
#[error("model output is not a valid analysis: {0}")]
pub struct ParseFailure(#[from] serde_json::Error);

fn fence_patterns() -> &'static (Regex, Regex) {
    static PATTERNS: OnceLock<(Regex, Regex)> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        (
            Regex::new(r"(?i)^\s*```(?:json)?").unwrap(),
            Regex::new(r"```\s*$").unwrap(),
        )
    })
}

/// Remove a leading and trailing markdown code fence and surrounding whitespace.
///
/// Only fences at the edges are touched; backticks inside the payload survive.
pub fn strip_code_fences(raw: &str) -> String {
    let (opening, closing) = fence_patterns();
    let without_opening = opening.replace(raw, "");
    let without_closing = closing.replace(&without_opening, "");
    without_closing.trim().to_string()
}

/// Decode cleaned model output and attach the submitted email text.
///
/// All six keys are required and the tags must be the known ones; anything
/// else is a [`ParseFailure`].
pub fn parse(raw: &str, original_text: &str) -> Result<AnalysisResult, ParseFailure> {
    let cleaned = strip_code_fences(raw);
    let mut result: AnalysisResult = serde_json::from_str(&cleaned)?;
    result.original_text = original_text.to_string();
    Ok(result)
}
