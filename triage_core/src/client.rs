//! Analysis client: the seam to the hosted generative model.
//!
//! The model itself is reached through [`TextGenerator`], so the pipeline
//! doesn't depend on how the call is made:
//! - the Gemini REST client in the server crate (production)
//! - [`MockGenerator`]: returns preconfigured outcomes (testing)
//!
//! [`analyze`] never fails. When the model call does, it hands back a canned
//! JSON payload (a sentinel) that the parser decodes like a real answer.

use async_trait::async_trait;
use regex::Regex;
use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use crate::prompt::build_prompt;
use crate::result_parser::strip_code_fences;
use crate::types::{AnalysisResult, Classification, Sentiment, Urgency};

/// Errors from a model call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("api error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("model returned no text")]
    EmptyResponse,
}

impl GenerationError {
    /// Whether this failure means the API rate limit or daily quota was hit.
    ///
    /// Besides the dedicated variant, any error whose text carries `429` as a
    /// standalone number or mentions a quota counts.
    pub fn is_quota(&self) -> bool {
        if matches!(self, GenerationError::QuotaExceeded(_)) {
            return true;
        }
        quota_marker().is_match(&self.to_string())
    }
}

fn quota_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"(?i)\b429\b|quota").unwrap())
}

/// A hosted model that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

pub const QUOTA_SUMMARY: &str = "Daily API limit reached.";
pub const QUOTA_REPLY: &str =
    "The system has reached today's limit of free requests to the analysis API. Please try again tomorrow.";
pub const ERROR_SUMMARY: &str = "Technical error.";
pub const ERROR_REPLY: &str = "A connection error occurred.";

fn sentinel(classification: Classification, summary: &str, reply: &str) -> String {
    let payload = AnalysisResult {
        classification,
        sentiment: Sentiment::Neutral,
        urgency: Urgency::Low,
        key_data: Vec::new(),
        summary: summary.to_string(),
        suggested_reply: reply.to_string(),
        original_text: String::new(),
    };
    // Plain data with string keys, serialization can't fail.
    serde_json::to_string(&payload).unwrap_or_default()
}

/// Canned payload used when the model quota is exhausted.
pub fn quota_sentinel() -> String {
    sentinel(Classification::QuotaExceeded, QUOTA_SUMMARY, QUOTA_REPLY)
}

/// Canned payload used for any other model failure.
pub fn error_sentinel() -> String {
    sentinel(Classification::Error, ERROR_SUMMARY, ERROR_REPLY)
}

/// Ask the model to analyse `email_text` and return its cleaned raw answer.
///
/// The answer is expected, not guaranteed, to be a JSON object; decoding is
/// left to [`crate::result_parser::parse`].
pub async fn analyze(generator: &dyn TextGenerator, email_text: &str) -> String {
    let prompt = build_prompt(email_text);

    match generator.generate(&prompt).await {
        Ok(text) => strip_code_fences(&text),
        Err(e) if e.is_quota() => {
            tracing::warn!(error = %e, "model quota exceeded");
            quota_sentinel()
        }
        Err(e) => {
            tracing::error!(error = %e, "model call failed");
            error_sentinel()
        }
    }
}

/// Mock generator for testing: replays queued outcomes and records prompts.
///
/// Once the queue is empty every call fails with [`GenerationError::EmptyResponse`].
#[derive(Default)]
pub struct MockGenerator {
    outcomes: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful answer.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queue a failed call.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, outcome: Result<String, GenerationError>) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.outcomes
            .lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front())
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }
}
