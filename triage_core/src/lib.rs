//! Email triage core: everything between a submitted form and the result
//! shown on the page, minus the HTTP and the model transport.

pub mod client;
pub mod extractor;
pub mod history;
pub mod pipeline;
pub mod prompt;
pub mod result_parser;
pub mod types;

pub use client::{analyze, GenerationError, MockGenerator, TextGenerator};
pub use history::{SessionHistory, MAX_ENTRIES};
pub use pipeline::{run, PipelineOutput};
pub use result_parser::{parse, ParseFailure};
pub use types::{AnalysisResult, Classification, Sentiment, Submission, Upload, Urgency};
