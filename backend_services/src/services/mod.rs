pub mod gemini_service;
pub mod session_service;
pub mod upload_service;

pub use gemini_service::GeminiClient;
pub use upload_service::read_submission;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
