use axum::extract::Multipart;
use triage_core::{Submission, Upload};

use crate::{
    services::ServiceError,
    types::{EMAIL_FILE_FIELD, EMAIL_TEXT_FIELD},
};

/// Read the `email_text` and `email_file` fields of a multipart submission.
///
/// Unknown fields are skipped. A file input left empty by the browser
/// arrives with an empty filename and is kept as such; the pipeline
/// decides what that means.
pub async fn read_submission(mut multipart: Multipart) -> Result<Submission, ServiceError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::InvalidInput(format!("Invalid multipart data: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            EMAIL_TEXT_FIELD => {
                submission.email_text = field
                    .text()
                    .await
                    .map_err(|e| ServiceError::InvalidInput(format!("Failed to read email text: {}", e)))?;
            }
            EMAIL_FILE_FIELD => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ServiceError::InvalidInput(format!("Failed to read file data: {}", e)))?;

                tracing::debug!(%filename, size = bytes.len(), "received upload");
                submission.upload = Some(Upload {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            other => {
                tracing::debug!(field = other, "ignoring unknown form field");
            }
        }
    }

    Ok(submission)
}
