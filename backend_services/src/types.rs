use triage_core::Submission;

pub const EMAIL_TEXT_FIELD: &str = "email_text";
pub const EMAIL_FILE_FIELD: &str = "email_file";

/// Body of a url-encoded submission; files can only arrive via multipart.
#[derive(serde::Deserialize, Default)]
pub struct IndexForm {
    #[serde(default)]
    pub email_text: String,
}

impl From<IndexForm> for Submission {
    fn from(form: IndexForm) -> Self {
        Submission::from_text(form.email_text)
    }
}
