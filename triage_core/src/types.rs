use serde::{Deserialize, Serialize};

/// Triage verdict for one email.
///
/// `QuotaExceeded` and `Error` never come from the model: they tag the
/// sentinel payloads substituted when the external call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Produtivo")]
    Productive,
    #[serde(rename = "Improdutivo")]
    Unproductive,
    #[serde(rename = "COTA_EXCEDIDA")]
    QuotaExceeded,
    #[serde(rename = "Erro")]
    Error,
}

impl Classification {
    /// True for the tags that only sentinel results carry.
    pub fn is_sentinel(self) -> bool {
        matches!(self, Classification::QuotaExceeded | Classification::Error)
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::Productive => "Productive",
            Classification::Unproductive => "Unproductive",
            Classification::QuotaExceeded => "Quota exceeded",
            Classification::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "Feliz")]
    Happy,
    #[serde(rename = "Neutro")]
    Neutral,
    #[serde(rename = "Irritado")]
    Irritated,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Happy => "Happy",
            Sentiment::Neutral => "Neutral",
            Sentiment::Irritated => "Irritated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    // The model drops the accent often enough that both spellings are accepted.
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Média", alias = "Media")]
    Medium,
    #[serde(rename = "Baixa")]
    Low,
}

impl Urgency {
    pub fn label(self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }
}

/// One analysed email as shown on the page and kept in the session.
///
/// Field names on the wire follow the JSON object the model is asked to
/// produce. `original_text` is not part of the model output; it is attached
/// after parsing and travels with the result into the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "classificacao")]
    pub classification: Classification,
    #[serde(rename = "sentimento")]
    pub sentiment: Sentiment,
    #[serde(rename = "urgencia")]
    pub urgency: Urgency,
    #[serde(rename = "dados_chave")]
    pub key_data: Vec<String>,
    #[serde(rename = "resumo")]
    pub summary: String,
    #[serde(rename = "resposta_sugerida")]
    pub suggested_reply: String,
    #[serde(default)]
    pub original_text: String,
}

/// An uploaded file as received from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// One form submission: the typed text field plus an optional upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub email_text: String,
    pub upload: Option<Upload>,
}

impl Submission {
    pub fn from_text(email_text: impl Into<String>) -> Self {
        Self {
            email_text: email_text.into(),
            upload: None,
        }
    }

    pub fn with_upload(mut self, filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.upload = Some(Upload {
            filename: filename.into(),
            bytes: bytes.into(),
        });
        self
    }
}
