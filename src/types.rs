use triage_core::{AnalysisResult, Classification, Sentiment, Urgency};
use yew::Properties;

/// Everything the index page shows for one request.
#[derive(Properties, Clone, PartialEq, Default)]
pub struct PageProps {
    #[prop_or_default]
    pub result: Option<AnalysisResult>,
    #[prop_or_default]
    pub history: Vec<AnalysisResult>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Badge {
    pub name: &'static str,
    pub color: &'static str,
}

impl Badge {
    pub fn classification(classification: Classification) -> Self {
        let color = match classification {
            Classification::Productive => "#198754",
            Classification::Unproductive => "#6c757d",
            Classification::QuotaExceeded => "#fd7e14",
            Classification::Error => "#dc3545",
        };
        Badge { name: classification.label(), color }
    }

    pub fn sentiment(sentiment: Sentiment) -> Self {
        let color = match sentiment {
            Sentiment::Happy => "#198754",
            Sentiment::Neutral => "#6c757d",
            Sentiment::Irritated => "#dc3545",
        };
        Badge { name: sentiment.label(), color }
    }

    pub fn urgency(urgency: Urgency) -> Self {
        let color = match urgency {
            Urgency::High => "#dc3545",
            Urgency::Medium => "#fd7e14",
            Urgency::Low => "#0d6efd",
        };
        Badge { name: urgency.label(), color }
    }

    pub fn style(&self) -> String {
        format!(
            "display:inline-block; padding:0.2em 0.6em; border-radius:4px; color:white; font-size:0.85em; background:{};",
            self.color
        )
    }
}
