use serde::{Deserialize, Serialize};

use crate::types::AnalysisResult;

/// Number of results kept per session.
pub const MAX_ENTRIES: usize = 3;

/// Recent analyses of one browser session, most recent first.
///
/// Holds at most [`MAX_ENTRIES`] results and never a sentinel one. The value
/// is loaded from the session at the start of a request and saved back at
/// the end; it has no storage of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<AnalysisResult>", into = "Vec<AnalysisResult>")]
pub struct SessionHistory {
    entries: Vec<AnalysisResult>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from stored entries, dropping anything that breaks
    /// the invariants (sentinels, entries past the cap).
    pub fn from_entries(entries: Vec<AnalysisResult>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|entry| !entry.classification.is_sentinel())
            .take(MAX_ENTRIES)
            .collect();
        Self { entries }
    }

    /// Put `result` at the front, evicting the oldest beyond the cap.
    /// Sentinel results are ignored.
    pub fn record(&mut self, result: AnalysisResult) {
        if result.classification.is_sentinel() {
            return;
        }
        self.entries.insert(0, result);
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn current(&self) -> &[AnalysisResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<AnalysisResult>> for SessionHistory {
    fn from(entries: Vec<AnalysisResult>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<SessionHistory> for Vec<AnalysisResult> {
    fn from(history: SessionHistory) -> Self {
        history.entries
    }
}
