use crate::classifier::Classified;
use crate::emotion::Emotion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub text: String,
    pub emotion: Emotion,
    pub confidence: f64,
    pub date: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(id: u64, classified: Classified, date: DateTime<Utc>) -> Self {
        let (text, analysis) = classified.into_parts();
        JournalEntry {
            id: id.to_string(),
            text,
            emotion: analysis.emotion,
            confidence: analysis.confidence,
            date,
        }
    }

    /// Numeric form of the id, when it has one. Entries written elsewhere may not.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }

    pub fn preview(&self) -> &str {
        self.text.lines().next().unwrap_or("")
    }
}
