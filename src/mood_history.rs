//! Chart-ready projection of the journal. Recomputed on every read.

use crate::emotion::Emotion;
use crate::journal_entry::JournalEntry;
use chrono::{DateTime, Datelike, Local, TimeZone, Utc, Weekday};

#[derive(Debug, Clone, PartialEq)]
pub struct MoodPoint {
    pub date: DateTime<Utc>,
    pub emotion: Emotion,
    pub confidence: f64,
    pub day_of_week: &'static str,
}

impl MoodPoint {
    pub fn chart_value(&self) -> f64 {
        self.emotion.chart_value()
    }

    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

fn short_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// One point per entry, in entry order, with weekdays in the host's local time.
pub fn mood_history(entries: &[JournalEntry]) -> Vec<MoodPoint> {
    mood_history_in(entries, &Local)
}

/// Same as [`mood_history`] but resolves weekdays in `tz`.
pub fn mood_history_in<Tz: TimeZone>(entries: &[JournalEntry], tz: &Tz) -> Vec<MoodPoint> {
    entries
        .iter()
        .map(|entry| MoodPoint {
            date: entry.date,
            emotion: entry.emotion,
            confidence: entry.confidence,
            day_of_week: short_weekday(entry.date.with_timezone(tz).weekday()),
        })
        .collect()
}
