//! Mood log record types

use chrono::{DateTime, NaiveDate, Utc};
use moodtrack_core::MoodLabel;
use serde::{Deserialize, Serialize};

/// One timestamped mood, immutable once created.
///
/// The emoji always follows the mood; a stored emoji is ignored on
/// deserialize and derived again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredEntry")]
pub struct MoodEntry {
    timestamp: DateTime<Utc>,
    mood: MoodLabel,
    source_text: String,
    emoji: String,
}

impl MoodEntry {
    pub fn new(mood: MoodLabel, source_text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            mood,
            source_text: source_text.into(),
            emoji: mood.emoji().to_string(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn mood(&self) -> MoodLabel {
        self.mood
    }

    /// Text the mood was classified from; empty for direct selections
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// First `max_chars` characters of the source text, with "..." when cut
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.source_text.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

#[derive(Deserialize)]
struct StoredEntry {
    timestamp: DateTime<Utc>,
    mood: MoodLabel,
    #[serde(default)]
    source_text: String,
}

impl From<StoredEntry> for MoodEntry {
    fn from(stored: StoredEntry) -> Self {
        MoodEntry::new(stored.mood, stored.source_text, stored.timestamp)
    }
}

/// Entries per (date, mood)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub mood: MoodLabel,
    pub count: usize,
}

/// Entries per (hour of day, mood)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCount {
    pub hour: u32,
    pub mood: MoodLabel,
    pub count: usize,
}

/// Headline numbers for a log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSummary {
    pub total: usize,
    /// Most frequent mood; ties go to the earlier label
    pub dominant: Option<MoodLabel>,
    pub first: Option<DateTime<Utc>>,
    pub last: Option<DateTime<Utc>>,
}
