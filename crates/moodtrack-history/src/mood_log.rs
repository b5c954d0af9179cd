//! Append-only mood log with derived distribution and timeline views

use crate::error::HistoryError;
use crate::types::{DailyCount, HourlyCount, LogSummary, MoodEntry};
use chrono::{NaiveDate, TimeZone, Timelike};
use moodtrack_core::MoodLabel;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Default size of the recent-entries view
pub const RECENT_LIMIT: usize = 10;

/// Ordered log of mood entries. Insertion order is chronological order.
///
/// Only `append` adds entries, so there is no `Deserialize`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry. Fails if it is older than the newest entry.
    pub fn append(&mut self, entry: MoodEntry) -> Result<(), HistoryError> {
        if let Some(last) = self.entries.last() {
            if entry.timestamp() < last.timestamp() {
                return Err(HistoryError::OutOfOrder {
                    last: last.timestamp(),
                    attempted: entry.timestamp(),
                });
            }
        }
        debug!(mood = %entry.mood(), total = self.entries.len() + 1, "logged mood");
        self.entries.push(entry);
        Ok(())
    }

    /// All entries in append order
    pub fn snapshot(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    /// Count per mood. Moods never logged are absent.
    pub fn distribution(&self) -> BTreeMap<MoodLabel, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.mood()).or_insert(0) += 1;
        }
        counts
    }

    /// Count per (calendar date in `tz`, mood), sorted by date then mood
    pub fn daily_timeline<Tz: TimeZone>(&self, tz: &Tz) -> Vec<DailyCount> {
        let mut counts: BTreeMap<(NaiveDate, MoodLabel), usize> = BTreeMap::new();
        for entry in &self.entries {
            let date = entry.timestamp().with_timezone(tz).date_naive();
            *counts.entry((date, entry.mood())).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|((date, mood), count)| DailyCount { date, mood, count })
            .collect()
    }

    /// Count per (hour of day in `tz`, mood), sorted by hour then mood
    pub fn hourly_pattern<Tz: TimeZone>(&self, tz: &Tz) -> Vec<HourlyCount> {
        let mut counts: BTreeMap<(u32, MoodLabel), usize> = BTreeMap::new();
        for entry in &self.entries {
            let hour = entry.timestamp().with_timezone(tz).hour();
            *counts.entry((hour, entry.mood())).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|((hour, mood), count)| HourlyCount { hour, mood, count })
            .collect()
    }

    /// Last `n` entries, most recent first.
    ///
    /// Entries sharing a timestamp keep insertion order, later first.
    pub fn recent(&self, n: usize) -> Vec<&MoodEntry> {
        let start = self.entries.len().saturating_sub(n);
        let mut recent: Vec<&MoodEntry> = self.entries[start..].iter().rev().collect();
        // stable sort keeps the reversed insertion order among equal timestamps
        recent.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        recent
    }

    pub fn summary(&self) -> LogSummary {
        let mut dominant = None;
        let mut best = 0;
        for (mood, count) in self.distribution() {
            if count > best {
                dominant = Some(mood);
                best = count;
            }
        }

        LogSummary {
            total: self.entries.len(),
            dominant,
            first: self.entries.first().map(|e| e.timestamp()),
            last: self.entries.last().map(|e| e.timestamp()),
        }
    }
}
