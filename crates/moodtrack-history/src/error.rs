//! Error types for the mood log and session

use chrono::{DateTime, Utc};
use moodtrack_core::MoodError;

/// Errors returned when appending to a mood log.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// Entry timestamp precedes the newest logged entry.
    #[error("entry at {attempted} precedes last entry at {last}")]
    OutOfOrder {
        last: DateTime<Utc>,
        attempted: DateTime<Utc>,
    },
}

/// Errors returned by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Rejected input or mood lookup failure.
    #[error(transparent)]
    Mood(#[from] MoodError),
    /// Log append failure.
    #[error(transparent)]
    History(#[from] HistoryError),
}
