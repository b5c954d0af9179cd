//! Session mood log and its aggregate views

mod error;
mod mood_log;
mod session;
mod types;

pub use error::{HistoryError, SessionError};
pub use mood_log::{MoodLog, RECENT_LIMIT};
pub use session::Session;
pub use types::{DailyCount, HourlyCount, LogSummary, MoodEntry};
