//! Single-owner session state: the mood log plus the current mood

use crate::error::SessionError;
use crate::mood_log::MoodLog;
use crate::types::MoodEntry;
use chrono::{DateTime, Utc};
use moodtrack_core::{Classifier, MoodError, MoodLabel, SentimentEstimator};
use rand::Rng;
use tracing::info;

/// State for one user run. Created empty, dropped at the end.
#[derive(Debug, Clone, Default)]
pub struct Session {
    log: MoodLog,
    current_mood: Option<MoodLabel>,
    affirmation_count: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &MoodLog {
        &self.log
    }

    pub fn current_mood(&self) -> Option<MoodLabel> {
        self.current_mood
    }

    /// Affirmations handed out so far
    pub fn affirmation_count(&self) -> usize {
        self.affirmation_count
    }

    /// Classify free text, log the result and make it the current mood.
    ///
    /// Blank text is rejected with `InvalidInput` and nothing is logged. A
    /// `now` earlier than the newest entry is clamped to that entry's time.
    pub fn check_in_text<E: SentimentEstimator>(
        &mut self,
        classifier: &Classifier<E>,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<MoodEntry, SessionError> {
        if text.trim().is_empty() {
            return Err(MoodError::InvalidInput.into());
        }

        let mood = classifier.classify(text);
        let at = self.entry_time(now);
        self.record(MoodEntry::new(mood, text, at))
    }

    /// Log a directly selected mood and make it the current mood.
    ///
    /// As with text check-ins, a clock that stepped backwards is clamped to
    /// the newest logged timestamp.
    pub fn select_mood(
        &mut self,
        mood: MoodLabel,
        now: DateTime<Utc>,
    ) -> Result<MoodEntry, SessionError> {
        let at = self.entry_time(now);
        self.record(MoodEntry::new(mood, "", at))
    }

    /// Random affirmation for the current mood; `None` before any check-in
    pub fn next_affirmation<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'static str> {
        let mood = self.current_mood?;
        self.affirmation_count += 1;
        Some(moodtrack_catalog::affirmation(mood, rng))
    }

    /// Timestamp for a new entry; never earlier than the newest logged one
    fn entry_time(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.log.last() {
            Some(last) if last.timestamp() > now => last.timestamp(),
            _ => now,
        }
    }

    fn record(&mut self, entry: MoodEntry) -> Result<MoodEntry, SessionError> {
        self.log.append(entry.clone())?;
        self.current_mood = Some(entry.mood());
        info!(mood = %entry.mood(), "mood recorded");
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use moodtrack_core::{ClassifierConfig, NeutralEstimator};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn classifier() -> Classifier<NeutralEstimator> {
        Classifier::new(ClassifierConfig::new(), NeutralEstimator)
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.log().is_empty());
        assert_eq!(session.current_mood(), None);
        assert_eq!(session.affirmation_count(), 0);
    }

    #[test]
    fn test_check_in_logs_and_sets_current() {
        let mut session = Session::new();
        let entry = session
            .check_in_text(&classifier(), "feeling drained and weary", Utc::now())
            .unwrap();
        assert_eq!(entry.mood(), MoodLabel::Tired);
        assert_eq!(entry.source_text(), "feeling drained and weary");
        assert_eq!(session.current_mood(), Some(MoodLabel::Tired));
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn test_blank_check_in_rejected() {
        let mut session = Session::new();
        let err = session
            .check_in_text(&classifier(), "   ", Utc::now())
            .unwrap_err();
        assert!(matches!(err, SessionError::Mood(MoodError::InvalidInput)));
        assert!(session.log().is_empty());
        assert_eq!(session.current_mood(), None);
    }

    #[test]
    fn test_select_mood_logs_without_text() {
        let mut session = Session::new();
        let entry = session.select_mood(MoodLabel::Angry, Utc::now()).unwrap();
        assert_eq!(entry.source_text(), "");
        assert_eq!(entry.emoji(), "😠");
        assert_eq!(session.current_mood(), Some(MoodLabel::Angry));
    }

    #[test]
    fn test_clock_step_back_is_clamped() {
        let mut session = Session::new();
        let now = Utc::now();
        session.select_mood(MoodLabel::Happy, now).unwrap();
        let entry = session
            .check_in_text(&classifier(), "feeling drained", now - Duration::seconds(1))
            .unwrap();
        assert_eq!(entry.timestamp(), now);
        assert_eq!(session.log().len(), 2);
        assert_eq!(session.current_mood(), Some(MoodLabel::Tired));

        let picked = session
            .select_mood(MoodLabel::Sad, now - Duration::minutes(10))
            .unwrap();
        assert_eq!(picked.timestamp(), now);
        assert_eq!(session.current_mood(), Some(MoodLabel::Sad));
        let times: Vec<_> = session.log().snapshot().iter().map(|e| e.timestamp()).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_affirmation_requires_mood() {
        let mut session = Session::new();
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(session.next_affirmation(&mut rng), None);
        assert_eq!(session.affirmation_count(), 0);

        session.select_mood(MoodLabel::Calm, Utc::now()).unwrap();
        let text = session.next_affirmation(&mut rng).unwrap();
        assert!(moodtrack_catalog::affirmations(MoodLabel::Calm).contains(&text));
        assert_eq!(session.affirmation_count(), 1);
    }
}
