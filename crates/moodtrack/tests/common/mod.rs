use chrono::{DateTime, Duration, Utc};
use moodtrack_core::{Classifier, ClassifierConfig};
use moodtrack_sentiment::LexiconEstimator;

pub fn lexicon_classifier() -> Classifier<LexiconEstimator> {
    Classifier::new(ClassifierConfig::new(), LexiconEstimator::new())
}

/// Fixed base instant so day and hour buckets are predictable
pub fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-01T08:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn minutes_after_base(minutes: i64) -> DateTime<Utc> {
    base_time() + Duration::minutes(minutes)
}
