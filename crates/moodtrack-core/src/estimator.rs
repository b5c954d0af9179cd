//! Sentiment estimator seam

use crate::error::MoodError;
use crate::types::SentimentSignal;

/// Anything that can score text for polarity and subjectivity.
///
/// Implementations may fail; the classifier treats failure as neutral
/// sentiment and carries on with keyword scoring alone.
pub trait SentimentEstimator {
    /// Estimator name for logs
    fn name(&self) -> &str {
        "unnamed"
    }

    fn estimate(&self, text: &str) -> Result<SentimentSignal, MoodError>;
}

impl<E: SentimentEstimator + ?Sized> SentimentEstimator for &E {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn estimate(&self, text: &str) -> Result<SentimentSignal, MoodError> {
        (**self).estimate(text)
    }
}

impl<E: SentimentEstimator + ?Sized> SentimentEstimator for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn estimate(&self, text: &str) -> Result<SentimentSignal, MoodError> {
        (**self).estimate(text)
    }
}

/// Always neutral. Reduces the classifier to keyword-only scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralEstimator;

impl SentimentEstimator for NeutralEstimator {
    fn name(&self) -> &str {
        "neutral"
    }

    fn estimate(&self, _text: &str) -> Result<SentimentSignal, MoodError> {
        Ok(SentimentSignal::neutral())
    }
}
