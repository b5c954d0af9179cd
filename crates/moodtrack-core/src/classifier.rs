//! Keyword tally fused with a sentiment signal

use crate::config::ClassifierConfig;
use crate::estimator::SentimentEstimator;
use crate::keywords::keyword_hits;
use crate::types::{MoodLabel, SentimentSignal};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Full result of one classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub mood: MoodLabel,
    /// Final per-label score, after sentiment boosts
    pub scores: BTreeMap<MoodLabel, usize>,
    pub sentiment: SentimentSignal,
    /// True when no label scored and polarity decided the mood
    pub fallback: bool,
}

impl Classification {
    pub fn score(&self, mood: MoodLabel) -> usize {
        self.scores.get(&mood).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct Classifier<E> {
    config: ClassifierConfig,
    estimator: E,
}

impl<E: SentimentEstimator> Classifier<E> {
    pub fn new(config: ClassifierConfig, estimator: E) -> Self {
        Self { config, estimator }
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn classify(&self, text: &str) -> MoodLabel {
        self.classify_detailed(text).mood
    }

    /// Classify text into one mood (4-phase)
    pub fn classify_detailed(&self, text: &str) -> Classification {
        let mut scores: BTreeMap<MoodLabel, usize> =
            MoodLabel::ALL.iter().map(|&m| (m, 0)).collect();

        if text.trim().is_empty() {
            debug!("blank input, defaulting to calm");
            return Classification {
                mood: MoodLabel::Calm,
                scores,
                sentiment: SentimentSignal::neutral(),
                fallback: true,
            };
        }

        // Phase 1: Keyword tally over lowercased text
        let lowered = text.to_lowercase();
        for (&mood, score) in scores.iter_mut() {
            *score = keyword_hits(mood, &lowered);
        }

        // Phase 2: Sentiment over the original text
        let sentiment = self.estimate(text);

        // Phase 3: Fusion
        if sentiment.polarity > self.config.positive_threshold {
            *scores.entry(MoodLabel::Happy).or_insert(0) += self.config.polarity_boost;
        } else if sentiment.polarity < self.config.negative_threshold {
            *scores.entry(MoodLabel::Sad).or_insert(0) += self.config.polarity_boost;
        }
        if sentiment.subjectivity > self.config.subjectivity_threshold {
            *scores.entry(MoodLabel::Anxious).or_insert(0) += self.config.subjectivity_boost;
        }

        // Phase 4: Selection, first label in priority order wins ties
        let mut best = MoodLabel::Calm;
        let mut best_score = 0;
        for mood in MoodLabel::ALL {
            let score = scores[&mood];
            if score > best_score {
                best = mood;
                best_score = score;
            }
        }

        let fallback = best_score == 0;
        let mood = if fallback {
            self.polarity_fallback(sentiment.polarity)
        } else {
            best
        };

        debug!(
            mood = %mood,
            polarity = sentiment.polarity,
            subjectivity = sentiment.subjectivity,
            top_score = best_score,
            "classified text"
        );

        Classification {
            mood,
            scores,
            sentiment,
            fallback,
        }
    }

    fn estimate(&self, text: &str) -> SentimentSignal {
        match self.estimator.estimate(text) {
            // Re-sanitize: estimators are external and may hand back NaN
            Ok(signal) => SentimentSignal::new(signal.polarity, signal.subjectivity),
            Err(e) => {
                warn!(
                    estimator = self.estimator.name(),
                    error = %e,
                    "sentiment unavailable, scoring keywords only"
                );
                SentimentSignal::neutral()
            }
        }
    }

    fn polarity_fallback(&self, polarity: f64) -> MoodLabel {
        if polarity > self.config.fallback_threshold {
            MoodLabel::Happy
        } else if polarity < -self.config.fallback_threshold {
            MoodLabel::Sad
        } else {
            MoodLabel::Calm
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoodError;
    use crate::estimator::NeutralEstimator;

    struct Fixed(f64, f64);

    impl SentimentEstimator for Fixed {
        fn estimate(&self, _text: &str) -> Result<SentimentSignal, MoodError> {
            Ok(SentimentSignal::new(self.0, self.1))
        }
    }

    struct Broken;

    impl SentimentEstimator for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn estimate(&self, _text: &str) -> Result<SentimentSignal, MoodError> {
            Err(MoodError::EstimatorUnavailable("offline".to_string()))
        }
    }

    struct NanEstimator;

    impl SentimentEstimator for NanEstimator {
        fn estimate(&self, _text: &str) -> Result<SentimentSignal, MoodError> {
            Ok(SentimentSignal {
                polarity: f64::NAN,
                subjectivity: f64::NAN,
            })
        }
    }

    fn classifier<E: SentimentEstimator>(estimator: E) -> Classifier<E> {
        Classifier::new(ClassifierConfig::new(), estimator)
    }

    #[test]
    fn test_keyword_majority_wins() {
        let c = classifier(NeutralEstimator);
        assert_eq!(c.classify("so tired and exhausted"), MoodLabel::Tired);
        assert_eq!(c.classify("furious and livid"), MoodLabel::Angry);
    }

    #[test]
    fn test_blank_defaults_to_calm() {
        let c = classifier(Fixed(0.9, 0.9));
        assert_eq!(c.classify(""), MoodLabel::Calm);
        assert_eq!(c.classify("   \n\t"), MoodLabel::Calm);
    }

    #[test]
    fn test_positive_polarity_boosts_happy() {
        let c = classifier(Fixed(0.5, 0.2));
        let result = c.classify_detailed("the weather outside");
        assert_eq!(result.mood, MoodLabel::Happy);
        assert_eq!(result.score(MoodLabel::Happy), 2);
        assert!(!result.fallback);
    }

    #[test]
    fn test_negative_polarity_boosts_sad() {
        let c = classifier(Fixed(-0.6, 0.2));
        let result = c.classify_detailed("a long meeting");
        assert_eq!(result.mood, MoodLabel::Sad);
        assert_eq!(result.score(MoodLabel::Sad), 2);
    }

    #[test]
    fn test_subjectivity_boosts_anxious() {
        let c = classifier(Fixed(0.0, 0.8));
        let result = c.classify_detailed("the train timetable");
        assert_eq!(result.score(MoodLabel::Anxious), 1);
        assert_eq!(result.mood, MoodLabel::Anxious);
    }

    #[test]
    fn test_boost_outweighs_single_keyword() {
        // one calm keyword vs +2 happy boost
        let c = classifier(Fixed(0.5, 0.0));
        assert_eq!(c.classify("quiet afternoon"), MoodLabel::Happy);
    }

    #[test]
    fn test_polarity_fallback_without_hits() {
        assert_eq!(classifier(Fixed(0.2, 0.0)).classify("the bus"), MoodLabel::Happy);
        assert_eq!(classifier(Fixed(-0.2, 0.0)).classify("the bus"), MoodLabel::Sad);
        assert_eq!(classifier(Fixed(0.05, 0.0)).classify("the bus"), MoodLabel::Calm);
        assert!(classifier(Fixed(0.0, 0.0)).classify_detailed("the bus").fallback);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // exactly at the boost thresholds: no boost, so the fallback decides
        let at_positive = classifier(Fixed(0.3, 0.7)).classify_detailed("the bus");
        assert!(at_positive.scores.values().all(|&s| s == 0));
        assert!(at_positive.fallback);
        assert_eq!(at_positive.mood, MoodLabel::Happy);

        let at_negative = classifier(Fixed(-0.3, 0.0)).classify_detailed("the bus");
        assert_eq!(at_negative.score(MoodLabel::Sad), 0);
        assert!(at_negative.fallback);
        assert_eq!(at_negative.mood, MoodLabel::Sad);

        // exactly at the fallback margin: calm
        for polarity in [0.1, -0.1] {
            let result = classifier(Fixed(polarity, 0.0)).classify_detailed("the bus");
            assert!(result.fallback);
            assert_eq!(result.mood, MoodLabel::Calm, "polarity {polarity}");
        }
    }

    #[test]
    fn test_ties_resolve_in_priority_order() {
        let c = classifier(NeutralEstimator);
        // "upset" is both a sad and an angry keyword
        let result = c.classify_detailed("upset");
        assert_eq!(result.score(MoodLabel::Sad), 1);
        assert_eq!(result.score(MoodLabel::Angry), 1);
        assert_eq!(result.mood, MoodLabel::Sad);

        // one calm hit vs one tired hit
        assert_eq!(c.classify("calm but sleepy"), MoodLabel::Calm);
    }

    #[test]
    fn test_estimator_failure_degrades_to_keywords() {
        let c = classifier(Broken);
        let result = c.classify_detailed("I feel nervous");
        assert_eq!(result.mood, MoodLabel::Anxious);
        assert!(result.sentiment.is_neutral());

        assert_eq!(c.classify("nothing to report"), MoodLabel::Calm);
    }

    #[test]
    fn test_nan_sentiment_treated_as_neutral() {
        let c = classifier(NanEstimator);
        let result = c.classify_detailed("the bus");
        assert!(result.sentiment.is_neutral());
        assert_eq!(result.mood, MoodLabel::Calm);
    }

    #[test]
    fn test_result_always_in_label_set() {
        let c = classifier(Fixed(-1.0, 1.0));
        for text in ["", "x", "HAPPY", "sad angry calm", "🙂", "!!!"] {
            let mood = c.classify(text);
            assert!(MoodLabel::ALL.contains(&mood));
        }
    }

    #[test]
    fn test_config_overrides_boost() {
        let mut config = ClassifierConfig::new();
        config.polarity_boost = 0;
        let c = Classifier::new(config, Fixed(0.9, 0.0));
        // no boost applied and no keyword hits: falls back on polarity
        let result = c.classify_detailed("the bus");
        assert!(result.fallback);
        assert_eq!(result.mood, MoodLabel::Happy);
    }
}
