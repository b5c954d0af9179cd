//! Averaging lexicon estimator with intensifiers and negation

use crate::lexicon::{INTENSIFIERS, NEGATIONS, WORDS};
use moodtrack_core::{MoodError, SentimentEstimator, SentimentSignal};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::debug;

static TOKENIZE_RE: OnceLock<Regex> = OnceLock::new();

/// Polarity multiplier applied to a negated word
const NEGATION_FACTOR: f64 = -0.5;

/// Tokens a pending negation survives before it lapses
const NEGATION_WINDOW: usize = 3;

/// Sentiment scores for one word
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Estimates sentiment as the mean of the scored words in the text.
///
/// An intensifier ("very") scales the next scored word; a negation ("not",
/// "don't") multiplies its polarity by -0.5. Text without any scored word
/// is neutral.
#[derive(Debug, Clone)]
pub struct LexiconEstimator {
    words: HashMap<String, LexiconEntry>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl LexiconEstimator {
    /// Estimator with the built-in English lexicon
    pub fn new() -> Self {
        Self {
            words: WORDS
                .iter()
                .map(|&(w, polarity, subjectivity)| {
                    (
                        w.to_string(),
                        LexiconEntry {
                            polarity,
                            subjectivity,
                        },
                    )
                })
                .collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|&(w, f)| (w.to_string(), f))
                .collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Empty estimator; every text scores neutral until words are added
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
            intensifiers: HashMap::new(),
            negations: HashSet::new(),
        }
    }

    /// Add or replace a scored word
    pub fn insert(&mut self, word: &str, polarity: f64, subjectivity: f64) {
        self.words.insert(
            word.to_lowercase(),
            LexiconEntry {
                polarity: polarity.clamp(-1.0, 1.0),
                subjectivity: subjectivity.clamp(0.0, 1.0),
            },
        );
    }

    pub fn entry(&self, word: &str) -> Option<LexiconEntry> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token) || token.ends_with("n't")
    }

    /// Per-word assessments in text order
    fn assess(&self, text: &str) -> Vec<LexiconEntry> {
        let mut assessments = Vec::new();
        let mut intensity = 1.0;
        let mut negated_for: Option<usize> = None;

        for token in tokenize(text) {
            if self.is_negation(&token) {
                negated_for = Some(0);
                continue;
            }
            if let Some(&factor) = self.intensifiers.get(&token) {
                intensity *= factor;
                continue;
            }

            match self.words.get(&token) {
                Some(entry) => {
                    let mut polarity = entry.polarity * intensity;
                    if negated_for.is_some() {
                        polarity *= NEGATION_FACTOR;
                    }
                    assessments.push(LexiconEntry {
                        polarity: polarity.clamp(-1.0, 1.0),
                        subjectivity: (entry.subjectivity * intensity).clamp(0.0, 1.0),
                    });
                    intensity = 1.0;
                    negated_for = None;
                }
                None => {
                    intensity = 1.0;
                    negated_for = match negated_for {
                        Some(n) if n + 1 < NEGATION_WINDOW => Some(n + 1),
                        _ => None,
                    };
                }
            }
        }

        assessments
    }
}

impl Default for LexiconEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentEstimator for LexiconEstimator {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn estimate(&self, text: &str) -> Result<SentimentSignal, MoodError> {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return Ok(SentimentSignal::neutral());
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;
        debug!(words = assessments.len(), polarity, subjectivity, "lexicon estimate");

        Ok(SentimentSignal::new(polarity, subjectivity))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    let re = TOKENIZE_RE.get_or_init(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").unwrap());
    let lowered = text.to_lowercase().replace('\u{2019}', "'");
    re.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(text: &str) -> SentimentSignal {
        LexiconEstimator::new().estimate(text).unwrap()
    }

    #[test]
    fn test_tokenize_keeps_contractions() {
        assert_eq!(
            tokenize("I DON'T feel great!"),
            vec!["i", "don't", "feel", "great"]
        );
        assert_eq!(tokenize("can’t sleep"), vec!["can't", "sleep"]);
    }

    #[test]
    fn test_unscored_text_is_neutral() {
        assert!(estimate("").is_neutral());
        assert!(estimate("the report is on the desk").is_neutral());
    }

    #[test]
    fn test_positive_text() {
        let s = estimate("I am so happy and excited today!");
        assert!(s.polarity > 0.3, "polarity {}", s.polarity);
        assert!(s.subjectivity > 0.7, "subjectivity {}", s.subjectivity);
    }

    #[test]
    fn test_negative_text() {
        let s = estimate("what a terrible, awful day");
        assert_eq!(s.polarity, -1.0);
    }

    #[test]
    fn test_intensifier_scales() {
        let plain = estimate("bad");
        let strong = estimate("very bad");
        assert!(strong.polarity < plain.polarity);
        assert!((strong.polarity - (-0.91)).abs() < 1e-9);
    }

    #[test]
    fn test_negation_flips() {
        let s = estimate("not good");
        assert!((s.polarity - (-0.35)).abs() < 1e-9);

        let s = estimate("I don't feel good");
        assert!(s.polarity < 0.0);
    }

    #[test]
    fn test_negation_lapses_after_window() {
        let s = estimate("not that it matters much but good");
        assert!(s.polarity > 0.0);
    }

    #[test]
    fn test_anxious_words_stay_mild() {
        let s = estimate("I feel anxious and overwhelmed about tomorrow");
        assert!(s.polarity > -0.3);
        assert!(s.subjectivity <= 0.7);
    }

    #[test]
    fn test_custom_entries() {
        let mut est = LexiconEstimator::empty();
        assert!(estimate_with(&est, "splendid").is_neutral());
        est.insert("Splendid", 0.9, 0.8);
        assert_eq!(est.entry("splendid").unwrap().polarity, 0.9);
        let s = estimate_with(&est, "splendid");
        assert_eq!(s.polarity, 0.9);
        assert_eq!(s.subjectivity, 0.8);
    }

    fn estimate_with(est: &LexiconEstimator, text: &str) -> SentimentSignal {
        est.estimate(text).unwrap()
    }
}
