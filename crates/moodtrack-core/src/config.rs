//! Configuration for mood classification

use crate::error::MoodError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Classifier thresholds and boosts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Polarity above this adds `polarity_boost` to happy
    pub positive_threshold: f64,

    /// Polarity below this adds `polarity_boost` to sad
    pub negative_threshold: f64,

    /// Score added by a strong polarity
    pub polarity_boost: usize,

    /// Subjectivity above this adds `subjectivity_boost` to anxious
    pub subjectivity_threshold: f64,

    /// Score added by high subjectivity
    pub subjectivity_boost: usize,

    /// Polarity margin used when no category scored at all
    pub fallback_threshold: f64,
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self {
            positive_threshold: 0.3,
            negative_threshold: -0.3,
            polarity_boost: 2,
            subjectivity_threshold: 0.7,
            subjectivity_boost: 1,
            fallback_threshold: 0.1,
        }
    }

    /// Parse a JSON config; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, MoodError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, MoodError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new()
    }
}
