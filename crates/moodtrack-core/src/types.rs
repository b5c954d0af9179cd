//! Core types for mood classification

use crate::error::MoodError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood category.
///
/// Declaration order doubles as the tie-break priority when two labels
/// share the top classification score: earlier variants win.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Sad,
    Anxious,
    Angry,
    #[default]
    Calm,
    Energetic,
    Tired,
}

impl MoodLabel {
    /// Every label, in priority order
    pub const ALL: [MoodLabel; 7] = [
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Anxious,
        MoodLabel::Angry,
        MoodLabel::Calm,
        MoodLabel::Energetic,
        MoodLabel::Tired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Sad => "sad",
            MoodLabel::Anxious => "anxious",
            MoodLabel::Angry => "angry",
            MoodLabel::Calm => "calm",
            MoodLabel::Energetic => "energetic",
            MoodLabel::Tired => "tired",
        }
    }

    /// Capitalized display name
    pub fn title(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "Happy",
            MoodLabel::Sad => "Sad",
            MoodLabel::Anxious => "Anxious",
            MoodLabel::Angry => "Angry",
            MoodLabel::Calm => "Calm",
            MoodLabel::Energetic => "Energetic",
            MoodLabel::Tired => "Tired",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "😊",
            MoodLabel::Sad => "😢",
            MoodLabel::Anxious => "😰",
            MoodLabel::Angry => "😠",
            MoodLabel::Calm => "😌",
            MoodLabel::Energetic => "⚡",
            MoodLabel::Tired => "😴",
        }
    }

    /// Hex colour used when rendering the mood
    pub fn color(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "#FFD700",
            MoodLabel::Sad => "#4169E1",
            MoodLabel::Anxious => "#FF6347",
            MoodLabel::Angry => "#DC143C",
            MoodLabel::Calm => "#90EE90",
            MoodLabel::Energetic => "#FF69B4",
            MoodLabel::Tired => "#9370DB",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodLabel {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        MoodLabel::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == needle)
            .ok_or_else(|| MoodError::UnknownMood(s.to_string()))
    }
}

/// Sentiment estimate for one piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSignal {
    /// Negative to positive, in [-1, 1]
    pub polarity: f64,
    /// Factual to opinionated, in [0, 1]
    pub subjectivity: f64,
}

impl SentimentSignal {
    /// Build a signal, clamping into range. Non-finite values become 0.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: sanitize(polarity).clamp(-1.0, 1.0),
            subjectivity: sanitize(subjectivity).clamp(0.0, 1.0),
        }
    }

    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.polarity == 0.0 && self.subjectivity == 0.0
    }
}

impl Default for SentimentSignal {
    fn default() -> Self {
        Self::neutral()
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
