//! Hand-curated keyword stems per mood

use crate::types::MoodLabel;

static HAPPY: &[&str] = &[
    "happy", "joy", "excited", "great", "amazing", "wonderful", "fantastic", "good", "positive",
    "cheerful", "delighted", "pleased", "content", "satisfied", "optimistic", "thrilled", "elated",
];

static SAD: &[&str] = &[
    "sad", "down", "depressed", "upset", "disappointed", "hurt", "cry", "tears", "blue", "gloomy",
    "melancholy", "dejected", "heartbroken", "sorrowful", "miserable", "grief",
];

static ANXIOUS: &[&str] = &[
    "anxious", "worried", "stress", "nervous", "panic", "overwhelmed", "tense", "restless",
    "uneasy", "concerned", "fearful", "apprehensive", "jittery", "stressed", "frantic",
];

static ANGRY: &[&str] = &[
    "angry", "mad", "frustrated", "annoyed", "irritated", "furious", "rage", "pissed", "upset",
    "bothered", "livid", "enraged", "irate", "outraged",
];

static CALM: &[&str] = &[
    "calm", "peaceful", "relaxed", "serene", "tranquil", "composed", "centered", "balanced",
    "quiet", "still", "zen", "mindful", "meditative",
];

static ENERGETIC: &[&str] = &[
    "energetic", "motivated", "pumped", "active", "dynamic", "vigorous", "lively", "spirited",
    "enthusiastic", "driven", "focused", "productive",
];

static TIRED: &[&str] = &[
    "tired", "exhausted", "drained", "weary", "fatigued", "sleepy", "burnt", "worn", "depleted",
    "lethargic", "sluggish",
];

/// Keyword stems matched as substrings of lowercased text
pub fn keywords(mood: MoodLabel) -> &'static [&'static str] {
    match mood {
        MoodLabel::Happy => HAPPY,
        MoodLabel::Sad => SAD,
        MoodLabel::Anxious => ANXIOUS,
        MoodLabel::Angry => ANGRY,
        MoodLabel::Calm => CALM,
        MoodLabel::Energetic => ENERGETIC,
        MoodLabel::Tired => TIRED,
    }
}

/// Number of keywords for `mood` present in `lowered`. Each keyword counts once.
pub(crate) fn keyword_hits(mood: MoodLabel, lowered: &str) -> usize {
    keywords(mood)
        .iter()
        .filter(|kw| lowered.contains(*kw))
        .count()
}
