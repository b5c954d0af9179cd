//! Suggested activities per mood, in display order

use moodtrack_core::MoodLabel;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

const fn act(icon: &'static str, title: &'static str, detail: &'static str) -> Activity {
    Activity {
        icon,
        title,
        detail,
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.icon, self.title, self.detail)
    }
}

static HAPPY: &[Activity] = &[
    act("🎨", "Creative Expression", "Paint, draw, or write in a journal"),
    act("🤝", "Social Connection", "Call a friend or family member"),
    act("🎵", "Music & Dance", "Put on your favorite songs and dance"),
    act("🌱", "Spread Joy", "Do something kind for someone else"),
    act("📸", "Capture Memories", "Take photos of things that make you smile"),
];

static SAD: &[Activity] = &[
    act("🛁", "Self-Care", "Take a warm bath or shower"),
    act("📚", "Gentle Reading", "Read something comforting or inspirational"),
    act("🍵", "Mindful Tea", "Brew your favorite tea and savor it slowly"),
    act("🌳", "Nature Walk", "Take a gentle walk outside"),
    act("💭", "Journaling", "Write down your thoughts and feelings"),
];

static ANXIOUS: &[Activity] = &[
    act("🧘", "Deep Breathing", "Practice 4-7-8 breathing technique"),
    act("🏃", "Light Exercise", "Go for a walk or do gentle yoga"),
    act("🎵", "Calming Music", "Listen to relaxing or meditative music"),
    act("📱", "Mindfulness App", "Use a guided meditation app"),
    act("🧩", "Focus Activity", "Do a puzzle or organized activity"),
];

static ANGRY: &[Activity] = &[
    act("🥊", "Physical Release", "Go for a run or do intense exercise"),
    act("📝", "Anger Journal", "Write down what's bothering you"),
    act("🧘", "Meditation", "Practice loving-kindness meditation"),
    act(
        "🎵",
        "Music Therapy",
        "Listen to music that matches then soothes your mood",
    ),
    act("🗣️", "Talk it Out", "Call a trusted friend or counselor"),
];

static CALM: &[Activity] = &[
    act("📖", "Mindful Reading", "Read something that interests you"),
    act("🌅", "Gratitude Practice", "Write down 3 things you're grateful for"),
    act("🎨", "Creative Flow", "Engage in art, music, or writing"),
    act("🌿", "Nature Connection", "Spend time in nature or tend to plants"),
    act(
        "🧘",
        "Meditation",
        "Practice mindfulness or loving-kindness meditation",
    ),
];

static ENERGETIC: &[Activity] = &[
    act("🎯", "Goal Setting", "Plan and work on important projects"),
    act("🏃", "Exercise", "Go for a run, bike ride, or gym workout"),
    act("🧹", "Productive Tasks", "Organize, clean, or tackle your to-do list"),
    act("💡", "Learning", "Take on a new skill or educational challenge"),
    act("🤝", "Social Activities", "Meet friends for active pursuits"),
];

static TIRED: &[Activity] = &[
    act("😴", "Quality Rest", "Take a 20-minute power nap"),
    act("🛁", "Relaxation", "Take a warm bath with calming scents"),
    act("📚", "Light Reading", "Read something easy and enjoyable"),
    act("🍵", "Herbal Tea", "Drink chamomile or other calming teas"),
    act("🧘", "Gentle Stretching", "Do light yoga or stretching exercises"),
];

pub fn activities(mood: MoodLabel) -> &'static [Activity] {
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
