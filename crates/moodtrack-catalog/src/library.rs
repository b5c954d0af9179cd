//! Static wellness library

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    Mindfulness,
    Productivity,
    SelfCare,
}

impl TipCategory {
    pub fn heading(&self) -> &'static str {
        match self {
            TipCategory::Mindfulness => "🧘 Mindfulness & Meditation",
            TipCategory::Productivity => "💡 Productivity Tips",
            TipCategory::SelfCare => "🌱 Self-Care Practices",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WellnessTip {
    pub category: TipCategory,
    pub title: &'static str,
    /// One line per step or sentence
    pub body: &'static [&'static str],
}

static LIBRARY: &[WellnessTip] = &[
    WellnessTip {
        category: TipCategory::Mindfulness,
        title: "🎯 4-7-8 Breathing Technique",
        body: &[
            "1. Inhale for 4 counts",
            "2. Hold for 7 counts",
            "3. Exhale for 8 counts",
            "4. Repeat 3-4 times",
        ],
    },
    WellnessTip {
        category: TipCategory::Mindfulness,
        title: "🌟 5-4-3-2-1 Grounding Technique",
        body: &[
            "Notice:",
            "5 things you can see",
            "4 things you can touch",
            "3 things you can hear",
            "2 things you can smell",
            "1 thing you can taste",
        ],
    },
    WellnessTip {
        category: TipCategory::Productivity,
        title: "🍅 Pomodoro Technique",
        body: &["Work for 25 minutes, then take a 5-minute break. After 4 cycles, take a longer 15-30 minute break."],
    },
    WellnessTip {
        category: TipCategory::Productivity,
        title: "📝 Daily Planning",
        body: &["Each morning, write down 3 important tasks for the day. Focus on completing these before moving to other activities."],
    },
    WellnessTip {
        category: TipCategory::SelfCare,
        title: "💧 Hydration Reminder",
        body: &["Drink water regularly throughout the day. Aim for 8 glasses or more, and notice how hydration affects your mood and energy."],
    },
    WellnessTip {
        category: TipCategory::SelfCare,
        title: "🌙 Sleep Hygiene",
        body: &["Maintain a consistent sleep schedule, avoid screens 1 hour before bed, and create a calm bedtime routine."],
    },
];

/// Tips in display order, grouped by category
pub fn wellness_library() -> &'static [WellnessTip] {
    LIBRARY
}
