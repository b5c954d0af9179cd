//! Static recommendation catalog: affirmations, activities, music and wellness tips

mod activities;
mod affirmations;
mod library;
mod music;

pub use activities::{activities, Activity};
pub use affirmations::{affirmation, affirmations};
pub use library::{wellness_library, TipCategory, WellnessTip};
pub use music::{ambient_sounds, music, AmbientSound, MusicTrack};

use moodtrack_core::MoodLabel;
use rand::Rng;
use serde::Serialize;

/// Everything recommended for one mood
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub mood: MoodLabel,
    pub affirmation: &'static str,
    pub activities: &'static [Activity],
    pub music: &'static [MusicTrack],
}

pub fn recommendations<R: Rng + ?Sized>(mood: MoodLabel, rng: &mut R) -> Recommendations {
    Recommendations {
        mood,
        affirmation: affirmation(mood, rng),
        activities: activities(mood),
        music: music(mood),
    }
}

/// Resolve a free-form mood name, falling back to calm when unknown
pub fn resolve_mood(name: &str) -> MoodLabel {
    name.parse().unwrap_or(MoodLabel::Calm)
}
