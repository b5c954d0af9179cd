//! Mood-specific affirmations

use moodtrack_core::MoodLabel;
use rand::seq::SliceRandom;
use rand::Rng;

static HAPPY: &[&str] = &[
    "I am radiating joy and positivity today!",
    "My happiness is contagious and brightens others' days.",
    "I choose to see the good in every situation.",
    "I am grateful for this moment of joy.",
    "My positive energy creates wonderful opportunities.",
];

static SAD: &[&str] = &[
    "This feeling is temporary, and I will get through this.",
    "I am allowed to feel my emotions and process them healthily.",
    "I am stronger than I know and more resilient than I feel.",
    "Tomorrow brings new possibilities and hope.",
    "I am worthy of love and compassion, especially from myself.",
];

static ANXIOUS: &[&str] = &[
    "I am safe in this moment and can handle whatever comes.",
    "I breathe deeply and release all tension from my body.",
    "I trust in my ability to navigate challenges.",
    "I am in control of my thoughts and choose peace.",
    "This anxiety will pass, and I am stronger than my fears.",
];

static ANGRY: &[&str] = &[
    "I acknowledge my anger and choose to respond with wisdom.",
    "I release this anger and choose peace over conflict.",
    "I am in control of my reactions and choose kindness.",
    "My anger is valid, but I choose healthy ways to express it.",
    "I forgive others and myself, freeing my heart from resentment.",
];

static CALM: &[&str] = &[
    "I am present, centered, and at peace with myself.",
    "My calm energy creates harmony in my environment.",
    "I trust in the natural flow of life.",
    "I am grounded and connected to my inner wisdom.",
    "Peace flows through me like a gentle river.",
];

static ENERGETIC: &[&str] = &[
    "I channel my energy into positive and productive actions.",
    "My enthusiasm inspires others and creates positive change.",
    "I am focused and ready to tackle any challenge.",
    "My energy is a gift that I use to serve my highest purpose.",
    "I am unstoppable when I align my energy with my goals.",
];

static TIRED: &[&str] = &[
    "I give myself permission to rest and recharge.",
    "My body and mind deserve care and restoration.",
    "Rest is productive and necessary for my well-being.",
    "I honor my need for sleep and relaxation.",
    "Tomorrow I will feel refreshed and renewed.",
];

pub fn affirmations(mood: MoodLabel) -> &'static [&'static str] {
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

/// Uniformly random affirmation for `mood`, drawn from `rng`
pub fn affirmation<R: Rng + ?Sized>(mood: MoodLabel, rng: &mut R) -> &'static str {
    affirmations(mood).choose(rng).copied().unwrap_or(CALM[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_affirmation() {
        let a = affirmation(MoodLabel::Sad, &mut StdRng::seed_from_u64(42));
        let b = affirmation(MoodLabel::Sad, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(SAD.contains(&a));
    }

    #[test]
    fn test_selection_covers_the_list() {
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<&str> = (0..500)
            .map(|_| affirmation(MoodLabel::Energetic, &mut rng))
            .collect();
        assert_eq!(seen.len(), ENERGETIC.len());
    }
}
