//! Music suggestions and ambient soundscapes

use moodtrack_core::MoodLabel;
use serde::Serialize;

const BELL: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";
const RAIN: &str = "https://www.soundjay.com/nature/sounds/rain-03.wav";
const OCEAN: &str = "https://www.soundjay.com/nature/sounds/ocean-wave-1.wav";
const BIRDS: &str = "https://www.soundjay.com/nature/sounds/bird-2.wav";

/// A song with an external video link and optional ambient sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MusicTrack {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub ambient: Option<&'static str>,
}

const fn track(
    title: &'static str,
    url: &'static str,
    description: &'static str,
    ambient: &'static str,
) -> MusicTrack {
    MusicTrack {
        title,
        url,
        description,
        ambient: Some(ambient),
    }
}

impl MusicTrack {
    /// Value of the `v=` query parameter, up to the next `&`
    pub fn video_id(&self) -> Option<&'static str> {
        let url: &'static str = self.url;
        let (_, rest) = url.split_once("v=")?;
        let id = rest.split('&').next().unwrap_or(rest);
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    pub fn embed_url(&self) -> Option<String> {
        self.video_id()
            .map(|id| format!("https://www.youtube.com/embed/{id}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmbientSound {
    pub icon: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

static AMBIENT: &[AmbientSound] = &[
    AmbientSound {
        icon: "🌧️",
        name: "Rain",
        url: RAIN,
    },
    AmbientSound {
        icon: "🌊",
        name: "Ocean Waves",
        url: OCEAN,
    },
    AmbientSound {
        icon: "🐦",
        name: "Birds",
        url: BIRDS,
    },
    AmbientSound {
        icon: "🔥",
        name: "Fireplace",
        url: RAIN,
    },
];

static HAPPY: &[MusicTrack] = &[
    track(
        "Happy - Pharrell Williams",
        "https://www.youtube.com/watch?v=ZbZSe6N_BXs",
        "🎵 Upbeat and joyful",
        BELL,
    ),
    track(
        "Can't Stop the Feeling - Justin Timberlake",
        "https://www.youtube.com/watch?v=ru0K8uYEZWw",
        "🎶 Feel-good pop anthem",
        BELL,
    ),
    track(
        "Uptown Funk - Mark Ronson ft. Bruno Mars",
        "https://www.youtube.com/watch?v=OPf0YbXqDm0",
        "🎸 Funky and energetic",
        BELL,
    ),
];

static SAD: &[MusicTrack] = &[
    track(
        "Someone Like You - Adele",
        "https://www.youtube.com/watch?v=hLQl3WQQoQ0",
        "🎵 Emotional ballad",
        BELL,
    ),
    track(
        "Mad World - Gary Jules",
        "https://www.youtube.com/watch?v=4N3N1MlvVc4",
        "🎶 Melancholic and introspective",
        BELL,
    ),
    track(
        "Hurt - Johnny Cash",
        "https://www.youtube.com/watch?v=8AHCfZTRGiI",
        "🎸 Deep and moving",
        BELL,
    ),
];

static ANXIOUS: &[MusicTrack] = &[
    track(
        "Weightless - Marconi Union",
        "https://www.youtube.com/watch?v=UfcAVejslrU",
        "🎵 Scientifically proven to reduce anxiety",
        RAIN,
    ),
    track(
        "Clair de Lune - Debussy",
        "https://www.youtube.com/watch?v=CvFH_6DNRCY",
        "🎶 Calming classical piece",
        RAIN,
    ),
    track(
        "Rain Sounds for Sleep",
        "https://www.youtube.com/watch?v=mPZkdNFkNps",
        "🌊 Nature sounds for relaxation",
        RAIN,
    ),
];

static ANGRY: &[MusicTrack] = &[
    track(
        "Break Stuff - Limp Bizkit",
        "https://www.youtube.com/watch?v=ZpUYjpKg9KY",
        "🎵 High-energy rock for release",
        BELL,
    ),
    track(
        "Killing in the Name - Rage Against the Machine",
        "https://www.youtube.com/watch?v=bWXazVhlyxQ",
        "🎶 Intense and powerful",
        BELL,
    ),
    track(
        "Lose Yourself - Eminem",
        "https://www.youtube.com/watch?v=_Yhyp-_hX2s",
        "🎤 Channeling anger into motivation",
        BELL,
    ),
];

static CALM: &[MusicTrack] = &[
    track(
        "Gymnopédie No. 1 - Erik Satie",
        "https://www.youtube.com/watch?v=S-Xm7s9eGM4",
        "🎵 Peaceful and meditative",
        OCEAN,
    ),
    track(
        "Spiegel im Spiegel - Arvo Pärt",
        "https://www.youtube.com/watch?v=TJ6Mzvh3XCc",
        "🎶 Minimalist and serene",
        OCEAN,
    ),
    track(
        "Ocean Waves - Nature Sounds",
        "https://www.youtube.com/watch?v=WHPEKLQID4U",
        "🌊 Soothing ocean sounds",
        OCEAN,
    ),
];

static ENERGETIC: &[MusicTrack] = &[
    track(
        "Thunderstruck - AC/DC",
        "https://www.youtube.com/watch?v=v2AC41dglnM",
        "🎵 High-energy rock anthem",
        BELL,
    ),
    track(
        "Pump It - Black Eyed Peas",
        "https://www.youtube.com/watch?v=ZaI2IlHwmgQ",
        "🎶 Motivational and upbeat",
        BELL,
    ),
    track(
        "Levels - Avicii",
        "https://www.youtube.com/watch?v=_ovdm2yX4MA",
        "🎸 Electronic dance energy",
        BELL,
    ),
];

static TIRED: &[MusicTrack] = &[
    track(
        "Sleep Baby Sleep - Broods",
        "https://www.youtube.com/watch?v=0wf-RHgP1k0",
        "🎵 Gentle and soothing",
        RAIN,
    ),
    track(
        "Nocturne in E-flat major - Chopin",
        "https://www.youtube.com/watch?v=9E6b3swbnWg",
        "🎶 Relaxing classical",
        RAIN,
    ),
    track(
        "Sleepyhead - Passion Pit",
        "https://www.youtube.com/watch?v=5bfseWNmlds",
        "🎹 Dreamy and soft",
        RAIN,
    ),
];

pub fn music(mood: MoodLabel) -> &'static [MusicTrack] {
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

pub fn ambient_sounds() -> &'static [AmbientSound] {
    AMBIENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(url: &'static str) -> MusicTrack {
        MusicTrack {
            title: "t",
            url,
            description: "d",
            ambient: None,
        }
    }

    #[test]
    fn test_video_id_extraction() {
        assert_eq!(music(MoodLabel::Happy)[0].video_id(), Some("ZbZSe6N_BXs"));
        assert_eq!(
            custom("https://www.youtube.com/watch?v=abc123&t=42").video_id(),
            Some("abc123")
        );
        assert_eq!(custom("https://example.com/song").video_id(), None);
        assert_eq!(custom("https://www.youtube.com/watch?v=").video_id(), None);
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            music(MoodLabel::Angry)[2].embed_url().as_deref(),
            Some("https://www.youtube.com/embed/_Yhyp-_hX2s")
        );
        assert_eq!(custom("https://example.com").embed_url(), None);
    }

    #[test]
    fn test_every_track_has_video() {
        for mood in MoodLabel::ALL {
            for t in music(mood) {
                assert!(t.video_id().is_some(), "{} has no video id", t.title);
                assert!(t.ambient.is_some());
            }
        }
    }

    #[test]
    fn test_ambient_sounds() {
        let names: Vec<_> = ambient_sounds().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Rain", "Ocean Waves", "Birds", "Fireplace"]);
    }
}
