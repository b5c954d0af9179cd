use crate::render;
use chrono::{Local, TimeZone, Utc};
use moodtrack_core::{Classifier, ClassifierConfig, MoodLabel, SentimentEstimator};
use moodtrack_history::{MoodEntry, Session, RECENT_LIMIT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Display;
use std::io::{BufRead, Write};

const HELP: &str = "\
Type how you feel to check in, or use a command:
  /mood <name>   pick a mood directly (happy, sad, anxious, angry, calm, energetic, tired)
  /affirm        new affirmation for the current mood
  /recommend     activities, music and ambient sounds for the current mood
  /stats         mood distribution
  /timeline      moods per day
  /hours         moods by hour of day
  /recent        last 10 check-ins
  /help          this text
  /quit          end the session";

const NO_MOOD: &str = "Please check in with your mood first to get personalized recommendations!";
const NO_DATA: &str = "No mood data yet. Start by checking in with your mood!";

#[derive(Debug, PartialEq)]
enum Input {
    CheckIn(String),
    Select(MoodLabel),
    Affirm,
    Recommend,
    Stats,
    Timeline,
    Hours,
    Recent,
    Help,
    Quit,
    Invalid(String),
}

fn parse_line(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Some(Input::CheckIn(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let input = match parts.next().unwrap_or("") {
        "mood" => match parts.next().map(str::parse::<MoodLabel>) {
            Some(Ok(mood)) => Input::Select(mood),
            Some(Err(e)) => Input::Invalid(e.to_string()),
            None => Input::Invalid("usage: /mood <name>".to_string()),
        },
        "affirm" => Input::Affirm,
        "recommend" | "rec" => Input::Recommend,
        "stats" => Input::Stats,
        "timeline" => Input::Timeline,
        "hours" => Input::Hours,
        "recent" => Input::Recent,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => Input::Invalid(format!("unknown command: /{other} (try /help)")),
    };
    Some(input)
}

pub fn run(config: ClassifierConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let classifier = super::build_classifier(config);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let session = drive(&classifier, stdin.lock(), &mut stdout.lock(), &mut rng, &Local)?;
    tracing::info!(entries = session.log().len(), "session ended");
    Ok(())
}

/// Feed input lines through one session until EOF or /quit
fn drive<E, R, W, G, Tz>(
    classifier: &Classifier<E>,
    input: R,
    out: &mut W,
    rng: &mut G,
    tz: &Tz,
) -> anyhow::Result<Session>
where
    E: SentimentEstimator,
    R: BufRead,
    W: Write,
    G: Rng,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut session = Session::new();
    writeln!(out, "How are you feeling today? (/help for commands)")?;

    for line in input.lines() {
        let Some(cmd) = parse_line(&line?) else {
            continue;
        };

        match cmd {
            Input::CheckIn(text) => {
                let result = session.check_in_text(classifier, &text, Utc::now());
                report_entry(result, out, rng)?;
            }
            Input::Select(mood) => {
                let result = session.select_mood(mood, Utc::now());
                report_entry(result, out, rng)?;
            }
            Input::Affirm => match session.next_affirmation(rng) {
                Some(text) => writeln!(out, "🌟 Your Personal Affirmation: \"{text}\"")?,
                None => writeln!(out, "{NO_MOOD}")?,
            },
            Input::Recommend => match session.current_mood() {
                Some(mood) => {
                    let recs = moodtrack_catalog::recommendations(mood, rng);
                    writeln!(out, "{}", render::recommendations(&recs))?;
                }
                None => writeln!(out, "{NO_MOOD}")?,
            },
            Input::Stats => {
                if session.log().is_empty() {
                    writeln!(out, "{NO_DATA}")?;
                } else {
                    let summary = session.log().summary();
                    writeln!(out, "Mood Distribution ({} check-ins)", summary.total)?;
                    writeln!(out, "{}", render::distribution(&session.log().distribution()))?;
                    if let Some(mood) = summary.dominant {
                        writeln!(out, "Most frequent: {}", render::mood_badge(mood))?;
                    }
                }
            }
            Input::Timeline => {
                writeln!(out, "Mood Timeline")?;
                writeln!(out, "{}", render::timeline(&session.log().daily_timeline(tz)))?;
            }
            Input::Hours => {
                writeln!(out, "Mood by Time of Day")?;
                writeln!(out, "{}", render::hourly(&session.log().hourly_pattern(tz)))?;
            }
            Input::Recent => {
                writeln!(out, "Recent Mood Entries")?;
                writeln!(out, "{}", render::recent(&session.log().recent(RECENT_LIMIT), tz))?;
            }
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Quit => break,
            Input::Invalid(msg) => writeln!(out, "{msg}")?,
        }
    }

    Ok(session)
}

/// Show a recorded mood with an affirmation. Only /affirm counts
/// towards the session's affirmation total.
fn report_entry<W: Write, G: Rng>(
    result: Result<MoodEntry, moodtrack_history::SessionError>,
    out: &mut W,
    rng: &mut G,
) -> anyhow::Result<()> {
    match result {
        Ok(entry) => {
            let text = moodtrack_catalog::affirmation(entry.mood(), rng);
            writeln!(out, "Current Mood: {}", render::mood_badge(entry.mood()))?;
            writeln!(out, "🌟 Your Personal Affirmation: \"{text}\"")?;
        }
        Err(e) => {
            tracing::warn!(error = %e, "check-in not recorded");
            writeln!(out, "Could not record mood: {e}")?;
        }
    }
    Ok(())
}
