//! Plain-text rendering of classifications, history views and catalog content

use chrono::TimeZone;
use moodtrack_catalog::{Recommendations, WellnessTip};
use moodtrack_core::{Classification, MoodLabel};
use moodtrack_history::{DailyCount, HourlyCount, MoodEntry};
use std::collections::BTreeMap;
use std::fmt::Display;

const BAR_WIDTH: usize = 20;
const EXCERPT_CHARS: usize = 100;

pub fn mood_badge(mood: MoodLabel) -> String {
    format!("{} {}", mood.emoji(), mood.title())
}

pub fn classification(result: &Classification) -> String {
    let scores: Vec<String> = result
        .scores
        .iter()
        .map(|(mood, score)| format!("{mood}={score}"))
        .collect();

    let mut out = format!(
        "Mood: {}\nSentiment: polarity {:.2}, subjectivity {:.2}\nScores: {}",
        mood_badge(result.mood),
        result.sentiment.polarity,
        result.sentiment.subjectivity,
        scores.join(" ")
    );
    if result.fallback {
        out.push_str("\n(no keyword hits, decided by polarity)");
    }
    out
}

/// Horizontal bar per mood, scaled to the most frequent one
pub fn distribution(dist: &BTreeMap<MoodLabel, usize>) -> String {
    let total: usize = dist.values().sum();
    let max = dist.values().copied().max().unwrap_or(0);
    if total == 0 {
        return "No mood data yet.".to_string();
    }

    dist.iter()
        .map(|(mood, &count)| {
            let bar_len = (count * BAR_WIDTH + max / 2) / max;
            format!(
                "  {:<12} {:<width$} {} ({:.0}%)",
                mood_badge(*mood),
                "█".repeat(bar_len.max(1)),
                count,
                count as f64 / total as f64 * 100.0,
                width = BAR_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn timeline(points: &[DailyCount]) -> String {
    if points.is_empty() {
        return "No mood data yet.".to_string();
    }

    let mut by_date: BTreeMap<_, Vec<String>> = BTreeMap::new();
    for p in points {
        by_date
            .entry(p.date)
            .or_default()
            .push(format!("{} {} x{}", p.mood.emoji(), p.mood, p.count));
    }
    by_date
        .into_iter()
        .map(|(date, moods)| format!("  {}  {}", date.format("%Y-%m-%d"), moods.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn hourly(points: &[HourlyCount]) -> String {
    if points.is_empty() {
        return "No mood data yet.".to_string();
    }

    let mut by_hour: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for p in points {
        by_hour
            .entry(p.hour)
            .or_default()
            .push(format!("{} {} x{}", p.mood.emoji(), p.mood, p.count));
    }
    by_hour
        .into_iter()
        .map(|(hour, moods)| format!("  {:02}:00  {}", hour, moods.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn recent<Tz>(entries: &[&MoodEntry], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if entries.is_empty() {
        return "No mood data yet.".to_string();
    }

    entries
        .iter()
        .map(|e| {
            let when = e.timestamp().with_timezone(tz).format("%Y-%m-%d %H:%M");
            let mut line = format!("  {} {} - {}", e.emoji(), e.mood().title(), when);
            if !e.source_text().is_empty() {
                line.push_str(&format!("\n      \"{}\"", e.excerpt(EXCERPT_CHARS)));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn recommendations(recs: &Recommendations) -> String {
    let mut out = vec![format!("Recommendations for your {} mood", mood_badge(recs.mood))];

    out.push("\nActivities".to_string());
    out.extend(recs.activities.iter().map(|a| format!("  {a}")));

    out.push("\nMusic".to_string());
    for track in recs.music {
        out.push(format!("  {} ({})", track.title, track.description));
        out.push(format!("      {}", track.url));
        if let Some(embed) = track.embed_url() {
            out.push(format!("      embed: {embed}"));
        }
    }

    out.push("\nAmbient sounds".to_string());
    out.extend(
        moodtrack_catalog::ambient_sounds()
            .iter()
            .map(|s| format!("  {} {}: {}", s.icon, s.name, s.url)),
    );

    out.push(format!("\nAffirmation: \"{}\"", recs.affirmation));
    out.join("\n")
}

pub fn library(tips: &[WellnessTip]) -> String {
    let mut out = Vec::new();
    let mut heading = None;
    for tip in tips {
        if heading != Some(tip.category) {
            if heading.is_some() {
                out.push(String::new());
            }
            out.push(tip.category.heading().to_string());
            heading = Some(tip.category);
        }
        out.push(format!("  {}", tip.title));
        out.extend(tip.body.iter().map(|line| format!("    {line}")));
    }
    out.join("\n")
}
