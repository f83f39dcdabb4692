//! # Content Catalog
//!
//! The static devotional catalog: twelve weekly devotionals across
//! three months, the emotion tags and fixed questions used by the
//! reflection journal, and the SHMILY sample data. Everything is
//! embedded at compile time as TOML and parsed once at startup.
//!
//! Screens only ever borrow from [`Content`]; nothing here is mutable.

use serde::Deserialize;

/// The full journey length advertised by the product (the embedded
/// catalog carries the first twelve weeks).
pub const TOTAL_WEEKS: u32 = 54;

const CATALOG: &str = include_str!("catalog.toml");

/// A weekly devotional record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Devotional {
    pub id: String,
    pub week_number: u32,
    pub month_number: u32,
    pub title: String,
    pub scripture_text: String,
    pub scripture_reference: String,
    pub body: String,
    pub ponder_questions: Vec<String>,
    pub practice_items: Vec<String>,
    pub prayer: String,
}

/// An emotional-state tag selectable on the reflection screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Emotion {
    pub id: String,
    pub label: String,
    pub emoji: String,
}

/// One of the fixed weekly reflection prompts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReflectionQuestion {
    pub id: String,
    pub question: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteDirection {
    Sent,
    Received,
}

/// A SHMILY sample note, aged relative to "now" when the screen builds
/// its view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SampleNote {
    pub message: String,
    pub days_ago: i64,
    pub direction: NoteDirection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyQuote {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Content {
    pub daily_quote: DailyQuote,
    pub devotionals: Vec<Devotional>,
    pub emotions: Vec<Emotion>,
    pub reflection_questions: Vec<ReflectionQuestion>,
    pub quick_messages: Vec<String>,
    pub sample_notes: Vec<SampleNote>,
}

impl Content {
    /// Parse the embedded catalog.
    pub fn load() -> Result<Content, toml::de::Error> {
        toml::from_str(CATALOG)
    }

    /// The devotional for the current week of the journey (the catalog
    /// is ordered by week, week one first).
    pub fn current_week(&self) -> Option<&Devotional> {
        self.devotionals.first()
    }

    pub fn devotional_by_id(&self, id: &str) -> Option<&Devotional> {
        self.devotionals.iter().find(|d| d.id == id)
    }

    /// Display label for a month group on the devotional list.
    pub fn month_label(month_number: u32) -> String {
        format!("Month {}", month_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_catalog_parses() {
        let content = Content::load().unwrap();
        assert_eq!(content.devotionals.len(), 12);
        assert_eq!(content.emotions.len(), 12);
        assert_eq!(content.reflection_questions.len(), 7);
        assert_eq!(content.quick_messages.len(), 6);
        assert_eq!(content.sample_notes.len(), 3);
    }

    #[test]
    fn test_devotional_ids_unique_and_weeks_sequential() {
        let content = Content::load().unwrap();
        let ids: BTreeSet<&str> = content.devotionals.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), content.devotionals.len());
        for (i, d) in content.devotionals.iter().enumerate() {
            assert_eq!(d.week_number, i as u32 + 1);
            assert!((1..=3).contains(&d.month_number), "{} out of range", d.month_number);
        }
    }

    #[test]
    fn test_every_devotional_is_complete() {
        let content = Content::load().unwrap();
        for d in &content.devotionals {
            assert!(!d.title.is_empty());
            assert!(!d.scripture_text.is_empty());
            assert!(!d.scripture_reference.is_empty());
            assert!(!d.body.is_empty());
            assert_eq!(d.ponder_questions.len(), 3, "{}", d.title);
            assert_eq!(d.practice_items.len(), 3, "{}", d.title);
            assert!(!d.prayer.is_empty());
        }
    }

    #[test]
    fn test_current_week_is_week_one() {
        let content = Content::load().unwrap();
        assert_eq!(content.current_week().map(|d| d.week_number), Some(1));
    }

    #[test]
    fn test_devotional_lookup_by_id() {
        let content = Content::load().unwrap();
        assert_eq!(
            content.devotional_by_id("12").map(|d| d.title.as_str()),
            Some("Rest & Sabbath")
        );
        assert!(content.devotional_by_id("99").is_none());
    }
}
