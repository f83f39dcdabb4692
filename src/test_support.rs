//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::content::{Content, Devotional};
use crate::core::config::{resolve, AmityConfig};
use crate::core::state::App;
use crate::core::store::MemoryStore;

/// Creates a test App over an in-memory store and default config.
pub fn test_app() -> App {
    test_app_with_store(MemoryStore::new())
}

/// Creates a test App over a pre-seeded in-memory store.
pub fn test_app_with_store(store: MemoryStore) -> App {
    let content = Content::load().expect("embedded catalog parses");
    let (profile, settings) = resolve(&AmityConfig::default());
    App::new(content, Box::new(store), profile, settings)
}

/// A minimal devotional record for navigation tests.
pub fn test_devotional(id: &str, week: u32) -> Devotional {
    Devotional {
        id: id.to_string(),
        week_number: week,
        month_number: 1,
        title: format!("Week {}", week),
        scripture_text: "Text".to_string(),
        scripture_reference: "Ref 1:1".to_string(),
        body: "Body".to_string(),
        ponder_questions: vec![],
        practice_items: vec![],
        prayer: "Prayer".to_string(),
    }
}
