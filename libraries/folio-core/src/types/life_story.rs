//! Long-form "life journey" biography cards
//!
//! Unrelated to `Highlight` despite the similar story-style UX: these are
//! purely editorial, never expire, and have no lifecycle beyond
//! create/edit/delete.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A biography entry shown in the life-journey section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LifeStory {
    /// Unique id (uuid v4 string)
    pub id: String,

    /// Card title
    pub title: String,

    /// Short summary shown on the card
    pub short_desc: String,

    /// Long-form text shown when the card is expanded
    pub long_details: String,

    /// Card image URL
    pub image_url: String,

    /// Decorative glyph/emoji shown on the card
    pub icon_glyph: String,
}

impl LifeStory {
    /// New entry with the editor's "+ New Entry" placeholder fields
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: "New Story".to_string(),
            short_desc: "Summary".to_string(),
            long_details: "Details".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1455390582262-044cdead277a?auto=format&fit=crop&q=80&w=1000"
                    .to_string(),
            icon_glyph: "📖".to_string(),
        }
    }
}
