//! Ephemeral story items ("highlights")
//!
//! A highlight lives for 24 hours of wall-clock time measured against its
//! creation timestamp. Expiry is enforced at load time by the content
//! store, which prunes expired items from the persisted list rather than
//! merely hiding them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Highlight lifetime: 24 hours in milliseconds
pub const HIGHLIGHT_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Media kind of a highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image
    #[default]
    Image,
    /// Video clip (autoplays muted in the viewer)
    Video,
}

/// A short-lived media item shown in the story-style carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Highlight {
    /// Unique id (uuid v4 string)
    pub id: String,

    /// Image or video
    #[serde(rename = "type")]
    pub media_kind: MediaKind,

    /// Full-size media URL
    #[serde(rename = "url")]
    pub media_url: String,

    /// Circular shelf thumbnail URL
    pub thumbnail_url: String,

    /// Caption shown over the media
    pub caption: String,

    /// Free-text timestamp label ("Just now", "2h ago")
    pub display_timestamp: String,

    /// Creation time in epoch milliseconds; drives the 24h expiry
    pub created_at_ms: i64,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            id: String::new(),
            media_kind: MediaKind::Image,
            media_url: String::new(),
            thumbnail_url: String::new(),
            caption: String::new(),
            display_timestamp: String::new(),
            created_at_ms: 0,
        }
    }
}

impl Highlight {
    /// New highlight with the editor's "+ New Post" placeholder fields
    pub fn placeholder(now_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            media_kind: MediaKind::Image,
            media_url:
                "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=800"
                    .to_string(),
            thumbnail_url:
                "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=200"
                    .to_string(),
            caption: "New Highlight".to_string(),
            display_timestamp: "Just now".to_string(),
            created_at_ms: now_ms,
        }
    }

    /// Whether this highlight is past its 24-hour lifetime at `now_ms`
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.created_at_ms) > HIGHLIGHT_TTL_MS
    }
}
