//! The full persisted snapshot of all editable entities
//!
//! The content store exclusively owns one `ContentBundle`; UI components
//! hold only transient view state (slide index, modal open/closed, form
//! drafts) that is never persisted.

use serde::{Deserialize, Serialize};

use crate::types::{
    BroadcastState, Highlight, LifeStory, LocalizedContent, Project, SocialLink,
};

/// Everything the site persists, as one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentBundle {
    /// Bilingual text content
    pub content: LocalizedContent,

    /// Project grid entries
    pub projects: Vec<Project>,

    /// Life-journey biography cards
    pub stories: Vec<LifeStory>,

    /// Ephemeral story items, newest first
    pub highlights: Vec<Highlight>,

    /// Ordered hero slideshow image URLs
    pub hero_images: Vec<String>,

    /// Footer/social section links
    pub social_links: Vec<SocialLink>,

    /// Singleton live-broadcast state
    pub broadcast: BroadcastState,
}

impl Default for ContentBundle {
    fn default() -> Self {
        Self {
            content: LocalizedContent::default(),
            projects: Project::seeded(),
            stories: Vec::new(),
            highlights: Vec::new(),
            hero_images: seeded_hero_images(),
            social_links: SocialLink::seeded(),
            broadcast: BroadcastState::default(),
        }
    }
}

impl ContentBundle {
    /// Drop expired highlights in place; returns how many were removed
    ///
    /// Callers that keep a persisted copy must write the pruned list back,
    /// expiry removes items from the store rather than hiding them.
    pub fn prune_expired_highlights(&mut self, now_ms: i64) -> usize {
        let before = self.highlights.len();
        self.highlights.retain(|h| !h.is_expired(now_ms));
        before - self.highlights.len()
    }

    /// Highlights still inside their 24-hour window, without mutating
    pub fn active_highlights(&self, now_ms: i64) -> Vec<Highlight> {
        self.highlights
            .iter()
            .filter(|h| !h.is_expired(now_ms))
            .cloned()
            .collect()
    }
}

/// Seeded hero slideshow images
fn seeded_hero_images() -> Vec<String> {
    [
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=600",
        "https://images.unsplash.com/photo-1492562080023-ab3db95bfbce?auto=format&fit=crop&q=80&w=600",
        "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=600",
        "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=600",
        "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?auto=format&fit=crop&q=80&w=600",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: i64 = 60 * 60 * 1000;

    #[test]
    fn prune_mixed_ages() {
        let now = 1_700_000_000_000;
        let mut bundle = ContentBundle::default();
        bundle.highlights = vec![
            Highlight::placeholder(now - 23 * HOUR_MS),
            Highlight::placeholder(now - 25 * HOUR_MS),
        ];

        let pruned = bundle.prune_expired_highlights(now);

        assert_eq!(pruned, 1);
        assert_eq!(bundle.highlights.len(), 1);
        assert_eq!(bundle.highlights[0].created_at_ms, now - 23 * HOUR_MS);
    }

    #[test]
    fn active_highlights_leaves_bundle_intact() {
        let now = 1_700_000_000_000;
        let mut bundle = ContentBundle::default();
        bundle.highlights = vec![Highlight::placeholder(now - 30 * HOUR_MS)];

        assert!(bundle.active_highlights(now).is_empty());
        assert_eq!(bundle.highlights.len(), 1);
    }

    #[test]
    fn default_bundle_is_seeded() {
        let bundle = ContentBundle::default();
        assert_eq!(bundle.projects.len(), 3);
        assert_eq!(bundle.hero_images.len(), 5);
        assert_eq!(bundle.social_links.len(), 3);
        assert!(bundle.highlights.is_empty());
        assert!(!bundle.broadcast.is_broadcasting);
    }

    #[test]
    fn bundle_round_trips_through_json() {
        let now = 1_700_000_000_000;
        let mut bundle = ContentBundle::default();
        bundle.highlights.push(Highlight::placeholder(now));
        bundle.stories.push(LifeStory::placeholder());

        let json = serde_json::to_string(&bundle).unwrap();
        let restored: ContentBundle = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, bundle);
    }
}
