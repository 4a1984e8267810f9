//! Visitor page view model
//!
//! Owns a snapshot of the content bundle plus the two pieces of visitor
//! preference (language, theme). All display state flows through here
//! explicitly; a save in the editor replaces the snapshot wholesale via
//! [`PageView::refresh`] rather than patching individual fields.

use folio_core::{
    BroadcastState, ContentBundle, ContentRecord, HeroBio, Highlight, Language, LifeStory,
    Project, SocialLink,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visitor color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (site default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// One stat card: a fixed figure with an editable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    /// Headline figure (not editable)
    pub figure: &'static str,
    /// Label underneath, from the content record
    pub label: String,
}

/// One life-journey card assembled from a content text block pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyCard {
    pub title: String,
    pub content: String,
}

/// Page-level view state for the visitor surface
#[derive(Debug, Clone)]
pub struct PageView {
    bundle: ContentBundle,
    language: Language,
    theme: Theme,
    hero_override: Option<HeroBio>,
}

impl PageView {
    /// Create a view over a loaded bundle with default preferences
    pub fn new(bundle: ContentBundle) -> Self {
        Self {
            bundle,
            language: Language::default(),
            theme: Theme::default(),
            hero_override: None,
        }
    }

    /// Current language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Flip between English and Bangla
    pub fn toggle_language(&mut self) {
        self.language = match self.language {
            Language::En => Language::Bn,
            Language::Bn => Language::En,
        };
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Text content for the current language
    pub fn text(&self) -> &ContentRecord {
        self.bundle.content.get(self.language)
    }

    /// Text content for the hero section, with any personalized rewrite
    /// layered over the stored `title`/`desc`. Every other field comes
    /// through untouched.
    pub fn hero_text(&self) -> ContentRecord {
        let mut text = self.text().clone();
        if let Some(bio) = &self.hero_override {
            text.title = bio.title.clone();
            text.desc = bio.desc.clone();
        }
        text
    }

    /// Apply a personalized hero rewrite for this visitor
    ///
    /// The stored content is untouched; the overlay lasts until
    /// [`PageView::clear_hero_override`] and survives language switches
    /// and snapshot refreshes.
    pub fn set_hero_override(&mut self, bio: HeroBio) {
        debug!(title = %bio.title, "hero rewrite applied");
        self.hero_override = Some(bio);
    }

    /// Drop the personalized rewrite and show the stored hero text again
    pub fn clear_hero_override(&mut self) {
        self.hero_override = None;
    }

    /// The active hero rewrite, if any
    pub fn hero_override(&self) -> Option<&HeroBio> {
        self.hero_override.as_ref()
    }

    /// The three stat cards; figures are fixed, labels follow the content
    pub fn stat_cards(&self) -> [StatCard; 3] {
        let text = self.text();
        [
            StatCard {
                figure: "5+",
                label: text.stat1.clone(),
            },
            StatCard {
                figure: "50+",
                label: text.stat2.clone(),
            },
            StatCard {
                figure: "100%",
                label: text.stat3.clone(),
            },
        ]
    }

    /// Life-journey cards in display order
    pub fn journey_cards(&self) -> Vec<JourneyCard> {
        let text = self.text();
        let pairs = [
            (&text.roots_title, &text.roots_content),
            (&text.childhood_title, &text.childhood_content),
            (&text.education_title, &text.education_content),
            (&text.hobbies_title, &text.hobbies_content),
            (&text.friends_title, &text.friends_content),
            (&text.area_title, &text.area_content),
        ];
        pairs
            .into_iter()
            .map(|(title, content)| JourneyCard {
                title: title.clone(),
                content: content.clone(),
            })
            .collect()
    }

    /// Project grid entries
    pub fn projects(&self) -> &[Project] {
        &self.bundle.projects
    }

    /// Life story chapters
    pub fn stories(&self) -> &[LifeStory] {
        &self.bundle.stories
    }

    /// Social links
    pub fn social_links(&self) -> &[SocialLink] {
        &self.bundle.social_links
    }

    /// Hero slideshow image URLs
    pub fn hero_images(&self) -> &[String] {
        &self.bundle.hero_images
    }

    /// Broadcast state driving the hero surface and the live modal
    pub fn broadcast(&self) -> &BroadcastState {
        &self.bundle.broadcast
    }

    /// Highlights still inside their 24 hour window
    pub fn active_highlights(&self, now_ms: i64) -> Vec<Highlight> {
        self.bundle.active_highlights(now_ms)
    }

    /// The highlight shelf is hidden entirely when nothing is active
    pub fn highlight_shelf_visible(&self, now_ms: i64) -> bool {
        !self.active_highlights(now_ms).is_empty()
    }

    /// Replace the snapshot after a save or import
    pub fn refresh(&mut self, bundle: ContentBundle) {
        debug!("page snapshot refreshed");
        self.bundle = bundle;
    }

    /// The underlying snapshot
    pub fn bundle(&self) -> &ContentBundle {
        &self.bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::HIGHLIGHT_TTL_MS;

    #[test]
    fn language_switch_changes_the_text_record() {
        let mut page = PageView::new(ContentBundle::default());
        let en_title = page.text().title.clone();

        page.toggle_language();
        assert_eq!(page.language(), Language::Bn);
        assert_ne!(page.text().title, en_title);

        page.toggle_language();
        assert_eq!(page.text().title, en_title);
    }

    #[test]
    fn theme_toggles_and_defaults_dark() {
        let mut page = PageView::new(ContentBundle::default());
        assert_eq!(page.theme(), Theme::Dark);
        page.toggle_theme();
        assert_eq!(page.theme(), Theme::Light);
    }

    #[test]
    fn stat_figures_are_fixed_while_labels_follow_content() {
        let mut bundle = ContentBundle::default();
        bundle.content.en.stat2 = "Shipped Things".to_string();

        let page = PageView::new(bundle);
        let cards = page.stat_cards();
        assert_eq!(cards[0].figure, "5+");
        assert_eq!(cards[1].figure, "50+");
        assert_eq!(cards[2].figure, "100%");
        assert_eq!(cards[1].label, "Shipped Things");
    }

    #[test]
    fn journey_cards_come_in_display_order() {
        let page = PageView::new(ContentBundle::default());
        let cards = page.journey_cards();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].title, page.text().roots_title);
        assert_eq!(cards[5].title, page.text().area_title);
    }

    #[test]
    fn hero_override_replaces_only_title_and_desc() {
        let mut page = PageView::new(ContentBundle::default());
        let stored = page.text().clone();

        page.set_hero_override(HeroBio {
            title: "Rust Engineer Who Ships".to_string(),
            desc: "Focused, pragmatic, allergic to broken builds.".to_string(),
        });

        let hero = page.hero_text();
        assert_eq!(hero.title, "Rust Engineer Who Ships");
        assert_eq!(hero.desc, "Focused, pragmatic, allergic to broken builds.");
        assert_eq!(hero.work, stored.work);
        assert_eq!(hero.brand_name, stored.brand_name);

        // the stored record itself is never modified
        assert_eq!(page.text().title, stored.title);
    }

    #[test]
    fn clearing_the_override_restores_stored_hero_text() {
        let mut page = PageView::new(ContentBundle::default());
        let stored_title = page.text().title.clone();

        page.set_hero_override(HeroBio {
            title: "Temporary".to_string(),
            desc: "Temporary".to_string(),
        });
        page.clear_hero_override();

        assert!(page.hero_override().is_none());
        assert_eq!(page.hero_text().title, stored_title);
    }

    #[test]
    fn hero_override_survives_language_switch_and_refresh() {
        let mut page = PageView::new(ContentBundle::default());
        page.set_hero_override(HeroBio {
            title: "Persistent".to_string(),
            desc: "Still here".to_string(),
        });

        page.toggle_language();
        assert_eq!(page.hero_text().title, "Persistent");

        page.refresh(ContentBundle::default());
        assert_eq!(page.hero_text().title, "Persistent");
    }

    #[test]
    fn shelf_hides_when_every_highlight_expired() {
        let mut bundle = ContentBundle::default();
        bundle
            .highlights
            .push(folio_core::Highlight::placeholder(0));

        let page = PageView::new(bundle);
        assert!(page.highlight_shelf_visible(1000));
        assert!(!page.highlight_shelf_visible(HIGHLIGHT_TTL_MS + 2000));
    }

    #[test]
    fn refresh_replaces_the_snapshot_wholesale() {
        let mut page = PageView::new(ContentBundle::default());

        let mut edited = ContentBundle::default();
        edited.content.en.title = "Replaced".to_string();
        edited.projects.clear();
        page.refresh(edited);

        assert_eq!(page.text().title, "Replaced");
        assert!(page.projects().is_empty());
    }
}
