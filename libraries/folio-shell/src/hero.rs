//! Hero slideshow rotation
//!
//! The hero area shows either the image slideshow or, when a broadcast is
//! active, the live surface. Rotation runs on a 30 second timer using the
//! same generation-token scheme as the story viewer, so manual navigation
//! restarts the clock and a late timer callback cannot advance a slide it
//! no longer owns.

use folio_core::BroadcastState;
use folio_playback::{TickToken, Ticker};
use std::time::Duration;
use tracing::debug;

/// Auto-advance interval for the slideshow
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(30);

/// Shown when no hero images are configured
const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=600";

/// What the hero area should currently render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroSurface {
    /// The rotating image slideshow
    Slideshow,
    /// A broadcast owns the hero area exclusively
    Broadcast,
}

/// Result of a slideshow timer callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOutcome {
    /// The token was cancelled; nothing changed
    Stale,
    /// Rotated to the image at this index
    Advanced(usize),
}

/// Rotating hero image carousel
#[derive(Debug, Default)]
pub struct HeroSlideshow {
    images: Vec<String>,
    index: usize,
    ticker: Ticker,
}

impl HeroSlideshow {
    /// Create a slideshow over the given image set
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            index: 0,
            ticker: Ticker::default(),
        }
    }

    /// Arm the rotation timer; schedule ticks at [`ROTATION_INTERVAL`]
    /// carrying the returned token
    pub fn start(&mut self) -> TickToken {
        self.ticker.invalidate()
    }

    /// Cancel any pending rotation
    pub fn stop(&mut self) {
        self.ticker.invalidate();
    }

    /// Timer callback
    pub fn tick(&mut self, token: TickToken) -> SlideOutcome {
        if !self.ticker.accepts(token) {
            return SlideOutcome::Stale;
        }
        self.index = (self.index + 1) % self.slide_count();
        SlideOutcome::Advanced(self.index)
    }

    /// Manual advance; restarts the rotation timer
    pub fn next(&mut self) -> TickToken {
        self.index = (self.index + 1) % self.slide_count();
        self.ticker.invalidate()
    }

    /// Manual step back; restarts the rotation timer
    pub fn previous(&mut self) -> TickToken {
        let count = self.slide_count();
        self.index = if self.index == 0 { count - 1 } else { self.index - 1 };
        self.ticker.invalidate()
    }

    /// Jump to a specific slide; restarts the rotation timer
    pub fn jump(&mut self, index: usize) -> TickToken {
        self.index = index % self.slide_count();
        self.ticker.invalidate()
    }

    /// Replace the image set, resetting to the first slide
    ///
    /// Cancels the pending rotation; call [`Self::start`] to re-arm.
    pub fn set_images(&mut self, images: Vec<String>) {
        debug!(count = images.len(), "hero image set replaced");
        self.images = images;
        self.index = 0;
        self.ticker.invalidate();
    }

    /// URL of the slide currently shown
    pub fn current_image(&self) -> &str {
        self.images
            .get(self.index)
            .map_or(FALLBACK_IMAGE, String::as_str)
    }

    /// Index of the slide currently shown
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides (the fallback portrait counts as one)
    pub fn slide_count(&self) -> usize {
        self.images.len().max(1)
    }
}

/// Resolve what the hero area renders for the given broadcast state
///
/// An active broadcast takes exclusive ownership of the hero surface, even
/// while an external source is still waiting for signal.
pub fn hero_surface(broadcast: &BroadcastState) -> HeroSurface {
    if broadcast.is_broadcasting {
        HeroSurface::Broadcast
    } else {
        HeroSurface::Slideshow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::BroadcastSource;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://example.com/{i}.jpg")).collect()
    }

    #[test]
    fn rotates_in_order_and_wraps() {
        let mut show = HeroSlideshow::new(images(3));
        let token = show.start();

        assert_eq!(show.tick(token), SlideOutcome::Advanced(1));
        assert_eq!(show.tick(token), SlideOutcome::Advanced(2));
        assert_eq!(show.tick(token), SlideOutcome::Advanced(0));
    }

    #[test]
    fn manual_navigation_cancels_the_pending_tick() {
        let mut show = HeroSlideshow::new(images(4));
        let old = show.start();

        let fresh = show.next();
        assert_eq!(show.index(), 1);

        // The old timer fires late
        assert_eq!(show.tick(old), SlideOutcome::Stale);
        assert_eq!(show.index(), 1);

        assert_eq!(show.tick(fresh), SlideOutcome::Advanced(2));
    }

    #[test]
    fn previous_wraps_to_the_last_slide() {
        let mut show = HeroSlideshow::new(images(3));
        show.start();
        show.previous();
        assert_eq!(show.index(), 2);
    }

    #[test]
    fn empty_image_set_serves_the_fallback_portrait() {
        let mut show = HeroSlideshow::new(Vec::new());
        let token = show.start();

        assert_eq!(show.current_image(), FALLBACK_IMAGE);
        // Rotation over a single fallback slide stays put
        assert_eq!(show.tick(token), SlideOutcome::Advanced(0));
        assert_eq!(show.current_image(), FALLBACK_IMAGE);
    }

    #[test]
    fn replacing_images_resets_and_cancels() {
        let mut show = HeroSlideshow::new(images(3));
        let old = show.start();
        show.next();

        show.set_images(images(2));
        assert_eq!(show.index(), 0);
        assert_eq!(show.tick(old), SlideOutcome::Stale);
    }

    #[test]
    fn broadcast_takes_over_the_hero_surface() {
        let mut state = BroadcastState::default();
        assert_eq!(hero_surface(&state), HeroSurface::Slideshow);

        state.is_broadcasting = true;
        assert_eq!(hero_surface(&state), HeroSurface::Broadcast);

        // Even an external source still waiting for signal owns the surface
        state.source = BroadcastSource::External;
        state.stream_url.clear();
        assert_eq!(hero_surface(&state), HeroSurface::Broadcast);
    }
}
