//! Folio Shell
//!
//! View models for the visitor-facing page: the hero slideshow, the page
//! snapshot (language, theme, stats, journey cards, projects, socials,
//! highlight shelf), the simulated live chat, and the admin gate. These
//! crates hold all display state explicitly; the embedding UI renders
//! from them and feeds timers back through cancellable tick tokens.

#![forbid(unsafe_code)]

mod admin;
mod chat;
mod hero;
mod page;

pub use admin::AdminGate;
pub use chat::{ChatMessage, LiveChatSimulation, MESSAGE_INTERVAL};
pub use hero::{hero_surface, HeroSlideshow, HeroSurface, SlideOutcome, ROTATION_INTERVAL};
pub use page::{JourneyCard, PageView, StatCard, Theme};
