//! Domain types for the Folio content model

mod broadcast;
mod bundle;
mod content;
mod highlight;
mod life_story;
mod project;
mod social;

pub use broadcast::{BroadcastSource, BroadcastState};
pub use bundle::ContentBundle;
pub use content::{ContentRecord, HeroBio, Language, LocalizedContent};
pub use highlight::{Highlight, MediaKind, HIGHLIGHT_TTL_MS};
pub use life_story::LifeStory;
pub use project::Project;
pub use social::SocialLink;
