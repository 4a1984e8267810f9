//! Folio Core
//!
//! Domain types and error handling shared by every Folio crate.
//!
//! The core crate defines:
//! - **Domain Types**: `ContentRecord`, `Highlight`, `LifeStory`, `Project`,
//!   `SocialLink`, `BroadcastState`, `ContentBundle`
//! - **Error Handling**: Unified `FolioError` and `Result` types
//!
//! Everything here is plain data: no I/O, no timers, no platform hooks.
//! The content store owns persistence, the playback crate owns state
//! machinery, and the shell owns presentation snapshots.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{ContentBundle, Highlight, Language};
//!
//! let mut bundle = ContentBundle::default();
//! let now_ms = 1_700_000_000_000;
//! bundle.highlights.insert(0, Highlight::placeholder(now_ms));
//!
//! assert_eq!(bundle.content.get(Language::En).brand_name, "ASHRAFUL KHAN");
//! assert_eq!(bundle.prune_expired_highlights(now_ms), 0);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{FolioError, Result};
pub use types::{
    BroadcastSource, BroadcastState, ContentBundle, ContentRecord, HeroBio, Highlight, Language,
    LifeStory, LocalizedContent, MediaKind, Project, SocialLink, HIGHLIGHT_TTL_MS,
};
