//! Folio Media Resolver
//!
//! Pure classification and derivation over opaque media URLs. Given a
//! highlight or broadcast URL this crate decides what kind of media it is
//! and derives a playable representation (an embed URL or a direct
//! source). Everything here is stateless and deterministic: the same URL
//! string always yields the same result, so callers are free to resolve
//! redundantly from multiple independent viewers.
//!
//! Classification is total: unparseable or unknown URLs degrade to a
//! direct video source, never an error.
//!
//! # Example
//!
//! ```rust
//! use folio_media::{resolve_playable_source, PlayableSource};
//!
//! let source = resolve_playable_source("https://youtu.be/dQw4w9WgXcQ");
//! match source {
//!     PlayableSource::YouTubeEmbed { video_id, .. } => assert_eq!(video_id, "dQw4w9WgXcQ"),
//!     _ => panic!("expected a YouTube embed"),
//! }
//! ```

#![forbid(unsafe_code)]

mod classify;
mod resolve;

pub use classify::{classify_media_url, MediaClass};
pub use resolve::{extract_youtube_id, resolve_playable_source, HlsStrategy, PlayableSource};
