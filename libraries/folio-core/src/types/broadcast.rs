//! Live broadcast state
//!
//! A single logical "is the owner currently live" flag plus its source.
//! One physical stream underlies both language views, so the state is
//! stored once per bundle rather than per language record.

use serde::{Deserialize, Serialize};

/// Where the live feed comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastSource {
    /// Local camera + microphone captured in the editor
    #[default]
    Browser,
    /// Externally hosted stream (YouTube, Facebook, HLS, direct video)
    External,
}

/// Singleton broadcast state, created and mutated only by the editor
///
/// When `source` is `Browser`, `stream_url` is ignored. When `External`,
/// `is_broadcasting` is only meaningful with a non-empty `stream_url`;
/// otherwise viewers render a "waiting for signal" placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BroadcastState {
    /// Whether the owner is currently live
    pub is_broadcasting: bool,

    /// Capture mode
    #[serde(rename = "broadcastSource")]
    pub source: BroadcastSource,

    /// External stream URL (unvalidated, opaque)
    pub stream_url: String,

    /// Operator-facing stream title
    pub stream_title: String,
}

impl BroadcastState {
    /// Whether viewers can resolve something playable
    ///
    /// Browser capture always has a signal (the local preview); an
    /// external source needs a non-empty URL.
    pub fn has_signal(&self) -> bool {
        match self.source {
            BroadcastSource::Browser => true,
            BroadcastSource::External => !self.stream_url.trim().is_empty(),
        }
    }
}
