//! Folio Playback
//!
//! The two stateful cores of the site, kept platform-agnostic:
//!
//! - [`StoryPlayer`]: the ephemeral-highlights viewer. A full-screen,
//!   auto-advancing carousel with pause/resume, forward/back navigation
//!   and per-item progress, driven by a UI timer through cancellable tick
//!   tokens.
//! - [`BroadcastController`]: the live-feed lifecycle. Acquires a local
//!   camera/microphone through the [`CaptureDevice`] seam or points at an
//!   externally hosted stream, and resolves the current state into a
//!   playable surface for any number of independently open viewers.
//!
//! Neither type owns a timer or touches hardware directly; the embedding
//! UI schedules ticks and implements the capture traits. Everything runs
//! on a single logical thread: "concurrency" here means multiple
//! independent timer callbacks, each individually cancelable so a stale
//! callback can never act after a transition.
//!
//! # Example: driving the story viewer
//!
//! ```rust
//! use folio_core::Highlight;
//! use folio_playback::{StoryConfig, StoryPlayer, TickOutcome};
//!
//! let items = vec![Highlight::placeholder(0), Highlight::placeholder(0)];
//! let mut player = StoryPlayer::new(items, StoryConfig::default());
//!
//! let mut token = player.open(0).unwrap();
//! loop {
//!     match player.tick(token) {
//!         TickOutcome::Progressed(_) | TickOutcome::Frozen => {}
//!         TickOutcome::Advanced { token: fresh, .. } => token = fresh,
//!         TickOutcome::Finished | TickOutcome::Stale => break,
//!     }
//! }
//! assert!(!player.is_open());
//! ```

#![forbid(unsafe_code)]

mod broadcast;
mod error;
mod events;
mod story;
mod ticker;
mod types;
mod volume;

pub use broadcast::{
    BroadcastController, BroadcastViewer, CaptureDevice, MediaTrack, TrackKind, ViewerSurface,
};
pub use error::{PlaybackError, Result};
pub use events::{BroadcastEvent, CloseReason, StoryEvent};
pub use story::{StoryPlayer, TickOutcome};
pub use ticker::{TickToken, Ticker};
pub use types::{StoryConfig, StoryPhase};
pub use volume::ViewerAudio;
