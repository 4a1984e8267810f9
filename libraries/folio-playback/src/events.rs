//! Playback and broadcast events
//!
//! Event-based communication for UI synchronization. Both state machines
//! queue events as side effects of their transitions; the embedding UI
//! drains the queue after each call and updates its surfaces.

use serde::{Deserialize, Serialize};

use folio_core::BroadcastSource;

/// Why the story viewer closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseReason {
    /// Operator pressed the close control
    Dismissed,
    /// The last item completed its timed display
    Finished,
}

/// Events emitted by the story viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoryEvent {
    /// Viewer opened on an item
    Opened {
        /// Id of the opening highlight
        highlight_id: String,
        /// Video items start muted; unmuted autoplay is never assumed
        autoplay_muted: bool,
    },

    /// Active item switched (auto-advance or manual navigation)
    ItemChanged {
        /// Id of the now-active highlight
        highlight_id: String,
        /// Its index in the active set
        index: usize,
        /// Video items start muted on switch as well
        autoplay_muted: bool,
    },

    /// Progress frozen in place
    Paused {
        /// The current item is a video and its element should pause too
        pause_video: bool,
    },

    /// Progress resumed from its frozen value
    Resumed,

    /// "Previous" on the first item: progress reset, no item change
    ProgressReset,

    /// Viewer closed
    Closed {
        /// Dismissed explicitly or finished naturally
        reason: CloseReason,
    },
}

/// Events emitted by the broadcast controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BroadcastEvent {
    /// Broadcast went live
    Started {
        /// Capture mode that went live
        source: BroadcastSource,
    },

    /// Broadcast stopped; any held capture hardware was released
    Stopped,

    /// Capture mode switched
    SourceChanged {
        /// New capture mode
        source: BroadcastSource,
    },

    /// External stream metadata updated (no reachability validation)
    ExternalStreamUpdated {
        /// New stream URL
        url: String,
        /// New operator-facing title
        title: String,
    },

    /// Camera/microphone acquisition failed; broadcast state unchanged
    CaptureFailed {
        /// Operator-facing failure message
        message: String,
    },
}
