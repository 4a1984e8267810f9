//! Story viewer - the highlights playback state machine
//!
//! Presents a sequence of highlights as a full-screen, auto-advancing
//! modal, one item at a time. The machine has three phases (`Closed`,
//! `Playing`, `Paused`) plus an item index and an integer progress
//! 0..=100 advanced on a steady UI tick.
//!
//! The caller is expected to hand the player an already-filtered active
//! set (the content store prunes expired highlights at load time) and to
//! schedule a repeating timer at [`StoryConfig::tick_interval`], passing
//! the current [`TickToken`] into every callback. Opening, switching
//! items, and closing each invalidate outstanding tokens, so a stale
//! timer can never advance an item it no longer owns.

use tracing::debug;

use folio_core::{Highlight, MediaKind};

use crate::{
    error::{PlaybackError, Result},
    events::{CloseReason, StoryEvent},
    ticker::{TickToken, Ticker},
    types::{StoryConfig, StoryPhase, PROGRESS_STEPS},
};

/// Result of delivering one timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Token belongs to a previous generation; nothing happened
    Stale,

    /// Viewer is paused; progress did not move
    Frozen,

    /// Progress advanced within the current item (new value)
    Progressed(u8),

    /// Item completed and the viewer advanced to the next one.
    ///
    /// The previous token is now invalid; keep ticking with `token`.
    Advanced {
        /// Index of the now-active item
        index: usize,
        /// Fresh token for the new item
        token: TickToken,
    },

    /// The last item completed; the viewer is now closed
    Finished,
}

/// The highlights viewer state machine
pub struct StoryPlayer {
    items: Vec<Highlight>,
    config: StoryConfig,
    phase: StoryPhase,
    index: usize,
    progress: u8,
    media_failed: bool,
    ticker: Ticker,
    pending_events: Vec<StoryEvent>,
}

impl StoryPlayer {
    /// Create a viewer over an active (non-expired) highlight set
    ///
    /// An empty set is allowed; the shelf simply is not shown and `open`
    /// returns an error.
    pub fn new(items: Vec<Highlight>, config: StoryConfig) -> Self {
        Self {
            items,
            config,
            phase: StoryPhase::Closed,
            index: 0,
            progress: 0,
            media_failed: false,
            ticker: Ticker::default(),
            pending_events: Vec::new(),
        }
    }

    // ===== Lifecycle =====

    /// Open the viewer on the item at `index`
    ///
    /// Resets progress to 0 and starts playing. Returns the tick token
    /// the driving timer must present.
    pub fn open(&mut self, index: usize) -> Result<TickToken> {
        if self.items.is_empty() {
            return Err(PlaybackError::NoHighlights);
        }
        if index >= self.items.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }

        self.phase = StoryPhase::Playing;
        self.index = index;
        self.progress = 0;
        self.media_failed = false;
        let token = self.ticker.invalidate();

        let item = &self.items[index];
        debug!(highlight = %item.id, index, "story viewer opened");
        self.pending_events.push(StoryEvent::Opened {
            highlight_id: item.id.clone(),
            autoplay_muted: item.media_kind == MediaKind::Video,
        });

        Ok(token)
    }

    /// Close the viewer explicitly. Idempotent.
    pub fn close(&mut self) {
        self.close_with(CloseReason::Dismissed);
    }

    fn close_with(&mut self, reason: CloseReason) {
        if self.phase == StoryPhase::Closed {
            return;
        }
        self.phase = StoryPhase::Closed;
        self.progress = 0;
        self.ticker.invalidate();
        debug!(?reason, "story viewer closed");
        self.pending_events.push(StoryEvent::Closed { reason });
    }

    // ===== Tick =====

    /// Deliver one timer tick
    ///
    /// Stale tokens are ignored so a timer that fired after a transition
    /// cannot advance the wrong item.
    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        if !self.ticker.accepts(token) || self.phase == StoryPhase::Closed {
            return TickOutcome::Stale;
        }
        if self.phase == StoryPhase::Paused {
            return TickOutcome::Frozen;
        }

        self.progress = self.progress.saturating_add(1);
        if self.progress < PROGRESS_STEPS {
            return TickOutcome::Progressed(self.progress);
        }

        // Item completed its timed display
        if self.index + 1 < self.items.len() {
            let token = self.switch_to(self.index + 1);
            TickOutcome::Advanced {
                index: self.index,
                token,
            }
        } else {
            self.close_with(CloseReason::Finished);
            TickOutcome::Finished
        }
    }

    // ===== Navigation =====

    /// Pause: freeze progress without resetting it
    ///
    /// For video items the emitted event also asks the UI to pause the
    /// underlying video element.
    pub fn pause(&mut self) {
        if self.phase != StoryPhase::Playing {
            return;
        }
        self.phase = StoryPhase::Paused;
        let pause_video = self.items[self.index].media_kind == MediaKind::Video;
        self.pending_events.push(StoryEvent::Paused { pause_video });
    }

    /// Resume from the frozen progress value
    pub fn resume(&mut self) {
        if self.phase != StoryPhase::Paused {
            return;
        }
        self.phase = StoryPhase::Playing;
        self.pending_events.push(StoryEvent::Resumed);
    }

    /// Go to the previous item
    ///
    /// On the first item only progress resets to 0 (no item change).
    /// Either way the viewer resumes playing and outstanding ticks are
    /// cancelled; `None` when the viewer is closed.
    pub fn previous(&mut self) -> Option<TickToken> {
        if self.phase == StoryPhase::Closed {
            return None;
        }

        if self.index == 0 {
            self.progress = 0;
            self.phase = StoryPhase::Playing;
            self.pending_events.push(StoryEvent::ProgressReset);
            return Some(self.ticker.invalidate());
        }

        Some(self.switch_to(self.index - 1))
    }

    /// Skip to the next item; past the last item the viewer closes
    ///
    /// `None` when the viewer closed (or was already closed).
    pub fn next(&mut self) -> Option<TickToken> {
        if self.phase == StoryPhase::Closed {
            return None;
        }

        if self.index + 1 < self.items.len() {
            Some(self.switch_to(self.index + 1))
        } else {
            self.close_with(CloseReason::Finished);
            None
        }
    }

    /// Internal: switch the active item, resetting progress and unpausing
    fn switch_to(&mut self, index: usize) -> TickToken {
        self.index = index;
        self.progress = 0;
        self.phase = StoryPhase::Playing;
        self.media_failed = false;
        let token = self.ticker.invalidate();

        let item = &self.items[index];
        self.pending_events.push(StoryEvent::ItemChanged {
            highlight_id: item.id.clone(),
            index,
            autoplay_muted: item.media_kind == MediaKind::Video,
        });

        token
    }

    // ===== Degraded display =====

    /// Record that the current item's media failed to load
    ///
    /// The item keeps its place in the timed rotation; only the display
    /// degrades. Never skips, never crashes the advance logic.
    pub fn mark_media_failed(&mut self) {
        if self.phase != StoryPhase::Closed {
            self.media_failed = true;
        }
    }

    /// Whether the current item's media failed to load
    pub fn media_failed(&self) -> bool {
        self.media_failed
    }

    // ===== State queries =====

    /// Current phase
    pub fn phase(&self) -> StoryPhase {
        self.phase
    }

    /// Whether the viewer modal is shown
    pub fn is_open(&self) -> bool {
        self.phase != StoryPhase::Closed
    }

    /// The active item, if the viewer is open
    pub fn current(&self) -> Option<&Highlight> {
        if self.phase == StoryPhase::Closed {
            None
        } else {
            self.items.get(self.index)
        }
    }

    /// Active item index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Progress through the current item (0..=100)
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Number of items in the active set
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the active set is empty (shelf is not shown)
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Viewer configuration
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Take all queued events for the UI to apply
    pub fn drain_events(&mut self) -> Vec<StoryEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
