//! Core types for the story viewer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of tick steps per item; progress runs 0..=100
pub(crate) const PROGRESS_STEPS: u8 = 100;

/// Story viewer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoryPhase {
    /// Viewer modal is not shown
    Closed,

    /// Auto-advancing through the current item
    Playing,

    /// Progress frozen; video items hold their playback too
    Paused,
}

/// Configuration for the story viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryConfig {
    /// Wall-clock time each item is displayed before auto-advancing.
    ///
    /// Applied uniformly to every item regardless of media kind.
    pub item_duration: Duration,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            item_duration: Duration::from_secs(15),
        }
    }
}

impl StoryConfig {
    /// Interval at which the UI should schedule `tick` calls
    ///
    /// One hundred ticks span `item_duration`, one progress point each.
    pub fn tick_interval(&self) -> Duration {
        self.item_duration / u32::from(PROGRESS_STEPS)
    }
}
