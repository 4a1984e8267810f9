//! Simulated live-chat feed
//!
//! The live modal shows a scrolling viewer chat next to the stream. There
//! is no chat backend; messages cycle from a fixed pool on a timer, using
//! the shared token scheme so closing the modal cancels the feed.

use folio_playback::{TickToken, Ticker};
use std::time::Duration;

/// Delay between simulated messages
pub const MESSAGE_INTERVAL: Duration = Duration::from_secs(4);

/// Visible backlog cap; older messages scroll away
const MAX_VISIBLE: usize = 20;

/// One canned chat line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: &'static str,
    pub text: &'static str,
}

const MESSAGE_POOL: &[ChatMessage] = &[
    ChatMessage { author: "nabila_k", text: "Assalamu alaikum! Watching from Dhanmondi" },
    ChatMessage { author: "dev_rifat", text: "bhai the portfolio looks clean 🔥" },
    ChatMessage { author: "sarah.codes", text: "What stack is this built with?" },
    ChatMessage { author: "tanvir99", text: "LIVE from Farmgate let's goooo" },
    ChatMessage { author: "mim_arts", text: "the slideshow photos are beautiful" },
    ChatMessage { author: "jubayer_h", text: "can you show the projects section?" },
    ChatMessage { author: "priya.dev", text: "greetings from Kolkata 👋" },
    ChatMessage { author: "shuvo_plays", text: "audio is a bit low for me" },
    ChatMessage { author: "anik_0x", text: "bookmarked the site, great work" },
    ChatMessage { author: "farhana_m", text: "বাংলা ভার্সনটা দারুণ হয়েছে!" },
];

/// Timed canned chat feed for the live modal
#[derive(Debug, Default)]
pub struct LiveChatSimulation {
    ticker: Ticker,
    next: usize,
    feed: Vec<ChatMessage>,
}

impl LiveChatSimulation {
    /// Start (or restart) the feed; schedule ticks at [`MESSAGE_INTERVAL`]
    /// carrying the returned token
    pub fn start(&mut self) -> TickToken {
        self.feed.clear();
        self.next = 0;
        self.ticker.invalidate()
    }

    /// Stop the feed; pending ticks become stale
    pub fn stop(&mut self) {
        self.ticker.invalidate();
    }

    /// Timer callback; returns the message that arrived, if the token is
    /// still live
    pub fn tick(&mut self, token: TickToken) -> Option<ChatMessage> {
        if !self.ticker.accepts(token) {
            return None;
        }
        let message = MESSAGE_POOL[self.next % MESSAGE_POOL.len()];
        self.next += 1;
        self.feed.push(message);
        if self.feed.len() > MAX_VISIBLE {
            self.feed.remove(0);
        }
        Some(message)
    }

    /// Messages currently visible, oldest first
    pub fn messages(&self) -> &[ChatMessage] {
        &self.feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_cycles_through_the_pool() {
        let mut chat = LiveChatSimulation::default();
        let token = chat.start();

        for _ in 0..MESSAGE_POOL.len() + 2 {
            assert!(chat.tick(token).is_some());
        }
        // Wrapped around to the start of the pool
        assert_eq!(chat.messages().last(), Some(&MESSAGE_POOL[1]));
    }

    #[test]
    fn stopping_makes_pending_ticks_inert() {
        let mut chat = LiveChatSimulation::default();
        let token = chat.start();
        chat.tick(token);

        chat.stop();
        assert_eq!(chat.tick(token), None);
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn restart_clears_the_backlog() {
        let mut chat = LiveChatSimulation::default();
        let token = chat.start();
        chat.tick(token);
        chat.tick(token);

        let fresh = chat.start();
        assert!(chat.messages().is_empty());
        assert_eq!(chat.tick(fresh), Some(MESSAGE_POOL[0]));
    }

    #[test]
    fn backlog_is_capped() {
        let mut chat = LiveChatSimulation::default();
        let token = chat.start();
        for _ in 0..100 {
            chat.tick(token);
        }
        assert_eq!(chat.messages().len(), 20);
    }
}
