//! Cancellable tick delivery
//!
//! The UI drives every time-based behavior (story progress, slideshow
//! rotation, chat simulation) by scheduling repeated callbacks. Each
//! callback carries the [`TickToken`] it was scheduled with; any state
//! transition that should cancel pending callbacks bumps the generation,
//! so a late-firing timer presents a stale token and is ignored instead
//! of advancing state it no longer owns.

use serde::{Deserialize, Serialize};

/// Opaque handle tying a scheduled timer callback to the state generation
/// it was created for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickToken(u64);

/// Monotonic generation counter backing cancellable timers
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    generation: u64,
}

impl Ticker {
    /// Token for the current generation
    pub fn token(&self) -> TickToken {
        TickToken(self.generation)
    }

    /// Invalidate all outstanding tokens and return a fresh one
    pub fn invalidate(&mut self) -> TickToken {
        self.generation += 1;
        self.token()
    }

    /// Whether a token belongs to the current generation
    pub fn accepts(&self, token: TickToken) -> bool {
        token.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_rejects_old_tokens() {
        let mut ticker = Ticker::default();
        let old = ticker.token();
        assert!(ticker.accepts(old));

        let fresh = ticker.invalidate();
        assert!(!ticker.accepts(old));
        assert!(ticker.accepts(fresh));
    }

    #[test]
    fn tokens_are_generation_specific() {
        let mut a = Ticker::default();
        let token = a.invalidate();
        let later = a.invalidate();
        assert_ne!(token, later);
    }
}
