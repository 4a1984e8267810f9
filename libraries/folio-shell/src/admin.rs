//! Admin access gate
//!
//! A hardcoded credential check guarding the editor panel. This is a
//! convenience latch for a single-owner personal site, not a security
//! boundary; the content behind it is public anyway.

use tracing::{info, warn};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

/// Session-scoped admin latch
#[derive(Debug, Default)]
pub struct AdminGate {
    unlocked: bool,
}

impl AdminGate {
    /// Attempt to unlock the editor
    ///
    /// Returns whether this attempt's credentials matched; an earlier
    /// unlock does not make a failed attempt report success.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let matched = username == ADMIN_USERNAME && password == ADMIN_PASSWORD;
        if matched {
            self.unlocked = true;
            info!("admin unlocked");
        } else {
            warn!(username, "rejected admin login");
        }
        matched
    }

    /// Lock the editor again
    pub fn logout(&mut self) {
        self.unlocked = false;
    }

    /// Whether the editor is currently accessible
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}
