//! One-shot image fallback tracking.
//!
//! When a project image fails to load at display time, the well-known
//! fallback image is substituted exactly once; the handler then disarms
//! itself so a fallback that also fails to load cannot start a retry
//! loop.
//!
//! Slots are keyed by strings the controller derives from the mount and
//! project id (and a fixed key for the overlay image). Re-rendering a
//! mount re-arms its slots, since the replacement markup is a fresh
//! image element.

use std::collections::HashMap;

/// What to do about a reported image failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackAction {
    /// First failure for an armed slot: swap in the fallback image.
    Substitute,
    /// Already substituted (or never rendered): do nothing.
    Ignore,
}

/// Armed/disarmed fallback state for every rendered image slot.
#[derive(Debug, Default)]
pub struct ImageFallbacks {
    armed: HashMap<String, bool>,
}

impl ImageFallbacks {
    /// No slots armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) a slot for a freshly rendered image.
    pub fn arm(&mut self, slot: impl Into<String>) {
        self.armed.insert(slot.into(), true);
    }

    /// Report a load failure for a slot.
    ///
    /// Returns [`FallbackAction::Substitute`] exactly once per arming;
    /// every later failure on the same slot is ignored.
    pub fn on_error(&mut self, slot: &str) -> FallbackAction {
        match self.armed.get_mut(slot) {
            Some(armed) if *armed => {
                *armed = false;
                FallbackAction::Substitute
            }
            _ => FallbackAction::Ignore,
        }
    }

    /// Whether a slot is currently armed.
    pub fn is_armed(&self, slot: &str) -> bool {
        self.armed.get(slot).copied().unwrap_or(false)
    }
}

// ============================================================================
// Tests
// ============================================================================
