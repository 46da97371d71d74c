//! Soft drop latch for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! auto-repeat presses keep the latch engaged, silence releases it.

use crate::types::Command;

/// Default time without a press before soft drop is released.
///
/// Longer than the usual OS auto-repeat delay so holding the key does not
/// flicker between fast and normal gravity.
pub const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 300;

/// Tracks whether soft drop is held.
#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    held: bool,
    since_press_ms: u32,
    release_timeout_ms: u32,
    /// Terminal reports key releases, so the timeout is not needed.
    release_events: bool,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_timeout_ms(DEFAULT_RELEASE_TIMEOUT_MS)
    }

    pub fn with_timeout_ms(release_timeout_ms: u32) -> Self {
        Self {
            held: false,
            since_press_ms: 0,
            release_timeout_ms,
            release_events: false,
        }
    }

    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn held(&self) -> bool {
        self.held
    }

    /// Soft drop key pressed or auto-repeated.
    pub fn press(&mut self) -> Option<Command> {
        self.since_press_ms = 0;
        if self.held {
            return None;
        }
        self.held = true;
        Some(Command::SoftDropOn)
    }

    /// Soft drop key released.
    pub fn release(&mut self) -> Option<Command> {
        if !self.held {
            return None;
        }
        self.held = false;
        self.since_press_ms = 0;
        Some(Command::SoftDropOff)
    }

    /// Advance the release timer.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Command> {
        if !self.held || self.release_events {
            return None;
        }
        self.since_press_ms = self.since_press_ms.saturating_add(elapsed_ms);
        if self.since_press_ms > self.release_timeout_ms {
            return self.release();
        }
        None
    }

    /// Forget any held state (after a game reset).
    pub fn reset(&mut self) {
        self.held = false;
        self.since_press_ms = 0;
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}
