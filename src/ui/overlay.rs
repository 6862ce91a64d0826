//! Transient text timers.
//!
//! One [`OverlayTimer`] instance backs the full-area centered overlay;
//! a second, independent instance backs the footer status line. The
//! timer only tracks visibility and expiry - the text itself lives in
//! the display sink's regions.
//!
//! Precedence rule for the centered overlay: held wins. While a held
//! overlay is active a timed request is rejected, so a decaying tap
//! label can never cover up (or early-hide) the indicator for a key
//! that is still physically down. A new held overlay replaces whatever
//! is showing, and `hide` always wins over a pending expiry.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    Hidden,
    Timed { expires_at: u64 },
    Held,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverlayTimer {
    state: State,
}

impl OverlayTimer {
    pub const fn new() -> Self {
        Self { state: State::Hidden }
    }

    /// Start (or restart) a timed showing. Returns `false` if a held
    /// overlay is active and the request was rejected.
    pub fn show_timed(&mut self, now: u64, duration_ms: u64) -> bool {
        if matches!(self.state, State::Held) {
            return false;
        }
        self.state = State::Timed { expires_at: now + duration_ms };
        true
    }

    /// Show with no expiry; persists until `hide`.
    pub fn show_held(&mut self) {
        self.state = State::Held;
    }

    /// Unconditional hide, overriding any pending expiry.
    pub fn hide(&mut self) {
        self.state = State::Hidden;
    }

    /// Advance the timer. Returns `true` exactly when this call hid an
    /// expired timed showing, so the caller can clear the display
    /// region. Starvation delays hiding but never hides early.
    pub fn tick(&mut self, now: u64) -> bool {
        if let State::Timed { expires_at } = self.state {
            if now >= expires_at {
                self.state = State::Hidden;
                return true;
            }
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.state != State::Hidden
    }

    pub fn is_held(&self) -> bool {
        self.state == State::Held
    }
}

impl Default for OverlayTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest text scale that fits the display width, ~6 px per character
/// per scale step, with a small margin.
pub fn best_scale(text: &str) -> u8 {
    let avail = config::DISPLAY_WIDTH.saturating_sub(10);
    let len = text.len().max(1) as u32;
    for scale in [4u8, 3, 2] {
        if 6 * scale as u32 * len <= avail {
            return scale;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_overlay_expires_on_tick() {
        let mut t = OverlayTimer::new();
        assert!(t.show_timed(0, 900));
        assert!(!t.tick(500));
        assert!(t.is_visible());
        assert!(t.tick(900));
        assert!(!t.is_visible());
        // Only the hiding tick reports a change.
        assert!(!t.tick(901));
    }

    #[test]
    fn held_overlay_never_expires() {
        let mut t = OverlayTimer::new();
        t.show_held();
        assert!(!t.tick(u64::MAX));
        assert!(t.is_visible());
        t.hide();
        assert!(!t.is_visible());
    }

    #[test]
    fn hide_overrides_pending_expiry() {
        let mut t = OverlayTimer::new();
        t.show_timed(0, 900);
        t.hide();
        assert!(!t.is_visible());
        assert!(!t.tick(900));
    }

    #[test]
    fn timed_rejected_while_held() {
        let mut t = OverlayTimer::new();
        t.show_held();
        assert!(!t.show_timed(0, 900));
        assert!(t.is_held());
        t.hide();
        assert!(t.show_timed(0, 900));
    }

    #[test]
    fn restart_extends_expiry() {
        let mut t = OverlayTimer::new();
        t.show_timed(0, 900);
        t.show_timed(600, 900);
        assert!(!t.tick(900));
        assert!(t.tick(1500));
    }

    #[test]
    fn scale_shrinks_with_length() {
        assert_eq!(best_scale("F4"), 4);
        assert_eq!(best_scale("Enter"), 3);
        assert_eq!(best_scale("PowerPoint"), 1);
        assert_eq!(best_scale("Visual Studio Code"), 1);
        assert_eq!(best_scale(""), 4);
    }
}
