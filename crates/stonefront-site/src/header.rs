//! Sticky header scroll behavior.
//!
//! The header picks up a `scrolled` style past 50px, hides when the page
//! scrolls down past 100px, and reappears on any upward scroll. Near the
//! top it is always shown.

/// Scroll offset past which the header takes its scrolled styling.
const SCROLLED_AT: f64 = 50.0;

/// Scroll offset past which downward scrolling hides the header.
const HIDE_AT: f64 = 100.0;

/// Style classes the header should carry after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderClasses {
    /// Compact/elevated styling away from the top.
    pub scrolled: bool,
    /// Header slid out of view.
    pub hidden: bool,
}

/// Direction-sensitive header state over successive scroll offsets.
#[derive(Debug, Default)]
pub struct HeaderScroll {
    last_offset: f64,
}

impl HeaderScroll {
    /// Start at the top of the page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next scroll offset; returns the classes to apply.
    pub fn on_scroll(&mut self, offset: f64) -> HeaderClasses {
        let classes = if offset <= SCROLLED_AT {
            // Near the top: plain and always visible
            HeaderClasses::default()
        } else {
            HeaderClasses {
                scrolled: true,
                hidden: offset > HIDE_AT && offset > self.last_offset,
            }
        };
        self.last_offset = offset;
        classes
    }
}

// ============================================================================
// Tests
// ============================================================================
