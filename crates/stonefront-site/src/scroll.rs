//! Smooth-scroll offsets and scroll-depth milestones.

/// Fixed allowance for the sticky header when scrolling to an anchor.
pub const HEADER_OFFSET: f64 = 100.0;

/// Depth milestones reported once each, in percent.
pub const DEPTH_THRESHOLDS: [u8; 4] = [25, 50, 75, 100];

/// Destination offset for an in-page anchor link.
///
/// Returns `None` for the bare `#` href, which is skipped. The target
/// sits one header height above the element so the sticky header does
/// not cover it.
pub fn anchor_scroll_target(href: &str, element_top: f64, page_offset: f64) -> Option<f64> {
    if href == "#" {
        return None;
    }
    Some(element_top + page_offset - HEADER_OFFSET)
}

/// Percentage of the scrollable page height covered by a scroll position.
///
/// Clamped to 0–100; a page with no scrollable height counts as fully
/// scrolled.
pub fn scroll_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> u8 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 100;
    }
    ((scroll_y / scrollable) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// One-shot scroll-depth milestones.
///
/// Each threshold in [`DEPTH_THRESHOLDS`] is reported exactly once, the
/// first time the page is scrolled at least that deep. A single jump can
/// cross several thresholds at once; they are reported in ascending
/// order.
#[derive(Debug, Default)]
pub struct ScrollDepth {
    max_reached: u8,
}

impl ScrollDepth {
    /// Nothing reported yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current depth percentage; returns newly crossed
    /// thresholds.
    pub fn crossed(&mut self, percent: u8) -> Vec<u8> {
        let mut newly = Vec::new();
        for threshold in DEPTH_THRESHOLDS {
            if percent >= threshold && self.max_reached < threshold {
                self.max_reached = threshold;
                newly.push(threshold);
            }
        }
        newly
    }
}

// ============================================================================
// Tests
// ============================================================================
