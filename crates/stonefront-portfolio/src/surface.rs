//! The page surface seam.
//!
//! The controller never touches a DOM directly; it writes through this
//! capability trait. The browser host maps each call onto the real page
//! (mount lookups by element id, innerHTML replacement, class toggles);
//! tests substitute an in-memory fake.
//!
//! Both mounts are optional (different pages carry different subsets)
//! and a missing mount simply skips the corresponding render path.

use stonefront_content::Filter;

/// The two optional render targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mount {
    /// Capped featured list on the landing page.
    Featured,
    /// Full filterable grid on the listing page.
    Grid,
}

impl Mount {
    /// The element id the host page uses for this mount.
    pub fn element_id(&self) -> &'static str {
        match self {
            Mount::Featured => "featuredProjects",
            Mount::Grid => "portfolioGrid",
        }
    }
}

/// Capabilities the portfolio controller needs from the page.
pub trait Surface {
    /// Whether a mount element exists on the current page.
    fn has_mount(&self, mount: Mount) -> bool;

    /// Replace a mount's content with a rendered fragment.
    fn set_fragment(&mut self, mount: Mount, html: &str);

    /// Mark one filter control active and deactivate all others.
    fn set_active_filter_control(&mut self, filter: Filter);

    /// Show the overlay with the given content fragment.
    fn open_modal(&mut self, html: &str);

    /// Hide the overlay.
    fn close_modal(&mut self);

    /// Lock or release page scrolling (held while the overlay is open).
    fn set_scroll_lock(&mut self, locked: bool);

    /// Point an image slot at a new source (fallback substitution).
    fn set_image_src(&mut self, slot: &str, src: &str);
}
