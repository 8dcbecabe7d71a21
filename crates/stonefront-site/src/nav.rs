//! Mobile navigation menu.
//!
//! The menu is a plain open/closed toggle. It closes whenever a link is
//! followed or a click lands outside both the toggle control and the
//! menu, and it locks page scrolling while open.

/// Open/closed state of the mobile menu.
#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Menu starts closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is locked exactly while the menu is open.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// The toggle control was activated. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A navigation link was followed: the menu closes.
    pub fn link_followed(&mut self) {
        self.open = false;
    }

    /// A click landed outside the toggle and the menu: the menu closes.
    pub fn outside_clicked(&mut self) {
        self.open = false;
    }
}

/// Index of the navigation link matching the current page, if any.
///
/// The current page is the final path segment, defaulting to
/// `index.html` for directory paths; a link matches when its own final
/// segment equals the current page. On the landing page the bare
/// `#home` anchor also matches.
pub fn active_link_index(current_path: &str, link_hrefs: &[&str]) -> Option<usize> {
    let current = match current_path.rsplit('/').next() {
        Some("") | None => "index.html",
        Some(segment) => segment,
    };

    link_hrefs.iter().position(|href| {
        let link_page = href.rsplit('/').next().unwrap_or(href);
        link_page == current || (current == "index.html" && *href == "#home")
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Menu state
    // ------------------------------------------------------------------------

    #[test]
    fn test_menu_starts_closed() {
        let menu = NavMenu::new();
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut menu = NavMenu::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(menu.scroll_locked());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_followed_closes() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.link_followed();
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.outside_clicked();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_while_closed_is_noop() {
        let mut menu = NavMenu::new();
        menu.link_followed();
        menu.outside_clicked();
        assert!(!menu.is_open());
    }

    // ------------------------------------------------------------------------
    // Active link
    // ------------------------------------------------------------------------

    const LINKS: [&str; 4] = ["index.html", "portfolio.html", "about.html", "#home"];

    #[test]
    fn test_active_link_exact_page() {
        assert_eq!(active_link_index("/portfolio.html", &LINKS), Some(1));
        assert_eq!(active_link_index("/site/about.html", &LINKS), Some(2));
    }

    #[test]
    fn test_active_link_directory_defaults_to_index() {
        assert_eq!(active_link_index("/", &LINKS), Some(0));
        assert_eq!(active_link_index("/site/", &LINKS), Some(0));
    }

    #[test]
    fn test_active_link_home_anchor_on_landing() {
        // Without an index.html link, the landing page matches #home
        let links = ["portfolio.html", "#home"];
        assert_eq!(active_link_index("/index.html", &links), Some(1));
    }

    #[test]
    fn test_active_link_no_match() {
        assert_eq!(active_link_index("/careers.html", &LINKS), None);
    }
}
