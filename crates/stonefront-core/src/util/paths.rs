//! Deployment base-path resolution.
//!
//! The site may be deployed at the domain root or under a sub-path (e.g.
//! project hosting under `/<repo>/`). All data and asset references are
//! resolved relative to the directory of the current page, so the same
//! build works in both placements.
//!
//! # Example
//!
//! ```rust
//! use stonefront_core::util::paths::SiteBase;
//!
//! // Page served from the domain root
//! let base = SiteBase::from_page_path("/index.html");
//! assert_eq!(base.data_url(), "data/projects.json");
//! assert_eq!(base.resolve_image("img/a.jpg"), "img/a.jpg");
//!
//! // Page served under a sub-path
//! let base = SiteBase::from_page_path("/showcase/portfolio.html");
//! assert_eq!(base.data_url(), "/showcase/data/projects.json");
//! assert_eq!(base.resolve_image("img/a.jpg"), "/showcase/img/a.jpg");
//!
//! // Absolute image URLs pass through unchanged
//! assert_eq!(
//!     base.resolve_image("https://cdn.example.com/a.jpg"),
//!     "https://cdn.example.com/a.jpg"
//! );
//! ```

/// Path of the project data document, relative to the site root.
pub const DATA_PATH: &str = "data/projects.json";

/// Path of the substitute image shown when a project image fails to load,
/// relative to the site root.
pub const FALLBACK_IMAGE_PATH: &str = "assets/img/home.png";

/// Resolved deployment base for the current page.
///
/// The base is the page path with its final segment removed: `""` for a
/// root deployment, `"/<prefix>"` otherwise. Construction never fails;
/// a path without separators resolves to the root base.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteBase {
    base: String,
}

impl SiteBase {
    /// Base for a site deployed at the domain root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Use an explicit base prefix (no trailing slash).
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Derive the base from the current page's path.
    ///
    /// Drops the final `/`-separated segment, keeping everything before it:
    /// `/showcase/portfolio.html` → `/showcase`, `/index.html` → `""`.
    pub fn from_page_path(page_path: &str) -> Self {
        let base = match page_path.rfind('/') {
            Some(idx) => &page_path[..idx],
            None => "",
        };
        Self {
            base: base.to_string(),
        }
    }

    /// The raw base prefix (empty for a root deployment).
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Location of the project data document.
    pub fn data_url(&self) -> String {
        if self.base.is_empty() {
            DATA_PATH.to_string()
        } else {
            format!("{}/{DATA_PATH}", self.base)
        }
    }

    /// Prefix applied to relative asset paths (empty, or base plus `/`).
    pub fn asset_prefix(&self) -> String {
        if self.base.is_empty() {
            String::new()
        } else {
            format!("{}/", self.base)
        }
    }

    /// Resolve a project image path.
    ///
    /// Absolute URLs (`http…`) pass through unchanged; relative paths are
    /// prefixed with the base.
    pub fn resolve_image(&self, image: &str) -> String {
        if image.starts_with("http") {
            image.to_string()
        } else {
            format!("{}{image}", self.asset_prefix())
        }
    }

    /// The well-known fallback image location under this base.
    pub fn fallback_image(&self) -> String {
        format!("{}{FALLBACK_IMAGE_PATH}", self.asset_prefix())
    }
}
