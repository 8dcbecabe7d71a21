//! Card rendering for the featured list and the filterable grid.
//!
//! Both views render the same card markup; they differ in selection and
//! in their empty states. Rendering is a pure function of the state: a
//! re-render fully replaces the previous fragment (no incremental
//! diffing), so invoking a renderer twice with the same inputs yields an
//! identical fragment.
//!
//! Image failure handling does not live in the markup: the controller
//! arms a one-shot fallback per rendered image slot (see
//! [`crate::images`]).

use stonefront_core::util::html::{escape_attr, escape_text};
use stonefront_core::util::paths::SiteBase;
use stonefront_content::{Filter, Project};

use crate::state::PortfolioState;

/// Cap on the landing-page featured subset.
pub const FEATURED_LIMIT: usize = 3;

/// Placeholder while the project buffer is still empty.
pub const LOADING_MESSAGE: &str = "Projects loading...";

/// Placeholder when the buffer is loaded but nothing is featured.
pub const NONE_FEATURED_MESSAGE: &str = "No featured projects available at this time.";

/// Empty state for a filter that matches no project.
pub const NO_MATCHES_MESSAGE: &str = "No projects found in this category.";

/// Render the featured fragment: at most [`FEATURED_LIMIT`] featured
/// projects in original relative order.
///
/// The two placeholder messages are distinct and mutually exclusive: an
/// empty buffer renders the loading placeholder, a loaded buffer with no
/// featured project renders the none-available placeholder.
pub fn render_featured(state: &PortfolioState, base: &SiteBase) -> String {
    if state.is_empty() {
        return placeholder(LOADING_MESSAGE);
    }

    let featured = state.featured();
    if featured.is_empty() {
        return placeholder(NONE_FEATURED_MESSAGE);
    }

    featured
        .iter()
        .take(FEATURED_LIMIT)
        .map(|p| render_card(p, base))
        .collect()
}

/// Render the grid fragment for a filter: every matching project in
/// original order, or the explicit empty-state message.
pub fn render_grid(state: &PortfolioState, filter: Filter, base: &SiteBase) -> String {
    let matching = state.filtered(filter);
    if matching.is_empty() {
        return format!("<p class=\"text-center\">{NO_MATCHES_MESSAGE}</p>\n");
    }

    matching.iter().map(|p| render_card(p, base)).collect()
}

/// One portfolio card. The project id rides on a data attribute so card
/// activation can re-resolve the record in the current buffer.
fn render_card(project: &Project, base: &SiteBase) -> String {
    let image = base.resolve_image(&project.image);
    format!(
        concat!(
            "<div class=\"portfolio-card\" data-project-id=\"{id}\">\n",
            "  <img src=\"{image}\" alt=\"{alt}\" class=\"portfolio-card-image\">\n",
            "  <div class=\"portfolio-card-content\">\n",
            "    <span class=\"portfolio-card-category\">{category}</span>\n",
            "    <h3 class=\"portfolio-card-title\">{title}</h3>\n",
            "    <p class=\"portfolio-card-location\">{location}</p>\n",
            "    <p class=\"portfolio-card-summary\">{summary}</p>\n",
            "  </div>\n",
            "</div>\n",
        ),
        id = escape_attr(&project.id),
        image = escape_attr(&image),
        alt = escape_attr(&project.title),
        category = escape_text(&project.category),
        title = escape_text(&project.title),
        location = escape_text(&project.location),
        summary = escape_text(&project.summary),
    )
}

fn placeholder(message: &str) -> String {
    format!("<p class=\"portfolio-placeholder\">{message}</p>\n")
}

// ============================================================================
// Tests
// ============================================================================
