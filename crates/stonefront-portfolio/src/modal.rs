//! The project detail overlay.
//!
//! The overlay is an explicit two-state machine: `Closed` (initial) or
//! `Open`, bound to exactly one project record. Opening while already
//! open rebinds outright; there is no stacking. Closing fires no
//! signal and is a no-op when already closed.
//!
//! The overlay fragment renders the project image, title, location, and
//! summary, then three detail sections in fixed order: scope list,
//! timeline text, highlights list.

use stonefront_core::util::html::{escape_attr, escape_text};
use stonefront_core::util::paths::SiteBase;
use stonefront_content::Project;

/// Why the overlay was dismissed. All triggers behave identically; the
/// distinction exists for callers wiring page events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The dedicated close control inside the overlay.
    CloseControl,
    /// A click on the overlay background outside the content area.
    OverlayClick,
    /// The global cancellation key (Escape).
    EscapeKey,
}

/// Overlay state: closed, or open and bound to one project.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    /// No overlay shown.
    #[default]
    Closed,
    /// Overlay shown for the bound project record.
    Open(Project),
}

impl ModalState {
    /// Returns `true` if the overlay is shown.
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// The bound project, if open.
    pub fn bound(&self) -> Option<&Project> {
        match self {
            ModalState::Open(project) => Some(project),
            ModalState::Closed => None,
        }
    }
}

/// The overlay state machine.
#[derive(Debug, Default)]
pub struct Modal {
    state: ModalState,
}

impl Modal {
    /// New overlay in the closed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Returns `true` if the overlay is shown.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// closed→open, or rebind when already open (no stacking).
    pub fn open(&mut self, project: Project) {
        self.state = ModalState::Open(project);
    }

    /// open→closed. Returns `true` if the overlay was open; closing an
    /// already-closed overlay is a no-op.
    pub fn close(&mut self) -> bool {
        match self.state {
            ModalState::Open(_) => {
                self.state = ModalState::Closed;
                true
            }
            ModalState::Closed => false,
        }
    }
}

/// Render the overlay content fragment for a project.
pub fn render_modal(project: &Project, base: &SiteBase) -> String {
    let image = base.resolve_image(&project.image);

    let scope: String = project
        .details
        .scope
        .iter()
        .map(|item| format!("      <li>{}</li>\n", escape_text(item)))
        .collect();
    let highlights: String = project
        .details
        .highlights
        .iter()
        .map(|item| format!("      <li>{}</li>\n", escape_text(item)))
        .collect();

    format!(
        concat!(
            "<button class=\"modal-close\" aria-label=\"Close modal\">&times;</button>\n",
            "<img src=\"{image}\" alt=\"{alt}\" class=\"modal-image\">\n",
            "<h2>{title}</h2>\n",
            "<p class=\"modal-location\">{location}</p>\n",
            "<p class=\"modal-summary\">{summary}</p>\n",
            "<div class=\"modal-details\">\n",
            "  <div class=\"modal-detail-item\">\n",
            "    <h4>Scope</h4>\n",
            "    <ul>\n{scope}    </ul>\n",
            "  </div>\n",
            "  <div class=\"modal-detail-item\">\n",
            "    <h4>Timeline</h4>\n",
            "    <p>{timeline}</p>\n",
            "  </div>\n",
            "  <div class=\"modal-detail-item\">\n",
            "    <h4>Highlights</h4>\n",
            "    <ul>\n{highlights}    </ul>\n",
            "  </div>\n",
            "</div>\n",
        ),
        image = escape_attr(&image),
        alt = escape_attr(&project.title),
        title = escape_text(&project.title),
        location = escape_text(&project.location),
        summary = escape_text(&project.summary),
        scope = scope,
        timeline = escape_text(&project.details.timeline),
        highlights = highlights,
    )
}

// ============================================================================
// Tests
// ============================================================================
