//! Event glue between the page surface and the renderer state.
//!
//! The controller owns the renderer state, the overlay machine, and the
//! image fallback table, and exposes one method per page event: initial
//! readiness, filter control activation, card activation, overlay
//! dismissal, and image load failure. All methods are synchronous and
//! run to completion; the single suspension point is the data fetch
//! inside [`PortfolioController::init`].
//!
//! Error posture (nothing here is fatal): a failed load renders
//! placeholders, a missing mount skips its render path, an unresolvable
//! card id opens nothing, and an image failure substitutes the fallback
//! once. The page stays interactive with zero project data.

use stonefront_core::analytics::{Analytics, AnalyticsEvent};
use stonefront_core::util::paths::SiteBase;
use stonefront_content::{Filter, Project, ProjectSource, load_projects};

use crate::images::{FallbackAction, ImageFallbacks};
use crate::modal::{CloseTrigger, Modal, render_modal};
use crate::render::{FEATURED_LIMIT, render_featured, render_grid};
use crate::state::PortfolioState;
use crate::surface::{Mount, Surface};

/// Image slot key for the overlay image.
pub const MODAL_IMAGE_SLOT: &str = "modal";

/// Image slot key for a card image in a given mount.
pub fn card_slot(mount: Mount, project_id: &str) -> String {
    match mount {
        Mount::Featured => format!("featured:{project_id}"),
        Mount::Grid => format!("grid:{project_id}"),
    }
}

/// Drives the portfolio views on one page.
pub struct PortfolioController<S: Surface> {
    surface: S,
    state: PortfolioState,
    modal: Modal,
    images: ImageFallbacks,
    base: SiteBase,
    analytics: Analytics,
}

impl<S: Surface> PortfolioController<S> {
    /// Controller with an empty buffer and the `All` filter.
    pub fn new(surface: S, base: SiteBase, analytics: Analytics) -> Self {
        Self {
            surface,
            state: PortfolioState::new(),
            modal: Modal::new(),
            images: ImageFallbacks::new(),
            base,
            analytics,
        }
    }

    /// First-readiness initialization: perform the one data fetch, then
    /// render whichever mounts exist on this page.
    ///
    /// A load failure has already degraded to the empty list inside
    /// [`load_projects`]; the mounts then show their placeholder states.
    pub async fn init(&mut self, source: &dyn ProjectSource) {
        let projects = load_projects(source).await;
        self.state.replace_projects(projects);

        if self.surface.has_mount(Mount::Featured) {
            self.render_featured_mount();
        }
        if self.surface.has_mount(Mount::Grid) {
            let filter = self.state.active_filter();
            self.surface.set_active_filter_control(filter);
            self.render_grid_mount(filter);
        }
    }

    /// Replace the project buffer wholesale without a fetch.
    ///
    /// For hosts that already hold a parsed document (prerendering,
    /// tests). [`PortfolioController::init`] remains the single-fetch
    /// page path.
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.state.replace_projects(projects);
    }

    /// A filter control was activated.
    ///
    /// Selection is exclusive: the surface deactivates every other
    /// control. The grid is fully re-rendered, then the selection is
    /// reported; reporting never blocks or alters rendering.
    pub fn select_filter(&mut self, filter: Filter) {
        self.state.set_filter(filter);
        self.surface.set_active_filter_control(filter);
        if self.surface.has_mount(Mount::Grid) {
            self.render_grid_mount(filter);
        }
        self.analytics
            .track(AnalyticsEvent::portfolio_filter(filter.label()));
    }

    /// A card was activated (click or keyboard).
    ///
    /// The project is re-resolved by id in the current buffer; a card
    /// whose id no longer resolves (stale render across a reload) opens
    /// nothing, silently.
    pub fn activate_card(&mut self, project_id: &str) {
        let Some(project) = self.state.find(project_id).cloned() else {
            log::debug!("card activation for unresolvable project id: {project_id}");
            return;
        };
        self.open_modal(project);
    }

    /// The overlay was dismissed. All triggers behave identically, and
    /// dismissing a closed overlay is a no-op. Closing fires no signal.
    pub fn dismiss_modal(&mut self, _trigger: CloseTrigger) {
        if self.modal.close() {
            self.surface.close_modal();
            self.surface.set_scroll_lock(false);
        }
    }

    /// An image slot reported a load failure: substitute the fallback
    /// image exactly once per rendered slot.
    pub fn image_failed(&mut self, slot: &str) {
        if self.images.on_error(slot) == FallbackAction::Substitute {
            let fallback = self.base.fallback_image();
            self.surface.set_image_src(slot, &fallback);
        }
    }

    fn open_modal(&mut self, project: Project) {
        let html = render_modal(&project, &self.base);
        self.images.arm(MODAL_IMAGE_SLOT);
        self.surface.open_modal(&html);
        self.surface.set_scroll_lock(true);
        self.analytics
            .track(AnalyticsEvent::portfolio_view(project.title.clone()));
        self.modal.open(project);
    }

    fn render_featured_mount(&mut self) {
        let html = render_featured(&self.state, &self.base);
        for project in self.state.featured().into_iter().take(FEATURED_LIMIT) {
            self.images.arm(card_slot(Mount::Featured, &project.id));
        }
        self.surface.set_fragment(Mount::Featured, &html);
    }

    fn render_grid_mount(&mut self, filter: Filter) {
        let html = render_grid(&self.state, filter, &self.base);
        for project in self.state.filtered(filter) {
            self.images.arm(card_slot(Mount::Grid, &project.id));
        }
        self.surface.set_fragment(Mount::Grid, &html);
    }

    /// The renderer state (for hosts that need read access).
    pub fn state(&self) -> &PortfolioState {
        &self.state
    }

    /// The overlay machine.
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// The underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

// ============================================================================
// Tests
// ============================================================================
