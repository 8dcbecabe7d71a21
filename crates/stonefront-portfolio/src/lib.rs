//! The portfolio renderer.
//!
//! One component owns the portfolio behavior of the site: fetch the
//! project list once, render it as cards in two contexts (a capped
//! featured list on the landing view and a full filterable grid on the
//! listing view), keep a single-select category filter, and drive the
//! detail overlay for a selected project.
//!
//! # Structure
//!
//! - [`state`]: the owned renderer state (`projects` buffer + active filter)
//! - [`render`]: featured and grid HTML fragments and their placeholders
//! - [`modal`]: the explicit open/closed overlay state machine
//! - [`images`]: one-shot fallback substitution for failed images
//! - [`surface`]: the capability seam standing in for the page DOM
//! - [`controller`]: event glue tying the pieces to surface events
//!
//! # Execution model
//!
//! Single event loop. The only suspension point is the one data fetch
//! awaited in [`controller::PortfolioController::init`]; every render is
//! synchronous and runs to completion, so renders never interleave and
//! the two state fields need no synchronization.

pub mod controller;
pub mod images;
pub mod modal;
pub mod render;
pub mod state;
pub mod surface;

mod proptests;

pub use controller::PortfolioController;
pub use images::ImageFallbacks;
pub use modal::{CloseTrigger, Modal, ModalState};
pub use state::PortfolioState;
pub use surface::{Mount, Surface};
