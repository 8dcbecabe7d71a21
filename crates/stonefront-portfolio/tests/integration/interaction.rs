//! Filter selection, overlay lifecycle, image fallback, and the
//! analytics signals each interaction emits.

use std::sync::Arc;

use stonefront_core::analytics::{Analytics, RecordingSink};
use stonefront_core::util::paths::SiteBase;
use stonefront_content::Filter;
use stonefront_portfolio::controller::{MODAL_IMAGE_SLOT, card_slot};
use stonefront_portfolio::render::NO_MATCHES_MESSAGE;
use stonefront_portfolio::{CloseTrigger, Mount, PortfolioController};

use crate::common::{FakeSurface, sample_projects};

struct Harness {
    controller: PortfolioController<FakeSurface>,
    sink: Arc<RecordingSink>,
}

/// Controller seeded with the sample portfolio; lifecycle tests cover
/// the fetch path.
fn loaded_harness(mounts: &[Mount]) -> Harness {
    let sink = Arc::new(RecordingSink::default());
    let mut controller = PortfolioController::new(
        FakeSurface::with_mounts(mounts),
        SiteBase::root(),
        Analytics::new(sink.clone()),
    );
    controller.set_projects(sample_projects());
    Harness { controller, sink }
}

#[test]
fn filter_selection_is_exclusive_and_reported() {
    let Harness {
        mut controller,
        sink,
    } = loaded_harness(&[Mount::Grid]);

    controller.select_filter(Filter::Outdoor);
    assert_eq!(controller.surface().active_filter, Some(Filter::Outdoor));

    let grid = controller.surface().fragment(Mount::Grid).unwrap();
    assert!(grid.contains("data-project-id=\"larkspur-deck\""));
    assert!(!grid.contains("data-project-id=\"riverbend-offices\""));

    let events = sink.events();
    let filter_events: Vec<_> = events
        .iter()
        .filter(|e| e.name == "portfolio_filter")
        .collect();
    assert_eq!(filter_events.last().unwrap().label, "Outdoor");
}

#[test]
fn unmatched_filter_shows_empty_state() {
    let Harness { mut controller, .. } = loaded_harness(&[Mount::Grid]);

    controller.select_filter(Filter::NewBuilds);
    let grid = controller.surface().fragment(Mount::Grid).unwrap();
    assert!(grid.contains(NO_MATCHES_MESSAGE));
    assert_eq!(grid.matches("class=\"portfolio-card\"").count(), 0);
}

#[test]
fn modal_opens_with_project_fields_and_view_signal() {
    let Harness {
        mut controller,
        sink,
    } = loaded_harness(&[Mount::Grid]);

    controller.activate_card("larkspur-deck");

    let html = controller.surface().modal_html.clone().unwrap();
    assert!(html.contains("<h2>Larkspur Deck</h2>"));
    assert!(html.contains("Bozeman, MT"));
    assert!(html.contains("Cedar deck with integrated seating."));
    assert!(html.contains("Footings"));
    assert!(html.contains("6 weeks"));
    assert!(html.contains("Completed before first snow"));

    let events = sink.events();
    let views: Vec<_> = events.iter().filter(|e| e.name == "portfolio_view").collect();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].label, "Larkspur Deck");
}

#[test]
fn reopening_replaces_all_fields_with_no_residue() {
    let Harness { mut controller, .. } = loaded_harness(&[Mount::Grid]);

    controller.activate_card("larkspur-deck");
    controller.dismiss_modal(CloseTrigger::CloseControl);
    controller.activate_card("cedar-ridge");

    let html = controller.surface().modal_html.clone().unwrap();
    assert!(html.contains("<h2>Cedar Ridge Remodel</h2>"));
    assert!(html.contains("Demolition"));
    // Nothing of the previously bound project remains
    assert!(!html.contains("Larkspur"));
    assert!(!html.contains("Footings"));
    assert!(!html.contains("6 weeks"));
}

#[test]
fn opening_while_open_rebinds_without_stacking() {
    let Harness { mut controller, .. } = loaded_harness(&[Mount::Grid]);

    controller.activate_card("larkspur-deck");
    controller.activate_card("riverbend-offices");

    assert_eq!(
        controller.modal().state().bound().unwrap().id,
        "riverbend-offices"
    );
    let html = controller.surface().modal_html.clone().unwrap();
    assert!(html.contains("Riverbend Offices"));
    assert!(!html.contains("Larkspur"));
}

#[test]
fn every_close_trigger_closes_and_fires_no_signal() {
    for trigger in [
        CloseTrigger::CloseControl,
        CloseTrigger::OverlayClick,
        CloseTrigger::EscapeKey,
    ] {
        let Harness {
            mut controller,
            sink,
        } = loaded_harness(&[Mount::Grid]);

        controller.activate_card("larkspur-deck");
        let events_before = sink.events().len();

        controller.dismiss_modal(trigger);
        assert!(!controller.modal().is_open());
        assert!(!controller.surface().scroll_locked);
        // Closing is silent
        assert_eq!(sink.events().len(), events_before);
    }
}

#[test]
fn card_image_failure_swaps_to_fallback_exactly_once() {
    let Harness { mut controller, .. } = loaded_harness(&[Mount::Grid]);
    controller.select_filter(Filter::All);

    let slot = card_slot(Mount::Grid, "larkspur-deck");
    controller.image_failed(&slot);
    // The fallback also failing to load must not loop
    controller.image_failed(&slot);
    controller.image_failed(&slot);

    let swaps = &controller.surface().image_swaps;
    assert_eq!(swaps.len(), 1);
    assert_eq!(swaps[0].1, "assets/img/home.png");
}

#[test]
fn modal_image_failure_uses_the_same_one_shot_semantics() {
    let Harness { mut controller, .. } = loaded_harness(&[Mount::Grid]);

    controller.activate_card("larkspur-deck");
    controller.image_failed(MODAL_IMAGE_SLOT);
    controller.image_failed(MODAL_IMAGE_SLOT);
    assert_eq!(controller.surface().image_swaps.len(), 1);

    // Reopening renders a fresh overlay image, re-arming the slot
    controller.dismiss_modal(CloseTrigger::EscapeKey);
    controller.activate_card("cedar-ridge");
    controller.image_failed(MODAL_IMAGE_SLOT);
    assert_eq!(controller.surface().image_swaps.len(), 2);
}

#[test]
fn absent_analytics_sink_never_blocks_interaction() {
    let mut controller = PortfolioController::new(
        FakeSurface::with_mounts(&[Mount::Grid]),
        SiteBase::root(),
        Analytics::disabled(),
    );
    controller.set_projects(sample_projects());

    controller.select_filter(Filter::Commercial);
    controller.activate_card("riverbend-offices");
    controller.dismiss_modal(CloseTrigger::EscapeKey);

    let grid = controller.surface().fragment(Mount::Grid).unwrap();
    assert!(grid.contains("data-project-id=\"riverbend-offices\""));
}
