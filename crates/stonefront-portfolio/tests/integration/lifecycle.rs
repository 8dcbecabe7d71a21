//! Initialization paths: the single fetch, optional mounts, and
//! degradation when the data document cannot be loaded.

use std::io::Write;

use stonefront_core::analytics::Analytics;
use stonefront_core::util::paths::SiteBase;
use stonefront_content::{FileSource, Filter};
use stonefront_portfolio::render::{LOADING_MESSAGE, NO_MATCHES_MESSAGE};
use stonefront_portfolio::{Mount, PortfolioController};

use crate::common::{FakeSurface, sample_document};

fn document_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[tokio::test]
async fn init_renders_both_mounts_when_present() {
    let file = document_file(&sample_document());
    let surface = FakeSurface::with_mounts(&[Mount::Featured, Mount::Grid]);
    let mut controller =
        PortfolioController::new(surface, SiteBase::root(), Analytics::disabled());

    controller.init(&FileSource::new(file.path())).await;

    let featured = controller.surface().fragment(Mount::Featured).unwrap();
    assert!(featured.contains("data-project-id=\"larkspur-deck\""));
    assert!(featured.contains("data-project-id=\"cedar-ridge\""));
    // Not featured: excluded from the landing subset
    assert!(!featured.contains("data-project-id=\"riverbend-offices\""));

    // Grid starts unfiltered, with the All control active
    let grid = controller.surface().fragment(Mount::Grid).unwrap();
    assert_eq!(grid.matches("class=\"portfolio-card\"").count(), 3);
    assert_eq!(controller.surface().active_filter, Some(Filter::All));
}

#[tokio::test]
async fn init_skips_absent_mounts() {
    let file = document_file(&sample_document());
    let surface = FakeSurface::with_mounts(&[Mount::Featured]);
    let mut controller =
        PortfolioController::new(surface, SiteBase::root(), Analytics::disabled());

    controller.init(&FileSource::new(file.path())).await;

    assert!(controller.surface().fragment(Mount::Featured).is_some());
    assert!(controller.surface().fragment(Mount::Grid).is_none());
    // Filter controls are only wired alongside the grid
    assert_eq!(controller.surface().active_filter, None);
}

#[tokio::test]
async fn init_with_no_mounts_is_not_an_error() {
    let file = document_file(&sample_document());
    let surface = FakeSurface::with_mounts(&[]);
    let mut controller =
        PortfolioController::new(surface, SiteBase::root(), Analytics::disabled());

    controller.init(&FileSource::new(file.path())).await;

    assert!(controller.surface().fragments.is_empty());
    assert_eq!(controller.state().projects().len(), 3);
}

#[tokio::test]
async fn load_failure_renders_placeholders_and_stays_interactive() {
    let surface = FakeSurface::with_mounts(&[Mount::Featured, Mount::Grid]);
    let mut controller =
        PortfolioController::new(surface, SiteBase::root(), Analytics::disabled());

    // Missing data document: the load degrades to the empty list
    controller
        .init(&FileSource::new("/nonexistent/data/projects.json"))
        .await;

    let featured = controller.surface().fragment(Mount::Featured).unwrap();
    assert!(featured.contains(LOADING_MESSAGE));
    let grid = controller.surface().fragment(Mount::Grid).unwrap();
    assert!(grid.contains(NO_MATCHES_MESSAGE));

    // The page remains interactive: events on stale content are no-ops
    controller.activate_card("larkspur-deck");
    assert!(!controller.modal().is_open());
}

#[tokio::test]
async fn malformed_document_degrades_like_a_network_failure() {
    let file = document_file("[{\"id\": \"p1\"}]");
    let surface = FakeSurface::with_mounts(&[Mount::Featured]);
    let mut controller =
        PortfolioController::new(surface, SiteBase::root(), Analytics::disabled());

    controller.init(&FileSource::new(file.path())).await;

    assert!(controller.state().is_empty());
    let featured = controller.surface().fragment(Mount::Featured).unwrap();
    assert!(featured.contains(LOADING_MESSAGE));
}
