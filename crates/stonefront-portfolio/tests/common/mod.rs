//! Common test utilities for portfolio integration tests.

use std::collections::HashMap;

use stonefront_content::{Filter, Project};
use stonefront_portfolio::{Mount, Surface};

/// In-memory page surface.
///
/// Records every write the controller performs: mount fragments, filter
/// control activation, overlay content, scroll lock, and image source
/// swaps.
#[derive(Default)]
pub struct FakeSurface {
    mounts: Vec<Mount>,
    pub fragments: HashMap<&'static str, String>,
    pub active_filter: Option<Filter>,
    pub modal_html: Option<String>,
    pub scroll_locked: bool,
    pub image_swaps: Vec<(String, String)>,
}

impl FakeSurface {
    /// Surface for a page carrying the given mounts.
    pub fn with_mounts(mounts: &[Mount]) -> Self {
        Self {
            mounts: mounts.to_vec(),
            ..Default::default()
        }
    }

    /// The last fragment written to a mount, if any.
    pub fn fragment(&self, mount: Mount) -> Option<&str> {
        self.fragments.get(mount.element_id()).map(String::as_str)
    }
}

impl Surface for FakeSurface {
    fn has_mount(&self, mount: Mount) -> bool {
        self.mounts.contains(&mount)
    }

    fn set_fragment(&mut self, mount: Mount, html: &str) {
        self.fragments.insert(mount.element_id(), html.to_string());
    }

    fn set_active_filter_control(&mut self, filter: Filter) {
        self.active_filter = Some(filter);
    }

    fn open_modal(&mut self, html: &str) {
        self.modal_html = Some(html.to_string());
    }

    fn close_modal(&mut self) {
        self.modal_html = None;
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_image_src(&mut self, slot: &str, src: &str) {
        self.image_swaps.push((slot.to_string(), src.to_string()));
    }
}

/// A small portfolio spanning every render path: featured and
/// non-featured records across three categories.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::builder()
            .id("larkspur-deck")
            .title("Larkspur Deck")
            .category("Outdoor")
            .location("Bozeman, MT")
            .summary("Cedar deck with integrated seating.")
            .image("img/larkspur.jpg")
            .featured(true)
            .scope(vec!["Footings".into(), "Framing".into(), "Decking".into()])
            .timeline("6 weeks")
            .highlights(vec!["Completed before first snow".into()])
            .build(),
        Project::builder()
            .id("riverbend-offices")
            .title("Riverbend Offices")
            .category("Commercial")
            .location("Missoula, MT")
            .summary("Ground-up two-story office building.")
            .image("https://cdn.example.com/riverbend.jpg")
            .featured(false)
            .scope(vec!["Sitework".into(), "Core and shell".into()])
            .timeline("14 months")
            .highlights(vec!["LEED Silver".into()])
            .build(),
        Project::builder()
            .id("cedar-ridge")
            .title("Cedar Ridge Remodel")
            .category("Renovations")
            .location("Helena, MT")
            .summary("Full interior remodel.")
            .image("img/cedar.jpg")
            .featured(true)
            .scope(vec!["Demolition".into(), "Framing".into()])
            .timeline("6 months")
            .highlights(vec!["Ahead of schedule".into()])
            .build(),
    ]
}

/// The sample portfolio serialized as a data document.
pub fn sample_document() -> String {
    serde_json::to_string(&sample_projects()).expect("sample projects serialize")
}
