//! Owned renderer state.
//!
//! Two values outlive any single render: the loaded project sequence and
//! the current filter. They live in one owned struct passed by reference
//! into the render functions. Single event loop, no synchronization
//! primitives.
//!
//! Invariants: the project buffer is replaced wholesale on load, never
//! merged, and card identity is always re-resolved by searching the
//! current buffer for a matching id. A stale id from an earlier render
//! simply fails to resolve.

use stonefront_content::{Filter, Project};

/// Process-wide portfolio state, alive for the page's lifetime.
#[derive(Debug, Default)]
pub struct PortfolioState {
    projects: Vec<Project>,
    active_filter: Filter,
}

impl PortfolioState {
    /// Empty state: no projects, filter `All`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the project buffer wholesale with the latest fetch result.
    pub fn replace_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    /// The loaded projects, in document order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Whether the buffer is empty (fetch pending, failed, or empty file).
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// The currently selected filter.
    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    /// Select a filter. Selection is exclusive by construction: there is
    /// exactly one active value.
    pub fn set_filter(&mut self, filter: Filter) {
        self.active_filter = filter;
    }

    /// Re-resolve a project by id in the current buffer.
    ///
    /// Returns `None` for ids that no longer resolve (e.g. a card from a
    /// render that predates a reload).
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All featured projects in original relative order (stable filter,
    /// no re-sorting).
    pub fn featured(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Projects passing the given filter, in original order.
    pub fn filtered(&self, filter: Filter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: &str, featured: bool) -> Project {
        Project::builder()
            .id(id)
            .title(format!("Project {id}"))
            .category(category)
            .featured(featured)
            .build()
    }

    fn loaded_state() -> PortfolioState {
        let mut state = PortfolioState::new();
        state.replace_projects(vec![
            project("a", "Outdoor", true),
            project("b", "Commercial", false),
            project("c", "Outdoor", true),
            project("d", "Renovations", true),
        ]);
        state
    }

    #[test]
    fn test_new_state_is_empty_with_all_filter() {
        let state = PortfolioState::new();
        assert!(state.is_empty());
        assert_eq!(state.active_filter(), Filter::All);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut state = loaded_state();
        state.replace_projects(vec![project("z", "Outdoor", false)]);
        assert_eq!(state.projects().len(), 1);
        assert!(state.find("a").is_none());
        assert!(state.find("z").is_some());
    }

    #[test]
    fn test_find_by_id() {
        let state = loaded_state();
        assert_eq!(state.find("b").unwrap().category, "Commercial");
        assert!(state.find("missing").is_none());
    }

    #[test]
    fn test_featured_preserves_order() {
        let state = loaded_state();
        let ids: Vec<&str> = state.featured().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_filtered_subset_in_order() {
        let state = loaded_state();
        let ids: Vec<&str> = state
            .filtered(Filter::Outdoor)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_filtered_all_returns_everything() {
        let state = loaded_state();
        assert_eq!(state.filtered(Filter::All).len(), 4);
    }

    #[test]
    fn test_set_filter() {
        let mut state = loaded_state();
        state.set_filter(Filter::Commercial);
        assert_eq!(state.active_filter(), Filter::Commercial);
    }
}
