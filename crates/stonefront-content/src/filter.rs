//! The single-select category filter.
//!
//! The grid view is restricted by exactly one [`Filter`] at a time: the
//! `All` sentinel (the default) or one of the four fixed categories. The
//! enumeration is closed, so a filter control can never select a label the
//! renderer does not understand; unknown labels are rejected at parse time.

use serde::{Deserialize, Serialize};

use crate::project::Project;

/// Category filter for the portfolio grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Filter {
    /// No restriction; every project renders.
    #[default]
    All,
    /// Ground-up residential construction.
    #[serde(rename = "New Builds")]
    NewBuilds,
    /// Remodels and additions.
    Renovations,
    /// Decks, patios, and landscape structures.
    Outdoor,
    /// Commercial construction and tenant improvement.
    Commercial,
}

impl Filter {
    /// Every filter, in the order the controls appear on the page.
    pub const ALL: [Filter; 5] = [
        Filter::All,
        Filter::NewBuilds,
        Filter::Renovations,
        Filter::Outdoor,
        Filter::Commercial,
    ];

    /// The display label carried by the matching filter control.
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::NewBuilds => "New Builds",
            Filter::Renovations => "Renovations",
            Filter::Outdoor => "Outdoor",
            Filter::Commercial => "Commercial",
        }
    }

    /// Parse a control label. Unknown labels are not representable.
    pub fn parse_label(label: &str) -> Option<Filter> {
        Filter::ALL.into_iter().find(|f| f.label() == label)
    }

    /// Whether a project passes this filter.
    ///
    /// `All` passes everything; a category filter requires exact equality
    /// with the project's category string.
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            category => project.category == category.label(),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Filter {
    type Err = stonefront_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::parse_label(s).ok_or_else(|| {
            stonefront_core::Error::validation_field("filter", format!("unknown category: {s}"))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
