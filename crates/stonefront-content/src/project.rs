//! The project record.
//!
//! A [`Project`] is one entry of the portfolio data document. Records are
//! immutable after load; the loaded sequence is only ever replaced
//! wholesale, never merged.
//!
//! Deserialization is validated: a document with a missing field or a
//! wrong-typed value is rejected as a whole (the loader degrades that to
//! the empty list). The one deliberately lax field is `category`, which
//! stays a free string: a project whose category is outside the filter
//! enumeration still renders under the unfiltered view.
//!
//! # Creating records in tests
//!
//! ```rust
//! use stonefront_content::Project;
//!
//! let project = Project::builder()
//!     .id("p1")
//!     .title("Hillcrest Residence")
//!     .category("New Builds")
//!     .location("Bozeman, MT")
//!     .summary("Custom four-bedroom build on a sloped lot.")
//!     .image("img/hillcrest.jpg")
//!     .featured(true)
//!     .build();
//! assert_eq!(project.id, "p1");
//! ```

use serde::{Deserialize, Serialize};

/// Detail sections shown in the project overlay, in their fixed render
/// order: scope, timeline, highlights.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectDetails {
    /// Work performed, as an ordered list of line items.
    pub scope: Vec<String>,
    /// Free-text schedule summary.
    pub timeline: String,
    /// Ordered list of standout points.
    pub highlights: Vec<String>,
}

/// One portfolio entry, loaded from the project data document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque id, unique within the loaded set; the sole lookup key when
    /// a card is activated.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display category. Free string; the filter enumeration is closed but
    /// the data is not.
    pub category: String,
    /// Display location.
    pub location: String,
    /// One-paragraph display summary.
    pub summary: String,
    /// Image path: absolute (`http…`) or relative to the site root.
    pub image: String,
    /// Eligibility for the capped landing-page subset.
    pub featured: bool,
    /// Detail sections for the overlay.
    pub details: ProjectDetails,
}

impl Project {
    /// Create a new project builder.
    pub fn builder() -> ProjectBuilder {
        ProjectBuilder::default()
    }
}

/// Builder for [`Project`].
#[derive(Debug, Default)]
pub struct ProjectBuilder {
    project: ProjectParts,
}

#[derive(Debug, Default)]
struct ProjectParts {
    id: String,
    title: String,
    category: String,
    location: String,
    summary: String,
    image: String,
    featured: bool,
    details: ProjectDetails,
}

impl ProjectBuilder {
    /// Set the project id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.project.id = id.into();
        self
    }

    /// Set the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.project.title = title.into();
        self
    }

    /// Set the display category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.project.category = category.into();
        self
    }

    /// Set the display location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.project.location = location.into();
        self
    }

    /// Set the display summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.project.summary = summary.into();
        self
    }

    /// Set the image path.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.project.image = image.into();
        self
    }

    /// Set the featured flag.
    pub fn featured(mut self, featured: bool) -> Self {
        self.project.featured = featured;
        self
    }

    /// Set the detail sections.
    pub fn details(mut self, details: ProjectDetails) -> Self {
        self.project.details = details;
        self
    }

    /// Set the scope line items.
    pub fn scope(mut self, scope: Vec<String>) -> Self {
        self.project.details.scope = scope;
        self
    }

    /// Set the timeline text.
    pub fn timeline(mut self, timeline: impl Into<String>) -> Self {
        self.project.details.timeline = timeline.into();
        self
    }

    /// Set the highlight line items.
    pub fn highlights(mut self, highlights: Vec<String>) -> Self {
        self.project.details.highlights = highlights;
        self
    }

    /// Build the project.
    pub fn build(self) -> Project {
        let p = self.project;
        Project {
            id: p.id,
            title: p.title,
            category: p.category,
            location: p.location,
            summary: p.summary,
            image: p.image,
            featured: p.featured,
            details: p.details,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
