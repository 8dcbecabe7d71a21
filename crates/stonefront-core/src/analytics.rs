//! Event-reporting seam for site analytics.
//!
//! The site reports interaction events to an optional collector; every
//! call site must treat an absent collector as a no-op, never an error.
//! [`Analytics`] models that contract: it wraps an optional
//! [`AnalyticsSink`] and swallows `track` calls when none is installed.
//!
//! # Usage
//!
//! ```rust
//! use stonefront_core::analytics::{Analytics, AnalyticsEvent, RecordingSink};
//! use std::sync::Arc;
//!
//! // Disabled: tracking is a no-op
//! let analytics = Analytics::disabled();
//! analytics.track(AnalyticsEvent::portfolio_filter("Outdoor"));
//!
//! // Enabled: events reach the sink
//! let sink = Arc::new(RecordingSink::default());
//! let analytics = Analytics::new(sink.clone());
//! analytics.track(AnalyticsEvent::portfolio_view("Hillcrest Residence"));
//! assert_eq!(sink.events().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

/// A single reported interaction event.
///
/// Mirrors the `(name, category, label)` triple the site sends for every
/// interaction: filter selections, project views, form submissions,
/// button clicks, and scroll-depth milestones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    /// Event name, e.g. `portfolio_filter`.
    pub name: String,
    /// Grouping category, e.g. `Portfolio`.
    pub category: String,
    /// Free-form label, e.g. the chosen filter.
    pub label: String,
}

impl AnalyticsEvent {
    /// Create an event from raw parts.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            label: label.into(),
        }
    }

    /// A portfolio filter was activated; the label is the filter name.
    pub fn portfolio_filter(filter_label: impl Into<String>) -> Self {
        Self::new("portfolio_filter", "Portfolio", filter_label)
    }

    /// A project detail overlay was opened; the label is the project title.
    pub fn portfolio_view(project_title: impl Into<String>) -> Self {
        Self::new("portfolio_view", "Portfolio", project_title)
    }

    /// The quote-request form was submitted.
    pub fn form_submission() -> Self {
        Self::new("form_submission", "Contact", "Quote Request Form")
    }

    /// A call-to-action button was clicked; the label is its visible text.
    pub fn button_click(button_text: impl Into<String>) -> Self {
        Self::new("button_click", "Interaction", button_text)
    }

    /// The page was scrolled past a depth threshold (percent).
    pub fn scroll_depth(threshold: u8) -> Self {
        Self::new("scroll_depth", "Engagement", format!("{threshold}%"))
    }
}

/// Destination for reported events.
pub trait AnalyticsSink: Send + Sync {
    /// Report one event. Implementations must not block the caller.
    fn track(&self, event: &AnalyticsEvent);
}

/// Handle call sites use to report events.
///
/// Cheap to clone. When no sink is installed, [`Analytics::track`] is a
/// no-op; reporting must never alter or block rendering.
#[derive(Clone, Default)]
pub struct Analytics {
    sink: Option<Arc<dyn AnalyticsSink>>,
}

impl Analytics {
    /// Analytics with an installed sink.
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Analytics with no sink; all tracking is a no-op.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Whether a sink is installed.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Report an event to the sink, if any.
    pub fn track(&self, event: AnalyticsEvent) {
        if let Some(sink) = &self.sink {
            sink.track(&event);
        }
    }
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Sink that writes events to the log.
#[derive(Debug, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn track(&self, event: &AnalyticsEvent) {
        log::info!(
            "analytics: {} [{}] {}",
            event.name,
            event.category,
            event.label
        );
    }
}

/// Sink that records events in memory, for tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingSink {
    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().expect("analytics lock poisoned").clone()
    }
}

impl AnalyticsSink for RecordingSink {
    fn track(&self, event: &AnalyticsEvent) {
        self.events
            .lock()
            .expect("analytics lock poisoned")
            .push(event.clone());
    }
}

// ============================================================================
// Tests
// ============================================================================
