//! Stonefront Core: shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Stonefront
//! crates. It has no internal Stonefront dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`analytics`]: Event-reporting seam (absent sink is a no-op)
//! - [`util`]: Base-path resolution and HTML escaping

#![doc = include_str!("../README.md")]

pub mod analytics;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use analytics::{Analytics, AnalyticsEvent, AnalyticsSink};
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::html::{escape_attr, escape_text};
pub use util::paths::SiteBase;
