//! Project records, the category filter, and the data-file loader.
//!
//! The site's portfolio is described by a JSON document, an ordered array
//! of [`Project`] records. This crate owns that vocabulary:
//!
//! - [`project`]: the validated record types and a test-friendly builder
//! - [`filter`]: the closed category filter enumeration
//! - [`loader`]: the single-shot async load with degrade-to-empty semantics
//! - [`source`]: where the document comes from (HTTP or local file)
//!
//! Loading never surfaces an error to callers: a network failure, non-2xx
//! status, malformed JSON, or schema violation logs the cause and resolves
//! to the empty list, so the page stays interactive with zero data.

pub mod error;
pub mod filter;
pub mod loader;
pub mod project;
pub mod source;

pub use error::{Error, Result};
pub use filter::Filter;
pub use loader::{load_projects, parse_projects, try_load};
pub use project::{Project, ProjectDetails};
pub use source::{FileSource, HttpSource, ProjectSource, source_for};
