//! Single-shot project loading with degrade-to-empty semantics.
//!
//! Every page load performs exactly one fetch of the project document.
//! [`load_projects`] is the caller-facing entry point: it can not fail.
//! A network error, non-success status, malformed JSON, or schema
//! violation is logged and resolves to the empty list; a data-load
//! failure must never crash the page. [`try_load`] exposes the underlying
//! fallible path for tooling that wants the cause (the CLI `validate`
//! command).

use crate::error::Result;
use crate::project::Project;
use crate::source::ProjectSource;

/// Parse a project document: a JSON array of project records.
///
/// Validated deserialization: a structural violation anywhere rejects the
/// whole document.
pub fn parse_projects(json: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(json)?)
}

/// Fetch and parse the document, surfacing the failure cause.
pub async fn try_load(source: &dyn ProjectSource) -> Result<Vec<Project>> {
    let body = source.fetch().await?;
    parse_projects(&body)
}

/// Fetch and parse the document, degrading any failure to the empty list.
///
/// On success the returned sequence replaces the caller's buffer
/// wholesale. On failure the cause is logged and the empty sequence is
/// returned; callers render their placeholder states and stay interactive.
pub async fn load_projects(source: &dyn ProjectSource) -> Vec<Project> {
    match try_load(source).await {
        Ok(projects) => {
            log::info!(
                "loaded {} projects from {}",
                projects.len(),
                source.location()
            );
            projects
        }
        Err(err) => {
            log::error!("failed to load projects from {}: {err}", source.location());
            Vec::new()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
