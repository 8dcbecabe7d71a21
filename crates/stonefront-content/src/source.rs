//! Where the project data document comes from.
//!
//! [`ProjectSource`] abstracts the fetch so the loader, the page
//! controller, and tests share one seam. Two implementations: an HTTP GET
//! against the deployed site ([`HttpSource`]) and a local file read
//! ([`FileSource`], used by the CLI and tests). [`source_for`] picks one
//! from the location string.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;

/// A single-shot fetch of the raw project document.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Fetch the document body. One outstanding call at a time; no retry,
    /// no timeout override, no cache.
    async fn fetch(&self) -> Result<String>;

    /// Human-readable location, for log messages.
    fn location(&self) -> String;
}

/// Fetches the document over HTTP(S).
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Source reading from the given URL with a default client.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ProjectSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Reads the document from the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProjectSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source for a location string: `http(s)` URLs fetch over the
/// network, anything else reads a local file.
pub fn source_for(location: &str) -> Box<dyn ProjectSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

// ============================================================================
// Tests
// ============================================================================
