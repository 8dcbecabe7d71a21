//! CLI configuration.
//!
//! A small TOML file holding the deployment base, the data document
//! location, and the quote-request recipient. Resolution order for the
//! file: an explicit `--config` path, the `STONEFRONT_CONFIG`
//! environment variable (handled by the argument parser), then the
//! platform config directory. A missing file simply yields defaults; an
//! explicitly named file that does not exist is an error.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use stonefront_core::util::paths::DATA_PATH;

use crate::error::Result;

/// Subdirectory and file name under the platform config directory.
const CONFIG_RELATIVE: &str = "stonefront/config.toml";

/// Site engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Deployment base prefix (empty for a root deployment).
    #[serde(default)]
    pub base_path: String,

    /// Project data document path or URL.
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Recipient address for quote requests.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

fn default_data_path() -> String {
    DATA_PATH.to_string()
}

fn default_contact_email() -> String {
    "quotes@stonefront.homes".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            data_path: default_data_path(),
            contact_email: default_contact_email(),
        }
    }
}

impl SiteConfig {
    /// Resolve the config file location.
    ///
    /// Returns `None` when no explicit path is given and the platform
    /// has no config directory.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::config_dir().map(|dir| dir.join(CONFIG_RELATIVE)),
        }
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist; the default location may be absent,
    /// in which case defaults apply.
    pub fn load(explicit: Option<&str>) -> Result<SiteConfig> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            return Ok(SiteConfig::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(stonefront_core::Error::config(format!(
                    "config file not found: {}",
                    path.display()
                ))
                .into());
            }
            log::debug!("no config file at {}; using defaults", path.display());
            return Ok(SiteConfig::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// The configuration serialized as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
