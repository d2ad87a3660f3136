//! Probe configuration
//!
//! Configuration is a single `config.json` in an optional directory, with
//! serde defaults covering every field. A missing or unreadable file falls
//! back to defaults; a malformed one logs a warning and falls back too, so a
//! bad config never stops the probe from running.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Configuration for the access probe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Base URL of the server hosting the CTO layout endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl LayoutConfig {
    /// Load config from a directory's config.json
    ///
    /// `None`, a missing file, or a file that cannot be read or parsed all
    /// resolve to the built-in defaults.
    pub fn load_from_dir(dir: Option<&Path>) -> Self {
        let Some(dir) = dir else {
            return Self::default();
        };

        let config_path = dir.join("config.json");
        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", config_path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }
}
