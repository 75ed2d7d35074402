//! GitHub Release Event
//!
//! Only the fields of the event document the publisher needs.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::error::PublishError;

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEvent {
    pub release: Release,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Changelog text (GitHub sends null for an empty description)
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
}

impl Release {
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

impl ReleaseEvent {
    /// Read and parse the event document at `path`
    pub fn load(path: &Path) -> Result<Self, PublishError> {
        debug!("Reading event document: {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|e| PublishError::EventDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| PublishError::EventDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Tag to prefix the changelog with: the git ref when set, else the release tag
    pub fn tag<'a>(&'a self, git_ref: &'a str) -> &'a str {
        if !git_ref.trim().is_empty() {
            return git_ref;
        }
        self.release.tag_name.as_deref().unwrap_or_default()
    }
}
