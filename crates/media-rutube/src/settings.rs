//! Plugin settings
//!
//! The only setting is the no-cookie switch. Hosts either implement
//! [`SettingsProvider`] over their own configuration store or load a
//! [`RutubeSettings`] JSON document.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source of plugin configuration flags
#[cfg_attr(test, mockall::automock)]
pub trait SettingsProvider {
    /// Whether embeds use the no-cookie domain
    fn no_cookie(&self) -> bool;
}

/// Settings for the RuTube media plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RutubeSettings {
    /// Embed from the no-cookie domain
    #[serde(default)]
    pub nocookie: bool,
}

impl RutubeSettings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    ///
    /// A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl SettingsProvider for RutubeSettings {
    fn no_cookie(&self) -> bool {
        self.nocookie
    }
}
