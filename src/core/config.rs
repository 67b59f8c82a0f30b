//! # Configuration
//!
//! Targeting profile: the weapon range and the safety buffer kept around
//! ourselves and around friendlies.
//!
//! Nothing here is a hidden global. Callers build a profile (or load one
//! from JSON) and pass it where it's needed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Distance;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a targeting profile
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed targeting profile: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Targeting parameters
///
/// Radii are taken as given. Negative values are not rejected or clamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    /// Maximum engagement distance
    pub range: Distance,

    /// Safety buffer around ourselves and each friendly
    pub minimum_distance: Distance,
}

impl TargetingConfig {
    /// Create a profile with the given range and default safety buffer
    pub fn new(range: Distance) -> Self {
        Self {
            range,
            ..Self::default()
        }
    }

    /// Set the engagement range
    pub fn with_range(mut self, range: Distance) -> Self {
        self.range = range;
        self
    }

    /// Set the safety buffer
    pub fn with_minimum_distance(mut self, minimum_distance: Distance) -> Self {
        self.minimum_distance = minimum_distance;
        self
    }

    /// Parse a profile from JSON
    ///
    /// Missing fields fall back to [`TargetingConfig::default`].
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this profile as pretty JSON
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a profile from a JSON file
    ///
    /// A leading `~/` is expanded to the home directory.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = expand_path(path.as_ref());
        let json = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "loaded targeting profile");
        Ok(config)
    }
}

impl Default for TargetingConfig {
    /// Default profile: range 10, safety buffer 2
    fn default() -> Self {
        Self {
            range: 10.0,
            minimum_distance: 2.0,
        }
    }
}

/// Expand a leading `~/` to the user's home directory
pub fn expand_path(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
