//! Domain types for buildpack configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_GALLEON_VERSION: &str = "6.0.3.Final";
pub const DEFAULT_GALLEON_URI: &str =
    "https://github.com/wildfly/galleon/releases/download/{version}/galleon-{version}.zip";

const VERSION_PLACEHOLDER: &str = "{version}";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.wildfly-buildpack/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BuildpackConfig {
    /// Galleon tool dependency.
    pub galleon: GalleonConfig,
    /// Download cache settings.
    pub cache: CacheConfig,
    /// Main class override; an application with a main class is not a
    /// Galleon application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_main_class: Option<String>,
}

/// Which Galleon release to install and where to fetch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleonConfig {
    #[serde(default = "default_galleon_version")]
    pub version: String,
    /// Download URI; `{version}` is replaced with `version`.
    #[serde(default = "default_galleon_uri")]
    pub uri: String,
}

impl Default for GalleonConfig {
    fn default() -> Self {
        Self {
            version: default_galleon_version(),
            uri: default_galleon_uri(),
        }
    }
}

impl GalleonConfig {
    /// The download URI with the version substituted.
    #[must_use]
    pub fn download_uri(&self) -> String {
        self.uri.replace(VERSION_PLACEHOLDER, &self.version)
    }
}

/// Download cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheConfig {
    /// Cache directory. Falls back to `WILDFLY_BUILDPACK_CACHE`, then the
    /// platform cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

fn default_galleon_version() -> String {
    DEFAULT_GALLEON_VERSION.to_string()
}

fn default_galleon_uri() -> String {
    DEFAULT_GALLEON_URI.to_string()
}

// ── Unit tests ───────────────────────────────────────────────────────────────
