//! The uploaded application, as seen by container components.

use std::path::{Path, PathBuf};

use crate::domain::layout::{CUSTOM_DESCRIPTOR, JAR_MANIFEST, PROVISIONING_MANIFEST};

/// Read-only view of an application directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    root: PathBuf,
    configured_main_class: Option<String>,
}

impl Application {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            configured_main_class: None,
        }
    }

    /// Set a main class that takes precedence over the JAR manifest.
    #[must_use]
    pub fn with_main_class(mut self, main_class: Option<String>) -> Self {
        self.configured_main_class = main_class.filter(|m| !m.trim().is_empty());
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn configured_main_class(&self) -> Option<&str> {
        self.configured_main_class.as_deref()
    }

    #[must_use]
    pub fn provisioning_manifest(&self) -> PathBuf {
        self.root.join(PROVISIONING_MANIFEST)
    }

    #[must_use]
    pub fn custom_descriptor(&self) -> PathBuf {
        self.root.join(CUSTOM_DESCRIPTOR)
    }

    #[must_use]
    pub fn jar_manifest(&self) -> PathBuf {
        self.root.join(JAR_MANIFEST)
    }
}
