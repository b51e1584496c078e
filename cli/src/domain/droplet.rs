//! Droplet model: the staged bundle a container installs into.
//!
//! This module is free of I/O, async, and external layer imports.
//! The accumulators mirror what the host buildpack exposes to its components:
//! an ordered list of environment assignments, an ordered list of JVM options,
//! a Java home, and the extra libraries to ship with the application.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::domain::error::LayoutError;
use crate::domain::layout::sandbox_dir;

/// Prefix that makes a droplet-relative path resolve at launch time.
const PWD_PREFIX: &str = "$PWD";

// ── Environment variables ─────────────────────────────────────────────────────

/// Ordered environment assignments emitted in front of the launch command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentVariables {
    entries: Vec<String>,
}

impl EnvironmentVariables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value`.
    pub fn add_environment_variable(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.entries.push(format!("{key}={value}"));
        self
    }

    /// Append an entry exactly as the host supplied it.
    pub fn push_raw(&mut self, entry: impl Into<String>) -> &mut Self {
        self.entries.push(entry.into());
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// All entries joined by single spaces.
    #[must_use]
    pub fn as_env_vars(&self) -> String {
        self.entries.join(" ")
    }
}

// ── JVM options ───────────────────────────────────────────────────────────────

/// Ordered JVM options (`-D` system properties and raw flags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaOpts {
    entries: Vec<String>,
}

impl JavaOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `-Dkey=value`. Chainable.
    pub fn add_system_property(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.entries.push(format!("-D{key}={value}"));
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// `JAVA_OPTS="$JAVA_OPTS <options>"`, appending to the inherited value.
    #[must_use]
    pub fn as_env_var(&self) -> String {
        let mut words = vec!["$JAVA_OPTS"];
        words.extend(self.entries.iter().map(String::as_str));
        format!("JAVA_OPTS=\"{}\"", words.join(" "))
    }
}

// ── Java home ─────────────────────────────────────────────────────────────────

/// Location of the JRE the server runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaHome {
    root: PathBuf,
}

impl JavaHome {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

// ── Droplet ───────────────────────────────────────────────────────────────────

/// The droplet as seen by a single container component.
#[derive(Debug, Clone)]
pub struct Droplet {
    /// Droplet root; becomes `$PWD` when the application starts.
    pub root: PathBuf,
    /// This component's private install directory.
    pub sandbox: PathBuf,
    pub java_home: JavaHome,
    pub environment_variables: EnvironmentVariables,
    pub java_opts: JavaOpts,
    /// Extra JARs to ship inside the deployment's `WEB-INF/lib`.
    pub additional_libraries: Vec<PathBuf>,
}

impl Droplet {
    /// Create a droplet view for `component` with empty accumulators.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, component: &str, java_home: JavaHome) -> Self {
        let root = root.into();
        Self {
            sandbox: sandbox_dir(&root, component),
            root,
            java_home,
            environment_variables: EnvironmentVariables::new(),
            java_opts: JavaOpts::new(),
            additional_libraries: Vec::new(),
        }
    }

    /// Express `path` as `$PWD/<path relative to the droplet root>`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::OutsideDroplet`] if `path` is not under the root.
    pub fn qualify_path(&self, path: &Path) -> Result<String, LayoutError> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| LayoutError::OutsideDroplet {
                path: path.display().to_string(),
                root: self.root.display().to_string(),
            })?;
        Ok(format!("{PWD_PREFIX}/{}", relative.display()))
    }

    /// `JAVA_HOME=...`, droplet-relative when the JRE lives inside the droplet.
    #[must_use]
    pub fn java_home_env_var(&self) -> String {
        let root = self.java_home.root();
        let value = self
            .qualify_path(root)
            .unwrap_or_else(|_| root.display().to_string());
        format!("JAVA_HOME={value}")
    }
}
