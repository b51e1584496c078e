//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;
use tempfile::TempDir;

use crate::domain::BuildpackConfig;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// Implementations block until the process exits and never impose a timeout.
/// A non-zero exit is reported through `Output::status`, not as an `Err`.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with extra environment variables on top of the
    /// inherited environment.
    async fn run_with_env(
        &self,
        program: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> Result<Output>;
}

// ── Artifact Cache Port ───────────────────────────────────────────────────────

/// A cached copy of a remote artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedArtifact {
    /// Local file holding the artifact bytes.
    pub path: PathBuf,
    /// `true` if this call fetched it over the network.
    pub downloaded: bool,
}

/// Content cache keyed by URI.
#[allow(async_fn_in_trait)]
pub trait ArtifactCache {
    /// Return a local copy of `uri`, fetching it on a miss.
    async fn get(&self, uri: &str) -> Result<CachedArtifact>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the filesystem operations containers perform.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Create or replace a file with `contents`.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
    /// Entries directly under `dir`, sorted by name.
    fn children(&self, dir: &Path) -> Result<Vec<PathBuf>>;
    /// Deep-copy a file, symlink, or directory tree to `to`.
    fn copy_recursive(&self, from: &Path, to: &Path) -> Result<()>;
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
    /// Create an empty file, or update the timestamp of an existing one.
    fn touch(&self, path: &Path) -> Result<()>;
    /// Create a temporary directory under `parent` that is removed when the
    /// returned guard drops.
    fn scoped_temp_dir(&self, parent: &Path) -> Result<TempDir>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading buildpack configuration.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when no file exists.
    fn load(&self) -> Result<BuildpackConfig>;
    /// The file this store reads.
    fn path(&self) -> Result<PathBuf>;
}

// ── Port bundle ───────────────────────────────────────────────────────────────

/// The collaborators a container needs during `compile`.
pub struct BuildPorts<'a, R, C, F, P> {
    pub runner: &'a R,
    pub cache: &'a C,
    pub fs: &'a F,
    pub reporter: &'a P,
}

impl<R, C, F, P> Clone for BuildPorts<'_, R, C, F, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, C, F, P> Copy for BuildPorts<'_, R, C, F, P> {}
