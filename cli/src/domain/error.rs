//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Container selection errors ────────────────────────────────────────────────

/// Errors raised while choosing which container handles an application.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("No container recognised the application at {0}")]
    NoneApplicable(String),

    #[error("Application is claimed by more than one container: {}", .0.join(", "))]
    Ambiguous(Vec<String>),

    #[error("Unknown container '{0}'. Valid containers: galleon, wildfly-custom")]
    Unknown(String),
}

// ── External process errors ───────────────────────────────────────────────────

/// An external tool ran but reported failure.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{program} failed with {status}: {stderr}")]
    NonZeroExit {
        program: String,
        status: String,
        stderr: String,
    },
}

// ── Archive errors ────────────────────────────────────────────────────────────

/// Errors about the shape of an unpacked distribution archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Archive {0} is empty")]
    Empty(String),

    #[error("Archive {archive} has {count} top-level entries; expected a single root folder")]
    MultipleRoots { archive: String, count: usize },

    #[error("Archive {0} does not contain a root folder")]
    NotADirectory(String),
}

// ── Descriptor errors ─────────────────────────────────────────────────────────

/// Errors in the `wildfly-custom.yml` descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("{0} does not name an archive. Add an 'archive: <uri>' entry.")]
    MissingArchive(String),
}

// ── Droplet layout errors ─────────────────────────────────────────────────────

/// Errors when a path must live inside the droplet but does not.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("{path} is not inside the droplet at {root}")]
    OutsideDroplet { path: String, root: String },
}
