//! Application service: stage application content into a server's
//! deployment directory and mark it ready.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;
use crate::domain::{Application, ServerLayout};

/// Copy every entry of `source_dir` into `target_dir`.
///
/// An entry that contains `target_dir` is skipped, so staging an application
/// whose root also holds the droplet never copies the server into itself.
///
/// # Errors
///
/// Returns an error if `source_dir` cannot be listed or any copy fails.
pub fn copy_children(fs: &impl LocalFs, source_dir: &Path, target_dir: &Path) -> Result<()> {
    let children = fs
        .children(source_dir)
        .with_context(|| format!("listing {}", source_dir.display()))?;
    fs.create_dir_all(target_dir)?;
    for child in children {
        if target_dir.starts_with(&child) {
            continue;
        }
        copy_into(fs, &child, target_dir)?;
    }
    Ok(())
}

fn copy_into(fs: &impl LocalFs, source: &Path, dir: &Path) -> Result<()> {
    let name = source
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("{} has no file name", source.display()))?;
    fs.copy_recursive(source, &dir.join(name))
}

/// Copy the application tree into `ROOT.war`.
///
/// # Errors
///
/// Returns an error if any copy fails.
pub fn stage_application(
    fs: &impl LocalFs,
    application: &Application,
    server: &ServerLayout,
) -> Result<()> {
    copy_children(fs, application.root(), &server.deployment_unit())
}

/// Copy additional libraries into `ROOT.war/WEB-INF/lib`.
///
/// # Errors
///
/// Returns an error if a library is missing or cannot be copied.
pub fn stage_libraries(
    fs: &impl LocalFs,
    libraries: &[PathBuf],
    server: &ServerLayout,
) -> Result<()> {
    let lib_dir = server.web_inf_lib();
    fs.create_dir_all(&lib_dir)?;
    for library in libraries {
        copy_into(fs, library, &lib_dir)
            .with_context(|| format!("staging library {}", library.display()))?;
    }
    Ok(())
}

/// Create `ROOT.war.dodeploy`. Call only after all content is in place.
///
/// # Errors
///
/// Returns an error if the marker cannot be written.
pub fn mark_deployable(fs: &impl LocalFs, server: &ServerLayout) -> Result<()> {
    fs.touch(&server.dodeploy_marker())
}
