//! Application service: fetch a distribution archive and unpack it with its
//! root folder stripped.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use crate::application::ports::{
    ArtifactCache, BuildPorts, CachedArtifact, CommandRunner, LocalFs, ProgressReporter,
};
use crate::application::services::process::run_checked;
use crate::domain::download::{format_duration, sanitize_uri};
use crate::domain::error::ArchiveError;

const UNZIP: &str = "unzip";

/// Fetch `uri` through the cache, reporting how long it took or that it was
/// already cached.
///
/// # Errors
///
/// Returns an error if the cache cannot produce the artifact.
pub async fn download(
    cache: &impl ArtifactCache,
    reporter: &impl ProgressReporter,
    name: &str,
    uri: &str,
) -> Result<CachedArtifact> {
    let shown = sanitize_uri(uri);
    let started = Instant::now();
    reporter.step(&format!("Downloading {name} from {shown}"));

    let artifact = cache
        .get(uri)
        .await
        .with_context(|| format!("downloading {name} from {shown}"))?;

    if artifact.downloaded {
        reporter.success(&format!(
            "Downloaded {name} ({})",
            format_duration(started.elapsed())
        ));
    } else {
        reporter.success(&format!("Using {name} (found in cache)"));
    }
    Ok(artifact)
}

/// Unzip `archive` and move its single root folder to `target`.
///
/// Extraction happens in a scratch directory next to `target`; the scratch
/// directory is removed on every return path.
///
/// # Errors
///
/// Returns an error if `unzip` fails, the archive does not have exactly one
/// root folder, or the move fails.
pub async fn expand_stripped(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    archive: &Path,
    target: &Path,
) -> Result<()> {
    let parent = target
        .parent()
        .ok_or_else(|| anyhow::anyhow!("{} has no parent directory", target.display()))?;
    fs.create_dir_all(parent)?;
    let scratch = fs.scoped_temp_dir(parent)?;

    run_checked(
        runner,
        UNZIP,
        &[
            "-qq",
            &archive.to_string_lossy(),
            "-d",
            &scratch.path().to_string_lossy(),
        ],
        &[],
    )
    .await
    .with_context(|| format!("expanding {}", archive.display()))?;

    let root = single_root(fs, scratch.path(), archive)?;
    fs.rename(&root, target)
}

fn single_root(fs: &impl LocalFs, dir: &Path, archive: &Path) -> Result<PathBuf> {
    let mut entries = fs.children(dir)?;
    match entries.len() {
        0 => Err(ArchiveError::Empty(archive.display().to_string()).into()),
        1 => {
            let root = entries.remove(0);
            if fs.is_dir(&root) {
                Ok(root)
            } else {
                Err(ArchiveError::NotADirectory(archive.display().to_string()).into())
            }
        }
        count => Err(ArchiveError::MultipleRoots {
            archive: archive.display().to_string(),
            count,
        }
        .into()),
    }
}

/// Download `uri` and install its contents at `target`.
///
/// # Errors
///
/// Returns an error if either the download or the expansion fails.
pub async fn install<R, C, F, P>(
    ports: BuildPorts<'_, R, C, F, P>,
    name: &str,
    uri: &str,
    target: &Path,
) -> Result<()>
where
    R: CommandRunner,
    C: ArtifactCache,
    F: LocalFs,
    P: ProgressReporter,
{
    let artifact = download(ports.cache, ports.reporter, name, uri).await?;
    ports
        .reporter
        .step(&format!("Expanding {name} to {}", target.display()));
    expand_stripped(ports.runner, ports.fs, &artifact.path, target).await
}
