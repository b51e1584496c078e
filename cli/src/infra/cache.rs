//! Download cache: implements the `ArtifactCache` port.
//!
//! Each entry is stored under the SHA-256 of its URI:
//!
//! ```text
//! <cache dir>/<key>.cached    artifact bytes
//! <cache dir>/<key>.json      metadata (sanitised uri, sha256, download time)
//! <cache dir>/<key>.partial   in-flight download, renamed on completion
//! ```

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ArtifactCache, CachedArtifact};
use crate::domain::CacheConfig;
use crate::domain::download::{cache_key, sanitize_uri};
use crate::infra::fs::sha256_file;

/// Environment variable overriding the cache directory.
pub const CACHE_DIR_ENV: &str = "WILDFLY_BUILDPACK_CACHE";

const FILE_SCHEME: &str = "file://";

/// Metadata written next to each cached artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    pub uri: String,
    pub sha256: String,
    pub downloaded_at: DateTime<Utc>,
}

/// Resolve the cache directory: `cache.dir` from config, then
/// `WILDFLY_BUILDPACK_CACHE`, then the platform cache directory.
///
/// # Errors
///
/// Returns an error if no platform cache directory can be determined.
pub fn cache_dir(config: &CacheConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var(CACHE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::cache_dir()
        .map(|d| d.join("wildfly-buildpack"))
        .ok_or_else(|| anyhow::anyhow!("cannot determine cache directory"))
}

/// Filesystem-backed `ArtifactCache` that fetches misses over HTTP(S).
#[derive(Debug, Clone)]
pub struct DownloadCache {
    dir: PathBuf,
    quiet: bool,
}

impl DownloadCache {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, quiet: bool) -> Self {
        Self {
            dir: dir.into(),
            quiet,
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry(&self, key: &str, extension: &str) -> PathBuf {
        self.dir.join(format!("{key}.{extension}"))
    }

    /// Metadata for `uri`, or `None` when it has never been cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata file exists but cannot be parsed.
    pub fn metadata(&self, uri: &str) -> Result<Option<CacheMetadata>> {
        let path = self.entry(&cache_key(uri), "json");
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let meta =
            serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(meta))
    }

    fn fetch(&self, uri: &str) -> Result<CachedArtifact> {
        let key = cache_key(uri);
        let cached = self.entry(&key, "cached");

        if cached.is_file() && self.is_intact(uri, &cached) {
            return Ok(CachedArtifact {
                path: cached,
                downloaded: false,
            });
        }

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating cache directory {}", self.dir.display()))?;
        let partial = self.entry(&key, "partial");
        if let Some(local) = local_path(uri) {
            std::fs::copy(&local, &partial)
                .with_context(|| format!("copying {} into the cache", local.display()))?;
        } else {
            download(uri, &partial, self.quiet)?;
        }

        let sha256 = sha256_file(&partial)?;
        std::fs::rename(&partial, &cached)
            .with_context(|| format!("finalizing {}", cached.display()))?;
        self.write_metadata(
            &key,
            &CacheMetadata {
                uri: sanitize_uri(uri),
                sha256,
                downloaded_at: Utc::now(),
            },
        )?;
        Ok(CachedArtifact {
            path: cached,
            downloaded: true,
        })
    }

    /// An entry without metadata predates checksums and is trusted as is.
    fn is_intact(&self, uri: &str, cached: &Path) -> bool {
        match self.metadata(uri) {
            Ok(Some(meta)) => sha256_file(cached).is_ok_and(|actual| actual == meta.sha256),
            Ok(None) => true,
            Err(_) => false,
        }
    }

    fn write_metadata(&self, key: &str, meta: &CacheMetadata) -> Result<()> {
        let path = self.entry(key, "json");
        let content = serde_json::to_string_pretty(meta).context("serializing cache metadata")?;
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))
    }
}

impl ArtifactCache for DownloadCache {
    async fn get(&self, uri: &str) -> Result<CachedArtifact> {
        let cache = self.clone();
        let uri = uri.to_string();
        tokio::task::spawn_blocking(move || cache.fetch(&uri))
            .await
            .context("spawn_blocking for cache fetch")?
    }
}

/// `file://` URIs and bare paths are read from disk.
fn local_path(uri: &str) -> Option<PathBuf> {
    if let Some(path) = uri.strip_prefix(FILE_SCHEME) {
        return Some(PathBuf::from(path));
    }
    (!uri.contains("://")).then(|| PathBuf::from(uri))
}

// ── Download ─────────────────────────────────────────────────────────────────

fn download(uri: &str, partial: &Path, quiet: bool) -> Result<()> {
    let shown = sanitize_uri(uri);
    let response = match ureq::get(uri).call() {
        Ok(r) => r,
        Err(ureq::Error::Status(code, _)) => {
            anyhow::bail!("Download of {shown} failed: HTTP {code}")
        }
        Err(e) => return Err(e).with_context(|| format!("downloading {shown}")),
    };

    let total = response
        .header("Content-Length")
        .and_then(|v| v.parse::<u64>().ok());
    let pb = make_progress_bar(quiet, total);

    let mut file =
        File::create(partial).with_context(|| format!("creating {}", partial.display()))?;
    let mut reader = response.into_reader();
    let mut buf = vec![0u8; 64 * 1024];
    loop {
        let n = reader
            .read(&mut buf)
            .with_context(|| format!("Download of {shown} interrupted"))?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])
            .with_context(|| format!("writing {}", partial.display()))?;
        pb.inc(n as u64);
    }
    pb.finish_and_clear();
    file.flush()
        .with_context(|| format!("writing {}", partial.display()))?;
    Ok(())
}

fn make_progress_bar(quiet: bool, total: Option<u64>) -> indicatif::ProgressBar {
    if quiet {
        return indicatif::ProgressBar::hidden();
    }
    if let Some(t) = total {
        let pb = indicatif::ProgressBar::new(t);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("       [{bar:40}] {percent}%")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        pb
    } else {
        indicatif::ProgressBar::new_spinner()
    }
}
