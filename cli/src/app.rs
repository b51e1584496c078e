//! Application context: unified state passed to every command handler.
//!
//! Built once in `Cli::run()` from the global flags and the configuration
//! file, then handed to command handlers as `&AppContext`.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::BuildpackConfig;
use crate::infra::cache::{DownloadCache, cache_dir};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::fs::HostFs;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Loaded buildpack configuration.
    pub config: BuildpackConfig,
    /// External process runner.
    pub runner: TokioCommandRunner,
    /// Download cache.
    pub cache: DownloadCache,
    /// Host filesystem.
    pub fs: HostFs,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be parsed or no
    /// cache directory can be determined.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        // JSON mode reserves stdout for the result object.
        let output = OutputContext::new(
            flags.output.no_color,
            flags.output.quiet || flags.output.json,
        );
        let config = YamlConfigStore::new(flags.config.clone()).load()?;
        let cache = DownloadCache::new(cache_dir(&config.cache)?, !output.show_progress());

        Ok(Self {
            output,
            mode,
            config,
            runner: TokioCommandRunner::new(),
            cache,
            fs: HostFs,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Progress reporter writing to this context's terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
