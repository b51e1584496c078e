//! Command implementations

pub mod compile;
pub mod detect;
pub mod release;
pub mod version;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::application::ports::LocalFs;
use crate::application::services::container;
use crate::domain::layout::{BUILDPACK_DIR, DEFAULT_JRE_COMPONENT};
use crate::domain::{
    Application, ArchiveError, BuildpackConfig, ContainerError, ContainerKind, DescriptorError,
    Droplet, JavaHome, LayoutError, ProcessError,
};

/// Arguments for the detect command.
#[derive(Args)]
pub struct DetectArgs {
    /// Application directory
    pub app_dir: PathBuf,
}

/// Arguments shared by the compile and release commands.
#[derive(Args)]
pub struct StageArgs {
    /// Application directory
    pub app_dir: PathBuf,

    /// Droplet directory
    pub droplet_dir: PathBuf,

    /// Use this container instead of running detection
    #[arg(long, value_name = "galleon|wildfly-custom")]
    pub container: Option<ContainerKind>,

    /// JRE root [default: <DROPLET_DIR>/.java-buildpack/open_jdk_jre]
    #[arg(long, value_name = "PATH")]
    pub java_home: Option<PathBuf>,

    /// Environment variable for the launch command (repeatable)
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_env_entry)]
    pub env: Vec<String>,

    /// Library to add to the deployment's WEB-INF/lib (repeatable)
    #[arg(long = "additional-library", value_name = "PATH")]
    pub additional_libraries: Vec<PathBuf>,
}

impl StageArgs {
    /// The application, with the configured main class applied.
    #[must_use]
    pub fn application(&self, config: &BuildpackConfig) -> Application {
        Application::new(&self.app_dir).with_main_class(config.java_main_class.clone())
    }

    /// The forced container, or the single one detection selects.
    ///
    /// # Errors
    ///
    /// Returns an error when detection finds zero or several containers.
    pub fn container(
        &self,
        application: &Application,
        config: &BuildpackConfig,
        fs: &impl LocalFs,
    ) -> Result<ContainerKind> {
        match self.container {
            Some(kind) => Ok(kind),
            None => Ok(container::select(application, config, fs)?.kind),
        }
    }

    /// The droplet as seen by `kind`, populated from the command line.
    #[must_use]
    pub fn droplet(&self, kind: ContainerKind) -> Droplet {
        let java_home = self.java_home.clone().unwrap_or_else(|| {
            self.droplet_dir
                .join(BUILDPACK_DIR)
                .join(DEFAULT_JRE_COMPONENT)
        });
        let mut droplet = Droplet::new(&self.droplet_dir, kind.name(), JavaHome::new(java_home));
        for entry in &self.env {
            droplet.environment_variables.push_raw(entry.as_str());
        }
        droplet
            .additional_libraries
            .extend(self.additional_libraries.iter().cloned());
        droplet
    }
}

fn parse_env_entry(raw: &str) -> Result<String, String> {
    match raw.split_once('=') {
        Some((key, _)) if !key.is_empty() => Ok(raw.to_string()),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Stable machine-readable code for a failure, used in JSON error objects.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ContainerError>() {
            return match e {
                ContainerError::NoneApplicable(_) => "NO_CONTAINER",
                ContainerError::Ambiguous(_) => "AMBIGUOUS_CONTAINER",
                ContainerError::Unknown(_) => "UNKNOWN_CONTAINER",
            };
        }
        if cause.downcast_ref::<ProcessError>().is_some() {
            return "PROCESS_FAILED";
        }
        if cause.downcast_ref::<ArchiveError>().is_some() {
            return "INVALID_ARCHIVE";
        }
        if cause.downcast_ref::<DescriptorError>().is_some() {
            return "INVALID_DESCRIPTOR";
        }
        if cause.downcast_ref::<LayoutError>().is_some() {
            return "INVALID_LAYOUT";
        }
    }
    "ERROR"
}
