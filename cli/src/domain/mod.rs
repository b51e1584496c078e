//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod application;
pub mod command;
pub mod config;
pub mod container;
pub mod descriptor;
pub mod download;
pub mod droplet;
pub mod error;
pub mod layout;
pub mod manifest;

pub use application::Application;
pub use command::LaunchCommand;
pub use config::{BuildpackConfig, CacheConfig, GalleonConfig};
pub use container::{Claim, ContainerKind};
pub use droplet::{Droplet, EnvironmentVariables, JavaHome, JavaOpts};
pub use error::{ArchiveError, ContainerError, DescriptorError, LayoutError, ProcessError};
pub use layout::ServerLayout;
