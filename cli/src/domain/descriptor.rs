//! The `wildfly-custom.yml` descriptor.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::error::DescriptorError;

/// Contents of `wildfly-custom.yml`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomArchiveDescriptor {
    /// URI of a zip whose single root folder is a WildFly server.
    #[serde(default)]
    pub archive: Option<String>,
}

/// Parse a descriptor and return its archive URI.
///
/// `origin` names the file in error messages.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or has no non-blank `archive`.
pub fn archive_uri(content: &str, origin: &str) -> Result<String> {
    let descriptor: CustomArchiveDescriptor = if content.trim().is_empty() {
        CustomArchiveDescriptor::default()
    } else {
        serde_yaml::from_str(content).with_context(|| format!("cannot parse {origin}"))?
    };
    descriptor
        .archive
        .map(|uri| uri.trim().to_string())
        .filter(|uri| !uri.is_empty())
        .ok_or_else(|| DescriptorError::MissingArchive(origin.to_string()).into())
}
