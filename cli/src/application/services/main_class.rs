//! Application service: find the application's `Main-Class`, if any.

use crate::application::ports::LocalFs;
use crate::domain::{manifest, Application};

/// The configured main class, else `Main-Class` from `META-INF/MANIFEST.MF`.
///
/// A missing or unreadable manifest yields `None`.
pub fn resolve_main_class(application: &Application, fs: &impl LocalFs) -> Option<String> {
    if let Some(configured) = application.configured_main_class() {
        return Some(configured.to_string());
    }
    let path = application.jar_manifest();
    if !fs.exists(&path) {
        return None;
    }
    fs.read_to_string(&path)
        .ok()
        .and_then(|content| manifest::main_class(&content))
}
