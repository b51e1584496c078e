//! Release command

use anyhow::{Context, Result};
use serde::Serialize;

use crate::app::AppContext;
use crate::application::services::{container, release};
use crate::commands::StageArgs;
use crate::output::json;

#[derive(Serialize)]
struct ReleaseYaml {
    default_process_types: ProcessTypes,
}

#[derive(Serialize)]
struct ProcessTypes {
    web: String,
}

#[derive(Serialize)]
struct ReleaseOutput<'a> {
    container: &'a str,
    command: &'a str,
    java_opts: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<String>,
}

/// Run the release command.
///
/// Writes the JVM options the container added to the droplet's
/// `.profile.d/java_opts.sh`, then prints the buildpack release YAML (or, in
/// JSON mode, the command, the options, and the script path).
///
/// # Errors
///
/// Returns an error if container selection fails, the server is outside
/// the droplet, or the profile script cannot be written.
pub fn run(app: &AppContext, args: &StageArgs) -> Result<()> {
    let application = args.application(&app.config);
    let kind = args.container(&application, &app.config, &app.fs)?;
    let mut droplet = args.droplet(kind);
    let command = container::release(kind, &mut droplet)?;
    let profile = release::write_java_opts_profile(&app.fs, &droplet)?;

    if app.is_json() {
        return json::print(&ReleaseOutput {
            container: kind.id(),
            command: &command,
            java_opts: droplet.java_opts.entries(),
            profile: profile.map(|p| p.display().to_string()),
        });
    }

    let yaml = serde_yaml::to_string(&ReleaseYaml {
        default_process_types: ProcessTypes { web: command },
    })
    .context("cannot serialize release")?;
    print!("{yaml}");
    Ok(())
}
