//! Compile command

use anyhow::{Context, Result};
use serde::Serialize;

use crate::app::AppContext;
use crate::application::ports::{BuildPorts, LocalFs};
use crate::application::services::container;
use crate::commands::StageArgs;
use crate::output::json;

#[derive(Serialize)]
struct CompileOutput<'a> {
    container: &'a str,
    sandbox: String,
}

/// Run the compile command.
///
/// # Errors
///
/// Returns an error if container selection or any compile step fails.
pub async fn run(app: &AppContext, args: &StageArgs) -> Result<()> {
    anyhow::ensure!(
        app.fs.is_dir(&args.app_dir),
        "{} is not a directory",
        args.app_dir.display()
    );
    let application = args.application(&app.config);
    let kind = args.container(&application, &app.config, &app.fs)?;
    let droplet = args.droplet(kind);

    let reporter = app.reporter();
    let ports = BuildPorts {
        runner: &app.runner,
        cache: &app.cache,
        fs: &app.fs,
        reporter: &reporter,
    };
    container::compile(kind, &application, &droplet, &app.config, ports)
        .await
        .with_context(|| format!("{kind} compile failed"))?;

    if app.is_json() {
        json::print(&CompileOutput {
            container: kind.id(),
            sandbox: droplet.sandbox.display().to_string(),
        })?;
    }
    Ok(())
}
