//! Detect command

use anyhow::Result;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::ports::LocalFs;
use crate::application::services::container;
use crate::commands::DetectArgs;
use crate::domain::Application;
use crate::output::json;

#[derive(Serialize)]
struct DetectOutput<'a> {
    container: &'a str,
    tag: &'a str,
}

/// Run the detect command.
///
/// Prints the winning container's tag. Exits non-zero through the returned
/// error when no container, or more than one, claims the application.
///
/// # Errors
///
/// Returns an error if `app_dir` is not a directory or selection fails.
pub fn run(app: &AppContext, args: &DetectArgs) -> Result<()> {
    anyhow::ensure!(
        app.fs.is_dir(&args.app_dir),
        "{} is not a directory",
        args.app_dir.display()
    );
    let application =
        Application::new(&args.app_dir).with_main_class(app.config.java_main_class.clone());
    let claim = container::select(&application, &app.config, &app.fs)?;

    if app.is_json() {
        json::print(&DetectOutput {
            container: claim.kind.id(),
            tag: &claim.tag,
        })
    } else {
        println!("{}", claim.tag);
        Ok(())
    }
}
