//! Custom WildFly container: installs the server archive named in
//! `wildfly-custom.yml` and copies the application's `deployments/` into it.

use anyhow::{Context, Result};

use crate::application::ports::{
    ArtifactCache, BuildPorts, CommandRunner, LocalFs, ProgressReporter,
};
use crate::application::services::{archive, release, staging};
use crate::domain::descriptor::archive_uri;
use crate::domain::layout::APP_DEPLOYMENTS_DIR;
use crate::domain::{Application, ContainerKind, Droplet, ServerLayout};

/// The unpacked archive occupies the sandbox itself.
#[must_use]
pub fn server(droplet: &Droplet) -> ServerLayout {
    ServerLayout::new(&droplet.sandbox)
}

/// Claim applications that carry `wildfly-custom.yml`. The descriptor is not
/// read here.
pub fn detect(application: &Application, fs: &impl LocalFs) -> Option<String> {
    fs.exists(&application.custom_descriptor())
        .then(|| ContainerKind::WildflyCustom.id().to_string())
}

/// Install the custom archive and copy `<app>/deployments/*` into the server.
///
/// # Errors
///
/// Returns an error if the descriptor has no archive, the download or unzip
/// fails, or the application has no `deployments` directory.
pub async fn compile<R, C, F, P>(
    application: &Application,
    droplet: &Droplet,
    ports: BuildPorts<'_, R, C, F, P>,
) -> Result<()>
where
    R: CommandRunner,
    C: ArtifactCache,
    F: LocalFs,
    P: ProgressReporter,
{
    let descriptor = application.custom_descriptor();
    let content = ports
        .fs
        .read_to_string(&descriptor)
        .with_context(|| format!("reading {}", descriptor.display()))?;
    let uri = archive_uri(&content, &descriptor.display().to_string())?;

    archive::install(ports, "custom WildFly archive", &uri, &droplet.sandbox).await?;

    let source = application.root().join(APP_DEPLOYMENTS_DIR);
    let server = server(droplet);
    ports.reporter.step("Copying application deployments");
    let deployments = ports
        .fs
        .children(&source)
        .with_context(|| format!("staging deployments from {}", source.display()))?;
    if deployments.is_empty() {
        ports.reporter.warn(&format!(
            "{} is empty; the server will start without applications",
            source.display()
        ));
    }
    staging::copy_children(ports.fs, &source, &server.deployments_dir())
        .with_context(|| format!("staging deployments from {}", source.display()))?;
    ports.reporter.success("Application deployed");
    Ok(())
}

/// Launch command for the custom server.
///
/// # Errors
///
/// Returns an error if the server lies outside the droplet.
pub fn release(droplet: &mut Droplet) -> Result<String> {
    let script = server(droplet).launch_script();
    release::release(droplet, &script)
}
