//! Galleon container: provisions WildFly from the application's
//! `WEB-INF/provisioning.xml` and deploys the application as `ROOT.war`.

use anyhow::{Context, Result};

use crate::application::ports::{
    ArtifactCache, BuildPorts, CommandRunner, LocalFs, ProgressReporter,
};
use crate::application::services::main_class::resolve_main_class;
use crate::application::services::{archive, process, release, staging};
use crate::domain::container::versioned_tag;
use crate::domain::layout::{GALLEON_SCRIPT, GALLEON_SERVER_DIR};
use crate::domain::{Application, ContainerKind, Droplet, GalleonConfig, ServerLayout};

/// The WildFly server Galleon provisions inside the sandbox.
#[must_use]
pub fn server(droplet: &Droplet) -> ServerLayout {
    ServerLayout::new(droplet.sandbox.join(GALLEON_SERVER_DIR))
}

/// Claim applications that carry a provisioning manifest and are not
/// standalone `Main-Class` programs.
pub fn detect(
    application: &Application,
    config: &GalleonConfig,
    fs: &impl LocalFs,
) -> Option<String> {
    let manifest_present = fs.exists(&application.provisioning_manifest());
    if manifest_present && resolve_main_class(application, fs).is_none() {
        Some(versioned_tag(ContainerKind::Galleon, &config.version))
    } else {
        None
    }
}

/// Install Galleon, provision WildFly, then deploy the application.
///
/// # Errors
///
/// Returns an error if any download, process, or copy fails. Staging does not
/// start once provisioning has failed.
pub async fn compile<R, C, F, P>(
    application: &Application,
    droplet: &Droplet,
    config: &GalleonConfig,
    ports: BuildPorts<'_, R, C, F, P>,
) -> Result<()>
where
    R: CommandRunner,
    C: ArtifactCache,
    F: LocalFs,
    P: ProgressReporter,
{
    archive::install(
        ports,
        &format!("Galleon {}", config.version),
        &config.download_uri(),
        &droplet.sandbox,
    )
    .await?;

    provision(application, droplet, ports).await?;

    let server = server(droplet);
    ports.reporter.step("Deploying application as ROOT.war");
    staging::stage_application(ports.fs, application, &server)?;
    staging::stage_libraries(ports.fs, &droplet.additional_libraries, &server)?;
    staging::mark_deployable(ports.fs, &server)?;
    ports.reporter.success("Application deployed");
    Ok(())
}

async fn provision<R, C, F, P>(
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
    let script = droplet.sandbox.join(GALLEON_SCRIPT);
    let manifest = application.provisioning_manifest();
    let dir_flag = format!("--dir={}", server(droplet).root().display());
    let java_home = droplet.java_home.root().to_string_lossy().into_owned();

    ports.reporter.step("Provisioning WildFly with Galleon");
    process::run_checked(
        ports.runner,
        &script.to_string_lossy(),
        &["provision", &manifest.to_string_lossy(), &dir_flag],
        &[("JAVA_HOME", java_home.as_str())],
    )
    .await
    .context("provisioning WildFly with Galleon")?;
    Ok(())
}

/// Launch command for the provisioned server.
///
/// # Errors
///
/// Returns an error if the server lies outside the droplet.
pub fn release(droplet: &mut Droplet) -> Result<String> {
    let script = server(droplet).launch_script();
    release::release(droplet, &script)
}
