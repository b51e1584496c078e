//! Application service: run detection across every container and dispatch
//! the lifecycle phases to the selected one.

use anyhow::Result;

use crate::application::ports::{
    ArtifactCache, BuildPorts, CommandRunner, LocalFs, ProgressReporter,
};
use crate::application::services::{galleon, wildfly_custom};
use crate::domain::container::select_winner;
use crate::domain::{Application, BuildpackConfig, Claim, ContainerKind, Droplet};

/// Detection tag for `kind`, or `None` when it does not apply.
pub fn detect(
    kind: ContainerKind,
    application: &Application,
    config: &BuildpackConfig,
    fs: &impl LocalFs,
) -> Option<String> {
    match kind {
        ContainerKind::Galleon => galleon::detect(application, &config.galleon, fs),
        ContainerKind::WildflyCustom => wildfly_custom::detect(application, fs),
    }
}

/// Every container that claims the application, in detection order.
pub fn detect_all(
    application: &Application,
    config: &BuildpackConfig,
    fs: &impl LocalFs,
) -> Vec<Claim> {
    ContainerKind::ALL
        .into_iter()
        .filter_map(|kind| {
            detect(kind, application, config, fs).map(|tag| Claim { kind, tag })
        })
        .collect()
}

/// The single container that claims the application.
///
/// # Errors
///
/// Returns an error when no container or more than one container applies.
pub fn select(
    application: &Application,
    config: &BuildpackConfig,
    fs: &impl LocalFs,
) -> Result<Claim> {
    let claims = detect_all(application, config, fs);
    Ok(select_winner(
        claims,
        &application.root().display().to_string(),
    )?)
}

/// Run `compile` for `kind`.
///
/// # Errors
///
/// Propagates any failure from the container.
pub async fn compile<R, C, F, P>(
    kind: ContainerKind,
    application: &Application,
    droplet: &Droplet,
    config: &BuildpackConfig,
    ports: BuildPorts<'_, R, C, F, P>,
) -> Result<()>
where
    R: CommandRunner,
    C: ArtifactCache,
    F: LocalFs,
    P: ProgressReporter,
{
    match kind {
        ContainerKind::Galleon => {
            galleon::compile(application, droplet, &config.galleon, ports).await
        }
        ContainerKind::WildflyCustom => wildfly_custom::compile(application, droplet, ports).await,
    }
}

/// Run `release` for `kind` and return the launch command.
///
/// # Errors
///
/// Propagates any failure from the container.
pub fn release(kind: ContainerKind, droplet: &mut Droplet) -> Result<String> {
    match kind {
        ContainerKind::Galleon => galleon::release(droplet),
        ContainerKind::WildflyCustom => wildfly_custom::release(droplet),
    }
}
