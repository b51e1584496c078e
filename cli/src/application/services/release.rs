//! Application service: the launch command shared by both WildFly containers.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::LocalFs;
use crate::domain::layout::java_opts_profile;
use crate::domain::{Droplet, LaunchCommand};

/// Address the server binds its public interface to.
pub const BIND_ADDRESS: &str = "0.0.0.0";

/// Add the WildFly runtime settings to `droplet` and build the command that
/// runs `launch_script`.
///
/// The command line has the form
/// `<env vars> JAVA_HOME=$PWD/<jre> exec $PWD/<script> -b 0.0.0.0`.
///
/// # Errors
///
/// Returns an error if `launch_script` is outside the droplet.
pub fn release(droplet: &mut Droplet, launch_script: &Path) -> Result<String> {
    droplet
        .environment_variables
        .add_environment_variable("JAVA_OPTS", "$JAVA_OPTS");
    droplet
        .java_opts
        .add_system_property("jboss.http.port", "$PORT")
        .add_system_property("java.net.preferIPv4Stack", true)
        .add_system_property("java.net.preferIPv4Addresses", true);

    let script = droplet.qualify_path(launch_script)?;
    let command = LaunchCommand::new()
        .shell(droplet.environment_variables.as_env_vars())
        .shell(droplet.java_home_env_var())
        .shell("exec")
        .shell(script)
        .shell("-b")
        .literal(BIND_ADDRESS);
    Ok(command.to_command_line())
}

/// Write the accumulated JVM options to `.profile.d/java_opts.sh` in the
/// droplet, where the launch environment sources them before the command
/// runs. Nothing is written when there are no options.
///
/// # Errors
///
/// Returns an error if the script cannot be written.
pub fn write_java_opts_profile(
    fs: &impl LocalFs,
    droplet: &Droplet,
) -> Result<Option<PathBuf>> {
    if droplet.java_opts.entries().is_empty() {
        return Ok(None);
    }
    let script = java_opts_profile(&droplet.root);
    if let Some(dir) = script.parent() {
        fs.create_dir_all(dir)?;
    }
    fs.write(&script, &format!("export {}\n", droplet.java_opts.as_env_var()))?;
    Ok(Some(script))
}
