//! Application service: run an external tool and treat failure as fatal.

use std::process::Output;

use anyhow::Result;

use crate::application::ports::CommandRunner;
use crate::domain::error::ProcessError;

/// Run `program` and turn a non-zero exit into [`ProcessError::NonZeroExit`].
///
/// Extra environment variables are passed only when `env` is non-empty.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned or exits unsuccessfully.
pub async fn run_checked(
    runner: &impl CommandRunner,
    program: &str,
    args: &[&str],
    env: &[(&str, &str)],
) -> Result<Output> {
    let output = if env.is_empty() {
        runner.run(program, args).await?
    } else {
        runner.run_with_env(program, args, env).await?
    };
    ensure_success(program, output)
}

/// Pass a successful `Output` through; convert anything else into an error.
///
/// # Errors
///
/// Returns [`ProcessError::NonZeroExit`] when the exit status is not success.
pub fn ensure_success(program: &str, output: Output) -> Result<Output> {
    if output.status.success() {
        return Ok(output);
    }
    let status = match output.status.code() {
        Some(code) => format!("exit status {code}"),
        None => "a signal".to_string(),
    };
    // Tools such as unzip report on stdout; use it when stderr is silent.
    let stream = if output.stderr.iter().all(u8::is_ascii_whitespace) {
        &output.stdout
    } else {
        &output.stderr
    };
    Err(ProcessError::NonZeroExit {
        program: program.to_string(),
        status,
        stderr: String::from_utf8_lossy(stream).trim().to_string(),
    }
    .into())
}
