//! wildfly-buildpack: WildFly containers for a Java application buildpack

use std::process::ExitCode;

use clap::Parser;

use wildfly_buildpack::cli::Cli;
use wildfly_buildpack::commands::error_code;
use wildfly_buildpack::output::json::format_error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;
    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{e:#}");
            match format_error(&message, error_code(&e)) {
                Ok(out) if json => println!("{out}"),
                _ => eprintln!("Error: {message}"),
            }
            ExitCode::FAILURE
        }
    }
}
