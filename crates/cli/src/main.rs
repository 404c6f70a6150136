//! Query BigQuery and print the protobuf messages in the result.
//!
//! With no arguments, runs the built-in query against the built-in project.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use protobuf_export_cli::{run, Command, Context};
use protobuf_export_configuration::environment::ProcessEnvironment;

#[derive(Parser)]
#[command(name = "protobuf-export", about = "Print protobuf messages stored in BigQuery")]
struct Cli {
    /// Directory containing configuration.json.
    #[arg(long, env = "PROTOBUF_EXPORT_CONFIGURATION")]
    configuration: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries the results only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let context = Context {
        context_path: cli.configuration,
        environment: ProcessEnvironment,
    };
    let command = cli.command.unwrap_or(Command::Export);

    match run(command, context, &mut std::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
