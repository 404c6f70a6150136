//! The `protobuf-export` command line.

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use protobuf_export_configuration::environment::Environment;
use protobuf_export_configuration::{self as configuration, ParsedConfiguration};

/// Where the configuration comes from.
#[derive(Debug, Clone, Default)]
pub struct Context<Env: Environment> {
    /// A directory holding `configuration.json`. The built-in configuration is used when absent.
    pub context_path: Option<PathBuf>,
    pub environment: Env,
}

/// The commands supported by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the query and print every decoded row. This is the default.
    Export,
    /// Write the built-in configuration and its JSON schema to a directory.
    Initialize {
        #[arg(long)]
        out_dir: PathBuf,
    },
}

/// Run a command in a given context.
pub async fn run<Env: Environment>(
    command: Command,
    context: Context<Env>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Export => export(context, out).await?,
        Command::Initialize { out_dir } => initialize(out_dir).await?,
    };
    Ok(())
}

async fn export<Env: Environment>(
    context: Context<Env>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let parsed = match &context.context_path {
        Some(path) => configuration::parse_configuration(path).await?,
        None => ParsedConfiguration::initial(),
    };
    let configuration = configuration::make_runtime_configuration(parsed, context.environment)?;
    query_engine_execution::export(&configuration, out).await?;
    Ok(())
}

async fn initialize(out_dir: PathBuf) -> anyhow::Result<()> {
    configuration::write_parsed_configuration(&ParsedConfiguration::initial(), &out_dir).await?;
    tracing::info!(out_dir = %out_dir.display(), "wrote configuration");
    Ok(())
}
