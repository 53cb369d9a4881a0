#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use kwire_codegen::{
    generate_registry_source, generate_schema_source, load_message_specs, write_output_file,
};

/// Generate kwire descriptor tables from Kafka JSON message schemas
#[derive(Debug, Parser)]
#[command(name = "kwire-codegen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the *.json message definitions
    #[arg(long, env = "KWIRE_SCHEMA_DIR")]
    input: PathBuf,

    /// Where to write the generated api registry
    #[arg(long)]
    registry_output: Option<PathBuf>,

    /// Where to write the generated StructSchema/MessageSchema statics
    #[arg(long)]
    schema_output: Option<PathBuf>,

    /// Messages to emit schema statics for; every request and response when empty
    #[arg(long, value_delimiter = ',')]
    targets: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(Args::parse()) {
        tracing::error!("kwire-codegen failed: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.registry_output.is_none() && args.schema_output.is_none() {
        bail!("at least one output must be provided (--registry-output or --schema-output)");
    }

    let specs = load_message_specs(&args.input)
        .with_context(|| format!("loading message specs from {}", args.input.display()))?;
    tracing::info!(count = specs.len(), input = %args.input.display(), "loaded message specs");

    if let Some(output) = &args.registry_output {
        let source = generate_registry_source(&specs);
        write_output_file(output, &source)
            .with_context(|| format!("writing registry to {}", output.display()))?;
        tracing::info!(output = %output.display(), "generated protocol registry");
    }

    if let Some(output) = &args.schema_output {
        let targets = args
            .targets
            .iter()
            .map(|target| target.trim())
            .filter(|target| !target.is_empty())
            .collect::<Vec<_>>();
        let source = generate_schema_source(&specs, &targets).context("generating schema tables")?;
        write_output_file(output, &source)
            .with_context(|| format!("writing schema tables to {}", output.display()))?;
        tracing::info!(
            output = %output.display(),
            targets = targets.len(),
            "generated schema tables"
        );
    }
    Ok(())
}
