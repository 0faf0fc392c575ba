mod commands;
mod sample;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{infer::InferArgs, outline::OutlineArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "objmapgen", about = "Generate objmap types from sample JSON documents")]
struct Cli {
    /// Increase log verbosity (overridden by RUST_LOG)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer types from a sample and write them as Rust sources
    Infer(InferArgs),
    /// Print the inferred type tree without writing anything
    Outline(OutlineArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Infer(args) => args.run(),
        Commands::Outline(args) => args.run(),
    }
}
