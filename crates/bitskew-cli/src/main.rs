use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod prompter;

#[derive(Parser)]
#[command(name = "bitskew")]
#[command(version)]
#[command(about = "XOR window search for bit-imbalanced file variations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a file for the XOR variation with the highest 0/1 imbalance
    Search {
        /// Input file to search
        input: PathBuf,
        /// Directory the variation subdirectory is created under
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
        /// Window width in bytes (1-4)
        #[arg(long, default_value_t = 2)]
        width: usize,
        /// Offset step; set equal to the width for non-overlapping chunks
        #[arg(long, default_value_t = 1)]
        stride: usize,
        /// Try only the first N keys of each window
        #[arg(long)]
        limit_keys: Option<u64>,
        /// Print a JSON run summary on stdout
        #[arg(long)]
        json: bool,
    },
    /// Recover the original bytes from a stored variation
    Revert {
        /// Artifact file produced by `search`
        artifact: PathBuf,
        /// Directory the recovered file is written to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
        /// Output file name (defaults to a name derived from the artifact)
        #[arg(long)]
        name: Option<String>,
        /// Ask for the output file name on stdin
        #[arg(short, long)]
        interactive: bool,
    },
    /// Decode the metadata embedded in an artifact name
    Inspect {
        /// Artifact file or name
        artifact: PathBuf,
        /// Print the metadata as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the binary digit representation of a file
    Bits {
        /// File to dump
        file: PathBuf,
        /// Print at most N bytes
        #[arg(long, default_value_t = 512)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("bitskew_core=info".parse()?)
                .add_directive("bitskew_cli=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    info!("bitskew {} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Search {
            input,
            output,
            width,
            stride,
            limit_keys,
            json,
        } => commands::search::run(&input, &output, width, stride, limit_keys, json),
        Commands::Revert {
            artifact,
            output,
            name,
            interactive,
        } => commands::revert::run(&artifact, &output, name.as_deref(), interactive),
        Commands::Inspect { artifact, json } => commands::inspect::run(&artifact, json),
        Commands::Bits { file, limit } => commands::bits::run(&file, limit),
    }
}
