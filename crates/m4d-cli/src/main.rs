//! # m4d CLI entry point
//!
//! Parses command-line arguments, initializes tracing, loads configuration,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use m4d_cli::config::MergeConfig;
use m4d_cli::digest::{run_digest, DigestArgs};
use m4d_cli::merge::{run_merge, MergeArgs};
use m4d_cli::validate::{run_validate, ValidateArgs};

/// Policy decision merging toolchain.
///
/// Combines the decision sets returned by independent policy-compliance
/// services into one set for the enforcement layer.
#[derive(Parser, Debug)]
#[command(name = "m4d", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge decision set files, folding them left to right.
    Merge(MergeArgs),

    /// Check decision set files for duplicate dataset or operation keys.
    Validate(ValidateArgs),

    /// Print the canonical SHA-256 digest of a decision set.
    Digest(DigestArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG, when set, takes precedence over -v.
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr; stdout carries merged output.
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = MergeConfig::load_or_default(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Merge(args) => run_merge(&args, &config),
            Commands::Validate(args) => run_validate(&args, &config),
            Commands::Digest(args) => run_digest(&args),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
