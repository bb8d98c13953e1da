//! # Merge Subcommand
//!
//! Folds decision set files into one set. Each file is one decision source;
//! files are folded in the order given on the command line, so the action
//! order in the output is reproducible for a fixed argument order.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use m4d_merge::{collect_decisions, DecisionMerger, DecisionSource, MatchMode};

use crate::config::MergeConfig;
use crate::input::{write_decision_set, FileSource};

/// Arguments for the merge subcommand.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Decision set files (JSON, or YAML for .yaml/.yml), folded left to right.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Write the merged set here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Key matching strategy: structural or primary_key.
    #[arg(long)]
    pub match_mode: Option<MatchMode>,

    /// Reject inputs with duplicate dataset or operation keys.
    #[arg(long)]
    pub validate: bool,

    /// Emit single-line JSON.
    #[arg(long)]
    pub compact: bool,

    /// Print the SHA-256 digest of the merged set to stderr.
    #[arg(long)]
    pub print_digest: bool,
}

/// Execute the merge subcommand.
pub fn run_merge(args: &MergeArgs, config: &MergeConfig) -> Result<u8> {
    let config = config
        .clone()
        .with_overrides(args.match_mode, args.validate, args.compact);

    let files: Vec<FileSource> = args.files.iter().map(FileSource::new).collect();
    let sources: Vec<&dyn DecisionSource> = files.iter().map(|f| f as &dyn DecisionSource).collect();

    let merger = DecisionMerger::from_mode(config.match_mode).validating(config.validate_inputs);
    tracing::info!(
        inputs = sources.len(),
        match_mode = %config.match_mode,
        validate = config.validate_inputs,
        "merging decision sets"
    );

    let merged = collect_decisions(&merger, &sources).context("merge failed")?;
    tracing::info!(
        datasets = merged.len(),
        actions = merged.action_count(),
        "merge complete"
    );

    write_decision_set(&merged, args.output.as_deref(), config.pretty)?;

    if args.print_digest {
        let digest = merged.digest().context("failed to compute digest")?;
        eprintln!("digest: {digest}");
    }

    Ok(0)
}
