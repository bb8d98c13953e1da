//! # Validate Subcommand
//!
//! Checks decision set files against the merge preconditions without
//! merging them.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use m4d_merge::{DecisionMerger, MatchMode};

use crate::config::MergeConfig;
use crate::input::read_decision_set;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Decision set files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Key matching strategy: structural or primary_key.
    #[arg(long)]
    pub match_mode: Option<MatchMode>,
}

/// Execute the validate subcommand. Returns 1 if any file is malformed.
pub fn run_validate(args: &ValidateArgs, config: &MergeConfig) -> Result<u8> {
    let mode = args.match_mode.unwrap_or(config.match_mode);
    let merger = DecisionMerger::from_mode(mode);

    let mut failures = 0usize;
    for path in &args.files {
        let set = read_decision_set(path)?;
        match merger.validate(&set) {
            Ok(()) => println!("{}: ok", path.display()),
            Err(e) => {
                failures += 1;
                println!("{}: {e}", path.display());
            }
        }
    }

    if failures > 0 {
        tracing::warn!(failures, total = args.files.len(), "malformed decision sets found");
        return Ok(1);
    }
    Ok(0)
}
