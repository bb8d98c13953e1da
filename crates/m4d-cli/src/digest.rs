//! # Digest Subcommand

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::input::read_decision_set;

/// Arguments for the digest subcommand.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Decision set file.
    pub file: PathBuf,
}

/// Print the SHA-256 digest of the file's canonical form.
pub fn run_digest(args: &DigestArgs) -> Result<u8> {
    let set = read_decision_set(&args.file)?;
    let digest = set
        .digest()
        .with_context(|| format!("failed to digest {}", args.file.display()))?;
    println!("{digest}");
    Ok(0)
}
