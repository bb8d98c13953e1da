//! # m4d-cli: Policy Decision Command-Line Interface
//!
//! Thin wrapper around `m4d-merge` for operators and CI pipelines that hold
//! decision sets as files.
//!
//! ## Subcommands
//!
//! - `m4d merge`: Fold decision set files left to right into one set.
//! - `m4d validate`: Check decision set files against the merge preconditions.
//! - `m4d digest`: Print the canonical SHA-256 digest of a decision set.
//!
//! ```bash
//! m4d merge column-policies.json privacy-policies.yaml -o merged.json --print-digest
//! m4d validate --match-mode primary_key decisions/*.json
//! m4d digest merged.json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs` and the `*Args` structs.
//! - Handlers return `anyhow::Result<u8>`, the process exit code on success.
//! - Merge semantics live in `m4d-merge`. Nothing here reinterprets them.

pub mod config;
pub mod digest;
pub mod input;
pub mod merge;
pub mod validate;
