//! # Merge Configuration
//!
//! Optional YAML file holding defaults for the `merge` and `validate`
//! subcommands. Command-line flags take precedence over file values.
//!
//! ```yaml
//! match_mode: primary_key
//! validate_inputs: true
//! pretty: false
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use m4d_merge::MatchMode;

/// Settings shared by the merging subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// How dataset and operation keys are paired across inputs.
    pub match_mode: MatchMode,
    /// Reject inputs that break the key-uniqueness preconditions.
    pub validate_inputs: bool,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Structural,
            validate_inputs: false,
            pretty: true,
        }
    }
}

impl MergeConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded merge config");
        Ok(config)
    }

    /// Load configuration from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides. Boolean flags can only switch a
    /// setting on (`--validate`) or off (`--compact`).
    pub fn with_overrides(mut self, match_mode: Option<MatchMode>, validate: bool, compact: bool) -> Self {
        if let Some(mode) = match_mode {
            self.match_mode = mode;
        }
        self.validate_inputs |= validate;
        if compact {
            self.pretty = false;
        }
        self
    }
}
