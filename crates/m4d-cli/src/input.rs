//! # Decision Set Files
//!
//! Reading decision sets from JSON or YAML files, and writing merged output.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use m4d_core::{DecisionError, PolicyDecisionSet};
use m4d_merge::DecisionSource;

/// Serialization format of a decision set file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// `.yaml` and `.yml` are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

fn parse_decision_set(path: &Path) -> Result<PolicyDecisionSet, DecisionError> {
    let content = std::fs::read_to_string(path)?;
    match FileFormat::from_path(path) {
        FileFormat::Json => serde_json::from_str(&content)
            .map_err(|e| DecisionError::Serialization(e.to_string())),
        FileFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| DecisionError::Serialization(e.to_string())),
    }
}

/// Read one decision set file.
pub fn read_decision_set(path: &Path) -> Result<PolicyDecisionSet> {
    parse_decision_set(path)
        .with_context(|| format!("failed to load decision set: {}", path.display()))
}

/// A decision set file treated as the output of one compliance service.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DecisionSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn decisions(&self) -> Result<PolicyDecisionSet, DecisionError> {
        parse_decision_set(&self.path).map_err(|e| DecisionError::Source {
            source_name: self.name.clone(),
            message: e.to_string(),
        })
    }
}

/// Serialize a decision set as JSON.
pub fn render_json(set: &PolicyDecisionSet, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(set)
    } else {
        serde_json::to_string(set)
    };
    rendered.context("failed to serialize decision set")
}

/// Write a decision set as JSON to `output`, or to stdout when `None`.
pub fn write_decision_set(set: &PolicyDecisionSet, output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = render_json(set, pretty)?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory: {}", parent.display()))?;
            }
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote merged decision set");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}
