//! # Enforcement Actions
//!
//! A single directive telling the enforcement layer how to alter or restrict
//! access to data, e.g. "remove column `col1`" or "redact column `ssn`".
//!
//! Actions are compared by full structural equality over all four
//! attributes. The merger never collapses or reconciles them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Granularity at which an enforcement action applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ActionLevel {
    /// The whole dataset.
    Dataset,
    /// A single table within the dataset.
    Table,
    /// A single column.
    Column,
    /// Individual rows.
    Row,
}

impl ActionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dataset => "DATASET",
            Self::Table => "TABLE",
            Self::Column => "COLUMN",
            Self::Row => "ROW",
        }
    }
}

impl std::fmt::Display for ActionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete enforcement directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnforcementAction {
    /// Human-readable label.
    pub name: String,
    /// Stable action-type identifier (e.g. `"remove-ID"`).
    pub id: String,
    /// Granularity the action applies at.
    pub level: ActionLevel,
    /// Action-specific parameters (e.g. `{"column_name": "col1"}`).
    #[serde(default)]
    pub args: BTreeMap<String, String>,
}

impl EnforcementAction {
    /// Create an action with no arguments.
    pub fn new(name: impl Into<String>, id: impl Into<String>, level: ActionLevel) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            level,
            args: BTreeMap::new(),
        }
    }

    /// Add an argument, replacing any previous value for the same key.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Look up an argument value.
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }
}

impl std::fmt::Display for EnforcementAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.id, self.level)?;
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, "({})", args.join(","))?;
        }
        Ok(())
    }
}
