//! # Access Operations
//!
//! The operation a decision is scoped to. A compliance service may return
//! different enforcement actions for reading a dataset than for copying it
//! to another geography, so decisions are keyed by the full operation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DecisionError;

/// Kind of access requested on a dataset.
///
/// Serialized in SCREAMING_SNAKE_CASE to match the protocol enum values
/// exchanged with policy-compliance services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessType {
    /// Read the dataset in place.
    Read,
    /// Write to the dataset.
    Write,
    /// Copy the dataset, typically to another location.
    Copy,
    /// Delete the dataset.
    Delete,
}

impl AccessType {
    /// Returns all access types in canonical order.
    pub fn all() -> &'static [AccessType] {
        &[Self::Read, Self::Write, Self::Copy, Self::Delete]
    }

    /// Returns the protocol string for this access type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Copy => "COPY",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = DecisionError;

    /// Parse an access type from its protocol string.
    ///
    /// Accepts the same identifiers produced by [`AccessType::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READ" => Ok(Self::Read),
            "WRITE" => Ok(Self::Write),
            "COPY" => Ok(Self::Copy),
            "DELETE" => Ok(Self::Delete),
            other => Err(DecisionError::Serialization(format!(
                "unknown access type: {other:?}"
            ))),
        }
    }
}

/// An access operation on a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccessOperation {
    /// The kind of access.
    pub access_type: AccessType,
    /// Geography the operation targets, when relevant (e.g. copy destination).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl AccessOperation {
    /// Create an operation of the given kind with no destination.
    pub fn new(access_type: AccessType) -> Self {
        Self {
            access_type,
            destination: None,
        }
    }

    pub fn read() -> Self {
        Self::new(AccessType::Read)
    }

    pub fn write() -> Self {
        Self::new(AccessType::Write)
    }

    pub fn copy() -> Self {
        Self::new(AccessType::Copy)
    }

    pub fn delete() -> Self {
        Self::new(AccessType::Delete)
    }

    /// Scope this operation to a destination geography.
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }
}

impl std::fmt::Display for AccessOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.destination {
            Some(destination) => write!(f, "{}->{}", self.access_type, destination),
            None => write!(f, "{}", self.access_type),
        }
    }
}
