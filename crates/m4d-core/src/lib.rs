//! # m4d-core: Policy Decision Data Model
//!
//! Defines the decision tree that policy-compliance services return for an
//! access request, and that the merger in `m4d-merge` combines:
//!
//! ```text
//! PolicyDecisionSet
//! └── DatasetDecision      (keyed by DatasetIdentifier)
//!     └── OperationDecision (keyed by AccessOperation)
//!         └── EnforcementAction*
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Immutable value objects.** Every type is a plain owned value with
//!    structural equality. Consumers read trees by reference and build new
//!    ones; nothing in this crate mutates a tree behind a shared reference.
//!
//! 2. **Deterministic representation.** Action arguments live in a
//!    `BTreeMap`, so equality, hashing, and canonical serialization never
//!    depend on insertion order.
//!
//! 3. **`CanonicalBytes` for digests.** Decision set digests flow through
//!    `CanonicalBytes::new()` (RFC 8785) so two processes that merge the same
//!    inputs in the same order agree on the digest byte-for-byte.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `m4d-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod action;
pub mod canonical;
pub mod dataset;
pub mod decision;
pub mod digest;
pub mod error;
pub mod operation;

// Re-export primary types for ergonomic imports.
pub use action::{ActionLevel, EnforcementAction};
pub use canonical::CanonicalBytes;
pub use dataset::DatasetIdentifier;
pub use decision::{DatasetDecision, OperationDecision, PolicyDecisionSet};
pub use digest::{sha256_digest, ContentDigest};
pub use error::{CanonicalizationError, DecisionError, MalformedDecisionSet};
pub use operation::{AccessOperation, AccessType};
