//! # m4d-merge: Policy Decision Merger
//!
//! Combines the partial decision trees returned by independent
//! policy-compliance services into one tree the enforcement layer can apply
//! uniformly.
//!
//! - **Keyed merge** (`keyed.rs`): the single outer-join-with-value-merge
//!   routine, applied at the dataset level and again at the operation level.
//!
//! - **Matchers** (`matcher.rs`): the [`KeyMatcher`] seam deciding when two
//!   dataset keys or two operation keys denote the same entry. Structural
//!   equality by default, primary-key matching on request.
//!
//! - **Merger** (`merger.rs`): [`DecisionMerger`] and the three-level
//!   algorithm. Actions under a shared (dataset, operation) pair are
//!   concatenated, left then right, without deduplication.
//!
//! - **Validation** (`validate.rs`): opt-in check of the key-uniqueness
//!   preconditions.
//!
//! - **Sources** (`source.rs`): the [`DecisionSource`] seam and a
//!   deterministic left-to-right fold over several sources.
//!
//! ## Ordering Contract
//!
//! ```text
//! datasets(merge(L, R))   = L's datasets in order, then R's unmatched datasets in order
//! operations(merged D)    = L's operations in order, then R's unmatched operations in order
//! actions(merged O)       = L.actions ++ R.actions
//! ```
//!
//! Merging is pure: inputs are taken by shared reference and a new tree is
//! returned. It is not guaranteed associative with respect to action
//! ordering, so callers fold in a fixed order.

pub mod keyed;
pub mod matcher;
pub mod merger;
pub mod source;
pub mod validate;

pub use keyed::merge_keyed;
pub use matcher::{AccessTypeMatch, DatasetIdMatch, KeyMatcher, MatchMode, ModeMatcher, StructuralMatch};
pub use merger::{merge_decision_sets, DecisionMerger};
pub use source::{collect_decisions, DecisionSource, StaticSource};
pub use validate::validate_decision_set;
