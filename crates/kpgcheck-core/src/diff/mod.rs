//! Cross-file record diff.
//!
//! Compares two exports keyed by `<zone name>:<channel name>` and produces
//! a structured, deterministic diff.
//!
//! ## Entry point
//!
//! ```ignore
//! use kpgcheck_core::diff::engine::compute_diff;
//!
//! let diff = compute_diff(&first_records, &second_records);
//! let summary = kpgcheck_core::diff::human_summary::render_human_summary(&diff);
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: `compute_diff` does no I/O and never fails.
//!   [`CrossFileComparator`] adds start/end events around it.
//! - **Determinism**: every list is sorted by comparison key; changed
//!   fields follow canonical column order.
//! - **Swap symmetry**: swapping the inputs swaps `added`/`removed` and
//!   the before/after values of each change.
//! - **Silent overwrite**: within one side, a later record with the same
//!   key replaces an earlier one. Such keys are listed in `duplicate_keys`
//!   for information only.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compute_diff, CrossFileComparator};
pub use human_summary::{diff_report, render_human_summary};
pub use model::RecordDiff;
