//! kpgcheck core - validation and comparison engine for KPG-D1N channel plans
//!
//! This crate holds the pure logic of the tool:
//! - ChannelRecord model and comparison keys
//! - Synonym registry with an explicit ambiguity policy
//! - The three internal consistency checks (duplicate names, TX/RX/Enc
//!   sets, simplex tones)
//! - Keyed cross-file diff
//! - Ordered report aggregation
//!
//! Nothing here reads or writes files; extraction, CSV output and report
//! files live in `kpgcheck-store`.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod report;
pub mod rules;
pub mod synonyms;

/// Canonical logging field names, re-exported for the logging macros.
pub use kpgcheck_core_types::schema;

// Re-export commonly used types
pub use diff::{compute_diff, CrossFileComparator, RecordDiff};
pub use errors::{ErrorCategory, ExError, ExErrorKind, KpgError, Result};
pub use model::{ChannelRecord, ComparisonKey, Field};
pub use report::{CheckPart, PartReport, ReportAggregator, ReportLine, Severity};
pub use rules::{check_file, ConsistencyCheck};
pub use synonyms::{AmbiguityPolicy, SynonymRegistry, SynonymSet, SynonymWarning};
