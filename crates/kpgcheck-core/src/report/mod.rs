//! Report values produced by the checkers and the comparator.
//!
//! Every check returns a fresh [`PartReport`]; nothing writes to shared
//! state. [`ReportAggregator`] composes part reports in run order.

pub mod aggregator;
pub mod line;

pub use aggregator::ReportAggregator;
pub use line::{CheckPart, Finding, PartReport, ReportLine, Severity};
