//! Channel record model
//!
//! Normalized, fixed-shape representation of one exported channel entry
//! and the canonical field/column vocabulary shared by the checkers, the
//! comparator and the tabular writer.

pub mod channel;
pub mod field;

pub use channel::{ChannelRecord, ComparisonKey};
pub use field::Field;
