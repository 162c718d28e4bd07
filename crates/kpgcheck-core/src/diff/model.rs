//! Record diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.

use serde::{Deserialize, Serialize};

use crate::model::{ChannelRecord, ComparisonKey, Field};

/// The structured diff between two record collections.
///
/// `diff_schema_version` is always 1 for this implementation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordDiff {
    /// Schema version of this diff structure (always 1)
    pub diff_schema_version: u32,
    /// Digests and sizes of both sides
    pub identity: DiffIdentity,
    /// High-level classification of the diff
    pub classification: DiffClassification,
    /// Keys present only in the second collection
    pub added: Vec<KeyedRecord>,
    /// Keys present only in the first collection
    pub removed: Vec<KeyedRecord>,
    /// Keys present in both with at least one differing field
    pub changed: Vec<ChangedRecord>,
    /// Keys that occur more than once within a side
    pub duplicate_keys: DuplicateKeys,
}

impl RecordDiff {
    /// No added, removed or changed keys
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Digest identity for both collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffIdentity {
    /// SHA-256 over the canonical rows of the first collection, in order
    pub a_digest: String,
    /// SHA-256 over the canonical rows of the second collection, in order
    pub b_digest: String,
    pub a_record_count: usize,
    pub b_record_count: usize,
}

/// High-level classification of the diff result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiffClassification {
    /// Both collections hold the same rows in the same order
    Identical,
    /// Rows differ (order, or overwritten duplicate keys) but no key was
    /// added, removed or changed
    NoKeyedChange,
    /// At least one key was added, removed or changed
    Changed,
}

/// A record together with its comparison key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyedRecord {
    pub key: ComparisonKey,
    pub record: ChannelRecord,
}

/// A key present on both sides with differing fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangedRecord {
    pub key: ComparisonKey,
    /// Differing fields in canonical column order
    pub changes: Vec<FieldChange>,
}

impl ChangedRecord {
    /// The change to one field, if that field differs
    pub fn change(&self, field: Field) -> Option<&FieldChange> {
        self.changes.iter().find(|c| c.field == field)
    }
}

/// Before/after values of one field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldChange {
    pub field: Field,
    /// Value in the first collection
    pub before: String,
    /// Value in the second collection
    pub after: String,
}

/// Keys seen more than once within one side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DuplicateKeys {
    pub a: Vec<ComparisonKey>,
    pub b: Vec<ComparisonKey>,
}
