//! Record diff computation engine.
//!
//! The core entry point is [`compute_diff`], which accepts two ordered
//! record collections and produces a [`RecordDiff`].

use sha2::{Digest as _, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use crate::diff::model::{
    ChangedRecord, DiffClassification, DiffIdentity, DuplicateKeys, FieldChange, KeyedRecord,
    RecordDiff,
};
use crate::model::{ChannelRecord, ComparisonKey, Field};
use crate::{log_op_end, log_op_start};

/// Fields compared between the two sides, in reporting order.
pub const COMPARED_FIELDS: [Field; 11] = Field::ALL;

/// Reduce a collection to a key → record map.
///
/// Later records overwrite earlier ones with the same key. The second
/// element lists each overwritten key once, sorted.
pub fn index_by_key(
    records: &[ChannelRecord],
) -> (BTreeMap<ComparisonKey, &ChannelRecord>, Vec<ComparisonKey>) {
    let mut index: BTreeMap<ComparisonKey, &ChannelRecord> = BTreeMap::new();
    let mut duplicates: BTreeSet<ComparisonKey> = BTreeSet::new();
    for record in records {
        let key = record.comparison_key();
        if index.insert(key.clone(), record).is_some() {
            duplicates.insert(key);
        }
    }
    (index, duplicates.into_iter().collect())
}

/// SHA-256 over the canonical rows of a collection, in order.
///
/// Each value is length-prefixed so that no two distinct collections share
/// an encoding.
pub fn collection_digest(records: &[ChannelRecord]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((records.len() as u64).to_le_bytes());
    for record in records {
        for value in record.columns() {
            hasher.update((value.len() as u64).to_le_bytes());
            hasher.update(value.as_bytes());
        }
    }
    hex::encode(hasher.finalize())
}

/// Field-by-field changes from `before` to `after`, in canonical order.
pub fn field_changes(before: &ChannelRecord, after: &ChannelRecord) -> Vec<FieldChange> {
    COMPARED_FIELDS
        .iter()
        .filter(|field| before.get(**field) != after.get(**field))
        .map(|&field| FieldChange {
            field,
            before: before.get(field).to_string(),
            after: after.get(field).to_string(),
        })
        .collect()
}

fn keyed(key: &ComparisonKey, record: &ChannelRecord) -> KeyedRecord {
    KeyedRecord {
        key: key.clone(),
        record: record.clone(),
    }
}

/// Compute a structured, deterministic diff between two record collections.
///
/// `a` is the first (older) collection, `b` the second. Never fails; an
/// empty diff is a valid result.
pub fn compute_diff(a: &[ChannelRecord], b: &[ChannelRecord]) -> RecordDiff {
    let identity = DiffIdentity {
        a_digest: collection_digest(a),
        b_digest: collection_digest(b),
        a_record_count: a.len(),
        b_record_count: b.len(),
    };

    let (a_index, a_duplicates) = index_by_key(a);
    let (b_index, b_duplicates) = index_by_key(b);

    let removed: Vec<KeyedRecord> = a_index
        .iter()
        .filter(|(key, _)| !b_index.contains_key(*key))
        .map(|(key, record)| keyed(key, record))
        .collect();

    let added: Vec<KeyedRecord> = b_index
        .iter()
        .filter(|(key, _)| !a_index.contains_key(*key))
        .map(|(key, record)| keyed(key, record))
        .collect();

    let changed: Vec<ChangedRecord> = a_index
        .iter()
        .filter_map(|(key, before)| {
            let after = b_index.get(key)?;
            let changes = field_changes(before, after);
            (!changes.is_empty()).then(|| ChangedRecord {
                key: key.clone(),
                changes,
            })
        })
        .collect();

    let classification = if identity.a_digest == identity.b_digest {
        DiffClassification::Identical
    } else if added.is_empty() && removed.is_empty() && changed.is_empty() {
        DiffClassification::NoKeyedChange
    } else {
        DiffClassification::Changed
    };

    RecordDiff {
        diff_schema_version: 1,
        identity,
        classification,
        added,
        removed,
        changed,
        duplicate_keys: DuplicateKeys {
            a: a_duplicates,
            b: b_duplicates,
        },
    }
}

/// Keyed comparison of two exports.
///
/// Wraps [`compute_diff`] with start/end events; the result is the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossFileComparator;

impl CrossFileComparator {
    pub fn compare(&self, a: &[ChannelRecord], b: &[ChannelRecord]) -> RecordDiff {
        let start = Instant::now();
        log_op_start!("compare_files", record_count = a.len() + b.len());

        let diff = compute_diff(a, b);

        log_op_end!(
            "compare_files",
            duration_ms = start.elapsed().as_millis() as u64,
            added = diff.added.len(),
            removed = diff.removed.len(),
            changed = diff.changed.len()
        );
        diff
    }
}
