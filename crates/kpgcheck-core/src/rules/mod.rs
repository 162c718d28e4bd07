//! Internal consistency checks run over one file's records.
//!
//! Each check is a pure function of an immutable record slice and returns
//! a fresh [`PartReport`]. Record order matters: the first record of a
//! group is its baseline.

pub mod duplicate_names;
pub mod frequency_sets;
pub mod simplex;

use std::collections::HashMap;
use std::hash::Hash;

use crate::model::{ChannelRecord, Field};
use crate::report::PartReport;
use crate::synonyms::SynonymRegistry;

pub use duplicate_names::DuplicateNameChecker;
pub use frequency_sets::FrequencySetChecker;
pub use simplex::SimplexConsistencyChecker;

/// A check over one file's records.
pub trait ConsistencyCheck {
    /// Run the check. `source` labels the file in report headers.
    fn run(&self, source: &str, records: &[ChannelRecord]) -> PartReport;
}

/// Run Parts 1–3, in order, over one file.
pub fn check_file(
    source: &str,
    records: &[ChannelRecord],
    synonyms: &SynonymRegistry,
) -> Vec<PartReport> {
    let checks: [&dyn ConsistencyCheck; 3] = [
        &DuplicateNameChecker,
        &FrequencySetChecker::new(synonyms),
        &SimplexConsistencyChecker,
    ];
    checks
        .iter()
        .map(|check| check.run(source, records))
        .collect()
}

/// Group records by key, keeping first-seen order of groups and members.
pub(crate) fn group_ordered<'a, K, F>(
    records: &'a [ChannelRecord],
    key_of: F,
) -> Vec<(K, Vec<&'a ChannelRecord>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&ChannelRecord) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a ChannelRecord>)> = Vec::new();
    for record in records {
        let key = key_of(record);
        match positions.get(&key) {
            Some(&idx) => groups[idx].1.push(record),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }
    groups
}

/// `    *** DISCREPANCY: <field>: <member> is different than <baseline> in <baseline location>`
pub(crate) fn discrepancy_text(
    field: Field,
    member: &ChannelRecord,
    baseline: &ChannelRecord,
) -> String {
    format!(
        "    *** DISCREPANCY: {}: {} is different than {} in {}",
        field,
        member.get(field),
        baseline.get(field),
        baseline.location()
    )
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
