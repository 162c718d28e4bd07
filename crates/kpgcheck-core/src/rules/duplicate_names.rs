//! Part 1: channels sharing a name must share their radio settings.

use std::time::Instant;

use super::{discrepancy_text, group_ordered, ConsistencyCheck};
use crate::model::{ChannelRecord, Field};
use crate::report::{CheckPart, Finding, PartReport};
use crate::{log_op_end, log_op_start};

/// Fields compared between same-named channels. Comparison is exact.
pub const COMPARED_FIELDS: [Field; 6] = [
    Field::TxFrequency,
    Field::RxFrequency,
    Field::EncodeTone,
    Field::DecodeTone,
    Field::ChannelSpacing,
    Field::PttId,
];

/// Groups records by channel name and compares each member to the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateNameChecker;

impl ConsistencyCheck for DuplicateNameChecker {
    fn run(&self, source: &str, records: &[ChannelRecord]) -> PartReport {
        let start = Instant::now();
        log_op_start!("check_duplicate_names", file = source, record_count = records.len());

        let groups = group_ordered(records, |r| r.channel_name.clone());
        let mut findings = Vec::new();

        for (name, members) in &groups {
            let [baseline, rest @ ..] = members.as_slice() else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }

            let mut finding = Finding::new(CheckPart::DuplicateNames);
            finding.info(format!("Channel \"{}\" appears in multiple entries:", name));
            finding.info(format!("  {}", baseline.location()));
            for member in rest {
                finding.info(format!("  {}", member.location()));
                for field in COMPARED_FIELDS {
                    if member.get(field) != baseline.get(field) {
                        finding.discrepancy(field, discrepancy_text(field, member, baseline));
                    }
                }
            }
            findings.push(finding);
        }

        let report = PartReport::new(CheckPart::DuplicateNames, source, findings);
        log_op_end!(
            "check_duplicate_names",
            duration_ms = start.elapsed().as_millis() as u64,
            group_count = groups.len(),
            discrepancy_count = report.discrepancy_count()
        );
        report
    }
}
