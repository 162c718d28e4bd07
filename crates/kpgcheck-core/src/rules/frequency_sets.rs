//! Part 2: channels sharing a TX/RX/Enc set must agree on everything else.
//!
//! All comparisons here are case-insensitive. A differing channel name is
//! accepted when the synonym registry lists the member's name with the
//! baseline's.

use std::time::Instant;

use super::{discrepancy_text, eq_ignore_case, group_ordered, ConsistencyCheck};
use crate::model::{ChannelRecord, Field};
use crate::report::{CheckPart, Finding, PartReport};
use crate::synonyms::SynonymRegistry;
use crate::{log_op_end, log_op_start};

/// Fields compared for every frequency set.
pub const COMPARED_FIELDS: [Field; 3] = [Field::ChannelName, Field::ChannelSpacing, Field::PttId];

/// Additionally compared when the member is simplex.
pub const SIMPLEX_COMPARED_FIELDS: [Field; 1] = [Field::DecodeTone];

/// Group key: `(tx, rx, encode)`. A tuple, so no separator can collide.
type FrequencySetKey = (String, String, String);

/// Groups records by TX/RX/Enc and compares each member to the first.
#[derive(Debug, Clone, Copy)]
pub struct FrequencySetChecker<'a> {
    synonyms: &'a SynonymRegistry,
}

impl<'a> FrequencySetChecker<'a> {
    pub fn new(synonyms: &'a SynonymRegistry) -> Self {
        Self { synonyms }
    }
}

impl ConsistencyCheck for FrequencySetChecker<'_> {
    fn run(&self, source: &str, records: &[ChannelRecord]) -> PartReport {
        let start = Instant::now();
        log_op_start!("check_frequency_sets", file = source, record_count = records.len());

        let groups = group_ordered(records, |r| -> FrequencySetKey {
            (
                r.tx_frequency.clone(),
                r.rx_frequency.clone(),
                r.encode_tone.clone(),
            )
        });
        let mut findings = Vec::new();

        for ((tx, rx, enc), members) in &groups {
            let [baseline, rest @ ..] = members.as_slice() else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }

            let mut finding = Finding::new(CheckPart::FrequencySets);
            finding.info(format!(
                "TX/RX/Enc set {}:{}:{} appears in multiple entries:",
                tx, rx, enc
            ));
            finding.info(format!("  {} ({})", baseline.location(), baseline.channel_name));
            for member in rest {
                finding.info(format!("  {} ({})", member.location(), member.channel_name));

                let simplex_fields: &[Field] = if member.is_simplex() {
                    &SIMPLEX_COMPARED_FIELDS
                } else {
                    &[]
                };
                for &field in COMPARED_FIELDS.iter().chain(simplex_fields) {
                    if eq_ignore_case(member.get(field), baseline.get(field)) {
                        continue;
                    }
                    if field == Field::ChannelName
                        && self
                            .synonyms
                            .are_synonyms(&baseline.channel_name, &member.channel_name)
                    {
                        finding.note(
                            field,
                            format!(
                                "    --- legal synonym: {}: {} is a configured synonym of {} in {}",
                                field,
                                member.channel_name,
                                baseline.channel_name,
                                baseline.location()
                            ),
                        );
                    } else {
                        finding.discrepancy(field, discrepancy_text(field, member, baseline));
                    }
                }
            }
            findings.push(finding);
        }

        let report = PartReport::new(CheckPart::FrequencySets, source, findings);
        log_op_end!(
            "check_frequency_sets",
            duration_ms = start.elapsed().as_millis() as u64,
            group_count = groups.len(),
            discrepancy_count = report.discrepancy_count()
        );
        report
    }
}
