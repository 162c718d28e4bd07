//! Part 3: a simplex channel decodes on its own encode tone, or not at all.

use std::time::Instant;

use super::ConsistencyCheck;
use crate::model::channel::NO_TONE;
use crate::model::{ChannelRecord, Field};
use crate::report::{CheckPart, Finding, PartReport};
use crate::{log_op_end, log_op_start};

/// Flags simplex records whose decode tone is neither `None` nor the encode tone.
///
/// Duplex records are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexConsistencyChecker;

impl SimplexConsistencyChecker {
    /// True when the record passes (or is not simplex).
    pub fn tones_consistent(record: &ChannelRecord) -> bool {
        !record.is_simplex()
            || record.decode_tone == NO_TONE
            || record.decode_tone == record.encode_tone
    }
}

impl ConsistencyCheck for SimplexConsistencyChecker {
    fn run(&self, source: &str, records: &[ChannelRecord]) -> PartReport {
        let start = Instant::now();
        log_op_start!("check_simplex_tones", file = source, record_count = records.len());

        let mut simplex_count = 0usize;
        let mut findings = Vec::new();
        for record in records.iter().filter(|r| r.is_simplex()) {
            simplex_count += 1;
            if Self::tones_consistent(record) {
                continue;
            }
            let mut finding = Finding::new(CheckPart::SimplexTones);
            finding.info(format!(
                "Simplex channel \"{}\" decodes on a different tone than it encodes:",
                record.channel_name
            ));
            finding.info(format!("  {}", record.location()));
            finding.discrepancy(
                Field::DecodeTone,
                format!(
                    "    *** DISCREPANCY: Enc={}, Dec={}: {} should be {} or equal to {}",
                    record.encode_tone,
                    record.decode_tone,
                    Field::DecodeTone,
                    NO_TONE,
                    Field::EncodeTone
                ),
            );
            findings.push(finding);
        }

        let report = PartReport::new(CheckPart::SimplexTones, source, findings);
        log_op_end!(
            "check_simplex_tones",
            duration_ms = start.elapsed().as_millis() as u64,
            simplex_count = simplex_count,
            discrepancy_count = report.discrepancy_count()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(tx: &str, rx: &str, enc: &str, dec: &str) -> ChannelRecord {
        ChannelRecord::from_columns([
            "1", "Local", "7", "Ch7", tx, rx, enc, dec, "12.5", "Off", "Yes",
        ])
    }

    #[test]
    fn test_mismatched_simplex_tone_is_reported_with_both_values() {
        let records = vec![channel("146.52", "146.52", "103.5", "100.0")];
        let report = SimplexConsistencyChecker.run("a.htm", &records);
        let discrepancies: Vec<_> = report.discrepancies().collect();
        assert_eq!(discrepancies.len(), 1);
        assert!(discrepancies[0].text().contains("Enc=103.5, Dec=100.0"));
        assert!(report
            .lines()
            .any(|l| l.text() == "  Zone 1 (Local)  Channel 7"));
    }

    #[test]
    fn test_none_or_matching_decode_passes() {
        let records = vec![
            channel("146.52", "146.52", "103.5", "None"),
            channel("146.52", "146.52", "103.5", "103.5"),
            channel("146.52", "146.52", "None", "None"),
        ];
        let report = SimplexConsistencyChecker.run("a.htm", &records);
        assert!(report.findings().is_empty());
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        let records = vec![channel("146.52", "146.52", "103.5", "none")];
        let report = SimplexConsistencyChecker.run("a.htm", &records);
        assert_eq!(report.discrepancy_count(), 1);
    }

    #[test]
    fn test_duplex_records_are_skipped() {
        let records = vec![channel("146.34", "146.94", "103.5", "100.0")];
        let report = SimplexConsistencyChecker.run("a.htm", &records);
        assert!(report.is_clean());
        assert!(report.findings().is_empty());
    }
}
