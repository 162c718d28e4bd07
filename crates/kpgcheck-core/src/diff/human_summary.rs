//! Human-readable renderers for record diffs.

use crate::diff::model::{DiffClassification, KeyedRecord, RecordDiff};
use crate::model::Field;
use crate::report::{CheckPart, Finding, PartReport};

/// Render a Markdown summary of a [`RecordDiff`].
///
/// Informational only; it does not affect the structured diff.
pub fn render_human_summary(diff: &RecordDiff) -> String {
    let mut out = String::new();

    out.push_str("## Channel Diff\n\n");

    let class_label = match &diff.classification {
        DiffClassification::Identical => "Identical",
        DiffClassification::NoKeyedChange => "No Keyed Change",
        DiffClassification::Changed => "Changed",
    };
    out.push_str(&format!("**Classification**: {class_label}\n\n"));

    out.push_str("### Identity\n\n");
    out.push_str(&format!(
        "| | Digest | Records |\n\
         |---|---|---|\n\
         | A | `{}` | {} |\n\
         | B | `{}` | {} |\n\n",
        short(&diff.identity.a_digest),
        diff.identity.a_record_count,
        short(&diff.identity.b_digest),
        diff.identity.b_record_count,
    ));

    let dup = &diff.duplicate_keys;
    if !dup.a.is_empty() || !dup.b.is_empty() {
        out.push_str("### Duplicate Keys\n\n");
        for (side, keys) in [("A", &dup.a), ("B", &dup.b)] {
            if !keys.is_empty() {
                let keys: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
                out.push_str(&format!("- **{}**: {}\n", side, keys.join(", ")));
            }
        }
        out.push('\n');
    }

    if diff.is_empty() {
        out.push_str("_No keyed changes detected._\n");
        return out;
    }

    render_keyed(&mut out, "Added", &diff.added);
    render_keyed(&mut out, "Removed", &diff.removed);

    if !diff.changed.is_empty() {
        out.push_str(&format!("### Changed ({})\n\n", diff.changed.len()));
        for changed in &diff.changed {
            out.push_str(&format!("- `{}`\n", changed.key));
            for change in &changed.changes {
                out.push_str(&format!(
                    "  - {}: `{}` -> `{}`\n",
                    change.field.column(),
                    change.before,
                    change.after
                ));
            }
        }
        out.push('\n');
    }

    out
}

fn render_keyed(out: &mut String, title: &str, records: &[KeyedRecord]) {
    if records.is_empty() {
        return;
    }
    out.push_str(&format!("### {} ({})\n\n", title, records.len()));
    for keyed in records {
        out.push_str(&format!("- `{}` ({})\n", keyed.key, keyed.record.location()));
    }
    out.push('\n');
}

/// First 12 hex chars of a digest.
fn short(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}

/// Render a diff as a cross-file [`PartReport`].
///
/// Every added, removed or changed field is a discrepancy line so the
/// block is streamed live. Duplicate keys become notes.
pub fn diff_report(source: &str, diff: &RecordDiff) -> PartReport {
    let mut findings = Vec::new();

    for (label, side) in [("first", &diff.duplicate_keys.a), ("second", &diff.duplicate_keys.b)] {
        for key in side {
            let mut finding = Finding::new(CheckPart::CrossFile);
            finding.note(
                None::<Field>,
                format!(
                    "  Key \"{}\" appears more than once in the {} file; the last entry is compared",
                    key, label
                ),
            );
            findings.push(finding);
        }
    }

    for (label, side) in [("Added", &diff.added), ("Removed", &diff.removed)] {
        for keyed in side {
            let mut finding = Finding::new(CheckPart::CrossFile);
            finding.discrepancy(
                None::<Field>,
                format!("  {}: {} in {}", label, keyed.key, keyed.record.location()),
            );
            findings.push(finding);
        }
    }

    for changed in &diff.changed {
        let mut finding = Finding::new(CheckPart::CrossFile);
        finding.info(format!("  Changed: {}", changed.key));
        for change in &changed.changes {
            finding.discrepancy(
                change.field,
                format!(
                    "    {}: {} -> {}",
                    change.field.column(),
                    change.before,
                    change.after
                ),
            );
        }
        findings.push(finding);
    }

    PartReport::new(CheckPart::CrossFile, source, findings)
}
