//! Tabular CSV output
//!
//! One row per record in input order, identifier first, then the eleven
//! fields in canonical column order. A lone `## end` row terminates the
//! table.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use kpgcheck_core::{ChannelRecord, Field};

use crate::errors::{csv_error, invalid_input, io_error, Result};

/// Identifier column header
pub const ID_COLUMN: &str = "ID";

/// Sentinel row written after the last record
pub const END_SENTINEL: &str = "## end";

/// Header row: identifier, then every field's column name.
pub fn header() -> Vec<&'static str> {
    std::iter::once(ID_COLUMN)
        .chain(Field::ALL.iter().map(Field::column))
        .collect()
}

/// `<stem>.csv` next to the input.
pub fn csv_path_for(input: &Path) -> PathBuf {
    input.with_extension("csv")
}

/// CSV targets for every input, in input order.
///
/// # Errors
/// `InvalidInputFile` when two inputs share a stem in the same directory
/// (`plan.htm` and `plan.html`), since the second table would replace the
/// first.
pub fn csv_paths_for(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut targets: Vec<PathBuf> = Vec::with_capacity(inputs.len());
    for input in inputs {
        let target = csv_path_for(input);
        if targets.contains(&target) {
            let reason = format!(
                "its table would overwrite {} from an earlier input; disable CSV output or rename one file",
                target.display()
            );
            return Err(invalid_input(input, &reason).with_op("write_csv"));
        }
        targets.push(target);
    }
    Ok(targets)
}

/// Write the table to any writer. `label` names the destination in errors.
pub fn write_records<W: io::Write>(
    writer: W,
    label: &Path,
    records: &[ChannelRecord],
) -> Result<()> {
    // the sentinel row is shorter than the others
    let mut table = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    table.write_record(header()).map_err(|e| csv_error(label, e))?;
    for record in records {
        let key = record.comparison_key();
        let row = std::iter::once(key.as_str()).chain(record.columns());
        table.write_record(row).map_err(|e| csv_error(label, e))?;
    }
    table
        .write_record([END_SENTINEL])
        .map_err(|e| csv_error(label, e))?;
    table.flush().map_err(|e| io_error("write_csv", label, e))
}

/// Write the table beside `input` and return the path written.
pub fn write_csv_file(input: &Path, records: &[ChannelRecord]) -> Result<PathBuf> {
    let path = csv_path_for(input);
    tracing::info!(
        path = %path.display(),
        record_count = records.len(),
        "Generating {}",
        path.display()
    );
    let file = File::create(&path).map_err(|e| io_error("write_csv", &path, e))?;
    write_records(file, &path, records)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_row() {
        assert_eq!(
            header(),
            vec![
                "ID", "Zone#", "Zone Name", "Chan#", "Channel Name", "TX", "RX", "Enc", "Dec",
                "Spacing", "PTT ID", "Scan Add"
            ]
        );
    }

    #[test]
    fn test_rows_are_written_in_order_with_sentinel() {
        let records = vec![
            ChannelRecord::from_columns([
                "1", "North", "1", "Lincoln", "146.52", "146.52", "None", "None", "12.5", "Off",
                "Yes",
            ]),
            ChannelRecord::from_columns([
                "1", "North", "2", "Tac, 2", "154.28", "154.28", "None", "None", "12.5", "Off",
                "No",
            ]),
        ];
        let mut out = Vec::new();
        write_records(&mut out, Path::new("mem.csv"), &records).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID,Zone#"));
        assert_eq!(
            lines[1],
            "North:Lincoln,1,North,1,Lincoln,146.52,146.52,None,None,12.5,Off,Yes"
        );
        assert!(lines[2].contains("\"Tac, 2\""));
        assert_eq!(lines[3], "## end");
    }

    #[test]
    fn test_csv_path_replaces_extension() {
        assert_eq!(
            csv_path_for(Path::new("dir/plan.HTM")),
            PathBuf::from("dir/plan.csv")
        );
    }

    #[test]
    fn test_csv_paths_reject_shared_stem() {
        let inputs = vec![PathBuf::from("dir/plan.htm"), PathBuf::from("dir/plan.html")];
        let err = csv_paths_for(&inputs).unwrap_err();
        assert_eq!(err.kind(), kpgcheck_core::ExErrorKind::InvalidInputFile);
        assert_eq!(err.op(), Some("write_csv"));
        assert_eq!(err.entity(), Some("dir/plan.html"));
        assert!(err.message().contains("plan.csv"));
    }

    #[test]
    fn test_csv_paths_for_distinct_stems() {
        let inputs = vec![PathBuf::from("a.htm"), PathBuf::from("b.htm")];
        assert_eq!(
            csv_paths_for(&inputs).unwrap(),
            vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]
        );
    }
}
