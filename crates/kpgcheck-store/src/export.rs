//! KPG-D1N HTML export extraction
//!
//! Channel data is read from the per-channel "Channel Edit" tables rather
//! than the zone overview table, since some values (PTT ID among them) only
//! appear in the per-channel tables.
//!
//! Layout of one channel entry in the export:
//!
//! ```text
//! <h1>Channel Edit</h1>        (doubled for the first channel of a zone)
//! <table> Channel Edit </table>
//! <table> General </table>
//! <table> Analog </table>
//! ```
//!
//! Every `tr` with exactly two `td` cells is a key/value pair.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use kpgcheck_core::{log_op_end, log_op_error, log_op_start, ChannelRecord};
use scraper::{ElementRef, Html, Selector};

use crate::errors::{internal, invalid_input, io_error, unsupported_document, Result};

/// Marker the first body heading must contain.
pub const SUPPORTED_TOOL: &str = "KPG-D1N";

/// Heading text that starts a channel entry.
pub const CHANNEL_HEADING: &str = "Channel Edit";

/// Tables read per channel entry: Channel Edit, General, Analog.
pub const TABLES_PER_ENTRY: usize = 3;

/// Accepted input extensions, compared case-insensitively.
pub const INPUT_EXTENSIONS: [&str; 2] = ["htm", "html"];

/// A supplier of ordered channel records.
pub trait RecordSource {
    /// Label used in report headers
    fn label(&self) -> &str;

    /// Records in source order, duplicates preserved.
    ///
    /// # Errors
    /// Any failure is fatal for the run.
    fn load(&self) -> Result<Vec<ChannelRecord>>;
}

/// Check that `path` names an existing `.htm`/`.html` file.
pub fn validate_input_path(path: &Path) -> Result<()> {
    let extension_ok = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false);
    if !extension_ok {
        return Err(invalid_input(path, "must specify an input .htm or .html file"));
    }
    if !path.is_file() {
        return Err(invalid_input(path, "file does not exist"));
    }
    Ok(())
}

/// A KPG-D1N HTML export on disk.
#[derive(Debug, Clone)]
pub struct KpgHtmlExport {
    path: PathBuf,
    label: String,
}

impl KpgHtmlExport {
    /// Validate the path and wrap it. Nothing is read yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        validate_input_path(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            label: path.display().to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for KpgHtmlExport {
    fn label(&self) -> &str {
        &self.label
    }

    fn load(&self) -> Result<Vec<ChannelRecord>> {
        let start = Instant::now();
        log_op_start!("extract_records", file = %self.label);

        let bytes = fs::read(&self.path).map_err(|e| io_error("read_export", &self.path, e))?;
        // exports are not guaranteed to be UTF-8
        let html = String::from_utf8_lossy(&bytes);

        match extract_records(&html) {
            Ok(records) => {
                tracing::info!(
                    file = %self.label,
                    record_count = records.len(),
                    "Imported {} channel entries",
                    records.len()
                );
                log_op_end!(
                    "extract_records",
                    duration_ms = start.elapsed().as_millis() as u64,
                    record_count = records.len()
                );
                Ok(records)
            }
            Err(err) => {
                log_op_error!(
                    "extract_records",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| internal("extract_records", format!("bad selector {css}: {e:?}")))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Extract every channel entry from an export document.
///
/// # Errors
/// - `UnsupportedDocument` when the first body heading does not name
///   KPG-D1N.
/// - `MissingField` when an entry lacks one of the eleven fields.
pub fn extract_records(html: &str) -> Result<Vec<ChannelRecord>> {
    let document = Html::parse_document(html);
    let first_heading = selector("body h1")?;
    let headings_and_tables = selector("body h1, body table")?;
    let rows = selector("tr")?;
    let cells = selector("td")?;

    let tool = document
        .select(&first_heading)
        .next()
        .map(cell_text)
        .ok_or_else(|| unsupported_document("document has no heading"))?;
    if !tool.contains(SUPPORTED_TOOL) {
        return Err(unsupported_document(&format!(
            "only {} html files are currently supported (found \"{}\")",
            SUPPORTED_TOOL, tool
        )));
    }

    let elements: Vec<ElementRef<'_>> = document.select(&headings_and_tables).collect();
    let is_heading = |el: &ElementRef<'_>| el.value().name() == "h1";

    let mut records = Vec::new();
    for (idx, element) in elements.iter().enumerate() {
        if !is_heading(element) || cell_text(*element) != CHANNEL_HEADING {
            continue;
        }
        // the first channel of each zone carries two headings; use the second
        if elements.get(idx + 1).is_some_and(is_heading) {
            continue;
        }

        let mut fields: BTreeMap<String, String> = BTreeMap::new();
        let tables = elements[idx + 1..]
            .iter()
            .filter(|el| !is_heading(*el))
            .take(TABLES_PER_ENTRY);
        for table in tables {
            for row in table.select(&rows) {
                let tds: Vec<ElementRef<'_>> = row.select(&cells).collect();
                if let [key, value] = tds.as_slice() {
                    fields.insert(cell_text(*key), cell_text(*value));
                }
            }
        }

        records.push(ChannelRecord::from_source_fields(&fields, records.len() + 1)?);
    }

    Ok(records)
}
