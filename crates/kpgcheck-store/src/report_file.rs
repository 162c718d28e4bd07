//! Detailed report file
//!
//! The run header followed by the final ordered log, one line per report
//! line. Written through a temp file and renamed into place so a failed
//! run never leaves a half-written report behind.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use kpgcheck_core::report::line::RULE;

use crate::errors::{io_error, Result};

pub const TOOL_BANNER: &str =
    "kpgcheck - Kenwood data conversion, validation, and comparison tool";

/// Header lines naming the tool, run time and input files.
pub fn run_header<S: AsRef<str>>(files: &[S], run_time: DateTime<Local>) -> Vec<String> {
    let mut lines = vec![
        TOOL_BANNER.to_string(),
        format!("  Run time: {}", run_time.format("%Y-%m-%d %H:%M:%S")),
    ];
    lines.extend(
        files
            .iter()
            .enumerate()
            .map(|(i, f)| format!("  File {}: {}", i + 1, f.as_ref())),
    );
    lines.push(RULE.to_string());
    lines
}

/// Write `header` then `lines` to `path`, replacing any previous report.
pub fn write_report_file<L: Display>(path: &Path, header: &[String], lines: &[L]) -> Result<()> {
    let mut content = String::new();
    for line in header {
        content.push_str(line);
        content.push('\n');
    }
    for line in lines {
        content.push_str(&line.to_string());
        content.push('\n');
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("write_report", parent, e))?;
    }
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| io_error("write_report", &temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| io_error("write_report", path, e))?;

    tracing::debug!(path = %path.display(), line_count = lines.len(), "report file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_run_header_lists_files() {
        let run_time = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let header = run_header(&["a.htm", "b.htm"], run_time);
        assert_eq!(header[0], TOOL_BANNER);
        assert_eq!(header[1], "  Run time: 2024-03-09 14:05:00");
        assert_eq!(header[2], "  File 1: a.htm");
        assert_eq!(header[3], "  File 2: b.htm");
        assert_eq!(header.last().map(String::as_str), Some(RULE));
    }

    #[test]
    fn test_write_report_replaces_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("kpgCheck.log");

        write_report_file(&path, &["old".to_string()], &["stale"]).unwrap();
        write_report_file(&path, &["head".to_string()], &["one", "two"]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "head\none\ntwo\n");
        assert!(!path.with_extension("tmp").exists());
    }
}
