//! Check command
//!
//! Usage: kpgcheck check <FILE1> [<FILE2>] [--config <PATH>] [--synonyms <PATH>]
//!        [--no-csv] [--report-file <PATH>] [--json-logs]
//!
//! Runs Parts 1-3 over each file in argument order and, with two files,
//! compares them. Blocks that found discrepancies are printed as each
//! check finishes; the detailed log follows at the end.

use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use kpgcheck_core::diff::diff_report;
use kpgcheck_core::report::ReportLine;
use kpgcheck_core::{
    check_file, log_op_end, log_op_start, CheckPart, CrossFileComparator, ReportAggregator,
    SynonymRegistry,
};
use kpgcheck_store::report_file::{run_header, write_report_file};
use kpgcheck_store::synonyms_file::load_synonyms;
use kpgcheck_store::tabular::{csv_paths_for, write_csv_file};

const BANNER_RULE: &str = "=========================================";

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// KPG-D1N export (.htm or .html)
    pub file1: PathBuf,

    /// Second export to compare against the first
    pub file2: Option<PathBuf>,

    /// Configuration file (default: ./kpgcheck.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Synonym file, overriding the configuration
    #[arg(long)]
    pub synonyms: Option<PathBuf>,

    /// Do not write <input>.csv files
    #[arg(long)]
    pub no_csv: bool,

    /// Detailed log file, overriding the configuration ("" disables it)
    #[arg(long)]
    pub report_file: Option<String>,

    /// Emit diagnostics as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Product output: printed as produced and kept for the report file.
#[derive(Default)]
struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        println!("{}", line);
        self.lines.push(line);
    }

    fn say_all<'a>(&mut self, lines: impl IntoIterator<Item = &'a ReportLine>) {
        for line in lines {
            self.say(line.text());
        }
    }
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.config.as_deref())?;
    super::init_logging(&config, args.json_logs);

    let mut paths = vec![args.file1.clone()];
    paths.extend(args.file2.clone());

    let start = Instant::now();
    log_op_start!("check", file_count = paths.len());

    // Everything fatal happens before the first check runs
    let synonyms = match args.synonyms.clone().or_else(|| config.synonyms_path()) {
        Some(path) => load_synonyms(&path, config.synonyms.ambiguity)?,
        None => SynonymRegistry::empty(),
    };
    let exports = super::load_exports(&paths)?;
    let write_csv = config.output.csv && !args.no_csv;
    if write_csv {
        csv_paths_for(&paths)?;
    }

    let labels: Vec<&str> = exports.iter().map(|(label, _)| label.as_str()).collect();
    let header = run_header(&labels, chrono::Local::now());
    let mut out = Transcript::default();
    for line in &header {
        println!("{}", line);
    }

    if write_csv {
        for (path, (_, records)) in paths.iter().zip(&exports) {
            let written = write_csv_file(path, records)?;
            out.say(format!("Generated {}", written.display()));
        }
    }

    out.say(BANNER_RULE);
    out.say(" Summary of discrepancies:");
    out.say(BANNER_RULE);

    let mut aggregator = ReportAggregator::new();
    for warning in synonyms.warnings() {
        let note = aggregator.push_note(
            CheckPart::Configuration,
            format!("NOTE: {}", warning.message()),
        );
        out.say(note.text());
    }

    for (label, records) in &exports {
        for report in check_file(label, records, &synonyms) {
            let live = aggregator.append(&report);
            out.say_all(live);
        }
    }

    if let [(first_label, first), (second_label, second)] = exports.as_slice() {
        let diff = CrossFileComparator.compare(first, second);
        let report = diff_report(&format!("{} vs {}", first_label, second_label), &diff);
        let live = aggregator.append(&report);
        out.say_all(live);
    }

    out.say(BANNER_RULE);
    out.say("Detailed log, including discrepancies:");
    out.say_all(aggregator.final_log());

    let report_file = match &args.report_file {
        Some(path) if path.trim().is_empty() => None,
        Some(path) => Some(PathBuf::from(path)),
        None => config.report_file(),
    };
    if let Some(path) = report_file {
        write_report_file(&path, &header, &out.lines)?;
    }

    log_op_end!(
        "check",
        duration_ms = start.elapsed().as_millis() as u64,
        discrepancy_count = aggregator.discrepancy_count()
    );
    Ok(())
}
