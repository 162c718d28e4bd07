use super::line::{CheckPart, PartReport, ReportLine, Severity};

/// Ordered accumulation of part reports.
///
/// Keeps two views:
/// - the live stream: free-standing notes and findings that contain a
///   discrepancy, in the order they were added, for the caller to print
///   immediately;
/// - the final log: every part header, every finding, and a
///   "no discrepancies" sentinel for each part that found nothing.
#[derive(Debug, Clone, Default)]
pub struct ReportAggregator {
    log: Vec<ReportLine>,
    live: Vec<ReportLine>,
    discrepancy_count: usize,
}

impl ReportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a free-standing note (e.g. a synonym warning) to both views.
    ///
    /// Returns the note so the caller can print it before the checks run.
    pub fn push_note(&mut self, part: CheckPart, text: impl Into<String>) -> &ReportLine {
        let line = ReportLine::new(part, Severity::Note, text);
        self.log.push(line.clone());
        self.live.push(line);
        &self.live[self.live.len() - 1]
    }

    /// Append one part report.
    ///
    /// Returns the live lines contributed by this report so the caller can
    /// print them before the next check runs.
    pub fn append(&mut self, report: &PartReport) -> &[ReportLine] {
        let live_start = self.live.len();
        let part = report.part();

        self.log.extend(
            part.header_lines(report.source())
                .into_iter()
                .map(|text| ReportLine::new(part, Severity::Info, text)),
        );

        for finding in report.findings() {
            self.log.extend(finding.lines().iter().cloned());
            if finding.has_discrepancy() {
                self.live.extend(finding.lines().iter().cloned());
            }
        }

        if report.is_clean() {
            self.log.push(ReportLine::new(
                part,
                Severity::Info,
                part.no_discrepancies_line(),
            ));
        }

        self.discrepancy_count += report.discrepancy_count();
        &self.live[live_start..]
    }

    pub fn live_lines(&self) -> &[ReportLine] {
        &self.live
    }

    pub fn final_log(&self) -> &[ReportLine] {
        &self.log
    }

    /// Discrepancies across every appended report
    pub fn discrepancy_count(&self) -> usize {
        self.discrepancy_count
    }
}
