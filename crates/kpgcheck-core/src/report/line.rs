use serde::Serialize;

use crate::model::Field;

/// Rule between two dashed lines in report headers.
pub const RULE: &str = "-----------------------------------------";

/// Which check produced a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CheckPart {
    /// Notes raised while loading configuration, ahead of any check
    Configuration,
    /// Part 1: same-named channels
    DuplicateNames,
    /// Part 2: same TX/RX/Enc sets
    FrequencySets,
    /// Part 3: simplex encode/decode tones
    SimplexTones,
    /// Comparison between two exports
    CrossFile,
}

impl CheckPart {
    /// Header block written before this part's findings in the final log.
    pub fn header_lines(&self, source: &str) -> Vec<String> {
        let (title, body): (String, Vec<&str>) = match self {
            CheckPart::Configuration => (
                format!("CONFIGURATION: {}", source),
                vec!["  Notes raised while loading the synonym file:"],
            ),
            CheckPart::DuplicateNames => (
                format!("INTERNAL CONSISTENCY CHECK: {}", source),
                vec![
                    "  Part 1: Report all channel names that appear more than once in the file, and show any discrepancies:",
                    "   - channels with the same name should have identical TX/RX/Enc/Dec/Spacing/PTT ID",
                ],
            ),
            CheckPart::FrequencySets => (
                format!("INTERNAL CONSISTENCY CHECK: {}", source),
                vec![
                    "  Part 2: Report all TX/RX/Enc sets that appear more than once in the file, and show any discrepancies:",
                    "   - channels with the same TX/RX/Enc values should have identical name/Spacing/PTT ID (and Dec, for simplex)",
                    "   - names listed together in the synonym file are accepted",
                ],
            ),
            CheckPart::SimplexTones => (
                format!("INTERNAL CONSISTENCY CHECK: {}", source),
                vec![
                    "  Part 3: Report all simplex channels whose decode tone is neither None nor the encode tone:",
                    "   - simplex channels (TX = RX) should decode on the tone they encode, or not decode at all",
                ],
            ),
            CheckPart::CrossFile => (
                format!("FILE COMPARISON: {}", source),
                vec!["  Channels added, removed, or changed between the two files (keyed by Zone Name:Channel Name):"],
            ),
        };

        let mut lines = Vec::with_capacity(body.len() + 3);
        lines.push(RULE.to_string());
        lines.push(title);
        lines.extend(body.iter().map(|s| s.to_string()));
        lines.push(RULE.to_string());
        lines
    }

    /// Sentinel written when a part finds nothing.
    pub fn no_discrepancies_line(&self) -> &'static str {
        match self {
            CheckPart::CrossFile => "  No differences found.",
            _ => "  No discrepancies found.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Structure: group headers and locations
    Info,
    /// Informational verdict (legal synonym, configuration note)
    Note,
    Discrepancy,
}

/// One human-readable finding line. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    part: CheckPart,
    severity: Severity,
    field: Option<Field>,
    text: String,
}

impl ReportLine {
    pub fn new(part: CheckPart, severity: Severity, text: impl Into<String>) -> Self {
        Self {
            part,
            severity,
            field: None,
            text: text.into(),
        }
    }

    /// A verdict line, optionally about one field.
    pub fn for_field(
        part: CheckPart,
        severity: Severity,
        field: impl Into<Option<Field>>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            part,
            severity,
            field: field.into(),
            text: text.into(),
        }
    }

    pub fn part(&self) -> CheckPart {
        self.part
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The field the verdict is about, for field-level lines
    pub fn field(&self) -> Option<Field> {
        self.field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_discrepancy(&self) -> bool {
        self.severity == Severity::Discrepancy
    }
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The block of lines about one group (or one record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    part: CheckPart,
    lines: Vec<ReportLine>,
}

impl Finding {
    pub fn new(part: CheckPart) -> Self {
        Self {
            part,
            lines: Vec::new(),
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.lines
            .push(ReportLine::new(self.part, Severity::Info, text));
    }

    pub fn note(&mut self, field: impl Into<Option<Field>>, text: impl Into<String>) {
        self.lines
            .push(ReportLine::for_field(self.part, Severity::Note, field, text));
    }

    pub fn discrepancy(&mut self, field: impl Into<Option<Field>>, text: impl Into<String>) {
        self.lines.push(ReportLine::for_field(
            self.part,
            Severity::Discrepancy,
            field,
            text,
        ));
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn discrepancy_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_discrepancy()).count()
    }

    pub fn has_discrepancy(&self) -> bool {
        self.lines.iter().any(ReportLine::is_discrepancy)
    }
}

/// Everything one check found in one file (or one file pair).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartReport {
    part: CheckPart,
    source: String,
    findings: Vec<Finding>,
}

impl PartReport {
    pub fn new(part: CheckPart, source: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            part,
            source: source.into(),
            findings,
        }
    }

    pub fn part(&self) -> CheckPart {
        self.part
    }

    /// Label of the checked file (or file pair)
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// All lines in order, across findings
    pub fn lines(&self) -> impl Iterator<Item = &ReportLine> {
        self.findings.iter().flat_map(|f| f.lines().iter())
    }

    pub fn discrepancies(&self) -> impl Iterator<Item = &ReportLine> {
        self.lines().filter(|l| l.is_discrepancy())
    }

    pub fn discrepancy_count(&self) -> usize {
        self.findings.iter().map(Finding::discrepancy_count).sum()
    }

    /// No discrepancy in any finding
    pub fn is_clean(&self) -> bool {
        self.discrepancy_count() == 0
    }
}
