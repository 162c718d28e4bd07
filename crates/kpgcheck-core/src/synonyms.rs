//! Synonym registry
//!
//! A synonym group is a set of channel names that may legally name the same
//! TX/RX/Enc set. Groups are configured one per line as double-quoted names:
//!
//! ```text
//! # comment
//! "Simplex A" "Simplex B"
//! "Fire Dispatch" "FD Dispatch" "Dispatch"
//! ```
//!
//! Name matching is case-insensitive; names keep the spelling they were
//! configured with.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

use crate::errors::{KpgError, Result};
use crate::{log_op_end, log_op_start};

/// An unordered set of interchangeable channel names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynonymSet {
    names: Vec<String>,
}

impl SynonymSet {
    /// The set containing only `name`.
    pub fn singleton(name: &str) -> Self {
        Self {
            names: vec![name.to_string()],
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        let folded = fold(name);
        self.names.iter().any(|n| fold(n) == folded)
    }
}

/// Which group a name resolves to when it is configured in several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmbiguityPolicy {
    /// The group loaded last wins; a warning is recorded.
    #[default]
    LastWins,
    /// The group loaded first wins; a warning is recorded.
    FirstWins,
    /// Loading fails with `AmbiguousSynonym`.
    Reject,
}

/// Load-time note about a name configured in more than one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynonymWarning {
    /// The name as first written in the configuration
    pub name: String,
    /// 1-based line numbers of every group containing the name, in load order
    pub lines: Vec<usize>,
    /// Line of the group the name resolves to
    pub resolved_line: usize,
}

impl SynonymWarning {
    pub fn message(&self) -> String {
        let lines: Vec<String> = self.lines.iter().map(|l| l.to_string()).collect();
        format!(
            "Channel name \"{}\" appears in multiple synonym groups (lines {}); using the group on line {}",
            self.name,
            lines.join(", "),
            self.resolved_line
        )
    }
}

#[derive(Debug, Clone)]
struct SynonymGroup {
    line: usize,
    set: SynonymSet,
}

/// Read-only lookup from a channel name to its synonym set.
#[derive(Debug, Clone, Default)]
pub struct SynonymRegistry {
    groups: Vec<SynonymGroup>,
    index: HashMap<String, usize>,
    warnings: Vec<SynonymWarning>,
}

impl SynonymRegistry {
    /// A registry with no configured groups; every name resolves to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load groups from synonym configuration lines.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    /// - `InvalidSynonymLine` for a line that is not a sequence of
    ///   double-quoted names. Fatal for the whole load.
    /// - `AmbiguousSynonym` when a name is in several groups and the policy
    ///   is [`AmbiguityPolicy::Reject`].
    pub fn from_lines<I, S>(lines: I, policy: AmbiguityPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        log_op_start!("load_synonyms");

        let mut groups: Vec<SynonymGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        // folded name -> (first spelling, line of every group containing it)
        let mut seen_in: HashMap<String, (String, Vec<usize>)> = HashMap::new();
        let mut ambiguous: Vec<String> = Vec::new();

        for (i, raw) in lines.into_iter().enumerate() {
            let line_number = i + 1;
            let line = raw.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let names =
                parse_synonym_line(line).map_err(|reason| KpgError::InvalidSynonymLine {
                    line_number,
                    line: line.to_string(),
                    reason,
                })?;

            let group_idx = groups.len();
            for name in &names {
                let folded = fold(name);
                let entry = seen_in
                    .entry(folded.clone())
                    .or_insert_with(|| (name.clone(), Vec::new()));
                if entry.1.last() == Some(&line_number) {
                    // listed twice on the same line
                    continue;
                }
                entry.1.push(line_number);
                if entry.1.len() == 2 {
                    ambiguous.push(folded.clone());
                }

                match policy {
                    AmbiguityPolicy::FirstWins => {
                        index.entry(folded).or_insert(group_idx);
                    }
                    AmbiguityPolicy::LastWins | AmbiguityPolicy::Reject => {
                        index.insert(folded, group_idx);
                    }
                }
            }

            groups.push(SynonymGroup {
                line: line_number,
                set: SynonymSet { names },
            });
        }

        let mut warnings = Vec::with_capacity(ambiguous.len());
        for folded in &ambiguous {
            let Some((name, lines)) = seen_in.get(folded) else {
                continue;
            };
            if policy == AmbiguityPolicy::Reject {
                return Err(KpgError::AmbiguousSynonym {
                    name: name.clone(),
                    lines: lines.clone(),
                });
            }
            let resolved_line = index
                .get(folded)
                .and_then(|idx| groups.get(*idx))
                .map(|g| g.line)
                .unwrap_or_default();
            let warning = SynonymWarning {
                name: name.clone(),
                lines: lines.clone(),
                resolved_line,
            };
            tracing::warn!(
                component = module_path!(),
                op = "load_synonyms",
                name = %warning.name,
                resolved_line = warning.resolved_line,
                "{}",
                warning.message()
            );
            warnings.push(warning);
        }

        log_op_end!(
            "load_synonyms",
            duration_ms = start.elapsed().as_millis() as u64,
            synonym_group_count = groups.len(),
            warning_count = warnings.len()
        );

        Ok(Self {
            groups,
            index,
            warnings,
        })
    }

    /// The set containing `name`, or the singleton `{name}`.
    pub fn resolve(&self, name: &str) -> SynonymSet {
        self.index
            .get(&fold(name))
            .and_then(|idx| self.groups.get(*idx))
            .map(|g| g.set.clone())
            .unwrap_or_else(|| SynonymSet::singleton(name))
    }

    /// `candidate` is a legal alias of `name`.
    pub fn are_synonyms(&self, name: &str, candidate: &str) -> bool {
        self.resolve(name).contains(candidate)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Ambiguity notes recorded at load time, one per ambiguous name.
    pub fn warnings(&self) -> &[SynonymWarning] {
        &self.warnings
    }
}

/// Split one synonym line into its double-quoted names.
///
/// Returns the reason the line is malformed on failure.
pub fn parse_synonym_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut names = Vec::new();
    let mut rest = line.trim();

    while !rest.is_empty() {
        let Some(after_open) = rest.strip_prefix('"') else {
            return Err(format!("expected a double-quoted name at '{}'", rest));
        };
        let Some(close) = after_open.find('"') else {
            return Err("unterminated quoted name".to_string());
        };
        let name = &after_open[..close];
        if name.trim().is_empty() {
            return Err("empty quoted name".to_string());
        }
        names.push(name.to_string());

        let tail = &after_open[close + 1..];
        if !tail.is_empty() && !tail.starts_with(char::is_whitespace) {
            return Err("quoted names must be separated by whitespace".to_string());
        }
        rest = tail.trim_start();
    }

    if names.is_empty() {
        return Err("no quoted names".to_string());
    }
    Ok(names)
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}
