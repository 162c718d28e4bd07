//! Synonym file loading
//!
//! One synonym group per line, names double-quoted; `#` starts a comment
//! line. Parsing and ambiguity handling live in the core registry.

use std::fs;
use std::path::Path;

use kpgcheck_core::{AmbiguityPolicy, SynonymRegistry};

use crate::errors::{io_error, Result};

/// Load a synonym registry from a text file.
///
/// # Errors
/// - `Io` if the file cannot be read
/// - `InvalidSynonymLine` for the first malformed line
/// - `AmbiguousSynonym` under [`AmbiguityPolicy::Reject`]
pub fn load_synonyms(path: &Path, policy: AmbiguityPolicy) -> Result<SynonymRegistry> {
    let content = fs::read_to_string(path).map_err(|e| io_error("load_synonyms", path, e))?;
    let registry = SynonymRegistry::from_lines(content.lines(), policy)
        .map_err(|e| kpgcheck_core::ExError::from(e).with_entity(path.display().to_string()))?;
    tracing::info!(
        path = %path.display(),
        synonym_group_count = registry.group_count(),
        "Loaded {} synonym groups",
        registry.group_count()
    );
    Ok(registry)
}
