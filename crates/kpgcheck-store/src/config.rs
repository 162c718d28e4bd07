//! TOML configuration
//!
//! ```toml
//! [synonyms]
//! path = "synonyms.txt"
//! ambiguity = "last-wins"
//!
//! [output]
//! csv = true
//! report_file = "kpgCheck.log"
//!
//! [logging]
//! profile = "development"
//! ```
//!
//! Every section and key is optional. Relative paths are resolved against
//! the directory holding the configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use kpgcheck_core::logging_facility::Profile;
use kpgcheck_core::AmbiguityPolicy;
use serde::Deserialize;

use crate::errors::{invalid_config, Result};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "kpgcheck.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KpgConfig {
    #[serde(default)]
    pub synonyms: SynonymSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynonymSettings {
    /// Synonym file; absent means no groups
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub ambiguity: AmbiguityPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Write `<input-stem>.csv` next to each input
    #[serde(default = "default_csv")]
    pub csv: bool,
    /// Detailed log file; empty disables it
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            report_file: default_report_file(),
        }
    }
}

fn default_csv() -> bool {
    true
}

fn default_report_file() -> String {
    "kpgCheck.log".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    #[serde(default)]
    pub profile: Profile,
}

impl KpgConfig {
    /// Parse configuration text. `origin` names the source in errors.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| invalid_config(origin, e))
    }

    /// Load a configuration file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| invalid_config(path, e))?;
        let mut config = Self::from_toml_str(&content, path)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Load `explicit` if given, otherwise `kpgcheck.toml` from `cwd` if it
    /// exists, otherwise defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = cwd.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Synonym file path, resolved against the configuration's directory.
    pub fn synonyms_path(&self) -> Option<PathBuf> {
        self.synonyms.path.as_deref().map(|p| self.resolve(p))
    }

    /// Report file path, or `None` when disabled.
    pub fn report_file(&self) -> Option<PathBuf> {
        let file = self.output.report_file.trim();
        (!file.is_empty()).then(|| self.resolve(Path::new(file)))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}
