pub mod check;
pub mod diff;

use std::path::{Path, PathBuf};

use kpgcheck_core::logging_facility::{self, Profile};
use kpgcheck_core::ChannelRecord;
use kpgcheck_store::{KpgConfig, KpgHtmlExport, RecordSource};

/// Load the configuration for this run.
pub(crate) fn load_config(
    explicit: Option<&Path>,
) -> Result<KpgConfig, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    Ok(KpgConfig::discover(explicit, &cwd)?)
}

pub(crate) fn init_logging(config: &KpgConfig, json_logs: bool) {
    let profile = if json_logs {
        Profile::Production
    } else {
        config.logging.profile
    };
    logging_facility::init(profile);
}

/// Open every input, then read them all. Nothing is read unless every
/// path is valid.
pub(crate) fn load_exports(
    paths: &[PathBuf],
) -> Result<Vec<(String, Vec<ChannelRecord>)>, Box<dyn std::error::Error>> {
    let exports = paths
        .iter()
        .map(KpgHtmlExport::open)
        .collect::<Result<Vec<_>, _>>()?;

    let mut loaded = Vec::with_capacity(exports.len());
    for export in &exports {
        loaded.push((export.label().to_string(), export.load()?));
    }
    Ok(loaded)
}
