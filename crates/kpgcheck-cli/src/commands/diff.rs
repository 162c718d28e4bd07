//! Diff command
//!
//! Usage: kpgcheck diff <FILE1> <FILE2> [--config <PATH>] [--json]

use clap::Args;
use std::path::PathBuf;

use kpgcheck_core::diff::render_human_summary;
use kpgcheck_core::{CrossFileComparator, ExError, KpgError};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// First (older) export
    pub file1: PathBuf,

    /// Second (newer) export
    pub file2: PathBuf,

    /// Configuration file (default: ./kpgcheck.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the structured diff as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.config.as_deref())?;
    super::init_logging(&config, false);

    let exports = super::load_exports(&[args.file1, args.file2])?;
    let [(_, first), (_, second)] = exports.as_slice() else {
        return Err("expected exactly two exports".into());
    };

    let diff = CrossFileComparator.compare(first, second);

    if args.json {
        let json = serde_json::to_string_pretty(&diff)
            .map_err(|e| ExError::from(KpgError::from(e)).with_op("render_diff"))?;
        println!("{}", json);
    } else {
        print!("{}", render_human_summary(&diff));
    }

    Ok(())
}
