//! kpgcheck store - file collaborators around the core
//!
//! Provides:
//! - KPG-D1N HTML export extraction
//! - Synonym file loading
//! - Tabular CSV output
//! - Detailed report file output
//! - TOML configuration

pub mod config;
pub mod errors;
pub mod export;
pub mod report_file;
pub mod synonyms_file;
pub mod tabular;

// Re-export key types
pub use config::KpgConfig;
pub use errors::Result;
pub use export::{KpgHtmlExport, RecordSource};
