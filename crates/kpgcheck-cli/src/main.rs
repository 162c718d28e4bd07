//! kpgcheck CLI
//!
//! Validate and compare KPG-D1N channel plan exports

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "kpgcheck")]
#[command(
    about = "kpgcheck - Kenwood data conversion, validation, and comparison tool",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check one export for internal consistency, or two and compare them
    Check(commands::check::CheckArgs),
    /// Compare two exports by zone and channel name
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
