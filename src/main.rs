//! # datareport command-line entry point
//!
//! ```bash
//! datareport report sales.csv notes.txt            # writes ./report-<date>.md
//! datareport report sales.csv --stdout             # prints the Markdown
//! datareport chart sales.csv --pretty              # chart series as JSON
//! ```
//!
//! Set `RUST_LOG=debug` to see per-file analysis logs on stderr.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // report and JSON output go to stdout

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let loaded = datareport::config::load_settings(cli.config.as_deref())?;
    datareport::logging::init(&loaded.settings.logging)?;
    if let Some(ignored) = &loaded.ignored {
        tracing::warn!("{ignored}");
    }

    cli::run_command(cli.command, &loaded.settings)
}
