use anyhow::{Context as _, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use datareport::charts::{self, ChartData, DisplayMetric, fallback::DEFAULT_DISPLAY_METRICS};
use datareport::config::AppSettings;
use datareport::report::{self, ReportGenerator};
use datareport::upload::UploadCollection;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "datareport",
    version,
    about = "Turn CSV and plain-text files into Markdown analysis reports"
)]
pub struct Cli {
    /// Path to a JSON settings file. Defaults to the platform config directory.
    #[arg(long, global = true, env = "DATAREPORT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse files and write a Markdown report
    Report {
        /// Files to analyse (.csv or .txt), in report order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Directory to save `report-<date>.md` into. Overrides the configured output dir.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the report to stdout instead of saving it
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Print chart-ready series for the first CSV file as JSON
    Chart {
        /// Files to consider; the first .csv drives the charts
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

/// Chart JSON, plus the dashboard figures to show when no summary could be derived.
#[derive(Serialize)]
struct ChartOutput {
    #[serde(flatten)]
    data: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_metrics: Option<&'static [DisplayMetric]>,
}

pub fn run_command(command: Commands, settings: &AppSettings) -> Result<()> {
    match command {
        Commands::Report {
            files,
            output,
            stdout,
        } => handle_report(&files, output, stdout, settings),
        Commands::Chart { files, pretty } => handle_chart(&files, pretty),
    }
}

fn load_uploads(files: &[PathBuf]) -> UploadCollection {
    let mut uploads = UploadCollection::new();
    let rejected = uploads.add_paths(files);
    if !rejected.is_empty() {
        tracing::warn!(
            "Skipped {} of {} file(s); only .txt and .csv files are accepted",
            rejected.len(),
            files.len()
        );
    }
    uploads
}

fn handle_report(
    files: &[PathBuf],
    output: Option<PathBuf>,
    stdout: bool,
    settings: &AppSettings,
) -> Result<()> {
    let uploads = load_uploads(files);
    let now = Utc::now();

    let generator = ReportGenerator::new(settings.report_options());
    let content = generator
        .generate(uploads.files(), now)
        .context("Failed to generate report")?;

    if stdout {
        print!("{content}");
        return Ok(());
    }

    let dir = output.unwrap_or_else(|| settings.output_dir());
    let path = report::write_report(&dir, now, &content)?;
    println!(
        "Analysed {} file(s); report saved to {}",
        uploads.len(),
        path.display()
    );
    Ok(())
}

fn handle_chart(files: &[PathBuf], pretty: bool) -> Result<()> {
    let uploads = load_uploads(files);
    if uploads.first_csv().is_none() {
        tracing::info!("No CSV file among the inputs; emitting fallback chart data");
    }

    let data = charts::from_uploads(uploads.files());
    let display_metrics = data
        .summary_metrics
        .is_none()
        .then_some(DEFAULT_DISPLAY_METRICS.as_slice());
    let output = ChartOutput {
        data,
        display_metrics,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}
