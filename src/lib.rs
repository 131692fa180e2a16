//! # datareport - CSV and text analysis reports
//!
//! datareport ingests delimited-text and plain-text files, profiles them, and
//! produces a Markdown analysis report plus chart-ready data series.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::Utc;
//! use datareport::{charts, report, upload::UploadCollection};
//!
//! let mut uploads = UploadCollection::new();
//! uploads.add("sales.csv", "region,revenue\nNorth,120\nSouth,80", None)?;
//! uploads.add("notes.txt", "Revenue grew in the north", None)?;
//!
//! let markdown = report::generate(uploads.files(), Utc::now())?;
//! assert!(markdown.contains("## File 2: notes.txt"));
//!
//! let chart = charts::from_uploads(uploads.files());
//! assert_eq!(chart.time_series.len(), 2);
//! # Ok::<(), datareport::error::ReportError>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`upload`]: validation, one-time CSV/text classification, the ordered upload collection
//! - [`analyser`]: delimited-text parsing, numeric column stats, word frequencies
//! - [`charts`]: time/category/distribution series and summary metrics
//! - [`report`]: Markdown report assembly and persistence
//! - [`config`]: JSON settings
//! - [`error`]: error types and handling utilities
//! - [`logging`]: tracing subscriber setup
//!
//! ## Data flow
//!
//! ```text
//! file ──> upload (Csv | PlainText)
//!            ├─ Csv ──> parser ──> columns ──> report / charts
//!            └─ PlainText ──────> lexical ──> report
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod charts;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod upload;
pub mod utils;
