//! Markdown report assembly across an ordered set of uploads.
//!
//! One section per file, in upload order: CSV uploads get an overview, a
//! per-column analysis and a row preview; plain-text uploads get line/word
//! counts, a word-frequency table and a content preview. Given the same files
//! and the same timestamp the output is byte-identical.
//!
//! ```
//! use chrono::{TimeZone as _, Utc};
//! use datareport::report::ReportGenerator;
//! use datareport::upload::UploadCollection;
//!
//! let mut uploads = UploadCollection::new();
//! uploads.add("scores.csv", "name,score\nann,3\nbob,5", None)?;
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
//! let report = ReportGenerator::default().generate(uploads.files(), now)?;
//! assert!(report.contains("- Average: 4.00"));
//! # Ok::<(), datareport::error::ReportError>(())
//! ```

mod renderer;

use crate::analyser::{columns, lexical, parser};
use crate::error::{ReportError, Result, ResultExt as _};
use crate::upload::{FileKind, UploadedFile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Knobs for report layout. Defaults match the standard report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Data rows shown in each CSV preview table.
    pub preview_rows: usize,
    /// Characters of text shown before the truncation marker.
    pub preview_chars: usize,
    /// Entries in each word-frequency table.
    pub top_words: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            preview_chars: 500,
            top_words: lexical::TOP_WORDS,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReportGenerator {
    options: ReportOptions,
}

impl ReportGenerator {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Assemble the report for `files`, stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoFiles`] when `files` is empty.
    pub fn generate(&self, files: &[UploadedFile], now: DateTime<Utc>) -> Result<String> {
        if files.is_empty() {
            return Err(ReportError::NoFiles);
        }

        let mut md = String::new();
        renderer::render_header(&mut md, now);

        for (i, file) in files.iter().enumerate() {
            renderer::render_file_heading(&mut md, i + 1, file.name());
            match file.kind() {
                FileKind::Csv => self.render_csv(&mut md, file),
                FileKind::PlainText => self.render_text(&mut md, file),
            }
            renderer::render_file_footer(&mut md);
        }

        renderer::render_summary(&mut md, files.len());

        tracing::info!(files = files.len(), bytes = md.len(), "Report generated");
        Ok(md)
    }

    fn render_csv(&self, md: &mut String, file: &UploadedFile) {
        let table = parser::parse_table(file.content());
        let profiles = columns::profile_columns(&table);
        tracing::debug!(
            file = file.name(),
            columns = table.column_count(),
            rows = table.row_count(),
            "Rendering CSV section"
        );
        renderer::render_table_section(md, &table, &profiles, &self.options);
    }

    fn render_text(&self, md: &mut String, file: &UploadedFile) {
        let summary = lexical::analyze_with_limit(file.content(), self.options.top_words);
        tracing::debug!(
            file = file.name(),
            lines = summary.line_count,
            words = summary.word_count,
            "Rendering text section"
        );
        renderer::render_text_section(md, file.content(), &summary, &self.options);
    }
}

/// Generate a report with default options.
///
/// # Errors
///
/// Returns [`ReportError::NoFiles`] when `files` is empty.
pub fn generate(files: &[UploadedFile], now: DateTime<Utc>) -> Result<String> {
    ReportGenerator::default().generate(files, now)
}

/// `report-<YYYY-MM-DD>.md` for the date of `now`.
pub fn report_file_name(now: DateTime<Utc>) -> String {
    format!("report-{}.md", now.format("%Y-%m-%d"))
}

/// Write `content` to `dir` under [`report_file_name`], creating `dir` if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn write_report(dir: &Path, now: DateTime<Utc>, content: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(report_file_name(now));
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    tracing::info!(path = %path.display(), "Report saved");
    Ok(path)
}
