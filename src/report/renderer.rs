//! Markdown rendering for report sections.

use super::ReportOptions;
use crate::analyser::{ColumnProfile, ParsedTable, TextSummary};
use crate::utils::{char_len, to_fixed, truncate_chars};
use chrono::{DateTime, Utc};

pub(super) fn render_header(md: &mut String, now: DateTime<Utc>) {
    md.push_str("# Data Analysis Report\n");
    md.push_str(&format!(
        "Generated: {}\n\n",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str("---\n\n");
}

pub(super) fn render_file_heading(md: &mut String, position: usize, name: &str) {
    md.push_str(&format!("## File {position}: {name}\n\n"));
}

/// Overview, per-column analysis and a row preview for a CSV upload.
pub(super) fn render_table_section(
    md: &mut String,
    table: &ParsedTable,
    profiles: &[ColumnProfile],
    options: &ReportOptions,
) {
    md.push_str("### Overview\n");
    md.push_str(&format!("- **Columns:** {}\n", table.column_count()));
    md.push_str(&format!("- **Rows:** {}\n", table.row_count()));
    md.push_str(&format!("- **Headers:** {}\n\n", table.headers.join(", ")));

    md.push_str("### Column Analysis\n\n");
    for profile in profiles {
        render_column_profile(md, profile);
    }

    md.push_str(&format!(
        "### Data Preview (First {} rows)\n\n",
        options.preview_rows
    ));
    render_pipe_row(md, &table.headers);
    // separator width follows the header, not the widest row
    render_pipe_row(md, &vec!["---"; table.column_count()]);
    for row in table.rows.iter().take(options.preview_rows) {
        render_pipe_row(md, row);
    }
    md.push('\n');
}

fn render_column_profile(md: &mut String, profile: &ColumnProfile) {
    md.push_str(&format!("#### {}\n", profile.name));
    md.push_str(&format!("- Total entries: {}\n", profile.entries));
    md.push_str(&format!("- Unique values: {}\n", profile.unique_values));

    if let Some(stats) = &profile.stats {
        md.push_str(&format!("- Min: {}\n", to_fixed(stats.min, 2)));
        md.push_str(&format!("- Max: {}\n", to_fixed(stats.max, 2)));
        md.push_str(&format!("- Average: {}\n", to_fixed(stats.avg, 2)));
        md.push_str(&format!("- Sum: {}\n", to_fixed(stats.sum, 2)));
    }
    md.push('\n');
}

fn render_pipe_row<S: AsRef<str>>(md: &mut String, cells: &[S]) {
    let cells: Vec<&str> = cells.iter().map(|c| c.as_ref()).collect();
    md.push_str(&format!("| {} |\n", cells.join(" | ")));
}

/// Counts, word frequencies and a content preview for a plain-text upload.
pub(super) fn render_text_section(
    md: &mut String,
    content: &str,
    summary: &TextSummary,
    options: &ReportOptions,
) {
    md.push_str("### Text Analysis\n");
    md.push_str(&format!("- **Lines:** {}\n", summary.line_count));
    md.push_str(&format!("- **Words:** {}\n", summary.word_count));
    md.push_str(&format!("- **Characters:** {}\n", summary.char_count));
    md.push_str(&format!(
        "- **Average words per line:** {}\n\n",
        to_fixed(summary.avg_words_per_line, 1)
    ));

    if !summary.top_words.is_empty() {
        md.push_str(&format!("### Top {} Words\n\n", options.top_words));
        md.push_str("| Word | Frequency |\n");
        md.push_str("| --- | --- |\n");
        for entry in &summary.top_words {
            md.push_str(&format!("| {} | {} |\n", entry.word, entry.count));
        }
        md.push('\n');
    }

    md.push_str("### Content Preview\n\n");
    md.push_str("```\n");
    md.push_str(truncate_chars(content, options.preview_chars));
    if char_len(content) > options.preview_chars {
        md.push_str("...");
    }
    md.push_str("\n```\n\n");
}

pub(super) fn render_file_footer(md: &mut String) {
    md.push_str("---\n\n");
}

pub(super) fn render_summary(md: &mut String, file_count: usize) {
    md.push_str("## Summary\n\n");
    md.push_str(&format!(
        "This report analyzed {file_count} file(s) and extracted key metrics \
         and insights from the data.\n"
    ));
}
