//! Chart-ready series derived from a parsed table.
//!
//! The adapter reshapes a [`ParsedTable`] into a time series, a category
//! series, a distribution and summary metrics. It carries no presentation
//! concerns; renderers consume the plain [`ChartData`] structure (or its JSON
//! form). Whenever the table cannot fill a series, the literal dataset from
//! [`fallback`] is substituted for that series alone.

pub mod fallback;

use crate::analyser::columns::{self, NumericColumns};
use crate::analyser::{ParsedTable, parser};
use crate::upload::UploadedFile;
use crate::utils::{char_len, truncate_chars};
use serde::Serialize;

pub const TIME_SERIES_ROWS: usize = 12;
pub const CATEGORY_ROWS: usize = 7;
pub const CATEGORY_LABEL_CHARS: usize = 10;
pub const DISTRIBUTION_COLUMNS: usize = 6;

/// Slice labels longer than this are shortened to `SLICE_LABEL_KEEP` chars plus "...".
const SLICE_LABEL_MAX: usize = 15;
const SLICE_LABEL_KEEP: usize = 12;

/// One x-axis point carrying up to two numeric series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    /// First numeric column.
    pub value: f64,
    /// Second numeric column, when the table has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value2: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryMetric {
    pub value: f64,
    pub annotation: String,
}

/// Headline figures for the first numeric column.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub column: String,
    pub total: SummaryMetric,
    pub average: SummaryMetric,
    pub minimum: SummaryMetric,
    pub maximum: SummaryMetric,
}

/// A preformatted dashboard figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayMetric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    pub time_series: Vec<SeriesPoint>,
    pub category_series: Vec<SeriesPoint>,
    pub distribution: Vec<DistributionSlice>,
    pub summary_metrics: Option<SummaryMetrics>,
}

/// Build chart data for `table`, falling back to literal datasets where needed.
pub fn adapt(table: Option<&ParsedTable>) -> ChartData {
    let Some(table) = table.filter(|t| !t.is_empty()) else {
        tracing::debug!("No tabular data; using fallback chart data");
        return fallback::chart_data();
    };

    let numeric = columns::analyze(table);
    let label_col = columns::label_column(table);
    let series_cols: Vec<usize> = numeric.iter().take(2).map(|c| c.index).collect();

    let time_series = series_points(table, label_col, &series_cols, TIME_SERIES_ROWS, None);
    let category_series = series_points(
        table,
        label_col,
        &series_cols,
        CATEGORY_ROWS,
        Some(CATEGORY_LABEL_CHARS),
    );
    let distribution = distribution(&numeric);

    ChartData {
        time_series: or_fallback(time_series, fallback::time_series),
        category_series: or_fallback(category_series, fallback::category_series),
        distribution: or_fallback(distribution, fallback::distribution),
        summary_metrics: summary_metrics(&numeric, table.row_count()),
    }
}

/// Chart data for the first CSV upload, or the fallback dataset when there is none.
pub fn from_uploads(files: &[UploadedFile]) -> ChartData {
    let table = files
        .iter()
        .find(|f| f.is_csv())
        .map(|f| parser::parse_table(f.content()));
    adapt(table.as_ref())
}

fn or_fallback<T>(series: Vec<T>, fallback: fn() -> Vec<T>) -> Vec<T> {
    if series.is_empty() {
        fallback()
    } else {
        series
    }
}

fn row_label(table: &ParsedTable, row: usize, label_col: Option<usize>) -> String {
    label_col
        .and_then(|col| table.cell(row, col))
        .filter(|s| !s.is_empty())
        .map_or_else(|| format!("Row {}", row + 1), str::to_owned)
}

fn cell_value(table: &ParsedTable, row: usize, col: usize) -> f64 {
    table
        .cell(row, col)
        .and_then(columns::parse_number)
        .unwrap_or(0.0)
}

fn series_points(
    table: &ParsedTable,
    label_col: Option<usize>,
    series_cols: &[usize],
    limit: usize,
    label_chars: Option<usize>,
) -> Vec<SeriesPoint> {
    let Some((&first, rest)) = series_cols.split_first() else {
        return Vec::new();
    };
    let second = rest.first().copied();

    (0..table.row_count().min(limit))
        .map(|row| {
            let label = row_label(table, row, label_col);
            let label = match label_chars {
                Some(max) => truncate_chars(&label, max).to_owned(),
                None => label,
            };
            SeriesPoint {
                label,
                value: cell_value(table, row, first),
                value2: second.map(|col| cell_value(table, row, col)),
            }
        })
        .collect()
}

fn slice_label(name: &str) -> String {
    if char_len(name) > SLICE_LABEL_MAX {
        format!("{}...", truncate_chars(name, SLICE_LABEL_KEEP))
    } else {
        name.to_owned()
    }
}

/// Nearest integer, with halves rounded towards positive infinity (`-2.5` -> `-2`).
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn distribution(numeric: &NumericColumns) -> Vec<DistributionSlice> {
    numeric
        .iter()
        .take(DISTRIBUTION_COLUMNS)
        .map(|c| DistributionSlice {
            label: slice_label(&c.name),
            value: round_half_up(c.stats.sum),
        })
        .collect()
}

fn summary_metrics(numeric: &NumericColumns, row_count: usize) -> Option<SummaryMetrics> {
    let column = numeric.first()?;
    let stats = &column.stats;

    Some(SummaryMetrics {
        column: column.name.clone(),
        total: SummaryMetric {
            value: stats.sum,
            annotation: format!("{row_count} rows"),
        },
        average: SummaryMetric {
            value: stats.avg,
            annotation: column.name.clone(),
        },
        minimum: SummaryMetric {
            value: stats.min,
            annotation: "lowest value".to_owned(),
        },
        maximum: SummaryMetric {
            value: stats.max,
            annotation: "highest value".to_owned(),
        },
    })
}
