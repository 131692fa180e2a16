//! Numeric column inference and per-column statistics.
//!
//! A column is numeric when at least one of its present cells parses as a
//! finite base-10 float. Cells that fail to parse are dropped from the numeric
//! subset, never counted as zero, and `avg` divides by the size of that subset.

use super::types::{ColumnProfile, ColumnStats, NumericColumn, ParsedTable};
use std::collections::HashSet;

/// Parse a cell as a number.
///
/// Accepts surrounding whitespace, an optional sign, digits with an optional
/// fraction and an optional exponent (`-1.5`, `.5`, `2e3`). Rejects thousands
/// separators, partial prefixes like `12abc`, and non-finite values such as
/// `inf`, `NaN` or `1e400`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn is_numeric(raw: &str) -> bool {
    parse_number(raw).is_some()
}

impl ColumnStats {
    /// Statistics over `values`, or `None` when there are no values.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;

        let mut min = first;
        let mut max = first;
        let mut sum = first;
        for &v in rest {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        let count = values.len();
        Some(Self {
            min,
            max,
            avg: sum / count as f64,
            sum,
            count,
        })
    }
}

/// Parsed numeric subset of column `index`, in row order.
pub fn numeric_values(table: &ParsedTable, index: usize) -> Vec<f64> {
    table.column(index).filter_map(parse_number).collect()
}

/// Raw entry counts and numeric stats for the column at `index`.
pub fn profile_column(table: &ParsedTable, index: usize) -> ColumnProfile {
    let name = table.headers.get(index).cloned().unwrap_or_default();

    let entries: Vec<&str> = table.column(index).filter(|v| !v.is_empty()).collect();
    let unique_values = entries.iter().copied().collect::<HashSet<_>>().len();
    let numeric: Vec<f64> = entries.iter().copied().filter_map(parse_number).collect();

    ColumnProfile {
        name,
        entries: entries.len(),
        unique_values,
        stats: ColumnStats::from_values(&numeric),
    }
}

/// Profiles for every header, in header order. Duplicate names each get their own profile.
pub fn profile_columns(table: &ParsedTable) -> Vec<ColumnProfile> {
    (0..table.column_count())
        .map(|index| profile_column(table, index))
        .collect()
}

/// Name-keyed numeric columns, ordered by the header position where each name first appeared.
///
/// When two headers share a name and both are numeric, the later column's values
/// replace the earlier ones in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericColumns {
    columns: Vec<NumericColumn>,
}

impl NumericColumns {
    pub fn get(&self, name: &str) -> Option<&NumericColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn stats(&self, name: &str) -> Option<&ColumnStats> {
        self.get(name).map(|c| &c.stats)
    }

    pub fn first(&self) -> Option<&NumericColumn> {
        self.columns.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NumericColumn> {
        self.columns.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn insert(&mut self, column: NumericColumn) {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }
}

impl<'a> IntoIterator for &'a NumericColumns {
    type Item = &'a NumericColumn;
    type IntoIter = std::slice::Iter<'a, NumericColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Infer numeric columns and compute their stats. Non-numeric columns are omitted.
pub fn analyze(table: &ParsedTable) -> NumericColumns {
    let mut numeric = NumericColumns::default();

    for (index, name) in table.headers.iter().enumerate() {
        let values = numeric_values(table, index);
        let Some(stats) = ColumnStats::from_values(&values) else {
            continue;
        };
        numeric.insert(NumericColumn {
            name: name.clone(),
            index,
            values,
            stats,
        });
    }

    tracing::debug!(
        columns = table.column_count(),
        numeric = numeric.len(),
        rows = table.row_count(),
        "Analysed table columns"
    );

    numeric
}

/// First header position holding at least one present cell that is not a number.
pub fn label_column(table: &ParsedTable) -> Option<usize> {
    (0..table.column_count()).find(|&index| table.column(index).any(|v| !is_numeric(v)))
}
