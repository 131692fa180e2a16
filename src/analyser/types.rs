use serde::{Deserialize, Serialize};

/// Header row plus data rows extracted from delimited text.
///
/// Rows are not padded or truncated to the header width; use [`ParsedTable::cell`]
/// to read a position that may not exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `(row, col)`, or `None` when the row is shorter than `col + 1`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Every present cell of column `col`, in row order. Short rows contribute nothing.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.get(col).map(String::as_str))
    }
}

/// min/max/avg/sum over the numeric subset of a column.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub sum: f64,
    /// Size of the numeric subset `avg` was divided by.
    pub count: usize,
}

/// Values of one column that parsed as numbers, with their statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    pub name: String,
    /// Header position the values were read from.
    pub index: usize,
    pub values: Vec<f64>,
    pub stats: ColumnStats,
}

/// Per-header report figures: raw entry counts plus numeric stats when applicable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Present, non-empty raw cells.
    pub entries: usize,
    /// Distinct raw strings among those entries.
    pub unique_values: usize,
    pub stats: Option<ColumnStats>,
}

impl ColumnProfile {
    pub fn is_numeric(&self) -> bool {
        self.stats.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Line, word and character counts for a plain-text file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextSummary {
    pub line_count: usize,
    pub word_count: usize,
    pub char_count: usize,
    pub avg_words_per_line: f64,
    pub top_words: Vec<WordCount>,
}
