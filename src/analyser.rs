//! Tabular and lexical analysis of uploaded text.
//!
//! - [`parser`]: line-by-line delimited-text tokenising into a [`ParsedTable`]
//! - [`columns`]: numeric inference and [`ColumnStats`] per column
//! - [`lexical`]: line/word/char counts and ranked word frequencies
//!
//! Everything here is pure and in-memory; nothing fails on malformed input.
//!
//! ```
//! use datareport::analyser::{columns, parser};
//!
//! let table = parser::parse_table("item,qty\napple,3\npear,x\nfig,5");
//! let numeric = columns::analyze(&table);
//! let qty = numeric.stats("qty").expect("qty is numeric");
//! assert_eq!(qty.sum, 8.0);
//! assert_eq!(qty.avg, 4.0);
//! ```

pub mod columns;
pub mod lexical;
pub mod parser;
pub mod types;

pub use columns::NumericColumns;
pub use lexical::WordFrequencyTable;
pub use types::{ColumnProfile, ColumnStats, NumericColumn, ParsedTable, TextSummary, WordCount};

#[cfg(test)]
mod tests;
