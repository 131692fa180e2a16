//! Line/word/char counts and word-frequency ranking for plain text.

use super::types::{TextSummary, WordCount};
use crate::utils::char_len;
use std::collections::HashMap;

/// Number of entries in the default frequency table.
pub const TOP_WORDS: usize = 10;

/// Tokens must be longer than this after normalisation to be counted.
const MIN_WORD_LEN: usize = 2;

/// Lower-case `token` and keep only `[a-z0-9]`. Returns `None` for tokens of
/// two characters or fewer after stripping.
pub fn normalize_token(token: &str) -> Option<String> {
    let word: String = token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    (word.len() > MIN_WORD_LEN).then_some(word)
}

/// Word counts that remember first-seen order for tie-breaking.
#[derive(Clone, Debug, Default)]
pub struct WordFrequencyTable {
    entries: Vec<WordCount>,
    positions: HashMap<String, usize>,
}

impl WordFrequencyTable {
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::default();
        for token in text.split_whitespace() {
            if let Some(word) = normalize_token(token) {
                table.add(word);
            }
        }
        table
    }

    pub fn add(&mut self, word: String) {
        if let Some(&pos) = self.positions.get(&word) {
            if let Some(entry) = self.entries.get_mut(pos) {
                entry.count += 1;
            }
            return;
        }
        self.positions.insert(word.clone(), self.entries.len());
        self.entries.push(WordCount { word, count: 1 });
    }

    pub fn count(&self, word: &str) -> usize {
        self.positions
            .get(word)
            .and_then(|&pos| self.entries.get(pos))
            .map_or(0, |e| e.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top `limit` words by descending count; ties keep first-seen order.
    pub fn ranked(&self, limit: usize) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        // stable: equal counts stay in insertion order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }
}

/// Number of `\n`-delimited segments, counting a trailing empty one. Empty text has no lines.
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

pub fn analyze(text: &str) -> TextSummary {
    analyze_with_limit(text, TOP_WORDS)
}

/// Like [`analyze`], with a custom frequency table size.
pub fn analyze_with_limit(text: &str, top_words: usize) -> TextSummary {
    let line_count = count_lines(text);
    let word_count = text.split_whitespace().count();
    let avg_words_per_line = if line_count == 0 {
        0.0
    } else {
        word_count as f64 / line_count as f64
    };

    let frequencies = WordFrequencyTable::from_text(text);
    tracing::debug!(
        lines = line_count,
        words = word_count,
        distinct = frequencies.len(),
        "Analysed text"
    );

    TextSummary {
        line_count,
        word_count,
        char_count: char_len(text),
        avg_words_per_line,
        top_words: frequencies.ranked(top_words),
    }
}
