#![expect(clippy::unwrap_used)]
use super::*;

fn single_column(values: &[&str]) -> ParsedTable {
    ParsedTable::new(
        vec!["col".to_owned()],
        values.iter().map(|v| vec![(*v).to_owned()]).collect(),
    )
}

#[test]
fn test_mixed_column_stats_use_numeric_subset() {
    let table = single_column(&["1", "2", "x", "3"]);
    let numeric = columns::analyze(&table);
    let stats = numeric.stats("col").unwrap();

    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 3.0);
    assert_eq!(stats.sum, 6.0);
    assert_eq!(stats.avg, 2.0, "avg divides by numeric count, not row count");
    assert_eq!(numeric.get("col").unwrap().values, vec![1.0, 2.0, 3.0]);

    let profile = columns::profile_column(&table, 0);
    assert_eq!(profile.entries, 4);
    assert_eq!(profile.unique_values, 4);
}

#[test]
fn test_non_numeric_column_is_omitted() {
    let table = parser::parse_table("name,score\nann,10\nbob,n/a");
    let numeric = columns::analyze(&table);

    assert!(numeric.get("name").is_none());
    assert_eq!(numeric.len(), 1);
    assert_eq!(numeric.stats("score").unwrap().count, 1);
}

#[test]
fn test_empty_rows_yield_no_numeric_columns() {
    let table = parser::parse_table("a,b,c");
    assert!(columns::analyze(&table).is_empty());
    assert!(
        columns::profile_columns(&table)
            .iter()
            .all(|p| p.entries == 0 && p.stats.is_none())
    );
}

#[test]
fn test_short_rows_contribute_nothing() {
    let table = parser::parse_table("a,b\n1,2\n3\n5,6");
    let numeric = columns::analyze(&table);
    assert_eq!(numeric.get("b").unwrap().values, vec![2.0, 6.0]);
    assert_eq!(table.cell(1, 1), None);
}

#[test]
fn test_number_grammar() {
    assert_eq!(columns::parse_number(" -1.5 "), Some(-1.5));
    assert_eq!(columns::parse_number("+.5"), Some(0.5));
    assert_eq!(columns::parse_number("2e3"), Some(2000.0));
    assert_eq!(columns::parse_number("1,000"), None);
    assert_eq!(columns::parse_number("12abc"), None);
    assert_eq!(columns::parse_number("NaN"), None);
    assert_eq!(columns::parse_number("inf"), None);
    assert_eq!(columns::parse_number(""), None);
}

#[test]
fn test_duplicate_headers_last_write_wins_in_first_position() {
    let table = parser::parse_table("v,label,v\n1,a,10\n2,b,20");
    let numeric = columns::analyze(&table);

    assert_eq!(numeric.len(), 1);
    let v = numeric.first().unwrap();
    assert_eq!(v.index, 2);
    assert_eq!(v.stats.sum, 30.0);

    // per-index profiles keep both
    let profiles = columns::profile_columns(&table);
    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles.first().unwrap().stats.unwrap().sum, 3.0);
}

#[test]
fn test_label_column_is_first_with_non_numeric_cell() {
    let table = parser::parse_table("id,city,temp\n1,Oslo,3\n2,Rome,18");
    assert_eq!(columns::label_column(&table), Some(1));

    let all_numeric = parser::parse_table("x,y\n1,2\n3,4");
    assert_eq!(columns::label_column(&all_numeric), None);
}

#[test]
fn test_word_frequency_ties_keep_first_seen_order() {
    let summary = lexical::analyze("the the cat sat on the mat");
    let words: Vec<(&str, usize)> = summary
        .top_words
        .iter()
        .map(|w| (w.word.as_str(), w.count))
        .collect();

    assert_eq!(words, vec![("the", 3), ("cat", 1), ("sat", 1), ("mat", 1)]);
}

#[test]
fn test_word_normalisation() {
    assert_eq!(lexical::normalize_token("Hello,"), Some("hello".to_owned()));
    assert_eq!(lexical::normalize_token("It's"), Some("its".to_owned()));
    assert_eq!(lexical::normalize_token("a1"), None);
    assert_eq!(lexical::normalize_token("--"), None);
    assert_eq!(lexical::normalize_token("Café"), Some("caf".to_owned()));
}

#[test]
fn test_top_words_capped_at_ten() {
    let text = (0..15).map(|i| format!("word{i:02}")).collect::<Vec<_>>().join(" ");
    let summary = lexical::analyze(&text);
    assert_eq!(summary.top_words.len(), 10);
    assert_eq!(summary.top_words.first().unwrap().word, "word00");
}

#[test]
fn test_text_counts() {
    let summary = lexical::analyze("one two\nthree\n");
    assert_eq!(summary.line_count, 3, "trailing newline adds an empty segment");
    assert_eq!(summary.word_count, 3);
    assert_eq!(summary.char_count, 14);
    assert_eq!(summary.avg_words_per_line, 1.0);
}

#[test]
fn test_empty_text_average_is_zero() {
    let summary = lexical::analyze("");
    assert_eq!(summary.line_count, 0);
    assert_eq!(summary.avg_words_per_line, 0.0);
    assert!(summary.top_words.is_empty());
}
