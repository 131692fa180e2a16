//! Line-oriented delimited-text parsing.
//!
//! A double quote toggles "inside quotes" and is never kept; commas inside
//! quotes are literal. There is no escaped-quote handling and no multi-line
//! record support. An unterminated quote swallows the rest of the line into
//! the last field instead of failing.

use super::types::ParsedTable;

/// Split one line into trimmed fields.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_owned());

    fields
}

/// Parse file content into a header row and data rows.
///
/// Surrounding whitespace of the whole content is dropped first, so trailing
/// newlines do not produce phantom rows. Interior blank lines are kept as
/// single-empty-field rows.
pub fn parse_table(content: &str) -> ParsedTable {
    let mut lines = content.trim().split('\n').map(parse_line);
    let headers = lines.next().unwrap_or_default();
    let rows = lines.collect();

    ParsedTable::new(headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_comma_stays_in_field() {
        assert_eq!(parse_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_unterminated_quote_absorbs_rest() {
        assert_eq!(parse_line(r#""unterminated,field"#), vec!["unterminated,field"]);
    }

    #[test]
    fn test_doubled_quotes_are_not_an_escape() {
        assert_eq!(parse_line(r#"say ""hi"", there"#), vec!["say hi", "there"]);
    }

    #[test]
    fn test_fields_are_trimmed_and_trailing_empty_kept() {
        assert_eq!(parse_line("  x , y ,"), vec!["x", "y", ""]);
        assert_eq!(parse_line(""), vec![""]);
    }

    #[test]
    fn test_crlf_content() {
        let table = parse_table("name,score\r\nann,3\r\nbob,4\r\n");
        assert_eq!(table.headers, vec!["name", "score"]);
        assert_eq!(table.rows, vec![vec!["ann", "3"], vec!["bob", "4"]]);
    }

    #[test]
    fn test_header_only_table() {
        let table = parse_table("a,b\n");
        assert_eq!(table.headers, vec!["a", "b"]);
        assert!(table.rows.is_empty());
    }
}
