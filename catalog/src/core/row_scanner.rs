//! CSV row scanner
//!
//! A two-state machine consuming one character at a time. Commas split
//! fields only outside quotes; a doubled quote inside quotes is a literal
//! quote character.

/// Scanner position relative to quoting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    Quoted,
}

/// Split a feed body into logical lines.
///
/// Surrounding whitespace of the whole body is dropped first so a trailing
/// newline does not produce a blank final line. Both `\n` and `\r\n` endings
/// are accepted.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.trim()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Parse one line into its field values
pub fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match (state, ch) {
            (ScanState::Quoted, '"') => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    state = ScanState::Unquoted;
                }
            }
            (ScanState::Quoted, other) => current.push(other),
            (ScanState::Unquoted, '"') => state = ScanState::Quoted,
            (ScanState::Unquoted, ',') => {
                fields.push(clean_field(&current, false));
                current.clear();
            }
            (ScanState::Unquoted, other) => current.push(other),
        }
    }

    fields.push(clean_field(&current, state == ScanState::Quoted));
    fields
}

/// Trim a raw field; unterminated quoting also loses one stray quote at each edge
fn clean_field(raw: &str, unterminated: bool) -> String {
    let trimmed = raw.trim();
    if !unterminated {
        return trimmed.to_string();
    }
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(parse_row("A,Math,T1,,http://x/t1.pdf"), vec!["A", "Math", "T1", "", "http://x/t1.pdf"]);
    }

    #[test]
    fn test_quoted_comma_is_literal() {
        assert_eq!(parse_row(r#"A,"a, b",T"#), vec!["A", "a, b", "T"]);
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        assert_eq!(parse_row(r#""say ""hi""""#), vec![r#"say "hi""#]);
        assert_eq!(parse_row(r#"x,"He said ""no"" twice",y"#), vec!["x", r#"He said "no" twice"#, "y"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(parse_row("  A , Math ,\tT1 "), vec!["A", "Math", "T1"]);
        assert_eq!(parse_row(r#" "a, b" ,c"#), vec!["a, b", "c"]);
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(parse_row(""), vec![""]);
        assert_eq!(parse_row(",,"), vec!["", "", ""]);
        assert_eq!(parse_row(r#""","""#), vec!["", ""]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest_of_line() {
        let fields = parse_row(r#"A,"Math,T1"#);
        assert_eq!(fields, vec!["A", "Math,T1"]);
    }

    #[test]
    fn test_unterminated_quote_strips_stray_edge_quote() {
        let fields = parse_row(r#"A,"abc"""#);
        assert_eq!(fields, vec!["A", "abc"]);
    }

    #[test]
    fn test_split_lines_handles_both_endings() {
        let lines = split_lines("h1,h2\r\na,b\nc,d\r\n");
        assert_eq!(lines, vec!["h1,h2", "a,b", "c,d"]);
    }

    #[test]
    fn test_split_lines_keeps_interior_blank_lines() {
        let lines = split_lines("header\n\nrow\n\n");
        assert_eq!(lines, vec!["header", "", "row"]);
    }

    #[test]
    fn test_split_lines_on_empty_body() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("\r\n\n"), vec![""]);
    }
}
