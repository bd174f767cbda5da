use crate::models::Record;

/// Parse comma separated key/value lines.
///
/// Lines break on `\n`, `\r`, `\r\n`, form feed, NEL, and the Unicode line and
/// paragraph separators. Empty lines are dropped and empty segments between
/// commas collapse. The first token is the key, the second the value;
/// anything after the second token is ignored. Quoting is not supported.
///
/// A line with fewer than two tokens keeps the missing ones as absent fields:
/// `"a"` gives `(a, None)` and `",,"` gives `(None, None)`.
pub fn parse_csv(content: &str) -> Vec<Record> {
    // `\r\n` splits into a line and an empty one, which is dropped below
    content
        .split(is_line_break)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut tokens = line.split(',').filter(|token| !token.is_empty());
            let key = tokens.next().map(str::to_string);
            let value = tokens.next().map(str::to_string);
            Record::new(key, value)
        })
        .collect()
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}
