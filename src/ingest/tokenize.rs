// src/ingest/tokenize.rs
use tracing::trace;

/// Split raw CSV text into rows of fields.
///
/// Comma-delimited, double-quote-escaped dialect only:
/// - `""` inside a quoted field unescapes to a literal quote
/// - `,` and line terminators inside quotes are literal characters
/// - `\n`, `\r\n` and lone `\r` all terminate a row outside quotes
/// - a leading byte-order-mark is stripped
/// - rows whose fields are all empty (blank lines) are dropped
///
/// Total over all inputs: malformed quoting never fails, an unterminated
/// quote absorbs the rest of the text into the final field.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    chars.next();
                    cur.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut cur));
            }
            '\r' | '\n' if !in_quotes => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut cur));
                push_row(&mut rows, &mut row);
            }
            _ => cur.push(c),
        }
    }

    // flush the in-progress field/row at end of input
    if !cur.is_empty() || !row.is_empty() {
        row.push(cur);
        push_row(&mut rows, &mut row);
    }

    trace!(rows = rows.len(), "tokenized");
    rows
}

/// Push `row` unless every field is empty (blank-line suppression).
fn push_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.iter().any(|f| !f.is_empty()) {
        rows.push(std::mem::take(row));
    } else {
        row.clear();
    }
}

/// Render rows back to CSV text with canonical quoting: a field is quoted
/// iff it contains a comma, quote or line terminator, interior quotes are
/// doubled, rows end with `\n`. Inverse of [`tokenize`] for its own output.
pub fn render(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let needs_quotes = field
                .chars()
                .any(|c| matches!(c, '"' | ',' | '\n' | '\r'));
            if needs_quotes {
                out.push('"');
                out.push_str(&field.replace('"', "\"\""));
                out.push('"');
            } else {
                out.push_str(field);
            }
        }
        out.push('\n');
    }
    out
}
