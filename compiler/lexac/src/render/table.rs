//! Token table: one row per token.

use std::borrow::Cow;
use std::fmt::Write;

use lexa_lexer::TokenList;

use super::paint;

const HEADERS: [&str; 5] = ["#", "Token", "Type", "Value", "Line"];
const GAP: &str = "  ";

/// Render the token table.
///
/// Columns: 1-based index, raw text, kind label, text in double quotes,
/// line. Columns are padded to the widest cell; the last column is not.
/// Control characters in token text (a `\r` kept from CRLF input, a tab
/// inside a comment) are shown escaped so every row stays on one line.
pub fn render_table(tokens: &TokenList, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tokens: {}", tokens.len());
    out.push('\n');
    if tokens.is_empty() {
        out.push_str("No tokens.\n");
        return out;
    }

    let index_width = tokens.len().to_string().len().max(HEADERS[0].len());
    let cells: Vec<Cow<'_, str>> = tokens.iter().map(|t| escape_controls(&t.text)).collect();
    let text_width = column_width(HEADERS[1], cells.iter().map(|c| c.chars().count()));
    let kind_width = column_width(HEADERS[2], tokens.iter().map(|t| t.kind.label().len()));
    let value_width = column_width(HEADERS[3], cells.iter().map(|c| c.chars().count() + 2));

    let widths = [index_width, text_width, kind_width, value_width];
    for (header, width) in HEADERS.iter().zip(widths) {
        let _ = write!(out, "{header:<width$}{GAP}");
    }
    let _ = writeln!(out, "{}", HEADERS[4]);
    for (header, width) in HEADERS.iter().zip(widths) {
        let _ = write!(out, "{}{GAP}", "-".repeat(width.max(header.len())));
    }
    let _ = writeln!(out, "{}", "-".repeat(HEADERS[4].len()));

    for (index, (token, text)) in tokens.iter().zip(&cells).enumerate() {
        let kind = paint(
            &format!("{:<kind_width$}", token.kind.label()),
            token.kind,
            color,
        );
        let value = format!("\"{text}\"");
        let _ = writeln!(
            out,
            "{:<index_width$}{GAP}{:<text_width$}{GAP}{kind}{GAP}{value:<value_width$}{GAP}{}",
            index + 1,
            text,
            token.line,
        );
    }
    out
}

/// Escape control characters, leaving everything else as written.
fn escape_controls(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_debug());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.fold(header.len(), usize::max)
}
