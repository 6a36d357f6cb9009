//! Color-annotated reconstruction of the source.

use lexa_lexer::TokenList;

use super::paint;

/// Render tokens back into source lines.
///
/// Each token is written followed by one space. When a token starts on a
/// later line than the previous one, one newline per line crossed is
/// emitted first, so blank source lines survive. Spacing within a source
/// line is not preserved.
pub fn render_preview(tokens: &TokenList, color: bool) -> String {
    if tokens.is_empty() {
        return "No code to preview.\n".to_string();
    }

    let mut out = String::new();
    let mut current_line = 1;
    for token in tokens {
        if token.line > current_line {
            for _ in current_line..token.line {
                out.push('\n');
            }
            current_line = token.line;
        }
        out.push_str(&paint(&token.text, token.kind, color));
        out.push(' ');
    }
    out.push('\n');
    out
}
