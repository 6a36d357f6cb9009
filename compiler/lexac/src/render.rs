//! Text renderers for a scanned token list.
//!
//! Renderers only read the token list; they never rescan. Output is built
//! into a `String` so the CLI writes it in one call and tests compare it
//! directly. Color is a plain flag: when it is off no escape codes are
//! produced at all.

mod preview;
mod table;

use std::fmt::Write;

use colored::Colorize;
use lexa_lexer::{LexWarning, TokenKind, TokenList};

pub use preview::render_preview;
pub use table::render_table;

/// Which sections `render_report` produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub table: bool,
    pub preview: bool,
    pub summary: bool,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            table: true,
            preview: false,
            summary: false,
            color: false,
        }
    }
}

/// Render the selected sections, separated by blank lines.
pub fn render_report(tokens: &TokenList, options: &RenderOptions) -> String {
    let mut sections = Vec::new();
    if options.table {
        sections.push(render_table(tokens, options.color));
    }
    if options.preview {
        sections.push(render_preview(tokens, options.color));
    }
    if options.summary {
        sections.push(render_summary(tokens));
    }
    sections.join("\n")
}

/// Per-kind counts in [`TokenKind::ALL`] order, skipping kinds that never
/// occur.
pub fn render_summary(tokens: &TokenList) -> String {
    let mut out = String::from("Summary:\n");
    for kind in TokenKind::ALL {
        let count = tokens.count_of(kind);
        if count > 0 {
            let _ = writeln!(out, "  {:<11}  {count}", kind.label());
        }
    }
    out
}

/// One `warning:` line per recovered construct.
pub fn render_warnings(warnings: &[LexWarning]) -> String {
    let mut out = String::new();
    for warning in warnings {
        let _ = writeln!(out, "warning: {warning}");
    }
    out
}

/// Apply the fixed color for `kind`, or return `text` unchanged.
pub(crate) fn paint(text: &str, kind: TokenKind, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let styled = match kind {
        TokenKind::Keyword => text.magenta().bold(),
        TokenKind::Identifier => text.normal(),
        TokenKind::Operator => text.yellow(),
        TokenKind::Number => text.cyan(),
        TokenKind::String => text.green(),
        TokenKind::Comment => text.bright_black().italic(),
        TokenKind::Punctuation => text.white(),
    };
    styled.to_string()
}
