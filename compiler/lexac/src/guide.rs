//! The vocabulary guide printed by `lexa guide`.

use std::fmt::Write;

use lexa_lexer::vocab::{KEYWORDS, OPERATORS, PUNCTUATION};
use lexa_lexer::TokenKind;

fn describe(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword => "reserved words of the language",
        TokenKind::Identifier => "names made of letters, digits and underscores",
        TokenKind::Operator => "arithmetic, comparison, logical and assignment symbols",
        TokenKind::Number => "a digit followed by digits and dots",
        TokenKind::String => "text between matching double or single quotes",
        TokenKind::Comment => "`//` to the end of the line",
        TokenKind::Punctuation => "brackets, braces, parentheses, commas and semicolons",
    }
}

/// Render the guide: every kind with a description, then the keyword,
/// operator and punctuation tables in match order.
pub fn render_guide() -> String {
    let mut out = String::from("Token kinds:\n");
    for kind in TokenKind::ALL {
        let _ = writeln!(out, "  {:<11}  {}", kind.label(), describe(kind));
    }

    out.push_str("\nKeywords:\n  ");
    out.push_str(&KEYWORDS.join(" "));
    out.push_str("\n\nOperators (longest first):\n  ");
    out.push_str(&OPERATORS.join(" "));
    out.push_str("\n\nPunctuation:\n  ");
    let punctuation: Vec<String> = PUNCTUATION.iter().map(char::to_string).collect();
    out.push_str(&punctuation.join(" "));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_every_kind() {
        let guide = render_guide();
        for kind in TokenKind::ALL {
            assert!(guide.contains(&format!("  {:<11}  ", kind.label())), "{kind}");
        }
    }

    #[test]
    fn tables_in_match_order() {
        let guide = render_guide();
        let lines: Vec<&str> = guide.lines().collect();
        assert_eq!(
            lines[lines.len() - 7..].to_vec(),
            vec![
                "  int float double char if else for while return void main print string",
                "",
                "Operators (longest first):",
                "  >= <= == != && || + - * / = > <",
                "",
                "Punctuation:",
                "  ( ) { } ; , [ ]",
            ]
        );
    }
}
