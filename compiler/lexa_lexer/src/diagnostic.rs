//! Optional warnings for input the scanner absorbed leniently.
//!
//! The scanner never fails. When asked (see
//! [`Scanner::with_diagnostics`](crate::Scanner::with_diagnostics)), it
//! records a [`LexWarning`] each time it recovers from malformed input.
//! The token stream is identical whether or not warnings are collected.

use std::fmt;

/// A lenient recovery, located by line and column.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexWarning {
    /// 1-based line of the offending token.
    pub line: u32,
    /// 1-based column, counted in characters.
    pub column: u32,
    pub kind: LexWarningKind,
}

/// What the scanner recovered from.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexWarningKind {
    /// String literal with no closing quote on its line. The token runs to
    /// end of line.
    UnterminatedString { quote: char },
    /// Number with more than one `.` or a trailing `.`, kept verbatim.
    MalformedNumber { text: String },
    /// Character outside every lexical class, emitted as a one-character
    /// identifier.
    UnrecognizedChar { ch: char },
}

impl LexWarning {
    pub fn new(line: u32, column: u32, kind: LexWarningKind) -> Self {
        LexWarning { line, column, kind }
    }
}

impl fmt::Display for LexWarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexWarningKind::UnterminatedString { quote } => {
                write!(f, "unterminated string literal (missing closing {quote})")
            }
            LexWarningKind::MalformedNumber { text } => {
                write!(f, "malformed number literal \"{text}\"")
            }
            LexWarningKind::UnrecognizedChar { ch } => {
                write!(f, "unrecognized character {ch:?} treated as identifier")
            }
        }
    }
}

impl fmt::Display for LexWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.kind)
    }
}

/// Returns `true` for number runs that are not plain integers or decimals.
pub(crate) fn is_malformed_number(text: &str) -> bool {
    text.bytes().filter(|&b| b == b'.').count() > 1 || text.ends_with('.')
}
