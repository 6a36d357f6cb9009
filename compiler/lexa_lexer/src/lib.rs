//! Line-oriented scanner for the Lexa toy language.
//!
//! Converts source text into an ordered [`TokenList`]: keywords,
//! identifiers, operators, numbers, string literals, line comments, and
//! punctuation, each tagged with the 1-based line it starts on.
//!
//! Scanning is total. Every input produces a token list, and malformed
//! input (unterminated strings, odd numbers, stray characters) is absorbed
//! into ordinary tokens rather than reported as an error. Callers that want
//! to know about those recoveries use [`tokenize_with_diagnostics`].
//!
//! This crate knows nothing about rendering. Tools consume the token list
//! or provide a [`TokenSink`].
//!
//! ```
//! use lexa_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x = 10;");
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Number,
//!         TokenKind::Punctuation,
//!     ]
//! );
//! ```

mod cursor;
mod diagnostic;
mod scanner;
mod sink;
mod token;
pub mod vocab;

pub use cursor::LineCursor;
pub use diagnostic::{LexWarning, LexWarningKind};
pub use scanner::Scanner;
pub use sink::TokenSink;
pub use token::{Token, TokenKind, TokenList};

/// Scan `source` into a token list.
pub fn tokenize(source: &str) -> TokenList {
    let mut tokens = TokenList::new();
    tokenize_into(source, &mut tokens);
    tokens
}

/// Scan `source`, pushing each token into `sink` in source order.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_into<S: TokenSink + ?Sized>(source: &str, sink: &mut S) {
    for token in Scanner::new(source) {
        sink.push(token);
    }
}

/// Scan `source` and also collect a warning for every lenient recovery.
///
/// The token list is exactly what [`tokenize`] returns for the same input.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_with_diagnostics(source: &str) -> (TokenList, Vec<LexWarning>) {
    let mut scanner = Scanner::with_diagnostics(source);
    let tokens: TokenList = scanner.by_ref().collect();
    let warnings = scanner.take_warnings();
    tracing::debug!(
        tokens = tokens.len(),
        warnings = warnings.len(),
        "scan finished"
    );
    (tokens, warnings)
}
