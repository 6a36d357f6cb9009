//! Line-by-line scanner producing classified tokens.
//!
//! # Design
//!
//! The source is split on `\n` and each line gets a fresh [`LineCursor`].
//! At every position the rules below are tried in order and the first match
//! wins; category order is the tie-break, not match length:
//!
//! 1. whitespace, per [`is_whitespace`](crate::vocab::is_whitespace) (skipped)
//! 2. `//` line comment (absorbs the rest of the line)
//! 3. `"` or `'` literal (unterminated literals absorb the rest of the line)
//! 4. number: ASCII digit, then digits and dots
//! 5. operator, first prefix match from [`OPERATORS`](crate::vocab::OPERATORS)
//! 6. punctuation
//! 7. identifier or keyword
//! 8. fallback: any other character is a one-character identifier
//!
//! Every rule consumes at least one character, so scanning a line of `n`
//! characters takes at most `n` steps.

use tracing::trace;

use crate::cursor::LineCursor;
use crate::diagnostic::{is_malformed_number, LexWarning, LexWarningKind};
use crate::vocab;
use crate::{Token, TokenKind};

/// Lazy scanner over a whole source string.
///
/// Yields tokens in source order. Built by [`tokenize`](crate::tokenize)
/// and friends; use it directly to stop early or interleave other work.
pub struct Scanner<'a> {
    /// Lines not yet started. `None` once the final line has been taken.
    remaining: Option<&'a str>,
    cursor: LineCursor<'a>,
    /// 1-based number of the line under `cursor`; 0 before the first line.
    line: u32,
    /// Collected warnings, when enabled.
    warnings: Option<Vec<LexWarning>>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner that does not collect warnings.
    pub fn new(source: &'a str) -> Self {
        Scanner {
            remaining: Some(source),
            cursor: LineCursor::new(""),
            line: 0,
            warnings: None,
        }
    }

    /// Create a scanner that records a [`LexWarning`] for each lenient
    /// recovery. Tokens are unaffected.
    pub fn with_diagnostics(source: &'a str) -> Self {
        Scanner {
            warnings: Some(Vec::new()),
            ..Scanner::new(source)
        }
    }

    /// Drain the warnings recorded so far.
    ///
    /// Always empty for a scanner built with [`Scanner::new`].
    pub fn take_warnings(&mut self) -> Vec<LexWarning> {
        self.warnings.as_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Move the cursor to the next line. Returns `false` when the source is
    /// exhausted.
    fn next_line(&mut self) -> bool {
        let Some(rest) = self.remaining else {
            return false;
        };
        let line = match memchr::memchr(b'\n', rest.as_bytes()) {
            Some(end) => {
                self.remaining = Some(&rest[end + 1..]);
                &rest[..end]
            }
            None => {
                self.remaining = None;
                rest
            }
        };
        self.line = self.line.saturating_add(1);
        self.cursor = LineCursor::new(line);
        trace!(line = self.line, len = line.len(), "scanning line");
        true
    }

    /// Scan the next token on the current line, or `None` at end of line.
    fn next_on_line(&mut self) -> Option<Token> {
        loop {
            let c = self.cursor.current_char()?;
            let start = self.cursor.pos();
            if vocab::is_whitespace(c) {
                self.cursor.advance_char();
                continue;
            }
            return Some(match c {
                '/' if self.cursor.peek() == b'/' => self.line_comment(start),
                '"' | '\'' => self.string(start, c),
                '0'..='9' => self.number(start),
                _ => {
                    if let Some(op) = vocab::match_operator(self.cursor.rest()) {
                        self.cursor.advance_n(op.len());
                        self.token(TokenKind::Operator, start)
                    } else if vocab::is_punctuation(c) {
                        self.cursor.advance();
                        self.token(TokenKind::Punctuation, start)
                    } else if vocab::is_ident_start(self.cursor.current()) {
                        self.identifier(start)
                    } else {
                        self.unrecognized(start, c)
                    }
                }
            });
        }
    }

    // ─── Rules ─────────────────────────────────────────────────────

    fn line_comment(&mut self, start: usize) -> Token {
        self.cursor.eat_to_end();
        self.token(TokenKind::Comment, start)
    }

    fn string(&mut self, start: usize, quote: char) -> Token {
        self.cursor.advance(); // opening quote
        let needle = if quote == '"' { b'"' } else { b'\'' };
        match self.cursor.find_byte(needle) {
            Some(offset) => self.cursor.advance_n(offset + 1),
            None => {
                self.cursor.eat_to_end();
                self.warn(start, LexWarningKind::UnterminatedString { quote });
            }
        }
        self.token(TokenKind::String, start)
    }

    fn number(&mut self, start: usize) -> Token {
        self.cursor.eat_while(vocab::is_number_continue);
        let token = self.token(TokenKind::Number, start);
        if self.warnings.is_some() && is_malformed_number(&token.text) {
            let text = token.text.clone();
            self.warn(start, LexWarningKind::MalformedNumber { text });
        }
        token
    }

    fn identifier(&mut self, start: usize) -> Token {
        self.cursor.eat_while(vocab::is_ident_continue);
        let kind = if vocab::is_keyword(self.cursor.slice_from(start)) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.token(kind, start)
    }

    fn unrecognized(&mut self, start: usize, ch: char) -> Token {
        self.cursor.advance_char();
        self.warn(start, LexWarningKind::UnrecognizedChar { ch });
        self.token(TokenKind::Identifier, start)
    }

    // ─── Helpers ───────────────────────────────────────────────────

    /// Build a token spanning `start` to the cursor.
    #[inline]
    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, self.cursor.slice_from(start), self.line)
    }

    fn warn(&mut self, start: usize, kind: LexWarningKind) {
        if let Some(warnings) = self.warnings.as_mut() {
            let column = self.cursor.column_of(start);
            warnings.push(LexWarning::new(self.line, column, kind));
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.next_on_line() {
                return Some(token);
            }
            if !self.next_line() {
                return None;
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
