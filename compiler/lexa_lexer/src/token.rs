//! Token types produced by the scanner.
//!
//! A [`Token`] is an owned, immutable record of one lexical unit: its
//! [`TokenKind`], the exact text consumed from the source, and the 1-based
//! line it starts on. [`TokenList`] is the ordered output of one scan.

use std::fmt;
use std::ops::Deref;

/// Classification of a token.
///
/// Closed set: every token falls into exactly one of these kinds. There is
/// deliberately no error kind; characters the scanner does not recognize
/// are reported as one-character [`TokenKind::Identifier`] tokens.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Reserved word from [`KEYWORDS`](crate::vocab::KEYWORDS).
    Keyword,
    /// Name, or the single-character fallback for unrecognized input.
    Identifier,
    /// Entry from [`OPERATORS`](crate::vocab::OPERATORS).
    Operator,
    /// Run of ASCII digits and dots: `10`, `3.14`, `1.2.3`.
    Number,
    /// Quoted literal, `"..."` or `'...'`, possibly unterminated.
    String,
    /// `//` line comment, running to end of line.
    Comment,
    /// Entry from [`PUNCTUATION`](crate::vocab::PUNCTUATION).
    Punctuation,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 7] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Punctuation,
    ];

    /// Lowercase label used by renderers (`"keyword"`, `"number"`, ...).
    pub const fn label(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified token with the line it came from.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text, including quotes for string literals.
    pub text: String,
    /// 1-based line number.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Length of the token text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always `false` for scanner output; every token consumes input.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.line)
    }
}

/// Ordered tokens from one scan.
///
/// Tokens appear in source order: non-decreasing `line`, left to right
/// within a line.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create from a Vec of tokens.
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Consume the list, returning the underlying Vec.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of tokens of the given kind.
    pub fn count_of(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }

    /// Group tokens by line.
    ///
    /// Yields `(line, tokens)` for each line that produced at least one
    /// token, in order. Lines without tokens are skipped, so consumers that
    /// reconstruct layout must compare consecutive line numbers.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &[Token])> {
        self.tokens
            .chunk_by(|a, b| a.line == b.line)
            .map(|chunk| (chunk[0].line, chunk))
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl Deref for TokenList {
    type Target = [Token];

    #[inline]
    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
